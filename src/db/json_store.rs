// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat-file JSON store with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (keyed by user id)
//! - Snapshots (keyed by generated id, queried by owning user)
//!
//! Each table is one JSON object file under the data directory, mirrored
//! in memory behind its own `RwLock`. Writers hold the lock across the
//! whole mutate-serialize-persist step, so concurrent creations cannot
//! lose updates and readers never observe a torn file. Reads are served
//! from memory and take only the read lock.

use crate::db::tables;
use crate::error::AppError;
use crate::models::{NewProfile, Snapshot, SnapshotRecord, UserProfile};
use crate::time_utils::now_rfc3339;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// One keyed table: a JSON file plus its in-memory mirror.
struct Table<T> {
    path: PathBuf,
    rows: RwLock<HashMap<String, T>>,
}

impl<T> Table<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the table file, creating an empty one if it does not exist.
    async fn open(path: PathBuf) -> Result<Self, AppError> {
        let rows = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                AppError::Database(format!("Corrupt table file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tokio::fs::write(&path, "{}").await.map_err(|e| {
                    AppError::Database(format!(
                        "Failed to bootstrap table file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                HashMap::new()
            }
            Err(e) => {
                return Err(AppError::Database(format!(
                    "Failed to read table file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            rows: RwLock::new(rows),
        })
    }

    /// Serialize the whole table and atomically replace the backing file
    /// (write a sibling temp file, then rename).
    ///
    /// Callers must hold the write lock for the duration.
    async fn persist(&self, rows: &HashMap<String, T>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(rows)
            .map_err(|e| AppError::Database(format!("Failed to serialize table: {}", e)))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await.map_err(|e| {
            AppError::Database(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::Database(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

struct Inner {
    profiles: Table<UserProfile>,
    snapshots: Table<SnapshotRecord>,
}

/// Durable keyed store over two JSON table files.
#[derive(Clone)]
pub struct JsonDb {
    inner: Arc<Inner>,
}

impl JsonDb {
    /// Open the store under `data_dir`, bootstrapping the directory and
    /// any missing table files.
    pub async fn open(data_dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            AppError::Database(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let profiles = Table::open(data_dir.join(tables::USERS)).await?;
        let snapshots = Table::open(data_dir.join(tables::SNAPSHOTS)).await?;

        tracing::info!(path = %data_dir.display(), "Store opened");

        Ok(Self {
            inner: Arc::new(Inner {
                profiles,
                snapshots,
            }),
        })
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Persist a new profile, stamping `created_at` at call time.
    ///
    /// Fails with `Conflict` if the user id is already taken; the
    /// existing record is left untouched.
    pub async fn insert_profile(&self, new: NewProfile) -> Result<UserProfile, AppError> {
        let table = &self.inner.profiles;
        let mut rows = table.rows.write().await;

        if rows.contains_key(&new.user_id) {
            return Err(AppError::Conflict("user_id already exists".to_string()));
        }

        let profile = UserProfile {
            user_id: new.user_id,
            name: new.name,
            dob: new.dob,
            sex: new.sex,
            height_cm: new.height_cm,
            weight_kg: new.weight_kg,
            activity_level: new.activity_level,
            created_at: now_rfc3339(),
        };

        rows.insert(profile.user_id.clone(), profile.clone());
        if let Err(e) = table.persist(&rows).await {
            // Keep memory and disk in agreement on failure.
            rows.remove(&profile.user_id);
            return Err(e);
        }

        Ok(profile)
    }

    /// Get a profile by user id.
    pub async fn get_profile(&self, user_id: &str) -> Option<UserProfile> {
        self.inner.profiles.rows.read().await.get(user_id).cloned()
    }

    /// Existence check without copying the record out.
    pub async fn profile_exists(&self, user_id: &str) -> bool {
        self.inner.profiles.rows.read().await.contains_key(user_id)
    }

    // ─── Snapshot Operations ─────────────────────────────────────

    /// Persist an enriched snapshot record under a fresh id and return
    /// the stored snapshot unchanged.
    pub async fn insert_snapshot(&self, record: SnapshotRecord) -> Result<Snapshot, AppError> {
        let table = &self.inner.snapshots;
        let mut rows = table.rows.write().await;

        let id = uuid::Uuid::new_v4().to_string();
        rows.insert(id.clone(), record.clone());
        if let Err(e) = table.persist(&rows).await {
            rows.remove(&id);
            return Err(e);
        }

        Ok(Snapshot { id, record })
    }

    /// All snapshots owned by `user_id`, ascending by timestamp.
    ///
    /// Timestamps are ISO-8601 strings, so lexicographic order is
    /// chronological order; ties fall back to id order to keep repeated
    /// listings stable. Unknown users simply yield an empty vec.
    pub async fn list_snapshots_for_user(&self, user_id: &str) -> Vec<Snapshot> {
        let rows = self.inner.snapshots.rows.read().await;

        let mut snapshots: Vec<Snapshot> = rows
            .iter()
            .filter(|(_, record)| record.user_id == user_id)
            .map(|(id, record)| Snapshot {
                id: id.clone(),
                record: record.clone(),
            })
            .collect();

        snapshots.sort_by(|a, b| {
            a.record
                .timestamp
                .cmp(&b.record.timestamp)
                .then_with(|| a.id.cmp(&b.id))
        });

        snapshots
    }
}
