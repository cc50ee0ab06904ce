// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot creation service.
//!
//! Handles the core workflow:
//! 1. Load the owning profile (the user must exist)
//! 2. Resolve optional fields against the profile baseline
//! 3. Derive BMI, BMR and TDEE
//! 4. Persist the enriched record and return it

use crate::db::JsonDb;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{Snapshot, SnapshotRecord};
use crate::time_utils::now_rfc3339;

/// Hard default when neither the snapshot nor the profile names a level.
const DEFAULT_ACTIVITY_LEVEL: &str = "sedentary";

/// Caller-supplied snapshot fields before resolution and enrichment.
#[derive(Debug, Clone, Default)]
pub struct NewSnapshot {
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub activity_level: Option<String>,
    pub sleep_hours: Option<f64>,
    pub calories_intake: Option<f64>,
    pub notes: Option<String>,
    pub timestamp: Option<String>,
}

/// Turns snapshot input into persisted, metric-enriched records.
#[derive(Clone)]
pub struct SnapshotService {
    db: JsonDb,
}

impl SnapshotService {
    pub fn new(db: JsonDb) -> Self {
        Self { db }
    }

    /// Create a snapshot for `user_id`.
    ///
    /// Missing height and activity level are inherited from the profile
    /// as it stands right now; later profile state never rewrites a
    /// persisted snapshot. Nothing is persisted on any error path.
    pub async fn create_snapshot(&self, user_id: &str, input: NewSnapshot) -> Result<Snapshot> {
        let profile = self
            .db
            .get_profile(user_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let weight_kg = input.weight_kg;
        let height_cm = resolve_height(input.height_cm, profile.height_cm);
        let activity_level =
            resolve_activity_level(input.activity_level.as_deref(), &profile.activity_level);

        let age = metrics::age(profile.dob, chrono::Utc::now().date_naive());

        let bmi = metrics::bmi(weight_kg, height_cm).ok_or_else(|| {
            AppError::InvalidInput("height_cm must be positive to derive BMI".to_string())
        })?;
        let bmr = metrics::bmr(weight_kg, height_cm, age, &profile.sex);
        let tdee = metrics::tdee(bmr, &activity_level);

        // serde_json writes non-finite floats as null, which would poison
        // the table file on the next load. Persisted metrics must be finite.
        if !(bmi.is_finite() && bmr.is_finite() && tdee.is_finite()) {
            return Err(AppError::InvalidInput(
                "measurements out of range to derive finite metrics".to_string(),
            ));
        }

        let record = SnapshotRecord {
            user_id: user_id.to_string(),
            timestamp: resolve_timestamp(input.timestamp),
            weight_kg,
            height_cm,
            activity_level,
            sleep_hours: input.sleep_hours,
            calories_intake: input.calories_intake,
            notes: input.notes,
            bmi,
            bmr,
            tdee,
        };

        let snapshot = self.db.insert_snapshot(record).await?;

        tracing::info!(
            user_id = %user_id,
            snapshot_id = %snapshot.id,
            bmi,
            bmr,
            tdee,
            "Snapshot created"
        );

        Ok(snapshot)
    }

    /// All snapshots for `user_id`, ascending by timestamp.
    ///
    /// An unknown user is an error; a known user with no snapshots is an
    /// empty vec.
    pub async fn list_snapshots(&self, user_id: &str) -> Result<Vec<Snapshot>> {
        if !self.db.profile_exists(user_id).await {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(self.db.list_snapshots_for_user(user_id).await)
    }
}

/// Snapshot height wins when supplied; otherwise the profile baseline.
fn resolve_height(input: Option<f64>, profile_height_cm: f64) -> f64 {
    input.unwrap_or(profile_height_cm)
}

/// Explicit three-tier chain: snapshot value, then profile value, then
/// the hard default. Empty strings count as absent at both tiers.
fn resolve_activity_level(input: Option<&str>, profile_level: &str) -> String {
    if let Some(level) = input {
        if !level.is_empty() {
            return level.to_string();
        }
    }
    if !profile_level.is_empty() {
        return profile_level.to_string();
    }
    DEFAULT_ACTIVITY_LEVEL.to_string()
}

/// Caller timestamp when non-empty, otherwise the current UTC instant.
fn resolve_timestamp(input: Option<String>) -> String {
    match input {
        Some(ts) if !ts.is_empty() => ts,
        _ => now_rfc3339(),
    }
}
