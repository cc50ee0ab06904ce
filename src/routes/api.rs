// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for profiles and snapshots.

use crate::error::{AppError, Result};
use crate::models::{NewProfile, Snapshot, UserProfile};
use crate::services::NewSnapshot;
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Date-of-birth wire format (calendar date, no time component).
const DOB_FORMAT: &str = "%Y-%m-%d";

/// Profile and snapshot routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", get(get_user))
        .route(
            "/api/users/{user_id}/snapshots",
            get(list_snapshots).post(create_snapshot),
        )
}

// ─── User Profiles ───────────────────────────────────────────

/// Profile creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Calendar date, YYYY-MM-DD; parsed (and rejected) in the handler
    pub dob: String,
    pub sex: String,
    #[validate(range(exclusive_min = 0.0))]
    pub height_cm: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub weight_kg: f64,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

fn default_activity_level() -> String {
    "sedentary".to_string()
}

/// Profile view returned by the API: the schema fields plus the id,
/// without storage bookkeeping such as `created_at`.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub sex: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user_id.clone(),
            user_id: profile.user_id,
            name: profile.name,
            dob: profile.dob,
            sex: profile.sex,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            activity_level: profile.activity_level,
        }
    }
}

/// Create a user profile.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<ProfileResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let dob = NaiveDate::parse_from_str(&payload.dob, DOB_FORMAT)
        .map_err(|_| AppError::InvalidInput("dob must be a YYYY-MM-DD date".to_string()))?;

    let profile = state
        .db
        .insert_profile(NewProfile {
            user_id: payload.user_id,
            name: payload.name,
            dob,
            sex: payload.sex,
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
            activity_level: payload.activity_level,
        })
        .await?;

    tracing::info!(user_id = %profile.user_id, "User profile created");

    Ok(Json(profile.into()))
}

/// Get a user profile by id.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let profile = state
        .db
        .get_profile(&user_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    Ok(Json(profile.into()))
}

// ─── Snapshots ───────────────────────────────────────────────

/// Snapshot creation request. Fields left out inherit from the profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSnapshotRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub height_cm: Option<f64>,
    pub activity_level: Option<String>,
    pub sleep_hours: Option<f64>,
    pub calories_intake: Option<f64>,
    pub notes: Option<String>,
    pub timestamp: Option<String>,
}

/// Create a snapshot for a user.
async fn create_snapshot(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateSnapshotRequest>,
) -> Result<Json<Snapshot>> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let input = NewSnapshot {
        weight_kg: payload.weight_kg,
        height_cm: payload.height_cm,
        activity_level: payload.activity_level,
        sleep_hours: payload.sleep_hours,
        calories_intake: payload.calories_intake,
        notes: payload.notes,
        timestamp: payload.timestamp,
    };

    let snapshot = state
        .snapshot_service
        .create_snapshot(&user_id, input)
        .await?;

    Ok(Json(snapshot))
}

/// List a user's snapshots, ascending by timestamp.
async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Snapshot>>> {
    tracing::debug!(user_id = %user_id, "Fetching snapshots");

    let snapshots = state.snapshot_service.list_snapshots(&user_id).await?;

    Ok(Json(snapshots))
}
