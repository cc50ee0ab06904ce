// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-state snapshot model for storage and API.

use serde::{Deserialize, Serialize};

/// Snapshot fields as persisted in the snapshots table, keyed by the
/// generated snapshot id. Snapshots are append-only and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Owning profile (by id value only; there is no object reference)
    pub user_id: String,
    /// ISO-8601 timestamp; caller-supplied values are stored verbatim so
    /// lexicographic order is chronological order
    pub timestamp: String,
    /// Weight in kilograms (always explicit in the input)
    pub weight_kg: f64,
    /// Height in centimeters, resolved against the profile at creation
    pub height_cm: f64,
    /// Activity level, resolved against the profile at creation
    pub activity_level: String,
    /// Hours slept (unvalidated pass-through)
    pub sleep_hours: Option<f64>,
    /// Calories eaten (unvalidated pass-through)
    pub calories_intake: Option<f64>,
    /// Free-form note (unvalidated pass-through)
    pub notes: Option<String>,
    /// Body-mass index, computed at creation
    pub bmi: f64,
    /// Basal metabolic rate, computed at creation
    pub bmr: f64,
    /// Total daily energy expenditure, computed at creation
    pub tdee: f64,
}

/// A stored snapshot: the generated id plus the persisted record,
/// flattened into one JSON object for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    #[serde(flatten)]
    pub record: SnapshotRecord,
}
