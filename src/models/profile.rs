//! User profile model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User profile as persisted in the users table, keyed by `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Caller-supplied identifier (also the table key)
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Date of birth (serialized as YYYY-MM-DD)
    pub dob: NaiveDate,
    /// Compared case-insensitively against "male" for BMR; any other
    /// value takes the non-male branch
    pub sex: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// One of the fixed activity levels; unknown values are priced as
    /// sedentary downstream
    pub activity_level: String,
    /// When the profile was created (RFC 3339, stamped by the store)
    pub created_at: String,
}

/// Input for creating a profile. The store stamps `created_at`.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub sex: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
}
