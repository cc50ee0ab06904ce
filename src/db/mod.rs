//! Database layer (JSON flat files).

pub mod json_store;

pub use json_store::JsonDb;

/// Table file names as constants.
pub mod tables {
    pub const USERS: &str = "users.json";
    pub const SNAPSHOTS: &str = "snapshots.json";
}
