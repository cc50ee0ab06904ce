// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Vitals-Tracker: body-state snapshot tracking
//!
//! This crate provides the backend API for recording user body profiles
//! and point-in-time snapshots with derived BMI, BMR, and TDEE metrics.

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::JsonDb;
use services::SnapshotService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: JsonDb,
    pub snapshot_service: SnapshotService,
}
