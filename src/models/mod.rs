// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod snapshot;

pub use profile::{NewProfile, UserProfile};
pub use snapshot::{Snapshot, SnapshotRecord};
