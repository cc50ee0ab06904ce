// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod snapshot;

pub use snapshot::{NewSnapshot, SnapshotService};
