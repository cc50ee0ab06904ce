// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{SecondsFormat, Utc};

/// Current UTC instant as RFC 3339 with a `Z` suffix.
///
/// Microsecond precision keeps server-assigned snapshot timestamps
/// distinct (and therefore totally ordered) under rapid creation.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
