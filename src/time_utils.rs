// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as an RFC3339 string, the format used for all stored
/// timestamps.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}
