//! Calendar-date rules for release/revision dates.
//!
//! Dates travel as `YYYY-MM-DD`. The backend may also hand back full RFC 3339
//! timestamps; those are reduced to their UTC calendar date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{DomainError, DomainResult};

/// Format used by date inputs and on the wire.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing dates in the product table.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a date as typed into a form or returned by the backend.
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, INPUT_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|e| DomainError::invalid_date(format!("{value:?}: {e}")))
}

/// Render a date the way date inputs expect it.
pub fn format_input(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Render a date for display (`dd/mm/yyyy`).
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Same month and day, one year later.
///
/// February 29 has no counterpart in the following year and rolls over to
/// March 1.
pub fn add_one_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// True iff `revision` is exactly one year after `release`.
pub fn is_one_year_after(release: NaiveDate, revision: NaiveDate) -> bool {
    add_one_year(release) == revision
}

/// String-level variant of [`is_one_year_after`] used against raw form values.
///
/// Empty or unparseable inputs never match.
pub fn revision_matches(release: &str, revision: &str) -> bool {
    if release.is_empty() || revision.is_empty() {
        return false;
    }
    match (parse_date(release), parse_date(revision)) {
        (Ok(release), Ok(revision)) => is_one_year_after(release, revision),
        _ => false,
    }
}

/// Serde adapter for `NaiveDate` fields on the wire.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_input(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
