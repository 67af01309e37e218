//! Conversions applied by builder setters before a value lands in a parameter
//! bag, and the query-string encoder shared by every endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::Serialize;
use std::fmt;

/// Serializes a parameter bag into a URL query string.
///
/// Unset (`None`) parameters are skipped by the bags themselves, so an empty
/// bag yields `None` rather than an empty string. Nested values cannot be
/// expressed as a query string and are an error.
pub fn encode_query<Q: Serialize>(
    params: &Q,
) -> Result<Option<String>, serde_urlencoded::ser::Error> {
    let query = serde_urlencoded::to_string(params)?;
    Ok(Some(query).filter(|query| !query.is_empty()))
}

/// Formats an instant the way the indexer expects `after-time`/`before-time`.
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Standard (padded) base64, as used for the `note-prefix` filter.
pub fn encode_bytes(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}
