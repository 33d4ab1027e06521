/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Exchange timestamp codec
//!
//! The exchange stamps order books, fills and orders with ISO-8601 offset
//! date-times carrying up to nanosecond precision, e.g.
//! `2015-12-04T09:02:16.680986205Z`. Values are kept as
//! `DateTime<FixedOffset>` so the original offset survives a round trip.
//!
//! Use the module directly with serde:
//!
//! ```rust
//! use serde::Deserialize;
//! use stockfighter_client::model::timestamp::Timestamp;
//!
//! #[derive(Deserialize)]
//! struct Stamped {
//!     #[serde(with = "stockfighter_client::model::timestamp")]
//!     ts: Timestamp,
//! }
//!
//! let s: Stamped = serde_json::from_str(r#"{"ts":"2015-12-04T09:02:16.680986205Z"}"#).unwrap();
//! assert_eq!(s.ts.timestamp(), 1449219736);
//! ```

use crate::error::AppError;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serializer};

/// Timestamp with the UTC offset it was reported in
pub type Timestamp = DateTime<FixedOffset>;

/// Parses an exchange timestamp
///
/// # Errors
/// [`AppError::MalformedTimestamp`] when `value` is not an offset date-time.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map_err(|_| AppError::MalformedTimestamp(value.to_string()))
}

/// Formats a timestamp the way the exchange does: `Z` for UTC, otherwise `±hh:mm`,
/// with as many fractional digits as needed (0, 3, 6 or 9)
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serializes a timestamp with [`format_timestamp`]
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Deserializes a timestamp with [`parse_timestamp`]
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Same codec for optional (nullable or absent) timestamps
pub mod option {
    use super::{Timestamp, format_timestamp, parse_timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `None` as `null`
    pub fn serialize<S>(ts: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => serializer.serialize_some(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `null` as `None`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
