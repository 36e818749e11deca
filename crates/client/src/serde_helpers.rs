//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for scalar fields.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - These helpers must not log or print values; errors should be generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;
use std::collections::BTreeMap;

use crate::models::ResultRow;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::U64(v) => v.to_string(),
            StringOrNumber::I64(v) => v.to_string(),
            StringOrNumber::F64(v) => v.to_string(),
            StringOrNumber::Bool(v) => v.to_string(),
        }
    }
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<U64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U64OrString::U64(v)) => Ok(Some(v)),
        Some(U64OrString::I64(v)) => Ok(Some(u64::try_from(v).map_err(D::Error::custom)?)),
        Some(U64OrString::String(s)) => Ok(Some(s.parse::<u64>().map_err(D::Error::custom)?)),
    }
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

/// Result rows whose values may be strings, numbers or booleans.
///
/// `null` values are dropped from the row. Multi-value fields (arrays) are rejected.
pub fn rows_from_string_or_number<'de, D>(deserializer: D) -> Result<Vec<ResultRow>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<BTreeMap<String, Option<StringOrNumber>>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v.into_string())))
                .collect()
        })
        .collect())
}
