//! Search job models for Splunk search API.
//!
//! # What this module handles:
//! - Search job parameters and their wire values
//! - Job creation and results response shapes
//!
//! # What this module does NOT handle:
//! - Query normalization (see [`crate::endpoints::search::jobs`])
//! - HTTP transport (see [`crate::endpoints::request`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::common::SplunkMessage;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Json,
    JsonCols,
    JsonRows,
    Xml,
    Csv,
    Raw,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputMode::Json => "json",
            OutputMode::JsonCols => "json_cols",
            OutputMode::JsonRows => "json_rows",
            OutputMode::Xml => "xml",
            OutputMode::Csv => "csv",
            OutputMode::Raw => "raw",
        };
        write!(f, "{}", s)
    }
}

/// Execution mode for search jobs.
///
/// `Blocking` makes the creation call return only once the job is done, so the
/// sid can be used to fetch results straight away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecMode {
    #[default]
    Blocking,
    Normal,
    Oneshot,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExecMode::Blocking => "blocking",
            ExecMode::Normal => "normal",
            ExecMode::Oneshot => "oneshot",
        };
        write!(f, "{}", s)
    }
}

/// Parameters for creating a search job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchParameters {
    /// SPL query. A leading `search ` is added when missing.
    pub query: String,
    pub output_mode: OutputMode,
    pub exec_mode: ExecMode,
    /// Inclusive lower time bound (e.g. `-24h`).
    pub earliest_time: Option<String>,
    /// Exclusive upper time bound (e.g. `now`).
    pub latest_time: Option<String>,
}

impl SearchParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_earliest_time(mut self, earliest: impl Into<String>) -> Self {
        self.earliest_time = Some(earliest.into());
        self
    }

    pub fn with_latest_time(mut self, latest: impl Into<String>) -> Self {
        self.latest_time = Some(latest.into());
        self
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn with_exec_mode(mut self, mode: ExecMode) -> Self {
        self.exec_mode = mode;
        self
    }
}

/// Response to `POST services/search/v2/jobs/`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JobCreated {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub sid: Option<String>,
}

/// One result row: field name to value.
///
/// Ordered by field name, so "first value" is well defined.
pub type ResultRow = BTreeMap<String, String>;

/// Response to `GET services/search/v2/jobs/{sid}/results`.
#[derive(Debug, Deserialize, Clone)]
pub struct JobResults {
    #[serde(default)]
    pub preview: bool,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub init_offset: Option<u64>,
    #[serde(default)]
    pub messages: Vec<SplunkMessage>,
    #[serde(deserialize_with = "crate::serde_helpers::rows_from_string_or_number")]
    pub results: Vec<ResultRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_values() {
        assert_eq!(OutputMode::default().to_string(), "json");
        assert_eq!(OutputMode::JsonRows.to_string(), "json_rows");
        assert_eq!(ExecMode::default().to_string(), "blocking");
        assert_eq!(ExecMode::Oneshot.to_string(), "oneshot");
    }

    #[test]
    fn test_search_parameters_defaults() {
        let params = SearchParameters::new("index=main | stats count");
        assert_eq!(params.output_mode, OutputMode::Json);
        assert_eq!(params.exec_mode, ExecMode::Blocking);
        assert!(params.earliest_time.is_none());
        assert!(params.latest_time.is_none());
    }

    #[test]
    fn test_job_results_accepts_numeric_values() {
        let json = r#"{
            "preview": false,
            "init_offset": 0,
            "messages": [],
            "fields": [{"name": "count"}],
            "results": [{"count": 1250, "host": "web-01"}]
        }"#;
        let results: JobResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.init_offset, Some(0));
        assert_eq!(results.results.len(), 1);
        assert_eq!(results.results[0]["count"], "1250");
        assert_eq!(results.results[0]["host"], "web-01");
    }

    #[test]
    fn test_job_results_requires_results_field() {
        let result = serde_json::from_str::<JobResults>(r#"{"preview": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_job_created_missing_sid() {
        let created: JobCreated = serde_json::from_str("{}").unwrap();
        assert!(created.sid.is_none());

        let created: JobCreated = serde_json::from_str(r#"{"sid": 10}"#).unwrap();
        assert_eq!(created.sid.as_deref(), Some("10"));
    }
}
