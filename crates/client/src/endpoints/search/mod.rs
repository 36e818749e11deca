//! Search job and saved search endpoints.
//!
//! This module provides low-level HTTP endpoints for Splunk search operations.
//!
//! # What this module handles:
//! - Search job creation and results
//! - Saved search (alert) management
//!
//! # What this module does NOT handle:
//! - High-level search operations (see [`crate::client::jobs`])
//! - Fired alerts (see [`crate::endpoints::alerts`])

pub mod jobs;
pub mod saved;

pub use jobs::{create_job, normalize_query, retrieve_results};
pub use saved::{alert_form, create_alert, list_alert_names, remove_alert};
