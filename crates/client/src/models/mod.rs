//! Data models for Splunk API responses and request parameters.

pub mod alerts;
pub mod common;
pub mod jobs;

pub use alerts::{
    Alert, AlertEntry, AlertList, TriggeredAlert, TriggeredAlertContent, TriggeredAlertLinks,
    TriggeredAlerts, TriggeredInstances,
};
pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use jobs::{ExecMode, JobCreated, JobResults, OutputMode, ResultRow, SearchParameters};
