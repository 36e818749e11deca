//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, a resolved URL and the
//! [`AuthStrategy`](crate::AuthStrategy), performs one round trip and decodes
//! the response.

pub mod alerts;
mod form_params;
pub mod parsing;
pub mod request;
pub mod search;
pub mod service_url;
pub mod url_encoding;

pub(crate) use crate::form_params;

pub use alerts::{list_triggered_alerts, list_triggered_instances};
pub use parsing::{decode_json, extract_error_message};
pub use request::{SplunkRequest, check_status};
pub use search::{
    alert_form, create_alert, create_job, list_alert_names, normalize_query, remove_alert,
    retrieve_results,
};
pub use service_url::{
    FIRED_ALERTS_PATH, JOBS_PATH, SAVED_SEARCHES_PATH, job_results_url, resolve_service_url,
};
pub use url_encoding::encode_path_segment;
