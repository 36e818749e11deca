//! Fired alert endpoints.
//!
//! # What this module handles:
//! - Listing fired alerts
//! - Listing the fired instances behind a fired alert's `list` link
//!
//! # What this module does NOT handle:
//! - Creating or deleting alerts (see [`crate::endpoints::search::saved`])

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::request::SplunkRequest;
use crate::error::Result;
use crate::models::{TriggeredAlerts, TriggeredInstances};

/// List fired alerts.
///
/// `fired_alerts_url` is the resolved fired alerts collection URL.
pub async fn list_triggered_alerts(
    client: &Client,
    fired_alerts_url: &str,
    auth: &AuthStrategy,
) -> Result<TriggeredAlerts> {
    debug!("Listing triggered alerts");

    SplunkRequest::get(client, fired_alerts_url, auth)
        .param("output_mode", "json")
        .send_json("triggered alerts")
        .await
}

/// List fired instances of one alert.
///
/// `instances_url` is the resolved URL of the alert's `list` link.
pub async fn list_triggered_instances(
    client: &Client,
    instances_url: &str,
    auth: &AuthStrategy,
) -> Result<TriggeredInstances> {
    debug!(url = %instances_url, "Listing triggered alert instances");

    SplunkRequest::get(client, instances_url, auth)
        .param("output_mode", "json")
        .send_json("triggered alert instances")
        .await
}
