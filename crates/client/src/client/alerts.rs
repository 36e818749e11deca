//! Alert-related API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Creating, removing and listing alerts (saved searches)
//! - Listing fired alerts and their instances
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::search::saved`] and [`crate::endpoints::alerts`])

use crate::client::SplunkClient;
use crate::endpoints::{self, FIRED_ALERTS_PATH, SAVED_SEARCHES_PATH};
use crate::error::Result;
use crate::models::{Alert, TriggeredAlerts, TriggeredInstances};

impl SplunkClient {
    /// Create an alert as a scheduled saved search.
    pub async fn create_alert(&self, alert: &Alert) -> Result<()> {
        let url = self.service_url(SAVED_SEARCHES_PATH);
        endpoints::create_alert(&self.http, &url, &self.auth, alert).await
    }

    /// Delete the saved search `name`.
    pub async fn remove_alert(&self, name: &str) -> Result<()> {
        let url = self.service_url(SAVED_SEARCHES_PATH);
        endpoints::remove_alert(&self.http, &url, &self.auth, name).await
    }

    /// List saved search names.
    pub async fn list_alert_names(&self) -> Result<Vec<String>> {
        let url = self.service_url(SAVED_SEARCHES_PATH);
        endpoints::list_alert_names(&self.http, &url, &self.auth).await
    }

    /// List fired alerts.
    pub async fn list_triggered_alerts(&self) -> Result<TriggeredAlerts> {
        let url = self.service_url(FIRED_ALERTS_PATH);
        endpoints::list_triggered_alerts(&self.http, &url, &self.auth).await
    }

    /// List fired instances behind a relative link such as a fired alert's
    /// `links.list`. A leading `/` is ignored.
    pub async fn list_triggered_instances(&self, link: &str) -> Result<TriggeredInstances> {
        let url = self.service_url(link.trim_start_matches('/'));
        endpoints::list_triggered_instances(&self.http, &url, &self.auth).await
    }
}
