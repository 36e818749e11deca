//! Alert models for saved searches and fired alerts.
//!
//! # What this module handles:
//! - The alert definition posted to `services/saved/searches/`
//! - Deserialization of the saved-search and fired-alert feeds
//!
//! # What this module does NOT handle:
//! - Form encoding of alert fields (see [`crate::endpoints::search::saved`])
//! - Direct HTTP API calls (see [`crate::endpoints::alerts`])

use serde::{Deserialize, Serialize};

/// An alert: a scheduled saved search with a trigger condition and actions.
///
/// Empty optional fields are not sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Alert {
    pub name: String,
    /// SPL query. A leading `search ` is added when missing.
    pub search: String,
    /// Comma-separated alert actions (e.g. `webhook`).
    pub actions: Option<String>,
    pub webhook_url: Option<String>,
    pub cron_schedule: Option<String>,
    pub alert_condition: Option<String>,
    pub description: Option<String>,
    /// Sent as `dispatch.earliest_time`.
    pub earliest_time: Option<String>,
    /// Sent as `dispatch.latest_time`.
    pub latest_time: Option<String>,
}

impl Alert {
    pub fn new(name: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: search.into(),
            ..Default::default()
        }
    }

    pub fn with_actions(mut self, actions: impl Into<String>) -> Self {
        self.actions = Some(actions.into());
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn with_cron_schedule(mut self, cron: impl Into<String>) -> Self {
        self.cron_schedule = Some(cron.into());
        self
    }

    pub fn with_alert_condition(mut self, condition: impl Into<String>) -> Self {
        self.alert_condition = Some(condition.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_time_bounds(
        mut self,
        earliest: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        self.earliest_time = Some(earliest.into());
        self.latest_time = Some(latest.into());
        self
    }
}

/// Saved-search feed entry. Only the name is kept.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AlertEntry {
    pub name: String,
}

/// Response to `GET services/saved/searches/`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlertList {
    #[serde(default)]
    pub entry: Vec<AlertEntry>,
}

impl AlertList {
    /// Alert names in feed order.
    pub fn into_names(self) -> Vec<String> {
        self.entry.into_iter().map(|e| e.name).collect()
    }
}

/// Navigation links attached to a fired-alert entry.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TriggeredAlertLinks {
    pub alternate: Option<String>,
    /// Relative link to the fired instances of this alert.
    pub list: Option<String>,
    pub remove: Option<String>,
    pub job: Option<String>,
    pub savedsearch: Option<String>,
}

/// Content of a fired-alert entry.
///
/// Group entries carry `triggered_alert_count`; instance entries carry the
/// originating `sid` and `trigger_time`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TriggeredAlertContent {
    pub sid: Option<String>,
    pub savedsearch_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub trigger_time: Option<u64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub triggered_alerts: Option<u64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub triggered_alert_count: Option<u64>,
}

/// A fired alert or fired alert instance.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TriggeredAlert {
    pub name: String,
    #[serde(default)]
    pub links: TriggeredAlertLinks,
    #[serde(default)]
    pub content: TriggeredAlertContent,
}

impl TriggeredAlert {
    /// Link to pass to `list_triggered_instances`.
    pub fn instances_link(&self) -> Option<&str> {
        self.links.list.as_deref()
    }
}

/// Response to `GET services/alerts/fired_alerts/`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TriggeredAlerts {
    #[serde(default)]
    pub entry: Vec<TriggeredAlert>,
}

/// Response to a fired-alert `list` link. Same feed shape as [`TriggeredAlerts`].
pub type TriggeredInstances = TriggeredAlerts;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_list_names_keep_feed_order() {
        let json = r#"{"entry": [{"name": "zeta"}, {"name": "alpha"}]}"#;
        let list: AlertList = serde_json::from_str(json).unwrap();
        assert_eq!(list.into_names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_triggered_alert_with_string_counts() {
        let json = r#"{
            "entry": [{
                "name": "High CPU",
                "links": {
                    "alternate": "/servicesNS/nobody/search/alerts/fired_alerts/High%20CPU",
                    "list": "/servicesNS/nobody/search/alerts/fired_alerts/High%20CPU"
                },
                "content": {"triggered_alert_count": "3"}
            }]
        }"#;
        let alerts: TriggeredAlerts = serde_json::from_str(json).unwrap();
        let alert = &alerts.entry[0];
        assert_eq!(alert.content.triggered_alert_count, Some(3));
        assert_eq!(
            alert.instances_link(),
            Some("/servicesNS/nobody/search/alerts/fired_alerts/High%20CPU")
        );
    }

    #[test]
    fn test_empty_feed() {
        let alerts: TriggeredAlerts = serde_json::from_str("{}").unwrap();
        assert!(alerts.entry.is_empty());
    }
}
