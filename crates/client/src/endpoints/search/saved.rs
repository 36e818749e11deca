//! Saved search (alert) operations.
//!
//! # What this module handles:
//! - Creating alerts as scheduled saved searches
//! - Deleting saved searches by name
//! - Listing saved search names
//!
//! # What this module does NOT handle:
//! - Fired alert listing (see [`crate::endpoints::alerts`])
//! - Search job execution (see [`super::jobs`])

use reqwest::Client;
use tracing::debug;

use super::jobs::normalize_query;
use crate::auth::AuthStrategy;
use crate::endpoints::form_params;
use crate::endpoints::request::SplunkRequest;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{Alert, AlertList};

/// Form fields for creating `alert`. Blank optional fields are left out.
pub fn alert_form(alert: &Alert) -> Vec<(&'static str, String)> {
    let mut form: Vec<(&'static str, String)> = Vec::new();
    form_params! { form =>
        "output_mode" => required "json",
        "name" => required alert.name,
        "search" => required normalize_query(&alert.search),
        "actions" => nonempty alert.actions,
        "action.webhook.param.url" => nonempty alert.webhook_url,
        "cron_schedule" => nonempty alert.cron_schedule,
        "alert_condition" => nonempty alert.alert_condition,
        "description" => nonempty alert.description,
        "dispatch.earliest_time" => nonempty alert.earliest_time,
        "dispatch.latest_time" => nonempty alert.latest_time,
        "is_scheduled" => required 1,
        "alert_type" => required "custom",
        "alert.track" => required 1,
    }
    form
}

/// Create an alert.
///
/// `saved_searches_url` is the resolved saved searches collection URL.
pub async fn create_alert(
    client: &Client,
    saved_searches_url: &str,
    auth: &AuthStrategy,
    alert: &Alert,
) -> Result<()> {
    debug!(name = %alert.name, "Creating alert");

    SplunkRequest::post(client, saved_searches_url, auth)
        .params(alert_form(alert))
        .send()
        .await?;
    Ok(())
}

/// Delete a saved search by name.
pub async fn remove_alert(
    client: &Client,
    saved_searches_url: &str,
    auth: &AuthStrategy,
    name: &str,
) -> Result<()> {
    debug!(name = %name, "Removing alert");

    let url = format!("{}{}", saved_searches_url, encode_path_segment(name));
    SplunkRequest::delete(client, url, auth)
        .param("output_mode", "json")
        .send()
        .await?;
    Ok(())
}

/// List saved search names in feed order.
pub async fn list_alert_names(
    client: &Client,
    saved_searches_url: &str,
    auth: &AuthStrategy,
) -> Result<Vec<String>> {
    debug!("Listing alert names");

    let list: AlertList = SplunkRequest::get(client, saved_searches_url, auth)
        .param("output_mode", "json")
        .send_json("saved search list")
        .await?;
    Ok(list.into_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(form: &[(&'static str, String)]) -> Vec<&'static str> {
        form.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_minimal_alert_form() {
        let form = alert_form(&Alert::new("cpu", "index=os cpu>90"));
        assert_eq!(
            form,
            vec![
                ("output_mode", "json".to_string()),
                ("name", "cpu".to_string()),
                ("search", "search index=os cpu>90".to_string()),
                ("is_scheduled", "1".to_string()),
                ("alert_type", "custom".to_string()),
                ("alert.track", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_alert_form_uses_dispatch_names() {
        let alert = Alert::new("cpu", "search index=os")
            .with_actions("webhook")
            .with_webhook_url("https://hooks.example.com/a")
            .with_cron_schedule("*/5 * * * *")
            .with_alert_condition("search count > 0")
            .with_description("CPU alert")
            .with_time_bounds("-5m", "now");
        let form = alert_form(&alert);
        let get = |key: &str| form.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());

        assert_eq!(get("search"), Some("search index=os"));
        assert_eq!(get("actions"), Some("webhook"));
        assert_eq!(get("action.webhook.param.url"), Some("https://hooks.example.com/a"));
        assert_eq!(get("cron_schedule"), Some("*/5 * * * *"));
        assert_eq!(get("alert_condition"), Some("search count > 0"));
        assert_eq!(get("description"), Some("CPU alert"));
        assert_eq!(get("dispatch.earliest_time"), Some("-5m"));
        assert_eq!(get("dispatch.latest_time"), Some("now"));
        assert_eq!(get("earliest_time"), None);
    }

    #[test]
    fn test_blank_optional_fields_are_omitted() {
        let mut alert = Alert::new("cpu", "index=os");
        alert.description = Some(String::new());
        alert.cron_schedule = Some("   ".to_string());
        let form = alert_form(&alert);
        assert!(!keys(&form).contains(&"description"));
        assert!(!keys(&form).contains(&"cron_schedule"));
    }
}
