//! Search job operations.
//!
//! # What this module handles:
//! - Query normalization
//! - Creating search jobs
//! - Retrieving search results
//!
//! # What this module does NOT handle:
//! - Metric extraction (see [`crate::client::jobs`])
//! - Saved search management (see [`super::saved`])

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::form_params;
use crate::endpoints::request::SplunkRequest;
use crate::endpoints::service_url::job_results_url;
use crate::error::{ClientError, Result};
use crate::models::{JobCreated, JobResults, SearchParameters};

const QUERY_PREFIX: &str = "search ";

/// Prefix `query` with `search ` unless it already starts with it.
///
/// ```
/// use splunk_sdk::endpoints::search::normalize_query;
///
/// assert_eq!(normalize_query("index=main | stats count"), "search index=main | stats count");
/// assert_eq!(normalize_query("search index=main"), "search index=main");
/// ```
pub fn normalize_query(query: &str) -> String {
    if query.starts_with(QUERY_PREFIX) {
        query.to_string()
    } else {
        format!("{}{}", QUERY_PREFIX, query)
    }
}

/// Create a new search job and return its sid.
///
/// `jobs_url` is the resolved jobs collection URL.
pub async fn create_job(
    client: &Client,
    jobs_url: &str,
    auth: &AuthStrategy,
    params: &SearchParameters,
) -> Result<String> {
    let search = normalize_query(&params.query);
    debug!(
        exec_mode = %params.exec_mode,
        output_mode = %params.output_mode,
        "Creating search job"
    );

    let mut form: Vec<(&str, String)> = vec![
        ("output_mode", params.output_mode.to_string()),
        ("exec_mode", params.exec_mode.to_string()),
        ("search", search),
    ];
    // Empty time bounds make Splunk reject the job.
    form_params! { form =>
        "earliest_time" => nonempty params.earliest_time,
        "latest_time" => nonempty params.latest_time,
    }

    let created: JobCreated = SplunkRequest::post(client, jobs_url, auth)
        .params(form)
        .send_json("job creation response")
        .await?;

    let sid = created
        .sid
        .filter(|sid| !sid.trim().is_empty())
        .ok_or(ClientError::NoSidFound)?;
    debug!(sid = %sid, "Search job created");
    Ok(sid)
}

/// Retrieve the results of a search job.
pub async fn retrieve_results(
    client: &Client,
    jobs_url: &str,
    auth: &AuthStrategy,
    sid: &str,
    params: &SearchParameters,
) -> Result<JobResults> {
    let url = job_results_url(jobs_url, sid);
    debug!(sid = %sid, "Retrieving job results");

    let results: JobResults = SplunkRequest::get(client, url, auth)
        .param("output_mode", params.output_mode.to_string())
        .param("exec_mode", params.exec_mode.to_string())
        .send_json("job results")
        .await?;

    debug!(
        sid = %sid,
        rows = results.results.len(),
        preview = results.preview,
        "Job results fetched"
    );
    Ok(results)
}
