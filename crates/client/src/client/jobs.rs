//! Search job and metric API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Creating search jobs and fetching their results
//! - Reducing a single-row result set to a metric
//!
//! # What this module does NOT handle:
//! - Low-level job endpoint HTTP calls (in [`crate::endpoints::search::jobs`])
//!
//! `get_metric` moves through endpoint resolved, submitted, results fetched and
//! metric extracted. Each transition is logged at debug level; the first failure
//! ends the operation.

use tracing::debug;

use crate::client::SplunkClient;
use crate::endpoints::{self, JOBS_PATH};
use crate::error::{ClientError, Result};
use crate::models::{JobResults, ResultRow, SearchParameters};

/// Reduce a result set to one number.
///
/// Requires exactly one row. The value parsed is the first value in
/// field-name order, skipping Splunk's internal `_`-prefixed fields (`_time`,
/// `_span`) unless the row has nothing else. An empty row parses `""` and fails.
pub fn extract_metric(rows: &[ResultRow]) -> Result<f64> {
    let [row] = rows else {
        return Err(ClientError::NotAScalarMetric { rows: rows.len() });
    };
    let value = row
        .iter()
        .find(|(field, _)| !field.starts_with('_'))
        .or_else(|| row.iter().next())
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    value.parse::<f64>().map_err(|source| ClientError::MetricParse {
        value: value.to_string(),
        source,
    })
}

impl SplunkClient {
    /// Create a search job and return its sid.
    pub async fn create_job(&self, params: &SearchParameters) -> Result<String> {
        let jobs_url = self.service_url(JOBS_PATH);
        endpoints::create_job(&self.http, &jobs_url, &self.auth, params).await
    }

    /// Fetch the results of the job `sid`.
    pub async fn retrieve_results(
        &self,
        sid: &str,
        params: &SearchParameters,
    ) -> Result<JobResults> {
        let jobs_url = self.service_url(JOBS_PATH);
        endpoints::retrieve_results(&self.http, &jobs_url, &self.auth, sid, params).await
    }

    /// Run a search and return its single numeric result.
    pub async fn get_metric(&self, params: &SearchParameters) -> Result<f64> {
        let jobs_url = self.service_url(JOBS_PATH);
        debug!(url = %jobs_url, "Metric search: endpoint resolved");

        let sid = endpoints::create_job(&self.http, &jobs_url, &self.auth, params)
            .await
            .inspect_err(|e| debug!(error = %e, "Metric search failed at submission"))?;
        debug!(sid = %sid, "Metric search: submitted");

        let results = endpoints::retrieve_results(&self.http, &jobs_url, &self.auth, &sid, params)
            .await
            .inspect_err(|e| debug!(sid = %sid, error = %e, "Metric search failed fetching results"))?;
        debug!(sid = %sid, rows = results.results.len(), "Metric search: results fetched");

        let metric = extract_metric(&results.results)
            .inspect_err(|e| debug!(sid = %sid, error = %e, "Metric search failed at extraction"))?;
        debug!(sid = %sid, metric, "Metric search: metric extracted");
        Ok(metric)
    }
}
