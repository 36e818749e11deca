//! Service URL resolution.
//!
//! Responsibilities:
//! - Join scheme, host, port and a service path into a target URL.
//! - Derive the results sub-resource of a search job.
//!
//! Invariants:
//! - A leading `https://` or `http://` on the host is dropped before the
//!   configured scheme is applied, so the scheme appears exactly once.
//! - Bare IPv6 hosts are bracketed.
//! - The result contains no whitespace.

use splunk_sdk_config::Scheme;

use super::url_encoding::encode_path_segment;

/// Search jobs collection (v2 API).
pub const JOBS_PATH: &str = "services/search/v2/jobs/";
/// Saved searches collection; alerts are saved searches.
pub const SAVED_SEARCHES_PATH: &str = "services/saved/searches/";
/// Fired alerts collection.
pub const FIRED_ALERTS_PATH: &str = "services/alerts/fired_alerts/";

const RESULTS_SEGMENT: &str = "results";

fn strip_scheme(host: &str) -> &str {
    host.strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host)
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Build the URL of `path` on the Splunk management port.
///
/// ```
/// use splunk_sdk::endpoints::service_url::resolve_service_url;
/// use splunk_sdk_config::Scheme;
///
/// let url = resolve_service_url(Scheme::Https, "https://splunk.local", 8089, "services/x/");
/// assert_eq!(url, "https://splunk.local:8089/services/x/");
/// ```
pub fn resolve_service_url(scheme: Scheme, host: &str, port: u16, path: &str) -> String {
    let host = strip_scheme(host.trim()).trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let url = format!("{}{}/{}", scheme.prefix(), join_host_port(host, port), path);
    url.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Append `<sid>/results` to a jobs collection URL, with exactly one `/` between.
///
/// The sid is percent-encoded as one path segment.
pub fn job_results_url(jobs_url: &str, sid: &str) -> String {
    let mut url = format!("{}{}", jobs_url, encode_path_segment(sid));
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(RESULTS_SEGMENT);
    url
}
