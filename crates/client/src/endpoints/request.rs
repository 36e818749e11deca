//! Authenticated request assembly and dispatch.
//!
//! Responsibilities:
//! - Resolve and attach the `Authorization` header on every request.
//! - Merge caller headers, dropping any caller-supplied `Authorization`.
//! - Encode parameters as a query string (GET) or form body (POST, DELETE).
//! - Turn non-2xx responses into [`ClientError::HttpError`].
//!
//! Does NOT handle:
//! - Retries or backoff. A failed send is returned as-is.
//! - TLS, timeouts or redirects (configured on the `reqwest::Client`).

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::parsing::{decode_json, extract_error_message};
use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result};

/// A request to the Splunk REST API, authenticated with an [`AuthStrategy`].
pub struct SplunkRequest<'a> {
    client: &'a Client,
    method: Method,
    url: String,
    auth: &'a AuthStrategy,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
}

impl<'a> SplunkRequest<'a> {
    pub fn new(
        client: &'a Client,
        method: Method,
        url: impl Into<String>,
        auth: &'a AuthStrategy,
    ) -> Self {
        Self {
            client,
            method,
            url: url.into(),
            auth,
            headers: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn get(client: &'a Client, url: impl Into<String>, auth: &'a AuthStrategy) -> Self {
        Self::new(client, Method::GET, url, auth)
    }

    pub fn post(client: &'a Client, url: impl Into<String>, auth: &'a AuthStrategy) -> Self {
        Self::new(client, Method::POST, url, auth)
    }

    pub fn delete(client: &'a Client, url: impl Into<String>, auth: &'a AuthStrategy) -> Self {
        Self::new(client, Method::DELETE, url, auth)
    }

    /// Add a header. `Authorization` is ignored; it is always resolved from the strategy.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let resolved = self.auth.authorization_header()?;
        let mut auth_value = HeaderValue::from_str(resolved.expose_secret()).map_err(|_| {
            ClientError::InvalidHeader(format!(
                "{} contains characters not allowed in an HTTP header",
                self.auth.kind()
            ))
        })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidHeader(format!("invalid header name '{name}'")))?;
            if name == AUTHORIZATION {
                debug!("Ignoring caller-supplied Authorization header");
                continue;
            }
            let value = HeaderValue::from_str(value)
                .map_err(|_| ClientError::InvalidHeader(format!("invalid value for '{name}'")))?;
            headers.append(name, value);
        }
        headers.insert(AUTHORIZATION, auth_value);
        Ok(headers)
    }

    /// Build the `reqwest::Request` without sending it.
    pub fn build(self) -> Result<reqwest::Request> {
        let headers = self.header_map()?;
        let builder = self
            .client
            .request(self.method.clone(), &self.url)
            .headers(headers);
        let builder = if self.method == Method::GET {
            builder.query(&self.params)
        } else {
            builder.form(&self.params)
        };
        builder.build().map_err(|e| {
            if e.is_builder() {
                ClientError::InvalidUrl(format!("{}: {}", self.url, e))
            } else {
                ClientError::Transport(e)
            }
        })
    }

    /// Send the request. Non-2xx responses become [`ClientError::HttpError`].
    pub async fn send(self) -> Result<Response> {
        let client = self.client;
        let request = self.build()?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");
        let response = client.execute(request).await?;
        check_status(response).await
    }

    /// Send the request and decode the JSON body.
    pub async fn send_json<T: DeserializeOwned>(self, context: &'static str) -> Result<T> {
        let response = self.send().await?;
        let body = response.bytes().await?;
        decode_json(&body, context)
    }
}

/// Pass 2xx responses through; convert anything else into an HTTP error.
///
/// The message is the first Splunk message text when the body carries one,
/// otherwise the status line (e.g. `404 Not Found`).
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            debug!(status = %status, error = %e, "Failed to read error body");
            Default::default()
        }
    };
    let message = match extract_error_message(&body) {
        Ok(message) => message,
        Err(_) => {
            debug!(status = %status, "Error body has no Splunk messages, using status line");
            status.to_string()
        }
    };

    Err(ClientError::HttpError {
        status,
        url,
        message,
    })
}
