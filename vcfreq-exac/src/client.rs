//! HTTP client for the ExAC variant endpoint.
//!
//! One GET per lookup key: `<base url><chrom>-<pos>-<ref>-<alt>`. The response body
//! is JSON and the attribute of interest is `allele_freq`.

use std::time::Duration;

use log::debug;
use serde_json::Value as Json;
use ureq::{Agent, AgentBuilder};

use vcfreq_core::{FrequencyResult, LookupKey};

use super::consts::{ALLELE_FREQ_ATTR, DEFAULT_TIMEOUT_SECS};
use super::engine::FrequencySource;
use super::error::{EnrichError, Result};
use super::utils::get_default_exac_api;

/// Builder for constructing an [`ExacClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use vcfreq_exac::ExacClient;
///
/// # fn main() -> Result<(), vcfreq_exac::EnrichError> {
/// let client = ExacClient::builder()
///     .with_base_url("http://localhost:8080/rest/variant/variant/".to_string())
///     .with_timeout(Duration::from_secs(5))
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ExacClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ExacClientBuilder {
    /// Creates a new, empty ExacClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL lookup keys are appended to.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout. A timed out request resolves to the error sentinel.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates an ExacClient.
    pub fn finish(self) -> Result<ExacClient> {
        let base_url = self.base_url.unwrap_or_else(get_default_exac_api);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(EnrichError::InvalidBaseUrl(base_url));
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(EnrichError::InvalidTimeout);
        }

        let agent = AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("vcfreq/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(ExacClient {
            base_url,
            timeout,
            agent,
        })
    }
}

/// Blocking client for allele-frequency lookups.
///
/// The underlying agent pools connections and is shared by every worker of an
/// [EnrichmentEngine](crate::EnrichmentEngine).
pub struct ExacClient {
    /// Endpoint that lookup keys are appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    agent: Agent,
}

impl ExacClient {
    pub fn builder() -> ExacClientBuilder {
        ExacClientBuilder::default()
    }

    pub fn url_for(&self, key: &LookupKey) -> String {
        format!("{}{}", self.base_url, key)
    }

    /// Perform a single lookup. Never fails: every failure mode maps onto a sentinel.
    pub fn fetch_frequency(&self, key: &LookupKey) -> FrequencyResult {
        let url = self.url_for(key);

        match self.agent.get(&url).call() {
            Ok(response) => {
                let status = response.status();
                match response.into_string() {
                    Ok(body) => classify_response(status, &body),
                    Err(e) => {
                        debug!("{}: failed to read response body: {}", key, e);
                        FrequencyResult::Error
                    }
                }
            }
            Err(ureq::Error::Status(code, _)) => {
                debug!("{}: HTTP status {}", key, code);
                FrequencyResult::Error
            }
            Err(e) => {
                debug!("{}: request failed: {}", key, e);
                FrequencyResult::Error
            }
        }
    }
}

impl FrequencySource for ExacClient {
    fn fetch(&self, key: &LookupKey) -> FrequencyResult {
        self.fetch_frequency(key)
    }
}

///
/// Map an HTTP status and body onto a [FrequencyResult].
///
/// - non-2xx status, or a body that isn't JSON: `Error`
/// - JSON without `allele_freq` (or with `null`): `NotAvailable`
/// - otherwise the value, strings unquoted and numbers exactly as the service wrote
///   them (`1.6475e-05` stays `1.6475e-05`)
///
pub fn classify_response(status: u16, body: &str) -> FrequencyResult {
    if !(200..300).contains(&status) {
        return FrequencyResult::Error;
    }

    let json: Json = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => return FrequencyResult::Error,
    };

    match json.get(ALLELE_FREQ_ATTR) {
        None | Some(Json::Null) => FrequencyResult::NotAvailable,
        Some(Json::String(s)) => FrequencyResult::Value(s.clone()),
        Some(value) => FrequencyResult::Value(value.to_string()),
    }
}
