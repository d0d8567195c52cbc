//! Blocking client for FRED series observations.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use bondscope_core::Date;
use bondscope_traits::{parse_observation_value, BenchmarkSource, SeriesId, SourceType, TraitError};

/// Public FRED endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const OBSERVATIONS_PATH: &str = "/fred/series/observations";

// =============================================================================
// PAYLOAD
// =============================================================================

#[derive(Debug, Deserialize)]
struct ObservationsPayload {
    #[serde(default)]
    observations: Vec<ObservationEntry>,
}

#[derive(Debug, Deserialize)]
struct ObservationEntry {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error_message: String,
}

/// Extracts the rate from an observations response body.
///
/// Only the first observation counts. An empty list, a blank value or the
/// `"."` sentinel is `Ok(None)`.
pub fn parse_observations_payload(body: &str) -> Result<Option<Decimal>, TraitError> {
    let payload: ObservationsPayload =
        serde_json::from_str(body).map_err(|e| TraitError::ParseError(e.to_string()))?;

    match payload.observations.first() {
        Some(entry) => parse_observation_value(&entry.value),
        None => Ok(None),
    }
}

/// Maps a non-success HTTP status to a [`TraitError`].
pub fn status_error(status: u16, body: &str) -> TraitError {
    let message = serde_json::from_str::<ErrorPayload>(body)
        .map(|p| p.error_message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => TraitError::AuthenticationFailed(message),
        404 => TraitError::NotFound(message),
        429 => TraitError::RateLimited,
        _ => TraitError::BadStatus { status, message },
    }
}

fn transport_error(err: &reqwest::Error) -> TraitError {
    if err.is_timeout() {
        TraitError::Timeout
    } else if err.is_connect() {
        TraitError::ConnectionFailed(err.to_string())
    } else if err.is_decode() {
        TraitError::ParseError(err.to_string())
    } else {
        TraitError::ConnectionFailed(err.to_string())
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// FRED benchmark source.
///
/// Each lookup is one blocking GET bounded by the request timeout.
#[derive(Clone)]
pub struct FredSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for FredSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FredSource")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl FredSource {
    /// Create a source against the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TraitError> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a source with an explicit endpoint and request timeout.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: &str,
        request_timeout: Duration,
    ) -> Result<Self, TraitError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TraitError::InvalidInput("FRED API key is empty".into()));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| TraitError::InvalidInput(format!("invalid base URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("bondscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TraitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Observations URL for a single series on a single date.
    pub fn observations_url(&self, series: &SeriesId, date: Date) -> Result<Url, TraitError> {
        let mut url = self
            .base_url
            .join(OBSERVATIONS_PATH)
            .map_err(|e| TraitError::InvalidInput(e.to_string()))?;

        let day = date.to_string();
        url.query_pairs_mut()
            .append_pair("series_id", series.as_str())
            .append_pair("observation_start", &day)
            .append_pair("observation_end", &day)
            .append_pair("api_key", &self.api_key)
            .append_pair("file_type", "json");

        Ok(url)
    }
}

impl BenchmarkSource for FredSource {
    fn source_type(&self) -> SourceType {
        SourceType::Snapshot
    }

    fn get_rate(&self, series: &SeriesId, date: Date) -> Result<Option<Decimal>, TraitError> {
        let url = self.observations_url(series, date)?;
        debug!(series = %series, date = %date, "requesting FRED observation");

        let response = self.client.get(url).send().map_err(|e| transport_error(&e))?;
        let status = response.status();
        let body = response.text().map_err(|e| transport_error(&e))?;

        if status != StatusCode::OK {
            let err = status_error(status.as_u16(), &body);
            warn!(series = %series, date = %date, error = %err, "FRED request rejected");
            return Err(err);
        }

        parse_observations_payload(&body)
    }
}
