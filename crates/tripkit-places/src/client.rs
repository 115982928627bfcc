//! HTTP client for the classic Google Places Web Service.
//!
//! Wraps `reqwest` with Places-specific error handling, API key management,
//! and typed response deserialization. Every endpoint checks the `"status"`
//! field in the JSON envelope: well-formed misses (`ZERO_RESULTS`,
//! `NOT_FOUND`, `INVALID_REQUEST`) become empty results, while denial and
//! quota statuses surface as [`PlacesError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsEnvelope, LatLng, PlaceCandidate, PlaceDetails, SearchEnvelope};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Client for the Places Web Service.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalize: ensure the base URL ends with exactly one slash so that
        // Url::join treats it as a directory rather than replacing the last
        // path segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the full detail record for a place identifier.
    ///
    /// Calls the `details/json` endpoint requesting `fields`. Returns
    /// `Ok(None)` when the upstream reports the identifier as unknown
    /// (`NOT_FOUND`, `INVALID_REQUEST`, or `ZERO_RESULTS`) so callers can
    /// fall through to a search instead of failing.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns a denial or quota status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        let url = self.build_url("details/json", &[("place_id", place_id), ("fields", fields)])?;
        let body = self.request_json(&url).await?;

        let envelope: DetailsEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" => Ok(envelope.result),
            "ZERO_RESULTS" | "NOT_FOUND" | "INVALID_REQUEST" => Ok(None),
            status => Err(Self::api_error(status, envelope.error_message)),
        }
    }

    /// Searches for places around a coordinate, biased by a keyword.
    ///
    /// Calls the `nearbysearch/json` endpoint with a `radius_m`-meter radius.
    /// `ZERO_RESULTS` yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns a denial or quota status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        location: LatLng,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let location_param = format!("{},{}", location.lat, location.lng);
        let radius_param = radius_m.to_string();
        let url = self.build_url(
            "nearbysearch/json",
            &[
                ("location", &location_param),
                ("radius", &radius_param),
                ("keyword", keyword),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(location={location_param})"),
                source: e,
            })?;

        Self::search_results(envelope)
    }

    /// Searches for places matching a free-text query.
    ///
    /// Calls the `textsearch/json` endpoint. `ZERO_RESULTS` yields an empty
    /// list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns a denial or quota status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.build_url("textsearch/json", &[("query", query)])?;
        let body = self.request_json(&url).await?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Self::search_results(envelope)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters and the API key appended last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self.base_url.join(endpoint).map_err(|e| {
            PlacesError::ApiError(format!("invalid endpoint path '{endpoint}': {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    fn search_results(envelope: SearchEnvelope) -> Result<Vec<PlaceCandidate>, PlacesError> {
        match envelope.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(envelope.results),
            status => Err(Self::api_error(status, envelope.error_message)),
        }
    }

    fn api_error(status: &str, message: Option<String>) -> PlacesError {
        let detail = message.unwrap_or_else(|| "no error message".to_string());
        PlacesError::ApiError(format!("{status}: {detail}"))
    }
}
