//! Places API response types.
//!
//! All types model the JSON structures returned by the classic Places Web
//! Service. Every response carries a `status` envelope (`"OK"`,
//! `"ZERO_RESULTS"`, `"NOT_FOUND"`, `"REQUEST_DENIED"`, …) alongside the
//! payload; [`DetailsEnvelope`] and [`SearchEnvelope`] capture the two
//! payload shapes.

use serde::Deserialize;

/// A latitude/longitude pair used to anchor nearby searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Envelope for the `details/json` endpoint: `{ "status", "result", ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailsEnvelope {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Envelope for the `nearbysearch/json` and `textsearch/json` endpoints:
/// `{ "status", "results", ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Full detail record for a single place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// One component of a place's address, with the tags that classify it
/// (`"locality"`, `"neighborhood"`, `"administrative_area_level_1"`, …).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A lightweight search result referencing a place, prior to a detail fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
}
