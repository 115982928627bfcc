use async_trait::async_trait;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::{LatLng, PlaceCandidate, PlaceDetails};

/// Abstraction over the Places API lookups the resolver needs.
///
/// Implemented by [`PlacesClient`] for production; tests substitute stubs
/// to exercise resolution logic without network access.
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Fetches details for a known place identifier. `Ok(None)` means the
    /// upstream does not recognize the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] on transport failure or an upstream denial.
    async fn place_details(
        &self,
        place_id: &str,
        fields: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError>;

    /// Searches around a coordinate, biased by a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] on transport failure or an upstream denial.
    async fn nearby_search(
        &self,
        location: LatLng,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError>;

    /// Searches for places matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] on transport failure or an upstream denial.
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError>;
}

#[async_trait]
impl PlaceLookup for PlacesClient {
    async fn place_details(
        &self,
        place_id: &str,
        fields: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        PlacesClient::place_details(self, place_id, fields).await
    }

    async fn nearby_search(
        &self,
        location: LatLng,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        PlacesClient::nearby_search(self, location, radius_m, keyword).await
    }

    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        PlacesClient::text_search(self, query).await
    }
}
