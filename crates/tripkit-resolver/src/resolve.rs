//! Maps-link place resolution.
//!
//! Tries lookup strategies in priority order (embedded place identifier,
//! proximity search around the link's coordinates, free-text search on the
//! link's name segment) and normalizes the first detail record found into a
//! [`ResolvedPlace`]. A strategy that misses cleanly falls through to the
//! next; only total exhaustion is an error.

use std::sync::Arc;

use tripkit_core::ResolvedPlace;
use tripkit_places::{AddressComponent, LatLng, PlaceDetails, PlaceLookup, PlacesError};

use crate::category::infer_category;
use crate::error::ResolveError;
use crate::link::extract_hints;

/// Detail fields requested for every lookup.
const DETAIL_FIELDS: &str = "name,formatted_address,address_components,types,place_id";

/// Radius for the proximity search around the link's coordinate hint.
const NEARBY_RADIUS_M: u32 = 50;

/// Fallback for name and location when upstream data is missing.
const UNKNOWN: &str = "Unknown";

/// Resolves shareable map links into normalized place records.
///
/// Stateless between calls: no cache, no memoization. Concurrent resolutions
/// are independent and need no coordination.
#[derive(Clone)]
pub struct PlaceResolver {
    lookup: Arc<dyn PlaceLookup>,
}

impl PlaceResolver {
    #[must_use]
    pub fn new(lookup: Arc<dyn PlaceLookup>) -> Self {
        Self { lookup }
    }

    /// Resolves a raw map link into a [`ResolvedPlace`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when no strategy produces a detail record.
    /// If a lookup failed along the way, the most recent failure is carried
    /// as the error source.
    pub async fn resolve(&self, link: &str) -> Result<ResolvedPlace, ResolveError> {
        let hints = extract_hints(link);
        let mut last_error: Option<PlacesError> = None;

        // Strategy 1: place identifier embedded in the link
        if let Some(place_id) = hints.place_id.as_deref() {
            match self.fetch_details(link, place_id).await {
                Ok(Some(place)) => return Ok(place),
                Ok(None) => {
                    tracing::debug!(link, place_id, "embedded place ID unknown upstream");
                }
                Err(e) => {
                    tracing::debug!(link, place_id, error = %e, "detail lookup failed");
                    last_error = Some(e);
                }
            }
        }

        // Strategy 2: proximity search around the link's coordinates
        if let (Some(coords), Some(query)) = (hints.coords, hints.query.as_deref()) {
            match self.via_nearby_search(link, coords, query).await {
                Ok(Some(place)) => return Ok(place),
                Ok(None) => {
                    tracing::debug!(link, query, "nearby search produced no match");
                }
                Err(e) => {
                    tracing::debug!(link, query, error = %e, "nearby search failed");
                    last_error = Some(e);
                }
            }
        }

        // Strategy 3: free-text search on the name segment
        if let Some(query) = hints.query.as_deref() {
            match self.via_text_search(link, query).await {
                Ok(Some(place)) => return Ok(place),
                Ok(None) => {
                    tracing::debug!(link, query, "text search produced no match");
                }
                Err(e) => {
                    tracing::debug!(link, query, error = %e, "text search failed");
                    last_error = Some(e);
                }
            }
        }

        tracing::warn!(link, "no resolution strategy succeeded");
        Err(ResolveError { source: last_error })
    }

    async fn via_nearby_search(
        &self,
        link: &str,
        coords: LatLng,
        query: &str,
    ) -> Result<Option<ResolvedPlace>, PlacesError> {
        let candidates = self
            .lookup
            .nearby_search(coords, NEARBY_RADIUS_M, query)
            .await?;
        match candidates.first() {
            Some(candidate) => self.fetch_details(link, &candidate.place_id).await,
            None => Ok(None),
        }
    }

    async fn via_text_search(
        &self,
        link: &str,
        query: &str,
    ) -> Result<Option<ResolvedPlace>, PlacesError> {
        let candidates = self.lookup.text_search(query).await?;
        match candidates.first() {
            Some(candidate) => self.fetch_details(link, &candidate.place_id).await,
            None => Ok(None),
        }
    }

    /// Fetches details for `place_id` and normalizes them. `Ok(None)` means
    /// the upstream does not recognize the identifier.
    async fn fetch_details(
        &self,
        link: &str,
        place_id: &str,
    ) -> Result<Option<ResolvedPlace>, PlacesError> {
        let details = self.lookup.place_details(place_id, DETAIL_FIELDS).await?;
        Ok(details.map(|d| normalize(link, place_id, d)))
    }
}

/// Flattens an upstream detail record into the output shape.
fn normalize(link: &str, lookup_id: &str, details: PlaceDetails) -> ResolvedPlace {
    let location = derive_location(&details.address_components);
    let category = infer_category(&details.types);

    ResolvedPlace {
        name: details
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        location,
        full_address: details.formatted_address.unwrap_or_default(),
        category,
        types: details.types,
        place_id: details.place_id.or_else(|| Some(lookup_id.to_string())),
        source_link: link.to_string(),
    }
}

/// Picks the display location from the address components: neighborhood or
/// sublocality first, then locality or administrative area, then "Unknown".
fn derive_location(components: &[AddressComponent]) -> String {
    let tagged = |tags: &[&str]| {
        components
            .iter()
            .find(|c| c.types.iter().any(|t| tags.contains(&t.as_str())))
            .map(|c| c.long_name.clone())
            .filter(|name| !name.is_empty())
    };

    tagged(&["neighborhood", "sublocality"])
        .or_else(|| tagged(&["locality", "administrative_area_level_1"]))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tripkit_core::PlaceCategory;
    use tripkit_places::PlaceCandidate;

    use super::*;

    #[derive(Default)]
    struct StubLookup {
        details: HashMap<String, PlaceDetails>,
        nearby: Vec<PlaceCandidate>,
        text: Vec<PlaceCandidate>,
        fail_searches: bool,
        details_calls: AtomicUsize,
        nearby_calls: AtomicUsize,
        text_calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaceLookup for StubLookup {
        async fn place_details(
            &self,
            place_id: &str,
            _fields: &str,
        ) -> Result<Option<PlaceDetails>, PlacesError> {
            self.details_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.details.get(place_id).cloned())
        }

        async fn nearby_search(
            &self,
            _location: LatLng,
            _radius_m: u32,
            _keyword: &str,
        ) -> Result<Vec<PlaceCandidate>, PlacesError> {
            self.nearby_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_searches {
                return Err(PlacesError::ApiError(
                    "REQUEST_DENIED: key rejected".to_string(),
                ));
            }
            Ok(self.nearby.clone())
        }

        async fn text_search(&self, _query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
            self.text_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_searches {
                return Err(PlacesError::ApiError(
                    "REQUEST_DENIED: key rejected".to_string(),
                ));
            }
            Ok(self.text.clone())
        }
    }

    fn test_resolver(stub: StubLookup) -> (PlaceResolver, Arc<StubLookup>) {
        let stub = Arc::new(stub);
        (PlaceResolver::new(stub.clone()), stub)
    }

    fn detail_record(name: &str, types: &[&str]) -> PlaceDetails {
        PlaceDetails {
            name: Some(name.to_string()),
            formatted_address: Some(format!("1 {name} Street")),
            address_components: vec![],
            types: types.iter().map(|t| (*t).to_string()).collect(),
            place_id: None,
        }
    }

    fn component(long_name: &str, tag: &str) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            short_name: None,
            types: vec![tag.to_string()],
        }
    }

    fn candidate(place_id: &str) -> PlaceCandidate {
        PlaceCandidate {
            place_id: place_id.to_string(),
            name: None,
        }
    }

    // -----------------------------------------------------------------------
    // strategy order
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn embedded_place_id_short_circuits_searches() {
        let mut details = HashMap::new();
        details.insert(
            "ChIJabc123".to_string(),
            detail_record("Opera House", &["tourist_attraction"]),
        );
        let (resolver, stub) = test_resolver(StubLookup {
            details,
            ..Default::default()
        });

        // Name and coordinates are present too; they must never be used.
        let link =
            "https://www.google.com/maps/place/Opera+House/@-33.8568,151.2153,17z/?place_id=ChIJabc123";
        let place = resolver.resolve(link).await.expect("should resolve");

        assert_eq!(place.name, "Opera House");
        assert_eq!(stub.details_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_id_falls_through_to_nearby_search() {
        let mut details = HashMap::new();
        details.insert(
            "nearby-hit".to_string(),
            detail_record("Backup Cafe", &["cafe"]),
        );
        let (resolver, stub) = test_resolver(StubLookup {
            details,
            nearby: vec![candidate("nearby-hit")],
            ..Default::default()
        });

        let link = "https://www.google.com/maps/place/Backup+Cafe/@48.85,2.35,17z/?place_id=ChIJgone";
        let place = resolver
            .resolve(link)
            .await
            .expect("should resolve via nearby search");

        assert_eq!(place.name, "Backup Cafe");
        assert_eq!(place.category, PlaceCategory::Restaurant);
        assert_eq!(stub.details_calls.load(Ordering::SeqCst), 2);
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nearby_miss_falls_through_to_text_search() {
        let mut details = HashMap::new();
        details.insert(
            "text-hit".to_string(),
            detail_record("Market Stall", &["food"]),
        );
        let (resolver, stub) = test_resolver(StubLookup {
            details,
            text: vec![candidate("text-hit")],
            ..Default::default()
        });

        let link = "https://www.google.com/maps/place/Market+Stall/@35.66,139.77,17z";
        let place = resolver
            .resolve(link)
            .await
            .expect("should resolve via text search");

        assert_eq!(place.name, "Market Stall");
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn nearby_search_needs_coordinates() {
        let mut details = HashMap::new();
        details.insert(
            "text-hit".to_string(),
            detail_record("Ramen Shop", &["restaurant"]),
        );
        let (resolver, stub) = test_resolver(StubLookup {
            details,
            text: vec![candidate("text-hit")],
            ..Default::default()
        });

        let place = resolver
            .resolve("https://www.google.com/maps/place/Ramen+Shop")
            .await
            .expect("should resolve");

        assert_eq!(place.name, "Ramen Shop");
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 1);
    }

    // -----------------------------------------------------------------------
    // exhaustion
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_id_without_fallback_hints_fails() {
        let (resolver, stub) = test_resolver(StubLookup::default());

        let link = "https://www.google.com/maps/search/?api=1&place_id=ChIJmissing";
        let err = resolver.resolve(link).await.expect_err("should exhaust");

        assert_eq!(err.to_string(), "could not resolve place");
        assert!(err.source.is_none(), "clean misses carry no source");
        assert_eq!(stub.details_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn search_failure_is_carried_as_error_source() {
        let (resolver, _stub) = test_resolver(StubLookup {
            fail_searches: true,
            ..Default::default()
        });

        let err = resolver
            .resolve("https://www.google.com/maps/place/Somewhere")
            .await
            .expect_err("should exhaust");

        assert_eq!(err.to_string(), "could not resolve place");
        let source = err.source.expect("search failure should be preserved");
        assert!(
            source.to_string().contains("REQUEST_DENIED"),
            "got: {source}"
        );
    }

    #[tokio::test]
    async fn links_with_no_hints_fail_without_lookups() {
        let (resolver, stub) = test_resolver(StubLookup::default());

        let err = resolver
            .resolve("https://example.com/")
            .await
            .expect_err("nothing to extract");

        assert_eq!(err.to_string(), "could not resolve place");
        assert_eq!(stub.details_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.nearby_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.text_calls.load(Ordering::SeqCst), 0);
    }

    // -----------------------------------------------------------------------
    // normalization
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn normalizes_a_full_detail_record() {
        let mut record = detail_record("Tsukiji Outer Market", &["restaurant", "food"]);
        record.formatted_address = Some("4 Chome Tsukiji, Chuo City, Tokyo".to_string());
        record.address_components = vec![
            component("Tsukiji", "neighborhood"),
            component("Chuo City", "locality"),
        ];
        let mut details = HashMap::new();
        details.insert("text-hit".to_string(), record);
        let (resolver, _stub) = test_resolver(StubLookup {
            details,
            text: vec![candidate("text-hit")],
            ..Default::default()
        });

        let link = "https://www.google.com/maps/place/Tsukiji+Outer+Market/@35.6654,139.7707,17z";
        let place = resolver.resolve(link).await.expect("should resolve");

        assert_eq!(place.name, "Tsukiji Outer Market");
        assert_eq!(place.location, "Tsukiji", "neighborhood wins over locality");
        assert_eq!(place.full_address, "4 Chome Tsukiji, Chuo City, Tokyo");
        assert_eq!(place.category, PlaceCategory::Restaurant);
        assert_eq!(
            place.types,
            vec!["restaurant".to_string(), "food".to_string()]
        );
        assert_eq!(place.place_id.as_deref(), Some("text-hit"));
        assert_eq!(place.source_link, link);
    }

    #[tokio::test]
    async fn prefers_upstream_place_id_over_lookup_id() {
        let mut record = detail_record("Louvre", &["museum"]);
        record.place_id = Some("ChIJcanonical".to_string());
        let mut details = HashMap::new();
        details.insert("ChIJalias".to_string(), record);
        let (resolver, _stub) = test_resolver(StubLookup {
            details,
            ..Default::default()
        });

        let place = resolver
            .resolve("https://maps.google.com/?place_id=ChIJalias")
            .await
            .expect("should resolve");

        assert_eq!(place.place_id.as_deref(), Some("ChIJcanonical"));
        assert_eq!(place.category, PlaceCategory::Sight);
    }

    #[tokio::test]
    async fn missing_fields_fall_back_to_defaults() {
        let record = PlaceDetails {
            name: None,
            formatted_address: None,
            address_components: vec![],
            types: vec![],
            place_id: None,
        };
        let mut details = HashMap::new();
        details.insert("ChIJbare".to_string(), record);
        let (resolver, _stub) = test_resolver(StubLookup {
            details,
            ..Default::default()
        });

        let place = resolver
            .resolve("https://maps.google.com/?place_id=ChIJbare")
            .await
            .expect("should resolve");

        assert_eq!(place.name, "Unknown");
        assert_eq!(place.location, "Unknown");
        assert_eq!(place.full_address, "");
        assert_eq!(place.category, PlaceCategory::Other);
        assert!(place.types.is_empty());
        assert_eq!(place.place_id.as_deref(), Some("ChIJbare"));
    }

    #[tokio::test]
    async fn location_falls_back_to_locality_when_neighborhood_is_empty() {
        let mut record = detail_record("Shake Shack", &["restaurant"]);
        record.address_components = vec![
            component("", "neighborhood"),
            component("New York", "locality"),
        ];
        let mut details = HashMap::new();
        details.insert("ChIJshack".to_string(), record);
        let (resolver, _stub) = test_resolver(StubLookup {
            details,
            ..Default::default()
        });

        let place = resolver
            .resolve("https://maps.google.com/?place_id=ChIJshack")
            .await
            .expect("should resolve");

        assert_eq!(place.location, "New York");
    }

    #[tokio::test]
    async fn repeated_resolution_is_identical() {
        let mut details = HashMap::new();
        details.insert(
            "ChIJsame".to_string(),
            detail_record("Same Place", &["park"]),
        );
        let (resolver, _stub) = test_resolver(StubLookup {
            details,
            ..Default::default()
        });

        let link = "https://maps.google.com/?place_id=ChIJsame";
        let first = resolver.resolve(link).await.expect("first resolution");
        let second = resolver.resolve(link).await.expect("second resolution");

        assert_eq!(first, second);
    }
}
