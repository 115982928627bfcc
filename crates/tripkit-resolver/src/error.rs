use thiserror::Error;
use tripkit_places::PlacesError;

/// Returned when every resolution strategy is exhausted without producing a
/// detail record.
#[derive(Debug, Error)]
#[error("could not resolve place")]
pub struct ResolveError {
    /// The most recent lookup failure, when exhaustion was caused by one
    /// rather than by clean not-found responses.
    #[source]
    pub source: Option<PlacesError>,
}
