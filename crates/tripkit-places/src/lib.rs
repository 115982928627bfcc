//! Google Places Web Service client.
//!
//! [`PlacesClient`] wraps the classic Places HTTP endpoints (details, nearby
//! search, text search); [`PlaceLookup`] is the capability trait the
//! resolution pipeline consumes, so tests can substitute a stub.

mod client;
mod error;
mod lookup;
mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use lookup::PlaceLookup;
pub use types::{AddressComponent, LatLng, PlaceCandidate, PlaceDetails};
