pub mod category;
pub mod error;
pub mod link;
pub mod resolve;

pub use category::infer_category;
pub use error::ResolveError;
pub use link::{extract_hints, LinkHints};
pub use resolve::PlaceResolver;
