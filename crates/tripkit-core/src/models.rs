//! Domain records shared across the workspace.

use serde::{Deserialize, Serialize};

/// Category assigned to a resolved place.
///
/// Inferred from the upstream type tags by an ordered rule list; a place
/// that matches no rule is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Restaurant,
    Accommodation,
    Sight,
    Activity,
    Other,
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceCategory::Restaurant => write!(f, "restaurant"),
            PlaceCategory::Accommodation => write!(f, "accommodation"),
            PlaceCategory::Sight => write!(f, "sight"),
            PlaceCategory::Activity => write!(f, "activity"),
            PlaceCategory::Other => write!(f, "other"),
        }
    }
}

/// Normalized output of one maps-link resolution.
///
/// Built fresh per resolution and never mutated afterwards. `name` and
/// `location` fall back to the literal `"Unknown"` rather than staying
/// empty; `types` is empty when the upstream record carried no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub name: String,
    pub location: String,
    pub full_address: String,
    pub category: PlaceCategory,
    pub types: Vec<String>,
    pub place_id: Option<String>,
    pub source_link: String,
}
