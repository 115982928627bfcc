//! Category inference from upstream place type tags.

use tripkit_core::PlaceCategory;

/// Keyword rules checked in order; the first rule with any keyword present
/// in the joined tag text wins, so a place tagged both `museum` and
/// `restaurant` is a restaurant.
const CATEGORY_RULES: &[(&[&str], PlaceCategory)] = &[
    (
        &["restaurant", "food", "cafe", "meal"],
        PlaceCategory::Restaurant,
    ),
    (
        &["lodging", "hotel", "accommodation"],
        PlaceCategory::Accommodation,
    ),
    (
        &["tourist_attraction", "museum", "park", "sight"],
        PlaceCategory::Sight,
    ),
    (
        &["amusement", "activity", "entertainment"],
        PlaceCategory::Activity,
    ),
];

/// Infers a category from the upstream type tags.
///
/// Matching is a case-insensitive substring scan over all tags joined with
/// spaces; unmatched or empty tag lists fall back to
/// [`PlaceCategory::Other`].
#[must_use]
pub fn infer_category(types: &[String]) -> PlaceCategory {
    let joined = types.join(" ").to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| joined.contains(keyword)) {
            return *category;
        }
    }
    PlaceCategory::Other
}
