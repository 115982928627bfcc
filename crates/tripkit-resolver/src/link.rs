//! Hint extraction from shareable map links.
//!
//! Links arrive in several encodings: an explicit `place_id` query
//! parameter, an identifier packed into the `data=` path payload, or just a
//! human-readable `/place/<name>` segment with an `@lat,lng` camera marker.
//! Extraction is best effort; any subset of hints may be present.

use percent_encoding::percent_decode_str;
use regex::Regex;
use tripkit_places::LatLng;

/// Everything the resolver can latch onto in a raw link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkHints {
    /// Place identifier, from the query parameter or the `data=` payload.
    pub place_id: Option<String>,
    /// Decoded place name, usable as a search query.
    pub query: Option<String>,
    /// Coordinates from the camera marker.
    pub coords: Option<LatLng>,
}

/// Extracts all recognizable hints from a raw link.
#[must_use]
pub fn extract_hints(link: &str) -> LinkHints {
    LinkHints {
        place_id: extract_place_id(link),
        query: extract_place_name(link),
        coords: extract_coords(link),
    }
}

/// Finds a place identifier, trying the explicit `place_id` query parameter
/// first and the packed `data=` payload second.
fn extract_place_id(link: &str) -> Option<String> {
    let param_re = Regex::new(r"[?&]place_id=([^&]+)").expect("valid regex");
    if let Some(raw) = param_re.captures(link).and_then(|c| c.get(1)) {
        return Some(percent_decode(raw.as_str()));
    }
    extract_data_place_id(link)
}

/// Digs an identifier out of the packed `data=` path payload.
fn extract_data_place_id(link: &str) -> Option<String> {
    let data_re = Regex::new(r"data=([^&?]+)").expect("valid regex");
    let payload = data_re.captures(link).and_then(|c| c.get(1))?.as_str();
    let decoded = percent_decode(payload);

    // Identifiers ride in a `!1s` segment. The strict pattern only accepts
    // tokens with the known `ChIJ` prefix or enough length to be a real
    // identifier; short matches are usually unrelated payload fragments.
    let strict_re = Regex::new(r"!1s([A-Za-z0-9_-]+)").expect("valid regex");
    if let Some(candidate) = strict_re.captures(&decoded).and_then(|c| c.get(1)) {
        let candidate = candidate.as_str();
        if candidate.starts_with("ChIJ") || candidate.len() > 20 {
            return Some(candidate.to_string());
        }
    }

    // Looser second pass. A colon marks the legacy `0x...:0x...` feature
    // reference, which the details endpoint does not accept.
    let loose_re = Regex::new(r"!1s([^!]+)").expect("valid regex");
    if let Some(candidate) = loose_re.captures(&decoded).and_then(|c| c.get(1)) {
        let candidate = candidate.as_str();
        if !candidate.contains(':') {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Pulls the human-readable name out of a `/place/<name>` path segment.
fn extract_place_name(link: &str) -> Option<String> {
    let re = Regex::new(r"/place/([^/@]+)").expect("valid regex");
    let raw = re.captures(link).and_then(|c| c.get(1))?.as_str();
    // '+' means space in this segment; replace before percent-decoding so
    // encoded plus signs come through as literal ones.
    Some(percent_decode(&raw.replace('+', " ")))
}

/// Reads the `@lat,lng` camera marker.
fn extract_coords(link: &str) -> Option<LatLng> {
    let re = Regex::new(r"@([0-9.-]+),([0-9.-]+)").expect("valid regex");
    let caps = re.captures(link)?;
    let lat = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some(LatLng { lat, lng })
}

fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // place identifier extraction
    // -----------------------------------------------------------------------

    #[test]
    fn extracts_direct_place_id_parameter() {
        let link =
            "https://www.google.com/maps/search/?api=1&query=sydney&place_id=ChIJN1t_tDeuEmsRUsoyG83frY4";
        assert_eq!(
            extract_place_id(link).as_deref(),
            Some("ChIJN1t_tDeuEmsRUsoyG83frY4")
        );
    }

    #[test]
    fn decodes_percent_escapes_in_direct_place_id() {
        let link = "https://maps.google.com/?place_id=ChIJ%2Fabc";
        assert_eq!(extract_place_id(link).as_deref(), Some("ChIJ/abc"));
    }

    #[test]
    fn extracts_chij_identifier_from_data_payload() {
        let link = "https://www.google.com/maps/place/Louvre/@48.86,2.33,17z/data=!3m1!4b1!4m6!3m5!1sChIJD3uTd9hx5kcR1IQvGfr8dbk!8m2!3d48.86!4d2.33";
        assert_eq!(
            extract_place_id(link).as_deref(),
            Some("ChIJD3uTd9hx5kcR1IQvGfr8dbk")
        );
    }

    #[test]
    fn accepts_long_identifier_without_chij_prefix() {
        let link = "https://maps.google.com/maps/place/X/data=!1sEicxMyBNYXJrZXQgU3RyZWV0!2e0";
        assert_eq!(
            extract_place_id(link).as_deref(),
            Some("EicxMyBNYXJrZXQgU3RyZWV0")
        );
    }

    #[test]
    fn short_token_falls_through_to_loose_pattern() {
        let link = "https://maps.google.com/maps/place/X/data=!1sabc123!2e0";
        assert_eq!(extract_place_id(link).as_deref(), Some("abc123"));
    }

    #[test]
    fn rejects_legacy_hex_pair_reference() {
        let link =
            "https://www.google.com/maps/place/X/data=!1s0x6b12ae665e892fdd:0x3133f8d75a1ac251!8m2";
        assert_eq!(extract_place_id(link), None);
    }

    #[test]
    fn decodes_data_payload_before_matching() {
        let link = "https://maps.google.com/maps?data=%211sChIJD3uTd9hx5kcR1IQvGfr8dbk%218m2";
        assert_eq!(
            extract_place_id(link).as_deref(),
            Some("ChIJD3uTd9hx5kcR1IQvGfr8dbk")
        );
    }

    // -----------------------------------------------------------------------
    // name extraction
    // -----------------------------------------------------------------------

    #[test]
    fn decodes_plus_signs_as_spaces_in_name() {
        let link = "https://www.google.com/maps/place/Tsukiji+Outer+Market/@35.6654,139.7707,17z";
        assert_eq!(
            extract_place_name(link).as_deref(),
            Some("Tsukiji Outer Market")
        );
    }

    #[test]
    fn decodes_percent_escapes_in_name() {
        let link = "https://www.google.com/maps/place/Caf%C3%A9+de+Flore/@48.854,2.332,17z";
        assert_eq!(extract_place_name(link).as_deref(), Some("Caf\u{e9} de Flore"));
    }

    #[test]
    fn returns_none_without_a_name_segment() {
        assert_eq!(
            extract_place_name("https://www.google.com/maps/@35.66,139.77,12z"),
            None
        );
    }

    // -----------------------------------------------------------------------
    // coordinate extraction
    // -----------------------------------------------------------------------

    #[test]
    fn extracts_coordinates_from_camera_marker() {
        let link = "https://www.google.com/maps/place/X/@35.6654,139.7707,17z";
        let coords = extract_coords(link).expect("coordinates");
        assert!((coords.lat - 35.6654).abs() < 1e-9);
        assert!((coords.lng - 139.7707).abs() < 1e-9);
    }

    #[test]
    fn extracts_negative_coordinates() {
        let link = "https://maps.google.com/@-33.8670522,151.2071,15z";
        let coords = extract_coords(link).expect("coordinates");
        assert!((coords.lat + 33.8670522).abs() < 1e-9);
        assert!((coords.lng - 151.2071).abs() < 1e-9);
    }

    #[test]
    fn returns_none_without_a_camera_marker() {
        assert_eq!(extract_coords("https://maps.google.com/maps/place/X"), None);
    }

    // -----------------------------------------------------------------------
    // combined hints
    // -----------------------------------------------------------------------

    #[test]
    fn collects_every_hint_from_one_link() {
        let link = "https://www.google.com/maps/place/Tsukiji+Outer+Market/@35.6654,139.7707,17z/data=!1sChIJm0uQdoeJGGARn4Ffk2dZRoc!8m2";
        let hints = extract_hints(link);
        assert_eq!(hints.place_id.as_deref(), Some("ChIJm0uQdoeJGGARn4Ffk2dZRoc"));
        assert_eq!(hints.query.as_deref(), Some("Tsukiji Outer Market"));
        let coords = hints.coords.expect("coordinates");
        assert!((coords.lat - 35.6654).abs() < 1e-9);
    }

    #[test]
    fn plain_urls_produce_no_hints() {
        assert_eq!(extract_hints("https://example.com/"), LinkHints::default());
    }
}
