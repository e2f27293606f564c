//! Request URL builders for both API dialects
//!
//! Builders are pure string assembly: given a scheme and a location they
//! produce the fully-qualified GET URL for the chosen dialect. Location
//! text is percent-encoded from its UTF-8 bytes (Rust `str` is UTF-8 by
//! construction, so no transcoding step is needed).

use crate::constants::api::{LEGACY_GEOCODE_PATH, REST_LOCATIONS_PATH, VIRTUAL_EARTH_HOST};
use crate::constants::legacy::AUX_PARAMS;

/// Build a REST dialect request URL
///
/// `GET {scheme}://dev.virtualearth.net/REST/v1/Locations?key={key}&q={location}`
pub fn rest_url(scheme: &str, api_key: &str, location: &str) -> String {
    format!(
        "{}://{}{}?key={}&q={}",
        scheme,
        VIRTUAL_EARTH_HOST,
        REST_LOCATIONS_PATH,
        urlencoding::encode(api_key),
        urlencoding::encode(location)
    )
}

/// Build a legacy (AJAX) dialect request URL
///
/// The legacy endpoint expects the query value wrapped in literal double
/// quotes, JSON-string style, before percent-encoding. It also requires a
/// fixed set of auxiliary parameters to be present but empty; `aux_tail` is
/// that static fragment, produced by [`legacy_aux_tail`] (callers cache it
/// since it never varies).
pub fn legacy_url(scheme: &str, location: &str, aux_tail: &str) -> String {
    let quoted = format!("\"{}\"", location);
    format!(
        "{}://{}{}?format=json&query={}{}",
        scheme,
        VIRTUAL_EARTH_HOST,
        LEGACY_GEOCODE_PATH,
        urlencoding::encode(&quoted),
        aux_tail
    )
}

/// Render the static empty auxiliary parameter tail for the legacy dialect
///
/// Identical for every call: `&addressLine=&adminDistrict=&...&rankBy=`.
pub fn legacy_aux_tail() -> String {
    let mut tail = String::new();
    for param in AUX_PARAMS {
        tail.push('&');
        tail.push_str(param);
        tail.push('=');
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url_shape() {
        let url = rest_url("http", "my-key", "Hollywood and Highland, Los Angeles, CA");
        assert!(url.starts_with("http://dev.virtualearth.net/REST/v1/Locations?"));
        assert!(url.contains("key=my-key"));
        assert!(url.contains("q=Hollywood%20and%20Highland%2C%20Los%20Angeles%2C%20CA"));
    }

    #[test]
    fn test_rest_url_secure_scheme() {
        let url = rest_url("https", "k", "Paris");
        assert!(url.starts_with("https://dev.virtualearth.net/"));
    }

    #[test]
    fn test_legacy_url_shape() {
        let url = legacy_url("http", "Paris", &legacy_aux_tail());
        assert!(url.starts_with(
            "http://dev.virtualearth.net/services/v1/geocodeservice/geocodeservice.asmx/Geocode?"
        ));
        assert!(url.contains("format=json"));
        // Location is double-quoted before encoding
        assert!(url.contains("query=%22Paris%22"));
    }

    #[test]
    fn test_legacy_url_has_all_aux_params() {
        let url = legacy_url("http", "Paris", &legacy_aux_tail());
        for param in AUX_PARAMS {
            assert!(
                url.contains(&format!("&{}=", param)),
                "missing auxiliary param: {}",
                param
            );
        }
    }

    #[test]
    fn test_legacy_quoting_survives_special_characters() {
        let url = legacy_url("http", "Martha's \"Vineyard\"", &legacy_aux_tail());
        // Outer quotes and embedded quotes all encode to %22
        assert!(url.contains("query=%22Martha%27s%20%22Vineyard%22%22"));
    }

    #[test]
    fn test_non_ascii_location_encodes_utf8_bytes() {
        let url = rest_url("http", "k", "Château d'Ussé, 37420, France");
        // "â" is C3 A2 and "é" is C3 A9 in UTF-8
        assert!(url.contains("q=Ch%C3%A2teau%20d%27Uss%C3%A9%2C%2037420%2C%20France"));
    }

    #[test]
    fn test_aux_tail_is_static() {
        assert_eq!(legacy_aux_tail(), legacy_aux_tail());
        assert!(legacy_aux_tail().starts_with("&addressLine="));
        assert!(legacy_aux_tail().ends_with("&rankBy="));
    }
}
