//! Response decoding for both API dialects
//!
//! Turns a raw transport response into the list of result records. Every
//! per-request failure mode (non-success status, empty body, undecodable
//! text, malformed JSON, missing envelope) degrades to an empty list: the
//! absence of results is the uniform failure signal for callers.

use crate::dialect::Dialect;
use crate::transport::TransportResponse;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// REST dialect envelope: results live at `resourceSets[0].resources`
#[derive(Debug, Deserialize)]
struct RestEnvelope {
    #[serde(rename = "resourceSets", default)]
    resource_sets: Vec<ResourceSet>,
}

#[derive(Debug, Deserialize)]
struct ResourceSet {
    #[serde(default)]
    resources: Vec<Value>,
}

/// Legacy dialect envelope: results live at `d.Results`
#[derive(Debug, Deserialize)]
struct LegacyEnvelope {
    #[serde(default)]
    d: Option<LegacyBody>,
}

#[derive(Debug, Deserialize)]
struct LegacyBody {
    #[serde(rename = "Results", default)]
    results: Vec<Value>,
}

/// Decode a transport response into result records
///
/// Records are passed through in provider order with whatever shape the
/// chosen dialect returned; the two dialects are deliberately not unified.
pub fn decode(dialect: Dialect, response: &TransportResponse) -> Vec<Value> {
    if !response.is_success() || response.body.is_empty() {
        return Vec::new();
    }

    let text = decode_body(&response.body, response.charset.as_deref());
    let text = match dialect {
        Dialect::Legacy => fix_legacy_trailer(&text).map(Cow::Owned).unwrap_or(text),
        Dialect::Rest => text,
    };

    match dialect {
        Dialect::Rest => match serde_json::from_str::<RestEnvelope>(&text) {
            Ok(envelope) => envelope
                .resource_sets
                .into_iter()
                .next()
                .map(|set| set.resources)
                .unwrap_or_default(),
            Err(e) => {
                debug!("Discarding unparseable REST payload: {}", e);
                Vec::new()
            }
        },
        Dialect::Legacy => match serde_json::from_str::<LegacyEnvelope>(&text) {
            Ok(envelope) => envelope.d.map(|body| body.results).unwrap_or_default(),
            Err(e) => {
                debug!("Discarding unparseable legacy payload: {}", e);
                Vec::new()
            }
        },
    }
}

/// Decode raw body bytes into text
///
/// The provider mislabels its media type, so the declared type is never
/// trusted; bytes are decoded through the declared charset instead. The
/// service declares and emits UTF-8, so anything else (or no declaration)
/// is decoded as UTF-8 too, lossily, to keep non-ASCII address text intact
/// without ever failing the call.
fn decode_body<'a>(body: &'a [u8], _charset: Option<&str>) -> Cow<'a, str> {
    String::from_utf8_lossy(body)
}

/// Strip the malformed `}.d` trailer the legacy endpoint sometimes emits
///
/// An upstream defect occasionally appends `.d` after the closing brace;
/// the payload parses once the trailer is rewritten back to `}`. Applied
/// to the legacy dialect only. Returns `None` when no fix-up is needed.
fn fix_legacy_trailer(text: &str) -> Option<String> {
    text.trim_end()
        .strip_suffix("}.d")
        .map(|stripped| format!("{}}}", stripped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_response(body: &str) -> TransportResponse {
        TransportResponse {
            status: 200,
            charset: Some("utf-8".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    const REST_BODY: &str =
        r#"{"resourceSets":[{"resources":[{"address":{"postalCode":90028}}]}]}"#;
    const LEGACY_BODY: &str = r#"{"d":{"Results":[{"Address":{"PostalCode":"90028"}}]}}"#;

    #[test]
    fn test_rest_envelope_unwrap() {
        let results = decode(Dialect::Rest, &ok_response(REST_BODY));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["address"]["postalCode"], 90028);
    }

    #[test]
    fn test_legacy_envelope_unwrap() {
        let results = decode(Dialect::Legacy, &ok_response(LEGACY_BODY));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["Address"]["PostalCode"], "90028");
    }

    #[test]
    fn test_non_success_status_is_empty() {
        let mut response = ok_response(REST_BODY);
        response.status = 500;
        assert!(decode(Dialect::Rest, &response).is_empty());
    }

    #[test]
    fn test_empty_body_is_empty() {
        assert!(decode(Dialect::Rest, &ok_response("")).is_empty());
    }

    #[test]
    fn test_malformed_json_is_empty() {
        assert!(decode(Dialect::Rest, &ok_response("not json {")).is_empty());
        assert!(decode(Dialect::Legacy, &ok_response("not json {")).is_empty());
    }

    #[test]
    fn test_missing_envelope_is_empty() {
        assert!(decode(Dialect::Rest, &ok_response("{}")).is_empty());
        assert!(decode(Dialect::Legacy, &ok_response("{}")).is_empty());
        assert!(decode(Dialect::Rest, &ok_response(r#"{"resourceSets":[]}"#)).is_empty());
        assert!(decode(Dialect::Legacy, &ok_response(r#"{"d":{}}"#)).is_empty());
    }

    #[test]
    fn test_legacy_trailer_is_stripped() {
        let broken = format!("{}.d", LEGACY_BODY);
        let results = decode(Dialect::Legacy, &ok_response(&broken));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["Address"]["PostalCode"], "90028");
    }

    #[test]
    fn test_rest_dialect_does_not_strip_trailer() {
        // The same broken suffix under the REST dialect stays malformed
        let broken = format!("{}.d", REST_BODY);
        assert!(decode(Dialect::Rest, &ok_response(&broken)).is_empty());
    }

    #[test]
    fn test_provider_order_is_preserved() {
        let body = r#"{"resourceSets":[{"resources":[{"name":"a"},{"name":"b"},{"name":"c"}]}]}"#;
        let results = decode(Dialect::Rest, &ok_response(body));
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["name"], "a");
        assert_eq!(results[1]["name"], "b");
        assert_eq!(results[2]["name"], "c");
    }

    #[test]
    fn test_non_ascii_addresses_decode() {
        let body = r#"{"resourceSets":[{"resources":[{"name":"Château d'Ussé"}]}]}"#;
        let results = decode(Dialect::Rest, &ok_response(body));
        assert_eq!(results[0]["name"], "Château d'Ussé");
    }

    #[test]
    fn test_trailer_fixup_helper() {
        assert_eq!(
            fix_legacy_trailer(r#"{"d":{}}.d"#).as_deref(),
            Some(r#"{"d":{}}"#)
        );
        assert_eq!(fix_legacy_trailer(r#"{"d":{}}"#), None);
    }
}
