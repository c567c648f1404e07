//! The decoding pipeline.
//!
//! Stages run strictly left to right: normalize the pasted text, classify
//! its shape and pull out the query string, resolve a possible base64
//! wrapper into plain pairs, expand dotted keys into a tree, then repair
//! the page location and enrich the tree with its hostname. Only shape
//! classification and tree building may fail; everything else recovers in
//! place and reports through the observer.

pub mod extract;
pub mod normalize;
pub mod resolve;
pub mod tree;

pub use resolve::RawPair;

use crate::error::Result;
use crate::observe::{DecodeObserver, FallbackStage, TracingObserver};
use crate::sanitize;
use crate::value::{keys, DecodedPayload, EXTRACTED_DOMAIN_KEY};

/// Decode a raw hit into a parameter tree.
///
/// Accepts an absolute URL, a `/g/collect?...` path, a `?`-prefixed query
/// string, or bare `key=value&...` pairs; a single base64-wrapped pair is
/// unwrapped when it survives every recovery heuristic. Pure and
/// deterministic: the same input always yields a structurally identical
/// tree. Heuristic fallbacks are logged through `tracing` at debug level;
/// use [`decode_with_observer`] to capture them yourself.
pub fn decode(input: &str) -> Result<DecodedPayload> {
    decode_with_observer(input, &TracingObserver)
}

/// [`decode`] with an injected observer for heuristic-fallback events.
pub fn decode_with_observer(
    input: &str,
    observer: &dyn DecodeObserver,
) -> Result<DecodedPayload> {
    let normalized = normalize::normalize(input);
    let query = extract::extract_query(&normalized)?;
    let pairs = resolve::resolve_pairs(&query, observer);
    let mut payload = DecodedPayload::from(tree::build_tree(&pairs)?);

    if let Some(raw_location) = payload.get_scalar(keys::PAGE_LOCATION).map(str::to_string) {
        let location = sanitize::sanitize_location(&raw_location, observer);
        match sanitize::domain::extract_domain(&location) {
            Some(host) => payload.set_scalar(EXTRACTED_DOMAIN_KEY, host),
            None => observer.heuristic_fallback(
                FallbackStage::DomainExtraction,
                "page location has no extractable hostname",
            ),
        }
        payload.set_scalar(keys::PAGE_LOCATION, location);
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn flat_query_decodes_to_flat_map() {
        let payload = decode("v=2&tid=G-ABC123&en=page_view").unwrap();
        assert_eq!(payload.get_scalar("v"), Some("2"));
        assert_eq!(payload.measurement_id(), Some("G-ABC123"));
        assert_eq!(payload.event_name(), Some("page_view"));
    }

    #[test]
    fn shapeless_input_surfaces_one_error() {
        let err = decode("no equals no url").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInputFormat));
        assert_eq!(
            err.user_message(),
            "Failed to decode payload: invalid input format"
        );
    }

    #[test]
    fn page_location_is_sanitized_and_domain_extracted() {
        let payload = decode("dl=https%3A%2F%2Fex%D0%B0mple.com%2Fx").unwrap();
        assert_eq!(payload.page_location(), Some("https://example.com/x"));
        assert_eq!(payload.extracted_domain(), Some("example.com"));
    }

    #[test]
    fn empty_query_url_decodes_to_empty_payload() {
        let payload = decode("https://example.com/path").unwrap();
        assert!(payload.is_empty());
    }
}
