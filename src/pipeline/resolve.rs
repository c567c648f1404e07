//! Base64-wrapped payload disambiguation.
//!
//! Some clients transmit the whole hit as a single base64-wrapped query
//! string. After ordinary pair parsing, a lone pair whose value sits in the
//! base64 character class is suspected of being such a wrapper and a
//! recovery is attempted. Every sub-step must succeed for the wrapper to be
//! accepted; any failure keeps the original pair untouched.

use std::sync::LazyLock;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::observe::{DecodeObserver, FallbackStage};

/// One url-decoded key/value pair from a query string.
pub type RawPair = (String, String);

// Standard and URL-safe base64 alphabets, plus padding.
static BASE64_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=_-]*$").unwrap());

/// Parse a query string into ordered, url-decoded pairs.
pub fn parse_pairs(query: &str) -> Vec<RawPair> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Parse `query` and, when it holds exactly one base64-looking pair, try to
/// unwrap it into the richer pair set it encodes. Zero pairs, multiple
/// pairs, or a value outside the base64 charset pass through unchanged, as
/// does any recovery failure.
pub fn resolve_pairs(query: &str, observer: &dyn DecodeObserver) -> Vec<RawPair> {
    let pairs = parse_pairs(query);
    if pairs.len() != 1 {
        return pairs;
    }

    let value = &pairs[0].1;
    if !BASE64_VALUE.is_match(value) {
        return pairs;
    }

    match recover_wrapped(value) {
        Some(inner) => inner,
        None => {
            observer.heuristic_fallback(
                FallbackStage::Base64Recovery,
                "single pair did not unwrap to a nested query string",
            );
            pairs
        }
    }
}

/// The recovery ladder. Payloads are sometimes double-encoded, so the value
/// is percent-decoded once more before the base64 decode. The decoded text
/// is accepted as a nested query string only if it looks like one: UTF-8,
/// contains `=`, free of `;`.
fn recover_wrapped(value: &str) -> Option<Vec<RawPair>> {
    let unescaped = percent_decode_str(value).decode_utf8().ok()?;
    let decoded = decode_base64(&unescaped)?;
    let text = String::from_utf8(decoded).ok()?;

    if !text.contains('=') || text.contains(';') {
        return None;
    }

    let inner = parse_pairs(&text);
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

/// Standard alphabet first; the URL-safe alphabet (with padding stripped)
/// covers values carrying `-` or `_`, which the charset admits.
fn decode_base64(input: &str) -> Option<Vec<u8>> {
    STANDARD
        .decode(input)
        .or_else(|_| URL_SAFE_NO_PAD.decode(input.trim_end_matches('=')))
        .ok()
}
