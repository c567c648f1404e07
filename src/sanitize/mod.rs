//! Best-effort repair of a corrupted page location.
//!
//! Page locations arrive mangled in predictable ways: spaces injected by
//! copy/paste, registered-trademark glyphs from rich-text editors, Cyrillic
//! homoglyphs substituted for Latin letters by lookalike-domain campaigns,
//! and stray brackets. The sanitizer scrubs those and re-serializes the
//! value through a real URL parser; if the scrubbed value still will not
//! parse, the original is kept untouched.

pub mod domain;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::observe::{DecodeObserver, FallbackStage};

/// Repair the `dl` value. Operates on the percent-decoded form (payloads
/// carry it encoded once more); returns the canonical serialization of the
/// repaired URL, or the percent-decoded original when repair fails. Never
/// errors.
pub fn sanitize_location(raw: &str, observer: &dyn DecodeObserver) -> String {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    let scrubbed = scrub(&decoded);
    match Url::parse(&scrubbed) {
        Ok(url) => url.to_string(),
        Err(err) => {
            observer.heuristic_fallback(FallbackStage::UrlSanitize, &err.to_string());
            decoded
        }
    }
}

/// Character-level scrub: drop whitespace, `®`, and brackets; map `@` to
/// `/`; transliterate the Cyrillic homoglyphs с/х/е/і/а to their Latin
/// look-alikes; drop anything else outside ASCII.
fn scrub(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => None,
            '®' | '[' | ']' => None,
            '@' => Some('/'),
            '\u{0441}' => Some('c'),
            '\u{0445}' => Some('x'),
            '\u{0435}' => Some('e'),
            '\u{0456}' => Some('i'),
            '\u{0430}' => Some('a'),
            c if !c.is_ascii() => None,
            c => Some(c),
        })
        .collect()
}
