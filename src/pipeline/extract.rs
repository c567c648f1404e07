//! Input shape classification.

use url::Url;

use crate::error::{DecodeError, Result};

/// Path prefix used by GA4 collector hits pasted from network inspectors.
pub const COLLECT_PATH_PREFIX: &str = "/g/collect?";

/// Classify normalized input into one of the accepted shapes and yield its
/// raw query string. Checked in priority order:
///
/// 1. starts with `http` - absolute URL, yield its query component;
/// 2. starts with `/g/collect?` - collector path, yield what follows `?`;
/// 3. starts with `?` - yield the rest;
/// 4. contains `=` - already a bare query string, yield verbatim.
///
/// A failure to parse shape 1 as a URL is fatal: URL-looking input is never
/// silently reinterpreted as raw key/value text.
pub fn extract_query(input: &str) -> Result<String> {
    if input.starts_with("http") {
        let url = Url::parse(input).map_err(|err| DecodeError::InvalidUrlFormat {
            reason: err.to_string(),
        })?;
        return Ok(url.query().unwrap_or("").to_string());
    }

    if let Some(rest) = input.strip_prefix(COLLECT_PATH_PREFIX) {
        return Ok(rest.to_string());
    }

    if let Some(rest) = input.strip_prefix('?') {
        return Ok(rest.to_string());
    }

    if input.contains('=') {
        return Ok(input.to_string());
    }

    Err(DecodeError::InvalidInputFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_yields_query_component() {
        let query = extract_query(
            "https://region1.google-analytics.com/g/collect?v=2&tid=G-1&en=page_view",
        )
        .unwrap();
        assert_eq!(query, "v=2&tid=G-1&en=page_view");
    }

    #[test]
    fn url_without_query_yields_empty_string() {
        assert_eq!(extract_query("https://example.com/path").unwrap(), "");
    }

    #[test]
    fn collector_path_yields_tail() {
        assert_eq!(
            extract_query("/g/collect?v=2&en=scroll").unwrap(),
            "v=2&en=scroll"
        );
    }

    #[test]
    fn question_mark_prefix_is_stripped() {
        assert_eq!(extract_query("?en=page_view").unwrap(), "en=page_view");
    }

    #[test]
    fn bare_pairs_pass_verbatim() {
        assert_eq!(extract_query("en=page_view&v=2").unwrap(), "en=page_view&v=2");
    }

    #[test]
    fn unparseable_url_is_fatal_not_reinterpreted() {
        // Starts with "http" but has no scheme separator; even though it
        // contains `=`, it must not fall through to the bare-pairs case.
        let err = extract_query("httpgarbage=1").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn shapeless_input_is_rejected() {
        let err = extract_query("no equals no url").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInputFormat));
    }

    #[test]
    fn encoded_url_in_a_value_is_not_the_url_case() {
        // The "http" is inside a percent-encoded value, not at the start,
        // so this is a bare query string.
        let query = extract_query("dl=https%3A%2F%2Fexample.com%2Fx").unwrap();
        assert_eq!(query, "dl=https%3A%2F%2Fexample.com%2Fx");
    }
}
