//! Hostname extraction from the sanitized page location.

use percent_encoding::percent_decode_str;
use url::Url;

/// Derive a hostname from the sanitized `dl` value, percent-decoding once
/// more defensively. Values pasted without a scheme get one retry with
/// `http://` prefixed. `None` means no hostname could be derived; that is
/// not an error.
pub fn extract_domain(location: &str) -> Option<String> {
    let decoded = percent_decode_str(location).decode_utf8().ok()?;

    if let Ok(url) = Url::parse(&decoded) {
        if let Some(host) = url.host_str() {
            return Some(host.to_string());
        }
    }

    Url::parse(&format!("http://{decoded}"))
        .ok()?
        .host_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_yields_host() {
        assert_eq!(
            extract_domain("https://shop.example.com/cart"),
            Some("shop.example.com".to_string())
        );
    }

    #[test]
    fn schemeless_value_gets_a_retry() {
        assert_eq!(
            extract_domain("example.com/landing"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn hostless_value_yields_none() {
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain(""), None);
    }

    #[test]
    fn encoded_location_is_decoded_first() {
        assert_eq!(
            extract_domain("https%3A%2F%2Fexample.com%2Fx"),
            Some("example.com".to_string())
        );
    }
}
