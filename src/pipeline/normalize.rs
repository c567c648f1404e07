//! Whitespace cleanup for pasted payloads.

use std::sync::LazyLock;

use regex::Regex;

static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static EQ_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)\s*=\s*").unwrap());
static AMP_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*&\s*").unwrap());

/// Strip incidental whitespace from a pasted payload: collapse runs to a
/// single space, drop spaces around `=` and `&`, trim the ends.
///
/// Only structural separators are touched; percent-encoded and base64
/// content contains no whitespace and passes through unchanged.
pub fn normalize(input: &str) -> String {
    let collapsed = WS_RUN.replace_all(input, " ");
    let eq = EQ_SPACING.replace_all(&collapsed, "${1}=");
    let amp = AMP_SPACING.replace_all(&eq, "&");
    amp.trim().to_string()
}
