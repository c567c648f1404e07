//! Observability hook for heuristic fallbacks.
//!
//! The decoder recovers silently from several failure classes (base64
//! recovery, URL sanitization, domain extraction). Callers that want to
//! count or log those recoveries inject a [`DecodeObserver`]; nothing is
//! written to global state.

/// Which recoverable heuristic fell back to its pass-through behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackStage {
    /// A single suspicious-looking pair did not unwrap to a nested query
    /// string; the original pair was kept.
    Base64Recovery,
    /// The sanitized page location would not parse as a URL; the
    /// percent-decoded original was kept.
    UrlSanitize,
    /// No hostname could be derived from the page location; no synthetic
    /// field was added.
    DomainExtraction,
}

impl FallbackStage {
    pub fn name(&self) -> &'static str {
        match self {
            FallbackStage::Base64Recovery => "base64_recovery",
            FallbackStage::UrlSanitize => "url_sanitize",
            FallbackStage::DomainExtraction => "domain_extraction",
        }
    }
}

/// Callback invoked when a heuristic falls back. Fallbacks are invisible in
/// the decoded output; this is the only place they surface.
pub trait DecodeObserver {
    fn heuristic_fallback(&self, stage: FallbackStage, detail: &str);
}

/// Observer that discards all events.
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {
    fn heuristic_fallback(&self, _stage: FallbackStage, _detail: &str) {}
}

/// Observer that reports fallbacks through `tracing` at debug level.
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn heuristic_fallback(&self, stage: FallbackStage, detail: &str) {
        tracing::debug!(stage = stage.name(), detail, "decode heuristic fell back");
    }
}
