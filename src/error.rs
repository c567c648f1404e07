#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// No accepted input shape matched: not a URL, not a collector path,
    /// not a `?`-prefixed or bare query string.
    #[error("invalid input format")]
    InvalidInputFormat,

    /// The input looked like a URL (starts with "http") but would not parse
    /// as one. URL-looking input is never reinterpreted as raw pairs.
    #[error("invalid URL or query string format: {reason}")]
    InvalidUrlFormat { reason: String },

    /// A dotted key produced a structurally impossible tree path.
    #[error("parameter tree error: {reason}")]
    TreeBuild { reason: String },
}

impl DecodeError {
    /// The single user-visible message for a failed decode.
    ///
    /// Heuristic fallbacks (base64 recovery, URL sanitization, domain
    /// extraction) never reach this; only fatal errors do.
    pub fn user_message(&self) -> String {
        format!("Failed to decode payload: {self}")
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
