//! Decoder for GA4-style measurement protocol hits.
//!
//! Takes one raw "hit" as pasted from a browser's network inspector (a
//! full collector URL, a `/g/collect?...` path, a bare query string, or a
//! single base64-wrapped query string) and decodes it into an inspectable
//! tree of parameters. Dotted parameter names (`ep.user_data.address.0.city`)
//! are expanded into nested objects and arrays, a corrupted page location
//! is repaired best-effort, and the page's hostname is surfaced as a
//! synthetic `_extracted_domain` field.
//!
//! ```
//! let payload = hitparse::decode("v=2&tid=G-ABC123&en=page_view").unwrap();
//! assert_eq!(payload.event_name(), Some("page_view"));
//! assert_eq!(payload.measurement_id(), Some("G-ABC123"));
//! ```

pub mod error;
pub mod events;
pub mod observe;
pub mod pipeline;
pub mod sanitize;
pub mod value;

pub use error::{DecodeError, Result};
pub use observe::{DecodeObserver, FallbackStage, NoopObserver, TracingObserver};
pub use pipeline::{decode, decode_with_observer, RawPair};
pub use value::{keys, DecodedPayload, ParamValue, EXTRACTED_DOMAIN_KEY};
