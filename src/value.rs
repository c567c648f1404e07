use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Synthetic top-level key added when a hostname could be derived from the
/// page location. Never present in the wire payload itself.
pub const EXTRACTED_DOMAIN_KEY: &str = "_extracted_domain";

/// Well-known measurement protocol parameter names consumed by collaborators.
pub mod keys {
    /// Event name.
    pub const EVENT_NAME: &str = "en";

    /// Page location (the URL of the page that generated the hit).
    pub const PAGE_LOCATION: &str = "dl";

    /// Measurement/property ID, e.g. `G-XXXXXXX`. Read-only passthrough.
    pub const MEASUREMENT_ID: &str = "tid";
}

/// A decoded parameter value.
///
/// Every leaf is a `Scalar` string; no coercion to numbers or booleans
/// happens at parse time. Arrays only ever appear where a dotted key named
/// a numeric path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    Array(Vec<ParamValue>),
    Object(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, ParamValue>> {
        match self {
            ParamValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Variant name, for error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ParamValue::Scalar(_) => "scalar",
            ParamValue::Array(_) => "array",
            ParamValue::Object(_) => "object",
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Scalar(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Scalar(s.to_string())
    }
}

/// The decoded parameter tree for one hit.
///
/// Always a top-level object mapping parameter names to [`ParamValue`]s.
/// Built fresh on every decode call and immutable once returned; payloads
/// are never merged or cached across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedPayload {
    params: BTreeMap<String, ParamValue>,
}

impl DecodedPayload {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// The value for `key` if it is a top-level scalar.
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(ParamValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Event name (`en`), if present as a scalar.
    pub fn event_name(&self) -> Option<&str> {
        self.get_scalar(keys::EVENT_NAME)
    }

    /// Page location (`dl`) after sanitization, if present as a scalar.
    pub fn page_location(&self) -> Option<&str> {
        self.get_scalar(keys::PAGE_LOCATION)
    }

    /// Measurement ID (`tid`), if present as a scalar.
    pub fn measurement_id(&self) -> Option<&str> {
        self.get_scalar(keys::MEASUREMENT_ID)
    }

    /// The synthetic `_extracted_domain` field, if domain extraction
    /// succeeded.
    pub fn extracted_domain(&self) -> Option<&str> {
        self.get_scalar(EXTRACTED_DOMAIN_KEY)
    }

    pub(crate) fn set_scalar(&mut self, key: &str, value: String) {
        self.params
            .insert(key.to_string(), ParamValue::Scalar(value));
    }
}

impl From<BTreeMap<String, ParamValue>> for DecodedPayload {
    fn from(params: BTreeMap<String, ParamValue>) -> Self {
        Self { params }
    }
}
