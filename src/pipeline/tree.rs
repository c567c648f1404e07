//! Dotted-key expansion into a nested parameter tree.

use std::collections::BTreeMap;

use crate::error::{DecodeError, Result};
use crate::pipeline::resolve::RawPair;
use crate::value::{keys, ParamValue};

/// Expand resolved pairs into a nested tree. Undotted keys become top-level
/// scalars. Scalar values are whitespace-collapsed and trimmed, except the
/// page location, whose cleanup is the sanitizer's job.
pub fn build_tree(pairs: &[RawPair]) -> Result<BTreeMap<String, ParamValue>> {
    let mut root = BTreeMap::new();

    for (key, value) in pairs {
        let cleaned = if key == keys::PAGE_LOCATION {
            value.clone()
        } else {
            collapse_whitespace(value)
        };

        if key.contains('.') {
            insert_dotted(&mut root, key, cleaned)?;
        } else {
            root.insert(key.clone(), ParamValue::Scalar(cleaned));
        }
    }

    Ok(root)
}

/// Walk a dotted key's segments, growing containers as needed, and set the
/// value under the final segment.
///
/// The array rule is deliberate and quirky: a numeric segment does not name
/// a field itself; it indexes into an array stored under the *previous*
/// segment's name on the current object. The walk therefore never descends
/// into a name whose following segment is numeric; that name becomes the
/// array-valued field right where the cursor stands.
/// `ep.user_data.address.0.city` builds
/// `{ep: {user_data: {address: [{city: ...}]}}}` with `address` as the
/// array. Downstream consumers rely on this shape, so it is reproduced
/// exactly rather than corrected.
fn insert_dotted(
    root: &mut BTreeMap<String, ParamValue>,
    key: &str,
    value: String,
) -> Result<()> {
    let segments: Vec<&str> = key.split('.').collect();
    let (last, walk) = segments
        .split_last()
        .expect("split('.') yields at least one segment");

    let mut cursor: &mut BTreeMap<String, ParamValue> = root;
    for (i, segment) in walk.iter().enumerate() {
        if let Ok(index) = segment.parse::<usize>() {
            let Some(array_name) = i.checked_sub(1).map(|prev| walk[prev]) else {
                return Err(DecodeError::TreeBuild {
                    reason: format!("numeric segment {segment:?} opens key {key:?}"),
                });
            };

            let slot = cursor
                .entry(array_name.to_string())
                .or_insert_with(|| ParamValue::Array(Vec::new()));
            let items = match slot {
                ParamValue::Array(items) => items,
                other => {
                    return Err(DecodeError::TreeBuild {
                        reason: format!(
                            "segment {array_name:?} of key {key:?} is already a {}",
                            other.kind()
                        ),
                    })
                }
            };

            if items.len() <= index {
                items.resize_with(index + 1, || ParamValue::Object(BTreeMap::new()));
            }
            cursor = match &mut items[index] {
                ParamValue::Object(map) => map,
                other => {
                    return Err(DecodeError::TreeBuild {
                        reason: format!(
                            "index {index} under {array_name:?} in key {key:?} is already a {}",
                            other.kind()
                        ),
                    })
                }
            };
        } else {
            // A numeric segment next means this name holds the array on the
            // current object; the index step below consumes it, so do not
            // descend here.
            if walk
                .get(i + 1)
                .is_some_and(|next| next.parse::<usize>().is_ok())
            {
                continue;
            }

            let slot = cursor
                .entry(segment.to_string())
                .or_insert_with(|| ParamValue::Object(BTreeMap::new()));
            cursor = match slot {
                ParamValue::Object(map) => map,
                other => {
                    return Err(DecodeError::TreeBuild {
                        reason: format!(
                            "segment {segment:?} of key {key:?} is already a {}",
                            other.kind()
                        ),
                    })
                }
            };
        }
    }

    cursor.insert(last.to_string(), ParamValue::Scalar(value));
    Ok(())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
