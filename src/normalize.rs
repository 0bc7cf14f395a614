//! Attribute-key normalization and validation.
//!
//! This is the core of the crate: it turns an unordered, string-keyed
//! attribute bag into a strictly ordered, gap-free, duplicate-free sequence
//! of values suitable for positional substitution.
//!
//! # Canonical indices
//!
//! A key parses to a canonical index when it consists of ASCII decimal digits
//! and nothing else. Leading zeros are permitted and normalized away, so
//! `"0"`, `"00"`, and `"000"` all mean index 0. No sign, no whitespace, no
//! trimming. Anything that deviates is an invalid key.
//!
//! # Classification order
//!
//! The outcome must not depend on the iteration order of the map, so keys are
//! sorted before classification and failures are checked in a fixed order
//! across the whole bag: invalid keys first, then duplicates, then gaps. A
//! bag with both an invalid key and a gap always reports the invalid key.

use crate::error::{Result, ValidationError};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Parse a key into its canonical index.
///
/// Returns `None` for anything that is not a pure unsigned decimal digit
/// string, including digit strings too large for `usize` (such a key could
/// never belong to a contiguous range anyway).
fn canonical_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<usize>().ok()
}

/// Convert an attribute bag into its ordered value sequence.
///
/// On success the returned vector has length N = (maximum canonical index)
/// + 1, with position `i` holding the value whose key normalized to `i`.
/// An empty bag yields an empty sequence (the renderer short-circuits before
/// getting here, but the function is total).
///
/// # Errors
///
/// * [`ValidationError::InvalidKey`] - a key is not an unsigned decimal
///   digit string (non-digits, a sign, blank, or any whitespace)
/// * [`ValidationError::DuplicateKey`] - two keys normalize to the same
///   index, e.g. `"0"` and `"00"` both present
/// * [`ValidationError::MissingIndex`] - the indices do not cover `0..N`
///   contiguously
///
/// The function is pure: for a given bag the result, success or specific
/// error, is fully determined.
pub fn ordered_values(attributes: &HashMap<String, Value>) -> Result<Vec<&Value>> {
    // Sorted entries make every reported error deterministic.
    let mut entries: Vec<(&String, &Value)> = attributes.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut by_index: BTreeMap<usize, (&String, &Value)> = BTreeMap::new();
    let mut duplicate: Option<ValidationError> = None;

    for (key, value) in entries {
        let index = match canonical_index(key) {
            Some(index) => index,
            None => {
                return Err(ValidationError::InvalidKey { key: key.clone() });
            }
        };

        if let Some((prev_key, _)) = by_index.insert(index, (key, value)) {
            // Remember the first collision, but keep scanning: a later
            // invalid key still takes priority.
            duplicate.get_or_insert(ValidationError::DuplicateKey {
                index,
                keys: (prev_key.clone(), key.clone()),
            });
        }
    }

    if let Some(err) = duplicate {
        return Err(err);
    }

    for (expected, &actual) in by_index.keys().enumerate() {
        if actual != expected {
            return Err(ValidationError::MissingIndex { index: expected });
        }
    }

    Ok(by_index.into_values().map(|(_, value)| value).collect())
}
