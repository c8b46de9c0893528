//! # Range Resolution
//!
//! Entry points composing the three stages: validation, canonicalization
//! and enumeration. Resolution is pure. It touches no shared state and may
//! be called concurrently with any inputs.

use serde_json::Value;

use crate::canonical::canonicalize;
use crate::error::ResolveError;
use crate::range::IdRange;
use crate::validate::{validate_bounds, validate_values};

/// Resolve two string bounds into a canonical range.
///
/// `upper` defaults to `9zzz` when absent. Either bound may be partial
/// (`1a`), wildcarded (`1a*`) or the plain token `*`. Iterate the returned
/// range for the ordered identifiers.
///
/// # Errors
///
/// Returns a [`ResolveError`] describing the first problem found. No
/// identifiers are produced for a rejected range.
///
/// # Examples
///
/// ```
/// let range = pdbid_core::resolve("1000", Some("1002")).unwrap();
/// let ids: Vec<String> = range.iter().map(|id| id.to_string()).collect();
/// assert_eq!(ids, ["1000", "1001", "1002"]);
/// ```
pub fn resolve(lower: &str, upper: Option<&str>) -> Result<IdRange, ResolveError> {
    canonicalize(&validate_bounds(lower, upper)?)
}

/// Resolve two bounds of arbitrary JSON type into a canonical range.
///
/// Non-string bounds are rejected with [`ResolveError::InputType`]. An
/// absent or `null` upper bound defaults to `9zzz`.
///
/// # Errors
///
/// As [`resolve`], plus [`ResolveError::InputType`].
pub fn resolve_value(lower: &Value, upper: Option<&Value>) -> Result<IdRange, ResolveError> {
    canonicalize(&validate_values(lower, upper)?)
}
