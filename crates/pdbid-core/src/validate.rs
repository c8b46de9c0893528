//! # Bound Validation
//!
//! First stage of range resolution. Decides whether a pair of raw bounds is
//! eligible for canonicalization at all: both must be strings, and each must
//! be at most 4 symbols long once folded to lowercase.
//!
//! Content checks (leading symbol, alphabet membership, ordering) are
//! deferred to [`crate::canonical`]. A wildcarded or partial bound is not in
//! final form yet and must not be judged by its raw spelling.

use serde_json::Value;

use crate::alphabet::ID_LEN;
use crate::error::{Bound, FormatErrorKind, ResolveError};
use crate::identity::PdbId;

/// Two bounds that passed validation: lowercase strings of at most 4 symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBounds {
    pub(crate) lower: String,
    pub(crate) upper: String,
}

impl ValidatedBounds {
    /// The folded lower bound.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// The folded upper bound.
    pub fn upper(&self) -> &str {
        &self.upper
    }
}

/// Validate two string bounds. An absent upper bound means [`PdbId::MAX`].
///
/// # Errors
///
/// Returns [`ResolveError::Format`] with [`FormatErrorKind::TooLong`] if a
/// bound is longer than 4 symbols after case folding.
pub fn validate_bounds(lower: &str, upper: Option<&str>) -> Result<ValidatedBounds, ResolveError> {
    let upper = upper.unwrap_or(PdbId::MAX.as_str());
    Ok(ValidatedBounds {
        lower: fold(Bound::Lower, lower)?,
        upper: fold(Bound::Upper, upper)?,
    })
}

/// Validate two bounds of arbitrary JSON type.
///
/// An absent or `null` upper bound means [`PdbId::MAX`]. A `null` lower
/// bound is a type error.
///
/// # Errors
///
/// Returns [`ResolveError::InputType`] if either bound is not a string
/// (lower is checked first), otherwise as [`validate_bounds`].
pub fn validate_values(
    lower: &Value,
    upper: Option<&Value>,
) -> Result<ValidatedBounds, ResolveError> {
    let lower = as_string(Bound::Lower, lower)?;
    let upper = match upper {
        None | Some(Value::Null) => None,
        Some(value) => Some(as_string(Bound::Upper, value)?),
    };
    validate_bounds(lower, upper)
}

fn as_string(bound: Bound, value: &Value) -> Result<&str, ResolveError> {
    value.as_str().ok_or(ResolveError::InputType {
        bound,
        found: json_type_name(value),
    })
}

fn fold(bound: Bound, raw: &str) -> Result<String, ResolveError> {
    let folded = raw.to_lowercase();
    if folded.chars().count() > ID_LEN {
        return Err(ResolveError::Format {
            bound,
            value: folded,
            kind: FormatErrorKind::TooLong,
        });
    }
    Ok(folded)
}

/// JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
