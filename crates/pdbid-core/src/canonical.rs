//! # Range Canonicalization
//!
//! Second stage of range resolution. Turns two validated bounds (lowercase,
//! at most 4 symbols, possibly wildcarded or partial) into two complete
//! canonical identifiers.
//!
//! The steps run in a fixed order:
//!
//! 1. A bound that is exactly `*` becomes the sentinel `1000` (lower) or
//!    `9zzz` (upper).
//! 2. A bound containing `*` is truncated at the marker and right-padded
//!    with `0`.
//! 3. A bound shorter than 4 symbols is right-padded with `0`, so `1a`
//!    and `1a*` both become `1a00`.
//! 4. Ordering and leading-symbol checks run on the expanded bounds.
//!
//! Checking order or leading symbols before expansion rejects valid
//! wildcarded ranges, so step 4 must stay last.

use crate::alphabet::{ID_LEN, MIN_SYMBOL, WILDCARD};
use crate::error::{Bound, FormatErrorKind, ResolveError};
use crate::identity::PdbId;
use crate::range::IdRange;
use crate::validate::ValidatedBounds;

const WILDCARD_TOKEN: &str = "*";

/// Canonicalize validated bounds into a range.
///
/// # Errors
///
/// - [`ResolveError::Order`] if the expanded lower bound exceeds the upper
///   one (not checked when either raw bound was the plain `*` token).
/// - [`ResolveError::Format`] with [`FormatErrorKind::LeadingLetter`],
///   [`FormatErrorKind::LeadingZero`] or [`FormatErrorKind::InvalidSymbol`],
///   checked in that order across both bounds.
pub fn canonicalize(bounds: &ValidatedBounds) -> Result<IdRange, ResolveError> {
    let lower_is_token = bounds.lower == WILDCARD_TOKEN;
    let upper_is_token = bounds.upper == WILDCARD_TOKEN;

    let (lower, upper) = match (lower_is_token, upper_is_token) {
        (true, true) => (PdbId::MIN.to_string(), PdbId::MAX.to_string()),
        (false, true) => (bounds.lower.clone(), PdbId::MAX.to_string()),
        (true, false) => (PdbId::MIN.to_string(), bounds.upper.clone()),
        (false, false) => (bounds.lower.clone(), bounds.upper.clone()),
    };

    let lower = pad(truncate_at_wildcard(&lower));
    let upper = pad(truncate_at_wildcard(&upper));

    if !(lower_is_token || upper_is_token) && lower > upper {
        return Err(ResolveError::Order { lower, upper });
    }

    let candidates = [(Bound::Lower, lower), (Bound::Upper, upper)];
    let checks: [fn(&str) -> Option<FormatErrorKind>; 3] =
        [leading_letter, leading_zero, invalid_symbol];
    for check in checks {
        for (bound, value) in &candidates {
            if let Some(kind) = check(value.as_str()) {
                return Err(ResolveError::Format {
                    bound: *bound,
                    value: value.clone(),
                    kind,
                });
            }
        }
    }

    let [(_, lower), (_, upper)] = candidates;
    let range = IdRange::from_checked(to_id(&lower), to_id(&upper));
    tracing::debug!(
        raw_lower = %bounds.lower,
        raw_upper = %bounds.upper,
        lower = %range.lower(),
        upper = %range.upper(),
        "canonicalized identifier range"
    );
    Ok(range)
}

fn truncate_at_wildcard(value: &str) -> &str {
    match value.find(WILDCARD) {
        Some(pos) => &value[..pos],
        None => value,
    }
}

fn pad(value: &str) -> String {
    let mut padded = value.to_string();
    let missing = ID_LEN.saturating_sub(value.chars().count());
    padded.extend(std::iter::repeat(MIN_SYMBOL).take(missing));
    padded
}

fn leading_letter(value: &str) -> Option<FormatErrorKind> {
    value
        .starts_with(|c: char| c.is_ascii_lowercase())
        .then_some(FormatErrorKind::LeadingLetter)
}

fn leading_zero(value: &str) -> Option<FormatErrorKind> {
    value
        .starts_with(MIN_SYMBOL)
        .then_some(FormatErrorKind::LeadingZero)
}

fn invalid_symbol(value: &str) -> Option<FormatErrorKind> {
    let valid = <[u8; ID_LEN]>::try_from(value.as_bytes())
        .map(|bytes| crate::identity::check_symbols(&bytes).is_ok())
        .unwrap_or(false);
    (!valid).then_some(FormatErrorKind::InvalidSymbol)
}

/// Only called after `invalid_symbol` accepted the value.
fn to_id(value: &str) -> PdbId {
    let mut bytes = [0u8; ID_LEN];
    bytes.copy_from_slice(value.as_bytes());
    PdbId::from_checked(bytes)
}
