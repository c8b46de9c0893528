//! # PDB Identifier Newtype
//!
//! [`PdbId`] is a canonical four-symbol protein structure identifier:
//! a leading symbol in `1`–`9` followed by three symbols from Σ
//! (`0`–`9`, `a`–`z`). Construction validates; an existing `PdbId` is
//! always canonical.
//!
//! ## Rank
//!
//! Every identifier has a rank in `0..PdbId::COUNT`, its value as a
//! mixed-radix number (radix 9 at position 0, radix 36 elsewhere). Rank
//! order and Σ-order agree, which is what makes range enumeration a walk
//! over an integer interval.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alphabet::{self, ID_LEN, LEADING_RADIX, RADIX};
use crate::error::{FormatErrorKind, ValidationError};

const RADIX_CUBED: u32 = RADIX * RADIX * RADIX;

/// A canonical PDB identifier, e.g. `1abc`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PdbId([u8; ID_LEN]);

impl PdbId {
    /// The smallest canonical identifier, `1000`.
    pub const MIN: PdbId = PdbId(*b"1000");

    /// The largest canonical identifier, `9zzz`.
    pub const MAX: PdbId = PdbId(*b"9zzz");

    /// Number of canonical identifiers (9 × 36³).
    pub const COUNT: u32 = LEADING_RADIX * RADIX_CUBED;

    /// Parse a canonical identifier. Case is folded before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongLength`] unless the value has exactly
    /// 4 symbols, and [`ValidationError::Format`] if it does not start with
    /// `1`–`9` or contains a symbol outside Σ.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let folded = value.as_ref().to_lowercase();
        let bytes: [u8; ID_LEN] = folded
            .as_bytes()
            .try_into()
            .map_err(|_| ValidationError::WrongLength(folded.clone()))?;
        check_symbols(&bytes).map_err(|kind| ValidationError::Format {
            value: folded,
            kind,
        })?;
        Ok(Self(bytes))
    }

    /// Build from four bytes already checked by the canonicalizer.
    pub(crate) fn from_checked(bytes: [u8; ID_LEN]) -> Self {
        debug_assert!(check_symbols(&bytes).is_ok());
        Self(bytes)
    }

    /// The identifier with the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RankOutOfRange`] if `rank >= PdbId::COUNT`.
    pub fn from_rank(rank: u32) -> Result<Self, ValidationError> {
        if rank >= Self::COUNT {
            return Err(ValidationError::RankOutOfRange(rank));
        }
        Ok(Self::decode(rank))
    }

    /// Decode a rank known to be below [`PdbId::COUNT`].
    pub(crate) fn decode(rank: u32) -> Self {
        let mut rest = rank;
        let d3 = rest % RADIX;
        rest /= RADIX;
        let d2 = rest % RADIX;
        rest /= RADIX;
        let d1 = rest % RADIX;
        rest /= RADIX;
        // rest is now the leading digit minus one, in 0..9
        Self([
            alphabet::symbol_at(rest + 1),
            alphabet::symbol_at(d1),
            alphabet::symbol_at(d2),
            alphabet::symbol_at(d3),
        ])
    }

    /// Position of this identifier in Σ-order, starting at 0 for `1000`.
    pub fn rank(&self) -> u32 {
        let digit = |b: u8| alphabet::symbol_index(b).unwrap_or(0);
        (digit(self.0[0]) - 1) * RADIX_CUBED
            + digit(self.0[1]) * RADIX * RADIX
            + digit(self.0[2]) * RADIX
            + digit(self.0[3])
    }

    /// The next identifier in Σ-order, or `None` after `9zzz`.
    pub fn successor(&self) -> Option<Self> {
        Self::from_rank(self.rank() + 1).ok()
    }

    /// The previous identifier in Σ-order, or `None` before `1000`.
    pub fn predecessor(&self) -> Option<Self> {
        self.rank().checked_sub(1).map(Self::decode)
    }

    /// A uniformly random canonical identifier.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::decode(rng.gen_range(0..Self::COUNT))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        // Every constructor stores bytes drawn from the ASCII alphabet, so
        // the conversion cannot fail and the empty fallback is never taken.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Uppercase form, as used in structure archive file names.
    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

/// Content checks for a four-symbol, case-folded identifier.
///
/// Leading-symbol problems take precedence over symbols outside Σ.
pub(crate) fn check_symbols(bytes: &[u8; ID_LEN]) -> Result<(), FormatErrorKind> {
    match bytes[0] {
        b'a'..=b'z' => return Err(FormatErrorKind::LeadingLetter),
        b'0' => return Err(FormatErrorKind::LeadingZero),
        _ => {}
    }
    if !alphabet::is_leading_symbol(bytes[0])
        || bytes[1..].iter().any(|&b| alphabet::symbol_index(b).is_none())
    {
        return Err(FormatErrorKind::InvalidSymbol);
    }
    Ok(())
}

impl std::fmt::Display for PdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for PdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PdbId({})", self.as_str())
    }
}

impl std::str::FromStr for PdbId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PdbId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for PdbId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Routes through `new()` so invalid identifiers are rejected at
// deserialization time.
impl<'de> Deserialize<'de> for PdbId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
