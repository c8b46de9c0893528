//! # Error Types
//!
//! Errors raised while turning raw range bounds into a canonical
//! [`IdRange`](crate::IdRange), and while constructing a
//! [`PdbId`](crate::PdbId) directly. All errors use `thiserror`.
//!
//! ## Design
//!
//! - Resolution failures are values, never panics. A failed resolution
//!   carries no partial output.
//! - Format errors name the offending bound and its value at the point the
//!   check failed.

use serde::Serialize;
use thiserror::Error;

/// Which end of a range an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// The lower (inclusive) bound.
    Lower,
    /// The upper (inclusive) bound.
    Upper,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// The specific way an identifier is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatErrorKind {
    /// More than 4 symbols after case folding, before wildcard resolution.
    TooLong,
    /// Canonical first symbol is a letter.
    LeadingLetter,
    /// Canonical first symbol is `0`.
    LeadingZero,
    /// A symbol outside `0-9a-z`.
    InvalidSymbol,
}

impl std::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong => f.write_str("longer than 4 symbols"),
            Self::LeadingLetter => f.write_str("first symbol is a letter"),
            Self::LeadingZero => f.write_str("first symbol is 0"),
            Self::InvalidSymbol => f.write_str("contains a symbol outside 0-9a-z"),
        }
    }
}

/// Why a pair of raw bounds could not be resolved into a range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A bound is not a string.
    #[error("{bound} bound must be a string, found {found}")]
    InputType {
        /// The offending bound.
        bound: Bound,
        /// JSON type name of the value supplied.
        found: &'static str,
    },

    /// A bound is malformed.
    #[error("{bound} bound {value:?} is malformed: {kind}")]
    Format {
        /// The offending bound.
        bound: Bound,
        /// The bound after case folding (and expansion, for content checks).
        value: String,
        /// What is wrong with it.
        kind: FormatErrorKind,
    },

    /// Canonical lower bound exceeds canonical upper bound.
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Order {
        /// Canonical lower bound.
        lower: String,
        /// Canonical upper bound.
        upper: String,
    },
}

impl ResolveError {
    /// The format error kind, if this is a format error.
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            Self::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Error constructing a canonical identifier directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not exactly 4 symbols.
    #[error("identifier {0:?} must be exactly 4 symbols")]
    WrongLength(String),

    /// Malformed content.
    #[error("identifier {value:?}: {kind}")]
    Format {
        /// The rejected value.
        value: String,
        /// What is wrong with it.
        kind: FormatErrorKind,
    },

    /// Rank does not map to any identifier.
    #[error("rank {0} is outside the identifier space")]
    RankOutOfRange(u32),
}
