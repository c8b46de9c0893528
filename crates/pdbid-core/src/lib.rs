//! # pdbid-core — Protein Structure Identifier Ranges
//!
//! Resolves a pair of possibly partial, possibly wildcarded four-symbol PDB
//! identifiers into a closed range, and enumerates every identifier in it
//! in a fixed total order.
//!
//! ## Stages
//!
//! 1. **Validation** ([`validate`]) — both bounds must be strings of at
//!    most 4 symbols after case folding.
//! 2. **Canonicalization** ([`canonical`]) — wildcards, partial bounds and
//!    the `*` token are expanded into two complete identifiers, which are
//!    then checked for ordering and leading symbol.
//! 3. **Enumeration** ([`range`]) — the range is walked as an integer
//!    interval over identifier ranks.
//!
//! ```
//! use pdbid_core::resolve;
//!
//! let range = resolve("9zz0", None).unwrap();
//! assert_eq!(range.len(), 36);
//! assert_eq!(range.iter().last().unwrap().as_str(), "9zzz");
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O, no shared state. Everything here is a pure function of its
//!   inputs.
//! - No `unsafe` code.
//! - No `panic!()`, `.unwrap()` or `.expect()` outside tests.
//! - Identifiers are never bare strings outside this crate: use [`PdbId`].

pub mod alphabet;
pub mod canonical;
pub mod error;
pub mod identity;
pub mod range;
pub mod resolve;
pub mod validate;

pub use error::{Bound, FormatErrorKind, ResolveError, ValidationError};
pub use identity::PdbId;
pub use range::{IdRange, IdRangeIter};
pub use resolve::{resolve, resolve_value};
pub use validate::ValidatedBounds;
