//! # Identifier Ranges and Enumeration
//!
//! [`IdRange`] is a closed interval of canonical identifiers with
//! `lower <= upper`. [`IdRangeIter`] walks it in Σ-order.
//!
//! Enumeration maps both bounds to their rank, iterates the integer
//! interval between them, and decodes each integer back into an identifier.
//! No candidate outside the range is ever generated, so there is nothing to
//! prune. The iterator is lazy and holds only two cursors; iterating the same
//! range again starts from the beginning.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::identity::PdbId;

/// A non-empty, closed range of canonical identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdRange {
    lower: PdbId,
    upper: PdbId,
}

impl IdRange {
    /// Build a range from two canonical identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Order`] if `lower > upper`.
    pub fn new(lower: PdbId, upper: PdbId) -> Result<Self, ResolveError> {
        if lower > upper {
            return Err(ResolveError::Order {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// The range of every canonical identifier, `1000..=9zzz`.
    pub fn full() -> Self {
        Self {
            lower: PdbId::MIN,
            upper: PdbId::MAX,
        }
    }

    /// A range holding exactly one identifier.
    pub fn single(id: PdbId) -> Self {
        Self {
            lower: id,
            upper: id,
        }
    }

    pub(crate) fn from_checked(lower: PdbId, upper: PdbId) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> PdbId {
        self.lower
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> PdbId {
        self.upper
    }

    /// Number of identifiers in the range. Always at least 1.
    pub fn len(&self) -> usize {
        (self.upper.rank() - self.lower.rank()) as usize + 1
    }

    /// Always `false`; a range holds at least one identifier.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `id` lies within the range.
    pub fn contains(&self, id: &PdbId) -> bool {
        self.lower <= *id && *id <= self.upper
    }

    /// Iterate the range in increasing Σ-order.
    pub fn iter(&self) -> IdRangeIter {
        IdRangeIter {
            front: self.lower.rank(),
            end: self.upper.rank() + 1,
        }
    }

    /// A uniformly random identifier within the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PdbId {
        PdbId::decode(rng.gen_range(self.lower.rank()..=self.upper.rank()))
    }
}

impl std::fmt::Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.lower, self.upper)
    }
}

impl<'de> Deserialize<'de> for IdRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lower: PdbId,
            upper: PdbId,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.lower, raw.upper).map_err(serde::de::Error::custom)
    }
}

impl IntoIterator for IdRange {
    type Item = PdbId;
    type IntoIter = IdRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IdRange {
    type Item = PdbId;
    type IntoIter = IdRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over an [`IdRange`].
#[derive(Debug, Clone)]
pub struct IdRangeIter {
    /// Rank of the next identifier from the front.
    front: u32,
    /// One past the rank of the next identifier from the back.
    end: u32,
}

impl Iterator for IdRangeIter {
    type Item = PdbId;

    fn next(&mut self) -> Option<PdbId> {
        if self.front >= self.end {
            return None;
        }
        let id = PdbId::decode(self.front);
        self.front += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.front) as usize;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<PdbId> {
        let skip = u32::try_from(n).unwrap_or(u32::MAX);
        self.front = self.front.saturating_add(skip).min(self.end);
        self.next()
    }

    fn last(mut self) -> Option<PdbId> {
        self.next_back()
    }
}

impl DoubleEndedIterator for IdRangeIter {
    fn next_back(&mut self) -> Option<PdbId> {
        if self.front >= self.end {
            return None;
        }
        self.end -= 1;
        Some(PdbId::decode(self.end))
    }
}

impl ExactSizeIterator for IdRangeIter {}

impl std::iter::FusedIterator for IdRangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn id(s: &str) -> PdbId {
        PdbId::new(s).unwrap()
    }

    fn strings(range: IdRange) -> Vec<String> {
        range.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn new_rejects_inverted() {
        assert!(matches!(
            IdRange::new(id("2000"), id("1000")),
            Err(ResolveError::Order { .. })
        ));
        assert!(IdRange::new(id("1000"), id("1000")).is_ok());
    }

    #[test]
    fn small_range() {
        let range = IdRange::new(id("1000"), id("1002")).unwrap();
        assert_eq!(strings(range), ["1000", "1001", "1002"]);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn crosses_digit_boundaries() {
        let range = IdRange::new(id("1zzy"), id("2001")).unwrap();
        assert_eq!(strings(range), ["1zzy", "1zzz", "2000", "2001"]);
        let range = IdRange::new(id("19zz"), id("1a00")).unwrap();
        assert_eq!(strings(range), ["19zz", "1a00"]);
    }

    #[test]
    fn tail_of_space() {
        let range = IdRange::new(id("9zz0"), id("9zzz")).unwrap();
        let all = strings(range);
        assert_eq!(all.len(), 36);
        assert_eq!(all.first().map(String::as_str), Some("9zz0"));
        assert_eq!(all[9], "9zz9");
        assert_eq!(all[10], "9zza");
        assert_eq!(all.last().map(String::as_str), Some("9zzz"));
    }

    #[test]
    fn single_range() {
        let x = id("4hhb");
        assert_eq!(IdRange::single(x).iter().collect::<Vec<_>>(), vec![x]);
    }

    #[test]
    fn full_range_size() {
        let range = IdRange::full();
        assert_eq!(range.len(), PdbId::COUNT as usize);
        assert_eq!(range.iter().len(), 419_904);
        assert_eq!(range.iter().next(), Some(PdbId::MIN));
        assert_eq!(range.iter().next_back(), Some(PdbId::MAX));
    }

    #[test]
    fn iterator_is_restartable() {
        let range = IdRange::new(id("1a00"), id("1a05")).unwrap();
        let first: Vec<_> = range.iter().collect();
        let second: Vec<_> = range.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn double_ended_meets_in_middle() {
        let range = IdRange::new(id("1000"), id("1003")).unwrap();
        let mut it = range.iter();
        assert_eq!(it.next(), Some(id("1000")));
        assert_eq!(it.next_back(), Some(id("1003")));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(id("1002")));
        assert_eq!(it.next(), Some(id("1001")));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn nth_skips_without_overrun() {
        let range = IdRange::new(id("1000"), id("100z")).unwrap();
        let mut it = range.iter();
        assert_eq!(it.nth(10), Some(id("100a")));
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
        assert_eq!(range.iter().last(), Some(id("100z")));
    }

    #[test]
    fn contains_bounds() {
        let range = IdRange::new(id("1a00"), id("1b00")).unwrap();
        assert!(range.contains(&id("1a00")));
        assert!(range.contains(&id("1azz")));
        assert!(range.contains(&id("1b00")));
        assert!(!range.contains(&id("19zz")));
        assert!(!range.contains(&id("1b01")));
    }

    #[test]
    fn sample_stays_in_range() {
        let range = IdRange::new(id("3abc"), id("3abz")).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(range.contains(&range.sample(&mut rng)));
        }
    }

    #[test]
    fn display() {
        let range = IdRange::new(id("1a00"), id("9zzz")).unwrap();
        assert_eq!(range.to_string(), "1a00..=9zzz");
    }

    #[test]
    fn serde_validates_order() {
        let range: IdRange = serde_json::from_str(r#"{"lower":"1A00","upper":"1b00"}"#).unwrap();
        assert_eq!(range.lower(), id("1a00"));
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"lower":"1a00","upper":"1b00"}"#
        );
        assert!(serde_json::from_str::<IdRange>(r#"{"lower":"2000","upper":"1000"}"#).is_err());
    }
}
