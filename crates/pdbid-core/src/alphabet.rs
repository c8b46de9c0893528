//! # Identifier Alphabet
//!
//! The 36-symbol alphabet Σ over which PDB identifiers are spelled:
//! digits `0`–`9` followed by lowercase letters `a`–`z`.
//!
//! The order is load-bearing. Padding uses the minimum symbol, and all
//! comparisons use Σ-order. Because Σ-order coincides with ASCII order for
//! digits and lowercase letters, comparing two canonical identifiers as
//! strings gives the same answer as comparing their mixed-radix values.
//!
//! ## Mixed radix
//!
//! Position 0 is restricted to `1`–`9` (radix 9, offset 1). Positions 1–3
//! range over all of Σ (radix 36).

/// Symbols of Σ in order.
pub const SYMBOLS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in Σ.
pub const RADIX: u32 = 36;

/// Number of values the leading position may take (`1`–`9`).
pub const LEADING_RADIX: u32 = 9;

/// Minimum symbol of Σ, used for padding.
pub const MIN_SYMBOL: char = '0';

/// Marker meaning "fill the remaining positions with the minimum symbol".
pub const WILDCARD: char = '*';

/// Length of a canonical identifier.
pub const ID_LEN: usize = 4;

/// Index of a symbol within Σ, or `None` if the byte is not in Σ.
///
/// Uppercase letters are not in Σ; callers fold case first.
pub const fn symbol_index(symbol: u8) -> Option<u32> {
    match symbol {
        b'0'..=b'9' => Some((symbol - b'0') as u32),
        b'a'..=b'z' => Some((symbol - b'a') as u32 + 10),
        _ => None,
    }
}

/// Symbol at `index` within Σ.
///
/// # Panics
///
/// Panics if `index >= RADIX`. Only called with indices produced by
/// modular arithmetic on [`RADIX`].
pub const fn symbol_at(index: u32) -> u8 {
    SYMBOLS[index as usize]
}

/// Whether `symbol` may lead a canonical identifier.
pub const fn is_leading_symbol(symbol: u8) -> bool {
    matches!(symbol, b'1'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_in_ascii_order() {
        assert!(SYMBOLS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn symbol_index_roundtrips() {
        for (i, &s) in SYMBOLS.iter().enumerate() {
            assert_eq!(symbol_index(s), Some(i as u32));
            assert_eq!(symbol_at(i as u32), s);
        }
    }

    #[test]
    fn symbol_index_rejects_non_alphabet() {
        assert_eq!(symbol_index(b'A'), None);
        assert_eq!(symbol_index(b'*'), None);
        assert_eq!(symbol_index(b'-'), None);
        assert_eq!(symbol_index(b' '), None);
    }

    #[test]
    fn leading_symbols() {
        assert!(!is_leading_symbol(b'0'));
        assert!(is_leading_symbol(b'1'));
        assert!(is_leading_symbol(b'9'));
        assert!(!is_leading_symbol(b'a'));
    }

    #[test]
    fn radix_matches_symbol_count() {
        assert_eq!(SYMBOLS.len() as u32, RADIX);
        assert_eq!(MIN_SYMBOL as u8, SYMBOLS[0]);
    }
}
