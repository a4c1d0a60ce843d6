/// Fixed-width basis-state labels.
///
/// A `BitString` is the zero-padded binary encoding of a register index.
/// Position 0 is the most significant bit, so the textual form reads left to
/// right as positions `0..width`:
///
/// ```text
/// width 3, index 1  →  "001"   (only position 2 is set)
/// width 3, index 4  →  "100"   (only position 0 is set)
/// ```
///
/// Values are `Copy` and never mutated after construction.
use crate::error::CompileError;
use std::str::FromStr;

/// Largest supported register width. Keeps every index and `2^width` in `i64`.
pub const MAX_WIDTH: usize = 63;

// ── BitString ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: u64,
    width: u8,
}

impl BitString {
    /// Number of bit positions.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Value (0 or 1) at `pos`, counting from the most significant bit.
    ///
    /// Callers guarantee `pos < width`.
    #[inline]
    pub fn bit(&self, pos: usize) -> u8 {
        debug_assert!(pos < self.width(), "bit position {pos} out of range");
        ((self.bits >> (self.width() - 1 - pos)) & 1) as u8
    }

    /// Values of positions `0..len`, in order.
    pub fn prefix(&self, len: usize) -> Vec<u8> {
        (0..len).map(|pos| self.bit(pos)).collect()
    }

    /// Iterate over every bit, position 0 first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.width()).map(move |pos| self.bit(pos))
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width())
    }
}

impl FromStr for BitString {
    type Err = CompileError;

    /// Parse a literal such as `"0101"`. The width is the string length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CompileError::InvalidBitString { text: s.to_string() };
        if s.is_empty() || s.len() > MAX_WIDTH {
            return Err(invalid());
        }
        let mut bits = 0u64;
        for c in s.chars() {
            let b = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(invalid()),
            };
            bits = (bits << 1) | b;
        }
        Ok(Self { bits, width: s.len() as u8 })
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

/// Reject widths outside `1..=MAX_WIDTH`.
pub fn check_width(width: usize) -> Result<(), CompileError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(CompileError::InvalidWidth { width, max: MAX_WIDTH });
    }
    Ok(())
}

/// Encode `index` as a zero-padded bit-string of `width` positions.
///
/// Fails with `InvalidIndex` when `index` is negative or `>= 2^width`.
pub fn index_to_bitstring(index: i64, width: usize) -> Result<BitString, CompileError> {
    check_width(width)?;
    if index < 0 || index as u64 >= 1u64 << width {
        return Err(CompileError::InvalidIndex { index, width });
    }
    Ok(BitString { bits: index as u64, width: width as u8 })
}

/// Inverse of [`index_to_bitstring`].
pub fn bitstring_to_index(s: &BitString) -> i64 {
    s.bits as i64
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_first_encoding() {
        let s = index_to_bitstring(1, 3).unwrap();
        assert_eq!(s.to_string(), "001");
        assert_eq!(s.bit(0), 0);
        assert_eq!(s.bit(2), 1);

        let s = index_to_bitstring(4, 3).unwrap();
        assert_eq!(s.to_string(), "100");
        assert_eq!(s.bit(0), 1);
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(index_to_bitstring(5, 9).unwrap().to_string(), "000000101");
        assert_eq!(index_to_bitstring(0, 2).unwrap().to_string(), "00");
    }

    #[test]
    fn test_prefix() {
        let s: BitString = "1011".parse().unwrap();
        assert_eq!(s.prefix(0), Vec::<u8>::new());
        assert_eq!(s.prefix(3), vec![1, 0, 1]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_round_trip_exhaustive_w9() {
        for i in 0..(1i64 << 9) {
            let s = index_to_bitstring(i, 9).unwrap();
            assert_eq!(bitstring_to_index(&s), i);
            assert_eq!(s.width(), 9);
        }
    }

    #[test]
    fn test_parse_matches_encoding() {
        let parsed: BitString = "000000101".parse().unwrap();
        assert_eq!(parsed, index_to_bitstring(5, 9).unwrap());
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(
            index_to_bitstring(8, 3),
            Err(CompileError::InvalidIndex { index: 8, width: 3 })
        );
        assert!(matches!(
            index_to_bitstring(-1, 3),
            Err(CompileError::InvalidIndex { index: -1, .. })
        ));
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(index_to_bitstring(0, 0), Err(CompileError::InvalidWidth { .. })));
        assert!(matches!(index_to_bitstring(0, 64), Err(CompileError::InvalidWidth { .. })));
        assert!(index_to_bitstring((1i64 << 62) + 7, MAX_WIDTH).is_ok());
    }

    #[test]
    fn test_check_width_bounds() {
        assert!(check_width(1).is_ok());
        assert!(check_width(MAX_WIDTH).is_ok());
        assert_eq!(check_width(0), Err(CompileError::InvalidWidth { width: 0, max: MAX_WIDTH }));
        let err = check_width(MAX_WIDTH + 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid width 64: must be between 1 and 63");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("012".parse::<BitString>(), Err(CompileError::InvalidBitString { .. })));
        assert!("".parse::<BitString>().is_err());
        assert!("1".repeat(64).parse::<BitString>().is_err());
    }
}
