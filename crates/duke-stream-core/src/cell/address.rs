//! Cell addresses and A1-style labels

use std::fmt;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A cell position within a worksheet (both indices 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Create a cell address, checking it against the worksheet limits
    pub fn checked(row: u32, col: usize) -> Result<Self> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS as usize {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS as usize - 1));
        }
        Ok(Self::new(row, col as u16))
    }

    /// Format as an A1-style label
    pub fn to_a1_string(&self) -> String {
        cell_label(self.row, self.col)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

/// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, ...)
///
/// Columns are counted in bijective base-26: there is no digit for zero, so
/// after taking `col % 26` the remaining quotient is decremented by one.
pub fn column_letters(col: u16) -> String {
    let mut letters = Vec::with_capacity(3);
    let mut n = col as i64;

    while n >= 0 {
        letters.push(b'A' + (n % 26) as u8);
        n = n / 26 - 1;
    }

    letters.reverse();
    // only ASCII uppercase letters were pushed
    letters.into_iter().map(char::from).collect()
}

/// Label a cell from 0-based row and column indices
///
/// # Examples
/// ```
/// use duke_stream_core::cell_label;
///
/// assert_eq!(cell_label(0, 0), "A1");
/// assert_eq!(cell_label(5, 27), "AB6");
/// ```
pub fn cell_label(row: u32, col: u16) -> String {
    let mut label = column_letters(col);
    label.push_str(&(row as u64 + 1).to_string());
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(column_letters(16383), "XFD"); // Max Excel column
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(0, 0), "A1");
        assert_eq!(cell_label(0, 25), "Z1");
        assert_eq!(cell_label(0, 26), "AA1");
        assert_eq!(cell_label(5, 27), "AB6");
        assert_eq!(cell_label(1_048_575, 16383), "XFD1048576");
    }

    #[test]
    fn test_checked_bounds() {
        assert!(CellAddress::checked(0, 0).is_ok());
        assert!(matches!(
            CellAddress::checked(MAX_ROWS, 0),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            CellAddress::checked(0, MAX_COLS as usize),
            Err(Error::ColumnOutOfBounds(..))
        ));
        assert_eq!(CellAddress::checked(2, 3).unwrap().to_string(), "D3");
    }

    fn letters_to_column(letters: &str) -> u32 {
        letters
            .bytes()
            .fold(0u32, |acc, b| acc * 26 + (b - b'A') as u32 + 1)
            - 1
    }

    proptest! {
        #[test]
        fn prop_letters_roundtrip(col in 0u16..16384) {
            let letters = column_letters(col);
            prop_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert_eq!(letters_to_column(&letters), col as u32);
        }

        #[test]
        fn prop_label_ends_with_row_number(row in 0u32..1_048_576, col in 0u16..16384) {
            let label = cell_label(row, col);
            let expected_suffix = (row + 1).to_string();
            prop_assert!(label.ends_with(&expected_suffix));
        }
    }
}
