//! Row/column labels shown to the player.
//!
//! Rows are the digits `0`-`9`; columns are the letters `A`-`L`
//! (case-insensitive). A target is written row first, e.g. `6G`.

use crate::common::CoordError;
use crate::config::{COLUMN_LETTERS, ROWS};

/// Column index for `letter`, or `None` if it is not one of `A`-`L`.
pub fn column_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    COLUMN_LETTERS.iter().position(|&l| l == upper)
}

/// Letter labelling column `col`.
pub fn column_letter(col: usize) -> Option<char> {
    COLUMN_LETTERS.get(col).copied()
}

/// Parse a two-character target like `6G` into `(row, col)`.
pub fn parse_target(input: &str) -> Result<(usize, usize), CoordError> {
    let mut chars = input.trim().chars();
    let (row_ch, col_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return Err(CoordError::WrongLength),
    };
    let row = row_ch
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&r| r < ROWS)
        .ok_or(CoordError::InvalidRow)?;
    let col = column_index(col_ch).ok_or(CoordError::InvalidColumnLetter(col_ch))?;
    Ok((row, col))
}

/// Inverse of [`parse_target`]; `None` when off the board.
#[cfg(feature = "std")]
pub fn format_target(row: usize, col: usize) -> Option<String> {
    if row >= ROWS {
        return None;
    }
    column_letter(col).map(|letter| format!("{}{}", row, letter))
}
