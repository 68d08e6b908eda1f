//! Multiplication table construction and rendering.
//!
//! `MultiplicationTable` fills an N×N product grid at construction
//! time, together with the minimal display width of every column, and
//! renders the grid as right-aligned text with a row-label gutter.
//!
//! The fill walks the upper triangle only and mirrors each cell across
//! the diagonal. Every value is derived from an already-known neighbor
//! by a single addition, so the whole grid costs O(N²) additions and
//! exactly one multiplication (the 1×1 seed).

use serde::{Deserialize, Serialize};

use crate::error::MultitabError;
use crate::Result;

/// Separates row labels from table cells.
const Y_DELIMITER: char = '|';
/// Fills the separator line under the column headers.
const X_DELIMITER: char = '-';

/// An N×N multiplication table with precomputed display widths.
///
/// All fields are computed once in [`MultiplicationTable::new`] and
/// never change afterwards; rendering is a pure read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplicationTable {
    /// Table dimension N
    length: usize,
    /// Cell values, row-major: `values[i][j] == (i + 1) * (j + 1)`
    values: Vec<Vec<u64>>,
    /// Minimal width per column: digit count of `N * column`, the
    /// column maximum (reached at row N)
    column_widths: Vec<usize>,
    /// Width of the row-label gutter: digit count of `N²`
    y_axis_width: usize,
}

impl MultiplicationTable {
    /// Build a table of the given dimension.
    ///
    /// Values and both width mappings are fully computed before this
    /// returns; there is no lazy state.
    ///
    /// # Errors
    ///
    /// Returns [`MultitabError::InvalidLength`] if `length < 1`.
    pub fn new(length: i64) -> Result<Self> {
        if length < 1 {
            return Err(MultitabError::InvalidLength(length));
        }
        let n = length as usize;

        let y_axis_width = digit_count(n as u64 * n as u64);
        let values = fill_values(n);
        let column_widths = (1..=n as u64).map(|c| digit_count(n as u64 * c)).collect();

        Ok(Self {
            length: n,
            values,
            column_widths,
            y_axis_width,
        })
    }

    /// Table dimension N.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Cell value at 1-based `(row, column)`.
    ///
    /// Panics if either index is outside `1..=length`.
    pub fn value(&self, row: usize, column: usize) -> u64 {
        self.values[row - 1][column - 1]
    }

    /// Minimal display width of the 1-based `column`.
    pub fn column_width(&self, column: usize) -> usize {
        self.column_widths[column - 1]
    }

    /// Width of the row-label gutter.
    pub fn y_axis_width(&self) -> usize {
        self.y_axis_width
    }

    /// Header line over the columns plus the dash separator under it.
    ///
    /// The header indents past the row-label gutter, then prints each
    /// column index right-aligned to its column width. The separator
    /// is one character shorter than the header line above it.
    pub fn render_header(&self) -> String {
        let mut header = " ".repeat(self.y_axis_width + 3);
        for (idx, &width) in self.column_widths.iter().enumerate() {
            header.push_str(&format!("{:>width$} ", idx + 1, width = width));
        }
        let separator_len = header.len() - 1;
        header.push('\n');
        header.extend(std::iter::repeat(X_DELIMITER).take(separator_len));
        header
    }

    /// One rendered row: right-aligned label, gutter delimiter, then
    /// every cell right-aligned to its column width.
    ///
    /// `row` is 1-based; rows outside `1..=length` panic.
    pub fn render_row(&self, row: usize) -> String {
        let mut line = format!(
            "{:>gutter$} {} ",
            row,
            Y_DELIMITER,
            gutter = self.y_axis_width
        );
        for (idx, &width) in self.column_widths.iter().enumerate() {
            line.push_str(&format!(
                "{:>width$} ",
                self.values[row - 1][idx],
                width = width
            ));
        }
        line
    }

    /// The full table: header block plus one line per row, every line
    /// newline-terminated, as a single `String`.
    pub fn render(&self) -> String {
        let mut out = self.render_header();
        out.push('\n');
        for row in 1..=self.length {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }
        out
    }
}

/// Fill the N×N grid using the additive recurrence.
///
/// Only the upper triangle is computed; each cell is mirrored across
/// the diagonal as soon as it is known, so the leftward/upward
/// neighbor the recurrence reads is always present.
fn fill_values(n: usize) -> Vec<Vec<u64>> {
    let mut values = vec![vec![0u64; n]; n];
    for i in 1..=n {
        for j in i..=n {
            let value = if j > 1 {
                values[i - 1][j - 2] + i as u64
            } else if i > 1 {
                values[i - 2][j - 1] + j as u64
            } else {
                i as u64 * j as u64
            };
            values[i - 1][j - 1] = value;
            if i != j {
                values[j - 1][i - 1] = value;
            }
        }
    }
    values
}

/// Decimal digit count of a value ("25" → 2).
fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_length() {
        assert!(matches!(
            MultiplicationTable::new(0),
            Err(MultitabError::InvalidLength(0))
        ));
    }

    #[test]
    fn test_rejects_negative_length() {
        assert!(matches!(
            MultiplicationTable::new(-3),
            Err(MultitabError::InvalidLength(-3))
        ));
    }

    #[test]
    fn test_values_match_direct_multiplication() {
        for n in [1usize, 2, 5, 12, 30] {
            let table = MultiplicationTable::new(n as i64).unwrap();
            for i in 1..=n {
                for j in 1..=n {
                    assert_eq!(table.value(i, j), (i * j) as u64, "n={n} i={i} j={j}");
                }
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let table = MultiplicationTable::new(9).unwrap();
        for i in 1..=9 {
            for j in 1..=9 {
                assert_eq!(table.value(i, j), table.value(j, i));
            }
        }
    }

    #[test]
    fn test_column_widths_follow_column_maximum() {
        let table = MultiplicationTable::new(12).unwrap();
        assert_eq!(table.column_width(1), 2); // max 12
        assert_eq!(table.column_width(8), 2); // max 96
        assert_eq!(table.column_width(9), 3); // max 108
        assert_eq!(table.column_width(12), 3); // max 144
    }

    #[test]
    fn test_y_axis_width_follows_squared_length() {
        assert_eq!(MultiplicationTable::new(3).unwrap().y_axis_width(), 1); // 9
        assert_eq!(MultiplicationTable::new(4).unwrap().y_axis_width(), 2); // 16
        assert_eq!(MultiplicationTable::new(10).unwrap().y_axis_width(), 3); // 100
    }

    #[test]
    fn test_render_size_five() {
        let table = MultiplicationTable::new(5).unwrap();
        let expected = concat!(
            "     1  2  3  4  5 \n",
            "------------------\n",
            " 1 | 1  2  3  4  5 \n",
            " 2 | 2  4  6  8 10 \n",
            " 3 | 3  6  9 12 15 \n",
            " 4 | 4  8 12 16 20 \n",
            " 5 | 5 10 15 20 25 \n",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_size_one() {
        let table = MultiplicationTable::new(1).unwrap();
        assert_eq!(table.render(), "    1 \n-----\n1 | 1 \n");
    }

    #[test]
    fn test_render_row_five() {
        let table = MultiplicationTable::new(5).unwrap();
        assert_eq!(table.render_row(5), " 5 | 5 10 15 20 25 ");
    }

    #[test]
    fn test_render_is_idempotent() {
        let table = MultiplicationTable::new(7).unwrap();
        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn test_value_three_four() {
        let table = MultiplicationTable::new(5).unwrap();
        assert_eq!(table.value(3, 4), 12);
    }

    #[test]
    fn test_serde_round_trip() {
        let table = MultiplicationTable::new(5).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["length"], 5);
        assert_eq!(json["values"][2][3], 12);
        assert_eq!(json["y_axis_width"], 2);

        let back: MultiplicationTable = serde_json::from_value(json).unwrap();
        assert_eq!(back.render(), table.render());
    }
}
