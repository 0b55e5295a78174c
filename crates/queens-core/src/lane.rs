//! Lane addressing for conflict queries.
//!
//! A [`Lane`] is a line of cells on an N×N board along which pieces can
//! conflict: a row, a column, a major diagonal (top-left to bottom-right), or
//! a minor diagonal (top-right to bottom-left).
//!
//! Diagonals are identified by a stable integer key derived from any cell on
//! them: `col - row` for major diagonals (range `[-(n-1), n-1]`) and
//! `col + row` for minor diagonals (range `[0, 2n-2]`). The key, together
//! with the board size, fully determines the cells on the lane; there is no
//! anchor cell and no partial traversal.
//!
//! # Examples
//!
//! ```
//! use queens_core::Lane;
//!
//! // The main major diagonal of a 3×3 board.
//! let cells: Vec<_> = Lane::MajorDiagonal { key: 0 }.positions(3).collect();
//! assert_eq!(cells, [(0, 0), (1, 1), (2, 2)]);
//!
//! // A minor diagonal clipped by the bottom edge.
//! let cells: Vec<_> = Lane::MinorDiagonal { key: 3 }.positions(3).collect();
//! assert_eq!(cells, [(1, 2), (2, 1)]);
//! ```

use std::{iter::FusedIterator, ops::Range, ops::RangeInclusive};

/// A line of cells along which pieces can conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// A row identified by its index (0 = top).
    Row {
        /// Row index.
        index: usize,
    },
    /// A column identified by its index (0 = leftmost).
    Column {
        /// Column index.
        index: usize,
    },
    /// A major diagonal (top-left to bottom-right), identified by `col - row`.
    MajorDiagonal {
        /// Diagonal key, in `[-(n-1), n-1]` for lanes that touch the board.
        key: isize,
    },
    /// A minor diagonal (top-right to bottom-left), identified by `col + row`.
    MinorDiagonal {
        /// Diagonal key, in `[0, 2n-2]` for lanes that touch the board.
        key: usize,
    },
}

impl Lane {
    /// Returns the major diagonal passing through `(row, col)`.
    #[must_use]
    #[inline]
    pub fn major_through(row: usize, col: usize) -> Self {
        Self::MajorDiagonal {
            key: to_isize(col) - to_isize(row),
        }
    }

    /// Returns the minor diagonal passing through `(row, col)`.
    #[must_use]
    #[inline]
    pub fn minor_through(row: usize, col: usize) -> Self {
        Self::MinorDiagonal { key: col + row }
    }

    /// Returns the full key range for major diagonals on a board of the given
    /// size: `[-(n-1), n-1]`. Empty for a size-0 board.
    #[must_use]
    #[expect(clippy::reversed_empty_ranges)]
    pub fn major_keys(size: usize) -> RangeInclusive<isize> {
        match size.checked_sub(1) {
            Some(max) => -to_isize(max)..=to_isize(max),
            None => 1..=0,
        }
    }

    /// Returns the full key range for minor diagonals on a board of the given
    /// size: `[0, 2n-2]`. Empty for a size-0 board.
    #[must_use]
    pub fn minor_keys(size: usize) -> Range<usize> {
        0..(2 * size).saturating_sub(1)
    }

    /// Returns an iterator over every in-bounds `(row, col)` on this lane,
    /// for a board of the given size.
    ///
    /// Traversal is derived from the size and the lane identity alone, walking
    /// the lane edge to edge. Lanes that do not touch the board (out-of-range
    /// index or key) yield nothing.
    #[must_use]
    pub fn positions(self, size: usize) -> LanePositions {
        let (row, col, dr, dc, remaining) = match self {
            Lane::Row { index } if index < size => (index, 0, 0, 1, size),
            Lane::Column { index } if index < size => (0, index, 1, 0, size),
            Lane::MajorDiagonal { key } => {
                let offset = key.unsigned_abs();
                if offset >= size {
                    return LanePositions::empty();
                }
                let (row, col) = if key < 0 { (offset, 0) } else { (0, offset) };
                (row, col, 1, 1, size - offset)
            }
            Lane::MinorDiagonal { key } if size > 0 && key <= 2 * (size - 1) => {
                let row = key.saturating_sub(size - 1);
                (row, key - row, 1, -1, key.min(size - 1) - row + 1)
            }
            Lane::Row { .. } | Lane::Column { .. } | Lane::MinorDiagonal { .. } => {
                return LanePositions::empty();
            }
        };
        LanePositions {
            row,
            col,
            dr,
            dc,
            remaining,
        }
    }
}

/// Iterator over the `(row, col)` cells of a [`Lane`].
///
/// Created by [`Lane::positions`]. Yields cells in increasing row order
/// (increasing column order for rows).
#[derive(Debug, Clone)]
pub struct LanePositions {
    row: usize,
    col: usize,
    dr: usize,
    dc: isize,
    remaining: usize,
}

impl LanePositions {
    fn empty() -> Self {
        Self {
            row: 0,
            col: 0,
            dr: 0,
            dc: 0,
            remaining: 0,
        }
    }
}

impl Iterator for LanePositions {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = (self.row, self.col);
        self.remaining -= 1;
        if self.remaining > 0 {
            // The step stays in bounds while cells remain, so the signed
            // column step cannot wrap here.
            self.row += self.dr;
            self.col = self.col.wrapping_add_signed(self.dc);
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LanePositions {}
impl FusedIterator for LanePositions {}

#[expect(clippy::cast_possible_wrap)]
fn to_isize(value: usize) -> isize {
    value as isize
}
