//! The conflict board.
//!
//! [`Board`] holds an N×N matrix of 0/1 cells and answers conflict queries
//! along four axes: rows, columns, major diagonals, and minor diagonals. A
//! conflict is two or more pieces sharing a lane; a single piece on a lane is
//! never a conflict.
//!
//! The board is the data model behind an N-Queens board visualizer: the UI
//! layer toggles cells, subscribes for change notifications, and colors cells
//! by the conflict queries. Nothing here searches for solutions.
//!
//! # Examples
//!
//! ```
//! use queens_core::Board;
//!
//! let mut board = Board::new(4);
//! board.toggle_piece(0, 0)?;
//! board.toggle_piece(3, 3)?;
//!
//! // Both pieces sit on major diagonal key 0.
//! assert!(board.has_any_major_diagonal_conflicts());
//! assert!(!board.has_any_rooks_conflicts());
//!
//! board.toggle_piece(0, 0)?;
//! assert!(!board.has_any_queens_conflicts());
//! # Ok::<(), queens_core::BoardError>(())
//! ```

use crate::{
    error::BoardError,
    lane::Lane,
    notify::{ChangeListeners, ListenerId},
};

/// An N×N board of 0/1 cells with conflict detection.
///
/// The size is fixed at construction; cells mutate only through
/// [`toggle_piece`](Board::toggle_piece), which notifies subscribed listeners
/// on every successful flip. All conflict queries are read-only and recompute
/// from the matrix on demand.
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<u8>>,
    listeners: ChangeListeners,
}

impl Board {
    /// Creates an empty board of the given size, all cells 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::Board;
    ///
    /// let board = Board::new(5);
    /// assert_eq!(board.size(), 5);
    /// assert!(board.rows().all(|row| row.iter().all(|&cell| cell == 0)));
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![0; size]; size],
            listeners: ChangeListeners::new(),
        }
    }

    /// Creates a board from an explicit matrix, inferring the size from the
    /// outer length. Nonzero input values are normalized to 1.
    ///
    /// An empty matrix produces a valid size-0 board, same as
    /// [`Board::new(0)`](Board::new).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RaggedMatrix`] if any inner row's length differs
    /// from the outer length.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::Board;
    ///
    /// let board = Board::from_matrix(vec![
    ///     vec![0, 1],
    ///     vec![1, 0],
    /// ])?;
    /// assert!(board.has_any_minor_diagonal_conflicts());
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    pub fn from_matrix(matrix: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let size = matrix.len();
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::RaggedMatrix {
                    row,
                    found: cells.len(),
                    expected: size,
                });
            }
        }

        let mut cells = matrix;
        for row in &mut cells {
            for cell in row {
                *cell = u8::from(*cell != 0);
            }
        }

        log::debug!("created {size}x{size} board from matrix");
        Ok(Self {
            size,
            cells,
            listeners: ChangeListeners::new(),
        })
    }

    /// Returns the board size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cells of one row, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] if `index` is not in `[0, size)`.
    pub fn row(&self, index: usize) -> Result<&[u8], BoardError> {
        self.check_row(index)?;
        Ok(&self.cells[index])
    }

    /// Returns all rows in order, index 0 first (the top of the board).
    #[must_use]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Flips the cell at `(row, col)` between 0 and 1 and notifies every
    /// subscribed listener.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] or [`BoardError::ColumnOutOfRange`]
    /// if an index is not in `[0, size)`; the board is left unmodified and no
    /// notification is emitted.
    pub fn toggle_piece(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.cells[row][col] ^= 1;
        log::trace!("toggled cell ({row}, {col}) to {}", self.cells[row][col]);
        self.listeners.notify();
        Ok(())
    }

    /// Registers a callback invoked after every successful
    /// [`toggle_piece`](Board::toggle_piece), in registration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{cell::Cell, rc::Rc};
    ///
    /// use queens_core::Board;
    ///
    /// let mut board = Board::new(3);
    /// let changes = Rc::new(Cell::new(0));
    ///
    /// let counter = Rc::clone(&changes);
    /// let id = board.subscribe(move || counter.set(counter.get() + 1));
    ///
    /// board.toggle_piece(1, 1)?;
    /// assert_eq!(changes.get(), 1);
    ///
    /// board.unsubscribe(id);
    /// board.toggle_piece(1, 1)?;
    /// assert_eq!(changes.get(), 1);
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener registered with [`subscribe`](Board::subscribe).
    /// Returns `false` if the handle was never registered or already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Returns `true` if the row holds more than one piece.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] if `row` is not in `[0, size)`.
    pub fn has_row_conflict_at(&self, row: usize) -> Result<bool, BoardError> {
        self.check_row(row)?;
        Ok(self.lane_has_conflict(Lane::Row { index: row }))
    }

    /// Returns `true` if any row holds more than one piece.
    #[must_use]
    pub fn has_any_row_conflicts(&self) -> bool {
        (0..self.size).any(|index| self.lane_has_conflict(Lane::Row { index }))
    }

    /// Returns `true` if the column holds more than one piece.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnOutOfRange`] if `col` is not in `[0, size)`.
    pub fn has_col_conflict_at(&self, col: usize) -> Result<bool, BoardError> {
        self.check_col(col)?;
        Ok(self.lane_has_conflict(Lane::Column { index: col }))
    }

    /// Returns `true` if any column holds more than one piece.
    #[must_use]
    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.size).any(|index| self.lane_has_conflict(Lane::Column { index }))
    }

    /// Returns `true` if any row or column holds more than one piece.
    #[must_use]
    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Returns `true` if the major diagonal with the given key (`col - row`)
    /// holds more than one piece.
    ///
    /// Keys outside `[-(n-1), n-1]` address an empty lane and return `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::Board;
    ///
    /// let board = Board::from_matrix(vec![
    ///     vec![1, 0, 0],
    ///     vec![0, 1, 0],
    ///     vec![0, 0, 1],
    /// ])?;
    /// assert!(board.has_major_diagonal_conflict_at(0));
    /// assert!(!board.has_major_diagonal_conflict_at(1));
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn has_major_diagonal_conflict_at(&self, key: isize) -> bool {
        self.lane_has_conflict(Lane::MajorDiagonal { key })
    }

    /// Returns `true` if any major diagonal holds more than one piece.
    #[must_use]
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        Lane::major_keys(self.size).any(|key| self.lane_has_conflict(Lane::MajorDiagonal { key }))
    }

    /// Returns `true` if the minor diagonal with the given key (`col + row`)
    /// holds more than one piece.
    ///
    /// Keys outside `[0, 2n-2]` address an empty lane and return `false`.
    #[must_use]
    pub fn has_minor_diagonal_conflict_at(&self, key: usize) -> bool {
        self.lane_has_conflict(Lane::MinorDiagonal { key })
    }

    /// Returns `true` if any minor diagonal holds more than one piece.
    #[must_use]
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        Lane::minor_keys(self.size).any(|key| self.lane_has_conflict(Lane::MinorDiagonal { key }))
    }

    /// Returns `true` if the row, column, or either diagonal through
    /// `(row, col)` has a conflict.
    ///
    /// This is a point-local check, independent of whether `(row, col)` itself
    /// holds a piece. A piece at the queried cell does count toward its own
    /// lanes: the check answers "do these four lanes already hold two or more
    /// pieces", not "would placing here conflict with the others".
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] or [`BoardError::ColumnOutOfRange`]
    /// if an index is not in `[0, size)`.
    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.lane_has_conflict(Lane::Row { index: row })
            || self.lane_has_conflict(Lane::Column { index: col })
            || self.lane_has_conflict(Lane::major_through(row, col))
            || self.lane_has_conflict(Lane::minor_through(row, col)))
    }

    /// Returns `true` if any row, column, or diagonal holds more than one
    /// piece.
    #[must_use]
    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Counts pieces along the lane, stopping at the second: a lane conflicts
    /// iff it holds more than one piece.
    fn lane_has_conflict(&self, lane: Lane) -> bool {
        let mut pieces = 0;
        for (row, col) in lane.positions(self.size) {
            if self.cells[row][col] == 1 {
                pieces += 1;
                if pieces > 1 {
                    return true;
                }
            }
        }
        false
    }

    fn check_row(&self, index: usize) -> Result<(), BoardError> {
        if index < self.size {
            Ok(())
        } else {
            Err(BoardError::RowOutOfRange {
                index,
                size: self.size,
            })
        }
    }

    fn check_col(&self, index: usize) -> Result<(), BoardError> {
        if index < self.size {
            Ok(())
        } else {
            Err(BoardError::ColumnOutOfRange {
                index,
                size: self.size,
            })
        }
    }
}
