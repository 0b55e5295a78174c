//! Board model and conflict detection for an N-Queens board visualizer.
//!
//! This crate holds the data model an N-Queens teaching UI mutates and
//! queries: an N×N matrix of 0/1 cells with conflict checks along rows,
//! columns, major diagonals, and minor diagonals. There is no solver and no
//! rendering here; the UI layer toggles cells, listens for change
//! notifications, and asks the board where pieces clash.
//!
//! # Overview
//!
//! - [`board`]: the [`Board`] itself — construction, cell toggling with
//!   change notification, and the conflict queries.
//! - [`lane`]: [`Lane`] addressing for the four conflict axes. Diagonals are
//!   identified by a stable integer key (`col - row` for major,
//!   `col + row` for minor) that, with the board size, fully determines the
//!   cells on the lane.
//! - [`notify`]: the listener registry behind [`Board::subscribe`].
//! - [`error`]: [`BoardError`] for constructor and index failures.
//!
//! # Examples
//!
//! ```
//! use queens_core::Board;
//!
//! let mut board = Board::new(4);
//! board.toggle_piece(0, 1)?;
//! board.toggle_piece(2, 1)?;
//!
//! // Two pieces share column 1.
//! assert!(board.has_col_conflict_at(1)?);
//! assert!(board.has_any_rooks_conflicts());
//!
//! // Moving one of them resolves the clash.
//! board.toggle_piece(2, 1)?;
//! board.toggle_piece(2, 2)?;
//! assert!(!board.has_any_queens_conflicts());
//! # Ok::<(), queens_core::BoardError>(())
//! ```

pub mod board;
pub mod error;
pub mod lane;
pub mod notify;

// Re-export commonly used types
pub use self::{
    board::Board,
    error::BoardError,
    lane::{Lane, LanePositions},
    notify::ListenerId,
};
