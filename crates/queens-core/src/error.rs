//! Error types for board construction and access.

/// Errors reported by [`Board`] operations.
///
/// Every failing operation returns its error synchronously and leaves the
/// board unmodified; there is no partial-failure state.
///
/// [`Board`]: crate::Board
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A constructor matrix whose inner rows do not all match the outer length.
    #[display("matrix row {row} has {found} cells, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        found: usize,
        /// Expected row length (the matrix's outer length).
        expected: usize,
    },
    /// A row index outside `[0, size)`.
    #[display("row index {index} out of range for board of size {size}")]
    RowOutOfRange {
        /// The rejected row index.
        index: usize,
        /// The board size.
        size: usize,
    },
    /// A column index outside `[0, size)`.
    #[display("column index {index} out of range for board of size {size}")]
    ColumnOutOfRange {
        /// The rejected column index.
        index: usize,
        /// The board size.
        size: usize,
    },
}
