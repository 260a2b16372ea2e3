//! Error types for duke-stream-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in duke-stream-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// A style descriptor references a font that was never registered
    #[error("Invalid font id: {0}")]
    InvalidFontId(u32),

    /// A style descriptor references a fill that was never registered
    #[error("Invalid fill id: {0}")]
    InvalidFillId(u32),

    /// A style descriptor references a border that was never registered
    #[error("Invalid border id: {0}")]
    InvalidBorderId(u32),

    /// A style descriptor references a number format that was never registered
    #[error("Invalid number format id: {0}")]
    InvalidNumberFormatId(u32),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
