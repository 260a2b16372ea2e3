//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while streaming or assembling a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Core error (sheet names, bounds, style references)
    #[error("Core error: {0}")]
    Core(#[from] duke_stream_core::Error),

    /// Assembly was requested before any sheet was written
    #[error("Workbook has no worksheets")]
    NoWorksheets,

    /// A write targeted a sheet that was already finalized
    #[error("Sheet already finalized: {0}")]
    SheetFinalized(String),

    /// No sheet with this name was created
    #[error("Unknown sheet: {0}")]
    UnknownSheet(String),

    /// A sheet's backing storage failed earlier and its content is incomplete
    #[error("Sheet storage failed: {0}")]
    SheetSink(String),
}
