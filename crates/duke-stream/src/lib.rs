//! # duke-stream
//!
//! A Rust library for writing large spreadsheets one row at a time.
//!
//! Rows are encoded as soon as they are written and spill to anonymous temp
//! files, so memory use is bounded by the number of distinct strings and
//! styles rather than by the number of rows.
//!
//! ## Features
//!
//! - Streaming XLSX (Office Open XML) output
//! - Deduplicated fonts, fills, borders and cell formats
//! - Shared strings with leading-zero preservation
//! - Date and datetime columns from text or `chrono` values
//! - Formulas passed through verbatim
//!
//! ## Example
//!
//! ```rust
//! use duke_stream::prelude::*;
//!
//! let mut writer = XlsxStreamWriter::with_options(WriterOptions::new().with_in_memory(true));
//!
//! let bold = StyleDescriptor::new().font(FONT_BOLD);
//! writer.set_row_style("Orders", RowKind::Header, bold).unwrap();
//! writer.set_column_format("Orders", 1, ValueFormat::Date).unwrap();
//!
//! writer.write_header_row("Orders", ["Id", "Placed", "Total"], None).unwrap();
//! writer
//!     .write_row("Orders", [CellInput::from("0001"), "2024-03-01".into(), 19.5.into()], None)
//!     .unwrap();
//!
//! let bytes = writer.write_to_vec().unwrap();
//! assert!(!bytes.is_empty());
//! // writer.write_to_file("orders.xlsx").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use duke_stream_core::{
    // Cell types
    cell_label,
    column_letters,
    // Date conversion
    date,
    // Style types
    style,
    BorderDescriptor,
    BorderEdge,
    BorderLineStyle,
    CellAddress,
    CellInput,
    CellValue,
    Color,
    // Error types
    Error,
    FillDescriptor,
    FontDescriptor,
    FontOptions,
    HorizontalAlignment,
    PatternType,
    Result,
    SharedStringTable,
    StyleDescriptor,
    StyleRegistry,
    TextDecoding,
    ValueFormat,
    VerticalAlignment,

    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export I/O types
pub use duke_stream_xlsx::{
    RowKind, SheetOptions, WriterOptions, XlsxError, XlsxResult, XlsxStreamWriter,
};
