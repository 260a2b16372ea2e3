//! # duke-stream-core
//!
//! Core data structures for the duke-stream spreadsheet writer.
//!
//! This crate holds everything that does not touch a file:
//! - [`CellInput`] / [`CellValue`] - Input values and the encoding chosen for them
//! - [`CellAddress`] and [`cell_label`] - A1-style cell labels
//! - [`StyleRegistry`] - Deduplicated fonts, fills, borders and cell formats
//! - [`SharedStringTable`] - Deduplicated text with reference counting
//! - [`date`] - Calendar text to day-serial conversion
//!
//! ## Example
//!
//! ```rust
//! use duke_stream_core::{CellInput, CellValue, SharedStringTable, TextDecoding, ValueFormat};
//!
//! let mut strings = SharedStringTable::new();
//! let value = CellValue::classify(
//!     &CellInput::from("0100"),
//!     ValueFormat::String,
//!     &mut strings,
//!     TextDecoding::default(),
//! );
//!
//! // Leading zeros keep the value as text
//! assert_eq!(value, CellValue::Text(0));
//! assert_eq!(strings.get(0), Some("0100"));
//! ```

pub mod cell;
pub mod date;
pub mod error;
pub mod shared_strings;
pub mod sheet_name;
pub mod style;

// Re-exports for convenience
pub use cell::{
    cell_label, column_letters, CellAddress, CellInput, CellValue, TextDecoding, ValueFormat,
};
pub use error::{Error, Result};
pub use shared_strings::SharedStringTable;
pub use sheet_name::{validate_new_sheet_name, validate_sheet_name};

pub use style::{
    BorderDescriptor, BorderEdge, BorderLineStyle, Color, FillDescriptor, FontDescriptor,
    FontOptions, HorizontalAlignment, PatternType, Registry, StyleDescriptor, StyleRegistry,
    VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
