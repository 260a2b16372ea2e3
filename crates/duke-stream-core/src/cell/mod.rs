//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellInput`] - A value handed to the writer
//! - [`CellValue`] - The encoding chosen for that value
//! - [`CellAddress`] - A cell's location (e.g., "A1")

mod address;
mod value;

pub use address::{cell_label, column_letters, CellAddress};
pub use value::{CellInput, CellValue, TextDecoding, ValueFormat};
