//! Prelude module - common imports for duke-stream users
//!
//! ```rust
//! use duke_stream::prelude::*;
//! ```

pub use crate::style::{
    builtin, BORDER_THIN, FILL_LIGHT_GRAY, FILL_LIGHT_RED, FONT_BOLD, FONT_BOLD_ITALIC,
    FONT_ITALIC,
};

pub use crate::{
    // Style types
    BorderDescriptor,
    BorderLineStyle,
    // Cell types
    CellInput,
    Color,
    FillDescriptor,
    FontOptions,
    HorizontalAlignment,
    // Writer
    RowKind,
    SheetOptions,
    StyleDescriptor,
    ValueFormat,
    VerticalAlignment,
    WriterOptions,
    // Error types
    XlsxError,
    XlsxResult,
    XlsxStreamWriter,
};
