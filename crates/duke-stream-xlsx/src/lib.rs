//! # duke-stream-xlsx
//!
//! Streaming XLSX (Office Open XML) writer for duke-stream.
//!
//! Rows are encoded as they are written and land in per-sheet backing
//! storage; only the style and shared-string tables stay in memory until
//! the package is assembled.

pub mod encoder;
pub mod error;
pub mod options;
pub mod shared_strings;
pub mod sheet;
pub mod sink;
pub mod storage;
pub mod styles;
pub mod writer;

mod package;
mod xml;

pub use encoder::CellEncoder;
pub use error::{XlsxError, XlsxResult};
pub use options::{SheetOptions, WriterOptions, DEFAULT_COL_WIDTH};
pub use sheet::SheetStream;
pub use sink::{BufferedSink, FLUSH_THRESHOLD};
pub use storage::Backing;
pub use writer::{RowKind, XlsxStreamWriter};
