//! Writer configuration

use std::path::PathBuf;

/// Column width used when neither the writer nor the sheet sets one
pub const DEFAULT_COL_WIDTH: f64 = 20.0;

/// Options that apply to a whole writer session
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Value of `dc:creator` in the document properties
    pub author: String,
    /// Width of every column, unless a sheet overrides it
    pub default_col_width: f64,
    /// Keep sheet data in memory instead of anonymous temp files
    pub in_memory: bool,
    /// Directory for temp files (system default if `None`)
    pub temp_dir: Option<PathBuf>,
    /// Decode byte input as Latin-1 instead of UTF-8
    pub transcode_latin1: bool,
    /// Warn when the shared-string part contains invalid UTF-8
    pub validate_shared_strings_utf8: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            author: String::new(),
            default_col_width: DEFAULT_COL_WIDTH,
            in_memory: false,
            temp_dir: None,
            transcode_latin1: false,
            validate_shared_strings_utf8: true,
        }
    }
}

impl WriterOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author
    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = author.into();
        self
    }

    /// Set the default column width
    pub fn with_default_col_width(mut self, width: f64) -> Self {
        self.default_col_width = width;
        self
    }

    /// Keep sheet data in memory
    pub fn with_in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Put temp files in `dir`
    pub fn with_temp_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Decode byte input as Latin-1
    pub fn with_transcode_latin1(mut self, transcode: bool) -> Self {
        self.transcode_latin1 = transcode;
        self
    }

    /// Toggle UTF-8 validation of the shared-string part
    pub fn with_validate_shared_strings_utf8(mut self, validate: bool) -> Self {
        self.validate_shared_strings_utf8 = validate;
        self
    }
}

/// Options for a single sheet
#[derive(Debug, Clone, Default)]
pub struct SheetOptions {
    /// Column width for this sheet (writer default if `None`)
    pub col_width: Option<f64>,
}

impl SheetOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column width
    pub fn with_col_width(mut self, width: f64) -> Self {
        self.col_width = Some(width);
        self
    }
}
