//! Streaming workbook writer

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use log::{debug, error};

use duke_stream_core::{
    validate_new_sheet_name, BorderDescriptor, CellAddress, CellInput, FillDescriptor,
    FontOptions, SharedStringTable, StyleDescriptor, StyleRegistry, TextDecoding, ValueFormat,
};

use crate::encoder::CellEncoder;
use crate::error::{XlsxError, XlsxResult};
use crate::options::{SheetOptions, WriterOptions};
use crate::package::Package;
use crate::sheet::SheetStream;
use crate::storage::Backing;

/// Which rows a sheet-level style applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Rows written with [`XlsxStreamWriter::write_header_row`]
    Header,
    /// Rows written with [`XlsxStreamWriter::write_row`]
    Row,
}

/// Per-sheet style configuration, settable before the sheet exists
#[derive(Debug, Default)]
struct SheetLayout {
    header_style: Option<StyleDescriptor>,
    row_style: Option<StyleDescriptor>,
    column_styles: BTreeMap<usize, StyleDescriptor>,
    column_formats: BTreeMap<usize, ValueFormat>,
}

impl SheetLayout {
    /// Style of a data cell: column style, then the sheet's row style, then
    /// the call's style. The column format always sets the value format.
    fn data_style(&self, col: usize, call_style: Option<&StyleDescriptor>) -> StyleDescriptor {
        let base = self
            .column_styles
            .get(&col)
            .or(self.row_style.as_ref())
            .or(call_style)
            .copied()
            .unwrap_or_default();
        let format = self.column_formats.get(&col).copied().unwrap_or_default();
        base.value_format(format)
    }

    /// Style of a header cell: the sheet's header style, then the call's
    /// style. Headers are always written as text.
    fn header_style(&self, call_style: Option<&StyleDescriptor>) -> StyleDescriptor {
        self.header_style
            .as_ref()
            .or(call_style)
            .copied()
            .unwrap_or_default()
            .value_format(ValueFormat::String)
    }
}

/// Writes a workbook one row at a time
///
/// Sheets are created on first use and keep their creation order. Row data
/// goes to per-sheet backing storage as it is written; the package is only
/// put together by one of the `write_to*` methods.
///
/// # Example
///
/// ```rust
/// use duke_stream_xlsx::{XlsxStreamWriter, WriterOptions};
///
/// let mut writer = XlsxStreamWriter::with_options(WriterOptions::new().with_in_memory(true));
/// writer.write_header_row("Sales", ["Region", "Total"], None).unwrap();
/// writer.write_row("Sales", ["North", "1200"], None).unwrap();
///
/// let bytes = writer.write_to_vec().unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub struct XlsxStreamWriter {
    options: WriterOptions,
    styles: StyleRegistry,
    strings: SharedStringTable,
    encoder: CellEncoder,
    sheets: Vec<SheetStream>,
    layouts: HashMap<String, SheetLayout>,
}

impl XlsxStreamWriter {
    /// Create a writer with default options
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    /// Create a writer with the given options
    pub fn with_options(options: WriterOptions) -> Self {
        let decoding = if options.transcode_latin1 {
            TextDecoding::Latin1
        } else {
            TextDecoding::Utf8Lossy
        };

        Self {
            options,
            styles: StyleRegistry::new(),
            strings: SharedStringTable::new(),
            encoder: CellEncoder::new(decoding),
            sheets: Vec::new(),
            layouts: HashMap::new(),
        }
    }

    /// Writer options
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Set the document author
    pub fn set_author<S: Into<String>>(&mut self, author: S) {
        self.options.author = author.into();
    }

    /// Style registry shared by all sheets
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Shared-string table
    pub fn shared_strings(&self) -> &SharedStringTable {
        &self.strings
    }

    /// Register a font, returning its ID
    pub fn register_font<S: Into<String>>(&mut self, name: S, size: f64, options: FontOptions) -> u32 {
        self.styles.register_font(name, size, options)
    }

    /// Register a fill, returning its ID
    pub fn register_fill(&mut self, fill: FillDescriptor) -> u32 {
        self.styles.resolve_fill(fill)
    }

    /// Register a border, returning its ID
    pub fn register_border(&mut self, border: BorderDescriptor) -> u32 {
        self.styles.resolve_border(border)
    }

    /// Register a custom number format code, returning its ID
    pub fn register_number_format(&mut self, code: &str) -> u32 {
        self.styles.register_number_format(code)
    }

    /// Style every data cell of column `col`
    pub fn set_column_style(
        &mut self,
        sheet: &str,
        col: usize,
        style: StyleDescriptor,
    ) -> XlsxResult<()> {
        CellAddress::checked(0, col)?;
        self.styles.check(&style)?;
        self.layout_mut(sheet).column_styles.insert(col, style);
        Ok(())
    }

    /// Encode every data cell of column `col` with `format`
    pub fn set_column_format(
        &mut self,
        sheet: &str,
        col: usize,
        format: ValueFormat,
    ) -> XlsxResult<()> {
        CellAddress::checked(0, col)?;
        self.layout_mut(sheet).column_formats.insert(col, format);
        Ok(())
    }

    /// Set the style of header rows or data rows of a sheet
    pub fn set_row_style(
        &mut self,
        sheet: &str,
        kind: RowKind,
        style: StyleDescriptor,
    ) -> XlsxResult<()> {
        self.styles.check(&style)?;
        let layout = self.layout_mut(sheet);
        match kind {
            RowKind::Header => layout.header_style = Some(style),
            RowKind::Row => layout.row_style = Some(style),
        }
        Ok(())
    }

    /// Create a sheet; does nothing if a sheet with this name exists
    pub fn initialize_sheet(&mut self, name: &str, options: SheetOptions) -> XlsxResult<()> {
        self.sheet_index(name, &options).map(|_| ())
    }

    /// Names of the sheets, in creation order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name())
    }

    /// Append a header row
    ///
    /// Header cells ignore column styles and formats and are always
    /// classified as text.
    pub fn write_header_row<I, V>(
        &mut self,
        sheet: &str,
        values: I,
        style: Option<StyleDescriptor>,
    ) -> XlsxResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellInput>,
    {
        self.write_cells(sheet, values, style, RowKind::Header)
    }

    /// Append a data row
    pub fn write_row<I, V>(
        &mut self,
        sheet: &str,
        values: I,
        style: Option<StyleDescriptor>,
    ) -> XlsxResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellInput>,
    {
        self.write_cells(sheet, values, style, RowKind::Row)
    }

    /// Write all rows of a sheet and finalize it
    ///
    /// The sheet is named `Sheet1` when `name` is `None`. With no rows at
    /// all, a single empty row is written so the sheet is still valid.
    pub fn write_sheet<R, I, V>(&mut self, rows: R, name: Option<&str>) -> XlsxResult<()>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<CellInput>,
    {
        let name = name.unwrap_or("Sheet1");
        let mut written = false;
        for row in rows {
            self.write_row(name, row, None)?;
            written = true;
        }
        if !written {
            self.write_row(name, [CellInput::text("")], None)?;
        }
        self.finalize_sheet(name)
    }

    /// Close a sheet; later writes to it fail
    pub fn finalize_sheet(&mut self, name: &str) -> XlsxResult<()> {
        let index = self
            .sheets
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| XlsxError::UnknownSheet(name.to_string()))?;
        self.sheets[index].finalize()
    }

    /// Assemble the package into a seekable writer
    ///
    /// Finalizes every sheet first. May be called more than once.
    pub fn write_to<W: Write + Seek>(&mut self, writer: W) -> XlsxResult<W> {
        if self.sheets.is_empty() {
            error!("Cannot write a workbook without worksheets");
            return Err(XlsxError::NoWorksheets);
        }

        for sheet in &mut self.sheets {
            sheet.finalize()?;
        }

        Package {
            sheets: &mut self.sheets,
            styles: &self.styles,
            strings: &self.strings,
            author: &self.options.author,
            validate_utf8: self.options.validate_shared_strings_utf8,
        }
        .write(writer)
    }

    /// Assemble the package into a file, replacing it if it exists
    pub fn write_to_file<P: AsRef<Path>>(&mut self, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        self.write_to(file)?.sync_all()?;
        Ok(())
    }

    /// Assemble the package into a non-seekable stream
    pub fn write_to_stream<W: Write>(&mut self, mut stream: W) -> XlsxResult<()> {
        let bytes = self.write_to_vec()?;
        stream.write_all(&bytes)?;
        stream.flush()?;
        Ok(())
    }

    /// Assemble the package in memory
    pub fn write_to_vec(&mut self) -> XlsxResult<Vec<u8>> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Drop all sheets without producing a package
    pub fn abort(self) {
        debug!("Discarding {} unwritten sheets", self.sheets.len());
    }

    fn layout_mut(&mut self, sheet: &str) -> &mut SheetLayout {
        self.layouts.entry(sheet.to_string()).or_default()
    }

    fn sheet_index(&mut self, name: &str, options: &SheetOptions) -> XlsxResult<usize> {
        if let Some(index) = self.sheets.iter().position(|s| s.name() == name) {
            return Ok(index);
        }

        validate_new_sheet_name(name, self.sheets.iter().map(|s| s.name()))?;

        let storage = Backing::create(&self.options)?;
        let col_width = options.col_width.unwrap_or(self.options.default_col_width);
        let sheet = SheetStream::open(name, self.sheets.len() + 1, storage, col_width)?;
        self.sheets.push(sheet);
        Ok(self.sheets.len() - 1)
    }

    fn write_cells<I, V>(
        &mut self,
        sheet: &str,
        values: I,
        style: Option<StyleDescriptor>,
        kind: RowKind,
    ) -> XlsxResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellInput>,
    {
        let values: Vec<CellInput> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Ok(());
        }
        if let Some(style) = &style {
            self.styles.check(style)?;
        }

        let index = self.sheet_index(sheet, &SheetOptions::default())?;
        let layout = self.layouts.get(sheet);
        let empty = SheetLayout::default();
        let layout = layout.unwrap_or(&empty);

        let style = style.as_ref();
        let style_for = |col: usize| match kind {
            RowKind::Header => layout.header_style(style),
            RowKind::Row => layout.data_style(col, style),
        };

        self.sheets[index].write_row(
            &values,
            style_for,
            &self.encoder,
            &mut self.styles,
            &mut self.strings,
        )
    }
}

impl Default for XlsxStreamWriter {
    fn default() -> Self {
        Self::new()
    }
}
