//! One worksheet part, streamed row by row

use log::{debug, error};

use duke_stream_core::{
    cell_label, CellAddress, CellInput, Error, SharedStringTable, StyleDescriptor, StyleRegistry,
    MAX_COLS,
};

use crate::encoder::CellEncoder;
use crate::error::{XlsxError, XlsxResult};
use crate::sink::BufferedSink;
use crate::storage::Backing;

/// Widest possible dimension reference, used to size the placeholder
const MAX_DIMENSION_REF: &str = "A1:XFD1048576";

/// A worksheet being written
///
/// Rows go straight to the sheet's backing storage. The `<dimension>`
/// element is written as a padded placeholder when the sheet opens and
/// patched in place by [`finalize`](Self::finalize).
pub struct SheetStream {
    name: String,
    part_number: usize,
    sink: Option<BufferedSink<Backing>>,
    content: Option<Backing>,
    row_count: u32,
    max_col: u16,
    dimension_offset: u64,
    finalized: bool,
    failed: bool,
}

impl SheetStream {
    /// Open a sheet and write its prologue
    ///
    /// `part_number` is the 1-based N of `xl/worksheets/sheetN.xml`; the
    /// first part is shown as the selected tab.
    pub fn open(
        name: &str,
        part_number: usize,
        storage: Backing,
        col_width: f64,
    ) -> XlsxResult<Self> {
        let mut sink = BufferedSink::new(storage);

        sink.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n")?;
        sink.write_str(
            "<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">",
        )?;

        let dimension_offset = sink.tell()?;
        sink.write_str(&dimension_xml("A1"))?;

        let tab_selected = if part_number == 1 { " tabSelected=\"1\"" } else { "" };
        sink.write_str(&format!(
            "<sheetViews><sheetView{} workbookViewId=\"0\"/></sheetViews>",
            tab_selected
        ))?;
        sink.write_str(&format!(
            "<cols><col min=\"1\" max=\"{}\" style=\"0\" customWidth=\"1\" width=\"{}\"/></cols>",
            MAX_COLS, col_width
        ))?;
        sink.write_str("<sheetData>")?;

        debug!("Opened sheet '{}' as sheet{}.xml", name, part_number);

        Ok(Self {
            name: name.to_string(),
            part_number,
            sink: Some(sink),
            content: None,
            row_count: 0,
            max_col: 0,
            dimension_offset,
            finalized: false,
            failed: false,
        })
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based part number
    pub fn part_number(&self) -> usize {
        self.part_number
    }

    /// Name of the part inside `xl/worksheets/`
    pub fn part_name(&self) -> String {
        format!("sheet{}.xml", self.part_number)
    }

    /// Number of rows written so far
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Whether [`finalize`](Self::finalize) has run
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Whether the backing storage failed at some point
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Reference covering every written cell, e.g. `A1:C10`
    pub fn dimension(&self) -> String {
        if self.row_count == 0 {
            return "A1".to_string();
        }
        let last = cell_label(self.row_count - 1, self.max_col);
        if last == "A1" {
            last
        } else {
            format!("A1:{}", last)
        }
    }

    /// Append one row
    ///
    /// `style_for` gives the style descriptor of each column index. An empty
    /// `values` slice writes nothing. Once the backing storage has failed,
    /// rows are accepted and dropped.
    pub fn write_row<F>(
        &mut self,
        values: &[CellInput],
        mut style_for: F,
        encoder: &CellEncoder,
        styles: &mut StyleRegistry,
        strings: &mut SharedStringTable,
    ) -> XlsxResult<()>
    where
        F: FnMut(usize) -> StyleDescriptor,
    {
        if self.finalized {
            return Err(XlsxError::SheetFinalized(self.name.clone()));
        }
        if values.is_empty() || self.failed {
            return Ok(());
        }

        let last = CellAddress::checked(self.row_count, values.len() - 1)?;
        let row = self.row_count;

        let Some(sink) = self.sink.as_mut() else {
            return Err(XlsxError::SheetSink(self.name.clone()));
        };

        let result = (|| -> std::io::Result<()> {
            sink.write_str(&format!("<row r=\"{}\">", row + 1))?;
            for (col, value) in values.iter().enumerate() {
                let style = style_for(col);
                // col < MAX_COLS was checked above
                encoder.write_cell(sink, row, col as u16, value, &style, styles, strings)?;
            }
            sink.write_str("</row>")
        })();

        if sink.is_failed() {
            self.failed = true;
        }
        result?;

        self.row_count += 1;
        self.max_col = self.max_col.max(last.col);
        Ok(())
    }

    /// Close the sheet: end the XML, patch the dimension, release the sink
    ///
    /// Calling it again is a no-op. A sheet whose storage failed earlier is
    /// finalized without error; assembly reports it instead.
    pub fn finalize(&mut self) -> XlsxResult<()> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        let Some(sink) = self.sink.take() else {
            return Ok(());
        };
        if sink.is_failed() {
            self.failed = true;
            return Ok(());
        }

        let dimension = self.dimension();
        match close_sheet(sink, self.dimension_offset, &dimension) {
            Ok(content) => {
                debug!(
                    "Finalized sheet '{}' ({} rows, dimension {})",
                    self.name, self.row_count, dimension
                );
                self.content = Some(content);
                Ok(())
            }
            Err(e) => {
                error!("Failed to finalize sheet '{}': {}", self.name, e);
                self.failed = true;
                Err(e.into())
            }
        }
    }

    /// Finished part content, available once the sheet is finalized
    pub fn content(&mut self) -> XlsxResult<&mut Backing> {
        if self.failed {
            return Err(XlsxError::SheetSink(self.name.clone()));
        }
        self.content.as_mut().ok_or_else(|| {
            XlsxError::Core(Error::other(format!(
                "Sheet '{}' has not been finalized",
                self.name
            )))
        })
    }
}

fn close_sheet(
    mut sink: BufferedSink<Backing>,
    dimension_offset: u64,
    dimension: &str,
) -> std::io::Result<Backing> {
    sink.write_str("</sheetData></worksheet>")?;
    let end = sink.tell()?;
    sink.seek(dimension_offset)?;
    sink.write_str(&dimension_xml(dimension))?;
    sink.seek(end)?;
    sink.close()
}

/// `<dimension>` element padded to the width of the largest reference
fn dimension_xml(reference: &str) -> String {
    format!(
        "<dimension ref=\"{}\"/>{:pad$}",
        reference,
        "",
        pad = MAX_DIMENSION_REF.len().saturating_sub(reference.len())
    )
}
