//! Zip package assembly

use std::io::{self, Seek, Write};

use chrono::Utc;
use log::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use duke_stream_core::{SharedStringTable, StyleRegistry};

use crate::error::{XlsxError, XlsxResult};
use crate::shared_strings::write_shared_strings;
use crate::sheet::SheetStream;
use crate::sink::BufferedSink;
use crate::styles::render_styles;
use crate::xml::escape_xml;

/// Everything that goes into a package besides the constant parts
pub(crate) struct Package<'a> {
    pub sheets: &'a mut [SheetStream],
    pub styles: &'a StyleRegistry,
    pub strings: &'a SharedStringTable,
    pub author: &'a str,
    pub validate_utf8: bool,
}

impl Package<'_> {
    /// Write the package; every sheet must already be finalized
    pub fn write<W: Write + Seek>(self, writer: W) -> XlsxResult<W> {
        if self.sheets.is_empty() {
            return Err(XlsxError::NoWorksheets);
        }

        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default();
        let has_strings = !self.strings.is_empty();

        zip.start_file("docProps/app.xml", options)?;
        zip.write_all(app_xml().as_bytes())?;

        zip.start_file("docProps/core.xml", options)?;
        zip.write_all(core_xml(self.author).as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(root_rels_xml().as_bytes())?;

        for sheet in self.sheets.iter_mut() {
            let part = format!("xl/worksheets/{}", sheet.part_name());
            let content = sheet.content()?;
            content.rewind()?;
            zip.start_file(part.as_str(), options)?;
            let copied = io::copy(content, &mut zip)?;
            debug!("Added {} ({} bytes)", part, copied);
        }

        if has_strings {
            zip.start_file("xl/sharedStrings.xml", options)?;
            let mut sink = BufferedSink::new(&mut zip).validate_utf8(self.validate_utf8);
            write_shared_strings(self.strings, &mut sink)?;
            sink.close()?;
        }

        let names: Vec<&str> = self.sheets.iter().map(|s| s.name()).collect();

        zip.start_file("xl/workbook.xml", options)?;
        zip.write_all(workbook_xml(&names).as_bytes())?;

        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(render_styles(self.styles).as_bytes())?;

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(content_types_xml(self.sheets, has_strings).as_bytes())?;

        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        zip.write_all(workbook_rels_xml(self.sheets, has_strings).as_bytes())?;

        debug!(
            "Assembled package with {} sheets, {} styles, {} shared strings",
            self.sheets.len(),
            self.styles.len(),
            self.strings.unique_count()
        );

        Ok(zip.finish()?)
    }
}

fn app_xml() -> String {
    String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><TotalTime>0</TotalTime></Properties>"#,
    )
}

fn core_xml(author: &str) -> String {
    let created = Utc::now().format("%Y-%m-%dT%H:%M:%S.00Z");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created><dc:creator>{}</dc:creator><cp:revision>0</cp:revision></cp:coreProperties>"#,
        created,
        escape_xml(author)
    )
}

fn root_rels_xml() -> String {
    String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
    )
}

/// Sheet `i` (0-based) is relationship `rId{i + 2}`; `rId1` is the style table
fn workbook_xml(sheet_names: &[&str]) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <workbookPr date1904="false"/>
    <bookViews><workbookView activeTab="0"/></bookViews>
    <sheets>"#,
    );

    for (i, name) in sheet_names.iter().enumerate() {
        content.push_str(&format!(
            r#"
        <sheet name="{}" sheetId="{}" state="visible" r:id="rId{}"/>"#,
            escape_xml(name),
            i + 1,
            i + 2
        ));
    }

    content.push_str(
        r#"
    </sheets>
    <calcPr iterateCount="100" refMode="A1" iterate="false" iterateDelta="0.001"/>
</workbook>"#,
    );
    content
}

fn workbook_rels_xml(sheets: &[SheetStream], has_strings: bool) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    );

    for (i, sheet) in sheets.iter().enumerate() {
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/{}"/>"#,
            i + 2,
            sheet.part_name()
        ));
    }

    if has_strings {
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
            sheets.len() + 2
        ));
    }

    content.push_str("\n</Relationships>");
    content
}

fn content_types_xml(sheets: &[SheetStream], has_strings: bool) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>"#,
    );

    for sheet in sheets {
        content.push_str(&format!(
            r#"
    <Override PartName="/xl/worksheets/{}" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            sheet.part_name()
        ));
    }

    if has_strings {
        content.push_str(
            r#"
    <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#,
        );
    }

    content.push_str(
        r#"
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#,
    );
    content
}
