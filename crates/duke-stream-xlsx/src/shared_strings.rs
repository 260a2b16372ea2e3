//! `xl/sharedStrings.xml` rendering

use std::io::{self, Write};

use duke_stream_core::SharedStringTable;

use crate::sink::BufferedSink;
use crate::xml::{escape_xml, needs_space_preserve};

/// Stream the shared-string table into `sink`
pub fn write_shared_strings<W: Write>(
    table: &SharedStringTable,
    sink: &mut BufferedSink<W>,
) -> io::Result<()> {
    sink.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n")?;
    sink.write_str(&format!(
        "<sst count=\"{}\" uniqueCount=\"{}\" xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">",
        table.total_reference_count(),
        table.unique_count()
    ))?;

    for text in table.iter() {
        let space = if needs_space_preserve(text) {
            " xml:space=\"preserve\""
        } else {
            ""
        };
        sink.write_str(&format!("<si><t{}>{}</t></si>", space, escape_xml(text)))?;
    }

    sink.write_str("</sst>")
}
