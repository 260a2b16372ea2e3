//! Cell XML encoding

use std::io::{self, Write};

use duke_stream_core::{
    cell_label, CellInput, CellValue, SharedStringTable, StyleDescriptor, StyleRegistry,
    TextDecoding,
};

use crate::sink::BufferedSink;
use crate::xml::escape_xml;

/// Turns cell inputs into `<c>` elements
///
/// The format hint is taken from the style descriptor's `value_format`.
/// Every cell resolves a style ID, empty cells included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellEncoder {
    decoding: TextDecoding,
}

impl CellEncoder {
    /// Create an encoder that decodes byte input with `decoding`
    pub fn new(decoding: TextDecoding) -> Self {
        Self { decoding }
    }

    /// Classify one cell and build its XML
    ///
    /// Registers the style and, for plain text, the shared string.
    pub fn encode(
        &self,
        row: u32,
        col: u16,
        input: &CellInput,
        style: &StyleDescriptor,
        styles: &mut StyleRegistry,
        strings: &mut SharedStringTable,
    ) -> String {
        let style_id = styles.resolve(style);
        let value = CellValue::classify(input, style.value_format, strings, self.decoding);
        render_cell(&cell_label(row, col), style_id, &value)
    }

    /// Encode one cell straight into a sink
    #[allow(clippy::too_many_arguments)]
    pub fn write_cell<W: Write>(
        &self,
        sink: &mut BufferedSink<W>,
        row: u32,
        col: u16,
        input: &CellInput,
        style: &StyleDescriptor,
        styles: &mut StyleRegistry,
        strings: &mut SharedStringTable,
    ) -> io::Result<()> {
        let xml = self.encode(row, col, input, style, styles, strings);
        sink.write_str(&xml)
    }
}

/// Build the `<c>` element for an already classified value
pub fn render_cell(label: &str, style_id: u32, value: &CellValue) -> String {
    let style_attr = if style_id != 0 {
        format!(" s=\"{}\"", style_id)
    } else {
        String::new()
    };

    match value {
        CellValue::Empty => format!("<c r=\"{}\"{}/>", label, style_attr),
        CellValue::Number(n) | CellValue::DateSerial(n) | CellValue::DateTimeSerial(n) => {
            format!("<c r=\"{}\"{} t=\"n\"><v>{}</v></c>", label, style_attr, n)
        }
        CellValue::NumericString(s) => {
            format!("<c r=\"{}\"{} t=\"n\"><v>{}</v></c>", label, style_attr, s)
        }
        CellValue::Formula(f) => format!(
            "<c r=\"{}\"{} t=\"s\"><f>{}</f></c>",
            label,
            style_attr,
            escape_xml(f)
        ),
        CellValue::Text(index) => {
            format!("<c r=\"{}\"{} t=\"s\"><v>{}</v></c>", label, style_attr, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_stream_core::style::{FILL_LIGHT_GRAY, FONT_BOLD};
    use duke_stream_core::ValueFormat;
    use pretty_assertions::assert_eq;

    struct Fixture {
        encoder: CellEncoder,
        styles: StyleRegistry,
        strings: SharedStringTable,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                encoder: CellEncoder::default(),
                styles: StyleRegistry::new(),
                strings: SharedStringTable::new(),
            }
        }

        fn encode(&mut self, row: u32, col: u16, input: impl Into<CellInput>, style: StyleDescriptor) -> String {
            self.encoder.encode(
                row,
                col,
                &input.into(),
                &style,
                &mut self.styles,
                &mut self.strings,
            )
        }
    }

    #[test]
    fn test_default_style_omits_attribute() {
        let mut fx = Fixture::new();
        assert_eq!(fx.encode(0, 0, CellInput::Empty, StyleDescriptor::new()), "<c r=\"A1\"/>");
        assert_eq!(
            fx.encode(0, 1, 2.5, StyleDescriptor::new()),
            "<c r=\"B1\" t=\"n\"><v>2.5</v></c>"
        );
    }

    #[test]
    fn test_empty_cell_keeps_style() {
        let mut fx = Fixture::new();
        let gray = StyleDescriptor::new().fill(FILL_LIGHT_GRAY);
        assert_eq!(fx.encode(2, 2, "", gray), "<c r=\"C3\" s=\"1\"/>");
        assert_eq!(fx.styles.len(), 2);
    }

    #[test]
    fn test_text_goes_to_shared_strings() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.encode(0, 0, "a", StyleDescriptor::new()),
            "<c r=\"A1\" t=\"s\"><v>0</v></c>"
        );
        assert_eq!(
            fx.encode(0, 1, "0100", StyleDescriptor::new()),
            "<c r=\"B1\" t=\"s\"><v>1</v></c>"
        );
        assert_eq!(
            fx.encode(1, 0, "a", StyleDescriptor::new()),
            "<c r=\"A2\" t=\"s\"><v>0</v></c>"
        );
        assert_eq!(fx.strings.unique_count(), 2);
        assert_eq!(fx.strings.total_reference_count(), 3);
    }

    #[test]
    fn test_numeric_string_and_formula() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.encode(0, 0, "123", StyleDescriptor::new()),
            "<c r=\"A1\" t=\"n\"><v>123</v></c>"
        );
        assert_eq!(
            fx.encode(0, 1, "=IF(A1<2,\"lo\",\"hi\")", StyleDescriptor::new()),
            "<c r=\"B1\" t=\"s\"><f>=IF(A1&lt;2,&quot;lo&quot;,&quot;hi&quot;)</f></c>"
        );
        assert!(fx.strings.is_empty());
    }

    #[test]
    fn test_dates_follow_value_format() {
        let mut fx = Fixture::new();
        let date = StyleDescriptor::new().value_format(ValueFormat::Date);
        let datetime = StyleDescriptor::new().value_format(ValueFormat::DateTime);

        assert_eq!(
            fx.encode(0, 0, "2008-01-01 18:00:00", date),
            "<c r=\"A1\" s=\"1\" t=\"n\"><v>39448</v></c>"
        );
        assert_eq!(
            fx.encode(0, 1, "2008-01-01 18:00:00", datetime),
            "<c r=\"B1\" s=\"2\" t=\"n\"><v>39448.75</v></c>"
        );
    }

    #[test]
    fn test_write_cell_goes_through_sink() {
        let mut fx = Fixture::new();
        let mut sink = BufferedSink::new(Vec::new());
        let bold = StyleDescriptor::new().font(FONT_BOLD);

        fx.encoder
            .write_cell(&mut sink, 4, 27, &CellInput::from(7), &bold, &mut fx.styles, &mut fx.strings)
            .unwrap();

        let out = sink.close().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<c r=\"AB5\" s=\"1\" t=\"n\"><v>7</v></c>"
        );
    }
}
