//! Style resolution as seen in the written package

mod common;

use common::{memory_writer, Package};
use duke_stream::prelude::*;
use pretty_assertions::assert_eq;

/// Column style beats the sheet's row style, which beats the call's style
#[test]
fn test_style_precedence() {
    let mut writer = memory_writer();
    let row = StyleDescriptor::new().fill(FILL_LIGHT_GRAY);
    let call = StyleDescriptor::new().font(FONT_ITALIC);
    let column = StyleDescriptor::new().font(FONT_BOLD);

    writer.set_row_style("Data", RowKind::Row, row).unwrap();
    writer.set_column_style("Data", 2, column).unwrap();

    writer.write_row("Data", [1, 2, 3], None).unwrap();
    writer.write_row("Data", [1, 2, 3], Some(call)).unwrap();
    writer.write_row("Plain", [1], Some(call)).unwrap();

    let mut package = Package::open(writer.write_to_vec().unwrap());
    let sheet = package.part("xl/worksheets/sheet1.xml");

    // IDs in first-seen order: 1 = row style, 2 = column style, 3 = call style
    assert!(sheet.contains(concat!(
        r#"<row r="1"><c r="A1" s="1" t="n"><v>1</v></c><c r="B1" s="1" t="n"><v>2</v></c>"#,
        r#"<c r="C1" s="2" t="n"><v>3</v></c></row>"#
    )));
    assert!(sheet.contains(concat!(
        r#"<row r="2"><c r="A2" s="1" t="n"><v>1</v></c><c r="B2" s="1" t="n"><v>2</v></c>"#,
        r#"<c r="C2" s="2" t="n"><v>3</v></c></row>"#
    )));

    // Without a row style the call's style applies
    let plain = package.part("xl/worksheets/sheet2.xml");
    assert!(plain.contains(r#"<row r="1"><c r="A1" s="3" t="n"><v>1</v></c></row>"#));

    let styles = package.part("xl/styles.xml");
    assert!(styles.contains(r#"<cellXfs count="4">"#));
    assert!(styles.contains(r#"<xf numFmtId="0" fontId="0" fillId="2" borderId="0" xfId="0" applyFill="1"/>"#));
    assert!(styles.contains(r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#));
    assert!(styles.contains(r#"<xf numFmtId="0" fontId="2" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#));
}

/// Header rows ignore column styles and formats
#[test]
fn test_header_rows() {
    let mut writer = memory_writer();
    let header = StyleDescriptor::new()
        .font(FONT_BOLD)
        .border(BORDER_THIN)
        .horizontal_alignment(HorizontalAlignment::Center);

    writer.set_row_style("Data", RowKind::Header, header).unwrap();
    writer.set_column_style("Data", 0, StyleDescriptor::new().fill(FILL_LIGHT_RED)).unwrap();
    writer.set_column_format("Data", 0, ValueFormat::Date).unwrap();

    let italic = StyleDescriptor::new().font(FONT_ITALIC);
    writer.write_header_row("Data", ["2020-01-01", "123"], None).unwrap();
    writer.write_header_row("Data", ["x"], Some(italic)).unwrap();
    writer.write_header_row("Other", ["y"], Some(italic)).unwrap();

    let mut package = Package::open(writer.write_to_vec().unwrap());
    let sheet = package.part("xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<c r="A1" s="1" t="s"><v>0</v></c><c r="B1" s="1" t="n"><v>123</v></c>"#));
    // The sheet's header style wins over the call's style
    assert!(sheet.contains(r#"<c r="A2" s="1" t="s"><v>1</v></c>"#));

    let other = package.part("xl/worksheets/sheet2.xml");
    assert!(other.contains(r#"<c r="A1" s="2" t="s"><v>2</v></c>"#));

    let styles = package.part("xl/styles.xml");
    assert!(styles.contains(concat!(
        r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="1" xfId="0" applyFont="1" applyBorder="1" applyAlignment="1">"#,
        r#"<alignment horizontal="center"/></xf>"#
    )));
}

/// Custom fonts, fills, borders and number formats end up in styles.xml
#[test]
fn test_custom_style_tables() {
    let mut writer = memory_writer();
    let font = writer.register_font("Arial", 14.0, FontOptions::new().bold(true).underline(true));
    let fill = writer.register_fill(FillDescriptor::solid(Color::rgb(0xDD, 0xEE, 0xFF)));
    let border = writer.register_border(BorderDescriptor::outline(
        BorderLineStyle::Medium,
        Color::argb(0xFF, 0, 0, 0),
    ));
    let money = writer.register_number_format("#,##0.00 \"EUR\"");
    assert_eq!((font, fill, border, money), (4, 4, 2, 164));

    let style = StyleDescriptor::new()
        .font(font)
        .fill(fill)
        .border(border)
        .num_fmt(money)
        .vertical_alignment(VerticalAlignment::Center);
    writer.write_row("Money", [12.5], Some(style)).unwrap();

    let mut package = Package::open(writer.write_to_vec().unwrap());
    let styles = package.part("xl/styles.xml");

    assert!(styles.contains(
        r##"<numFmts count="1"><numFmt numFmtId="164" formatCode="#,##0.00 &quot;EUR&quot;"/></numFmts>"##
    ));
    assert!(styles.contains(r#"<fonts count="5">"#));
    assert!(styles.contains(
        r#"<font><name val="Arial"/><b/><u/><family val="2"/><sz val="14"/></font>"#
    ));
    assert!(styles.contains(
        r#"<fill><patternFill patternType="solid"><fgColor rgb="00DDEEFF"/></patternFill></fill>"#
    ));
    assert!(styles.contains(r#"<left style="medium"><color rgb="FF000000"/></left>"#));
    assert!(styles.contains(concat!(
        r#"<xf numFmtId="164" fontId="4" fillId="4" borderId="2" xfId="0" "#,
        r#"applyNumberFormat="1" applyFont="1" applyFill="1" applyBorder="1" applyAlignment="1">"#,
        r#"<alignment vertical="center"/></xf>"#
    )));
}

/// The same descriptor used by different sheets shares one ID
#[test]
fn test_styles_shared_across_sheets() {
    let mut writer = memory_writer();
    let bold = StyleDescriptor::new().font(FONT_BOLD);
    writer.write_row("A", ["x"], Some(bold)).unwrap();
    writer.write_row("B", ["y"], Some(bold)).unwrap();

    assert_eq!(writer.styles().len(), 2);

    let mut package = Package::open(writer.write_to_vec().unwrap());
    assert!(package.part("xl/worksheets/sheet1.xml").contains(r#"<c r="A1" s="1" t="s"><v>0</v></c>"#));
    assert!(package.part("xl/worksheets/sheet2.xml").contains(r#"<c r="A1" s="1" t="s"><v>1</v></c>"#));
}

/// Empty cells still carry their style
#[test]
fn test_style_only_cells() {
    let mut writer = memory_writer();
    let gray = StyleDescriptor::new().fill(FILL_LIGHT_GRAY);
    writer
        .write_row("Data", [CellInput::Empty, "".into(), CellInput::List(vec![])], Some(gray))
        .unwrap();

    let mut package = Package::open(writer.write_to_vec().unwrap());
    let sheet = package.part("xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<row r="1"><c r="A1" s="1"/><c r="B1" s="1"/><c r="C1" s="1"/></row>"#));
    assert!(!package.has("xl/sharedStrings.xml"));
}
