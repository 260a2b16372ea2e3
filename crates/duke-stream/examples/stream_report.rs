//! Example: Stream a styled report with dates and formulas

use duke_stream::prelude::*;

fn main() -> XlsxResult<()> {
    let mut writer = XlsxStreamWriter::new();
    writer.set_author("Reporting");

    let header = StyleDescriptor::new()
        .font(FONT_BOLD)
        .fill(FILL_LIGHT_GRAY)
        .border(BORDER_THIN)
        .horizontal_alignment(HorizontalAlignment::Center);
    writer.set_row_style("Report", RowKind::Header, header)?;

    let iso_date = writer.register_number_format("YYYY-MM-DD");
    writer.set_column_style("Report", 1, StyleDescriptor::new().num_fmt(iso_date))?;
    writer.set_column_format("Report", 1, ValueFormat::Date)?;

    writer.write_header_row("Report", ["Code", "Day", "Units", "Double"], None)?;

    for i in 0..10_000u32 {
        let row = i + 2;
        writer.write_row(
            "Report",
            [
                CellInput::from(format!("{:05}", i)),
                format!("2024-01-{:02} 00:00:00", i % 28 + 1).into(),
                (i % 97).into(),
                format!("=C{}*2", row).into(),
            ],
            None,
        )?;
    }

    writer.write_sheet([["Generated by duke-stream"]], Some("About"))?;

    writer.write_to_file("/tmp/stream_report.xlsx")?;
    println!("Created /tmp/stream_report.xlsx");

    Ok(())
}
