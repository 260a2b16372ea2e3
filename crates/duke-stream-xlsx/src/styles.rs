//! `xl/styles.xml` rendering

use duke_stream_core::style::{
    BorderDescriptor, BorderEdge, Color, FillDescriptor, FontDescriptor, PatternType,
    StyleDescriptor, StyleRegistry,
};

use crate::xml::escape_xml;

/// Render the style table of a registry
///
/// Cell formats are emitted in ID order, so the `s` attribute written for a
/// cell is its index into `<cellXfs>`.
pub fn render_styles(registry: &StyleRegistry) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <styleSheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">",
    );

    let formats = registry.number_formats();
    if !formats.is_empty() {
        xml.push_str(&format!("<numFmts count=\"{}\">", formats.len()));
        for (id, code) in formats.iter() {
            xml.push_str(&format!(
                "<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                id,
                escape_xml(code)
            ));
        }
        xml.push_str("</numFmts>");
    }

    // Fonts
    xml.push_str(&format!("<fonts count=\"{}\">", registry.fonts().len()));
    for (_, font) in registry.fonts().iter() {
        xml.push_str(&write_font(font));
    }
    xml.push_str("</fonts>");

    // Fills
    xml.push_str(&format!("<fills count=\"{}\">", registry.fills().len()));
    for (_, fill) in registry.fills().iter() {
        xml.push_str(&write_fill(fill));
    }
    xml.push_str("</fills>");

    // Borders
    xml.push_str(&format!("<borders count=\"{}\">", registry.borders().len()));
    for (_, border) in registry.borders().iter() {
        xml.push_str(&write_border(border));
    }
    xml.push_str("</borders>");

    xml.push_str(
        "<cellStyleXfs count=\"1\">\
         <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/>\
         </cellStyleXfs>",
    );

    xml.push_str(&format!("<cellXfs count=\"{}\">", registry.styles().len()));
    for (_, style) in registry.styles().iter() {
        xml.push_str(&write_xf(style));
    }
    xml.push_str("</cellXfs>");

    xml.push_str(
        "<cellStyles count=\"1\">\
         <cellStyle name=\"Normal\" xfId=\"0\" builtinId=\"0\"/>\
         </cellStyles>",
    );

    xml.push_str("</styleSheet>");
    xml
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Indexed(i) => format!("<{tag} indexed=\"{}\"/>", i),
        Color::Argb(v) => format!("<{tag} rgb=\"{:08X}\"/>", v),
    }
}

fn write_font(font: &FontDescriptor) -> String {
    let mut s = String::from("<font>");
    s.push_str(&format!("<name val=\"{}\"/>", escape_xml(&font.name)));
    if font.options.bold {
        s.push_str("<b/>");
    }
    if font.options.italic {
        s.push_str("<i/>");
    }
    if font.options.underline {
        s.push_str("<u/>");
    }
    if font.options.double_underline {
        s.push_str("<u val=\"double\"/>");
    }
    s.push_str("<family val=\"2\"/>");
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillDescriptor) -> String {
    if fill.pattern == PatternType::None && fill.fg_color.is_none() && fill.bg_color.is_none() {
        return "<fill><patternFill patternType=\"none\"/></fill>".to_string();
    }

    let mut s = format!("<fill><patternFill patternType=\"{}\">", fill.pattern.as_str());
    if let Some(fg) = &fill.fg_color {
        s.push_str(&write_color("fgColor", fg));
    }
    if let Some(bg) = &fill.bg_color {
        s.push_str(&write_color("bgColor", bg));
    }
    s.push_str("</patternFill></fill>");
    s
}

fn write_border_edge(tag: &str, edge: Option<&BorderEdge>) -> String {
    let Some(edge) = edge else {
        return format!("<{tag}/>");
    };

    let mut s = format!("<{tag} style=\"{}\">", edge.style.as_str());
    if let Some(color) = &edge.color {
        s.push_str(&write_color("color", color));
    }
    s.push_str(&format!("</{tag}>"));
    s
}

fn write_border(border: &BorderDescriptor) -> String {
    let mut s = String::from("<border>");
    for (tag, edge) in border.edges() {
        s.push_str(&write_border_edge(tag, edge));
    }
    s.push_str("</border>");
    s
}

fn write_xf(style: &StyleDescriptor) -> String {
    // apply flags
    let mut attrs = String::new();
    if style.num_fmt_id != 0 {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if style.font_id != 0 {
        attrs.push_str(" applyFont=\"1\"");
    }
    if style.fill_id != 0 {
        attrs.push_str(" applyFill=\"1\"");
    }
    if style.border_id != 0 {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if style.has_alignment() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        style.num_fmt_id, style.font_id, style.fill_id, style.border_id, attrs
    );

    if !style.has_alignment() {
        s.push_str("/>");
        return s;
    }

    s.push_str("><alignment");
    if let Some(h) = style.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", h.as_str()));
    }
    if let Some(v) = style.vertical {
        s.push_str(&format!(" vertical=\"{}\"", v.as_str()));
    }
    s.push_str("/></xf>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_stream_core::style::{
        BorderLineStyle, FontOptions, HorizontalAlignment, VerticalAlignment, BORDER_THIN,
        FILL_LIGHT_RED, FONT_BOLD,
    };
    use duke_stream_core::ValueFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_tables() {
        let xml = render_styles(&StyleRegistry::new());

        assert!(xml.contains(concat!(
            "<fonts count=\"4\">",
            "<font><name val=\"Calibri\"/><family val=\"2\"/><sz val=\"11\"/></font>",
            "<font><name val=\"Calibri\"/><b/><family val=\"2\"/><sz val=\"11\"/></font>",
            "<font><name val=\"Calibri\"/><i/><family val=\"2\"/><sz val=\"11\"/></font>",
            "<font><name val=\"Calibri\"/><b/><i/><family val=\"2\"/><sz val=\"11\"/></font>",
            "</fonts>"
        )));
        assert!(xml.contains(concat!(
            "<fills count=\"4\">",
            "<fill><patternFill patternType=\"none\"/></fill>",
            "<fill><patternFill patternType=\"gray125\"></patternFill></fill>",
            "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"00F2F2F2\"/></patternFill></fill>",
            "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"00FF8C8C\"/></patternFill></fill>",
            "</fills>"
        )));
        assert!(xml.contains(concat!(
            "<borders count=\"2\">",
            "<border><left/><right/><top/><bottom/><diagonal/></border>",
            "<border>",
            "<left style=\"thin\"><color indexed=\"64\"/></left>",
            "<right style=\"thin\"><color indexed=\"64\"/></right>",
            "<top style=\"thin\"><color indexed=\"64\"/></top>",
            "<bottom style=\"thin\"><color indexed=\"64\"/></bottom>",
            "<diagonal style=\"thin\"><color indexed=\"64\"/></diagonal>",
            "</border>",
            "</borders>"
        )));
        assert!(xml.contains(
            "<cellXfs count=\"1\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/></cellXfs>"
        ));
        assert!(!xml.contains("<numFmts"));
    }

    #[test]
    fn test_xf_entries_follow_ids() {
        let mut registry = StyleRegistry::new();
        let header = StyleDescriptor::new()
            .font(FONT_BOLD)
            .fill(FILL_LIGHT_RED)
            .border(BORDER_THIN)
            .horizontal_alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Top);
        assert_eq!(registry.resolve(&header), 1);

        let custom = registry.register_number_format("YYYY-MM-DD");
        let date = StyleDescriptor::new()
            .num_fmt(custom)
            .value_format(ValueFormat::Date);
        assert_eq!(registry.resolve(&date), 2);

        let xml = render_styles(&registry);
        assert!(xml.contains(
            "<numFmts count=\"1\"><numFmt numFmtId=\"164\" formatCode=\"YYYY-MM-DD\"/></numFmts>"
        ));
        assert!(xml.contains(concat!(
            "<cellXfs count=\"3\">",
            "<xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>",
            "<xf numFmtId=\"0\" fontId=\"1\" fillId=\"3\" borderId=\"1\" xfId=\"0\" applyFont=\"1\" applyFill=\"1\" applyBorder=\"1\" applyAlignment=\"1\">",
            "<alignment horizontal=\"center\" vertical=\"top\"/></xf>",
            "<xf numFmtId=\"164\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyNumberFormat=\"1\"/>",
            "</cellXfs>"
        )));
    }

    #[test]
    fn test_custom_font_and_border() {
        let mut registry = StyleRegistry::new();
        registry.register_font(
            "Times & Co",
            9.5,
            FontOptions::new().underline(true).double_underline(true),
        );
        registry.resolve_border(
            BorderDescriptor::new().with_bottom(BorderLineStyle::Double, Color::rgb(0x12, 0x34, 0x56)),
        );

        let xml = render_styles(&registry);
        assert!(xml.contains(
            "<font><name val=\"Times &amp; Co\"/><u/><u val=\"double\"/><family val=\"2\"/><sz val=\"9.5\"/></font>"
        ));
        assert!(xml.contains(
            "<border><left/><right/><top/><bottom style=\"double\"><color rgb=\"00123456\"/></bottom><diagonal/></border>"
        ));
    }
}
