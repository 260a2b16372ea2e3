//! XML text helpers

use std::borrow::Cow;

use quick_xml::escape::escape;

/// Escape `& < > " '` for element text and attribute values
///
/// Apostrophes are written as `&#39;`.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    let escaped = escape(s);
    if escaped.contains("&apos;") {
        Cow::Owned(escaped.replace("&apos;", "&#39;"))
    } else {
        escaped
    }
}

/// Whether text needs `xml:space="preserve"` to keep its outer whitespace
pub(crate) fn needs_space_preserve(s: &str) -> bool {
    s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
}
