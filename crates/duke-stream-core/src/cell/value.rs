//! Cell inputs and their encodings

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::date;
use crate::shared_strings::SharedStringTable;

/// How the values of a column (or style) should be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFormat {
    /// Let the value decide (the default)
    #[default]
    String,
    /// Numeric column
    Number,
    /// Calendar date; the time of day is discarded
    Date,
    /// Date and time of day
    DateTime,
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueFormat::String => "string",
            ValueFormat::Number => "number",
            ValueFormat::Date => "date",
            ValueFormat::DateTime => "datetime",
        };
        f.write_str(name)
    }
}

/// How raw byte input is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoding {
    /// Decode as UTF-8, replacing invalid sequences
    #[default]
    Utf8Lossy,
    /// Treat every byte as a Latin-1 code point
    Latin1,
}

impl TextDecoding {
    /// Decode raw bytes to text
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextDecoding::Utf8Lossy => String::from_utf8_lossy(bytes).into_owned(),
            TextDecoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

/// A value handed to the writer for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellInput {
    /// No value
    Empty,
    /// Floating point number
    Number(f64),
    /// Integer, written without going through floating point
    Integer(i64),
    /// Boolean, written as 1 or 0
    Bool(bool),
    /// Text
    Text(String),
    /// Raw bytes, decoded according to the writer's [`TextDecoding`]
    Bytes(Vec<u8>),
    /// Date and time of day
    DateTime(NaiveDateTime),
    /// Calendar date
    Date(NaiveDate),
    /// A collection; never a valid cell value
    List(Vec<CellInput>),
}

impl CellInput {
    /// Create a text input
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellInput::Text(s.into())
    }

    /// Whether the input counts as absent (nothing, empty text, empty list)
    pub fn is_empty(&self) -> bool {
        match self {
            CellInput::Empty => true,
            CellInput::Text(s) => s.is_empty(),
            CellInput::Bytes(b) => b.is_empty(),
            CellInput::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Whether the input is a single value rather than a collection
    pub fn is_scalar(&self) -> bool {
        !matches!(self, CellInput::List(_))
    }

    /// Whether the input is text (as opposed to an already-typed value)
    pub fn is_text(&self) -> bool {
        matches!(self, CellInput::Text(_) | CellInput::Bytes(_))
    }
}

impl From<f64> for CellInput {
    fn from(v: f64) -> Self {
        CellInput::Number(v)
    }
}

impl From<f32> for CellInput {
    fn from(v: f32) -> Self {
        CellInput::Number(v as f64)
    }
}

impl From<i64> for CellInput {
    fn from(v: i64) -> Self {
        CellInput::Integer(v)
    }
}

impl From<i32> for CellInput {
    fn from(v: i32) -> Self {
        CellInput::Integer(v as i64)
    }
}

impl From<u32> for CellInput {
    fn from(v: u32) -> Self {
        CellInput::Integer(v as i64)
    }
}

impl From<bool> for CellInput {
    fn from(v: bool) -> Self {
        CellInput::Bool(v)
    }
}

impl From<&str> for CellInput {
    fn from(s: &str) -> Self {
        CellInput::Text(s.to_string())
    }
}

impl From<String> for CellInput {
    fn from(s: String) -> Self {
        CellInput::Text(s)
    }
}

impl From<&String> for CellInput {
    fn from(s: &String) -> Self {
        CellInput::Text(s.clone())
    }
}

impl From<Vec<u8>> for CellInput {
    fn from(b: Vec<u8>) -> Self {
        CellInput::Bytes(b)
    }
}

impl From<NaiveDateTime> for CellInput {
    fn from(v: NaiveDateTime) -> Self {
        CellInput::DateTime(v)
    }
}

impl From<NaiveDate> for CellInput {
    fn from(v: NaiveDate) -> Self {
        CellInput::Date(v)
    }
}

impl<T: Into<CellInput>> From<Option<T>> for CellInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellInput::Empty, Into::into)
    }
}

/// The encoding chosen for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Style-only cell, no value payload
    Empty,
    /// Numeric value
    Number(f64),
    /// Integer kept as its original text
    NumericString(String),
    /// Whole-day date serial
    DateSerial(f64),
    /// Date serial with a time-of-day fraction
    DateTimeSerial(f64),
    /// Formula text, including the leading `=`
    Formula(String),
    /// Index into the shared-string table
    Text(u32),
}

impl CellValue {
    /// Classify an input under a format hint
    ///
    /// Rules are tried in a fixed order and the first match wins:
    /// empty input, date hint, datetime hint, non-text input, integer text
    /// without a leading zero, text starting with `=`, and finally any other
    /// text, which is interned into `strings`.
    ///
    /// Text such as `"0123"` is deliberately kept as a shared string so the
    /// leading zero survives.
    pub fn classify(
        input: &CellInput,
        format: ValueFormat,
        strings: &mut SharedStringTable,
        decoding: TextDecoding,
    ) -> CellValue {
        if input.is_empty() || !input.is_scalar() {
            return CellValue::Empty;
        }

        match format {
            ValueFormat::Date => return CellValue::DateSerial(input_serial(input, decoding).trunc()),
            ValueFormat::DateTime => return CellValue::DateTimeSerial(input_serial(input, decoding)),
            ValueFormat::String | ValueFormat::Number => {}
        }

        let text = match input {
            CellInput::Text(s) => s.clone(),
            CellInput::Bytes(b) => decoding.decode(b),
            other => return classify_typed(other),
        };

        if is_plain_integer(&text) {
            CellValue::NumericString(text)
        } else if text.starts_with('=') {
            CellValue::Formula(text)
        } else {
            CellValue::Text(strings.intern(&text))
        }
    }

    /// Check if the cell has no value payload
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Type name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::NumericString(_) => "numeric string",
            CellValue::DateSerial(_) => "date",
            CellValue::DateTimeSerial(_) => "datetime",
            CellValue::Formula(_) => "formula",
            CellValue::Text(_) => "shared string",
        }
    }
}

fn classify_typed(input: &CellInput) -> CellValue {
    match input {
        CellInput::Number(n) if n.is_finite() => CellValue::Number(*n),
        CellInput::Integer(i) => CellValue::NumericString(i.to_string()),
        CellInput::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        CellInput::DateTime(dt) => CellValue::Number(date::serial_from_datetime(dt)),
        CellInput::Date(d) => CellValue::Number(date::serial_from_date(d)),
        // NaN and infinities have no cell representation
        _ => CellValue::Empty,
    }
}

fn input_serial(input: &CellInput, decoding: TextDecoding) -> f64 {
    match input {
        CellInput::DateTime(dt) => date::serial_from_datetime(dt),
        CellInput::Date(d) => date::serial_from_date(d),
        CellInput::Text(s) => date::to_serial(s),
        CellInput::Bytes(b) => date::to_serial(&decoding.decode(b)),
        CellInput::Number(n) => date::to_serial(&n.to_string()),
        CellInput::Integer(i) => date::to_serial(&i.to_string()),
        CellInput::Bool(_) | CellInput::Empty | CellInput::List(_) => 0.0,
    }
}

/// Integer text with no leading zero, before or after an optional sign
fn is_plain_integer(text: &str) -> bool {
    if text.starts_with('0') {
        return false;
    }
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    text.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: impl Into<CellInput>, format: ValueFormat) -> (CellValue, SharedStringTable) {
        let mut strings = SharedStringTable::new();
        let value = CellValue::classify(&input.into(), format, &mut strings, TextDecoding::default());
        (value, strings)
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(classify(CellInput::Empty, ValueFormat::String).0, CellValue::Empty);
        assert_eq!(classify("", ValueFormat::String).0, CellValue::Empty);
        assert_eq!(classify("", ValueFormat::Date).0, CellValue::Empty);
        assert_eq!(classify(Vec::<u8>::new(), ValueFormat::String).0, CellValue::Empty);
        assert_eq!(
            classify(CellInput::List(vec![]), ValueFormat::String).0,
            CellValue::Empty
        );
        assert_eq!(classify(None::<f64>, ValueFormat::String).0, CellValue::Empty);
    }

    #[test]
    fn test_non_scalar_degrades_to_empty() {
        let list = CellInput::List(vec![CellInput::from("a"), CellInput::from(1)]);
        let (value, strings) = classify(list, ValueFormat::String);
        assert_eq!(value, CellValue::Empty);
        assert_eq!(strings.total_reference_count(), 0);
    }

    #[test]
    fn test_non_finite_numbers_degrade_to_empty() {
        assert_eq!(classify(f64::NAN, ValueFormat::String).0, CellValue::Empty);
        assert_eq!(classify(f64::INFINITY, ValueFormat::Number).0, CellValue::Empty);
    }

    #[test]
    fn test_leading_zero_stays_text() {
        let (value, strings) = classify("0123", ValueFormat::String);
        assert_eq!(value, CellValue::Text(0));
        assert_eq!(strings.get(0), Some("0123"));

        let (value, _) = classify("0", ValueFormat::String);
        assert_eq!(value, CellValue::Text(0));
    }

    #[test]
    fn test_signed_leading_zero_stays_text() {
        let (value, strings) = classify("-012", ValueFormat::String);
        assert_eq!(value, CellValue::Text(0));
        assert_eq!(strings.get(0), Some("-012"));

        let (value, strings) = classify("+0123", ValueFormat::String);
        assert_eq!(value, CellValue::Text(0));
        assert_eq!(strings.get(0), Some("+0123"));

        assert_eq!(
            classify("-0", ValueFormat::String).0,
            CellValue::NumericString("-0".into())
        );
    }

    #[test]
    fn test_integer_text_is_numeric() {
        assert_eq!(
            classify("123", ValueFormat::String).0,
            CellValue::NumericString("123".into())
        );
        assert_eq!(
            classify("-42", ValueFormat::String).0,
            CellValue::NumericString("-42".into())
        );
        // Exceeds i64, kept as text rather than rounded
        assert_eq!(
            classify("123456789012345678901234", ValueFormat::String).0,
            CellValue::Text(0)
        );
        // Decimal text isn't an integer
        assert_eq!(classify("1.5", ValueFormat::String).0, CellValue::Text(0));
    }

    #[test]
    fn test_formula_is_verbatim() {
        let (value, strings) = classify("=SUM(A1:A2)", ValueFormat::String);
        assert_eq!(value, CellValue::Formula("=SUM(A1:A2)".into()));
        assert!(strings.is_empty());
    }

    #[test]
    fn test_date_hint_wins_over_text_rules() {
        assert_eq!(
            classify("2008-01-01 18:00:00", ValueFormat::Date).0,
            CellValue::DateSerial(39448.0)
        );
        assert_eq!(
            classify("2008-01-01 18:00:00", ValueFormat::DateTime).0,
            CellValue::DateTimeSerial(39448.75)
        );
        // Unparseable date text collapses to serial 0
        assert_eq!(
            classify("=NOW()", ValueFormat::Date).0,
            CellValue::DateSerial(0.0)
        );
    }

    #[test]
    fn test_typed_inputs_are_numbers() {
        assert_eq!(classify(3.5, ValueFormat::String).0, CellValue::Number(3.5));
        assert_eq!(classify(true, ValueFormat::String).0, CellValue::Number(1.0));
        assert_eq!(classify(false, ValueFormat::String).0, CellValue::Number(0.0));
        assert_eq!(
            classify(9_007_199_254_740_993i64, ValueFormat::String).0,
            CellValue::NumericString("9007199254740993".into())
        );

        let day = NaiveDate::from_ymd_opt(2008, 1, 1).unwrap();
        assert_eq!(classify(day, ValueFormat::String).0, CellValue::Number(39448.0));
        let noon = day.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(classify(noon, ValueFormat::Date).0, CellValue::DateSerial(39448.0));
        assert_eq!(
            classify(noon, ValueFormat::DateTime).0,
            CellValue::DateTimeSerial(39448.5)
        );
    }

    #[test]
    fn test_number_hint_does_not_coerce_text() {
        assert_eq!(classify("abc", ValueFormat::Number).0, CellValue::Text(0));
    }

    #[test]
    fn test_bytes_decoding() {
        let mut strings = SharedStringTable::new();
        let latin1 = CellInput::Bytes(vec![b'c', b'a', b'f', 0xE9]);

        let value = CellValue::classify(&latin1, ValueFormat::String, &mut strings, TextDecoding::Latin1);
        assert_eq!(value, CellValue::Text(0));
        assert_eq!(strings.get(0), Some("caf\u{e9}"));

        let value = CellValue::classify(&latin1, ValueFormat::String, &mut strings, TextDecoding::Utf8Lossy);
        assert_eq!(value, CellValue::Text(1));
        assert_eq!(strings.get(1), Some("caf\u{fffd}"));
    }

    #[test]
    fn test_text_interns_once_per_call() {
        let mut strings = SharedStringTable::new();
        for _ in 0..3 {
            CellValue::classify(&"a".into(), ValueFormat::String, &mut strings, TextDecoding::default());
        }
        assert_eq!(strings.unique_count(), 1);
        assert_eq!(strings.total_reference_count(), 3);
    }
}
