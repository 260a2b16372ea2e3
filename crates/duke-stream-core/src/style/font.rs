//! Font descriptors

/// Default font family for new workbooks
pub const DEFAULT_FONT_NAME: &str = "Calibri";

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Emphasis flags accepted when registering a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontOptions {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Single underline
    pub underline: bool,
    /// Double underline
    pub double_underline: bool,
}

impl FontOptions {
    /// No emphasis
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set single underline
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set double underline
    pub fn double_underline(mut self, double_underline: bool) -> Self {
        self.double_underline = double_underline;
        self
    }
}

/// One entry of the workbook font table
///
/// Equality and hashing compare `size` by its bit pattern, with `-0.0` folded
/// into `0.0`, so every descriptor is equal to itself.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescriptor {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Emphasis flags
    pub options: FontOptions,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE)
    }
}

impl FontDescriptor {
    /// Create a plain font
    ///
    /// A size that is not finite falls back to [`DEFAULT_FONT_SIZE`].
    pub fn new<S: Into<String>>(name: S, size: f64) -> Self {
        let size = if size.is_finite() { size } else { DEFAULT_FONT_SIZE };
        Self {
            name: name.into(),
            size: size + 0.0,
            options: FontOptions::default(),
        }
    }

    /// Set emphasis flags
    pub fn with_options(mut self, options: FontOptions) -> Self {
        self.options = options;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.options.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.options.italic = italic;
        self
    }

    fn size_bits(&self) -> u64 {
        if self.size == 0.0 {
            0.0f64.to_bits()
        } else {
            self.size.to_bits()
        }
    }
}

impl PartialEq for FontDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size_bits() == other.size_bits()
            && self.options == other.options
    }
}

impl Eq for FontDescriptor {}

impl std::hash::Hash for FontDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size_bits().hash(state);
        self.options.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(font: &FontDescriptor) -> u64 {
        let mut hasher = DefaultHasher::new();
        font.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_signed_zero_sizes_are_equal() {
        let mut negative = FontDescriptor::new("Arial", 0.0);
        negative.size = -0.0;
        let positive = FontDescriptor::new("Arial", 0.0);

        assert_eq!(negative, positive);
        assert_eq!(hash_of(&negative), hash_of(&positive));
        assert_eq!(FontDescriptor::new("Arial", -0.0).size.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_nan_size_is_reflexive() {
        let mut font = FontDescriptor::new("Arial", 10.0);
        font.size = f64::NAN;
        assert_eq!(font, font.clone());
        assert_eq!(hash_of(&font), hash_of(&font.clone()));
    }

    #[test]
    fn test_non_finite_size_falls_back_to_default() {
        assert_eq!(FontDescriptor::new("Arial", f64::NAN).size, DEFAULT_FONT_SIZE);
        assert_eq!(FontDescriptor::new("Arial", f64::INFINITY).size, DEFAULT_FONT_SIZE);
    }
}
