//! Cell styling types
//!
//! This module contains the descriptors that make up the workbook style
//! table and the registry that hands out their IDs:
//! - [`StyleDescriptor`] - One cell format (`<xf>` entry)
//! - [`FontDescriptor`] - Font settings
//! - [`FillDescriptor`] - Background fill
//! - [`BorderDescriptor`] - Cell borders
//! - [`StyleRegistry`] - Deduplicating owner of all of the above

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod registry;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use border::{BorderDescriptor, BorderEdge, BorderLineStyle};
pub use color::Color;
pub use fill::{FillDescriptor, PatternType};
pub use font::{FontDescriptor, FontOptions, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
pub use number_format::{builtin, NumberFormatRegistry, FIRST_CUSTOM_NUMBER_FORMAT_ID};
pub use registry::Registry;

use crate::cell::ValueFormat;
use crate::error::{Error, Result};

/// Font ID of the built-in bold font
pub const FONT_BOLD: u32 = 1;
/// Font ID of the built-in italic font
pub const FONT_ITALIC: u32 = 2;
/// Font ID of the built-in bold italic font
pub const FONT_BOLD_ITALIC: u32 = 3;

/// Fill ID of the built-in light gray solid fill
pub const FILL_LIGHT_GRAY: u32 = 2;
/// Fill ID of the built-in light red solid fill
pub const FILL_LIGHT_RED: u32 = 3;

/// Border ID of the built-in thin border on every edge
pub const BORDER_THIN: u32 = 1;

/// Complete cell format, referencing the font/fill/border tables by ID
///
/// The value format takes part in equality: the same visual style used for
/// dates and for strings occupies two registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDescriptor {
    /// Font table ID
    pub font_id: u32,
    /// Fill table ID
    pub fill_id: u32,
    /// Border table ID
    pub border_id: u32,
    /// Number format ID (built-in or custom)
    pub num_fmt_id: u32,
    /// Horizontal alignment, if any
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment, if any
    pub vertical: Option<VerticalAlignment>,
    /// How values written with this style are encoded
    pub value_format: ValueFormat,
}

impl StyleDescriptor {
    /// Create a new default descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font ID
    pub fn font(mut self, font_id: u32) -> Self {
        self.font_id = font_id;
        self
    }

    /// Set the fill ID
    pub fn fill(mut self, fill_id: u32) -> Self {
        self.fill_id = fill_id;
        self
    }

    /// Set the border ID
    pub fn border(mut self, border_id: u32) -> Self {
        self.border_id = border_id;
        self
    }

    /// Set the number format ID
    pub fn num_fmt(mut self, num_fmt_id: u32) -> Self {
        self.num_fmt_id = num_fmt_id;
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Set the value format
    pub fn value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    /// Whether an alignment is set
    pub fn has_alignment(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }
}

/// Workbook-wide style table
///
/// Owns the font, fill, border and cell-format registries. A fresh registry
/// already contains four fonts (regular, bold, italic, bold italic), four
/// fills (none, gray125, light gray, light red), two borders (none, thin) and
/// the default cell format at ID 0.
#[derive(Debug)]
pub struct StyleRegistry {
    fonts: Registry<FontDescriptor>,
    fills: Registry<FillDescriptor>,
    borders: Registry<BorderDescriptor>,
    number_formats: NumberFormatRegistry,
    styles: Registry<StyleDescriptor>,
}

impl StyleRegistry {
    /// Create a registry holding the built-in entries
    pub fn new() -> Self {
        let plain = FontDescriptor::default();
        let fonts = Registry::with_entries([
            plain.clone(),
            plain.clone().with_bold(true),
            plain.clone().with_italic(true),
            plain.with_bold(true).with_italic(true),
        ]);

        let fills = Registry::with_entries([
            FillDescriptor::none(),
            FillDescriptor::pattern(PatternType::Gray125),
            FillDescriptor::solid(Color::rgb(0xF2, 0xF2, 0xF2)),
            FillDescriptor::solid(Color::rgb(0xFF, 0x8C, 0x8C)),
        ]);

        let borders = Registry::with_entries([
            BorderDescriptor::new(),
            BorderDescriptor::all(BorderLineStyle::Thin, Color::SYSTEM_FOREGROUND),
        ]);

        Self {
            fonts,
            fills,
            borders,
            number_formats: NumberFormatRegistry::new(),
            styles: Registry::with_entries([StyleDescriptor::default()]),
        }
    }

    /// Get or assign the cell-format ID of a descriptor
    pub fn resolve(&mut self, descriptor: &StyleDescriptor) -> u32 {
        self.styles.get_or_insert(*descriptor)
    }

    /// Get or assign a font ID
    pub fn resolve_font(&mut self, font: FontDescriptor) -> u32 {
        self.fonts.get_or_insert(font)
    }

    /// Get or assign a fill ID
    pub fn resolve_fill(&mut self, fill: FillDescriptor) -> u32 {
        self.fills.get_or_insert(fill)
    }

    /// Get or assign a border ID
    pub fn resolve_border(&mut self, border: BorderDescriptor) -> u32 {
        self.borders.get_or_insert(border)
    }

    /// Register a font by name, size and emphasis, returning its ID
    pub fn register_font<S: Into<String>>(
        &mut self,
        name: S,
        size: f64,
        options: FontOptions,
    ) -> u32 {
        self.resolve_font(FontDescriptor::new(name, size).with_options(options))
    }

    /// Register a custom number format code, returning its ID
    pub fn register_number_format(&mut self, code: &str) -> u32 {
        self.number_formats.resolve(code)
    }

    /// Check that every table ID a descriptor references exists
    pub fn check(&self, descriptor: &StyleDescriptor) -> Result<()> {
        if self.fonts.get(descriptor.font_id).is_none() {
            return Err(Error::InvalidFontId(descriptor.font_id));
        }
        if self.fills.get(descriptor.fill_id).is_none() {
            return Err(Error::InvalidFillId(descriptor.fill_id));
        }
        if self.borders.get(descriptor.border_id).is_none() {
            return Err(Error::InvalidBorderId(descriptor.border_id));
        }
        if !self.number_formats.contains(descriptor.num_fmt_id) {
            return Err(Error::InvalidNumberFormatId(descriptor.num_fmt_id));
        }
        Ok(())
    }

    /// Font table
    pub fn fonts(&self) -> &Registry<FontDescriptor> {
        &self.fonts
    }

    /// Fill table
    pub fn fills(&self) -> &Registry<FillDescriptor> {
        &self.fills
    }

    /// Border table
    pub fn borders(&self) -> &Registry<BorderDescriptor> {
        &self.borders
    }

    /// Custom number formats
    pub fn number_formats(&self) -> &NumberFormatRegistry {
        &self.number_formats
    }

    /// Cell formats, indexed by style ID
    pub fn styles(&self) -> &Registry<StyleDescriptor> {
        &self.styles
    }

    /// Number of cell formats
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if only the default cell format exists
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
