//! Color representation

use std::fmt;

/// Color reference used by fills and borders
///
/// Indexed colors refer to the legacy palette (64 = system foreground);
/// ARGB colors carry the alpha byte first, as in `00F2F2F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Indexed color (legacy Excel palette)
    Indexed(u8),

    /// ARGB color packed as `0xAARRGGBB`
    Argb(u32),
}

impl Color {
    /// System foreground color (indexed 64)
    pub const SYSTEM_FOREGROUND: Color = Color::Indexed(64);

    /// Create an ARGB color from its components
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque-alpha-less RGB color (alpha byte 00)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0, r, g, b)
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "00FF0000")
    ///
    /// Six-digit input gets a `00` alpha byte.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 | 8 => u32::from_str_radix(hex, 16).ok().map(Color::Argb),
            _ => None,
        }
    }

    /// Convert to an 8-character ARGB hex string, if this is an ARGB color
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Argb(v) => Some(format!("{:08X}", v)),
            Color::Indexed(_) => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Indexed(i) => write!(f, "indexed({})", i),
            Color::Argb(v) => write!(f, "#{:08X}", v),
        }
    }
}
