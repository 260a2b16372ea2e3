//! Number format identifiers

use ahash::AHashMap;

/// Built-in number format IDs understood by every consumer without a
/// `<numFmt>` declaration
pub mod builtin {
    /// 0 - General
    pub const GENERAL: u32 = 0;
    /// 1 - 0
    pub const NUMBER_INT: u32 = 1;
    /// 2 - 0.00
    pub const NUMBER_DEC2: u32 = 2;
    /// 3 - #,##0
    pub const NUMBER_SEP: u32 = 3;
    /// 4 - #,##0.00
    pub const NUMBER_SEP_DEC2: u32 = 4;
    /// 9 - 0%
    pub const PERCENT_INT: u32 = 9;
    /// 10 - 0.00%
    pub const PERCENT_DEC2: u32 = 10;
    /// 14 - mm-dd-yy
    pub const DATE_SHORT: u32 = 14;
    /// 21 - h:mm:ss
    pub const TIME_24H_SEC: u32 = 21;
    /// 22 - m/d/yy h:mm
    pub const DATETIME: u32 = 22;
    /// 49 - @
    pub const TEXT: u32 = 49;
}

/// First ID available for custom format codes
pub const FIRST_CUSTOM_NUMBER_FORMAT_ID: u32 = 164;

/// Custom number format codes, deduplicated into IDs from 164 upwards
#[derive(Debug, Default)]
pub struct NumberFormatRegistry {
    formats: Vec<(u32, String)>,
    ids: AHashMap<String, u32>,
}

impl NumberFormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the ID for a format code
    pub fn resolve(&mut self, code: &str) -> u32 {
        if let Some(&id) = self.ids.get(code) {
            return id;
        }

        let id = FIRST_CUSTOM_NUMBER_FORMAT_ID + self.formats.len() as u32;
        self.ids.insert(code.to_string(), id);
        self.formats.push((id, code.to_string()));
        id
    }

    /// Whether `id` is a built-in or a registered custom format
    pub fn contains(&self, id: u32) -> bool {
        id < FIRST_CUSTOM_NUMBER_FORMAT_ID
            || ((id - FIRST_CUSTOM_NUMBER_FORMAT_ID) as usize) < self.formats.len()
    }

    /// Number of custom format codes
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if no custom format code was registered
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Iterate over `(id, code)` pairs in ID order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.formats.iter().map(|(id, code)| (*id, code.as_str()))
    }
}
