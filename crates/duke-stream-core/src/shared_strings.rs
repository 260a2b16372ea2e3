//! Shared string table

use crate::style::Registry;

/// Deduplicated text values referenced by index from string cells
///
/// Tracks both the number of distinct strings and the number of references
/// made to them; the table header carries both.
#[derive(Debug, Default)]
pub struct SharedStringTable {
    strings: Registry<String>,
    total_references: u64,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the index of `text`, counting one reference
    pub fn intern(&mut self, text: &str) -> u32 {
        self.total_references += 1;
        self.strings.get_or_insert(text.to_string())
    }

    /// Get a string by index
    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Number of distinct strings
    pub fn unique_count(&self) -> usize {
        self.strings.len()
    }

    /// Number of `intern` calls, repeats included
    pub fn total_reference_count(&self) -> u64 {
        self.total_references
    }

    /// Check if no string was interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over strings in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(|(_, s)| s.as_str())
    }
}
