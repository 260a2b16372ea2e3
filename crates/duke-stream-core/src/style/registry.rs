//! Insertion-ordered deduplicating registries

use std::hash::Hash;

use ahash::AHashMap;

/// Registry that deduplicates entries into dense, append-only IDs
///
/// Structurally equal entries always map to the same ID. IDs start at 0,
/// follow first-seen order and are never reused or renumbered.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    /// All unique entries, indexed by ID
    entries: Vec<T>,
    /// Fast lookup for deduplication
    index_map: AHashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index_map: AHashMap::new(),
        }
    }

    /// Create a registry pre-seeded with `entries`, deduplicated in order
    pub fn with_entries<I: IntoIterator<Item = T>>(entries: I) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.get_or_insert(entry);
        }
        registry
    }

    /// Get or create an entry, returning its ID
    ///
    /// If a structurally equal entry already exists, returns its ID.
    /// Otherwise, appends the entry and returns the new ID.
    pub fn get_or_insert(&mut self, entry: T) -> u32 {
        if let Some(&id) = self.index_map.get(&entry) {
            return id;
        }

        let id = self.entries.len() as u32;
        self.index_map.insert(entry.clone(), id);
        self.entries.push(entry);
        id
    }

    /// Look up the ID of an entry without inserting it
    pub fn id_of(&self, entry: &T) -> Option<u32> {
        self.index_map.get(entry).copied()
    }

    /// Get an entry by ID
    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.get(id as usize)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().enumerate().map(|(i, e)| (i as u32, e))
    }
}

impl<T: Clone + Eq + Hash> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
