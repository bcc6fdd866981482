//! CAD table types and management

use crate::error::{CadError, Result};
use indexmap::IndexMap;

pub mod appid;
pub mod block_record;
pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod ucs;
pub mod vport;

pub use appid::AppId;
pub use block_record::{BlockRecord, MODEL_SPACE, PAPER_SPACE};
pub use dimstyle::{DimStyle, DimensionTextAlignment};
pub use layer::{Layer, LayerFlags};
pub use linetype::{LineType, LineTypeElement};
pub use textstyle::{TextStyle, TextStyleFlags};
pub use ucs::Ucs;
pub use vport::{VPort, ACTIVE_VPORT};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name
    fn name(&self) -> &str;

    /// Set the entry's name
    fn set_name(&mut self, name: String);
}

/// Generic table for storing named entries
///
/// Lookups are case-insensitive and iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry to the table
    pub fn add(&mut self, entry: T) -> Result<()> {
        let key = entry.name().to_uppercase();
        if self.entries.contains_key(&key) {
            return Err(CadError::DuplicateEntry(entry.name().to_string()));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Replace an existing entry, keeping its position in the table
    pub fn replace(&mut self, entry: T) -> Result<()> {
        match self.entries.get_mut(&entry.name().to_uppercase()) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(CadError::ObjectNotFound(entry.name().to_string())),
        }
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Get a mutable entry by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(&name.to_uppercase())
    }

    /// Position of an entry in insertion order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(&name.to_uppercase())
    }

    /// Remove an entry by name (case-insensitive)
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.shift_remove(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Iterate over all entries mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
