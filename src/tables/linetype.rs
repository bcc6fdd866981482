//! Line type table entry

use super::TableEntry;

/// One dash, gap or dot of a line type pattern
///
/// Positive lengths are dashes, negative lengths gaps and zero a dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    pub length: f64,
}

impl LineTypeElement {
    pub fn new(length: f64) -> Self {
        LineTypeElement { length }
    }
}

/// A line type table entry
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Description shown in pickers
    pub description: String,
    /// Pattern elements
    pub elements: Vec<LineTypeElement>,
}

impl LineType {
    /// Create a new line type with an empty pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
            elements: Vec::new(),
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..Self::new("Continuous")
        }
    }

    /// Create the "ByLayer" line type
    pub fn by_layer() -> Self {
        Self::new("ByLayer")
    }

    /// Create the "ByBlock" line type
    pub fn by_block() -> Self {
        Self::new("ByBlock")
    }

    /// Total length of one pattern repetition
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.length.abs()).sum()
    }

    pub fn add_element(&mut self, length: f64) {
        self.elements.push(LineTypeElement::new(length));
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
