//! Text style table entry
//!
//! Shape files share the text style table; they are entries carrying
//! [`TextStyleFlags::SHAPE_FILE`].

use super::TableEntry;
use bitflags::bitflags;

bitflags! {
    /// Text style flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextStyleFlags: i16 {
        /// Entry describes a shape file rather than a font
        const SHAPE_FILE = 1;
        /// Text is drawn vertically
        const VERTICAL = 4;
        /// Text is mirrored in X
        const BACKWARD = 16;
        /// Text is mirrored in Y
        const UPSIDE_DOWN = 32;
    }
}

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Style name
    pub name: String,
    /// Style flags
    pub flags: TextStyleFlags,
    /// Fixed text height (0 = variable)
    pub height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle in radians
    pub oblique_angle: f64,
    /// Primary font file name
    pub font_file: String,
    /// Big font file name (for Asian languages)
    pub big_font_file: String,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            flags: TextStyleFlags::empty(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
        }
    }

    /// Create a shape file entry
    pub fn shape(name: impl Into<String>) -> Self {
        TextStyle {
            flags: TextStyleFlags::SHAPE_FILE,
            font_file: String::new(),
            ..Self::new(name)
        }
    }

    /// Create the standard "Standard" text style
    pub fn standard() -> Self {
        Self::new("Standard")
    }

    pub fn is_shape_file(&self) -> bool {
        self.flags.contains(TextStyleFlags::SHAPE_FILE)
    }
}

impl TableEntry for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_file_flag() {
        assert!(TextStyle::shape("GDT").is_shape_file());
        assert!(!TextStyle::standard().is_shape_file());
    }
}
