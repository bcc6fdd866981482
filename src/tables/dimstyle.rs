//! Dimension style table entry

use super::TableEntry;
use crate::types::Color;

/// Vertical placement of dimension text relative to the dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionTextAlignment {
    #[default]
    Centered,
    Above,
    Outside,
    Jis,
    Below,
}

/// A dimension style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    /// Style name
    pub name: String,
    /// Text style used for dimension text
    pub text_style: String,
    /// Overall scale factor (DIMSCALE)
    pub scale_factor: f64,
    /// Arrow size (DIMASZ)
    pub arrow_size: f64,
    /// Text height (DIMTXT)
    pub text_height: f64,
    /// Gap between text and dimension line (DIMGAP)
    pub text_gap: f64,
    /// Extension line offset from origin (DIMEXO)
    pub extension_line_offset: f64,
    /// Extension line extension beyond the dimension line (DIMEXE)
    pub extension_line_extension: f64,
    /// Linear measurement scale (DIMLFAC)
    pub linear_scale_factor: f64,
    /// Decimal places for linear dimensions (DIMDEC)
    pub decimal_places: i16,
    /// Vertical text placement (DIMTAD)
    pub text_alignment: DimensionTextAlignment,
    /// Dimension line color (DIMCLRD)
    pub dimension_line_color: Color,
    /// Extension line color (DIMCLRE)
    pub extension_line_color: Color,
    /// Text color (DIMCLRT)
    pub text_color: Color,
    /// Suffix appended to measurements (DIMPOST)
    pub post_fix: String,
}

impl DimStyle {
    /// Create a new dimension style
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            name: name.into(),
            text_style: "Standard".to_string(),
            scale_factor: 1.0,
            arrow_size: 0.18,
            text_height: 0.18,
            text_gap: 0.09,
            extension_line_offset: 0.0625,
            extension_line_extension: 0.18,
            linear_scale_factor: 1.0,
            decimal_places: 4,
            text_alignment: DimensionTextAlignment::Centered,
            dimension_line_color: Color::ByBlock,
            extension_line_color: Color::ByBlock,
            text_color: Color::ByBlock,
            post_fix: String::new(),
        }
    }

    /// Create the standard "Standard" dimension style
    pub fn standard() -> Self {
        Self::new("Standard")
    }
}

impl TableEntry for DimStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
