//! Plot settings object

use crate::types::{Handle, Vector2};
use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotPaperUnits {
    #[default]
    Inches,
    Millimeters,
    Pixels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotRotation {
    #[default]
    NoRotation,
    Degrees90,
    Degrees180,
    Degrees270,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PlotFlags: i16 {
        const PLOT_VIEWPORT_BORDERS = 1;
        const SHOW_PLOT_STYLES = 2;
        const PLOT_CENTERED = 4;
        const PLOT_HIDDEN = 8;
        const USE_STANDARD_SCALE = 16;
        const PLOT_PLOT_STYLES = 32;
        const SCALE_LINEWEIGHTS = 64;
        const PRINT_LINEWEIGHTS = 128;
    }
}

/// A named page setup
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Unique handle
    pub handle: Handle,
    pub page_name: String,
    /// Printer or plotter configuration name
    pub printer_name: String,
    pub paper_size: String,
    /// Plot style table file
    pub style_sheet: String,
    pub left_margin: f64,
    pub bottom_margin: f64,
    pub right_margin: f64,
    pub top_margin: f64,
    pub paper_units: PlotPaperUnits,
    pub rotation: PlotRotation,
    pub flags: PlotFlags,
    pub origin: Vector2,
    /// Paper units of the custom scale
    pub scale_numerator: f64,
    /// Drawing units of the custom scale
    pub scale_denominator: f64,
}

impl PlotSettings {
    pub fn new(page_name: impl Into<String>) -> Self {
        PlotSettings {
            handle: Handle::NULL,
            page_name: page_name.into(),
            printer_name: "none_device".to_string(),
            paper_size: String::new(),
            style_sheet: String::new(),
            left_margin: 0.0,
            bottom_margin: 0.0,
            right_margin: 0.0,
            top_margin: 0.0,
            paper_units: PlotPaperUnits::Inches,
            rotation: PlotRotation::NoRotation,
            flags: PlotFlags::USE_STANDARD_SCALE | PlotFlags::PLOT_PLOT_STYLES,
            origin: Vector2::ZERO,
            scale_numerator: 1.0,
            scale_denominator: 1.0,
        }
    }

    pub fn scale(&self) -> f64 {
        if self.scale_denominator == 0.0 {
            0.0
        } else {
            self.scale_numerator / self.scale_denominator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_ratio() {
        let mut settings = PlotSettings::new("Sheet");
        settings.scale_numerator = 1.0;
        settings.scale_denominator = 50.0;
        assert_eq!(settings.scale(), 0.02);
        settings.scale_denominator = 0.0;
        assert_eq!(settings.scale(), 0.0);
    }
}
