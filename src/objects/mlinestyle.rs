//! Multiline style object

use crate::types::{Color, Handle};
use bitflags::bitflags;

bitflags! {
    /// Flags for MLineStyle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MLineStyleFlags: i16 {
        /// Fill between lines is on.
        const FILL_ON = 1;
        /// Display miters at joints (inner vertices).
        const DISPLAY_JOINTS = 2;
        /// Start square (line) cap.
        const START_SQUARE_CAP = 16;
        /// Start inner arcs cap.
        const START_INNER_ARCS_CAP = 32;
        /// Start round (outer arcs) cap.
        const START_ROUND_CAP = 64;
        /// End square (line) cap.
        const END_SQUARE_CAP = 256;
        /// End inner arcs cap.
        const END_INNER_ARCS_CAP = 512;
        /// End round (outer arcs) cap.
        const END_ROUND_CAP = 1024;
    }
}

/// One line of a multiline style
#[derive(Debug, Clone, PartialEq)]
pub struct MLineStyleElement {
    /// Offset from the multiline center
    pub offset: f64,
    pub color: Color,
    /// Line type name
    pub line_type: String,
}

impl MLineStyleElement {
    pub fn new(offset: f64, color: Color, line_type: impl Into<String>) -> Self {
        MLineStyleElement {
            offset,
            color,
            line_type: line_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MLineStyle {
    /// Unique handle
    pub handle: Handle,
    pub name: String,
    pub description: String,
    pub flags: MLineStyleFlags,
    pub fill_color: Color,
    /// Start cap angle in radians
    pub start_angle: f64,
    /// End cap angle in radians
    pub end_angle: f64,
    pub elements: Vec<MLineStyleElement>,
}

impl MLineStyle {
    pub fn new(name: impl Into<String>) -> Self {
        MLineStyle {
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            flags: MLineStyleFlags::empty(),
            fill_color: Color::ByLayer,
            start_angle: std::f64::consts::FRAC_PI_2,
            end_angle: std::f64::consts::FRAC_PI_2,
            elements: Vec::new(),
        }
    }

    /// The two-line "Standard" style
    pub fn standard() -> Self {
        MLineStyle {
            elements: vec![
                MLineStyleElement::new(0.5, Color::ByLayer, "ByLayer"),
                MLineStyleElement::new(-0.5, Color::ByLayer, "ByLayer"),
            ],
            ..Self::new("Standard")
        }
    }
}
