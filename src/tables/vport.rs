//! Viewport table entry

use super::TableEntry;
use crate::types::{Vector2, Vector3};

/// Name of the viewport configuration the editor starts with
pub const ACTIVE_VPORT: &str = "*Active";

/// A model space viewport configuration
#[derive(Debug, Clone, PartialEq)]
pub struct VPort {
    pub name: String,
    /// Lower-left corner in normalized screen coordinates
    pub lower_left: Vector2,
    /// Upper-right corner in normalized screen coordinates
    pub upper_right: Vector2,
    /// View center in display coordinates
    pub view_center: Vector2,
    /// View height
    pub view_height: f64,
    /// Width over height
    pub aspect_ratio: f64,
    /// Viewing direction from target
    pub view_direction: Vector3,
    /// View target point
    pub view_target: Vector3,
    /// Lens focal length in millimeters
    pub lens_length: f64,
    pub snap_spacing: Vector2,
    pub grid_spacing: Vector2,
    pub snap_on: bool,
    pub grid_on: bool,
}

impl VPort {
    pub fn new(name: impl Into<String>) -> Self {
        VPort {
            name: name.into(),
            lower_left: Vector2::ZERO,
            upper_right: Vector2::new(1.0, 1.0),
            view_center: Vector2::ZERO,
            view_height: 10.0,
            aspect_ratio: 1.0,
            view_direction: Vector3::UNIT_Z,
            view_target: Vector3::ZERO,
            lens_length: 50.0,
            snap_spacing: Vector2::new(0.5, 0.5),
            grid_spacing: Vector2::new(0.5, 0.5),
            snap_on: false,
            grid_on: false,
        }
    }

    /// Create the standard "*Active" viewport
    pub fn active() -> Self {
        Self::new(ACTIVE_VPORT)
    }
}

impl TableEntry for VPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
