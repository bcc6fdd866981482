//! User coordinate system table entry

use super::TableEntry;
use crate::types::Vector3;

/// A named user coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct Ucs {
    pub name: String,
    /// Origin in world coordinates
    pub origin: Vector3,
    /// Direction of the X axis
    pub x_axis: Vector3,
    /// Direction of the Y axis
    pub y_axis: Vector3,
    /// Elevation along the Z axis
    pub elevation: f64,
}

impl Ucs {
    pub fn new(name: impl Into<String>) -> Self {
        Ucs {
            name: name.into(),
            origin: Vector3::ZERO,
            x_axis: Vector3::UNIT_X,
            y_axis: Vector3::UNIT_Y,
            elevation: 0.0,
        }
    }

    /// Create a UCS from an origin and axes
    pub fn from_axes(name: impl Into<String>, origin: Vector3, x_axis: Vector3, y_axis: Vector3) -> Self {
        Ucs {
            origin,
            x_axis,
            y_axis,
            ..Self::new(name)
        }
    }
}

impl TableEntry for Ucs {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
