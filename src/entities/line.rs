//! Line entity

use super::EntityCommon;
use crate::types::Vector3;

/// A line segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// End point
    pub end: Vector3,
    /// Thickness along the normal
    pub thickness: f64,
    /// Extrusion direction
    pub normal: Vector3,
}

impl Line {
    /// Create a new line from two points
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a line on a given layer
    pub fn on_layer(layer: impl Into<String>, start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::with_layer(layer),
            ..Self::new(start, end)
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl_entity!(Line, "LINE");
