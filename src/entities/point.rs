//! Point entity

use super::EntityCommon;
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub common: EntityCommon,
    /// Point location
    pub location: Vector3,
    /// Thickness along the normal
    pub thickness: f64,
    /// Extrusion direction
    pub normal: Vector3,
}

impl Point {
    pub fn new(location: Vector3) -> Self {
        Point {
            common: EntityCommon::new(),
            location,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl_entity!(Point, "POINT");
