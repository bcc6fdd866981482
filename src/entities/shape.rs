//! Shape entity

use super::EntityCommon;
use crate::types::Vector3;

/// A symbol from a compiled shape file
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub common: EntityCommon,
    pub shape_name: String,
    /// Name of the shape file entry in the text style table
    pub style: String,
    pub insertion_point: Vector3,
    pub size: f64,
    pub rotation: f64,
    pub relative_x_scale: f64,
    pub oblique_angle: f64,
    pub thickness: f64,
    pub normal: Vector3,
}

impl Shape {
    pub fn new(shape_name: impl Into<String>, insertion_point: Vector3, size: f64) -> Self {
        Shape {
            common: EntityCommon::new(),
            shape_name: shape_name.into(),
            style: String::new(),
            insertion_point,
            size,
            rotation: 0.0,
            relative_x_scale: 1.0,
            oblique_angle: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl_entity!(Shape, "SHAPE");
