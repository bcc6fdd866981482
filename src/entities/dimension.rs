//! Dimension entity

use super::EntityCommon;
use crate::types::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionType {
    /// Rotated, horizontal or vertical
    #[default]
    Linear,
    Aligned,
    /// Angle between two lines
    Angular,
    Diameter,
    Radius,
    /// Angle defined by three points
    Angular3Point,
    Ordinate,
}

/// A dimension of any type
///
/// The meaning of the point fields depends on [`DimensionType`]. For linear
/// dimensions `first_point` and `second_point` are the extension line
/// origins and `definition_point` lies on the dimension line.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub common: EntityCommon,
    pub dimension_type: DimensionType,
    /// Dimension style name
    pub style: String,
    /// Anonymous block holding the rendered geometry
    pub block_name: String,
    pub definition_point: Vector3,
    pub text_middle_point: Vector3,
    pub first_point: Vector3,
    pub second_point: Vector3,
    /// Vertex for angular dimensions
    pub angle_vertex: Vector3,
    pub rotation: f64,
    /// Replaces the measured text when not empty
    pub text_override: String,
    /// Measured value
    pub measurement: f64,
    pub normal: Vector3,
}

impl Dimension {
    pub fn new(dimension_type: DimensionType) -> Self {
        Dimension {
            common: EntityCommon::new(),
            dimension_type,
            style: "Standard".to_string(),
            block_name: String::new(),
            definition_point: Vector3::ZERO,
            text_middle_point: Vector3::ZERO,
            first_point: Vector3::ZERO,
            second_point: Vector3::ZERO,
            angle_vertex: Vector3::ZERO,
            rotation: 0.0,
            text_override: String::new(),
            measurement: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Linear dimension between two points
    pub fn linear(first_point: Vector3, second_point: Vector3, definition_point: Vector3) -> Self {
        Dimension {
            first_point,
            second_point,
            definition_point,
            measurement: first_point.distance(&second_point),
            ..Self::new(DimensionType::Linear)
        }
    }
}

impl_entity!(Dimension, "DIMENSION");
