//! 2D solid (filled quadrilateral) entity

use super::EntityCommon;
use crate::types::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub common: EntityCommon,
    pub first_corner: Vector3,
    pub second_corner: Vector3,
    pub third_corner: Vector3,
    /// Equal to the third corner for triangles
    pub fourth_corner: Vector3,
    pub thickness: f64,
    pub normal: Vector3,
}

impl Solid {
    pub fn new(first: Vector3, second: Vector3, third: Vector3, fourth: Vector3) -> Self {
        Solid {
            common: EntityCommon::new(),
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::new(first, second, third, third)
    }
}

impl_entity!(Solid, "SOLID");
