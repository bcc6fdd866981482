//! Circle entity

use super::EntityCommon;
use crate::types::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub thickness: f64,
    pub normal: Vector3,
}

impl Circle {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

impl_entity!(Circle, "CIRCLE");
