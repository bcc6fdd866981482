//! Ray entity

use super::EntityCommon;
use crate::types::Vector3;

/// A line starting at a point and extending infinitely in one direction
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    pub common: EntityCommon,
    pub base_point: Vector3,
    /// Unit direction vector
    pub direction: Vector3,
}

impl Ray {
    pub fn new(base_point: Vector3, direction: Vector3) -> Self {
        Ray {
            common: EntityCommon::new(),
            base_point,
            direction,
        }
    }
}

impl_entity!(Ray, "RAY");
