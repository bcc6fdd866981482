//! Construction line entity

use super::EntityCommon;
use crate::types::Vector3;

/// A line extending infinitely in both directions
#[derive(Debug, Clone, PartialEq)]
pub struct XLine {
    pub common: EntityCommon,
    pub base_point: Vector3,
    pub direction: Vector3,
}

impl XLine {
    pub fn new(base_point: Vector3, direction: Vector3) -> Self {
        XLine {
            common: EntityCommon::new(),
            base_point,
            direction,
        }
    }
}

impl_entity!(XLine, "XLINE");
