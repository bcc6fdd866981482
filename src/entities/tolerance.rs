//! Geometric tolerance entity

use super::EntityCommon;
use crate::types::Vector3;

/// A feature control frame
#[derive(Debug, Clone, PartialEq)]
pub struct Tolerance {
    pub common: EntityCommon,
    /// Frame contents with embedded control codes
    pub text: String,
    pub insertion_point: Vector3,
    pub direction: Vector3,
    /// Dimension style name
    pub dim_style: String,
    pub normal: Vector3,
}

impl Tolerance {
    pub fn new(text: impl Into<String>, insertion_point: Vector3) -> Self {
        Tolerance {
            common: EntityCommon::new(),
            text: text.into(),
            insertion_point,
            direction: Vector3::UNIT_X,
            dim_style: "Standard".to_string(),
            normal: Vector3::UNIT_Z,
        }
    }
}

impl_entity!(Tolerance, "TOLERANCE");
