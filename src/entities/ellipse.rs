//! Ellipse entity

use super::EntityCommon;
use crate::types::Vector3;
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub common: EntityCommon,
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center
    pub major_axis: Vector3,
    /// Minor axis length over major axis length
    pub minor_axis_ratio: f64,
    /// Start parameter (0 for a full ellipse)
    pub start_parameter: f64,
    /// End parameter (2π for a full ellipse)
    pub end_parameter: f64,
    pub normal: Vector3,
}

impl Ellipse {
    pub fn new(center: Vector3, major_axis: Vector3, minor_axis_ratio: f64) -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center,
            major_axis,
            minor_axis_ratio,
            start_parameter: 0.0,
            end_parameter: 2.0 * PI,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn is_full(&self) -> bool {
        self.start_parameter.abs() < 1e-10 && (self.end_parameter - 2.0 * PI).abs() < 1e-10
    }
}

impl_entity!(Ellipse, "ELLIPSE");
