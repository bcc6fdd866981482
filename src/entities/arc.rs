//! Arc entity

use super::EntityCommon;
use crate::types::Vector3;

/// A circular arc; angles are in radians, counter-clockwise from the X axis
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub thickness: f64,
    pub normal: Vector3,
}

impl Arc {
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            common: EntityCommon::new(),
            center,
            radius,
            start_angle,
            end_angle,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Sweep angle, always positive
    pub fn sweep(&self) -> f64 {
        let sweep = self.end_angle - self.start_angle;
        if sweep < 0.0 {
            sweep + 2.0 * std::f64::consts::PI
        } else {
            sweep
        }
    }
}

impl_entity!(Arc, "ARC");

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sweep_wraps() {
        let arc = Arc::new(Vector3::ZERO, 1.0, 1.5 * PI, 0.5 * PI);
        assert!((arc.sweep() - PI).abs() < 1e-12);
    }
}
