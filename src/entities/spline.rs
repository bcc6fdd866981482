//! Spline entity

use super::EntityCommon;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Spline flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i16 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A NURBS curve
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub common: EntityCommon,
    pub degree: i32,
    pub flags: SplineFlags,
    pub control_points: Vec<Vector3>,
    pub fit_points: Vec<Vector3>,
    pub knots: Vec<f64>,
    /// Control point weights, empty for non-rational splines
    pub weights: Vec<f64>,
    pub start_tangent: Vector3,
    pub end_tangent: Vector3,
    pub normal: Vector3,
}

impl Spline {
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            degree: 3,
            flags: SplineFlags::empty(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
            knots: Vec::new(),
            weights: Vec::new(),
            start_tangent: Vector3::ZERO,
            end_tangent: Vector3::ZERO,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Spline, "SPLINE");
