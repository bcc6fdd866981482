//! Heavy 2D polyline entity

use super::EntityCommon;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags, shared by 2D and 3D polylines
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i16 {
        /// Polyline is closed
        const CLOSED = 1;
        /// Curve-fit vertices have been added
        const CURVE_FIT = 2;
        /// Spline-fit vertices have been added
        const SPLINE_FIT = 4;
        /// Line type pattern is continuous around vertices
        const CONTINUOUS_LINETYPE = 128;
    }
}

/// A vertex of a 2D polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex2D {
    pub location: Vector3,
    pub bulge: f64,
}

impl Vertex2D {
    pub fn new(location: Vector3) -> Self {
        Vertex2D {
            location,
            bulge: 0.0,
        }
    }

    pub fn with_bulge(location: Vector3, bulge: f64) -> Self {
        Vertex2D { location, bulge }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline2D {
    pub common: EntityCommon,
    pub vertices: Vec<Vertex2D>,
    pub flags: PolylineFlags,
    pub elevation: f64,
    pub default_start_width: f64,
    pub default_end_width: f64,
    pub thickness: f64,
    pub normal: Vector3,
}

impl Polyline2D {
    pub fn new() -> Self {
        Polyline2D {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            flags: PolylineFlags::empty(),
            elevation: 0.0,
            default_start_width: 0.0,
            default_end_width: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}

impl Default for Polyline2D {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Polyline2D, "POLYLINE");
