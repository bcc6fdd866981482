//! Lightweight polyline entity

use super::EntityCommon;
use crate::types::{Vector2, Vector3};

/// A vertex of a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    pub location: Vector2,
    /// Tangent of a quarter of the included arc angle, 0 for straight segments
    pub bulge: f64,
}

impl LwVertex {
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
        }
    }

    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex { location, bulge }
    }
}

/// A planar polyline with 2D vertices
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    pub common: EntityCommon,
    pub vertices: Vec<LwVertex>,
    pub is_closed: bool,
    /// Width applied to every segment
    pub constant_width: f64,
    pub elevation: f64,
    pub thickness: f64,
    pub normal: Vector3,
}

impl LwPolyline {
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            is_closed: false,
            constant_width: 0.0,
            elevation: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn add_point(&mut self, location: Vector2) {
        self.vertices.push(LwVertex::new(location));
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(LwPolyline, "LWPOLYLINE");
