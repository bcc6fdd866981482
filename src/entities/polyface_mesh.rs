//! Polyface mesh entity

use super::EntityCommon;
use crate::types::Vector3;

/// Face of a polyface mesh
///
/// Indices are 1-based; a negative index hides the edge starting at that
/// vertex and 0 marks an unused corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyfaceFace {
    pub indices: [i16; 4],
}

impl PolyfaceFace {
    pub fn new(a: i16, b: i16, c: i16, d: i16) -> Self {
        PolyfaceFace {
            indices: [a, b, c, d],
        }
    }

    pub fn triangle(a: i16, b: i16, c: i16) -> Self {
        Self::new(a, b, c, 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolyfaceMesh {
    pub common: EntityCommon,
    pub vertices: Vec<Vector3>,
    pub faces: Vec<PolyfaceFace>,
}

impl PolyfaceMesh {
    pub fn new() -> Self {
        PolyfaceMesh {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl Default for PolyfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(PolyfaceMesh, "POLYLINE");
