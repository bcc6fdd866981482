//! Subdivision mesh entity

use super::EntityCommon;
use crate::types::Vector3;

/// A face listed as indices into the mesh vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshFace {
    pub vertices: Vec<usize>,
}

impl MeshFace {
    pub fn new(vertices: Vec<usize>) -> Self {
        MeshFace { vertices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub common: EntityCommon,
    pub version: i32,
    pub subdivision_level: i32,
    pub blend_crease: bool,
    pub vertices: Vec<Vector3>,
    pub faces: Vec<MeshFace>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh {
            common: EntityCommon::new(),
            version: 2,
            subdivision_level: 0,
            blend_crease: false,
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Mesh, "MESH");
