//! 3D polyline entity

use super::{EntityCommon, PolylineFlags};
use crate::types::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3D {
    pub common: EntityCommon,
    pub vertices: Vec<Vector3>,
    pub flags: PolylineFlags,
}

impl Polyline3D {
    pub fn new() -> Self {
        Polyline3D {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            flags: PolylineFlags::empty(),
        }
    }

    /// Build an open polyline through the given points
    pub fn from_points(points: impl IntoIterator<Item = Vector3>) -> Self {
        Polyline3D {
            vertices: points.into_iter().collect(),
            ..Self::new()
        }
    }

    pub fn length(&self) -> f64 {
        self.vertices.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

impl Default for Polyline3D {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Polyline3D, "POLYLINE");
