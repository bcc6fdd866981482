//! Wipeout entity

use super::{EntityCommon, ImageDisplayFlags};
use crate::types::{Vector2, Vector3};

/// A polygonal area masking the entities behind it
#[derive(Debug, Clone, PartialEq)]
pub struct Wipeout {
    pub common: EntityCommon,
    pub insertion_point: Vector3,
    pub u_vector: Vector3,
    pub v_vector: Vector3,
    pub size: Vector2,
    pub flags: ImageDisplayFlags,
    pub clipping_enabled: bool,
    /// Mask outline in image coordinates
    pub clip_boundary: Vec<Vector2>,
}

impl Wipeout {
    pub fn new(insertion_point: Vector3) -> Self {
        Wipeout {
            common: EntityCommon::new(),
            insertion_point,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::UNIT_Y,
            size: Vector2::new(1.0, 1.0),
            flags: ImageDisplayFlags::SHOW_IMAGE | ImageDisplayFlags::USE_CLIPPING_BOUNDARY,
            clipping_enabled: true,
            clip_boundary: Vec::new(),
        }
    }
}

impl_entity!(Wipeout, "WIPEOUT");
