//! Raster image entity
//!
//! The pixels live in an image definition object; the entity places it.

use super::EntityCommon;
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Display options for images and wipeouts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ImageDisplayFlags: i16 {
        const SHOW_IMAGE = 1;
        /// Show when not aligned with the screen
        const SHOW_NOT_ALIGNED = 2;
        const USE_CLIPPING_BOUNDARY = 4;
        const TRANSPARENCY_ON = 8;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub common: EntityCommon,
    /// Handle of the image definition object
    pub definition: Handle,
    pub insertion_point: Vector3,
    /// One pixel along the image X axis
    pub u_vector: Vector3,
    /// One pixel along the image Y axis
    pub v_vector: Vector3,
    /// Image size in pixels
    pub size: Vector2,
    pub flags: ImageDisplayFlags,
    pub clipping_enabled: bool,
    pub brightness: u8,
    pub contrast: u8,
    pub fade: u8,
    pub clip_boundary: Vec<Vector2>,
}

impl RasterImage {
    pub fn new(insertion_point: Vector3) -> Self {
        RasterImage {
            common: EntityCommon::new(),
            definition: Handle::NULL,
            insertion_point,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::UNIT_Y,
            size: Vector2::new(1.0, 1.0),
            flags: ImageDisplayFlags::SHOW_IMAGE | ImageDisplayFlags::SHOW_NOT_ALIGNED,
            clipping_enabled: false,
            brightness: 50,
            contrast: 50,
            fade: 0,
            clip_boundary: Vec::new(),
        }
    }
}

impl_entity!(RasterImage, "IMAGE");
