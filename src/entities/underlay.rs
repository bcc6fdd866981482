//! Underlay entity (PDF, DWF or DGN reference)

use super::EntityCommon;
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct UnderlayDisplayFlags: i16 {
        const CLIPPING = 1;
        const ON = 2;
        const MONOCHROME = 4;
        const ADJUST_FOR_BACKGROUND = 8;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Underlay {
    pub common: EntityCommon,
    /// Handle of the underlay definition object
    pub definition: Handle,
    pub insertion_point: Vector3,
    pub scale: Vector3,
    pub rotation: f64,
    pub normal: Vector3,
    pub flags: UnderlayDisplayFlags,
    /// 0 to 100
    pub contrast: u8,
    /// 0 to 80
    pub fade: u8,
    pub clip_boundary: Vec<Vector2>,
}

impl Underlay {
    pub fn new(insertion_point: Vector3) -> Self {
        Underlay {
            common: EntityCommon::new(),
            definition: Handle::NULL,
            insertion_point,
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
            normal: Vector3::UNIT_Z,
            flags: UnderlayDisplayFlags::ON,
            contrast: 100,
            fade: 0,
            clip_boundary: Vec::new(),
        }
    }
}

impl_entity!(Underlay, "UNDERLAY");
