//! Paper space viewport entity

use super::EntityCommon;
use crate::types::{Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Viewport status flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ViewportStatusFlags: i32 {
        const PERSPECTIVE = 0x1;
        const FRONT_CLIPPING = 0x2;
        const BACK_CLIPPING = 0x4;
        const UCS_FOLLOW = 0x8;
        const UCS_ICON_VISIBLE = 0x20;
        const SNAP_ON = 0x80;
        const GRID_ON = 0x100;
        const LOCKED = 0x4000;
    }
}

/// A window in paper space showing a view of model space
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub common: EntityCommon,
    /// Center in paper space
    pub center: Vector3,
    pub width: f64,
    pub height: f64,
    /// Viewport ID, 1 is the paper space viewport itself
    pub id: i16,
    /// View center in model space display coordinates
    pub view_center: Vector2,
    pub view_height: f64,
    pub view_target: Vector3,
    pub view_direction: Vector3,
    pub lens_length: f64,
    pub twist_angle: f64,
    pub status: ViewportStatusFlags,
    /// Layers frozen in this viewport only
    pub frozen_layers: Vec<String>,
}

impl Viewport {
    pub fn new(center: Vector3, width: f64, height: f64) -> Self {
        Viewport {
            common: EntityCommon::new(),
            center,
            width,
            height,
            id: 2,
            view_center: Vector2::ZERO,
            view_height: 1.0,
            view_target: Vector3::ZERO,
            view_direction: Vector3::UNIT_Z,
            lens_length: 50.0,
            twist_angle: 0.0,
            status: ViewportStatusFlags::UCS_ICON_VISIBLE,
            frozen_layers: Vec::new(),
        }
    }
}

impl_entity!(Viewport, "VIEWPORT");
