//! Multi-line text entity

use super::EntityCommon;
use crate::types::Vector3;

/// Corner or edge of the text box anchored at the insertion point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPoint {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingDirection {
    #[default]
    LeftToRight,
    TopToBottom,
    ByStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    pub common: EntityCommon,
    /// Raw text including inline formatting codes
    pub value: String,
    pub insertion_point: Vector3,
    pub height: f64,
    /// Reference rectangle width, 0 for no wrapping
    pub rectangle_width: f64,
    pub rotation: f64,
    pub style: String,
    pub attachment_point: AttachmentPoint,
    pub drawing_direction: DrawingDirection,
    pub line_spacing_factor: f64,
    pub normal: Vector3,
}

impl MText {
    pub fn new(value: impl Into<String>, insertion_point: Vector3, height: f64) -> Self {
        MText {
            common: EntityCommon::new(),
            value: value.into(),
            insertion_point,
            height,
            rectangle_width: 0.0,
            rotation: 0.0,
            style: "Standard".to_string(),
            attachment_point: AttachmentPoint::TopLeft,
            drawing_direction: DrawingDirection::LeftToRight,
            line_spacing_factor: 1.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl_entity!(MText, "MTEXT");
