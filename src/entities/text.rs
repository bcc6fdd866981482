//! Single-line text entity

use super::EntityCommon;
use crate::types::Vector3;

/// Horizontal text justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    /// Fit between two points, scaling height
    Aligned,
    Middle,
    /// Fit between two points, keeping height
    Fit,
}

/// Vertical text justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    #[default]
    Baseline,
    Bottom,
    Middle,
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub common: EntityCommon,
    pub value: String,
    pub insertion_point: Vector3,
    /// Second alignment point, used for non-default justification
    pub alignment_point: Vector3,
    pub height: f64,
    /// Rotation in radians
    pub rotation: f64,
    pub width_factor: f64,
    pub oblique_angle: f64,
    /// Text style name
    pub style: String,
    pub horizontal_alignment: TextHorizontalAlignment,
    pub vertical_alignment: TextVerticalAlignment,
    pub normal: Vector3,
}

impl Text {
    pub fn new(value: impl Into<String>, insertion_point: Vector3, height: f64) -> Self {
        Text {
            common: EntityCommon::new(),
            value: value.into(),
            insertion_point,
            alignment_point: Vector3::ZERO,
            height,
            rotation: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            style: "Standard".to_string(),
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl_entity!(Text, "TEXT");
