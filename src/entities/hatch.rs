//! Hatch entity

use super::EntityCommon;
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchPatternType {
    UserDefined,
    #[default]
    Predefined,
    Custom,
}

/// Island detection style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchStyle {
    #[default]
    Normal,
    Outer,
    Ignore,
}

/// A closed polygonal boundary loop in hatch coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct HatchBoundary {
    pub vertices: Vec<Vector2>,
}

impl HatchBoundary {
    pub fn new(vertices: Vec<Vector2>) -> Self {
        HatchBoundary { vertices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    pub common: EntityCommon,
    pub pattern_name: String,
    pub pattern_type: HatchPatternType,
    pub style: HatchStyle,
    pub solid_fill: bool,
    pub associative: bool,
    pub pattern_angle: f64,
    pub pattern_scale: f64,
    pub elevation: f64,
    pub normal: Vector3,
    pub boundaries: Vec<HatchBoundary>,
}

impl Hatch {
    pub fn new(pattern_name: impl Into<String>) -> Self {
        Hatch {
            common: EntityCommon::new(),
            pattern_name: pattern_name.into(),
            pattern_type: HatchPatternType::Predefined,
            style: HatchStyle::Normal,
            solid_fill: false,
            associative: false,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            elevation: 0.0,
            normal: Vector3::UNIT_Z,
            boundaries: Vec::new(),
        }
    }

    /// Solid fill hatch
    pub fn solid() -> Self {
        Hatch {
            solid_fill: true,
            ..Self::new("SOLID")
        }
    }
}

impl_entity!(Hatch, "HATCH");
