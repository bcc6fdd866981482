//! Leader entity

use super::EntityCommon;
use crate::types::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderPathType {
    #[default]
    StraightLine,
    Spline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub common: EntityCommon,
    /// Dimension style name
    pub dim_style: String,
    pub vertices: Vec<Vector3>,
    pub arrow_enabled: bool,
    pub hookline_enabled: bool,
    pub path_type: LeaderPathType,
    pub text_height: f64,
    pub text_width: f64,
    pub normal: Vector3,
}

impl Leader {
    pub fn new() -> Self {
        Leader {
            common: EntityCommon::new(),
            dim_style: "Standard".to_string(),
            vertices: Vec::new(),
            arrow_enabled: true,
            hookline_enabled: false,
            path_type: LeaderPathType::StraightLine,
            text_height: 0.0,
            text_width: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl Default for Leader {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Leader, "LEADER");
