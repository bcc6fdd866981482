//! Multileader entity

use super::EntityCommon;
use crate::types::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiLeaderContentType {
    None,
    Block,
    #[default]
    MText,
}

/// A leader with text content and one leader line
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLeader {
    pub common: EntityCommon,
    pub content_type: MultiLeaderContentType,
    pub text: String,
    pub text_location: Vector3,
    pub text_style: String,
    pub text_height: f64,
    /// Leader line points, from arrow head to landing
    pub leader_points: Vec<Vector3>,
    pub arrow_size: f64,
    pub enable_landing: bool,
    pub dogleg_length: f64,
    pub landing_gap: f64,
    pub scale: f64,
}

impl MultiLeader {
    pub fn new() -> Self {
        MultiLeader {
            common: EntityCommon::new(),
            content_type: MultiLeaderContentType::MText,
            text: String::new(),
            text_location: Vector3::ZERO,
            text_style: "Standard".to_string(),
            text_height: 0.18,
            leader_points: Vec::new(),
            arrow_size: 0.18,
            enable_landing: true,
            dogleg_length: 0.36,
            landing_gap: 0.09,
            scale: 1.0,
        }
    }
}

impl Default for MultiLeader {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(MultiLeader, "MULTILEADER");
