//! Insert entity (block reference)

use super::EntityCommon;
use crate::types::Vector3;

/// A placed instance of a block definition
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    pub insert_point: Vector3,
    pub x_scale: f64,
    pub y_scale: f64,
    pub z_scale: f64,
    /// Rotation in radians
    pub rotation: f64,
    pub normal: Vector3,
    /// Columns of a rectangular array insert
    pub column_count: u16,
    /// Rows of a rectangular array insert
    pub row_count: u16,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Insert {
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: block_name.into(),
            insert_point,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            normal: Vector3::UNIT_Z,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }

    /// Set a uniform scale on all three axes
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.x_scale = scale;
        self.y_scale = scale;
        self.z_scale = scale;
        self
    }

    pub fn is_array(&self) -> bool {
        self.column_count > 1 || self.row_count > 1
    }
}

impl_entity!(Insert, "INSERT");
