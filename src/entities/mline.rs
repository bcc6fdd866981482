//! MLine (multiline) entity
//!
//! A set of parallel lines whose offsets, colors and caps come from a
//! multiline style object.

use super::EntityCommon;
use crate::types::Vector3;
use bitflags::bitflags;

/// Justification for MLine entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MLineJustification {
    /// Justify to top line.
    Top,
    /// Justify to zero offset (center).
    #[default]
    Zero,
    /// Justify to bottom line.
    Bottom,
}

bitflags! {
    /// Flags for MLine entity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MLineFlags: i16 {
        /// MLine is closed.
        const CLOSED = 2;
        /// Suppress start caps.
        const NO_START_CAPS = 4;
        /// Suppress end caps.
        const NO_END_CAPS = 8;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MLine {
    pub common: EntityCommon,
    /// Multiline style name
    pub style_name: String,
    pub scale_factor: f64,
    pub justification: MLineJustification,
    pub flags: MLineFlags,
    pub vertices: Vec<Vector3>,
    pub normal: Vector3,
}

impl MLine {
    pub fn new() -> Self {
        MLine {
            common: EntityCommon::new(),
            style_name: "Standard".to_string(),
            scale_factor: 1.0,
            justification: MLineJustification::Zero,
            flags: MLineFlags::empty(),
            vertices: Vec::new(),
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(MLineFlags::CLOSED)
    }
}

impl Default for MLine {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(MLine, "MLINE");
