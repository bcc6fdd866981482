//! Attribute definition entity

use super::EntityCommon;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Attribute behavior flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: i16 {
        /// Not displayed
        const INVISIBLE = 1;
        /// Value is fixed for every insert
        const CONSTANT = 2;
        /// Prompt for verification on insertion
        const VERIFY = 4;
        /// Inserted with its default value, no prompt
        const PRESET = 8;
    }
}

/// Template for a per-insert text value inside a block
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    pub common: EntityCommon,
    /// Attribute tag, unique within the block
    pub tag: String,
    pub prompt: String,
    pub default_value: String,
    pub insertion_point: Vector3,
    pub height: f64,
    pub rotation: f64,
    pub style: String,
    pub flags: AttributeFlags,
    pub field_length: i16,
}

impl AttributeDefinition {
    pub fn new(tag: impl Into<String>, insertion_point: Vector3, height: f64) -> Self {
        AttributeDefinition {
            common: EntityCommon::new(),
            tag: tag.into(),
            prompt: String::new(),
            default_value: String::new(),
            insertion_point,
            height,
            rotation: 0.0,
            style: "Standard".to_string(),
            flags: AttributeFlags::empty(),
            field_length: 0,
        }
    }
}

impl_entity!(AttributeDefinition, "ATTDEF");
