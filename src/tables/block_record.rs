//! Block record table entry

use super::TableEntry;
use crate::entities::EntityType;
use crate::types::Vector3;

/// Name of the model space block
pub const MODEL_SPACE: &str = "*Model_Space";
/// Name of the paper space block
pub const PAPER_SPACE: &str = "*Paper_Space";

/// A block definition together with the entities it owns
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Block name
    pub name: String,
    /// Base point for insertion
    pub base_point: Vector3,
    /// Block description
    pub description: String,
    /// Path of the external reference, empty for local blocks
    pub xref_path: String,
    /// Can instances be exploded?
    pub explodable: bool,
    /// Can instances be scaled non-uniformly?
    pub scalable: bool,
    /// Entities making up the block
    pub entities: Vec<EntityType>,
}

impl BlockRecord {
    /// Create a new empty block
    pub fn new(name: impl Into<String>) -> Self {
        BlockRecord {
            name: name.into(),
            base_point: Vector3::ZERO,
            description: String::new(),
            xref_path: String::new(),
            explodable: true,
            scalable: true,
            entities: Vec::new(),
        }
    }

    pub fn model_space() -> Self {
        Self::new(MODEL_SPACE)
    }

    pub fn paper_space() -> Self {
        Self::new(PAPER_SPACE)
    }

    /// Is this one of the layout blocks?
    pub fn is_layout_block(&self) -> bool {
        self.name.eq_ignore_ascii_case(MODEL_SPACE)
            || self.name.to_ascii_lowercase().starts_with("*paper_space")
    }

    /// Anonymous blocks start with '*'
    pub fn is_anonymous(&self) -> bool {
        self.name.starts_with('*')
    }
}

impl TableEntry for BlockRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
