//! Underlay definition object

use crate::types::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlayType {
    #[default]
    Pdf,
    Dwf,
    Dgn,
}

/// External document referenced by underlay entities
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlayDefinition {
    /// Unique handle
    pub handle: Handle,
    pub underlay_type: UnderlayType,
    /// Path of the referenced file
    pub file_name: String,
    /// Page, sheet or model name inside the file
    pub sheet_name: String,
}

impl UnderlayDefinition {
    pub fn new(underlay_type: UnderlayType, file_name: impl Into<String>) -> Self {
        UnderlayDefinition {
            handle: Handle::NULL,
            underlay_type,
            file_name: file_name.into(),
            sheet_name: String::new(),
        }
    }
}
