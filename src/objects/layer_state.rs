//! Layer state object
//!
//! A saved snapshot of layer properties, restored as a whole by the editor.

use crate::tables::LayerFlags;
use crate::types::{Color, Handle, LineWeight};

/// Saved properties of one layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStateEntry {
    pub layer_name: String,
    pub flags: LayerFlags,
    pub color: Color,
    pub line_type: String,
    pub line_weight: LineWeight,
}

impl LayerStateEntry {
    pub fn new(layer_name: impl Into<String>) -> Self {
        LayerStateEntry {
            layer_name: layer_name.into(),
            flags: LayerFlags::empty(),
            color: Color::WHITE,
            line_type: "Continuous".to_string(),
            line_weight: LineWeight::Default,
        }
    }

    /// Entry with every saved setting given up front
    pub fn with_settings(
        layer_name: impl Into<String>,
        flags: LayerFlags,
        color: Color,
        line_type: impl Into<String>,
        line_weight: LineWeight,
    ) -> Self {
        LayerStateEntry {
            layer_name: layer_name.into(),
            flags,
            color,
            line_type: line_type.into(),
            line_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    /// Unique handle
    pub handle: Handle,
    pub name: String,
    pub description: String,
    /// Layer that was current when the state was saved
    pub current_layer: String,
    pub entries: Vec<LayerStateEntry>,
}

impl LayerState {
    pub fn new(name: impl Into<String>) -> Self {
        LayerState {
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            current_layer: "0".to_string(),
            entries: Vec::new(),
        }
    }
}
