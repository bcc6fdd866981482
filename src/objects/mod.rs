//! Non-graphical objects
//!
//! Objects are non-graphical elements of a drawing, such as dictionaries,
//! layouts, groups, and other organizational structures.

mod group;
mod image_definition;
mod layer_state;
mod mlinestyle;
mod plot_settings;
mod raster_variables;
mod underlay_definition;
mod xrecord;

pub use group::Group;
pub use image_definition::{ImageDefinition, ResolutionUnit};
pub use layer_state::{LayerState, LayerStateEntry};
pub use mlinestyle::{MLineStyle, MLineStyleElement, MLineStyleFlags};
pub use plot_settings::{PlotFlags, PlotPaperUnits, PlotRotation, PlotSettings};
pub use raster_variables::{ImageQuality, ImageUnits, RasterVariables};
pub use underlay_definition::{UnderlayDefinition, UnderlayType};
pub use xrecord::{XRecord, XRecordEntry, XRecordValue};

use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;
use indexmap::IndexMap;

/// Dictionary object - stores key-value pairs of object handles
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    /// Unique handle
    pub handle: Handle,
    /// Dictionary name within its owner
    pub name: String,
    /// Dictionary entries (key -> handle)
    pub entries: IndexMap<String, Handle>,
    /// Hard owner flag
    pub hard_owner: bool,
}

impl Dictionary {
    /// Create a new dictionary
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            handle: Handle::NULL,
            name: name.into(),
            entries: IndexMap::new(),
            hard_owner: false,
        }
    }

    /// Add an entry to the dictionary, replacing any previous value
    pub fn add_entry(&mut self, key: impl Into<String>, handle: Handle) {
        self.entries.insert(key.into(), handle);
    }

    pub fn get(&self, key: &str) -> Option<Handle> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

bitflags! {
    /// Layout flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayoutFlags: i16 {
        /// Scale line types by the paper space scale
        const PS_LTSCALE = 1;
        /// Check limits when drawing
        const LIMITS_CHECK = 2;
    }
}

/// Layout object - a model or paper space tab
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Unique handle
    pub handle: Handle,
    /// Layout name
    pub name: String,
    /// Block record holding the layout's entities
    pub block_record: String,
    pub flags: LayoutFlags,
    /// Tab order
    pub tab_order: i32,
    pub limits_min: Vector2,
    pub limits_max: Vector2,
    pub insertion_base: Vector3,
    pub extents_min: Vector3,
    pub extents_max: Vector3,
}

impl Layout {
    /// Create a new paper space layout
    pub fn new(name: impl Into<String>) -> Self {
        Layout {
            handle: Handle::NULL,
            name: name.into(),
            block_record: crate::tables::PAPER_SPACE.to_string(),
            flags: LayoutFlags::empty(),
            tab_order: 1,
            limits_min: Vector2::ZERO,
            limits_max: Vector2::new(12.0, 9.0),
            insertion_base: Vector3::ZERO,
            extents_min: Vector3::ZERO,
            extents_max: Vector3::ZERO,
        }
    }

    /// Create the model space layout
    pub fn model() -> Self {
        Layout {
            block_record: crate::tables::MODEL_SPACE.to_string(),
            tab_order: 0,
            ..Self::new("Model")
        }
    }
}

/// Object type enumeration for all supported objects
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectType {
    /// Named collection of entities
    Group(Group),
    /// Model or paper space tab
    Layout(Layout),
    /// Raster image file reference
    ImageDefinition(ImageDefinition),
    /// PDF, DWF or DGN file reference
    UnderlayDefinition(UnderlayDefinition),
    /// Extended data storage
    XRecord(XRecord),
    Dictionary(Dictionary),
    /// Drawing-wide raster image settings
    RasterVariables(RasterVariables),
    /// Saved layer configuration
    LayerState(LayerState),
    PlotSettings(PlotSettings),
    /// Multiline style definition
    MLineStyle(MLineStyle),
}

impl ObjectType {
    /// Get the object's handle
    pub fn handle(&self) -> Handle {
        match self {
            ObjectType::Group(o) => o.handle,
            ObjectType::Layout(o) => o.handle,
            ObjectType::ImageDefinition(o) => o.handle,
            ObjectType::UnderlayDefinition(o) => o.handle,
            ObjectType::XRecord(o) => o.handle,
            ObjectType::Dictionary(o) => o.handle,
            ObjectType::RasterVariables(o) => o.handle,
            ObjectType::LayerState(o) => o.handle,
            ObjectType::PlotSettings(o) => o.handle,
            ObjectType::MLineStyle(o) => o.handle,
        }
    }

    /// Set the object's handle
    pub fn set_handle(&mut self, handle: Handle) {
        match self {
            ObjectType::Group(o) => o.handle = handle,
            ObjectType::Layout(o) => o.handle = handle,
            ObjectType::ImageDefinition(o) => o.handle = handle,
            ObjectType::UnderlayDefinition(o) => o.handle = handle,
            ObjectType::XRecord(o) => o.handle = handle,
            ObjectType::Dictionary(o) => o.handle = handle,
            ObjectType::RasterVariables(o) => o.handle = handle,
            ObjectType::LayerState(o) => o.handle = handle,
            ObjectType::PlotSettings(o) => o.handle = handle,
            ObjectType::MLineStyle(o) => o.handle = handle,
        }
    }

    /// Object type name
    pub fn object_type(&self) -> &'static str {
        match self {
            ObjectType::Group(_) => "GROUP",
            ObjectType::Layout(_) => "LAYOUT",
            ObjectType::ImageDefinition(_) => "IMAGEDEF",
            ObjectType::UnderlayDefinition(_) => "UNDERLAYDEFINITION",
            ObjectType::XRecord(_) => "XRECORD",
            ObjectType::Dictionary(_) => "DICTIONARY",
            ObjectType::RasterVariables(_) => "RASTERVARIABLES",
            ObjectType::LayerState(_) => "LAYER_STATE",
            ObjectType::PlotSettings(_) => "PLOTSETTINGS",
            ObjectType::MLineStyle(_) => "MLINESTYLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_creation() {
        let mut dict = Dictionary::new("ACAD_GROUP");
        assert!(dict.is_empty());

        dict.add_entry("G1", Handle::new(0x40));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("G1"), Some(Handle::new(0x40)));
        assert_eq!(dict.get("G2"), None);
    }

    #[test]
    fn test_object_handle_dispatch() {
        let mut object = ObjectType::Layout(Layout::model());
        assert!(object.handle().is_null());
        object.set_handle(Handle::new(7));
        assert_eq!(object.handle(), Handle::new(7));
        assert_eq!(object.object_type(), "LAYOUT");
    }
}
