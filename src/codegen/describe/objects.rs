use super::{enum_value, Construct};
use crate::codegen::kind::ConstructKind;
use crate::codegen::value::{Constructor, Module, Property, TableRef, Value};
use crate::objects::*;

const M: Module = Module::Objects;

impl Construct for Group {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Group
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("Group", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("description", Value::text(&self.description)),
            Property::new(
                "entities",
                Value::list(&self.entities, |h| Value::handle_ref(*h)),
            ),
            Property::new("selectable", Value::Bool(self.selectable)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for Layout {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Layout
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("Layout", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new(
                "block_record",
                Value::name_ref(TableRef::Block, &self.block_record),
            ),
            Property::new("flags", Value::flags(M, "LayoutFlags", &self.flags)),
            Property::new("tab_order", Value::Int(self.tab_order.into())),
            Property::new("limits_min", Value::Vector2(self.limits_min)),
            Property::new("limits_max", Value::Vector2(self.limits_max)),
            Property::new("insertion_base", Value::Vector3(self.insertion_base)),
            Property::new("extents_min", Value::Vector3(self.extents_min)),
            Property::new("extents_max", Value::Vector3(self.extents_max)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for ImageDefinition {
    fn kind(&self) -> ConstructKind {
        ConstructKind::ImageDefinition
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("ImageDefinition", vec![Value::text(&self.file_name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("size_in_pixels", Value::Vector2(self.size_in_pixels)),
            Property::new("pixel_size", Value::Vector2(self.pixel_size)),
            Property::new("is_loaded", Value::Bool(self.is_loaded)),
            Property::new(
                "resolution_unit",
                enum_value(M, "ResolutionUnit", &self.resolution_unit),
            ),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(file_stem(&self.file_name))
    }
}

impl Construct for UnderlayDefinition {
    fn kind(&self) -> ConstructKind {
        ConstructKind::UnderlayDefinition
    }

    fn constructor(&self) -> Constructor {
        Constructor::new(
            "UnderlayDefinition",
            vec![
                enum_value(M, "UnderlayType", &self.underlay_type),
                Value::text(&self.file_name),
            ],
        )
    }

    fn properties(&self) -> Vec<Property> {
        vec![Property::new("sheet_name", Value::text(&self.sheet_name))]
    }

    fn name(&self) -> Option<&str> {
        Some(file_stem(&self.file_name))
    }
}

impl Construct for RasterVariables {
    fn kind(&self) -> ConstructKind {
        ConstructKind::RasterVariables
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("RasterVariables", Vec::new())
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("display_frame", Value::Bool(self.display_frame)),
            Property::new(
                "image_quality",
                enum_value(M, "ImageQuality", &self.image_quality),
            ),
            Property::new("units", enum_value(M, "ImageUnits", &self.units)),
        ]
    }
}

impl Construct for PlotSettings {
    fn kind(&self) -> ConstructKind {
        ConstructKind::PlotSettings
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("PlotSettings", vec![Value::text(&self.page_name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("printer_name", Value::text(&self.printer_name)),
            Property::new("paper_size", Value::text(&self.paper_size)),
            Property::new("style_sheet", Value::text(&self.style_sheet)),
            Property::new("left_margin", Value::Double(self.left_margin)),
            Property::new("bottom_margin", Value::Double(self.bottom_margin)),
            Property::new("right_margin", Value::Double(self.right_margin)),
            Property::new("top_margin", Value::Double(self.top_margin)),
            Property::new(
                "paper_units",
                enum_value(M, "PlotPaperUnits", &self.paper_units),
            ),
            Property::new("rotation", enum_value(M, "PlotRotation", &self.rotation)),
            Property::new("flags", Value::flags(M, "PlotFlags", &self.flags)),
            Property::new("origin", Value::Vector2(self.origin)),
            Property::new("scale_numerator", Value::Double(self.scale_numerator)),
            Property::new("scale_denominator", Value::Double(self.scale_denominator)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.page_name)
    }
}

impl Construct for MLineStyle {
    fn kind(&self) -> ConstructKind {
        ConstructKind::MLineStyle
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("MLineStyle", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("description", Value::text(&self.description)),
            Property::new("flags", Value::flags(M, "MLineStyleFlags", &self.flags)),
            Property::new("fill_color", Value::Color(self.fill_color)),
            Property::new("start_angle", Value::Double(self.start_angle)),
            Property::new("end_angle", Value::Double(self.end_angle)),
            Property::new(
                "elements",
                Value::list(&self.elements, |e| {
                    Value::call(
                        M,
                        "MLineStyleElement::new",
                        vec![
                            Value::Double(e.offset),
                            Value::Color(e.color),
                            Value::name_ref(TableRef::LineType, &e.line_type),
                        ],
                    )
                }),
            ),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

// Opaque objects only need enough description to be named and counted.

impl Construct for XRecord {
    fn kind(&self) -> ConstructKind {
        ConstructKind::XRecord
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("XRecord", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        Vec::new()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for Dictionary {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Dictionary
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("Dictionary", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        Vec::new()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for LayerState {
    fn kind(&self) -> ConstructKind {
        ConstructKind::LayerState
    }

    fn constructor(&self) -> Constructor {
        Constructor::new("LayerState", vec![Value::text(&self.name)])
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("description", Value::text(&self.description)),
            Property::new(
                "current_layer",
                Value::name_ref(TableRef::Layer, &self.current_layer),
            ),
            Property::new(
                "entries",
                Value::list(&self.entries, |e| {
                    Value::call(
                        M,
                        "LayerStateEntry::with_settings",
                        vec![
                            Value::name_ref(TableRef::Layer, &e.layer_name),
                            Value::flags(Module::Tables, "LayerFlags", &e.flags),
                            Value::Color(e.color),
                            Value::name_ref(TableRef::LineType, &e.line_type),
                            Value::LineWeight(e.line_weight),
                        ],
                    )
                }),
            ),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// File name without directories or extension, used for variable names
fn file_stem(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Handle;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("C:\\plans\\site.png"), "site");
        assert_eq!(file_stem("images/logo.v2.jpg"), "logo.v2");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_group_members_are_handle_references() {
        let mut group = Group::new("Doors");
        group.add_entity(Handle::new(0x20));
        let members = group
            .properties()
            .into_iter()
            .find(|p| p.name == "entities")
            .map(|p| p.value);
        assert_eq!(
            members,
            Some(Value::List(vec![Value::handle_ref(Handle::new(0x20))]))
        );
    }
}
