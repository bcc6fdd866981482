use super::{enum_value, Construct};
use crate::codegen::kind::ConstructKind;
use crate::codegen::value::{Constructor, Module, Property, TableRef, Value};
use crate::entities::EntityType;
use crate::tables::*;

const M: Module = Module::Tables;

fn named(type_name: &'static str, name: &str) -> Constructor {
    Constructor::new(type_name, vec![Value::text(name)])
}

impl Construct for AppId {
    fn kind(&self) -> ConstructKind {
        ConstructKind::AppId
    }

    fn constructor(&self) -> Constructor {
        named("AppId", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![Property::new("description", Value::text(&self.description))]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for LineType {
    fn kind(&self) -> ConstructKind {
        ConstructKind::LineType
    }

    fn constructor(&self) -> Constructor {
        named("LineType", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("description", Value::text(&self.description)),
            Property::new(
                "elements",
                Value::list(&self.elements, |e| {
                    Value::call(M, "LineTypeElement::new", vec![Value::Double(e.length)])
                }),
            ),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for TextStyle {
    fn kind(&self) -> ConstructKind {
        if self.is_shape_file() {
            ConstructKind::ShapeStyle
        } else {
            ConstructKind::TextStyle
        }
    }

    fn constructor(&self) -> Constructor {
        if self.is_shape_file() {
            Constructor::with_method("TextStyle", "shape", vec![Value::text(&self.name)])
        } else {
            named("TextStyle", &self.name)
        }
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("flags", Value::flags(M, "TextStyleFlags", &self.flags)),
            Property::new("height", Value::Double(self.height)),
            Property::new("width_factor", Value::Double(self.width_factor)),
            Property::new("oblique_angle", Value::Double(self.oblique_angle)),
            Property::new("font_file", Value::text(&self.font_file)),
            Property::new("big_font_file", Value::text(&self.big_font_file)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for Layer {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Layer
    }

    fn constructor(&self) -> Constructor {
        named("Layer", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("flags", Value::flags(M, "LayerFlags", &self.flags)),
            Property::new("color", Value::Color(self.color)),
            Property::new(
                "line_type",
                Value::name_ref(TableRef::LineType, &self.line_type),
            ),
            Property::new("line_weight", Value::LineWeight(self.line_weight)),
            Property::new("transparency", Value::Transparency(self.transparency)),
            Property::new("is_plottable", Value::Bool(self.is_plottable)),
            Property::new("description", Value::text(&self.description)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for DimStyle {
    fn kind(&self) -> ConstructKind {
        ConstructKind::DimStyle
    }

    fn constructor(&self) -> Constructor {
        named("DimStyle", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new(
                "text_style",
                Value::name_ref(TableRef::TextStyle, &self.text_style),
            ),
            Property::new("scale_factor", Value::Double(self.scale_factor)),
            Property::new("arrow_size", Value::Double(self.arrow_size)),
            Property::new("text_height", Value::Double(self.text_height)),
            Property::new("text_gap", Value::Double(self.text_gap)),
            Property::new(
                "extension_line_offset",
                Value::Double(self.extension_line_offset),
            ),
            Property::new(
                "extension_line_extension",
                Value::Double(self.extension_line_extension),
            ),
            Property::new(
                "linear_scale_factor",
                Value::Double(self.linear_scale_factor),
            ),
            Property::new("decimal_places", Value::Int(self.decimal_places.into())),
            Property::new(
                "text_alignment",
                enum_value(M, "DimensionTextAlignment", &self.text_alignment),
            ),
            Property::new(
                "dimension_line_color",
                Value::Color(self.dimension_line_color),
            ),
            Property::new(
                "extension_line_color",
                Value::Color(self.extension_line_color),
            ),
            Property::new("text_color", Value::Color(self.text_color)),
            Property::new("post_fix", Value::text(&self.post_fix)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for Ucs {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Ucs
    }

    fn constructor(&self) -> Constructor {
        named("Ucs", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("origin", Value::Vector3(self.origin)),
            Property::new("x_axis", Value::Vector3(self.x_axis)),
            Property::new("y_axis", Value::Vector3(self.y_axis)),
            Property::new("elevation", Value::Double(self.elevation)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for VPort {
    fn kind(&self) -> ConstructKind {
        ConstructKind::VPort
    }

    fn constructor(&self) -> Constructor {
        named("VPort", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("lower_left", Value::Vector2(self.lower_left)),
            Property::new("upper_right", Value::Vector2(self.upper_right)),
            Property::new("view_center", Value::Vector2(self.view_center)),
            Property::new("view_height", Value::Double(self.view_height)),
            Property::new("aspect_ratio", Value::Double(self.aspect_ratio)),
            Property::new("view_direction", Value::Vector3(self.view_direction)),
            Property::new("view_target", Value::Vector3(self.view_target)),
            Property::new("lens_length", Value::Double(self.lens_length)),
            Property::new("snap_spacing", Value::Vector2(self.snap_spacing)),
            Property::new("grid_spacing", Value::Vector2(self.grid_spacing)),
            Property::new("snap_on", Value::Bool(self.snap_on)),
            Property::new("grid_on", Value::Bool(self.grid_on)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Construct for BlockRecord {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Block
    }

    fn constructor(&self) -> Constructor {
        named("BlockRecord", &self.name)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("base_point", Value::Vector3(self.base_point)),
            Property::new("description", Value::text(&self.description)),
            Property::new("xref_path", Value::text(&self.xref_path)),
            Property::new("explodable", Value::Bool(self.explodable)),
            Property::new("scalable", Value::Bool(self.scalable)),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn children(&self) -> &[EntityType] {
        &self.entities
    }
}
