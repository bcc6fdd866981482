use super::{enum_value, Construct};
use crate::codegen::kind::ConstructKind;
use crate::codegen::value::{Constructor, Module, Property, Value};
use crate::document::HeaderVariables;

impl Construct for HeaderVariables {
    fn kind(&self) -> ConstructKind {
        ConstructKind::Header
    }

    fn constructor(&self) -> Constructor {
        Constructor::with_method("HeaderVariables", "default", Vec::new())
    }

    fn properties(&self) -> Vec<Property> {
        let types = Module::Types;
        vec![
            Property::new("ortho_mode", Value::Bool(self.ortho_mode)),
            Property::new("fill_mode", Value::Bool(self.fill_mode)),
            Property::new("quick_text_mode", Value::Bool(self.quick_text_mode)),
            Property::new("mirror_text", Value::Bool(self.mirror_text)),
            Property::new("limit_check", Value::Bool(self.limit_check)),
            Property::new(
                "paper_space_linetype_scaling",
                Value::Bool(self.paper_space_linetype_scaling),
            ),
            Property::new("show_model_space", Value::Bool(self.show_model_space)),
            Property::new("lineweight_display", Value::Bool(self.lineweight_display)),
            Property::new(
                "insertion_units",
                enum_value(types, "DrawingUnits", &self.insertion_units),
            ),
            Property::new(
                "linear_unit_format",
                enum_value(types, "LinearUnitFormat", &self.linear_unit_format),
            ),
            Property::new(
                "linear_unit_precision",
                Value::Int(self.linear_unit_precision.into()),
            ),
            Property::new(
                "angular_unit_format",
                enum_value(types, "AngularUnitFormat", &self.angular_unit_format),
            ),
            Property::new(
                "angular_unit_precision",
                Value::Int(self.angular_unit_precision.into()),
            ),
            Property::new(
                "measurement",
                enum_value(types, "MeasurementSystem", &self.measurement),
            ),
            Property::new("angle_base", Value::Double(self.angle_base)),
            Property::new("angle_clockwise", Value::Bool(self.angle_clockwise)),
            Property::new(
                "point_display_mode",
                Value::Int(self.point_display_mode.into()),
            ),
            Property::new("point_display_size", Value::Double(self.point_display_size)),
            Property::new("linetype_scale", Value::Double(self.linetype_scale)),
            Property::new("text_height", Value::Double(self.text_height)),
            Property::new("trace_width", Value::Double(self.trace_width)),
            Property::new("thickness", Value::Double(self.thickness)),
            Property::new("elevation", Value::Double(self.elevation)),
            Property::new("fillet_radius", Value::Double(self.fillet_radius)),
            Property::new("polyline_width", Value::Double(self.polyline_width)),
            Property::new("current_layer", Value::text(&self.current_layer)),
            Property::new("current_linetype", Value::text(&self.current_linetype)),
            Property::new("current_text_style", Value::text(&self.current_text_style)),
            Property::new("current_dim_style", Value::text(&self.current_dim_style)),
            Property::new(
                "current_mline_style",
                Value::text(&self.current_mline_style),
            ),
            Property::new(
                "current_entity_color",
                Value::Color(self.current_entity_color),
            ),
            Property::new(
                "current_line_weight",
                Value::LineWeight(self.current_line_weight),
            ),
            Property::new(
                "current_entity_linetype_scale",
                Value::Double(self.current_entity_linetype_scale),
            ),
            Property::new("dim_scale", Value::Double(self.dim_scale)),
            Property::new("dim_arrow_size", Value::Double(self.dim_arrow_size)),
            Property::new("dim_text_height", Value::Double(self.dim_text_height)),
            Property::new(
                "dim_decimal_places",
                Value::Int(self.dim_decimal_places.into()),
            ),
            Property::new("insertion_base", Value::Vector3(self.insertion_base)),
            Property::new("extents_min", Value::Vector3(self.extents_min)),
            Property::new("extents_max", Value::Vector3(self.extents_max)),
            Property::new("limits_min", Value::Vector2(self.limits_min)),
            Property::new("limits_max", Value::Vector2(self.limits_max)),
            Property::new("create_date", Value::DateTime(self.create_date)),
            Property::new("update_date", Value::DateTime(self.update_date)),
            Property::new(
                "total_editing_time",
                Value::Duration(self.total_editing_time),
            ),
            Property::new("user_elapsed_time", Value::Duration(self.user_elapsed_time)),
            Property::new("project_name", Value::text(&self.project_name)),
        ]
    }
}
