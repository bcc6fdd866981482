use super::{common_properties, enum_value, Construct};
use crate::codegen::kind::ConstructKind;
use crate::codegen::value::{Constructor, Module, Property, TableRef, Value};
use crate::entities::*;
use crate::types::{Vector2, Vector3};

const M: Module = Module::Entities;

fn v3(v: Vector3) -> Value {
    Value::Vector3(v)
}

fn v3_list(points: &[Vector3]) -> Value {
    Value::list(points, |p| Value::Vector3(*p))
}

fn v2_list(points: &[Vector2]) -> Value {
    Value::list(points, |p| Value::Vector2(*p))
}

fn f64_list(values: &[f64]) -> Value {
    Value::list(values, |v| Value::Double(*v))
}

/// Entity properties: the shared block followed by the kind's own
fn with_common(common: &EntityCommon, own: Vec<Property>) -> Vec<Property> {
    let mut props = common_properties(common);
    props.extend(own);
    props
}

macro_rules! construct {
    ($ty:ty, $kind:ident, |$s:ident| ctor: $ctor:expr, props: [$($prop:expr),* $(,)?]) => {
        impl Construct for $ty {
            fn kind(&self) -> ConstructKind {
                ConstructKind::$kind
            }

            #[allow(unused_variables)]
            fn constructor(&self) -> Constructor {
                let $s = self;
                $ctor
            }

            fn properties(&self) -> Vec<Property> {
                let $s = self;
                with_common(&$s.common, vec![$($prop),*])
            }
        }
    };
}

construct!(Point, Point, |s|
    ctor: Constructor::new("Point", vec![v3(s.location)]),
    props: [
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Line, Line, |s|
    ctor: Constructor::new("Line", vec![v3(s.start), v3(s.end)]),
    props: [
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Circle, Circle, |s|
    ctor: Constructor::new("Circle", vec![v3(s.center), Value::Double(s.radius)]),
    props: [
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Arc, Arc, |s|
    ctor: Constructor::new(
        "Arc",
        vec![
            v3(s.center),
            Value::Double(s.radius),
            Value::Double(s.start_angle),
            Value::Double(s.end_angle),
        ],
    ),
    props: [
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Ellipse, Ellipse, |s|
    ctor: Constructor::new(
        "Ellipse",
        vec![v3(s.center), v3(s.major_axis), Value::Double(s.minor_axis_ratio)],
    ),
    props: [
        Property::new("start_parameter", Value::Double(s.start_parameter)),
        Property::new("end_parameter", Value::Double(s.end_parameter)),
        Property::new("normal", v3(s.normal)),
    ]
);

fn lw_vertex(v: &LwVertex) -> Value {
    if v.bulge == 0.0 {
        Value::call(M, "LwVertex::new", vec![Value::Vector2(v.location)])
    } else {
        Value::call(
            M,
            "LwVertex::with_bulge",
            vec![Value::Vector2(v.location), Value::Double(v.bulge)],
        )
    }
}

construct!(LwPolyline, LwPolyline, |s|
    ctor: Constructor::new("LwPolyline", Vec::new()),
    props: [
        Property::new("vertices", Value::list(&s.vertices, lw_vertex)),
        Property::new("is_closed", Value::Bool(s.is_closed)),
        Property::new("constant_width", Value::Double(s.constant_width)),
        Property::new("elevation", Value::Double(s.elevation)),
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

fn vertex_2d(v: &Vertex2D) -> Value {
    if v.bulge == 0.0 {
        Value::call(M, "Vertex2D::new", vec![Value::Vector3(v.location)])
    } else {
        Value::call(
            M,
            "Vertex2D::with_bulge",
            vec![Value::Vector3(v.location), Value::Double(v.bulge)],
        )
    }
}

construct!(Polyline2D, Polyline2D, |s|
    ctor: Constructor::new("Polyline2D", Vec::new()),
    props: [
        Property::new("vertices", Value::list(&s.vertices, vertex_2d)),
        Property::new("flags", Value::flags(M, "PolylineFlags", &s.flags)),
        Property::new("elevation", Value::Double(s.elevation)),
        Property::new("default_start_width", Value::Double(s.default_start_width)),
        Property::new("default_end_width", Value::Double(s.default_end_width)),
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Polyline3D, Polyline3D, |s|
    ctor: Constructor::new("Polyline3D", Vec::new()),
    props: [
        Property::new("vertices", v3_list(&s.vertices)),
        Property::new("flags", Value::flags(M, "PolylineFlags", &s.flags)),
    ]
);

construct!(Spline, Spline, |s|
    ctor: Constructor::new("Spline", Vec::new()),
    props: [
        Property::new("degree", Value::Int(s.degree.into())),
        Property::new("flags", Value::flags(M, "SplineFlags", &s.flags)),
        Property::new("control_points", v3_list(&s.control_points)),
        Property::new("fit_points", v3_list(&s.fit_points)),
        Property::new("knots", f64_list(&s.knots)),
        Property::new("weights", f64_list(&s.weights)),
        Property::new("start_tangent", v3(s.start_tangent)),
        Property::new("end_tangent", v3(s.end_tangent)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Text, Text, |s|
    ctor: Constructor::new(
        "Text",
        vec![Value::text(&s.value), v3(s.insertion_point), Value::Double(s.height)],
    ),
    props: [
        Property::new("alignment_point", v3(s.alignment_point)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("width_factor", Value::Double(s.width_factor)),
        Property::new("oblique_angle", Value::Double(s.oblique_angle)),
        Property::new("style", Value::name_ref(TableRef::TextStyle, &s.style)),
        Property::new(
            "horizontal_alignment",
            enum_value(M, "TextHorizontalAlignment", &s.horizontal_alignment),
        ),
        Property::new(
            "vertical_alignment",
            enum_value(M, "TextVerticalAlignment", &s.vertical_alignment),
        ),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(MText, MText, |s|
    ctor: Constructor::new(
        "MText",
        vec![Value::text(&s.value), v3(s.insertion_point), Value::Double(s.height)],
    ),
    props: [
        Property::new("rectangle_width", Value::Double(s.rectangle_width)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("style", Value::name_ref(TableRef::TextStyle, &s.style)),
        Property::new(
            "attachment_point",
            enum_value(M, "AttachmentPoint", &s.attachment_point),
        ),
        Property::new(
            "drawing_direction",
            enum_value(M, "DrawingDirection", &s.drawing_direction),
        ),
        Property::new("line_spacing_factor", Value::Double(s.line_spacing_factor)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Solid, Solid, |s|
    ctor: Constructor::new(
        "Solid",
        vec![
            v3(s.first_corner),
            v3(s.second_corner),
            v3(s.third_corner),
            v3(s.fourth_corner),
        ],
    ),
    props: [
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Face3D, Face3D, |s|
    ctor: Constructor::new(
        "Face3D",
        vec![
            v3(s.first_corner),
            v3(s.second_corner),
            v3(s.third_corner),
            v3(s.fourth_corner),
        ],
    ),
    props: [
        Property::new(
            "invisible_edges",
            Value::flags(M, "InvisibleEdgeFlags", &s.invisible_edges),
        ),
    ]
);

construct!(Ray, Ray, |s|
    ctor: Constructor::new("Ray", vec![v3(s.base_point), v3(s.direction)]),
    props: []
);

construct!(XLine, XLine, |s|
    ctor: Constructor::new("XLine", vec![v3(s.base_point), v3(s.direction)]),
    props: []
);

construct!(Insert, Insert, |s|
    ctor: Constructor::new(
        "Insert",
        vec![
            Value::name_ref(TableRef::Block, &s.block_name),
            v3(s.insert_point),
        ],
    ),
    props: [
        Property::new("x_scale", Value::Double(s.x_scale)),
        Property::new("y_scale", Value::Double(s.y_scale)),
        Property::new("z_scale", Value::Double(s.z_scale)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("normal", v3(s.normal)),
        Property::new("column_count", Value::Int(s.column_count.into())),
        Property::new("row_count", Value::Int(s.row_count.into())),
        Property::new("column_spacing", Value::Double(s.column_spacing)),
        Property::new("row_spacing", Value::Double(s.row_spacing)),
    ]
);

construct!(AttributeDefinition, AttributeDefinition, |s|
    ctor: Constructor::new(
        "AttributeDefinition",
        vec![Value::text(&s.tag), v3(s.insertion_point), Value::Double(s.height)],
    ),
    props: [
        Property::new("prompt", Value::text(&s.prompt)),
        Property::new("default_value", Value::text(&s.default_value)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("style", Value::name_ref(TableRef::TextStyle, &s.style)),
        Property::new("flags", Value::flags(M, "AttributeFlags", &s.flags)),
        Property::new("field_length", Value::Int(s.field_length.into())),
    ]
);

construct!(Dimension, Dimension, |s|
    ctor: Constructor::new(
        "Dimension",
        vec![enum_value(M, "DimensionType", &s.dimension_type)],
    ),
    props: [
        Property::new("style", Value::name_ref(TableRef::DimStyle, &s.style)),
        Property::new("block_name", Value::name_ref(TableRef::Block, &s.block_name)),
        Property::new("definition_point", v3(s.definition_point)),
        Property::new("text_middle_point", v3(s.text_middle_point)),
        Property::new("first_point", v3(s.first_point)),
        Property::new("second_point", v3(s.second_point)),
        Property::new("angle_vertex", v3(s.angle_vertex)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("text_override", Value::text(&s.text_override)),
        Property::new("measurement", Value::Double(s.measurement)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Hatch, Hatch, |s|
    ctor: Constructor::new("Hatch", vec![Value::text(&s.pattern_name)]),
    props: [
        Property::new(
            "pattern_type",
            enum_value(M, "HatchPatternType", &s.pattern_type),
        ),
        Property::new("style", enum_value(M, "HatchStyle", &s.style)),
        Property::new("solid_fill", Value::Bool(s.solid_fill)),
        Property::new("associative", Value::Bool(s.associative)),
        Property::new("pattern_angle", Value::Double(s.pattern_angle)),
        Property::new("pattern_scale", Value::Double(s.pattern_scale)),
        Property::new("elevation", Value::Double(s.elevation)),
        Property::new("normal", v3(s.normal)),
        Property::new(
            "boundaries",
            Value::list(&s.boundaries, |b| {
                Value::call(M, "HatchBoundary::new", vec![v2_list(&b.vertices)])
            }),
        ),
    ]
);

construct!(Leader, Leader, |s|
    ctor: Constructor::new("Leader", Vec::new()),
    props: [
        Property::new("dim_style", Value::name_ref(TableRef::DimStyle, &s.dim_style)),
        Property::new("vertices", v3_list(&s.vertices)),
        Property::new("arrow_enabled", Value::Bool(s.arrow_enabled)),
        Property::new("hookline_enabled", Value::Bool(s.hookline_enabled)),
        Property::new("path_type", enum_value(M, "LeaderPathType", &s.path_type)),
        Property::new("text_height", Value::Double(s.text_height)),
        Property::new("text_width", Value::Double(s.text_width)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(MultiLeader, MultiLeader, |s|
    ctor: Constructor::new("MultiLeader", Vec::new()),
    props: [
        Property::new(
            "content_type",
            enum_value(M, "MultiLeaderContentType", &s.content_type),
        ),
        Property::new("text", Value::text(&s.text)),
        Property::new("text_location", v3(s.text_location)),
        Property::new("text_style", Value::name_ref(TableRef::TextStyle, &s.text_style)),
        Property::new("text_height", Value::Double(s.text_height)),
        Property::new("leader_points", v3_list(&s.leader_points)),
        Property::new("arrow_size", Value::Double(s.arrow_size)),
        Property::new("enable_landing", Value::Bool(s.enable_landing)),
        Property::new("dogleg_length", Value::Double(s.dogleg_length)),
        Property::new("landing_gap", Value::Double(s.landing_gap)),
        Property::new("scale", Value::Double(s.scale)),
    ]
);

construct!(MLine, MLine, |s|
    ctor: Constructor::new("MLine", Vec::new()),
    props: [
        Property::new("style_name", Value::name_ref(TableRef::MLineStyle, &s.style_name)),
        Property::new("scale_factor", Value::Double(s.scale_factor)),
        Property::new(
            "justification",
            enum_value(M, "MLineJustification", &s.justification),
        ),
        Property::new("flags", Value::flags(M, "MLineFlags", &s.flags)),
        Property::new("vertices", v3_list(&s.vertices)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Mesh, Mesh, |s|
    ctor: Constructor::new("Mesh", Vec::new()),
    props: [
        Property::new("version", Value::Int(s.version.into())),
        Property::new("subdivision_level", Value::Int(s.subdivision_level.into())),
        Property::new("blend_crease", Value::Bool(s.blend_crease)),
        Property::new("vertices", v3_list(&s.vertices)),
        Property::new(
            "faces",
            Value::list(&s.faces, |f| {
                Value::call(
                    M,
                    "MeshFace::new",
                    vec![Value::list(&f.vertices, |i| Value::Int(*i as i64))],
                )
            }),
        ),
    ]
);

construct!(RasterImage, RasterImage, |s|
    ctor: Constructor::new("RasterImage", vec![v3(s.insertion_point)]),
    props: [
        Property::new("definition", Value::handle_ref(s.definition)),
        Property::new("u_vector", v3(s.u_vector)),
        Property::new("v_vector", v3(s.v_vector)),
        Property::new("size", Value::Vector2(s.size)),
        Property::new("flags", Value::flags(M, "ImageDisplayFlags", &s.flags)),
        Property::new("clipping_enabled", Value::Bool(s.clipping_enabled)),
        Property::new("brightness", Value::Int(s.brightness.into())),
        Property::new("contrast", Value::Int(s.contrast.into())),
        Property::new("fade", Value::Int(s.fade.into())),
        Property::new("clip_boundary", v2_list(&s.clip_boundary)),
    ]
);

construct!(Tolerance, Tolerance, |s|
    ctor: Constructor::new("Tolerance", vec![Value::text(&s.text), v3(s.insertion_point)]),
    props: [
        Property::new("direction", v3(s.direction)),
        Property::new("dim_style", Value::name_ref(TableRef::DimStyle, &s.dim_style)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Wipeout, Wipeout, |s|
    ctor: Constructor::new("Wipeout", vec![v3(s.insertion_point)]),
    props: [
        Property::new("u_vector", v3(s.u_vector)),
        Property::new("v_vector", v3(s.v_vector)),
        Property::new("size", Value::Vector2(s.size)),
        Property::new("flags", Value::flags(M, "ImageDisplayFlags", &s.flags)),
        Property::new("clipping_enabled", Value::Bool(s.clipping_enabled)),
        Property::new("clip_boundary", v2_list(&s.clip_boundary)),
    ]
);

construct!(Shape, Shape, |s|
    ctor: Constructor::new(
        "Shape",
        vec![Value::text(&s.shape_name), v3(s.insertion_point), Value::Double(s.size)],
    ),
    props: [
        Property::new("style", Value::name_ref(TableRef::TextStyle, &s.style)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("relative_x_scale", Value::Double(s.relative_x_scale)),
        Property::new("oblique_angle", Value::Double(s.oblique_angle)),
        Property::new("thickness", Value::Double(s.thickness)),
        Property::new("normal", v3(s.normal)),
    ]
);

construct!(Underlay, Underlay, |s|
    ctor: Constructor::new("Underlay", vec![v3(s.insertion_point)]),
    props: [
        Property::new("definition", Value::handle_ref(s.definition)),
        Property::new("scale", v3(s.scale)),
        Property::new("rotation", Value::Double(s.rotation)),
        Property::new("normal", v3(s.normal)),
        Property::new("flags", Value::flags(M, "UnderlayDisplayFlags", &s.flags)),
        Property::new("contrast", Value::Int(s.contrast.into())),
        Property::new("fade", Value::Int(s.fade.into())),
        Property::new("clip_boundary", v2_list(&s.clip_boundary)),
    ]
);

construct!(Viewport, Viewport, |s|
    ctor: Constructor::new(
        "Viewport",
        vec![v3(s.center), Value::Double(s.width), Value::Double(s.height)],
    ),
    props: [
        Property::new("id", Value::Int(s.id.into())),
        Property::new("view_center", Value::Vector2(s.view_center)),
        Property::new("view_height", Value::Double(s.view_height)),
        Property::new("view_target", v3(s.view_target)),
        Property::new("view_direction", v3(s.view_direction)),
        Property::new("lens_length", Value::Double(s.lens_length)),
        Property::new("twist_angle", Value::Double(s.twist_angle)),
        Property::new("status", Value::flags(M, "ViewportStatusFlags", &s.status)),
        Property::new(
            "frozen_layers",
            Value::list(&s.frozen_layers, |name| Value::name_ref(TableRef::Layer, name)),
        ),
    ]
);

construct!(PolyfaceMesh, PolyfaceMesh, |s|
    ctor: Constructor::new("PolyfaceMesh", Vec::new()),
    props: [
        Property::new("vertices", v3_list(&s.vertices)),
        Property::new(
            "faces",
            Value::list(&s.faces, |f| {
                Value::call(
                    M,
                    "PolyfaceFace::new",
                    f.indices.iter().map(|i| Value::Int((*i).into())).collect(),
                )
            }),
        ),
    ]
);

// Emitted as a placeholder comment; described for comparison only.
construct!(Solid3D, Solid3D, |s|
    ctor: Constructor::new("Solid3D", vec![Value::text(&s.acis_data)]),
    props: [Property::new("acis_version", Value::Int(s.acis_version.into()))]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_starts_with_common_block() {
        let line = Line::new(Vector3::ZERO, Vector3::UNIT_X);
        let names: Vec<_> = line.properties().iter().map(|p| p.name).collect();
        assert_eq!(names[0], "common.layer");
        assert!(names.contains(&"thickness"));
        assert!(!names.contains(&"start"));
    }

    #[test]
    fn test_lw_vertex_uses_bulge_ctor_only_when_needed() {
        let mut pl = LwPolyline::new();
        pl.vertices.push(LwVertex::new(Vector2::ZERO));
        pl.vertices.push(LwVertex::with_bulge(Vector2::new(1.0, 0.0), 0.5));
        let vertices = pl
            .properties()
            .into_iter()
            .find(|p| p.name == "vertices")
            .map(|p| p.value);
        match vertices {
            Some(Value::List(items)) => {
                assert!(matches!(&items[0], Value::Call { path: "LwVertex::new", .. }));
                assert!(matches!(&items[1], Value::Call { path: "LwVertex::with_bulge", .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_insert_refers_to_block_in_constructor() {
        let insert = Insert::new("Door", Vector3::ZERO);
        let ctor = insert.constructor();
        assert_eq!(ctor.args[0].references().len(), 1);
        assert_eq!(EntityType::Insert(insert).kind(), ConstructKind::Insert);
    }
}
