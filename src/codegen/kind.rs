//! The closed set of constructs the generator knows how to emit

use super::describe::Construct;
use super::value::{Module, Property};
use crate::document::HeaderVariables;
use crate::entities::*;
use crate::objects::*;
use crate::tables::*;
use crate::types::Vector3;

/// Every kind of construct an emission unit can hold
///
/// Variant order is the native emission order; all entity kinds share one
/// rank so that entities keep their document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstructKind {
    Header,
    AppId,
    LineType,
    TextStyle,
    /// Text style flagged as a shape file
    ShapeStyle,
    Layer,
    DimStyle,
    Ucs,
    VPort,
    MLineStyle,
    Block,
    ImageDefinition,
    UnderlayDefinition,

    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    LwPolyline,
    Polyline2D,
    Polyline3D,
    Spline,
    Text,
    MText,
    Solid,
    Face3D,
    Ray,
    XLine,
    Insert,
    AttributeDefinition,
    Dimension,
    Hatch,
    Leader,
    MultiLeader,
    MLine,
    Mesh,
    RasterImage,
    Tolerance,
    Wipeout,
    Shape,
    Underlay,
    Viewport,
    PolyfaceMesh,
    Solid3D,

    Group,
    Layout,
    RasterVariables,
    PlotSettings,
    LayerState,
    XRecord,
    Dictionary,
}

/// How a construct gets into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Assigned field by field on `doc.header`
    Header,
    /// `doc.{field}.add(..)`
    Table(&'static str),
    /// `doc.add_entity(EntityType::{variant}(..))`
    Entity(&'static str),
    /// `doc.add_object(ObjectType::{variant}(..))`
    Object(&'static str),
    /// No programmatic form; emitted as a comment
    Opaque,
}

/// Static facts about one [`ConstructKind`]
#[derive(Debug, Clone, Copy)]
pub struct KindDescriptor {
    /// Human-readable name used in comments and notifications
    pub label: &'static str,
    /// Section heading in native order
    pub section: &'static str,
    /// Section heading when entities are grouped by type
    pub plural: &'static str,
    /// Variable name prefix
    pub prefix: &'static str,
    /// Rust type the generated code constructs
    pub type_name: &'static str,
    /// Module exporting [`Self::type_name`]
    pub module: Module,
    pub registration: Registration,
    /// Properties of a freshly constructed instance
    pub baseline: fn() -> Vec<Property>,
}

macro_rules! entity_kind {
    ($label:literal, $plural:literal, $prefix:literal, $ty:literal, $baseline:expr) => {
        KindDescriptor {
            label: $label,
            section: "Entities",
            plural: $plural,
            prefix: $prefix,
            type_name: $ty,
            module: Module::Entities,
            registration: Registration::Entity($ty),
            baseline: $baseline,
        }
    };
}

const Z: Vector3 = Vector3::ZERO;

impl ConstructKind {
    /// All kinds in native order
    pub const ALL: [ConstructKind; 51] = [
        ConstructKind::Header,
        ConstructKind::AppId,
        ConstructKind::LineType,
        ConstructKind::TextStyle,
        ConstructKind::ShapeStyle,
        ConstructKind::Layer,
        ConstructKind::DimStyle,
        ConstructKind::Ucs,
        ConstructKind::VPort,
        ConstructKind::MLineStyle,
        ConstructKind::Block,
        ConstructKind::ImageDefinition,
        ConstructKind::UnderlayDefinition,
        ConstructKind::Point,
        ConstructKind::Line,
        ConstructKind::Circle,
        ConstructKind::Arc,
        ConstructKind::Ellipse,
        ConstructKind::LwPolyline,
        ConstructKind::Polyline2D,
        ConstructKind::Polyline3D,
        ConstructKind::Spline,
        ConstructKind::Text,
        ConstructKind::MText,
        ConstructKind::Solid,
        ConstructKind::Face3D,
        ConstructKind::Ray,
        ConstructKind::XLine,
        ConstructKind::Insert,
        ConstructKind::AttributeDefinition,
        ConstructKind::Dimension,
        ConstructKind::Hatch,
        ConstructKind::Leader,
        ConstructKind::MultiLeader,
        ConstructKind::MLine,
        ConstructKind::Mesh,
        ConstructKind::RasterImage,
        ConstructKind::Tolerance,
        ConstructKind::Wipeout,
        ConstructKind::Shape,
        ConstructKind::Underlay,
        ConstructKind::Viewport,
        ConstructKind::PolyfaceMesh,
        ConstructKind::Solid3D,
        ConstructKind::Group,
        ConstructKind::Layout,
        ConstructKind::RasterVariables,
        ConstructKind::PlotSettings,
        ConstructKind::LayerState,
        ConstructKind::XRecord,
        ConstructKind::Dictionary,
    ];

    /// Position in native order; entity kinds share one rank
    pub fn rank(self) -> usize {
        if self.is_entity() {
            ConstructKind::Point as usize
        } else {
            self as usize
        }
    }

    pub fn is_entity(self) -> bool {
        (ConstructKind::Point..=ConstructKind::Solid3D).contains(&self)
    }

    /// Kinds stored in a symbol table, blocks included
    pub fn is_table(self) -> bool {
        matches!(self.descriptor().registration, Registration::Table(_))
    }

    /// Kinds dropped by only-used-tables when nothing references them.
    /// Multiline styles live in the object store but behave as a table.
    pub fn is_usage_pruned(self) -> bool {
        self.is_table() || self == ConstructKind::MLineStyle
    }

    pub fn is_opaque(self) -> bool {
        matches!(self.descriptor().registration, Registration::Opaque)
    }

    /// Kinds that can be declared early to break a reference cycle
    pub fn supports_forward_declaration(self) -> bool {
        self.is_table()
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn descriptor(self) -> KindDescriptor {
        use ConstructKind as K;
        match self {
            K::Header => KindDescriptor {
                label: "Header",
                section: "Header variables",
                plural: "Header variables",
                prefix: "header",
                type_name: "HeaderVariables",
                module: Module::Root,
                registration: Registration::Header,
                baseline: || HeaderVariables::default().properties(),
            },
            K::AppId => KindDescriptor {
                label: "AppId",
                section: "Application ids",
                plural: "Application ids",
                prefix: "appid",
                type_name: "AppId",
                module: Module::Tables,
                registration: Registration::Table("app_ids"),
                baseline: || AppId::new("").properties(),
            },
            K::LineType => KindDescriptor {
                label: "LineType",
                section: "Line types",
                plural: "Line types",
                prefix: "linetype",
                type_name: "LineType",
                module: Module::Tables,
                registration: Registration::Table("line_types"),
                baseline: || LineType::new("").properties(),
            },
            K::TextStyle => KindDescriptor {
                label: "TextStyle",
                section: "Text styles",
                plural: "Text styles",
                prefix: "textstyle",
                type_name: "TextStyle",
                module: Module::Tables,
                registration: Registration::Table("text_styles"),
                baseline: || TextStyle::new("").properties(),
            },
            K::ShapeStyle => KindDescriptor {
                label: "ShapeStyle",
                section: "Shape styles",
                plural: "Shape styles",
                prefix: "shape_style",
                type_name: "TextStyle",
                module: Module::Tables,
                registration: Registration::Table("text_styles"),
                baseline: || TextStyle::shape("").properties(),
            },
            K::Layer => KindDescriptor {
                label: "Layer",
                section: "Layers",
                plural: "Layers",
                prefix: "layer",
                type_name: "Layer",
                module: Module::Tables,
                registration: Registration::Table("layers"),
                baseline: || Layer::new("").properties(),
            },
            K::DimStyle => KindDescriptor {
                label: "DimStyle",
                section: "Dimension styles",
                plural: "Dimension styles",
                prefix: "dimstyle",
                type_name: "DimStyle",
                module: Module::Tables,
                registration: Registration::Table("dim_styles"),
                baseline: || DimStyle::new("").properties(),
            },
            K::Ucs => KindDescriptor {
                label: "Ucs",
                section: "User coordinate systems",
                plural: "User coordinate systems",
                prefix: "ucs",
                type_name: "Ucs",
                module: Module::Tables,
                registration: Registration::Table("ucss"),
                baseline: || Ucs::new("").properties(),
            },
            K::VPort => KindDescriptor {
                label: "VPort",
                section: "Viewport configurations",
                plural: "Viewport configurations",
                prefix: "vport",
                type_name: "VPort",
                module: Module::Tables,
                registration: Registration::Table("vports"),
                baseline: || VPort::new("").properties(),
            },
            K::MLineStyle => KindDescriptor {
                label: "MLineStyle",
                section: "Multiline styles",
                plural: "Multiline styles",
                prefix: "mlinestyle",
                type_name: "MLineStyle",
                module: Module::Objects,
                registration: Registration::Object("MLineStyle"),
                baseline: || MLineStyle::new("").properties(),
            },
            K::Block => KindDescriptor {
                label: "Block",
                section: "Blocks",
                plural: "Blocks",
                prefix: "block",
                type_name: "BlockRecord",
                module: Module::Tables,
                registration: Registration::Table("block_records"),
                baseline: || BlockRecord::new("").properties(),
            },
            K::ImageDefinition => KindDescriptor {
                label: "ImageDefinition",
                section: "Image definitions",
                plural: "Image definitions",
                prefix: "image_def",
                type_name: "ImageDefinition",
                module: Module::Objects,
                registration: Registration::Object("ImageDefinition"),
                baseline: || ImageDefinition::new("").properties(),
            },
            K::UnderlayDefinition => KindDescriptor {
                label: "UnderlayDefinition",
                section: "Underlay definitions",
                plural: "Underlay definitions",
                prefix: "underlay_def",
                type_name: "UnderlayDefinition",
                module: Module::Objects,
                registration: Registration::Object("UnderlayDefinition"),
                baseline: || UnderlayDefinition::new(UnderlayType::Pdf, "").properties(),
            },

            K::Point => entity_kind!("Point", "Points", "point", "Point", || {
                Point::new(Z).properties()
            }),
            K::Line => entity_kind!("Line", "Lines", "line", "Line", || {
                Line::new(Z, Z).properties()
            }),
            K::Circle => entity_kind!("Circle", "Circles", "circle", "Circle", || {
                Circle::new(Z, 0.0).properties()
            }),
            K::Arc => entity_kind!("Arc", "Arcs", "arc", "Arc", || {
                Arc::new(Z, 0.0, 0.0, 0.0).properties()
            }),
            K::Ellipse => entity_kind!("Ellipse", "Ellipses", "ellipse", "Ellipse", || {
                Ellipse::new(Z, Z, 0.0).properties()
            }),
            K::LwPolyline => entity_kind!(
                "LwPolyline",
                "Lightweight polylines",
                "lwpolyline",
                "LwPolyline",
                || LwPolyline::new().properties()
            ),
            K::Polyline2D => entity_kind!(
                "Polyline2D",
                "2D polylines",
                "polyline2d",
                "Polyline2D",
                || Polyline2D::new().properties()
            ),
            K::Polyline3D => entity_kind!(
                "Polyline3D",
                "3D polylines",
                "polyline3d",
                "Polyline3D",
                || Polyline3D::new().properties()
            ),
            K::Spline => entity_kind!("Spline", "Splines", "spline", "Spline", || {
                Spline::new().properties()
            }),
            K::Text => entity_kind!("Text", "Texts", "text", "Text", || {
                Text::new("", Z, 0.0).properties()
            }),
            K::MText => entity_kind!("MText", "Multiline texts", "mtext", "MText", || {
                MText::new("", Z, 0.0).properties()
            }),
            K::Solid => entity_kind!("Solid", "Solids", "solid", "Solid", || {
                Solid::new(Z, Z, Z, Z).properties()
            }),
            K::Face3D => entity_kind!("Face3D", "3D faces", "face3d", "Face3D", || {
                Face3D::new(Z, Z, Z, Z).properties()
            }),
            K::Ray => entity_kind!("Ray", "Rays", "ray", "Ray", || Ray::new(Z, Z).properties()),
            K::XLine => entity_kind!("XLine", "Construction lines", "xline", "XLine", || {
                XLine::new(Z, Z).properties()
            }),
            K::Insert => entity_kind!("Insert", "Block references", "insert", "Insert", || {
                Insert::new("", Z).properties()
            }),
            K::AttributeDefinition => entity_kind!(
                "AttributeDefinition",
                "Attribute definitions",
                "attdef",
                "AttributeDefinition",
                || AttributeDefinition::new("", Z, 0.0).properties()
            ),
            K::Dimension => entity_kind!("Dimension", "Dimensions", "dimension", "Dimension", || {
                Dimension::new(DimensionType::Linear).properties()
            }),
            K::Hatch => entity_kind!("Hatch", "Hatches", "hatch", "Hatch", || {
                Hatch::new("").properties()
            }),
            K::Leader => entity_kind!("Leader", "Leaders", "leader", "Leader", || {
                Leader::new().properties()
            }),
            K::MultiLeader => entity_kind!(
                "MultiLeader",
                "Multileaders",
                "multileader",
                "MultiLeader",
                || MultiLeader::new().properties()
            ),
            K::MLine => entity_kind!("MLine", "Multilines", "mline", "MLine", || {
                MLine::new().properties()
            }),
            K::Mesh => entity_kind!("Mesh", "Meshes", "mesh", "Mesh", || {
                Mesh::new().properties()
            }),
            K::RasterImage => entity_kind!(
                "RasterImage",
                "Raster images",
                "image",
                "RasterImage",
                || RasterImage::new(Z).properties()
            ),
            K::Tolerance => entity_kind!("Tolerance", "Tolerances", "tolerance", "Tolerance", || {
                Tolerance::new("", Z).properties()
            }),
            K::Wipeout => entity_kind!("Wipeout", "Wipeouts", "wipeout", "Wipeout", || {
                Wipeout::new(Z).properties()
            }),
            K::Shape => entity_kind!("Shape", "Shapes", "shape", "Shape", || {
                Shape::new("", Z, 0.0).properties()
            }),
            K::Underlay => entity_kind!("Underlay", "Underlays", "underlay", "Underlay", || {
                Underlay::new(Z).properties()
            }),
            K::Viewport => entity_kind!("Viewport", "Viewports", "viewport", "Viewport", || {
                Viewport::new(Z, 0.0, 0.0).properties()
            }),
            K::PolyfaceMesh => entity_kind!(
                "PolyfaceMesh",
                "Polyface meshes",
                "polyface",
                "PolyfaceMesh",
                || PolyfaceMesh::new().properties()
            ),
            K::Solid3D => KindDescriptor {
                label: "Solid3D",
                section: "Entities",
                plural: "3D solids",
                prefix: "solid3d",
                type_name: "Solid3D",
                module: Module::Entities,
                registration: Registration::Opaque,
                baseline: Vec::new,
            },

            K::Group => KindDescriptor {
                label: "Group",
                section: "Groups",
                plural: "Groups",
                prefix: "group",
                type_name: "Group",
                module: Module::Objects,
                registration: Registration::Object("Group"),
                baseline: || Group::new("").properties(),
            },
            K::Layout => KindDescriptor {
                label: "Layout",
                section: "Layouts",
                plural: "Layouts",
                prefix: "layout",
                type_name: "Layout",
                module: Module::Objects,
                registration: Registration::Object("Layout"),
                baseline: || Layout::new("").properties(),
            },
            K::RasterVariables => KindDescriptor {
                label: "RasterVariables",
                section: "Raster variables",
                plural: "Raster variables",
                prefix: "raster_variables",
                type_name: "RasterVariables",
                module: Module::Objects,
                registration: Registration::Object("RasterVariables"),
                baseline: || RasterVariables::new().properties(),
            },
            K::PlotSettings => KindDescriptor {
                label: "PlotSettings",
                section: "Plot settings",
                plural: "Plot settings",
                prefix: "plot_settings",
                type_name: "PlotSettings",
                module: Module::Objects,
                registration: Registration::Object("PlotSettings"),
                baseline: || PlotSettings::new("").properties(),
            },
            K::LayerState => KindDescriptor {
                label: "LayerState",
                section: "Layer states",
                plural: "Layer states",
                prefix: "layer_state",
                type_name: "LayerState",
                module: Module::Objects,
                registration: Registration::Object("LayerState"),
                baseline: || LayerState::new("").properties(),
            },
            K::XRecord => KindDescriptor {
                label: "XRecord",
                section: "Extension records",
                plural: "Extension records",
                prefix: "xrecord",
                type_name: "XRecord",
                module: Module::Objects,
                registration: Registration::Opaque,
                baseline: Vec::new,
            },
            K::Dictionary => KindDescriptor {
                label: "Dictionary",
                section: "Dictionaries",
                plural: "Dictionaries",
                prefix: "dictionary",
                type_name: "Dictionary",
                module: Module::Objects,
                registration: Registration::Opaque,
                baseline: Vec::new,
            },
        }
    }
}
