//! CAD entity types and traits

use crate::types::{Color, Handle, LineWeight, Transparency};

/// Implement [`Entity`] for a struct with a `common` field
macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl $crate::entities::Entity for $ty {
            fn common(&self) -> &$crate::entities::EntityCommon {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::entities::EntityCommon {
                &mut self.common
            }

            fn entity_type(&self) -> &'static str {
                $name
            }
        }
    };
}

pub mod arc;
pub mod attribute_definition;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod face3d;
pub mod hatch;
pub mod insert;
pub mod leader;
pub mod line;
pub mod lwpolyline;
pub mod mesh;
pub mod mline;
pub mod mtext;
pub mod multileader;
pub mod point;
pub mod polyface_mesh;
pub mod polyline;
pub mod polyline3d;
pub mod raster_image;
pub mod ray;
pub mod shape;
pub mod solid;
pub mod solid3d;
pub mod spline;
pub mod text;
pub mod tolerance;
pub mod underlay;
pub mod viewport;
pub mod wipeout;
pub mod xline;

pub use arc::Arc;
pub use attribute_definition::{AttributeDefinition, AttributeFlags};
pub use circle::Circle;
pub use dimension::{Dimension, DimensionType};
pub use ellipse::Ellipse;
pub use face3d::{Face3D, InvisibleEdgeFlags};
pub use hatch::{Hatch, HatchBoundary, HatchPatternType, HatchStyle};
pub use insert::Insert;
pub use leader::{Leader, LeaderPathType};
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use mesh::{Mesh, MeshFace};
pub use mline::{MLine, MLineFlags, MLineJustification};
pub use mtext::{AttachmentPoint, DrawingDirection, MText};
pub use multileader::{MultiLeader, MultiLeaderContentType};
pub use point::Point;
pub use polyface_mesh::{PolyfaceFace, PolyfaceMesh};
pub use polyline::{Polyline2D, PolylineFlags, Vertex2D};
pub use polyline3d::Polyline3D;
pub use raster_image::{ImageDisplayFlags, RasterImage};
pub use ray::Ray;
pub use shape::Shape;
pub use solid::Solid;
pub use solid3d::Solid3D;
pub use spline::{Spline, SplineFlags};
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};
pub use tolerance::Tolerance;
pub use underlay::{Underlay, UnderlayDisplayFlags};
pub use viewport::{Viewport, ViewportStatusFlags};
pub use wipeout::Wipeout;
pub use xline::XLine;

/// Base trait for all CAD entities
pub trait Entity {
    /// Shared entity data
    fn common(&self) -> &EntityCommon;

    /// Shared entity data, mutably
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Get the entity's unique handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle) {
        self.common_mut().handle = handle;
    }

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle, assigned when the entity is added to a document
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Line type name
    pub line_type: String,
    /// Color
    pub color: Color,
    /// Line weight
    pub line_weight: LineWeight,
    /// Transparency
    pub transparency: Transparency,
    /// Line type scale
    pub line_type_scale: f64,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            line_type: "ByLayer".to_string(),
            color: Color::ByLayer,
            line_weight: LineWeight::ByLayer,
            transparency: Transparency::OPAQUE,
            line_type_scale: 1.0,
            invisible: false,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    /// Lightweight polyline
    LwPolyline(LwPolyline),
    /// Heavy 2D polyline
    Polyline2D(Polyline2D),
    Polyline3D(Polyline3D),
    Spline(Spline),
    Text(Text),
    /// Multi-line text
    MText(MText),
    Solid(Solid),
    Face3D(Face3D),
    /// Semi-infinite line
    Ray(Ray),
    /// Infinite construction line
    XLine(XLine),
    /// Block reference
    Insert(Insert),
    AttributeDefinition(AttributeDefinition),
    Dimension(Dimension),
    Hatch(Hatch),
    Leader(Leader),
    MultiLeader(MultiLeader),
    /// Multiline
    MLine(MLine),
    Mesh(Mesh),
    RasterImage(RasterImage),
    /// Geometric tolerance frame
    Tolerance(Tolerance),
    Wipeout(Wipeout),
    Shape(Shape),
    /// PDF, DWF or DGN underlay reference
    Underlay(Underlay),
    /// Paper space viewport
    Viewport(Viewport),
    PolyfaceMesh(PolyfaceMesh),
    /// ACIS solid, kept as raw modeler data
    Solid3D(Solid3D),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline2D(e) => e,
            EntityType::Polyline3D(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Ray(e) => e,
            EntityType::XLine(e) => e,
            EntityType::Insert(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Dimension(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Leader(e) => e,
            EntityType::MultiLeader(e) => e,
            EntityType::MLine(e) => e,
            EntityType::Mesh(e) => e,
            EntityType::RasterImage(e) => e,
            EntityType::Tolerance(e) => e,
            EntityType::Wipeout(e) => e,
            EntityType::Shape(e) => e,
            EntityType::Underlay(e) => e,
            EntityType::Viewport(e) => e,
            EntityType::PolyfaceMesh(e) => e,
            EntityType::Solid3D(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline2D(e) => e,
            EntityType::Polyline3D(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Ray(e) => e,
            EntityType::XLine(e) => e,
            EntityType::Insert(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Dimension(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Leader(e) => e,
            EntityType::MultiLeader(e) => e,
            EntityType::MLine(e) => e,
            EntityType::Mesh(e) => e,
            EntityType::RasterImage(e) => e,
            EntityType::Tolerance(e) => e,
            EntityType::Wipeout(e) => e,
            EntityType::Shape(e) => e,
            EntityType::Underlay(e) => e,
            EntityType::Viewport(e) => e,
            EntityType::PolyfaceMesh(e) => e,
            EntityType::Solid3D(e) => e,
        }
    }

    pub fn common(&self) -> &EntityCommon {
        self.as_entity().common()
    }

    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    pub fn entity_type(&self) -> &'static str {
        self.as_entity().entity_type()
    }
}
