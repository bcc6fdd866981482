//! Model types described as a constructor call plus assignable properties
//!
//! Each model type implements [`Construct`]. The generator never inspects
//! model fields directly; it works from the constructor and property lists
//! returned here, so the same description drives elision, reference
//! discovery, emission and document comparison.

mod entities;
mod header;
mod objects;
mod tables;

use super::kind::ConstructKind;
use super::value::{Constructor, Module, Property, TableRef, Value};
use crate::entities::{EntityCommon, EntityType};
use crate::objects::ObjectType;

/// A document construct the generator can reproduce
pub trait Construct {
    fn kind(&self) -> ConstructKind;

    /// Call creating the construct before any property is assigned
    fn constructor(&self) -> Constructor;

    /// Every assignable property, in declaration order
    ///
    /// Values already passed to the constructor are not repeated.
    fn properties(&self) -> Vec<Property>;

    /// Entry name for named constructs
    fn name(&self) -> Option<&str> {
        None
    }

    /// Owned entities, for blocks
    fn children(&self) -> &[EntityType] {
        &[]
    }
}

/// Properties every entity carries
pub(crate) fn common_properties(common: &EntityCommon) -> Vec<Property> {
    vec![
        Property::new(
            "common.layer",
            Value::name_ref(TableRef::Layer, common.layer.clone()),
        ),
        Property::new(
            "common.line_type",
            Value::name_ref(TableRef::LineType, common.line_type.clone()),
        ),
        Property::new("common.color", Value::Color(common.color)),
        Property::new("common.line_weight", Value::LineWeight(common.line_weight)),
        Property::new(
            "common.transparency",
            Value::Transparency(common.transparency),
        ),
        Property::new("common.line_type_scale", Value::Double(common.line_type_scale)),
        Property::new("common.invisible", Value::Bool(common.invisible)),
    ]
}

pub(crate) fn enum_value<T: std::fmt::Debug>(
    module: Module,
    type_name: &'static str,
    value: &T,
) -> Value {
    Value::enumeration(module, type_name, value)
}

macro_rules! dispatch {
    ($value:expr, $enum:ident, $inner:ident => $body:expr, [$($variant:ident),* $(,)?]) => {
        match $value {
            $($enum::$variant($inner) => $body,)*
        }
    };
}

macro_rules! dispatch_entity {
    ($value:expr, $inner:ident => $body:expr) => {
        dispatch!($value, EntityType, $inner => $body, [
            Point, Line, Circle, Arc, Ellipse, LwPolyline, Polyline2D, Polyline3D, Spline,
            Text, MText, Solid, Face3D, Ray, XLine, Insert, AttributeDefinition, Dimension,
            Hatch, Leader, MultiLeader, MLine, Mesh, RasterImage, Tolerance, Wipeout, Shape,
            Underlay, Viewport, PolyfaceMesh, Solid3D,
        ])
    };
}

macro_rules! dispatch_object {
    ($value:expr, $inner:ident => $body:expr) => {
        dispatch!($value, ObjectType, $inner => $body, [
            Group, Layout, ImageDefinition, UnderlayDefinition, XRecord, Dictionary,
            RasterVariables, LayerState, PlotSettings, MLineStyle,
        ])
    };
}

impl Construct for EntityType {
    fn kind(&self) -> ConstructKind {
        dispatch_entity!(self, e => e.kind())
    }

    fn constructor(&self) -> Constructor {
        dispatch_entity!(self, e => e.constructor())
    }

    fn properties(&self) -> Vec<Property> {
        dispatch_entity!(self, e => e.properties())
    }
}

impl Construct for ObjectType {
    fn kind(&self) -> ConstructKind {
        dispatch_object!(self, o => o.kind())
    }

    fn constructor(&self) -> Constructor {
        dispatch_object!(self, o => o.constructor())
    }

    fn properties(&self) -> Vec<Property> {
        dispatch_object!(self, o => o.properties())
    }

    fn name(&self) -> Option<&str> {
        dispatch_object!(self, o => o.name())
    }
}
