//! Generation scope: which constructs to emit and how to shape the program

use super::kind::ConstructKind;

/// Per-table toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableScope {
    pub layers: bool,
    pub line_types: bool,
    pub text_styles: bool,
    pub blocks: bool,
    pub dim_styles: bool,
    /// Multiline styles; also gated by [`ObjectScope::mline_styles`]
    pub mline_styles: bool,
    pub ucs: bool,
    pub vports: bool,
    pub app_ids: bool,
    /// Text styles flagged as shape files
    pub shape_styles: bool,
}

impl TableScope {
    pub fn all(enabled: bool) -> Self {
        TableScope {
            layers: enabled,
            line_types: enabled,
            text_styles: enabled,
            blocks: enabled,
            dim_styles: enabled,
            mline_styles: enabled,
            ucs: enabled,
            vports: enabled,
            app_ids: enabled,
            shape_styles: enabled,
        }
    }
}

impl Default for TableScope {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Per-object toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectScope {
    pub groups: bool,
    pub layouts: bool,
    pub image_definitions: bool,
    pub underlay_definitions: bool,
    /// Extension records
    pub xrecords: bool,
    /// Generic dictionaries
    pub dictionaries: bool,
    pub raster_variables: bool,
    pub layer_states: bool,
    pub plot_settings: bool,
    pub mline_styles: bool,
}

impl ObjectScope {
    pub fn all(enabled: bool) -> Self {
        ObjectScope {
            groups: enabled,
            layouts: enabled,
            image_definitions: enabled,
            underlay_definitions: enabled,
            xrecords: enabled,
            dictionaries: enabled,
            raster_variables: enabled,
            layer_states: enabled,
            plot_settings: enabled,
            mline_styles: enabled,
        }
    }
}

impl Default for ObjectScope {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Per-entity toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityScope {
    pub points: bool,
    pub lines: bool,
    pub circles: bool,
    pub arcs: bool,
    pub ellipses: bool,
    pub lw_polylines: bool,
    pub polylines_2d: bool,
    pub polylines_3d: bool,
    pub splines: bool,
    pub texts: bool,
    pub mtexts: bool,
    pub solids: bool,
    pub faces_3d: bool,
    pub rays: bool,
    pub xlines: bool,
    pub inserts: bool,
    pub attribute_definitions: bool,
    pub dimensions: bool,
    pub hatches: bool,
    pub leaders: bool,
    pub multileaders: bool,
    pub mlines: bool,
    pub meshes: bool,
    pub raster_images: bool,
    pub tolerances: bool,
    pub wipeouts: bool,
    pub shapes: bool,
    pub underlays: bool,
    pub viewports: bool,
    pub polyface_meshes: bool,
    /// ACIS solids, emitted as placeholder comments
    pub solids_3d: bool,
}

impl EntityScope {
    pub fn all(enabled: bool) -> Self {
        EntityScope {
            points: enabled,
            lines: enabled,
            circles: enabled,
            arcs: enabled,
            ellipses: enabled,
            lw_polylines: enabled,
            polylines_2d: enabled,
            polylines_3d: enabled,
            splines: enabled,
            texts: enabled,
            mtexts: enabled,
            solids: enabled,
            faces_3d: enabled,
            rays: enabled,
            xlines: enabled,
            inserts: enabled,
            attribute_definitions: enabled,
            dimensions: enabled,
            hatches: enabled,
            leaders: enabled,
            multileaders: enabled,
            mlines: enabled,
            meshes: enabled,
            raster_images: enabled,
            tolerances: enabled,
            wipeouts: enabled,
            shapes: enabled,
            underlays: enabled,
            viewports: enabled,
            polyface_meshes: enabled,
            solids_3d: enabled,
        }
    }
}

impl Default for EntityScope {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Everything that decides the content and shape of a generated program
///
/// All categories are enabled by default. The value is built once, passed
/// by reference into each generation call and never mutated there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfiguration {
    pub tables: TableScope,
    pub objects: ObjectScope,
    pub entities: EntityScope,

    /// Emit the leading "Generated by" comment
    pub header_comment: bool,
    /// Emit header variable assignments
    pub header_variables: bool,
    /// Emit `use` declarations
    pub imports: bool,
    /// Explain unsupported constructs in full instead of a one-line marker
    pub detailed_comments: bool,
    /// Emit a commented-out save call
    pub save_comment: bool,
    /// End the body with `Ok(doc)`
    pub return_statement: bool,
    /// Wrap the body in a struct with a `create_document` function
    pub class_wrapper: bool,
    /// Regroup entities by kind, one section per kind
    pub group_by_type: bool,
    /// Keep only table entries that emitted constructs reference
    pub only_used_tables: bool,
    /// Name of the wrapper struct
    pub class_name: String,
    /// Module wrapping the generated struct
    pub namespace: Option<String>,
}

impl Default for ScopeConfiguration {
    fn default() -> Self {
        ScopeConfiguration {
            tables: TableScope::default(),
            objects: ObjectScope::default(),
            entities: EntityScope::default(),
            header_comment: true,
            header_variables: true,
            imports: true,
            detailed_comments: true,
            save_comment: false,
            return_statement: true,
            class_wrapper: true,
            group_by_type: false,
            only_used_tables: false,
            class_name: "DrawingFactory".to_string(),
            namespace: None,
        }
    }
}

impl ScopeConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(mut self, tables: TableScope) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_objects(mut self, objects: ObjectScope) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_entities(mut self, entities: EntityScope) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_header_comment(mut self, enabled: bool) -> Self {
        self.header_comment = enabled;
        self
    }

    pub fn with_header_variables(mut self, enabled: bool) -> Self {
        self.header_variables = enabled;
        self
    }

    pub fn with_imports(mut self, enabled: bool) -> Self {
        self.imports = enabled;
        self
    }

    pub fn with_detailed_comments(mut self, enabled: bool) -> Self {
        self.detailed_comments = enabled;
        self
    }

    pub fn with_save_comment(mut self, enabled: bool) -> Self {
        self.save_comment = enabled;
        self
    }

    pub fn with_return_statement(mut self, enabled: bool) -> Self {
        self.return_statement = enabled;
        self
    }

    pub fn with_class_wrapper(mut self, enabled: bool) -> Self {
        self.class_wrapper = enabled;
        self
    }

    pub fn with_group_by_type(mut self, enabled: bool) -> Self {
        self.group_by_type = enabled;
        self
    }

    pub fn with_only_used_tables(mut self, enabled: bool) -> Self {
        self.only_used_tables = enabled;
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Is this kind of construct enabled at all?
    pub fn includes(&self, kind: ConstructKind) -> bool {
        use ConstructKind as K;
        let (t, o, e) = (&self.tables, &self.objects, &self.entities);
        match kind {
            K::Header => self.header_variables,
            K::AppId => t.app_ids,
            K::LineType => t.line_types,
            K::TextStyle => t.text_styles,
            K::ShapeStyle => t.shape_styles,
            K::Layer => t.layers,
            K::DimStyle => t.dim_styles,
            K::Ucs => t.ucs,
            K::VPort => t.vports,
            K::MLineStyle => t.mline_styles && o.mline_styles,
            K::Block => t.blocks,
            K::ImageDefinition => o.image_definitions,
            K::UnderlayDefinition => o.underlay_definitions,
            K::Point => e.points,
            K::Line => e.lines,
            K::Circle => e.circles,
            K::Arc => e.arcs,
            K::Ellipse => e.ellipses,
            K::LwPolyline => e.lw_polylines,
            K::Polyline2D => e.polylines_2d,
            K::Polyline3D => e.polylines_3d,
            K::Spline => e.splines,
            K::Text => e.texts,
            K::MText => e.mtexts,
            K::Solid => e.solids,
            K::Face3D => e.faces_3d,
            K::Ray => e.rays,
            K::XLine => e.xlines,
            K::Insert => e.inserts,
            K::AttributeDefinition => e.attribute_definitions,
            K::Dimension => e.dimensions,
            K::Hatch => e.hatches,
            K::Leader => e.leaders,
            K::MultiLeader => e.multileaders,
            K::MLine => e.mlines,
            K::Mesh => e.meshes,
            K::RasterImage => e.raster_images,
            K::Tolerance => e.tolerances,
            K::Wipeout => e.wipeouts,
            K::Shape => e.shapes,
            K::Underlay => e.underlays,
            K::Viewport => e.viewports,
            K::PolyfaceMesh => e.polyface_meshes,
            K::Solid3D => e.solids_3d,
            K::Group => o.groups,
            K::Layout => o.layouts,
            K::RasterVariables => o.raster_variables,
            K::PlotSettings => o.plot_settings,
            K::LayerState => o.layer_states,
            K::XRecord => o.xrecords,
            K::Dictionary => o.dictionaries,
        }
    }

    /// Path of the wrapper struct, including the namespace
    pub fn type_path(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}::{}", ns, self.class_name),
            None => self.class_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let scope = ScopeConfiguration::default();
        assert!(ConstructKind::ALL.iter().all(|k| scope.includes(*k)));
        assert!(scope.class_wrapper);
        assert!(scope.return_statement);
        assert!(!scope.save_comment);
        assert_eq!(scope.class_name, "DrawingFactory");
    }

    #[test]
    fn test_mline_styles_need_both_toggles() {
        let mut tables = TableScope::default();
        tables.mline_styles = false;
        let scope = ScopeConfiguration::new().with_tables(tables);
        assert!(!scope.includes(ConstructKind::MLineStyle));

        let mut objects = ObjectScope::default();
        objects.mline_styles = false;
        let scope = ScopeConfiguration::new().with_objects(objects);
        assert!(!scope.includes(ConstructKind::MLineStyle));
    }

    #[test]
    fn test_type_path() {
        let scope = ScopeConfiguration::new()
            .with_class_name("Plan")
            .with_namespace("drawings");
        assert_eq!(scope.type_path(), "drawings::Plan");
    }
}
