//! CAD document structure

use crate::entities::EntityType;
use crate::objects::ObjectType;
use crate::tables::*;
use crate::types::{
    AngularUnitFormat, Color, DrawingUnits, Duration, Handle, LineWeight, LinearUnitFormat,
    MeasurementSystem, NaiveDateTime, Vector2, Vector3,
};
use crate::Result;
use indexmap::IndexMap;

/// Drawing header variables
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderVariables {
    // ==================== Drawing Mode Flags ====================
    /// ORTHOMODE - Orthogonal mode on/off
    pub ortho_mode: bool,
    /// FILLMODE - Fill mode for solids/hatches
    pub fill_mode: bool,
    /// QTEXTMODE - Quick text mode (boxes instead of text)
    pub quick_text_mode: bool,
    /// MIRRTEXT - Mirror text on/off
    pub mirror_text: bool,
    /// LIMCHECK - Limits checking on/off
    pub limit_check: bool,
    /// PSLTSCALE - Paper space line type scaling
    pub paper_space_linetype_scaling: bool,
    /// TILEMODE - Show model space
    pub show_model_space: bool,
    /// LWDISPLAY - Lineweight display on/off
    pub lineweight_display: bool,

    // ==================== Unit Settings ====================
    /// INSUNITS - Insertion units
    pub insertion_units: DrawingUnits,
    /// LUNITS - Linear units format
    pub linear_unit_format: LinearUnitFormat,
    /// LUPREC - Linear unit precision (0-8)
    pub linear_unit_precision: i16,
    /// AUNITS - Angular units format
    pub angular_unit_format: AngularUnitFormat,
    /// AUPREC - Angular unit precision (0-8)
    pub angular_unit_precision: i16,
    /// MEASUREMENT - Imperial or metric
    pub measurement: MeasurementSystem,
    /// ANGBASE - Base angle
    pub angle_base: f64,
    /// ANGDIR - Angles increase clockwise
    pub angle_clockwise: bool,
    /// PDMODE - Point display mode
    pub point_display_mode: i16,
    /// PDSIZE - Point display size
    pub point_display_size: f64,

    // ==================== Scales and Sizes ====================
    /// LTSCALE - Global linetype scale
    pub linetype_scale: f64,
    /// TEXTSIZE - Default text height
    pub text_height: f64,
    /// TRACEWID - Default trace width
    pub trace_width: f64,
    /// THICKNESS - Default thickness
    pub thickness: f64,
    /// ELEVATION - Current elevation
    pub elevation: f64,
    /// FILLETRAD - Fillet radius
    pub fillet_radius: f64,
    /// PLINEWID - Default polyline width
    pub polyline_width: f64,

    // ==================== Current Settings ====================
    /// CLAYER - Current layer name
    pub current_layer: String,
    /// CELTYPE - Current line type name
    pub current_linetype: String,
    /// TEXTSTYLE - Current text style name
    pub current_text_style: String,
    /// DIMSTYLE - Current dimension style name
    pub current_dim_style: String,
    /// CMLSTYLE - Current multiline style name
    pub current_mline_style: String,
    /// CECOLOR - Current entity color
    pub current_entity_color: Color,
    /// CELWEIGHT - Current line weight
    pub current_line_weight: LineWeight,
    /// CELTSCALE - Current entity linetype scale
    pub current_entity_linetype_scale: f64,

    // ==================== Dimension Defaults ====================
    /// DIMSCALE - Overall dimension scale factor
    pub dim_scale: f64,
    /// DIMASZ - Dimension arrow size
    pub dim_arrow_size: f64,
    /// DIMTXT - Dimension text height
    pub dim_text_height: f64,
    /// DIMDEC - Decimal places
    pub dim_decimal_places: i16,

    // ==================== Extents and Limits ====================
    /// INSBASE - Model space insertion base point
    pub insertion_base: Vector3,
    /// EXTMIN - Model space extents min
    pub extents_min: Vector3,
    /// EXTMAX - Model space extents max
    pub extents_max: Vector3,
    /// LIMMIN - Model space limits min
    pub limits_min: Vector2,
    /// LIMMAX - Model space limits max
    pub limits_max: Vector2,

    // ==================== Timestamps ====================
    /// TDCREATE - Creation time
    pub create_date: NaiveDateTime,
    /// TDUPDATE - Last update time
    pub update_date: NaiveDateTime,
    /// TDINDWG - Total editing time
    pub total_editing_time: Duration,
    /// TDUSRTIMER - User elapsed timer
    pub user_elapsed_time: Duration,

    /// PROJECTNAME - Project name
    pub project_name: String,
}

impl Default for HeaderVariables {
    fn default() -> Self {
        Self {
            ortho_mode: false,
            fill_mode: true,
            quick_text_mode: false,
            mirror_text: false,
            limit_check: false,
            paper_space_linetype_scaling: true,
            show_model_space: true,
            lineweight_display: false,

            insertion_units: DrawingUnits::Unitless,
            linear_unit_format: LinearUnitFormat::Decimal,
            linear_unit_precision: 4,
            angular_unit_format: AngularUnitFormat::DecimalDegrees,
            angular_unit_precision: 0,
            measurement: MeasurementSystem::Imperial,
            angle_base: 0.0,
            angle_clockwise: false,
            point_display_mode: 0,
            point_display_size: 0.0,

            linetype_scale: 1.0,
            text_height: 2.5,
            trace_width: 0.05,
            thickness: 0.0,
            elevation: 0.0,
            fillet_radius: 0.0,
            polyline_width: 0.0,

            current_layer: "0".to_string(),
            current_linetype: "ByLayer".to_string(),
            current_text_style: "Standard".to_string(),
            current_dim_style: "Standard".to_string(),
            current_mline_style: "Standard".to_string(),
            current_entity_color: Color::ByLayer,
            current_line_weight: LineWeight::ByLayer,
            current_entity_linetype_scale: 1.0,

            dim_scale: 1.0,
            dim_arrow_size: 0.18,
            dim_text_height: 0.18,
            dim_decimal_places: 4,

            insertion_base: Vector3::ZERO,
            extents_min: Vector3::ZERO,
            extents_max: Vector3::ZERO,
            limits_min: Vector2::ZERO,
            limits_max: Vector2::new(12.0, 9.0),

            create_date: NaiveDateTime::default(),
            update_date: NaiveDateTime::default(),
            total_editing_time: Duration::zero(),
            user_elapsed_time: Duration::zero(),

            project_name: String::new(),
        }
    }
}

/// A CAD document containing all drawing data
#[derive(Debug, Clone, PartialEq)]
pub struct CadDocument {
    /// Header variables containing drawing settings
    pub header: HeaderVariables,

    /// Layer table
    pub layers: Table<Layer>,

    /// Line type table
    pub line_types: Table<LineType>,

    /// Text style table, shape files included
    pub text_styles: Table<TextStyle>,

    /// Block record table
    pub block_records: Table<BlockRecord>,

    /// Dimension style table
    pub dim_styles: Table<DimStyle>,

    /// Application ID table
    pub app_ids: Table<AppId>,

    /// Viewport table
    pub vports: Table<VPort>,

    /// UCS table
    pub ucss: Table<Ucs>,

    /// Model space entities in insertion order (indexed by handle)
    entities: IndexMap<Handle, EntityType>,

    /// Objects in insertion order (indexed by handle)
    objects: IndexMap<Handle, ObjectType>,

    /// Next handle to assign
    next_handle: u64,
}

impl CadDocument {
    /// Create a new document holding only the standard table entries
    pub fn new() -> Self {
        let mut doc = CadDocument {
            header: HeaderVariables::default(),
            layers: Table::new(),
            line_types: Table::new(),
            text_styles: Table::new(),
            block_records: Table::new(),
            dim_styles: Table::new(),
            app_ids: Table::new(),
            vports: Table::new(),
            ucss: Table::new(),
            entities: IndexMap::new(),
            objects: IndexMap::new(),
            // Handles below 0x10 are reserved for table controls
            next_handle: 0x10,
        };

        doc.initialize_defaults();
        doc
    }

    /// Initialize default tables with standard entries
    fn initialize_defaults(&mut self) {
        let _ = self.layers.add(Layer::layer_0());

        let _ = self.line_types.add(LineType::by_block());
        let _ = self.line_types.add(LineType::by_layer());
        let _ = self.line_types.add(LineType::continuous());

        let _ = self.text_styles.add(TextStyle::standard());

        let _ = self.block_records.add(BlockRecord::model_space());
        let _ = self.block_records.add(BlockRecord::paper_space());

        let _ = self.dim_styles.add(DimStyle::standard());

        let _ = self.app_ids.add(AppId::acad());

        let _ = self.vports.add(VPort::active());
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Add an entity to model space and return its handle
    ///
    /// Entities arriving without a handle get a freshly allocated one.
    pub fn add_entity(&mut self, mut entity: EntityType) -> Result<Handle> {
        let handle = match entity.handle() {
            h if h.is_null() => {
                let h = self.allocate_handle();
                entity.as_entity_mut().set_handle(h);
                h
            }
            h => {
                if self.entities.contains_key(&h) || self.objects.contains_key(&h) {
                    return Err(crate::CadError::InvalidHandle(h.value()));
                }
                self.next_handle = self.next_handle.max(h.value() + 1);
                h
            }
        };

        self.entities.insert(handle, entity);
        Ok(handle)
    }

    /// Add an object and return its handle
    pub fn add_object(&mut self, mut object: ObjectType) -> Result<Handle> {
        let handle = match object.handle() {
            h if h.is_null() => {
                let h = self.allocate_handle();
                object.set_handle(h);
                h
            }
            h => {
                if self.entities.contains_key(&h) || self.objects.contains_key(&h) {
                    return Err(crate::CadError::InvalidHandle(h.value()));
                }
                self.next_handle = self.next_handle.max(h.value() + 1);
                h
            }
        };

        self.objects.insert(handle, object);
        Ok(handle)
    }

    /// Get an entity by handle
    pub fn get_entity(&self, handle: Handle) -> Option<&EntityType> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle
    pub fn get_entity_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.entities.get_mut(&handle)
    }

    /// Remove an entity by handle, keeping the order of the others
    pub fn remove_entity(&mut self, handle: Handle) -> Option<EntityType> {
        self.entities.shift_remove(&handle)
    }

    /// Position of an entity in insertion order
    pub fn entity_index(&self, handle: Handle) -> Option<usize> {
        self.entities.get_index_of(&handle)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    /// Get an object by handle
    pub fn get_object(&self, handle: Handle) -> Option<&ObjectType> {
        self.objects.get(&handle)
    }

    pub fn get_object_mut(&mut self, handle: Handle) -> Option<&mut ObjectType> {
        self.objects.get_mut(&handle)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects.values()
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}
