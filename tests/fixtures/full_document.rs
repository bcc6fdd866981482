// Generated by acadgen 0.1.0
// Source: full_document.dxf
// Generated at: 2024-05-01 12:00:00

use acadgen::entities::*;
use acadgen::objects::*;
use acadgen::tables::*;
use acadgen::types::*;
use acadgen::{CadDocument, Result};

pub struct DrawingFactory;

impl DrawingFactory {
    pub fn create_document() -> Result<CadDocument> {
        let mut doc = CadDocument::new();

        // Application ids
        let appid_acadgen = AppId::new("ACADGEN");
        doc.app_ids.add(appid_acadgen)?;

        // Line types
        let mut linetype_dashed = LineType::new("DASHED");
        linetype_dashed.elements = vec![LineTypeElement::new(0.5), LineTypeElement::new(-0.25)];
        doc.line_types.add(linetype_dashed.clone())?;

        // Text styles
        let mut textstyle_notes = TextStyle::new("Notes");
        textstyle_notes.font_file = "arial.ttf".to_string();
        doc.text_styles.add(textstyle_notes.clone())?;

        // Shape styles
        let shape_style_gdt = TextStyle::shape("GDT");
        doc.text_styles.add(shape_style_gdt.clone())?;

        // Layers
        let mut layer_0 = Layer::new("0");
        layer_0.color = Color::BLUE;
        doc.layers.replace(layer_0)?;

        let mut layer_walls = Layer::new("Walls");
        layer_walls.color = Color::RED;
        layer_walls.line_type = linetype_dashed.name.clone();
        doc.layers.add(layer_walls.clone())?;

        // Dimension styles
        let mut dimstyle_arch = DimStyle::new("Arch");
        dimstyle_arch.text_style = textstyle_notes.name.clone();
        doc.dim_styles.add(dimstyle_arch.clone())?;

        // User coordinate systems
        let mut ucs_tilted = Ucs::new("Tilted");
        ucs_tilted.origin = Vector3::new(1.0, 2.0, 0.0);
        doc.ucss.add(ucs_tilted)?;

        // Viewport configurations
        let mut vport_detail = VPort::new("Detail");
        vport_detail.grid_on = true;
        doc.vports.add(vport_detail)?;

        // Multiline styles
        let mut mlinestyle_double = MLineStyle::new("Double");
        mlinestyle_double.description = "Two lines".to_string();
        doc.add_object(ObjectType::MLineStyle(mlinestyle_double.clone()))?;

        // Blocks
        let mut block_a = BlockRecord::new("A");
        doc.block_records.add(block_a.clone())?;

        let mut block_b = BlockRecord::new("B");
        let insert_1 = Insert::new(block_a.name.clone(), Vector3::UNIT_X);
        block_b.entities.push(EntityType::Insert(insert_1));
        doc.block_records.add(block_b.clone())?;

        let insert_2 = Insert::new(block_b.name.clone(), Vector3::ZERO);
        block_a.entities.push(EntityType::Insert(insert_2));
        doc.block_records.replace(block_a.clone())?;

        // Image definitions
        let image_def_site = ImageDefinition::new("images/site.png");
        let image_def_site_handle = doc.add_object(ObjectType::ImageDefinition(image_def_site))?;

        // Underlay definitions
        let underlay_def_base = UnderlayDefinition::new(UnderlayType::Pdf, "plans/base.pdf");
        let underlay_def_base_handle = doc.add_object(ObjectType::UnderlayDefinition(underlay_def_base))?;

        // Entities
        let point_1 = Point::new(Vector3::new(1.0, 1.0, 0.0));
        doc.add_entity(EntityType::Point(point_1))?;

        let mut line_1 = Line::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        line_1.common.layer = layer_walls.name.clone();
        let line_1_handle = doc.add_entity(EntityType::Line(line_1))?;

        let circle_1 = Circle::new(Vector3::new(5.0, 5.0, 0.0), 2.5);
        let circle_1_handle = doc.add_entity(EntityType::Circle(circle_1))?;

        let arc_1 = Arc::new(Vector3::ZERO, 3.0, 0.0, 1.5);
        doc.add_entity(EntityType::Arc(arc_1))?;

        let ellipse_1 = Ellipse::new(Vector3::ZERO, Vector3::new(4.0, 0.0, 0.0), 0.5);
        doc.add_entity(EntityType::Ellipse(ellipse_1))?;

        let mut lwpolyline_1 = LwPolyline::new();
        lwpolyline_1.vertices = vec![LwVertex::new(Vector2::ZERO), LwVertex::with_bulge(Vector2::new(2.0, 0.0), 0.5)];
        lwpolyline_1.is_closed = true;
        doc.add_entity(EntityType::LwPolyline(lwpolyline_1))?;

        let mut polyline2d_1 = Polyline2D::new();
        polyline2d_1.vertices = vec![Vertex2D::new(Vector3::ZERO), Vertex2D::new(Vector3::UNIT_Y)];
        doc.add_entity(EntityType::Polyline2D(polyline2d_1))?;

        let mut polyline3d_1 = Polyline3D::new();
        polyline3d_1.vertices = vec![Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0)];
        doc.add_entity(EntityType::Polyline3D(polyline3d_1))?;

        let mut spline_1 = Spline::new();
        spline_1.degree = 2;
        spline_1.control_points = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::new(2.0, 1.0, 0.0)];
        doc.add_entity(EntityType::Spline(spline_1))?;

        let mut text_1 = Text::new("Hello", Vector3::new(0.0, -2.0, 0.0), 0.5);
        text_1.style = textstyle_notes.name.clone();
        doc.add_entity(EntityType::Text(text_1))?;

        let mut mtext_1 = MText::new("Line one\nLine two", Vector3::new(0.0, -4.0, 0.0), 0.25);
        mtext_1.rectangle_width = 8.0;
        doc.add_entity(EntityType::MText(mtext_1))?;

        let solid_1 = Solid::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::new(1.0, 1.0, 0.0));
        doc.add_entity(EntityType::Solid(solid_1))?;

        let face3d_1 = Face3D::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::new(1.0, 1.0, 1.0), Vector3::UNIT_Z);
        doc.add_entity(EntityType::Face3D(face3d_1))?;

        let ray_1 = Ray::new(Vector3::ZERO, Vector3::UNIT_X);
        doc.add_entity(EntityType::Ray(ray_1))?;

        let xline_1 = XLine::new(Vector3::new(0.0, 5.0, 0.0), Vector3::UNIT_Y);
        doc.add_entity(EntityType::XLine(xline_1))?;

        let mut insert_3 = Insert::new(block_a.name.clone(), Vector3::new(20.0, 0.0, 0.0));
        insert_3.x_scale = 2.0;
        insert_3.y_scale = 2.0;
        insert_3.z_scale = 2.0;
        doc.add_entity(EntityType::Insert(insert_3))?;

        let mut attdef_1 = AttributeDefinition::new("TAG", Vector3::ZERO, 0.2);
        attdef_1.prompt = "Enter tag".to_string();
        doc.add_entity(EntityType::AttributeDefinition(attdef_1))?;

        let mut dimension_1 = Dimension::new(DimensionType::Linear);
        dimension_1.style = dimstyle_arch.name.clone();
        dimension_1.second_point = Vector3::new(10.0, 0.0, 0.0);
        dimension_1.measurement = 10.0;
        doc.add_entity(EntityType::Dimension(dimension_1))?;

        let mut hatch_1 = Hatch::new("SOLID");
        hatch_1.solid_fill = true;
        hatch_1.boundaries = vec![HatchBoundary::new(vec![Vector2::ZERO, Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)])];
        doc.add_entity(EntityType::Hatch(hatch_1))?;

        let mut leader_1 = Leader::new();
        leader_1.vertices = vec![Vector3::ZERO, Vector3::new(2.0, 2.0, 0.0)];
        doc.add_entity(EntityType::Leader(leader_1))?;

        let mut multileader_1 = MultiLeader::new();
        multileader_1.text = "Note".to_string();
        doc.add_entity(EntityType::MultiLeader(multileader_1))?;

        let mut mline_1 = MLine::new();
        mline_1.style_name = mlinestyle_double.name.clone();
        mline_1.vertices = vec![Vector3::ZERO, Vector3::new(5.0, 0.0, 0.0)];
        doc.add_entity(EntityType::MLine(mline_1))?;

        let mut mesh_1 = Mesh::new();
        mesh_1.vertices = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y];
        mesh_1.faces = vec![MeshFace::new(vec![0, 1, 2])];
        doc.add_entity(EntityType::Mesh(mesh_1))?;

        let mut image_1 = RasterImage::new(Vector3::new(0.0, 10.0, 0.0));
        image_1.definition = image_def_site_handle;
        doc.add_entity(EntityType::RasterImage(image_1))?;

        let tolerance_1 = Tolerance::new("{\\Fgdt;j}%%v0.1", Vector3::ZERO);
        doc.add_entity(EntityType::Tolerance(tolerance_1))?;

        let wipeout_1 = Wipeout::new(Vector3::new(3.0, 3.0, 0.0));
        doc.add_entity(EntityType::Wipeout(wipeout_1))?;

        let mut shape_1 = Shape::new("BOX", Vector3::new(4.0, 4.0, 0.0), 1.0);
        shape_1.style = shape_style_gdt.name.clone();
        doc.add_entity(EntityType::Shape(shape_1))?;

        let mut underlay_1 = Underlay::new(Vector3::new(0.0, 20.0, 0.0));
        underlay_1.definition = underlay_def_base_handle;
        doc.add_entity(EntityType::Underlay(underlay_1))?;

        let viewport_1 = Viewport::new(Vector3::new(5.0, 5.0, 0.0), 10.0, 7.5);
        doc.add_entity(EntityType::Viewport(viewport_1))?;

        let mut polyface_1 = PolyfaceMesh::new();
        polyface_1.vertices = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y];
        polyface_1.faces = vec![PolyfaceFace::new(1, 2, 3, 0)];
        doc.add_entity(EntityType::PolyfaceMesh(polyface_1))?;

        // Groups
        let mut group_walls = Group::new("Walls");
        group_walls.entities = vec![line_1_handle, circle_1_handle];
        doc.add_object(ObjectType::Group(group_walls))?;

        // Layouts
        let mut layout_sheet1 = Layout::new("Sheet1");
        layout_sheet1.tab_order = 2;
        doc.add_object(ObjectType::Layout(layout_sheet1))?;

        // Raster variables
        let mut raster_variables_1 = RasterVariables::new();
        raster_variables_1.display_frame = false;
        doc.add_object(ObjectType::RasterVariables(raster_variables_1))?;

        // Plot settings
        let mut plot_settings_plot_a3 = PlotSettings::new("Plot A3");
        plot_settings_plot_a3.paper_size = "A3".to_string();
        doc.add_object(ObjectType::PlotSettings(plot_settings_plot_a3))?;

        // Layer states
        let mut layer_state_plot = LayerState::new("Plot");
        layer_state_plot.entries = vec![LayerStateEntry::with_settings(layer_walls.name.clone(), LayerFlags::empty(), Color::RED, linetype_dashed.name.clone(), LineWeight::Default)];
        doc.add_object(ObjectType::LayerState(layer_state_plot))?;

        Ok(doc)
    }
}
