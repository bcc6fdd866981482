//! Test document builders.
//!
//! `scenario_*` builders match the fixtures under `tests/fixtures/`;
//! `create_mixed_document()` exercises references across every category.

#![allow(dead_code)]

use acadgen::entities::*;
use acadgen::objects::*;
use acadgen::tables::*;
use acadgen::types::{Color, LineWeight, Vector2, Vector3};
use acadgen::CadDocument;

/// Two user layers and one line on each; L2 is red.
pub fn scenario_a() -> CadDocument {
    let mut doc = CadDocument::new();
    doc.layers.add(Layer::new("L1")).unwrap();
    doc.layers.add(Layer::with_color("L2", Color::RED)).unwrap();
    doc.add_entity(EntityType::Line(Line::on_layer(
        "L1",
        Vector3::ZERO,
        Vector3::new(10.0, 0.0, 0.0),
    )))
    .unwrap();
    doc.add_entity(EntityType::Line(Line::on_layer(
        "L2",
        Vector3::new(0.0, 5.0, 0.0),
        Vector3::new(10.0, 5.0, 0.0),
    )))
    .unwrap();
    doc
}

/// Header untouched, one circle so the body is not empty.
pub fn scenario_b() -> CadDocument {
    let mut doc = CadDocument::new();
    doc.add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, 3.0)))
        .unwrap();
    doc
}

/// Raster variables with only the frame switched off.
pub fn scenario_c() -> CadDocument {
    let mut doc = CadDocument::new();
    let mut raster = RasterVariables::new();
    raster.display_frame = false;
    doc.add_object(ObjectType::RasterVariables(raster)).unwrap();
    doc
}

/// Two blocks inserting each other.
pub fn block_cycle() -> CadDocument {
    let mut doc = CadDocument::new();
    let mut a = BlockRecord::new("A");
    a.entities
        .push(EntityType::Insert(Insert::new("B", Vector3::ZERO)));
    let mut b = BlockRecord::new("B");
    b.entities
        .push(EntityType::Insert(Insert::new("A", Vector3::UNIT_X)));
    doc.block_records.add(a).unwrap();
    doc.block_records.add(b).unwrap();
    doc
}

/// Two groups holding each other's handle.
pub fn group_cycle() -> CadDocument {
    let mut doc = CadDocument::new();
    let first = doc.allocate_handle();
    let second = doc.allocate_handle();

    let mut g1 = Group::new("G1");
    g1.handle = first;
    g1.add_entity(second);
    let mut g2 = Group::new("G2");
    g2.handle = second;
    g2.add_entity(first);

    doc.add_object(ObjectType::Group(g1)).unwrap();
    doc.add_object(ObjectType::Group(g2)).unwrap();
    doc
}

/// One construct of most kinds, linked through layers, styles, blocks and
/// handles. Entities are added before the tables they use on purpose.
pub fn create_mixed_document() -> CadDocument {
    let mut doc = CadDocument::new();

    doc.header.linetype_scale = 2.5;
    doc.header.fill_mode = false;

    // Entities first; the generator must still emit their styles earlier
    let mut text = Text::new("Title", Vector3::new(0.0, 20.0, 0.0), 2.5);
    text.style = "Notes".to_string();
    text.common.layer = "Annotation".to_string();
    doc.add_entity(EntityType::Text(text)).unwrap();

    let mut circle = Circle::new(Vector3::new(5.0, 5.0, 0.0), 2.0);
    circle.common.layer = "Walls".to_string();
    circle.common.color = Color::from_rgb(10, 20, 30);
    circle.common.line_weight = LineWeight::W0_50;
    let circle_handle = doc.add_entity(EntityType::Circle(circle)).unwrap();

    doc.add_entity(EntityType::Insert(Insert::new("Door", Vector3::new(3.0, 0.0, 0.0))))
        .unwrap();

    let mut lw = LwPolyline::new();
    lw.add_point(Vector2::ZERO);
    lw.add_point(Vector2::new(4.0, 0.0));
    lw.add_point(Vector2::new(4.0, 3.0));
    lw.is_closed = true;
    lw.common.layer = "Walls".to_string();
    let lw_handle = doc.add_entity(EntityType::LwPolyline(lw)).unwrap();

    let definition = doc
        .add_object(ObjectType::ImageDefinition(ImageDefinition::new("plans/site.png")))
        .unwrap();
    let mut image = RasterImage::new(Vector3::new(50.0, 0.0, 0.0));
    image.definition = definition;
    doc.add_entity(EntityType::RasterImage(image)).unwrap();

    doc.add_entity(EntityType::Solid3D(Solid3D::new("400 0 1 0\nbody $-1 -1 $-1\n")))
        .unwrap();

    // Tables
    let mut dashed = LineType::new("Dashed");
    dashed.description = "__ __ __".to_string();
    dashed.add_element(0.5);
    dashed.add_element(-0.25);
    doc.line_types.add(dashed).unwrap();

    let mut notes = TextStyle::new("Notes");
    notes.font_file = "romans.shx".to_string();
    notes.width_factor = 0.8;
    doc.text_styles.add(notes).unwrap();

    let mut walls = Layer::with_color("Walls", Color::BLUE);
    walls.line_type = "Dashed".to_string();
    doc.layers.add(walls).unwrap();
    doc.layers.add(Layer::new("Annotation")).unwrap();
    doc.layers.add(Layer::new("Unused")).unwrap();

    let mut block = BlockRecord::new("Door");
    block
        .entities
        .push(EntityType::Line(Line::new(Vector3::ZERO, Vector3::UNIT_Y)));
    block
        .entities
        .push(EntityType::Arc(Arc::new(Vector3::ZERO, 1.0, 0.0, 90.0)));
    doc.block_records.add(block).unwrap();

    // Objects
    let mut group = Group::new("Outline");
    group.add_entity(circle_handle);
    group.add_entity(lw_handle);
    doc.add_object(ObjectType::Group(group)).unwrap();

    let mut record = XRecord::new("AppData");
    record.add(1, XRecordValue::String("v1".to_string()));
    doc.add_object(ObjectType::XRecord(record)).unwrap();

    doc
}

/// Every generatable kind once, with a two-block reference cycle.
///
/// Objects are added out of native order so the regenerated document
/// stores them in a different sequence. Matches `fixtures/full_document.rs`.
pub fn full_document() -> CadDocument {
    let mut doc = CadDocument::new();

    // Objects the entities point at, plus a few stored ahead of them
    let mut layout = Layout::new("Sheet1");
    layout.tab_order = 2;
    doc.add_object(ObjectType::Layout(layout)).unwrap();

    let mut page = PlotSettings::new("Plot A3");
    page.paper_size = "A3".to_string();
    doc.add_object(ObjectType::PlotSettings(page)).unwrap();

    let image_def = doc
        .add_object(ObjectType::ImageDefinition(ImageDefinition::new("images/site.png")))
        .unwrap();
    let underlay_def = doc
        .add_object(ObjectType::UnderlayDefinition(UnderlayDefinition::new(
            UnderlayType::Pdf,
            "plans/base.pdf",
        )))
        .unwrap();

    let mut double = MLineStyle::new("Double");
    double.description = "Two lines".to_string();
    doc.add_object(ObjectType::MLineStyle(double)).unwrap();

    // Tables
    doc.app_ids.add(AppId::new("ACADGEN")).unwrap();

    let mut dashed = LineType::new("DASHED");
    dashed.add_element(0.5);
    dashed.add_element(-0.25);
    doc.line_types.add(dashed).unwrap();

    let mut notes = TextStyle::new("Notes");
    notes.font_file = "arial.ttf".to_string();
    doc.text_styles.add(notes).unwrap();
    doc.text_styles.add(TextStyle::shape("GDT")).unwrap();

    doc.layers
        .replace(Layer::with_color("0", Color::BLUE))
        .unwrap();
    let mut walls = Layer::with_color("Walls", Color::RED);
    walls.line_type = "DASHED".to_string();
    doc.layers.add(walls).unwrap();

    let mut arch = DimStyle::new("Arch");
    arch.text_style = "Notes".to_string();
    doc.dim_styles.add(arch).unwrap();

    let mut tilted = Ucs::new("Tilted");
    tilted.origin = Vector3::new(1.0, 2.0, 0.0);
    doc.ucss.add(tilted).unwrap();

    let mut detail = VPort::new("Detail");
    detail.grid_on = true;
    doc.vports.add(detail).unwrap();

    let mut a = BlockRecord::new("A");
    a.entities
        .push(EntityType::Insert(Insert::new("B", Vector3::ZERO)));
    let mut b = BlockRecord::new("B");
    b.entities
        .push(EntityType::Insert(Insert::new("A", Vector3::UNIT_X)));
    doc.block_records.add(a).unwrap();
    doc.block_records.add(b).unwrap();

    // Entities, one per kind
    doc.add_entity(EntityType::Point(Point::new(Vector3::new(1.0, 1.0, 0.0))))
        .unwrap();
    let line = doc
        .add_entity(EntityType::Line(Line::on_layer(
            "Walls",
            Vector3::ZERO,
            Vector3::new(10.0, 0.0, 0.0),
        )))
        .unwrap();
    let circle = doc
        .add_entity(EntityType::Circle(Circle::new(Vector3::new(5.0, 5.0, 0.0), 2.5)))
        .unwrap();
    doc.add_entity(EntityType::Arc(Arc::new(Vector3::ZERO, 3.0, 0.0, 1.5)))
        .unwrap();
    doc.add_entity(EntityType::Ellipse(Ellipse::new(
        Vector3::ZERO,
        Vector3::new(4.0, 0.0, 0.0),
        0.5,
    )))
    .unwrap();

    let mut lw = LwPolyline::new();
    lw.vertices.push(LwVertex::new(Vector2::ZERO));
    lw.vertices.push(LwVertex::with_bulge(Vector2::new(2.0, 0.0), 0.5));
    lw.is_closed = true;
    doc.add_entity(EntityType::LwPolyline(lw)).unwrap();

    let mut pl2 = Polyline2D::new();
    pl2.vertices.push(Vertex2D::new(Vector3::ZERO));
    pl2.vertices.push(Vertex2D::new(Vector3::UNIT_Y));
    doc.add_entity(EntityType::Polyline2D(pl2)).unwrap();

    let mut pl3 = Polyline3D::new();
    pl3.vertices = vec![Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0)];
    doc.add_entity(EntityType::Polyline3D(pl3)).unwrap();

    let mut spline = Spline::new();
    spline.degree = 2;
    spline.control_points = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::new(2.0, 1.0, 0.0)];
    doc.add_entity(EntityType::Spline(spline)).unwrap();

    let mut text = Text::new("Hello", Vector3::new(0.0, -2.0, 0.0), 0.5);
    text.style = "Notes".to_string();
    doc.add_entity(EntityType::Text(text)).unwrap();

    let mut mtext = MText::new("Line one\nLine two", Vector3::new(0.0, -4.0, 0.0), 0.25);
    mtext.rectangle_width = 8.0;
    doc.add_entity(EntityType::MText(mtext)).unwrap();

    doc.add_entity(EntityType::Solid(Solid::new(
        Vector3::ZERO,
        Vector3::UNIT_X,
        Vector3::UNIT_Y,
        Vector3::new(1.0, 1.0, 0.0),
    )))
    .unwrap();
    doc.add_entity(EntityType::Face3D(Face3D::new(
        Vector3::ZERO,
        Vector3::UNIT_X,
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::UNIT_Z,
    )))
    .unwrap();
    doc.add_entity(EntityType::Ray(Ray::new(Vector3::ZERO, Vector3::UNIT_X)))
        .unwrap();
    doc.add_entity(EntityType::XLine(XLine::new(
        Vector3::new(0.0, 5.0, 0.0),
        Vector3::UNIT_Y,
    )))
    .unwrap();
    doc.add_entity(EntityType::Insert(
        Insert::new("A", Vector3::new(20.0, 0.0, 0.0)).with_scale(2.0),
    ))
    .unwrap();

    let mut attdef = AttributeDefinition::new("TAG", Vector3::ZERO, 0.2);
    attdef.prompt = "Enter tag".to_string();
    doc.add_entity(EntityType::AttributeDefinition(attdef)).unwrap();

    let mut dim = Dimension::new(DimensionType::Linear);
    dim.style = "Arch".to_string();
    dim.second_point = Vector3::new(10.0, 0.0, 0.0);
    dim.measurement = 10.0;
    doc.add_entity(EntityType::Dimension(dim)).unwrap();

    let mut hatch = Hatch::new("SOLID");
    hatch.solid_fill = true;
    hatch.boundaries.push(HatchBoundary::new(vec![
        Vector2::ZERO,
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
    ]));
    doc.add_entity(EntityType::Hatch(hatch)).unwrap();

    let mut leader = Leader::new();
    leader.vertices = vec![Vector3::ZERO, Vector3::new(2.0, 2.0, 0.0)];
    doc.add_entity(EntityType::Leader(leader)).unwrap();

    let mut mleader = MultiLeader::new();
    mleader.text = "Note".to_string();
    doc.add_entity(EntityType::MultiLeader(mleader)).unwrap();

    let mut mline = MLine::new();
    mline.style_name = "Double".to_string();
    mline.vertices = vec![Vector3::ZERO, Vector3::new(5.0, 0.0, 0.0)];
    doc.add_entity(EntityType::MLine(mline)).unwrap();

    let mut mesh = Mesh::new();
    mesh.vertices = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y];
    mesh.faces.push(MeshFace::new(vec![0, 1, 2]));
    doc.add_entity(EntityType::Mesh(mesh)).unwrap();

    let mut image = RasterImage::new(Vector3::new(0.0, 10.0, 0.0));
    image.definition = image_def;
    doc.add_entity(EntityType::RasterImage(image)).unwrap();

    doc.add_entity(EntityType::Tolerance(Tolerance::new(
        "{\\Fgdt;j}%%v0.1",
        Vector3::ZERO,
    )))
    .unwrap();
    doc.add_entity(EntityType::Wipeout(Wipeout::new(Vector3::new(3.0, 3.0, 0.0))))
        .unwrap();

    let mut shape = Shape::new("BOX", Vector3::new(4.0, 4.0, 0.0), 1.0);
    shape.style = "GDT".to_string();
    doc.add_entity(EntityType::Shape(shape)).unwrap();

    let mut underlay = Underlay::new(Vector3::new(0.0, 20.0, 0.0));
    underlay.definition = underlay_def;
    doc.add_entity(EntityType::Underlay(underlay)).unwrap();

    doc.add_entity(EntityType::Viewport(Viewport::new(
        Vector3::new(5.0, 5.0, 0.0),
        10.0,
        7.5,
    )))
    .unwrap();

    let mut polyface = PolyfaceMesh::new();
    polyface.vertices = vec![Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y];
    polyface.faces.push(PolyfaceFace::new(1, 2, 3, 0));
    doc.add_entity(EntityType::PolyfaceMesh(polyface)).unwrap();

    // Objects that follow the entities
    let mut state = LayerState::new("Plot");
    state.entries.push(LayerStateEntry::with_settings(
        "Walls",
        LayerFlags::empty(),
        Color::RED,
        "DASHED",
        LineWeight::Default,
    ));
    doc.add_object(ObjectType::LayerState(state)).unwrap();

    let mut raster = RasterVariables::new();
    raster.display_frame = false;
    doc.add_object(ObjectType::RasterVariables(raster)).unwrap();

    let mut group = Group::new("Walls");
    group.add_entity(line);
    group.add_entity(circle);
    doc.add_object(ObjectType::Group(group)).unwrap();

    doc
}
