//! Emission order, reference binding and cycle handling.

mod common;

use acadgen::entities::{EntityType, MText};
use acadgen::tables::{DimStyle, TextStyle};
use acadgen::types::Vector3;
use acadgen::{generate, CadDocument, CadError, GenerationContext, NotificationType, ScopeConfiguration};
use common::builders::{block_cycle, create_mixed_document, group_cycle};
use common::*;

#[test]
fn styles_precede_the_entities_using_them() {
    let program = generate_default(&create_mixed_document());
    let style = line_index(&program, "TextStyle::new(\"Notes\")");
    let text = line_index(&program, "Text::new(\"Title\"");
    assert!(style < text);
    assert!(mentions(&program, "text_1.style = textstyle_notes.name.clone();"));
}

#[test]
fn line_type_precedes_layer_precedes_entity() {
    let program = generate_default(&create_mixed_document());
    let line_type = line_index(&program, "LineType::new(\"Dashed\")");
    let layer = line_index(&program, "Layer::new(\"Walls\")");
    let circle = line_index(&program, "Circle::new(");
    assert!(line_type < layer && layer < circle);
    assert!(mentions(&program, "layer_walls.line_type = linetype_dashed.name.clone();"));
}

#[test]
fn block_precedes_insert() {
    let program = generate_default(&create_mixed_document());
    let block = line_index(&program, "BlockRecord::new(\"Door\")");
    let insert = line_index(&program, "Insert::new(");
    assert!(block < insert);
    assert!(mentions(&program, "Insert::new(block_door.name.clone(), Vector3::new(3.0, 0.0, 0.0))"));
    assert!(mentions(&program, "block_door.entities.push(EntityType::Line(line_1));"));
}

#[test]
fn group_members_are_bound_to_registration_handles() {
    let program = generate_default(&create_mixed_document());
    assert!(mentions(&program, "let circle_1_handle = doc.add_entity(EntityType::Circle(circle_1))?;"));
    assert!(mentions(&program, "let lwpolyline_1_handle = doc.add_entity("));
    assert!(mentions(
        &program,
        "group_outline.entities = vec![circle_1_handle, lwpolyline_1_handle];"
    ));
}

#[test]
fn image_definition_precedes_image() {
    let program = generate_default(&create_mixed_document());
    let definition = line_index(&program, "ImageDefinition::new(\"plans/site.png\")");
    let image = line_index(&program, "RasterImage::new(");
    assert!(definition < image);
    assert!(mentions(&program, "image_1.definition = image_def_site_handle;"));
}

#[test]
fn styles_referenced_from_other_tables_come_first() {
    let mut doc = CadDocument::new();
    let mut dim = DimStyle::new("Arch");
    dim.text_style = "Labels".to_string();
    doc.dim_styles.add(dim).unwrap();
    doc.text_styles.add(TextStyle::new("Labels")).unwrap();
    let mut note = MText::new("See detail", Vector3::ZERO, 2.0);
    note.style = "Labels".to_string();
    doc.add_entity(EntityType::MText(note)).unwrap();

    let program = generate_default(&doc);
    let style = line_index(&program, "TextStyle::new(\"Labels\")");
    let dim = line_index(&program, "DimStyle::new(\"Arch\")");
    let mtext = line_index(&program, "MText::new(");
    assert!(style < dim && dim < mtext);
}

#[test]
fn block_cycle_is_broken_with_forward_declaration() {
    let program = generate_default(&block_cycle());
    let text = program.text();

    let declare = line_index(&program, "let mut block_a = BlockRecord::new(\"A\");");
    let early_add = line_index(&program, "doc.block_records.add(block_a.clone())?;");
    let b = line_index(&program, "BlockRecord::new(\"B\")");
    let populate = line_index(&program, "doc.block_records.replace(block_a.clone())?;");
    assert!(declare < early_add && early_add < b && b < populate);
    assert_eq!(text.matches("BlockRecord::new(\"A\")").count(), 1);
    assert!(mentions(&program, "Insert::new(block_a.name.clone(), Vector3::UNIT_X)"));
    assert_eq!(count_notifications(&program, NotificationType::ForwardDeclared), 1);
}

#[test]
fn cycle_through_groups_is_an_error() {
    let err = generate(
        &group_cycle(),
        &ScopeConfiguration::default(),
        &GenerationContext::default(),
    )
    .unwrap_err();
    match err {
        CadError::UnresolvedCycle { units } => {
            assert_eq!(units.first().map(String::as_str), Some("Group \"G1\""));
            assert!(units.iter().any(|u| u == "Group \"G2\""));
        }
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

#[test]
fn standard_entries_are_replaced_not_added() {
    let mut doc = CadDocument::new();
    doc.layers.get_mut("0").unwrap().color = acadgen::Color::GREEN;
    let program = generate_default(&doc);
    assert!(mentions(&program, "let mut layer_0 = Layer::new(\"0\");"));
    assert!(mentions(&program, "layer_0.color = Color::GREEN;"));
    assert!(mentions(&program, "doc.layers.replace(layer_0)?;"));
    assert!(!mentions(&program, "doc.layers.add("));
}

#[test]
fn every_emitted_unit_is_registered_once() {
    let doc = create_mixed_document();
    let program = generate_default(&doc);
    // 3 layers, 1 line type, 1 text style, 1 block, 6 entities minus the
    // solid, 1 image definition, 1 group
    assert_eq!(registration_count(&program), 3 + 1 + 1 + 1 + 5 + 1 + 1);
}
