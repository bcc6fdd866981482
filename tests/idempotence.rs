//! Property tests: generation is deterministic and respects defaults.

mod common;

use acadgen::entities::{Circle, EntityType, Line, Text};
use acadgen::tables::Layer;
use acadgen::types::{Color, Vector3};
use acadgen::{generate, CadDocument, ScopeConfiguration};
use common::fixed_context;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Shape {
    Line { layer: usize, x: f64, y: f64 },
    Circle { layer: usize, radius: f64 },
    Text { layer: usize, value: String },
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0..4usize, -1e3..1e3f64, -1e3..1e3f64).prop_map(|(layer, x, y)| Shape::Line { layer, x, y }),
        (0..4usize, 0.1..50.0f64).prop_map(|(layer, radius)| Shape::Circle { layer, radius }),
        (0..4usize, "[ -~]{0,12}").prop_map(|(layer, value)| Shape::Text { layer, value }),
    ]
}

fn document() -> impl Strategy<Value = CadDocument> {
    (
        prop::collection::vec(("[A-Za-z][A-Za-z0-9 _-]{0,8}", 1..=255u8), 1..4),
        prop::collection::vec(shape(), 0..12),
        prop::option::of(0.1..10.0f64),
    )
        .prop_map(|(layers, shapes, ltscale)| {
            let mut doc = CadDocument::new();
            let mut names = Vec::new();
            for (name, color) in layers {
                if doc.layers.add(Layer::with_color(name.clone(), Color::Index(color))).is_ok() {
                    names.push(name);
                }
            }
            let layer_of = |i: usize| names[i % names.len()].clone();
            for shape in shapes {
                let entity = match shape {
                    Shape::Line { layer, x, y } => {
                        EntityType::Line(Line::on_layer(layer_of(layer), Vector3::ZERO, Vector3::new(x, y, 0.0)))
                    }
                    Shape::Circle { layer, radius } => {
                        let mut c = Circle::new(Vector3::ZERO, radius);
                        c.common.layer = layer_of(layer);
                        EntityType::Circle(c)
                    }
                    Shape::Text { layer, value } => {
                        let mut t = Text::new(value, Vector3::ZERO, 1.0);
                        t.common.layer = layer_of(layer);
                        EntityType::Text(t)
                    }
                };
                doc.add_entity(entity).unwrap();
            }
            if let Some(scale) = ltscale {
                doc.header.linetype_scale = scale;
            }
            doc
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_input_same_output(doc in document(), group in any::<bool>(), only_used in any::<bool>()) {
        let scope = ScopeConfiguration::default()
            .with_group_by_type(group)
            .with_only_used_tables(only_used);
        let ctx = fixed_context("prop.dxf");
        let first = generate(&doc, &scope, &ctx).unwrap();
        let second = generate(&doc, &scope, &ctx).unwrap();
        prop_assert_eq!(first.text(), second.text());
        prop_assert_eq!(first.notifications, second.notifications);
    }

    #[test]
    fn every_entity_is_registered(doc in document()) {
        let program = generate(&doc, &ScopeConfiguration::default(), &fixed_context("prop.dxf")).unwrap();
        let registrations = program.text().matches("doc.add_entity(").count();
        prop_assert_eq!(registrations, doc.entity_count());
        // Layers are all user layers, so each one is emitted and never inlined
        prop_assert!(program.notifications.is_empty());
    }
}
