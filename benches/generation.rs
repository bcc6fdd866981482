//! Benchmarks for program generation over documents of growing size.
//!
//! Run with: cargo bench --bench generation

use std::hint::black_box;

use acadgen::entities::{Circle, EntityType, Line};
use acadgen::objects::{Group, ObjectType};
use acadgen::tables::Layer;
use acadgen::types::{Color, Vector3};
use acadgen::{generate, generate_batch, CadDocument, GenerationContext, ScopeConfiguration};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

// =============================================================================
// Test Data
// =============================================================================

/// A document with `layers` layers, `entities` lines and circles spread over
/// them, and one group per ten circles.
fn build_document(layers: usize, entities: usize) -> CadDocument {
    let mut doc = CadDocument::new();
    for i in 0..layers {
        let color = Color::Index((i % 255 + 1) as u8);
        doc.layers.add(Layer::with_color(format!("Layer{i}"), color)).unwrap();
    }

    let mut group = Group::new("Circles0");
    for i in 0..entities {
        let layer = format!("Layer{}", i % layers.max(1));
        let x = i as f64;
        if i % 2 == 0 {
            let line = Line::on_layer(layer, Vector3::new(x, 0.0, 0.0), Vector3::new(x, 10.0, 0.0));
            doc.add_entity(EntityType::Line(line)).unwrap();
        } else {
            let mut circle = Circle::new(Vector3::new(x, x, 0.0), 1.0 + x / 10.0);
            circle.common.layer = layer;
            let handle = doc.add_entity(EntityType::Circle(circle)).unwrap();
            group.add_entity(handle);
            if group.entities.len() == 10 {
                let next = Group::new(format!("Circles{i}"));
                doc.add_object(ObjectType::Group(std::mem::replace(&mut group, next))).unwrap();
            }
        }
    }
    if !group.entities.is_empty() {
        doc.add_object(ObjectType::Group(group)).unwrap();
    }
    doc
}

fn sizes() -> [(&'static str, CadDocument); 3] {
    [
        ("small", build_document(2, 20)),
        ("medium", build_document(10, 200)),
        ("large", build_document(50, 2000)),
    ]
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let context = GenerationContext::default();

    for (name, doc) in sizes() {
        let scope = ScopeConfiguration::default();
        group.bench_with_input(BenchmarkId::new("default", name), &doc, |b, doc| {
            b.iter(|| generate(black_box(doc), &scope, &context).unwrap())
        });

        let grouped = ScopeConfiguration::default()
            .with_group_by_type(true)
            .with_only_used_tables(true);
        group.bench_with_input(BenchmarkId::new("grouped_used_only", name), &doc, |b, doc| {
            b.iter(|| generate(black_box(doc), &grouped, &context).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let documents: Vec<CadDocument> = (0..16).map(|i| build_document(5, 100 + i * 10)).collect();
    let inputs: Vec<(&CadDocument, GenerationContext)> = documents
        .iter()
        .enumerate()
        .map(|(i, doc)| (doc, GenerationContext::new().with_source_name(format!("drawing{i}.dxf"))))
        .collect();
    let scope = ScopeConfiguration::default();

    group.bench_function("parallel/16", |b| {
        b.iter(|| generate_batch(black_box(&inputs), &scope))
    });
    group.bench_function("sequential/16", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|(doc, ctx)| generate(black_box(doc), &scope, ctx))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_batch);
criterion_main!(benches);
