// Generated by acadgen 0.1.0
// Source: scenario_a.dxf
// Generated at: 2024-05-01 12:00:00

use acadgen::entities::*;
use acadgen::tables::*;
use acadgen::types::*;
use acadgen::{CadDocument, Result};

pub struct DrawingFactory;

impl DrawingFactory {
    pub fn create_document() -> Result<CadDocument> {
        let mut doc = CadDocument::new();

        // Layers
        let layer_l1 = Layer::new("L1");
        doc.layers.add(layer_l1.clone())?;

        let mut layer_l2 = Layer::new("L2");
        layer_l2.color = Color::RED;
        doc.layers.add(layer_l2.clone())?;

        // Entities
        let mut line_1 = Line::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        line_1.common.layer = layer_l1.name.clone();
        doc.add_entity(EntityType::Line(line_1))?;

        let mut line_2 = Line::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(10.0, 5.0, 0.0));
        line_2.common.layer = layer_l2.name.clone();
        doc.add_entity(EntityType::Line(line_2))?;

        Ok(doc)
    }
}
