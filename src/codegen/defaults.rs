//! Baseline property values per construct kind
//!
//! A property is only emitted when it differs from the value a freshly
//! constructed instance of the same kind carries. The registry is built once
//! per process from the descriptor table and shared by every call.

use super::kind::ConstructKind;
use super::value::{Property, TableRef, Value};
use crate::document::CadDocument;
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Map from (kind, property path) to the baseline value
pub struct DefaultRegistry {
    values: AHashMap<(ConstructKind, &'static str), Value>,
}

static REGISTRY: Lazy<DefaultRegistry> = Lazy::new(DefaultRegistry::build);

/// Document as `CadDocument::new()` creates it, used to spot standard entries
static FRESH_DOCUMENT: Lazy<CadDocument> = Lazy::new(CadDocument::new);

impl DefaultRegistry {
    fn build() -> Self {
        let mut values = AHashMap::new();
        for kind in ConstructKind::ALL {
            for property in (kind.descriptor().baseline)() {
                values.insert((kind, property.name), property.value);
            }
        }
        DefaultRegistry { values }
    }

    /// The shared registry
    pub fn global() -> &'static DefaultRegistry {
        &REGISTRY
    }

    pub fn baseline(&self, kind: ConstructKind, property: &'static str) -> Option<&Value> {
        self.values.get(&(kind, property))
    }

    /// Does the property still hold its kind's baseline value?
    ///
    /// Properties without a registered baseline are never elided.
    pub fn is_default(&self, kind: ConstructKind, property: &Property) -> bool {
        self.baseline(kind, property.name)
            .is_some_and(|baseline| baseline.approx_eq(&property.value))
    }

    /// Properties that differ from the baseline, in declaration order
    pub fn non_default(&self, kind: ConstructKind, properties: Vec<Property>) -> Vec<Property> {
        properties
            .into_iter()
            .filter(|p| !self.is_default(kind, p))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The document every generated program starts from
pub fn fresh_document() -> &'static CadDocument {
    &FRESH_DOCUMENT
}

/// Is `name` one of the entries every new document already holds?
pub fn is_standard_name(table: TableRef, name: &str) -> bool {
    let doc = fresh_document();
    match table {
        TableRef::Layer => doc.layers.contains(name),
        TableRef::LineType => doc.line_types.contains(name),
        TableRef::TextStyle => doc.text_styles.contains(name),
        TableRef::DimStyle => doc.dim_styles.contains(name),
        TableRef::Block => doc.block_records.contains(name),
        TableRef::MLineStyle => false,
    }
}
