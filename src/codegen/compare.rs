//! Structural comparison of two documents
//!
//! Used to check that a generated program rebuilds its source document.
//! Both documents are described through [`Construct`], so the comparison
//! sees exactly what the generator sees. Handles differ between the two
//! documents by construction; a handle reference is compared by the kind
//! and position of what it points to instead.

use super::describe::Construct;
use super::value::{Reference, Value};
use crate::document::CadDocument;
use crate::entities::EntityType;
use crate::tables::{Table, TableEntry};
use crate::types::Handle;
use ahash::AHashMap;

/// One mismatch between an expected and an actual document
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Construct holding the mismatch, e.g. `Layer "L1"` or `Line #3`
    pub construct: String,
    /// Property path, `count` for mismatched collection sizes
    pub property: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}: expected {}, found {}",
            self.construct, self.property, self.expected, self.actual
        )
    }
}

/// Every structural difference between two documents
///
/// Entities and objects are matched kind by kind. Extension records,
/// dictionaries and 3D solids are not compared; a generated program never
/// rebuilds them.
pub fn compare_documents(expected: &CadDocument, actual: &CadDocument) -> Vec<Difference> {
    let mut cmp = Comparison {
        expected_handles: handle_labels(expected),
        actual_handles: handle_labels(actual),
        differences: Vec::new(),
    };

    cmp.construct("Header", &expected.header, &actual.header);

    cmp.table("app_ids", &expected.app_ids, &actual.app_ids);
    cmp.table("line_types", &expected.line_types, &actual.line_types);
    cmp.table("text_styles", &expected.text_styles, &actual.text_styles);
    cmp.table("layers", &expected.layers, &actual.layers);
    cmp.table("dim_styles", &expected.dim_styles, &actual.dim_styles);
    cmp.table("ucss", &expected.ucss, &actual.ucss);
    cmp.table("vports", &expected.vports, &actual.vports);
    cmp.table("block_records", &expected.block_records, &actual.block_records);

    cmp.sequence("entities", &by_kind(expected.entities()), &by_kind(actual.entities()));
    cmp.sequence("objects", &by_kind(expected.objects()), &by_kind(actual.objects()));

    if !cmp.differences.is_empty() {
        tracing::debug!(count = cmp.differences.len(), "documents differ");
    }
    cmp.differences
}

/// Generated constructs in native kind order, document order within a kind
///
/// A generated program registers constructs kind by kind (definitions
/// before entities, groups after them), so only the order inside one kind
/// is meaningful.
fn by_kind<'d, C: Construct + 'd>(constructs: impl Iterator<Item = &'d C>) -> Vec<&'d C> {
    let mut kept: Vec<&C> = constructs.filter(|c| !c.kind().is_opaque()).collect();
    kept.sort_by_key(|c| c.kind());
    kept
}

/// `Kind #n` for every entity and object handle, counted per kind
fn handle_labels(doc: &CadDocument) -> AHashMap<Handle, String> {
    let mut counters = AHashMap::new();
    let mut labels = AHashMap::new();
    let constructs = doc
        .entities()
        .map(|e| (e.handle(), e as &dyn Construct))
        .chain(doc.objects().map(|o| (o.handle(), o as &dyn Construct)));
    for (handle, construct) in constructs {
        let kind = construct.kind();
        let n = counters.entry(kind).or_insert(0usize);
        *n += 1;
        labels.insert(handle, format!("{} #{}", kind.label(), n));
    }
    labels
}

struct Comparison {
    expected_handles: AHashMap<Handle, String>,
    actual_handles: AHashMap<Handle, String>,
    differences: Vec<Difference>,
}

impl Comparison {
    fn differ(&mut self, construct: &str, property: impl Into<String>, expected: String, actual: String) {
        self.differences.push(Difference {
            construct: construct.to_string(),
            property: property.into(),
            expected,
            actual,
        });
    }

    fn table<T: Construct + TableEntry>(&mut self, field: &str, expected: &Table<T>, actual: &Table<T>) {
        let exp: Vec<&T> = expected.iter().collect();
        let act: Vec<&T> = actual.iter().collect();
        self.sequence(field, &exp, &act);
    }

    fn sequence<C: Construct + ?Sized>(&mut self, field: &str, expected: &[&C], actual: &[&C]) {
        if expected.len() != actual.len() {
            self.differ(
                field,
                "count",
                expected.len().to_string(),
                actual.len().to_string(),
            );
        }
        let mut ordinals: AHashMap<_, usize> = AHashMap::new();
        for (e, a) in expected.iter().zip(actual) {
            let n = ordinals.entry(e.kind()).or_insert(0);
            *n += 1;
            let label = match e.name() {
                Some(name) => format!("{} \"{}\"", e.kind().label(), name),
                None => format!("{} #{}", e.kind().label(), n),
            };
            self.construct(&label, *e, *a);
        }
    }

    fn construct<C: Construct + ?Sized>(&mut self, label: &str, expected: &C, actual: &C) {
        if expected.kind() != actual.kind() {
            self.differ(
                label,
                "kind",
                expected.kind().label().to_string(),
                actual.kind().label().to_string(),
            );
            return;
        }

        let (ec, ac) = (expected.constructor(), actual.constructor());
        for (i, (e, a)) in ec.args.iter().zip(&ac.args).enumerate() {
            self.value(label, format!("{}[{}]", ec.method, i), e, a);
        }
        if ec.method != ac.method {
            self.differ(label, "constructor", ec.method.to_string(), ac.method.to_string());
        }

        for (e, a) in expected.properties().iter().zip(actual.properties().iter()) {
            self.value(label, e.name, &e.value, &a.value);
        }

        let (children_e, children_a) = (expected.children(), actual.children());
        if children_e.is_empty() && children_a.is_empty() {
            return;
        }
        let exp: Vec<&EntityType> = children_e.iter().filter(|c| !c.kind().is_opaque()).collect();
        let act: Vec<&EntityType> = children_a.iter().filter(|c| !c.kind().is_opaque()).collect();
        self.sequence(&format!("{} entities", label), &exp, &act);
    }

    fn value(&mut self, label: &str, property: impl Into<String>, expected: &Value, actual: &Value) {
        let e = canonical(expected, &self.expected_handles);
        let a = canonical(actual, &self.actual_handles);
        if !e.approx_eq(&a) {
            self.differ(label, property, format!("{:?}", e), format!("{:?}", a));
        }
    }
}

/// Replace handle references by what they point to
fn canonical(value: &Value, handles: &AHashMap<Handle, String>) -> Value {
    match value {
        Value::Reference(Reference::Handle(handle)) => match handles.get(handle) {
            Some(label) => Value::Text(label.clone()),
            None if handle.is_null() => Value::Text("null".to_string()),
            None => Value::Text(format!("dangling {}", handle)),
        },
        Value::List(items) => Value::List(items.iter().map(|v| canonical(v, handles)).collect()),
        Value::Call { module, path, args } => Value::Call {
            module: *module,
            path: *path,
            args: args.iter().map(|v| canonical(v, handles)).collect(),
        },
        other => other.clone(),
    }
}
