//! Comment blocks for constructs with no programmatic form
//!
//! Extension records, dictionaries and 3D solids carry data
//! the generated program cannot rebuild faithfully. They are written out as
//! comments instead: a structured block describing the construct when
//! detailed comments are on, a single marker line otherwise.

use crate::entities::{EntityType, Solid3D};
use crate::objects::{Dictionary, ObjectType, XRecord};

/// What the comment block says about one kind
struct Outline {
    purpose: &'static str,
    fields: &'static str,
    example: &'static [&'static str],
}

const XRECORD: Outline = Outline {
    purpose: "application-defined group code/value pairs owned by a dictionary",
    fields: "name, entries (code + typed value)",
    example: &[
        "let mut record = XRecord::new(\"AppData\");",
        "record.add(1, XRecordValue::String(\"value\".to_string()));",
    ],
};

const DICTIONARY: Outline = Outline {
    purpose: "named map from keys to object handles",
    fields: "name, entries (key -> handle), hard_owner",
    example: &[
        "let mut dict = Dictionary::new(\"ACAD_GROUP\");",
        "dict.add_entry(\"Doors\", group_handle);",
    ],
};

const SOLID3D: Outline = Outline {
    purpose: "ACIS modeler body stored as SAT text",
    fields: "common, acis_version, acis_data",
    example: &["let solid = Solid3D::new(sat_text);"],
};

/// Comment lines describing an opaque object, or `None` for other objects
pub fn object_comment(object: &ObjectType, label: &str, detailed: bool) -> Option<Vec<String>> {
    let (outline, summary) = match object {
        ObjectType::XRecord(record) => (&XRECORD, xrecord_summary(record)),
        ObjectType::Dictionary(dict) => (&DICTIONARY, dictionary_summary(dict)),
        _ => return None,
    };
    Some(render(outline, label, &summary, detailed))
}

/// Comment lines describing an opaque entity, or `None` for other entities
pub fn entity_comment(entity: &EntityType, label: &str, detailed: bool) -> Option<Vec<String>> {
    match entity {
        EntityType::Solid3D(solid) => Some(render(&SOLID3D, label, &solid_summary(solid), detailed)),
        _ => None,
    }
}

fn render(outline: &Outline, label: &str, summary: &str, detailed: bool) -> Vec<String> {
    if !detailed {
        return vec![format!("// {} not generated ({})", label, summary)];
    }
    let mut lines = Vec::with_capacity(6 + outline.example.len());
    lines.push(format!("// {} cannot be generated and was left out.", label));
    lines.push(format!("//   Purpose: {}", outline.purpose));
    lines.push(format!("//   Fields: {}", outline.fields));
    lines.push("//   Example:".to_string());
    for line in outline.example {
        lines.push(format!("//     {}", line));
    }
    lines.push(format!("//   Source: {}", summary));
    lines
}

fn xrecord_summary(record: &XRecord) -> String {
    if record.entries.is_empty() {
        return "no entries".to_string();
    }
    let mut types: Vec<&str> = Vec::new();
    for entry in &record.entries {
        let name = entry.value.type_name();
        if !types.contains(&name) {
            types.push(name);
        }
    }
    format!(
        "{} {} ({})",
        record.entries.len(),
        plural(record.entries.len(), "entry", "entries"),
        types.join(", ")
    )
}

fn dictionary_summary(dict: &Dictionary) -> String {
    let keys: Vec<&str> = dict.entries.keys().take(3).map(String::as_str).collect();
    let mut summary = format!(
        "{} {}",
        dict.entries.len(),
        plural(dict.entries.len(), "entry", "entries")
    );
    if !keys.is_empty() {
        summary.push_str(&format!(": {}", keys.join(", ")));
        if dict.entries.len() > keys.len() {
            summary.push_str(", ...");
        }
    }
    summary
}

fn solid_summary(solid: &Solid3D) -> String {
    let records = solid.record_count();
    format!(
        "ACIS version {}, {} {}",
        solid.acis_version,
        records,
        plural(records, "record", "records")
    )
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
