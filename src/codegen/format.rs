//! Rendering of property values as Rust expressions

use super::defaults::is_standard_name;
use super::resolve::ResolvedPlan;
use super::value::{Module, Reference, Value};
use crate::error::{CadError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::time::{datetime_components, duration_components};
use crate::types::{Color, LineWeight, Transparency, Vector2, Vector3};
use ahash::AHashMap;
use proc_macro2::Literal;
use std::collections::BTreeSet;

/// Where a rendered value lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Right-hand side of an assignment or a list element; needs owned values
    Assign,
    /// Argument of a constructor taking `impl Into<String>`
    Arg,
}

/// Variables bound so far, by unit index
#[derive(Debug, Default)]
pub struct Bindings {
    values: AHashMap<usize, String>,
    handles: AHashMap<usize, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_value(&mut self, unit: usize, var: String) {
        self.values.insert(unit, var);
    }

    pub fn bind_handle(&mut self, unit: usize, var: String) {
        self.handles.insert(unit, var);
    }

    pub fn value(&self, unit: usize) -> Option<&str> {
        self.values.get(&unit).map(String::as_str)
    }

    pub fn handle(&self, unit: usize) -> Option<&str> {
        self.handles.get(&unit).map(String::as_str)
    }
}

/// Renders values for one unit, degrading references it cannot bind
pub struct Formatter<'r, 'a> {
    pub plan: &'r ResolvedPlan<'a>,
    pub bindings: &'r Bindings,
    pub notifications: &'r mut NotificationCollection,
    pub modules: &'r mut BTreeSet<Module>,
    /// Label of the unit being formatted, for notifications
    pub owner: &'r str,
}

impl<'r, 'a> Formatter<'r, 'a> {
    /// Render a value; `None` means the whole assignment must be dropped
    pub fn render(&mut self, value: &Value, position: Position) -> Result<Option<String>> {
        let mut used = Vec::new();
        value.modules(&mut used);
        self.modules.extend(used);
        self.render_inner(value, position)
    }

    fn render_inner(&mut self, value: &Value, position: Position) -> Result<Option<String>> {
        let text = match value {
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Double(d) => format_f64(*d),
            Value::Text(s) => string_literal(s, position),
            Value::Vector2(v) => format_vector2(v),
            Value::Vector3(v) => format_vector3(v),
            Value::Color(c) => format_color(c),
            Value::LineWeight(w) => format_line_weight(w),
            Value::Transparency(t) => format_transparency(t),
            Value::DateTime(dt) => {
                let (y, mo, d, h, mi, s, ms) = datetime_components(dt);
                format!("datetime({}, {}, {}, {}, {}, {}, {})", y, mo, d, h, mi, s, ms)
            }
            Value::Duration(du) => {
                let (d, h, m, s, ms) = duration_components(du);
                format!("duration({}, {}, {}, {}, {})", d, h, m, s, ms)
            }
            Value::Enum {
                type_name, variant, ..
            } => format!("{}::{}", type_name, variant),
            Value::Flags {
                type_name,
                names,
                extra,
                ..
            } => format_flags(type_name, names, *extra),
            Value::Call { path, args, .. } => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    match self.render_inner(arg, Position::Arg)? {
                        Some(text) => rendered.push(text),
                        None => return Ok(None),
                    }
                }
                format!("{}({})", path, rendered.join(", "))
            }
            Value::List(items) => {
                let mut rendered = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(text) = self.render_inner(item, Position::Assign)? {
                        rendered.push(text);
                    }
                }
                if rendered.is_empty() && !items.is_empty() {
                    // Every element was dropped
                    return Ok(None);
                } else if rendered.is_empty() {
                    "Vec::new()".to_string()
                } else {
                    format!("vec![{}]", rendered.join(", "))
                }
            }
            Value::Reference(reference) => return self.render_reference(reference, position),
        };
        Ok(Some(text))
    }

    fn render_reference(
        &mut self,
        reference: &Reference,
        position: Position,
    ) -> Result<Option<String>> {
        match reference {
            Reference::Name { table, name } => match self.plan.unit_for_name(*table, name) {
                Some(unit) => match self.bindings.value(unit) {
                    Some(var) => Ok(Some(format!("{}.name.clone()", var))),
                    None => Err(CadError::MissingBinding {
                        unit: self.plan.units[unit].label.clone(),
                    }),
                },
                None => {
                    if !is_standard_name(*table, name) {
                        tracing::warn!(owner = self.owner, name = %name, "inlining unresolved {}", table.label());
                        self.notifications.notify(
                            NotificationType::Degraded,
                            format!(
                                "{}: {} \"{}\" is not emitted; its name was inlined",
                                self.owner,
                                table.label(),
                                name
                            ),
                        );
                    }
                    Ok(Some(string_literal(name, position)))
                }
            },
            Reference::Handle(handle) => match self.plan.unit_for_handle(*handle) {
                Some(unit) => match self.bindings.handle(unit) {
                    Some(var) => Ok(Some(var.to_string())),
                    None => Err(CadError::MissingBinding {
                        unit: self.plan.units[unit].label.clone(),
                    }),
                },
                None => {
                    if !handle.is_null() {
                        tracing::warn!(owner = self.owner, handle = %handle, "dropping unresolved handle");
                        self.notifications.notify(
                            NotificationType::Degraded,
                            format!(
                                "{}: handle {} does not refer to an emitted construct and was dropped",
                                self.owner, handle
                            ),
                        );
                    }
                    Ok(None)
                }
            },
        }
    }
}

/// Shortest round-trip representation, always a valid float literal
pub fn format_f64(value: f64) -> String {
    if value.is_nan() {
        "f64::NAN".to_string()
    } else if value == f64::INFINITY {
        "f64::INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "f64::NEG_INFINITY".to_string()
    } else {
        format!("{:?}", value)
    }
}

/// Quoted Rust string literal
///
/// Quotes, backslashes and control characters are escaped; other
/// characters, non-ASCII included, pass through.
pub fn escape_string(value: &str) -> String {
    Literal::string(value).to_string()
}

fn string_literal(value: &str, position: Position) -> String {
    match position {
        Position::Assign => format!("{}.to_string()", escape_string(value)),
        Position::Arg => escape_string(value),
    }
}

pub fn format_vector2(v: &Vector2) -> String {
    if *v == Vector2::ZERO {
        "Vector2::ZERO".to_string()
    } else {
        format!("Vector2::new({}, {})", format_f64(v.x), format_f64(v.y))
    }
}

pub fn format_vector3(v: &Vector3) -> String {
    const NAMED: [(Vector3, &str); 4] = [
        (Vector3::ZERO, "Vector3::ZERO"),
        (Vector3::UNIT_X, "Vector3::UNIT_X"),
        (Vector3::UNIT_Y, "Vector3::UNIT_Y"),
        (Vector3::UNIT_Z, "Vector3::UNIT_Z"),
    ];
    match NAMED.iter().find(|(named, _)| named == v) {
        Some((_, name)) => name.to_string(),
        None => format!(
            "Vector3::new({}, {}, {})",
            format_f64(v.x),
            format_f64(v.y),
            format_f64(v.z)
        ),
    }
}

pub fn format_color(color: &Color) -> String {
    match color {
        Color::ByLayer => "Color::ByLayer".to_string(),
        Color::ByBlock => "Color::ByBlock".to_string(),
        Color::Index(i) => match color.palette_name() {
            Some(name) => format!("Color::{}", name),
            None => format!("Color::Index({})", i),
        },
        Color::Rgb { r, g, b } => format!("Color::from_rgb({}, {}, {})", r, g, b),
    }
}

pub fn format_line_weight(weight: &LineWeight) -> String {
    match weight {
        LineWeight::ByLayer => "LineWeight::ByLayer".to_string(),
        LineWeight::ByBlock => "LineWeight::ByBlock".to_string(),
        LineWeight::Default => "LineWeight::Default".to_string(),
        LineWeight::Value(v) => match weight.constant_name() {
            Some(name) => format!("LineWeight::{}", name),
            None => format!("LineWeight::Value({})", v),
        },
    }
}

pub fn format_transparency(transparency: &Transparency) -> String {
    if *transparency == Transparency::OPAQUE {
        "Transparency::OPAQUE".to_string()
    } else if *transparency == Transparency::TRANSPARENT {
        "Transparency::TRANSPARENT".to_string()
    } else {
        format!("Transparency::new({})", transparency.alpha())
    }
}

pub fn format_flags(type_name: &str, names: &[&str], extra: i64) -> String {
    let mut parts: Vec<String> = names
        .iter()
        .map(|name| format!("{}::{}", type_name, name))
        .collect();
    if extra != 0 {
        parts.push(format!("{}::from_bits_retain({})", type_name, extra));
    }
    if parts.is_empty() {
        format!("{}::empty()", type_name)
    } else {
        parts.join(" | ")
    }
}
