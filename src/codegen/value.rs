//! Typed property values as the generator sees them

use crate::types::{
    approx_eq, Color, Duration, Handle, LineWeight, NaiveDateTime, Transparency, Vector2, Vector3,
};
use std::fmt::Debug;

/// Module of the generated crate that exports a type
///
/// Ordered the way the import block lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    Entities,
    Objects,
    Tables,
    Types,
    /// Crate root (`CadDocument`, `Result`)
    Root,
}

impl Module {
    pub fn path(self) -> &'static str {
        match self {
            Module::Entities => "acadgen::entities",
            Module::Objects => "acadgen::objects",
            Module::Tables => "acadgen::tables",
            Module::Types => "acadgen::types",
            Module::Root => "acadgen",
        }
    }
}

/// Table a name reference points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRef {
    Layer,
    LineType,
    /// Text styles and shape files share one table
    TextStyle,
    DimStyle,
    Block,
    MLineStyle,
}

impl TableRef {
    pub fn label(self) -> &'static str {
        match self {
            TableRef::Layer => "layer",
            TableRef::LineType => "line type",
            TableRef::TextStyle => "text style",
            TableRef::DimStyle => "dimension style",
            TableRef::Block => "block",
            TableRef::MLineStyle => "multiline style",
        }
    }
}

/// A link from one construct to another
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// By entry name, case-insensitive
    Name { table: TableRef, name: String },
    /// By the handle the document assigned
    Handle(Handle),
}

/// A property value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
    Vector2(Vector2),
    Vector3(Vector3),
    Color(Color),
    LineWeight(LineWeight),
    Transparency(Transparency),
    DateTime(NaiveDateTime),
    Duration(Duration),
    /// Unit-like enum variant, rendered as `Type::Variant`
    Enum {
        module: Module,
        type_name: &'static str,
        variant: String,
    },
    /// Bitflags value, split into named flags plus leftover bits
    Flags {
        module: Module,
        type_name: &'static str,
        names: Vec<&'static str>,
        extra: i64,
    },
    /// Constructor call such as `LwVertex::new(..)`
    Call {
        module: Module,
        path: &'static str,
        args: Vec<Value>,
    },
    Reference(Reference),
    List(Vec<Value>),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Enum value named after its `Debug` output
    pub fn enumeration<T: Debug>(module: Module, type_name: &'static str, value: &T) -> Self {
        Value::Enum {
            module,
            type_name,
            variant: format!("{:?}", value),
        }
    }

    /// Bitflags value split into its named members
    pub fn flags<F>(module: Module, type_name: &'static str, value: &F) -> Self
    where
        F: bitflags::Flags,
        F::Bits: Into<i64>,
    {
        let names = value.iter_names().map(|(name, _)| name).collect();
        let known = F::from_bits_truncate(value.bits());
        let extra = F::from_bits_retain(value.bits()).difference(known);
        Value::Flags {
            module,
            type_name,
            names,
            extra: extra.bits().into(),
        }
    }

    pub fn call(module: Module, path: &'static str, args: Vec<Value>) -> Self {
        Value::Call { module, path, args }
    }

    pub fn name_ref(table: TableRef, name: impl Into<String>) -> Self {
        Value::Reference(Reference::Name {
            table,
            name: name.into(),
        })
    }

    pub fn handle_ref(handle: Handle) -> Self {
        Value::Reference(Reference::Handle(handle))
    }

    pub fn list<T>(items: impl IntoIterator<Item = T>, f: impl Fn(T) -> Value) -> Self {
        Value::List(items.into_iter().map(f).collect())
    }

    /// Equality with floating components compared within 1e-10
    pub fn approx_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Double(a), Value::Double(b)) => approx_eq(*a, *b),
            (Value::Vector2(a), Value::Vector2(b)) => approx_eq(a.x, b.x) && approx_eq(a.y, b.y),
            (Value::Vector3(a), Value::Vector3(b)) => {
                approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
            }
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.approx_eq(y))
            }
            (
                Value::Call {
                    path: pa, args: a, ..
                },
                Value::Call {
                    path: pb, args: b, ..
                },
            ) => pa == pb && a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.approx_eq(y)),
            _ => self == other,
        }
    }

    /// Every reference held by this value, nested ones included
    pub fn references(&self) -> Vec<&Reference> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a Reference>) {
        match self {
            Value::Reference(r) => out.push(r),
            Value::List(items) => items.iter().for_each(|v| v.collect_references(out)),
            Value::Call { args, .. } => args.iter().for_each(|v| v.collect_references(out)),
            _ => {}
        }
    }

    /// Modules a rendering of this value needs in scope
    pub fn modules(&self, out: &mut Vec<Module>) {
        match self {
            Value::Vector2(_)
            | Value::Vector3(_)
            | Value::Color(_)
            | Value::LineWeight(_)
            | Value::Transparency(_)
            | Value::DateTime(_)
            | Value::Duration(_) => out.push(Module::Types),
            Value::Enum { module, .. } | Value::Flags { module, .. } => out.push(*module),
            Value::Call { module, args, .. } => {
                out.push(*module);
                args.iter().for_each(|v| v.modules(out));
            }
            Value::List(items) => items.iter().for_each(|v| v.modules(out)),
            _ => {}
        }
    }
}

/// One assignable property of a construct
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Field path relative to the construct, e.g. `common.layer`
    pub name: &'static str,
    pub value: Value,
}

impl Property {
    pub fn new(name: &'static str, value: Value) -> Self {
        Property { name, value }
    }
}

/// How a construct is created before its properties are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub type_name: &'static str,
    pub method: &'static str,
    pub args: Vec<Value>,
}

impl Constructor {
    pub fn new(type_name: &'static str, args: Vec<Value>) -> Self {
        Constructor {
            type_name,
            method: "new",
            args,
        }
    }

    pub fn with_method(type_name: &'static str, method: &'static str, args: Vec<Value>) -> Self {
        Constructor {
            type_name,
            method,
            args,
        }
    }
}
