//! XRecord object - Extended record storage for arbitrary data

use crate::types::{Handle, Vector3};

/// A typed value stored in an extension record
#[derive(Debug, Clone, PartialEq)]
pub enum XRecordValue {
    String(String),
    Double(f64),
    Int16(i16),
    Int32(i32),
    Bool(bool),
    Point3D(Vector3),
    Handle(Handle),
    /// Binary chunk
    Binary(Vec<u8>),
}

impl XRecordValue {
    /// Short type tag used in summaries
    pub fn type_name(&self) -> &'static str {
        match self {
            XRecordValue::String(_) => "string",
            XRecordValue::Double(_) => "double",
            XRecordValue::Int16(_) => "int16",
            XRecordValue::Int32(_) => "int32",
            XRecordValue::Bool(_) => "bool",
            XRecordValue::Point3D(_) => "point",
            XRecordValue::Handle(_) => "handle",
            XRecordValue::Binary(_) => "binary",
        }
    }
}

/// One group-code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct XRecordEntry {
    pub code: i32,
    pub value: XRecordValue,
}

impl XRecordEntry {
    pub fn new(code: i32, value: XRecordValue) -> Self {
        XRecordEntry { code, value }
    }
}

/// Application-defined key-value record
#[derive(Debug, Clone, PartialEq)]
pub struct XRecord {
    /// Unique handle
    pub handle: Handle,
    /// Key of the record in its owning dictionary
    pub name: String,
    pub entries: Vec<XRecordEntry>,
}

impl XRecord {
    pub fn new(name: impl Into<String>) -> Self {
        XRecord {
            handle: Handle::NULL,
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, code: i32, value: XRecordValue) {
        self.entries.push(XRecordEntry::new(code, value));
    }
}
