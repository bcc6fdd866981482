//! Application ID table entry

use super::TableEntry;

/// Registered application name used to tag extended data
#[derive(Debug, Clone, PartialEq)]
pub struct AppId {
    pub name: String,
    /// Free-form description
    pub description: String,
}

impl AppId {
    pub fn new(name: impl Into<String>) -> Self {
        AppId {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Create the standard "ACAD" application ID
    pub fn acad() -> Self {
        Self::new("ACAD")
    }
}

impl TableEntry for AppId {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
