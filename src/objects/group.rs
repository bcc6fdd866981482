//! Group object - Named collection of entities

use crate::types::Handle;

/// Group object - represents a named group of entities
///
/// Entities in a group can be selected and manipulated together. The group
/// holds entity handles, so it must be created after its members.
///
/// # Example
/// ```ignore
/// use acadgen::objects::Group;
/// use acadgen::types::Handle;
///
/// let mut group = Group::new("MyGroup");
/// group.description = "A collection of related entities".to_string();
/// group.add_entity(Handle::new(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Unique handle
    pub handle: Handle,
    /// Group name
    pub name: String,
    /// Group description
    pub description: String,
    /// Entity handles in the group
    pub entities: Vec<Handle>,
    /// Group is selectable (default: true)
    pub selectable: bool,
}

impl Group {
    /// Create a new named group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            entities: Vec::new(),
            selectable: true,
        }
    }

    /// Add an entity to the group, ignoring duplicates
    pub fn add_entity(&mut self, handle: Handle) {
        if !self.entities.contains(&handle) {
            self.entities.push(handle);
        }
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.entities.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_ignores_duplicates() {
        let mut group = Group::new("Doors");
        group.add_entity(Handle::new(0x20));
        group.add_entity(Handle::new(0x20));
        group.add_entity(Handle::new(0x21));
        assert_eq!(group.len(), 2);
        assert!(group.contains(Handle::new(0x21)));
        assert!(group.selectable);
    }
}
