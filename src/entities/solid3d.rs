//! 3D solid entity
//!
//! The geometry is ACIS modeler data that this crate stores but does not
//! interpret.

use super::EntityCommon;

#[derive(Debug, Clone, PartialEq)]
pub struct Solid3D {
    pub common: EntityCommon,
    /// ACIS format version
    pub acis_version: i16,
    /// SAT text, one record per line
    pub acis_data: String,
}

impl Solid3D {
    pub fn new(acis_data: impl Into<String>) -> Self {
        Solid3D {
            common: EntityCommon::new(),
            acis_version: 1,
            acis_data: acis_data.into(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.acis_data.lines().filter(|l| !l.trim().is_empty()).count()
    }
}

impl_entity!(Solid3D, "3DSOLID");
