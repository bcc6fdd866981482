//! Image definition object

use crate::types::{Handle, Vector2};

/// Unit of the image resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionUnit {
    #[default]
    None,
    Centimeters,
    Inches,
}

/// Raster image file referenced by image entities
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDefinition {
    /// Unique handle
    pub handle: Handle,
    /// Path of the image file
    pub file_name: String,
    /// Image size in pixels
    pub size_in_pixels: Vector2,
    /// Size of one pixel in drawing units
    pub pixel_size: Vector2,
    pub is_loaded: bool,
    pub resolution_unit: ResolutionUnit,
}

impl ImageDefinition {
    pub fn new(file_name: impl Into<String>) -> Self {
        ImageDefinition {
            handle: Handle::NULL,
            file_name: file_name.into(),
            size_in_pixels: Vector2::ZERO,
            pixel_size: Vector2::new(1.0, 1.0),
            is_loaded: true,
            resolution_unit: ResolutionUnit::None,
        }
    }
}
