//! Raster variables object

use crate::types::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    Draft,
    #[default]
    High,
}

/// Units used to scale inserted images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageUnits {
    #[default]
    None,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

/// Drawing-wide settings for raster images
#[derive(Debug, Clone, PartialEq)]
pub struct RasterVariables {
    /// Unique handle
    pub handle: Handle,
    /// Draw a frame around images
    pub display_frame: bool,
    pub image_quality: ImageQuality,
    pub units: ImageUnits,
}

impl RasterVariables {
    pub fn new() -> Self {
        RasterVariables {
            handle: Handle::NULL,
            display_frame: true,
            image_quality: ImageQuality::High,
            units: ImageUnits::None,
        }
    }
}

impl Default for RasterVariables {
    fn default() -> Self {
        Self::new()
    }
}
