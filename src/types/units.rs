//! Unit and format settings used by drawing header variables

/// Units of inserted content (INSUNITS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingUnits {
    #[default]
    Unitless,
    Inches,
    Feet,
    Miles,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
}

/// Display format of linear values (LUNITS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearUnitFormat {
    Scientific,
    #[default]
    Decimal,
    Engineering,
    Architectural,
    Fractional,
}

/// Display format of angles (AUNITS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngularUnitFormat {
    #[default]
    DecimalDegrees,
    DegreesMinutesSeconds,
    Gradians,
    Radians,
    SurveyorsUnits,
}

/// Drawing measurement system (MEASUREMENT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementSystem {
    #[default]
    Imperial,
    Metric,
}
