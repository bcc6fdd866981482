//! Line weight representation for CAD entities

use std::fmt;

/// Represents line weight in AutoCAD
///
/// Line weights are specified in 1/100 mm or can be special values
/// like ByLayer, ByBlock, or Default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineWeight {
    /// Use the layer's line weight
    #[default]
    ByLayer,
    /// Use the block's line weight
    ByBlock,
    /// Default line weight
    Default,
    /// Specific line weight in 1/100 mm (0-211)
    Value(i16),
}

/// Standard weights with an associated constant
const STANDARD_WEIGHTS: [(i16, &str); 24] = [
    (0, "W0_00"),
    (5, "W0_05"),
    (9, "W0_09"),
    (13, "W0_13"),
    (15, "W0_15"),
    (18, "W0_18"),
    (20, "W0_20"),
    (25, "W0_25"),
    (30, "W0_30"),
    (35, "W0_35"),
    (40, "W0_40"),
    (50, "W0_50"),
    (53, "W0_53"),
    (60, "W0_60"),
    (70, "W0_70"),
    (80, "W0_80"),
    (90, "W0_90"),
    (100, "W1_00"),
    (106, "W1_06"),
    (120, "W1_20"),
    (140, "W1_40"),
    (158, "W1_58"),
    (200, "W2_00"),
    (211, "W2_11"),
];

impl LineWeight {
    pub const W0_00: LineWeight = LineWeight::Value(0);
    pub const W0_05: LineWeight = LineWeight::Value(5);
    pub const W0_09: LineWeight = LineWeight::Value(9);
    pub const W0_13: LineWeight = LineWeight::Value(13);
    pub const W0_15: LineWeight = LineWeight::Value(15);
    pub const W0_18: LineWeight = LineWeight::Value(18);
    pub const W0_20: LineWeight = LineWeight::Value(20);
    pub const W0_25: LineWeight = LineWeight::Value(25);
    pub const W0_30: LineWeight = LineWeight::Value(30);
    pub const W0_35: LineWeight = LineWeight::Value(35);
    pub const W0_40: LineWeight = LineWeight::Value(40);
    pub const W0_50: LineWeight = LineWeight::Value(50);
    pub const W0_53: LineWeight = LineWeight::Value(53);
    pub const W0_60: LineWeight = LineWeight::Value(60);
    pub const W0_70: LineWeight = LineWeight::Value(70);
    pub const W0_80: LineWeight = LineWeight::Value(80);
    pub const W0_90: LineWeight = LineWeight::Value(90);
    pub const W1_00: LineWeight = LineWeight::Value(100);
    pub const W1_06: LineWeight = LineWeight::Value(106);
    pub const W1_20: LineWeight = LineWeight::Value(120);
    pub const W1_40: LineWeight = LineWeight::Value(140);
    pub const W1_58: LineWeight = LineWeight::Value(158);
    pub const W2_00: LineWeight = LineWeight::Value(200);
    pub const W2_11: LineWeight = LineWeight::Value(211);

    /// Create a line weight from a raw value
    pub fn from_value(value: i16) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v => LineWeight::Value(v),
        }
    }

    /// Get the raw value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    /// Name of the associated constant, for standard weights
    pub fn constant_name(&self) -> Option<&'static str> {
        match self {
            LineWeight::Value(v) => STANDARD_WEIGHTS
                .iter()
                .find(|(value, _)| value == v)
                .map(|(_, name)| *name),
            _ => None,
        }
    }
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "ByLayer"),
            LineWeight::ByBlock => write!(f, "ByBlock"),
            LineWeight::Default => write!(f, "Default"),
            LineWeight::Value(v) => write!(f, "{:.2}mm", *v as f64 / 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_weight_from_value() {
        assert_eq!(LineWeight::from_value(-1), LineWeight::ByLayer);
        assert_eq!(LineWeight::from_value(-2), LineWeight::ByBlock);
        assert_eq!(LineWeight::from_value(-3), LineWeight::Default);
        assert_eq!(LineWeight::from_value(25), LineWeight::Value(25));
    }

    #[test]
    fn test_constant_name() {
        assert_eq!(LineWeight::W0_25.constant_name(), Some("W0_25"));
        assert_eq!(LineWeight::W2_11.constant_name(), Some("W2_11"));
        assert_eq!(LineWeight::Value(26).constant_name(), None);
        assert_eq!(LineWeight::ByBlock.constant_name(), None);
    }

    #[test]
    fn test_line_weight_display() {
        assert_eq!(LineWeight::ByLayer.to_string(), "ByLayer");
        assert_eq!(LineWeight::W0_25.to_string(), "0.25mm");
    }
}
