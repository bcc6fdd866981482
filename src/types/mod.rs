//! Value types shared by the document model and the generated programs

pub mod color;
pub mod handle;
pub mod line_weight;
pub mod time;
pub mod transparency;
pub mod units;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use time::{datetime, duration, Duration, NaiveDateTime};
pub use transparency::Transparency;
pub use units::{AngularUnitFormat, DrawingUnits, LinearUnitFormat, MeasurementSystem};
pub use vector::{Vector2, Vector3};

/// Tolerance used when comparing floating point values
pub const EPSILON: f64 = 1e-10;

/// Compare two floats within [`EPSILON`]
///
/// Non-finite values compare by identity so that `NaN` equals `NaN`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-11));
        assert!(!approx_eq(1.0, 1.0 + 1e-9));
    }

    #[test]
    fn test_approx_eq_non_finite() {
        assert!(approx_eq(f64::NAN, f64::NAN));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::NAN, 0.0));
    }
}
