//! # Unit Types
//!
//! Type-safe wrappers for the handful of metric units the panel works in.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Units
//!
//! - Geometry is entered in millimeters (mm)
//! - Lengths are reported in meters (m)
//! - Masses are reported in kilograms (kg)
//! - Rolled-profile tables give linear mass in kilograms per meter (kg/m)
//! - Densities are in grams per cubic centimeter (g/cm³)
//!
//! ## Example
//!
//! ```rust
//! use stock_core::units::{KgPerMeter, Meters, Millimeters};
//!
//! let length: Meters = Millimeters(6000.0).into();
//! assert_eq!(length.0, 6.0);
//!
//! let mass = KgPerMeter(61.3) * length;
//! assert!((mass.0 - 367.8).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Millimeters {
    /// A measurement counts as entered only when it is finite and strictly
    /// positive. Zero, negative and NaN all mean "absent".
    pub fn is_present(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// `Some(self)` if the measurement is present
    pub fn present(self) -> Option<Self> {
        self.is_present().then_some(self)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Linear mass in kilograms per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerMeter(pub f64);

impl Mul<Meters> for KgPerMeter {
    type Output = Kilograms;

    fn mul(self, rhs: Meters) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

impl Sub for Kilograms {
    type Output = Kilograms;

    fn sub(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 - rhs.0)
    }
}

// ============================================================================
// Density
// ============================================================================

/// Density in grams per cubic centimeter (numerically equal to kg/dm³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerCm3(pub f64);

impl GramsPerCm3 {
    /// Carbon steel
    pub const STEEL: GramsPerCm3 = GramsPerCm3(7.85);
    /// Cast polyamide ("kestamit") plate
    pub const POLYMER: GramsPerCm3 = GramsPerCm3(1.365);
}

impl Default for GramsPerCm3 {
    fn default() -> Self {
        GramsPerCm3::STEEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let m: Meters = Millimeters(2500.0).into();
        assert_eq!(m.0, 2.5);
    }

    #[test]
    fn test_presence_policy() {
        assert!(Millimeters(0.1).is_present());
        assert!(!Millimeters(0.0).is_present());
        assert!(!Millimeters(-3.0).is_present());
        assert!(!Millimeters(f64::NAN).is_present());
        assert_eq!(Millimeters(4.0).present(), Some(Millimeters(4.0)));
        assert_eq!(Millimeters(0.0).present(), None);
    }

    #[test]
    fn test_linear_mass() {
        let mass = KgPerMeter(20.4) * Meters(2.0);
        assert!((mass.0 - 40.8).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Kilograms(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let d: GramsPerCm3 = serde_json::from_str("1.365").unwrap();
        assert_eq!(d, GramsPerCm3::POLYMER);
    }
}
