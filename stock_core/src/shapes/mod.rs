//! # Shape Calculators
//!
//! Pure functions turning stock dimensions into mass per piece (kg), or
//! length per piece (m) for structural tube ordered by the meter.
//!
//! Each calculation follows the pattern:
//!
//! - [`ShapeInput`] - one row of measurements (JSON-serializable)
//! - [`calculate`] - dispatch to the family's formula
//! - `Ok(None)` - a required measurement is missing or not positive; the row
//!   has no result and is not an error
//!
//! Results are full `f64` precision. Rounding to 3 decimals is left to the
//! caller (see [`crate::format`]).
//!
//! ## Example
//!
//! ```rust
//! use stock_core::shapes::{calculate, CalcOptions, ShapeInput, Quantity};
//!
//! let bar = ShapeInput::SquareBar { side_mm: 50.0, length_mm: 1000.0 };
//! let result = calculate(&bar, &CalcOptions::default()).unwrap();
//! assert!(matches!(result, Some(Quantity::Mass(kg)) if (kg.0 - 19.625).abs() < 1e-9));
//!
//! // Blank length: no result, not an error
//! let blank = ShapeInput::SquareBar { side_mm: 50.0, length_mm: 0.0 };
//! assert_eq!(calculate(&blank, &CalcOptions::default()).unwrap(), None);
//! ```

pub mod hollow;
pub mod rolled;
pub mod solid;

pub use hollow::{effective_inner_diameter, hollow_section_length, tube_mass};
pub use rolled::rolled_profile_mass;
pub use solid::{
    angle_mass, flat_bar_mass, hex_bar_mass, plate_mass, round_rod_mass, round_section_mass,
    square_bar_mass,
};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::profiles::ProfileFamily;
use crate::units::{GramsPerCm3, Kilograms, Meters, Millimeters};

/// Which round-section formula to use for rods and tubes.
///
/// `Legacy` reproduces the shop's historical numbers (constant `0.0062832`);
/// `Exact` uses π/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundFormula {
    #[default]
    Legacy,
    Exact,
}

/// Plate stock material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateMaterial {
    /// Cast polyamide plate
    Polymer,
    /// Steel plate
    Steel,
}

/// Tunables that are not part of a row: plate densities and the round formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalcOptions {
    pub steel_density: GramsPerCm3,
    pub polymer_density: GramsPerCm3,
    pub round_formula: RoundFormula,
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions {
            steel_density: GramsPerCm3::STEEL,
            polymer_density: GramsPerCm3::POLYMER,
            round_formula: RoundFormula::Legacy,
        }
    }
}

impl CalcOptions {
    /// Density used for a plate material
    pub fn density(&self, material: PlateMaterial) -> GramsPerCm3 {
        match material {
            PlateMaterial::Polymer => self.polymer_density,
            PlateMaterial::Steel => self.steel_density,
        }
    }
}

/// One row of measurements for a shape family. All lengths in millimeters.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "Tube", "outer_diameter_mm": 60.0, "wall_mm": 5.0,
///   "length_mm": 1000.0, "inner_diameter_mm": 40.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ShapeInput {
    Plate {
        material: PlateMaterial,
        thickness_mm: f64,
        width_mm: f64,
        length_mm: f64,
    },
    RoundRod {
        diameter_mm: f64,
        length_mm: f64,
    },
    HexBar {
        across_flats_mm: f64,
        length_mm: f64,
    },
    SquareBar {
        side_mm: f64,
        length_mm: f64,
    },
    FlatBar {
        width_mm: f64,
        height_mm: f64,
        length_mm: f64,
    },
    Angle {
        leg_mm: f64,
        wall_mm: f64,
        length_mm: f64,
    },
    Tube {
        outer_diameter_mm: f64,
        wall_mm: f64,
        length_mm: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner_diameter_mm: Option<f64>,
    },
    HollowSection {
        length_mm: f64,
    },
    RolledProfile {
        family: ProfileFamily,
        size_mm: u32,
        length_mm: f64,
    },
}

impl ShapeInput {
    /// Short name for logs and tables
    pub fn shape_name(&self) -> &'static str {
        match self {
            ShapeInput::Plate { .. } => "plate",
            ShapeInput::RoundRod { .. } => "round rod",
            ShapeInput::HexBar { .. } => "hex bar",
            ShapeInput::SquareBar { .. } => "square bar",
            ShapeInput::FlatBar { .. } => "flat bar",
            ShapeInput::Angle { .. } => "angle",
            ShapeInput::Tube { .. } => "tube",
            ShapeInput::HollowSection { .. } => "hollow section",
            ShapeInput::RolledProfile { .. } => "rolled profile",
        }
    }

    /// Measurements as `(column heading, value)` pairs, in table order.
    ///
    /// A tube reports the inner diameter it was computed with, derived from
    /// the wall when none was entered.
    pub fn measurements(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeInput::Plate {
                thickness_mm,
                width_mm,
                length_mm,
                ..
            } => vec![
                ("Thickness (mm)", thickness_mm),
                ("Width (mm)", width_mm),
                ("Length (mm)", length_mm),
            ],
            ShapeInput::RoundRod { diameter_mm, length_mm } => {
                vec![("Diameter (mm)", diameter_mm), ("Length (mm)", length_mm)]
            }
            ShapeInput::HexBar {
                across_flats_mm,
                length_mm,
            } => vec![("Across flats (mm)", across_flats_mm), ("Length (mm)", length_mm)],
            ShapeInput::SquareBar { side_mm, length_mm } => {
                vec![("Side (mm)", side_mm), ("Length (mm)", length_mm)]
            }
            ShapeInput::FlatBar {
                width_mm,
                height_mm,
                length_mm,
            } => vec![
                ("Width (mm)", width_mm),
                ("Height (mm)", height_mm),
                ("Length (mm)", length_mm),
            ],
            ShapeInput::Angle {
                leg_mm,
                wall_mm,
                length_mm,
            } => vec![
                ("Leg (mm)", leg_mm),
                ("Wall (mm)", wall_mm),
                ("Length (mm)", length_mm),
            ],
            ShapeInput::Tube {
                outer_diameter_mm,
                wall_mm,
                length_mm,
                inner_diameter_mm,
            } => {
                let inner = effective_inner_diameter(
                    Millimeters(outer_diameter_mm),
                    Millimeters(wall_mm),
                    inner_diameter_mm.map(Millimeters),
                )
                .map_or(0.0, |d| d.0);
                vec![
                    ("Outer diameter (mm)", outer_diameter_mm),
                    ("Wall (mm)", wall_mm),
                    ("Inner diameter (mm)", inner),
                    ("Length (mm)", length_mm),
                ]
            }
            ShapeInput::HollowSection { length_mm } => vec![("Length (mm)", length_mm)],
            ShapeInput::RolledProfile {
                size_mm, length_mm, ..
            } => vec![("Size (mm)", f64::from(size_mm)), ("Length (mm)", length_mm)],
        }
    }
}

/// A computed per-piece value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value")]
pub enum Quantity {
    /// Mass of one piece
    #[serde(rename = "kg")]
    Mass(Kilograms),
    /// Length of one piece
    #[serde(rename = "m")]
    Length(Meters),
}

impl Quantity {
    /// Raw numeric value
    pub fn value(&self) -> f64 {
        match self {
            Quantity::Mass(kg) => kg.0,
            Quantity::Length(m) => m.0,
        }
    }

    /// Column heading for the value, e.g. "kg/piece"
    pub fn unit_label(&self) -> &'static str {
        match self {
            Quantity::Mass(_) => "kg/piece",
            Quantity::Length(_) => "m/piece",
        }
    }
}

/// A computed value paired with the row it came from (1-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub row: usize,
    pub input: ShapeInput,
    pub quantity: Quantity,
}

/// Run the calculator for one row.
///
/// Returns `Ok(None)` for incomplete rows and `Err` only for a profile size
/// that is not in its table.
pub fn calculate(input: &ShapeInput, options: &CalcOptions) -> CalcResult<Option<Quantity>> {
    let mm = Millimeters;
    let quantity = match *input {
        ShapeInput::Plate {
            material,
            thickness_mm,
            width_mm,
            length_mm,
        } => plate_mass(options.density(material), mm(thickness_mm), mm(width_mm), mm(length_mm))
            .map(Quantity::Mass),
        ShapeInput::RoundRod { diameter_mm, length_mm } => {
            round_section_mass(mm(diameter_mm), mm(length_mm), options.round_formula).map(Quantity::Mass)
        }
        ShapeInput::HexBar {
            across_flats_mm,
            length_mm,
        } => hex_bar_mass(mm(across_flats_mm), mm(length_mm)).map(Quantity::Mass),
        ShapeInput::SquareBar { side_mm, length_mm } => {
            square_bar_mass(mm(side_mm), mm(length_mm)).map(Quantity::Mass)
        }
        ShapeInput::FlatBar {
            width_mm,
            height_mm,
            length_mm,
        } => flat_bar_mass(mm(width_mm), mm(height_mm), mm(length_mm)).map(Quantity::Mass),
        ShapeInput::Angle {
            leg_mm,
            wall_mm,
            length_mm,
        } => angle_mass(mm(leg_mm), mm(wall_mm), mm(length_mm)).map(Quantity::Mass),
        ShapeInput::Tube {
            outer_diameter_mm,
            wall_mm,
            length_mm,
            inner_diameter_mm,
        } => tube_mass(
            mm(outer_diameter_mm),
            mm(wall_mm),
            mm(length_mm),
            inner_diameter_mm.map(mm),
            options.round_formula,
        )
        .map(Quantity::Mass),
        ShapeInput::HollowSection { length_mm } => hollow_section_length(mm(length_mm)).map(Quantity::Length),
        ShapeInput::RolledProfile {
            family,
            size_mm,
            length_mm,
        } => rolled_profile_mass(family, size_mm, mm(length_mm))?.map(Quantity::Mass),
    };

    tracing::debug!(
        shape = input.shape_name(),
        result = ?quantity.map(|q| q.value()),
        "calculated"
    );
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mass(input: ShapeInput) -> Option<f64> {
        calculate(&input, &CalcOptions::default())
            .unwrap()
            .map(|q| q.value())
    }

    #[test]
    fn test_dispatch_plate_uses_material_density() {
        let steel = mass(ShapeInput::Plate {
            material: PlateMaterial::Steel,
            thickness_mm: 10.0,
            width_mm: 1000.0,
            length_mm: 2000.0,
        });
        assert_eq!(steel, Some(157.0));

        let polymer = mass(ShapeInput::Plate {
            material: PlateMaterial::Polymer,
            thickness_mm: 10.0,
            width_mm: 1000.0,
            length_mm: 1000.0,
        })
        .unwrap();
        assert!((polymer - 13.65).abs() < 1e-9);
    }

    #[test]
    fn test_custom_density() {
        let options = CalcOptions {
            steel_density: GramsPerCm3(8.0),
            ..CalcOptions::default()
        };
        let input = ShapeInput::Plate {
            material: PlateMaterial::Steel,
            thickness_mm: 1.0,
            width_mm: 1000.0,
            length_mm: 1000.0,
        };
        let kg = calculate(&input, &options).unwrap().unwrap();
        assert!((kg.value() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_formula_option() {
        let input = ShapeInput::RoundRod {
            diameter_mm: 100.0,
            length_mm: 1000.0,
        };
        let exact = CalcOptions {
            round_formula: RoundFormula::Exact,
            ..CalcOptions::default()
        };
        let legacy = mass(input.clone()).unwrap();
        let closed = calculate(&input, &exact).unwrap().unwrap().value();
        assert!((legacy - 61.6539).abs() < 1e-4);
        assert!((closed - 61.6538).abs() < 1e-4);
        assert_ne!(legacy, closed);
    }

    #[test]
    fn test_hollow_section_reports_length() {
        let q = calculate(&ShapeInput::HollowSection { length_mm: 6000.0 }, &CalcOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(q, Quantity::Length(Meters(6.0)));
        assert_eq!(q.unit_label(), "m/piece");
    }

    #[test]
    fn test_every_shape_with_zero_input_has_no_result() {
        let inputs = vec![
            ShapeInput::Plate {
                material: PlateMaterial::Steel,
                thickness_mm: 0.0,
                width_mm: 100.0,
                length_mm: 100.0,
            },
            ShapeInput::RoundRod {
                diameter_mm: 10.0,
                length_mm: 0.0,
            },
            ShapeInput::HexBar {
                across_flats_mm: 0.0,
                length_mm: 10.0,
            },
            ShapeInput::SquareBar {
                side_mm: -5.0,
                length_mm: 10.0,
            },
            ShapeInput::FlatBar {
                width_mm: 10.0,
                height_mm: 0.0,
                length_mm: 10.0,
            },
            ShapeInput::Angle {
                leg_mm: 10.0,
                wall_mm: 1.0,
                length_mm: 0.0,
            },
            ShapeInput::Tube {
                outer_diameter_mm: 0.0,
                wall_mm: 2.0,
                length_mm: 100.0,
                inner_diameter_mm: None,
            },
            ShapeInput::HollowSection { length_mm: 0.0 },
            ShapeInput::RolledProfile {
                family: ProfileFamily::Npu,
                size_mm: 80,
                length_mm: 0.0,
            },
        ];
        for input in inputs {
            assert_eq!(mass(input.clone()), None, "{:?}", input);
        }
    }

    #[test]
    fn test_unknown_profile_size_is_error() {
        let input = ShapeInput::RolledProfile {
            family: ProfileFamily::Heb,
            size_mm: 150,
            length_mm: 1000.0,
        };
        assert!(calculate(&input, &CalcOptions::default()).is_err());
    }

    #[test]
    fn test_tube_measurements_echo_effective_inner() {
        let input = ShapeInput::Tube {
            outer_diameter_mm: 60.0,
            wall_mm: 5.0,
            length_mm: 1000.0,
            inner_diameter_mm: None,
        };
        let cols = input.measurements();
        assert_eq!(cols[2], ("Inner diameter (mm)", 50.0));
    }

    #[test]
    fn test_input_json_roundtrip() {
        let input = ShapeInput::RolledProfile {
            family: ProfileFamily::Hea,
            size_mm: 240,
            length_mm: 3200.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"shape\":\"RolledProfile\""));
        assert!(json.contains("\"family\":\"HEA\""));
        let roundtrip: ShapeInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_quantity_serialization() {
        let json = serde_json::to_string(&Quantity::Mass(Kilograms(1.5))).unwrap();
        assert_eq!(json, r#"{"unit":"kg","value":1.5}"#);
    }
}
