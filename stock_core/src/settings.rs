//! # Panel Settings
//!
//! Tunables that apply to every module: plate densities, the round-section
//! formula, number display and whether results recompute live.
//!
//! Settings are plain JSON. Every field has a default, so a settings file
//! only needs the values it changes:
//!
//! ```rust
//! use stock_core::settings::{PanelSettings, InteractionMode};
//!
//! let settings: PanelSettings = serde_json::from_str(r#"{ "interaction": "Live" }"#).unwrap();
//! assert_eq!(settings.interaction, InteractionMode::Live);
//! assert_eq!(settings.decimal_places, 3);
//! settings.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::NumberFormat;
use crate::modules::MAX_ROWS;
use crate::shapes::{CalcOptions, RoundFormula};
use crate::units::GramsPerCm3;

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Largest number of fractional digits accepted for display
pub const MAX_DECIMAL_PLACES: usize = 9;

/// When results are recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Compute once all rows are entered
    #[default]
    Submit,
    /// Recompute after every row
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub steel_density: GramsPerCm3,
    pub polymer_density: GramsPerCm3,
    pub round_formula: RoundFormula,
    pub decimal_places: usize,
    pub decimal_separator: char,
    pub interaction: InteractionMode,
    /// Rows evaluated per calculator page (1..=5)
    pub rows_per_module: usize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        PanelSettings {
            version: SCHEMA_VERSION.to_string(),
            steel_density: GramsPerCm3::STEEL,
            polymer_density: GramsPerCm3::POLYMER,
            round_formula: RoundFormula::Legacy,
            decimal_places: 3,
            decimal_separator: ',',
            interaction: InteractionMode::Submit,
            rows_per_module: MAX_ROWS,
        }
    }
}

impl PanelSettings {
    /// Check that every value is usable.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, density) in [
            ("steel_density", self.steel_density),
            ("polymer_density", self.polymer_density),
        ] {
            if !(density.0.is_finite() && density.0 > 0.0) {
                return Err(CalcError::invalid_input(
                    field,
                    density.0.to_string(),
                    "Density must be a positive number",
                ));
            }
        }

        if self.rows_per_module == 0 || self.rows_per_module > MAX_ROWS {
            return Err(CalcError::invalid_input(
                "rows_per_module",
                self.rows_per_module.to_string(),
                format!("Must be between 1 and {}", MAX_ROWS),
            ));
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("At most {} places", MAX_DECIMAL_PLACES),
            ));
        }

        if self.decimal_separator.is_ascii_digit() || self.decimal_separator == '-' {
            return Err(CalcError::invalid_input(
                "decimal_separator",
                self.decimal_separator.to_string(),
                "Separator cannot be a digit or minus sign",
            ));
        }

        Ok(())
    }

    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            steel_density: self.steel_density,
            polymer_density: self.polymer_density,
            round_formula: self.round_formula,
        }
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            places: self.decimal_places,
            separator: self.decimal_separator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = PanelSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.calc_options(), CalcOptions::default());
        assert_eq!(settings.number_format(), NumberFormat::default());
    }

    #[test]
    fn test_rows_limit() {
        let mut settings = PanelSettings::default();
        settings.rows_per_module = 6;
        assert!(settings.validate().is_err());
        settings.rows_per_module = 0;
        assert!(settings.validate().is_err());
        settings.rows_per_module = 2;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_density_must_be_positive() {
        let settings = PanelSettings {
            polymer_density: GramsPerCm3(0.0),
            ..PanelSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("polymer_density"));
    }

    #[test]
    fn test_decimal_places_limit() {
        let settings = PanelSettings {
            decimal_places: 12,
            ..PanelSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: PanelSettings =
            serde_json::from_str(r#"{ "round_formula": "Exact", "decimal_separator": "." }"#).unwrap();
        assert_eq!(settings.round_formula, RoundFormula::Exact);
        assert_eq!(settings.number_format().decimal(1.5), "1.500");
        assert_eq!(settings.steel_density, GramsPerCm3::STEEL);
    }
}
