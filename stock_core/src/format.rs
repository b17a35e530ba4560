//! # Number Formatting
//!
//! Results are computed at full precision and rounded only for display.
//! The panel shows 3 fractional digits with a comma separator (`61,654`);
//! the profile ledger shows 2.

use serde::{Deserialize, Serialize};

use crate::shapes::Quantity;

/// Fractional digits used on the profile ledger page
pub const LEDGER_DECIMAL_PLACES: usize = 2;

/// Format `value` with a fixed number of fractional digits and the given
/// decimal separator. No thousands grouping.
///
/// ```rust
/// use stock_core::format::format_decimal;
///
/// assert_eq!(format_decimal(61.6539, 3, ','), "61,654");
/// assert_eq!(format_decimal(157.0, 3, '.'), "157.000");
/// ```
pub fn format_decimal(value: f64, places: usize, separator: char) -> String {
    let formatted = format!("{:.*}", places, value);
    if separator == '.' {
        formatted
    } else {
        formatted.replacen('.', &separator.to_string(), 1)
    }
}

/// Display settings for numbers: places and separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub places: usize,
    pub separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            places: 3,
            separator: ',',
        }
    }
}

impl NumberFormat {
    pub fn decimal(&self, value: f64) -> String {
        format_decimal(value, self.places, self.separator)
    }

    /// A result value, without its unit
    pub fn quantity(&self, quantity: &Quantity) -> String {
        self.decimal(quantity.value())
    }

    /// Same separator at the ledger's precision
    pub fn ledger(&self) -> NumberFormat {
        NumberFormat {
            places: LEDGER_DECIMAL_PLACES,
            ..*self
        }
    }
}

/// Format a result with the panel defaults: 3 places, comma separator
pub fn format_quantity(quantity: &Quantity) -> String {
    NumberFormat::default().quantity(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Kilograms, Meters};

    #[test]
    fn test_comma_separator() {
        assert_eq!(format_decimal(19.625, 3, ','), "19,625");
        assert_eq!(format_decimal(0.5, 3, ','), "0,500");
        assert_eq!(format_decimal(1234.5678, 2, ','), "1234,57");
    }

    #[test]
    fn test_zero_places_has_no_separator() {
        assert_eq!(format_decimal(367.8, 0, ','), "368");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(&Quantity::Mass(Kilograms(157.0))), "157,000");
        assert_eq!(format_quantity(&Quantity::Length(Meters(2.45))), "2,450");
    }

    #[test]
    fn test_ledger_precision() {
        let fmt = NumberFormat::default().ledger();
        assert_eq!(fmt.decimal(367.8), "367,80");
    }
}
