//! # Rolled Profile Tables
//!
//! Unit weights for the four standard rolled-steel series the shop stocks,
//! plus the profile weight ledger (1 m and 6 m weights per designation).
//!
//! Tables are `'static` and read-only; they are the only process-wide state
//! in the crate and need no locking.
//!
//! ## Example
//!
//! ```rust
//! use stock_core::profiles::{lookup, ProfileFamily};
//!
//! let heb200 = lookup(ProfileFamily::Heb, 200).unwrap();
//! assert_eq!(heb200.0, 61.30);
//!
//! assert!(lookup(ProfileFamily::Heb, 210).is_err());
//! ```

pub mod ledger;
pub mod tables;

pub use ledger::{ledger, ledger_entry, ProfileLedgerEntry};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::{KgPerMeter, Kilograms, Millimeters};

/// Standard rolled-steel profile series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProfileFamily {
    /// U channel (UPN)
    #[serde(rename = "NPU")]
    Npu,
    /// Light wide-flange beam
    #[serde(rename = "HEA")]
    Hea,
    /// Medium wide-flange beam
    #[serde(rename = "HEB")]
    Heb,
    /// Tapered-flange I-beam (IPN)
    #[serde(rename = "NPI")]
    Npi,
}

impl ProfileFamily {
    /// All families, in ledger order
    pub const ALL: [ProfileFamily; 4] = [
        ProfileFamily::Hea,
        ProfileFamily::Heb,
        ProfileFamily::Npi,
        ProfileFamily::Npu,
    ];

    /// Designation prefix as printed on the weight sheets
    pub fn code(&self) -> &'static str {
        match self {
            ProfileFamily::Npu => "NPU",
            ProfileFamily::Hea => "HEA",
            ProfileFamily::Heb => "HEB",
            ProfileFamily::Npi => "NPI",
        }
    }

    /// Coefficient table: `(nominal size mm, kg/m)` sorted by size
    pub fn table(&self) -> &'static [(u32, f64)] {
        match self {
            ProfileFamily::Npu => tables::NPU,
            ProfileFamily::Hea => tables::HEA,
            ProfileFamily::Heb => tables::HEB,
            ProfileFamily::Npi => tables::NPI,
        }
    }

    /// Nominal sizes available for this family, ascending
    pub fn sizes(&self) -> impl Iterator<Item = u32> {
        self.table().iter().map(|&(size, _)| size)
    }

    /// The smallest listed size (what a fresh size selector shows)
    pub fn smallest_size(&self) -> u32 {
        self.table()[0].0
    }

    /// Check whether `size_mm` is a key of this family's table
    pub fn has_size(&self, size_mm: u32) -> bool {
        self.table()
            .binary_search_by_key(&size_mm, |&(size, _)| size)
            .is_ok()
    }
}

impl std::fmt::Display for ProfileFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ProfileFamily {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NPU" | "UPN" => Ok(ProfileFamily::Npu),
            "HEA" => Ok(ProfileFamily::Hea),
            "HEB" => Ok(ProfileFamily::Heb),
            "NPI" | "IPN" => Ok(ProfileFamily::Npi),
            _ => Err(CalcError::invalid_input(
                "family",
                s,
                "Expected one of NPU, HEA, HEB, NPI",
            )),
        }
    }
}

/// Look up the unit weight of a profile.
///
/// Fails with [`CalcError::UnknownSize`] when `size_mm` is not listed for
/// the family.
pub fn lookup(family: ProfileFamily, size_mm: u32) -> CalcResult<KgPerMeter> {
    let table = family.table();
    match table.binary_search_by_key(&size_mm, |&(size, _)| size) {
        Ok(idx) => Ok(KgPerMeter(table[idx].1)),
        Err(_) => {
            tracing::warn!(%family, size_mm, "profile size not in table");
            Err(CalcError::unknown_size(family, size_mm))
        }
    }
}

/// Mass of one piece of `length` cut from stock weighing `unit_weight`.
///
/// Kept as `kg/m · mm / 1000` in that order so a 6000 mm piece matches the
/// ledger's 6 m column bit for bit.
pub(crate) fn piece_mass(unit_weight: KgPerMeter, length: Millimeters) -> Kilograms {
    Kilograms(unit_weight.0 * length.0 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_sizes() {
        assert_eq!(lookup(ProfileFamily::Npu, 65).unwrap().0, 7.09);
        assert_eq!(lookup(ProfileFamily::Hea, 600).unwrap().0, 178.00);
        assert_eq!(lookup(ProfileFamily::Heb, 200).unwrap().0, 61.30);
        assert_eq!(lookup(ProfileFamily::Npi, 425).unwrap().0, 104.00);
    }

    #[test]
    fn test_lookup_unknown_size() {
        let err = lookup(ProfileFamily::Npu, 90).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownSize {
                family: ProfileFamily::Npu,
                size: 90
            }
        );
        assert!(lookup(ProfileFamily::Npi, 0).is_err());
    }

    #[test]
    fn test_superset_sizes_present() {
        // Sizes that only appear in later sheet revisions
        for size in [220, 240, 260, 280, 350, 400] {
            assert!(ProfileFamily::Npu.has_size(size), "NPU {}", size);
        }
        for size in [140, 340, 360, 600] {
            assert!(ProfileFamily::Heb.has_size(size), "HEB {}", size);
        }
    }

    #[test]
    fn test_smallest_size() {
        assert_eq!(ProfileFamily::Npu.smallest_size(), 60);
        assert_eq!(ProfileFamily::Npi.smallest_size(), 80);
        assert_eq!(ProfileFamily::Heb.sizes().next(), Some(100));
    }

    #[test]
    fn test_family_parsing() {
        assert_eq!("heb".parse::<ProfileFamily>().unwrap(), ProfileFamily::Heb);
        assert_eq!(" UPN ".parse::<ProfileFamily>().unwrap(), ProfileFamily::Npu);
        assert!("IPE".parse::<ProfileFamily>().is_err());
    }

    #[test]
    fn test_family_serialization() {
        let json = serde_json::to_string(&ProfileFamily::Npi).unwrap();
        assert_eq!(json, "\"NPI\"");
        let roundtrip: ProfileFamily = serde_json::from_str("\"HEA\"").unwrap();
        assert_eq!(roundtrip, ProfileFamily::Hea);
    }
}
