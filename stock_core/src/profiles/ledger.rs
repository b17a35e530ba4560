//! Profile weight ledger
//!
//! One entry per designation ("HEB 200") with the weight of a 1 m piece and
//! of a standard 6 m bar. The ledger is derived from the coefficient tables,
//! so `weight_6m == 6 × weight_1m` holds for every entry and the ledger can
//! never drift from what the profile calculators return.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{piece_mass, ProfileFamily};
use crate::errors::{CalcError, CalcResult};
use crate::units::{KgPerMeter, Kilograms, Millimeters};

/// Standard stock bar length in millimeters
pub const STOCK_BAR_MM: f64 = 6000.0;

/// A named profile with its 1 m and 6 m weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLedgerEntry {
    /// Designation, e.g. "HEB 200"
    pub designation: String,
    pub family: ProfileFamily,
    pub size_mm: u32,
    /// Weight of a 1 m piece (kg)
    pub weight_1m: Kilograms,
    /// Weight of a 6 m stock bar (kg)
    pub weight_6m: Kilograms,
}

static LEDGER: Lazy<Vec<ProfileLedgerEntry>> = Lazy::new(|| {
    ProfileFamily::ALL
        .iter()
        .flat_map(|&family| {
            family.table().iter().map(move |&(size_mm, kg_per_m)| ProfileLedgerEntry {
                designation: format!("{} {}", family.code(), size_mm),
                family,
                size_mm,
                weight_1m: Kilograms(kg_per_m),
                weight_6m: piece_mass(KgPerMeter(kg_per_m), Millimeters(STOCK_BAR_MM)),
            })
        })
        .collect()
});

/// The full ledger, ordered by family (HEA, HEB, NPI, NPU) then by numeric
/// size, so "NPU 60" comes before "NPU 100". A plain string sort of the
/// designations would put "NPU 100" first.
pub fn ledger() -> &'static [ProfileLedgerEntry] {
    &LEDGER
}

/// Find a ledger entry by designation.
///
/// Accepts "HEB 200", "heb200" and similar spellings.
pub fn ledger_entry(designation: &str) -> CalcResult<&'static ProfileLedgerEntry> {
    let compact: String = designation.split_whitespace().collect();
    let split = compact
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| invalid_designation(designation))?;
    let (prefix, digits) = compact.split_at(split);

    let family: ProfileFamily = prefix.parse().map_err(|_| invalid_designation(designation))?;
    let size_mm: u32 = digits.parse().map_err(|_| invalid_designation(designation))?;

    LEDGER
        .iter()
        .find(|e| e.family == family && e.size_mm == size_mm)
        .ok_or_else(|| CalcError::unknown_size(family, size_mm))
}

fn invalid_designation(designation: &str) -> CalcError {
    CalcError::invalid_input(
        "designation",
        designation,
        "Expected a family and size such as 'HEB 200'",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_covers_every_table_row() {
        let expected: usize = ProfileFamily::ALL.iter().map(|f| f.table().len()).sum();
        assert_eq!(ledger().len(), expected);
    }

    #[test]
    fn test_six_meter_invariant() {
        for entry in ledger() {
            let six = entry.weight_1m.0 * 6.0;
            assert!(
                (entry.weight_6m.0 - six).abs() < 1e-9,
                "{}: {} vs {}",
                entry.designation,
                entry.weight_6m.0,
                six
            );
        }
    }

    #[test]
    fn test_known_entries() {
        let heb = ledger_entry("HEB 200").unwrap();
        assert_eq!(heb.weight_1m.0, 61.30);
        assert!((heb.weight_6m.0 - 367.80).abs() < 1e-9);

        let npu = ledger_entry("npu60").unwrap();
        assert!((npu.weight_6m.0 - 30.42).abs() < 1e-9);

        let npi = ledger_entry("NPI  600").unwrap();
        assert!((npi.weight_6m.0 - 1194.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_designations() {
        assert_eq!(ledger_entry("HEB").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(ledger_entry("IPE 200").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(ledger_entry("HEB 210").unwrap_err().error_code(), "UNKNOWN_SIZE");
    }

    #[test]
    fn test_ledger_order() {
        let first = &ledger()[0];
        assert_eq!(first.designation, "HEA 100");
        let last = ledger().last().unwrap();
        assert_eq!(last.designation, "NPU 400");

        let npu: Vec<_> = ledger().iter().filter(|e| e.family == ProfileFamily::Npu).collect();
        assert_eq!(npu[0].designation, "NPU 60");
        assert!(npu.windows(2).all(|w| w[0].size_mm < w[1].size_mm));
    }
}
