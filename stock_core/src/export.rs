//! # Tables and CSV Export
//!
//! [`ResultTable`] is the display form of a module's results: a header row
//! and one string row per valid input row, already formatted. The same table
//! feeds the CLI renderer and the CSV writer, so exported columns always
//! match what was shown.
//!
//! ## Example
//!
//! ```rust
//! use stock_core::export::{ResultTable, write_csv};
//! use stock_core::format::NumberFormat;
//! use stock_core::modules::ModuleId;
//! use stock_core::session::Session;
//! use stock_core::settings::PanelSettings;
//!
//! let mut session = Session::new();
//! session.set_number(ModuleId::SquareBar, "side", 1, 50.0).unwrap();
//! session.set_number(ModuleId::SquareBar, "length", 1, 1000.0).unwrap();
//! let results = session.evaluate(ModuleId::SquareBar, &PanelSettings::default()).unwrap().results;
//!
//! let table = ResultTable::from_results(ModuleId::SquareBar, &results, &NumberFormat::default());
//! let mut out = Vec::new();
//! write_csv(&table, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Row,Side (mm),Length (mm),kg/piece\n1,50,1000,\"19,625\"\n"
//! );
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::NumberFormat;
use crate::modules::ModuleId;
use crate::profiles::{ProfileFamily, ProfileLedgerEntry};
use crate::shapes::CalculationResult;

/// A formatted table ready for display or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Input measurements: whole numbers without decimals, others as typed
fn format_measurement(value: f64, fmt: &NumberFormat) -> String {
    let plain = value.to_string();
    if fmt.separator == '.' {
        plain
    } else {
        plain.replacen('.', &fmt.separator.to_string(), 1)
    }
}

impl ResultTable {
    /// Table of one calculator page's valid rows
    pub fn from_results(module: ModuleId, results: &[CalculationResult], fmt: &NumberFormat) -> Self {
        let mut headers = vec!["Row".to_string()];
        headers.extend(module.result_columns().iter().map(|h| h.to_string()));
        headers.push(module.unit_label().unwrap_or("Value").to_string());

        let rows = results
            .iter()
            .map(|result| {
                let mut row = vec![result.row.to_string()];
                row.extend(
                    result
                        .input
                        .measurements()
                        .into_iter()
                        .map(|(_, value)| format_measurement(value, fmt)),
                );
                row.push(fmt.quantity(&result.quantity));
                row
            })
            .collect();

        ResultTable {
            title: module.label().to_string(),
            headers,
            rows,
        }
    }

    /// Profile ledger: designation, 1 m and 6 m weights
    pub fn from_ledger<'a>(entries: impl IntoIterator<Item = &'a ProfileLedgerEntry>, fmt: &NumberFormat) -> Self {
        let rows = entries
            .into_iter()
            .map(|e| {
                vec![
                    e.designation.clone(),
                    fmt.decimal(e.weight_1m.0),
                    fmt.decimal(e.weight_6m.0),
                ]
            })
            .collect();
        ResultTable {
            title: "Profile weight ledger".to_string(),
            headers: vec!["Profile".to_string(), "1 m kg".to_string(), "6 m kg".to_string()],
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ledger entries, optionally limited to one family
pub fn ledger_rows(family: Option<ProfileFamily>) -> Vec<&'static ProfileLedgerEntry> {
    crate::profiles::ledger()
        .iter()
        .filter(|e| family.map_or(true, |f| e.family == f))
        .collect()
}

/// Write a table as CSV, header first
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> CalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&table.headers)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer
        .flush()
        .map_err(|e| CalcError::serialization(format!("CSV flush: {}", e)))?;
    Ok(())
}

/// Write a table to a CSV file, replacing any existing file
pub fn export_csv(table: &ResultTable, path: &Path) -> CalcResult<()> {
    let file = File::create(path)
        .map_err(|e| CalcError::file_error("create", path.display().to_string(), e.to_string()))?;
    write_csv(table, file)?;
    tracing::info!(path = %path.display(), rows = table.rows.len(), "exported table");
    Ok(())
}
