//! # Session State
//!
//! A [`Session`] is one operator's working form: every value typed into any
//! module, keyed `"<module>_<field>_<row>"`. A session lives for one run of
//! the form host and is never written to disk.
//!
//! ## Structure
//!
//! ```text
//! Session
//! ├── meta: SessionMetadata (id, timestamps)
//! ├── active_module: Option<ModuleId>
//! └── fields: BTreeMap<String, FieldValue> ("npu_length_1" -> Number(6000.0))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stock_core::modules::ModuleId;
//! use stock_core::session::Session;
//! use stock_core::settings::PanelSettings;
//!
//! let mut session = Session::new();
//! session.set_size(ModuleId::Heb, "size", 1, 200).unwrap();
//! session.set_number(ModuleId::Heb, "length", 1, 6000.0).unwrap();
//!
//! let evaluation = session.evaluate(ModuleId::Heb, &PanelSettings::default()).unwrap();
//! assert!(evaluation.errors.is_empty());
//! assert!((evaluation.results[0].quantity.value() - 367.8).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::modules::{FieldKind, ModuleId};
use crate::profiles::{ledger, ledger_entry, ProfileLedgerEntry};
use crate::settings::PanelSettings;
use crate::shapes::{calculate, CalculationResult, PlateMaterial, ShapeInput};
use crate::stock_code::{FinishedGoodCode, ProducerCode, SemiFinishedCode, StockCode, StockCodeKind};

/// A single stored field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    Number(f64),
    Size(u32),
    Text(String),
}

impl FieldValue {
    fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Size(_) => FieldKind::Size,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }
}

/// Session identity and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// A row that could not be evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub error: CalcError,
}

/// Outcome of evaluating a calculator page. A bad row lands in `errors`
/// without affecting the other rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleEvaluation {
    /// Rows with a result, in row order
    pub results: Vec<CalculationResult>,
    pub errors: Vec<RowError>,
}

/// Per-operator form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMetadata,

    /// Page currently shown, if any
    pub active_module: Option<ModuleId>,

    /// Field values keyed `"<module>_<field>_<row>"`. Absent keys are blank fields.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Session {
            meta: SessionMetadata {
                id: Uuid::new_v4(),
                created: now,
                modified: now,
            },
            active_module: None,
            fields: BTreeMap::new(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Resolve the storage key, checking field name, kind and row.
    fn key_for(&self, module: ModuleId, field: &str, row: usize, kind: FieldKind) -> CalcResult<String> {
        let spec = module
            .field(field)
            .ok_or_else(|| CalcError::unknown_field(module.key(), field))?;
        if spec.kind != kind {
            return Err(CalcError::invalid_input(
                module.field_key(field, row),
                format!("{:?}", kind),
                format!("Field expects a {:?} value", spec.kind),
            ));
        }
        if row == 0 || row > module.rows() {
            return Err(CalcError::RowOutOfRange {
                row,
                max: module.rows(),
            });
        }
        Ok(module.field_key(field, row))
    }

    fn set(&mut self, module: ModuleId, field: &str, row: usize, value: FieldValue) -> CalcResult<()> {
        let key = self.key_for(module, field, row, value.kind())?;
        self.fields.insert(key, value);
        self.touch();
        Ok(())
    }

    /// Store a millimeter measurement. NaN and infinities are rejected.
    pub fn set_number(&mut self, module: ModuleId, field: &str, row: usize, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                module.field_key(field, row),
                value.to_string(),
                "Measurement must be a finite number",
            ));
        }
        self.set(module, field, row, FieldValue::Number(value))
    }

    /// Store a profile size selection. Unlisted sizes are accepted here and
    /// rejected when the row is evaluated.
    pub fn set_size(&mut self, module: ModuleId, field: &str, row: usize, size_mm: u32) -> CalcResult<()> {
        self.set(module, field, row, FieldValue::Size(size_mm))
    }

    pub fn set_text(&mut self, module: ModuleId, field: &str, row: usize, value: impl Into<String>) -> CalcResult<()> {
        self.set(module, field, row, FieldValue::Text(value.into()))
    }

    pub fn number(&self, module: ModuleId, field: &str, row: usize) -> Option<f64> {
        match self.fields.get(&module.field_key(field, row)) {
            Some(FieldValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn size(&self, module: ModuleId, field: &str, row: usize) -> Option<u32> {
        match self.fields.get(&module.field_key(field, row)) {
            Some(FieldValue::Size(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, module: ModuleId, field: &str, row: usize) -> Option<&str> {
        match self.fields.get(&module.field_key(field, row)) {
            Some(FieldValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Blank fields read as zero, which every calculator treats as absent
    fn measurement(&self, module: ModuleId, field: &str, row: usize) -> f64 {
        self.number(module, field, row).unwrap_or(0.0)
    }

    fn text_or_empty(&self, field: &str) -> &str {
        self.text(ModuleId::StockCode, field, 1).unwrap_or("")
    }

    /// Clear every field of `module` across all rows. Returns how many
    /// values were removed.
    pub fn clear(&mut self, module: ModuleId) -> usize {
        let mut removed = 0;
        for spec in module.fields() {
            for row in 1..=module.rows() {
                if self.fields.remove(&module.field_key(spec.name, row)).is_some() {
                    removed += 1;
                }
            }
        }
        if removed > 0 {
            self.touch();
        }
        tracing::info!(module = module.key(), removed, "cleared module");
        removed
    }

    /// Clear every module, the stock-code fields included.
    pub fn clear_all(&mut self) -> usize {
        let removed = ModuleId::ALL.into_iter().map(|m| self.clear(m)).sum();
        tracing::info!(removed, "cleared all modules");
        removed
    }

    /// Make `module` the active page. Switching to a different page starts
    /// it blank; re-selecting the current page keeps its values. Returns
    /// whether the page changed.
    pub fn switch_module(&mut self, module: ModuleId) -> bool {
        if self.active_module == Some(module) {
            return false;
        }
        self.clear(module);
        self.active_module = Some(module);
        self.touch();
        true
    }

    /// Build the calculator input for one row from the stored values.
    ///
    /// A lookup row without a size selection uses the smallest table size.
    pub fn row_input(&self, module: ModuleId, row: usize) -> CalcResult<ShapeInput> {
        if row == 0 || row > module.rows() {
            return Err(CalcError::RowOutOfRange {
                row,
                max: module.rows(),
            });
        }
        let m = |field: &str| self.measurement(module, field, row);

        let input = match module {
            ModuleId::PolymerPlate | ModuleId::SteelPlate => ShapeInput::Plate {
                material: if module == ModuleId::PolymerPlate {
                    PlateMaterial::Polymer
                } else {
                    PlateMaterial::Steel
                },
                thickness_mm: m("thickness"),
                width_mm: m("width"),
                length_mm: m("length"),
            },
            ModuleId::RoundRod => ShapeInput::RoundRod {
                diameter_mm: m("diameter"),
                length_mm: m("length"),
            },
            ModuleId::HexBar => ShapeInput::HexBar {
                across_flats_mm: m("across_flats"),
                length_mm: m("length"),
            },
            ModuleId::SquareBar => ShapeInput::SquareBar {
                side_mm: m("side"),
                length_mm: m("length"),
            },
            ModuleId::FlatBar => ShapeInput::FlatBar {
                width_mm: m("width"),
                height_mm: m("height"),
                length_mm: m("length"),
            },
            ModuleId::Angle => ShapeInput::Angle {
                leg_mm: m("leg"),
                wall_mm: m("wall"),
                length_mm: m("length"),
            },
            ModuleId::Tube => ShapeInput::Tube {
                outer_diameter_mm: m("outer_diameter"),
                wall_mm: m("wall"),
                length_mm: m("length"),
                inner_diameter_mm: self.number(module, "inner_diameter", row),
            },
            ModuleId::HollowSection => ShapeInput::HollowSection { length_mm: m("length") },
            ModuleId::Npu | ModuleId::Heb | ModuleId::Hea | ModuleId::Npi => {
                let family = module
                    .profile_family()
                    .ok_or_else(|| CalcError::Internal {
                        message: format!("module {} has no profile table", module),
                    })?;
                ShapeInput::RolledProfile {
                    family,
                    size_mm: self
                        .size(module, "size", row)
                        .unwrap_or_else(|| family.smallest_size()),
                    length_mm: m("length"),
                }
            }
            ModuleId::ProfileLedger | ModuleId::StockCode => {
                return Err(CalcError::invalid_input(
                    "module",
                    module.key(),
                    "Module has no per-row calculator",
                ))
            }
        };
        Ok(input)
    }

    /// Evaluate a single row. `Ok(None)` when the row is incomplete.
    pub fn evaluate_row(
        &self,
        module: ModuleId,
        row: usize,
        settings: &PanelSettings,
    ) -> CalcResult<Option<CalculationResult>> {
        let input = self.row_input(module, row)?;
        let quantity = calculate(&input, &settings.calc_options())?;
        Ok(quantity.map(|quantity| CalculationResult { row, input, quantity }))
    }

    /// Evaluate every row of a calculator page.
    ///
    /// Incomplete rows are skipped. A row that can never be valid (e.g. an
    /// unknown profile size) is collected as a [`RowError`] and the
    /// remaining rows are still evaluated. Fails only for a page without a
    /// calculator.
    pub fn evaluate(&self, module: ModuleId, settings: &PanelSettings) -> CalcResult<ModuleEvaluation> {
        if !module.is_calculator() {
            return Err(CalcError::invalid_input(
                "module",
                module.key(),
                "Module has no per-row calculator",
            ));
        }

        let rows = settings.rows_per_module.min(module.rows());
        let mut evaluation = ModuleEvaluation::default();
        for row in 1..=rows {
            match self.evaluate_row(module, row, settings) {
                Ok(Some(result)) => evaluation.results.push(result),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(module = module.key(), row, error = %error, "row not evaluated");
                    evaluation.errors.push(RowError { row, error });
                }
            }
        }
        tracing::debug!(
            module = module.key(),
            rows,
            valid = evaluation.results.len(),
            failed = evaluation.errors.len(),
            "evaluated module"
        );
        Ok(evaluation)
    }

    /// Selected code scheme. Blank means finished good.
    pub fn stock_code_kind(&self) -> CalcResult<StockCodeKind> {
        match self.text_or_empty("kind").trim() {
            "" => Ok(StockCodeKind::default()),
            kind => kind.parse(),
        }
    }

    /// Build the stock code from the stock-code page fields.
    ///
    /// A blank producer defaults to `HK`.
    pub fn stock_code(&self) -> CalcResult<StockCode> {
        let code = match self.stock_code_kind()? {
            StockCodeKind::Finished => FinishedGoodCode {
                order_no: self.text_or_empty("order_no").to_string(),
                unit_code: self.text_or_empty("unit_code").to_string(),
                item_no: self.text_or_empty("item_no").to_string(),
            }
            .build(),
            StockCodeKind::SemiFinished => {
                let producer = match self.text_or_empty("producer").trim() {
                    "" => ProducerCode::default(),
                    code => code.parse()?,
                };
                let opt = |field: &str| self.text(ModuleId::StockCode, field, 1).map(str::to_string);
                SemiFinishedCode {
                    producer,
                    order_no: self.text_or_empty("order_no").to_string(),
                    item_no: self.text_or_empty("item_no").to_string(),
                    drawing_no: opt("drawing_no"),
                    sub_positions: [opt("sub1"), opt("sub2"), opt("sub3")],
                }
                .build()
            }
        };
        tracing::debug!(code = code.as_str(), len = code.char_len(), "built stock code");
        Ok(code)
    }

    /// Ledger entry picked on the ledger page. Defaults to the first entry.
    pub fn ledger_selection(&self) -> CalcResult<&'static ProfileLedgerEntry> {
        match self.text(ModuleId::ProfileLedger, "profile", 1) {
            Some(designation) if !designation.trim().is_empty() => ledger_entry(designation),
            _ => ledger()
                .first()
                .ok_or_else(|| CalcError::Internal {
                    message: "profile ledger is empty".to_string(),
                }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
