//! # Stock Codes
//!
//! Builds hyphen-delimited stock identifiers for two kinds of item:
//!
//! - **Finished goods**: `M-<order>-<unit>-<item>`
//! - **Semi-finished goods**: `Y<producer>-<order>-<item>[-<drawing>][-<sub1>][-<sub2>][-<sub3>]`
//!
//! The builder never rejects input. Fragments are trimmed and empty ones are
//! dropped; no format, length or uniqueness rule is enforced.
//!
//! ## Example
//!
//! ```rust
//! use stock_core::stock_code::{build_finished_good_code, build_semi_finished_code};
//!
//! assert_eq!(build_finished_good_code("M", "OR009-2020", "HEXT50", "40G651"), "M-OR009-2020-HEXT50-40G651");
//! assert_eq!(
//!     build_semi_finished_code("Y", "HK", "ORD1", "ITEM1", "DWG1", "A", "", ""),
//!     "YHK-ORD1-ITEM1-DWG1-A"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

/// Default prefix for finished goods
pub const FINISHED_PREFIX: &str = "M";
/// Default prefix for semi-finished goods
pub const SEMI_FINISHED_PREFIX: &str = "Y";

/// Who makes a semi-finished part, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProducerCode {
    /// Welded fabrication in-house
    #[default]
    #[serde(rename = "HK")]
    Hk,
    /// Machining in-house
    #[serde(rename = "HT")]
    Ht,
    /// Laser and sheet work, subcontracted
    #[serde(rename = "FL")]
    Fl,
    /// Machining, subcontracted
    #[serde(rename = "FT")]
    Ft,
}

impl ProducerCode {
    pub const ALL: [ProducerCode; 4] = [ProducerCode::Hk, ProducerCode::Ht, ProducerCode::Fl, ProducerCode::Ft];

    /// Two-letter code as it appears in the stock code
    pub fn code(&self) -> &'static str {
        match self {
            ProducerCode::Hk => "HK",
            ProducerCode::Ht => "HT",
            ProducerCode::Fl => "FL",
            ProducerCode::Ft => "FT",
        }
    }

    /// Manufacturing route, for display only
    pub fn description(&self) -> &'static str {
        match self {
            ProducerCode::Hk => "Welded fabrication (in-house)",
            ProducerCode::Ht => "Machining (in-house)",
            ProducerCode::Fl => "Laser & sheet metal (subcontracted)",
            ProducerCode::Ft => "Machining (subcontracted)",
        }
    }
}

impl std::fmt::Display for ProducerCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl FromStr for ProducerCode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProducerCode::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::invalid_input("producer", s, "Expected one of HK, HT, FL, FT"))
    }
}

/// Which coding scheme to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockCodeKind {
    #[default]
    Finished,
    SemiFinished,
}

impl FromStr for StockCodeKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "finished" | "m" => Ok(StockCodeKind::Finished),
            "semi" | "semi-finished" | "semifinished" | "y" => Ok(StockCodeKind::SemiFinished),
            _ => Err(CalcError::invalid_input("kind", s, "Expected 'finished' or 'semi'")),
        }
    }
}

/// Join the non-blank, trimmed fragments with `-`
fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Finished-good code: prefix, order number, unit code and item number.
pub fn build_finished_good_code(prefix: &str, order_no: &str, unit_code: &str, item_no: &str) -> String {
    join_fragments([prefix, order_no, unit_code, item_no])
}

/// Semi-finished code.
///
/// `prefix` and `producer_code` are glued into one fragment with no
/// separator; drawing number and sub-positions follow only when non-blank.
#[allow(clippy::too_many_arguments)]
pub fn build_semi_finished_code(
    prefix: &str,
    producer_code: &str,
    order_no: &str,
    item_no: &str,
    drawing_no: &str,
    sub1: &str,
    sub2: &str,
    sub3: &str,
) -> String {
    let head = format!("{}{}", prefix, producer_code);
    join_fragments([head.as_str(), order_no, item_no, drawing_no, sub1, sub2, sub3])
}

/// Finished-good code fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinishedGoodCode {
    pub order_no: String,
    pub unit_code: String,
    pub item_no: String,
}

impl FinishedGoodCode {
    pub fn build(&self) -> StockCode {
        StockCode(build_finished_good_code(
            FINISHED_PREFIX,
            &self.order_no,
            &self.unit_code,
            &self.item_no,
        ))
    }
}

/// Semi-finished code fields. Drawing number and sub-positions are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemiFinishedCode {
    pub producer: ProducerCode,
    pub order_no: String,
    pub item_no: String,
    #[serde(default)]
    pub drawing_no: Option<String>,
    #[serde(default)]
    pub sub_positions: [Option<String>; 3],
}

impl SemiFinishedCode {
    pub fn build(&self) -> StockCode {
        let opt = |s: &Option<String>| s.clone().unwrap_or_default();
        StockCode(build_semi_finished_code(
            SEMI_FINISHED_PREFIX,
            self.producer.code(),
            &self.order_no,
            &self.item_no,
            &opt(&self.drawing_no),
            &opt(&self.sub_positions[0]),
            &opt(&self.sub_positions[1]),
            &opt(&self.sub_positions[2]),
        ))
    }
}

/// A built stock code. Not validated against anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockCode(pub String);

impl StockCode {
    /// Character count shown next to the code as operator feedback
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for StockCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
