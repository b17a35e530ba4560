//! # Panel Modules
//!
//! The panel is a set of pages ("modules"), one per calculator plus the
//! profile ledger and the stock-code builder. Each module has a stable key,
//! a fixed field set and a row count. The form host stores field values
//! under `"<module>_<field>_<row>"`, so clearing a module means walking its
//! field set across every row.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;
use crate::profiles::ProfileFamily;

/// Maximum number of parallel input rows on a calculator page
pub const MAX_ROWS: usize = 5;

/// How a field's value is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Millimeter measurement
    Number,
    /// Nominal size picked from a profile table
    Size,
    /// Free text or a choice stored as text
    Text,
}

/// One input field of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn number(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Number,
    }
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const PLATE_FIELDS: &[FieldSpec] = &[
    number("thickness", "Thickness (mm)"),
    number("width", "Width (mm)"),
    number("length", "Length (mm)"),
];
const ROUND_ROD_FIELDS: &[FieldSpec] = &[number("diameter", "Diameter (mm)"), number("length", "Length (mm)")];
const HEX_BAR_FIELDS: &[FieldSpec] = &[
    number("across_flats", "Across flats (mm)"),
    number("length", "Length (mm)"),
];
const SQUARE_BAR_FIELDS: &[FieldSpec] = &[number("side", "Side (mm)"), number("length", "Length (mm)")];
const FLAT_BAR_FIELDS: &[FieldSpec] = &[
    number("width", "Width (mm)"),
    number("height", "Height (mm)"),
    number("length", "Length (mm)"),
];
const ANGLE_FIELDS: &[FieldSpec] = &[
    number("leg", "Leg (mm)"),
    number("wall", "Wall (mm)"),
    number("length", "Length (mm)"),
];
const TUBE_FIELDS: &[FieldSpec] = &[
    number("outer_diameter", "Outer diameter (mm)"),
    number("wall", "Wall (mm)"),
    number("length", "Length (mm)"),
    number("inner_diameter", "Inner diameter (mm, optional)"),
];
const HOLLOW_SECTION_FIELDS: &[FieldSpec] = &[number("length", "Length (mm)")];
const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "size",
        label: "Size (mm)",
        kind: FieldKind::Size,
    },
    number("length", "Length (mm)"),
];
const LEDGER_FIELDS: &[FieldSpec] = &[text("profile", "Profile")];
const STOCK_CODE_FIELDS: &[FieldSpec] = &[
    text("kind", "Code kind (finished/semi)"),
    text("producer", "Producer (HK/HT/FL/FT)"),
    text("order_no", "Order no."),
    text("unit_code", "Unit code"),
    text("item_no", "Item no."),
    text("drawing_no", "Drawing no."),
    text("sub1", "Sub-position 1"),
    text("sub2", "Sub-position 2"),
    text("sub3", "Sub-position 3"),
];

/// A panel page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    PolymerPlate,
    SteelPlate,
    RoundRod,
    HexBar,
    SquareBar,
    FlatBar,
    Angle,
    Tube,
    HollowSection,
    Npu,
    Heb,
    Hea,
    Npi,
    ProfileLedger,
    StockCode,
}

impl ModuleId {
    /// Every module, in menu order
    pub const ALL: [ModuleId; 15] = [
        ModuleId::PolymerPlate,
        ModuleId::SteelPlate,
        ModuleId::RoundRod,
        ModuleId::HexBar,
        ModuleId::SquareBar,
        ModuleId::FlatBar,
        ModuleId::Angle,
        ModuleId::Tube,
        ModuleId::HollowSection,
        ModuleId::Npu,
        ModuleId::Heb,
        ModuleId::Hea,
        ModuleId::Npi,
        ModuleId::ProfileLedger,
        ModuleId::StockCode,
    ];

    /// Stable key used in field keys and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ModuleId::PolymerPlate => "polymer_plate",
            ModuleId::SteelPlate => "steel_plate",
            ModuleId::RoundRod => "round_rod",
            ModuleId::HexBar => "hex_bar",
            ModuleId::SquareBar => "square_bar",
            ModuleId::FlatBar => "flat_bar",
            ModuleId::Angle => "angle",
            ModuleId::Tube => "tube",
            ModuleId::HollowSection => "hollow_section",
            ModuleId::Npu => "npu",
            ModuleId::Heb => "heb",
            ModuleId::Hea => "hea",
            ModuleId::Npi => "npi",
            ModuleId::ProfileLedger => "profile_ledger",
            ModuleId::StockCode => "stock_code",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleId::PolymerPlate => "Polyamide plate weight",
            ModuleId::SteelPlate => "Steel plate weight",
            ModuleId::RoundRod => "Round rod weight",
            ModuleId::HexBar => "Hex bar weight",
            ModuleId::SquareBar => "Square bar weight",
            ModuleId::FlatBar => "Flat bar weight",
            ModuleId::Angle => "Equal-leg angle weight",
            ModuleId::Tube => "Seamless tube weight",
            ModuleId::HollowSection => "Box/round section length",
            ModuleId::Npu => "NPU profile weight",
            ModuleId::Heb => "HEB profile weight",
            ModuleId::Hea => "HEA profile weight",
            ModuleId::Npi => "NPI profile weight",
            ModuleId::ProfileLedger => "Profile weight ledger",
            ModuleId::StockCode => "Stock code builder",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ModuleId::PolymerPlate | ModuleId::SteelPlate => PLATE_FIELDS,
            ModuleId::RoundRod => ROUND_ROD_FIELDS,
            ModuleId::HexBar => HEX_BAR_FIELDS,
            ModuleId::SquareBar => SQUARE_BAR_FIELDS,
            ModuleId::FlatBar => FLAT_BAR_FIELDS,
            ModuleId::Angle => ANGLE_FIELDS,
            ModuleId::Tube => TUBE_FIELDS,
            ModuleId::HollowSection => HOLLOW_SECTION_FIELDS,
            ModuleId::Npu | ModuleId::Heb | ModuleId::Hea | ModuleId::Npi => PROFILE_FIELDS,
            ModuleId::ProfileLedger => LEDGER_FIELDS,
            ModuleId::StockCode => STOCK_CODE_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Number of input rows on the page
    pub fn rows(&self) -> usize {
        if self.is_calculator() {
            MAX_ROWS
        } else {
            1
        }
    }

    /// True for pages that produce per-row results
    pub fn is_calculator(&self) -> bool {
        !matches!(self, ModuleId::ProfileLedger | ModuleId::StockCode)
    }

    /// Profile table behind a lookup page
    pub fn profile_family(&self) -> Option<ProfileFamily> {
        match self {
            ModuleId::Npu => Some(ProfileFamily::Npu),
            ModuleId::Heb => Some(ProfileFamily::Heb),
            ModuleId::Hea => Some(ProfileFamily::Hea),
            ModuleId::Npi => Some(ProfileFamily::Npi),
            _ => None,
        }
    }

    /// Lookup page for a profile family
    pub fn for_family(family: ProfileFamily) -> ModuleId {
        match family {
            ProfileFamily::Npu => ModuleId::Npu,
            ProfileFamily::Heb => ModuleId::Heb,
            ProfileFamily::Hea => ModuleId::Hea,
            ProfileFamily::Npi => ModuleId::Npi,
        }
    }

    /// Result column heading, `None` for pages without per-row results
    pub fn unit_label(&self) -> Option<&'static str> {
        match self {
            ModuleId::HollowSection => Some("m/piece"),
            ModuleId::ProfileLedger | ModuleId::StockCode => None,
            _ => Some("kg/piece"),
        }
    }

    /// Measurement column headings of the result table, in display order
    pub fn result_columns(&self) -> &'static [&'static str] {
        match self {
            ModuleId::PolymerPlate | ModuleId::SteelPlate => &["Thickness (mm)", "Width (mm)", "Length (mm)"],
            ModuleId::RoundRod => &["Diameter (mm)", "Length (mm)"],
            ModuleId::HexBar => &["Across flats (mm)", "Length (mm)"],
            ModuleId::SquareBar => &["Side (mm)", "Length (mm)"],
            ModuleId::FlatBar => &["Width (mm)", "Height (mm)", "Length (mm)"],
            ModuleId::Angle => &["Leg (mm)", "Wall (mm)", "Length (mm)"],
            ModuleId::Tube => &[
                "Outer diameter (mm)",
                "Wall (mm)",
                "Inner diameter (mm)",
                "Length (mm)",
            ],
            ModuleId::HollowSection => &["Length (mm)"],
            ModuleId::Npu | ModuleId::Heb | ModuleId::Hea | ModuleId::Npi => &["Size (mm)", "Length (mm)"],
            ModuleId::ProfileLedger | ModuleId::StockCode => &[],
        }
    }

    /// Storage key for one field value
    pub fn field_key(&self, field: &str, row: usize) -> String {
        format!("{}_{}_{}", self.key(), field, row)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ModuleId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        ModuleId::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| CalcError::unknown_module(s))
    }
}
