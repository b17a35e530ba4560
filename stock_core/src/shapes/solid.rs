//! Solid sections: plates, bars and angles.
//!
//! Every function takes millimeter measurements and returns `None` when any
//! required measurement is absent (zero, negative or NaN). The factor
//! `0.00785` is steel's 7.85 g/cm³ expressed in kg per mm²·m.

use crate::units::{GramsPerCm3, Kilograms, Millimeters};

use super::RoundFormula;

/// Steel linear density factor: kg per (mm² of section × m of length)
pub const STEEL_KG_PER_MM2_M: f64 = 0.00785;

/// Legacy round-section factor, an approximation of π/4 · 8 / 1000
pub const LEGACY_ROUND_FACTOR: f64 = 0.0062832;

/// Flat plate: `ρ · t · (w/1000) · (l/1000)`
pub fn plate_mass(
    density: GramsPerCm3,
    thickness: Millimeters,
    width: Millimeters,
    length: Millimeters,
) -> Option<Kilograms> {
    let (t, w, l) = (thickness.present()?, width.present()?, length.present()?);
    Some(Kilograms(density.0 * t.0 * (w.0 / 1000.0) * (l.0 / 1000.0)))
}

/// Round steel rod using the legacy shop constant
pub fn round_rod_mass(diameter: Millimeters, length: Millimeters) -> Option<Kilograms> {
    round_section_mass(diameter, length, RoundFormula::Legacy)
}

/// Round steel section of diameter `d` and length `l` under either formula.
///
/// - `Legacy`: `d² · 0.0062832 · l · 7.85 / 8000`
/// - `Exact`: `π/4 · 7.85e-6 · d² · l`
pub fn round_section_mass(
    diameter: Millimeters,
    length: Millimeters,
    formula: RoundFormula,
) -> Option<Kilograms> {
    let (d, l) = (diameter.present()?, length.present()?);
    Some(solid_round(d, l, formula))
}

/// Unchecked round-section mass; callers validate presence.
pub(crate) fn solid_round(d: Millimeters, l: Millimeters, formula: RoundFormula) -> Kilograms {
    let kg = match formula {
        RoundFormula::Legacy => d.0.powi(2) * LEGACY_ROUND_FACTOR * l.0 * GramsPerCm3::STEEL.0 / 8000.0,
        RoundFormula::Exact => std::f64::consts::FRAC_PI_4 * GramsPerCm3::STEEL.0 * 1e-6 * d.0.powi(2) * l.0,
    };
    Kilograms(kg)
}

/// Solid hex bar measured across flats: `a² · l · 0.012 / (√3 · 1000)`
pub fn hex_bar_mass(across_flats: Millimeters, length: Millimeters) -> Option<Kilograms> {
    let (a, l) = (across_flats.present()?, length.present()?);
    Some(Kilograms(a.0.powi(2) * l.0 * 0.012 / (3f64.sqrt() * 1000.0)))
}

/// Solid square bar: `a² · l · 0.00785 / 1000`
pub fn square_bar_mass(side: Millimeters, length: Millimeters) -> Option<Kilograms> {
    let (a, l) = (side.present()?, length.present()?);
    Some(Kilograms(a.0 * a.0 * l.0 * STEEL_KG_PER_MM2_M / 1000.0))
}

/// Flat bar: `w · h · l · 0.00785 / 1000`
pub fn flat_bar_mass(width: Millimeters, height: Millimeters, length: Millimeters) -> Option<Kilograms> {
    let (w, h, l) = (width.present()?, height.present()?, length.present()?);
    Some(Kilograms(w.0 * h.0 * l.0 * STEEL_KG_PER_MM2_M / 1000.0))
}

/// Equal-leg angle: `2 · a · t · l · 0.00785 / 1000`
///
/// Counts both legs at full width, so the corner square is included twice.
pub fn angle_mass(leg: Millimeters, wall: Millimeters, length: Millimeters) -> Option<Kilograms> {
    let (a, t, l) = (leg.present()?, wall.present()?, length.present()?);
    Some(Kilograms(2.0 * a.0 * t.0 * l.0 * STEEL_KG_PER_MM2_M / 1000.0))
}
