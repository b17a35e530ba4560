//! Standard rolled profiles priced by the table weight.

use crate::errors::CalcResult;
use crate::profiles::{lookup, piece_mass, ProfileFamily};
use crate::units::{Kilograms, Millimeters};

/// Rolled profile piece: `lookup(family, size) · l / 1000`.
///
/// The size is validated before the length: an unlisted size is always an
/// [`UnknownSize`](crate::errors::CalcError::UnknownSize) error, even when the
/// length is blank.
pub fn rolled_profile_mass(
    family: ProfileFamily,
    size_mm: u32,
    length: Millimeters,
) -> CalcResult<Option<Kilograms>> {
    let unit_weight = lookup(family, size_mm)?;
    Ok(length.present().map(|l| piece_mass(unit_weight, l)))
}
