//! Hollow sections: seamless tube by mass, box/round structural tube by length.

use crate::units::{Kilograms, Meters, Millimeters};

use super::solid::solid_round;
use super::RoundFormula;

/// Inner diameter actually used for a tube.
///
/// An entered inner diameter wins over the wall thickness. Otherwise it is
/// `max(D − 2t, 0)`. Returns `None` when neither is entered.
pub fn effective_inner_diameter(
    outer_diameter: Millimeters,
    wall: Millimeters,
    inner_diameter: Option<Millimeters>,
) -> Option<Millimeters> {
    match inner_diameter.and_then(Millimeters::present) {
        Some(inner) => Some(inner),
        None => wall
            .present()
            .map(|t| Millimeters((outer_diameter.0 - 2.0 * t.0).max(0.0))),
    }
}

/// Seamless tube: outer round section minus inner round section.
///
/// Requires outer diameter and length, plus at least one of wall thickness
/// or inner diameter. An inner diameter that is not smaller than the outer
/// diameter leaves no wall, so the row has no result.
pub fn tube_mass(
    outer_diameter: Millimeters,
    wall: Millimeters,
    length: Millimeters,
    inner_diameter: Option<Millimeters>,
    formula: RoundFormula,
) -> Option<Kilograms> {
    let (d, l) = (outer_diameter.present()?, length.present()?);
    let d_eff = effective_inner_diameter(d, wall, inner_diameter)?;
    if d_eff.0 >= d.0 {
        tracing::debug!(outer = d.0, inner = d_eff.0, "tube has no wall");
        return None;
    }

    let outer = solid_round(d, l, formula);
    let inner = solid_round(d_eff, l, formula);
    Some(outer - inner)
}

/// Box or round structural tube ordered by length: `l / 1000` meters
pub fn hollow_section_length(length: Millimeters) -> Option<Meters> {
    length.present().map(Meters::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::solid::round_rod_mass;

    fn mm(v: f64) -> Millimeters {
        Millimeters(v)
    }

    #[test]
    fn test_inner_diameter_overrides_wall() {
        let d_eff = effective_inner_diameter(mm(60.0), mm(5.0), Some(mm(40.0))).unwrap();
        assert_eq!(d_eff.0, 40.0);

        let kg = tube_mass(mm(60.0), mm(5.0), mm(1000.0), Some(mm(40.0)), RoundFormula::Legacy).unwrap();
        let expected = round_rod_mass(mm(60.0), mm(1000.0)).unwrap().0
            - round_rod_mass(mm(40.0), mm(1000.0)).unwrap().0;
        assert!((kg.0 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_inner_diameter_from_wall() {
        let d_eff = effective_inner_diameter(mm(60.0), mm(5.0), None).unwrap();
        assert_eq!(d_eff.0, 50.0);
        // Zero inner diameter counts as not entered
        let d_eff = effective_inner_diameter(mm(60.0), mm(5.0), Some(mm(0.0))).unwrap();
        assert_eq!(d_eff.0, 50.0);
    }

    #[test]
    fn test_thick_wall_clamps_to_solid() {
        let d_eff = effective_inner_diameter(mm(20.0), mm(15.0), None).unwrap();
        assert_eq!(d_eff.0, 0.0);
        let kg = tube_mass(mm(20.0), mm(15.0), mm(1000.0), None, RoundFormula::Legacy).unwrap();
        let solid = round_rod_mass(mm(20.0), mm(1000.0)).unwrap();
        assert!((kg.0 - solid.0).abs() < 1e-12);
    }

    #[test]
    fn test_tube_needs_wall_or_inner() {
        assert!(tube_mass(mm(60.0), mm(0.0), mm(1000.0), None, RoundFormula::Legacy).is_none());
        assert!(tube_mass(mm(0.0), mm(5.0), mm(1000.0), None, RoundFormula::Legacy).is_none());
        assert!(tube_mass(mm(60.0), mm(5.0), mm(0.0), None, RoundFormula::Legacy).is_none());
    }

    #[test]
    fn test_inner_not_smaller_than_outer_has_no_result() {
        assert!(tube_mass(mm(60.0), mm(0.0), mm(1000.0), Some(mm(60.0)), RoundFormula::Legacy).is_none());
        assert!(tube_mass(mm(60.0), mm(5.0), mm(1000.0), Some(mm(70.0)), RoundFormula::Legacy).is_none());
    }

    #[test]
    fn test_hollow_section_length() {
        assert_eq!(hollow_section_length(mm(2450.0)), Some(Meters(2.45)));
        assert_eq!(hollow_section_length(mm(0.0)), None);
    }
}
