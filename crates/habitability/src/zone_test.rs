//! Tests for habitable-zone boundaries and membership.

use approx::assert_relative_eq;
use units::{Length, Luminosity};

use crate::zone::HabitableZone;

#[test]
fn test_solar_zone_boundaries() {
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(1.0));
    assert_relative_eq!(zone.inner.to_au(), 0.95);
    assert_relative_eq!(zone.outer.to_au(), 1.67);
}

#[test]
fn test_boundaries_scale_as_sqrt_luminosity() {
    // Doubling the luminosity pushes both edges out by sqrt(2), and the same
    // scaling holds across the whole luminosity range
    for luminosity in [0.01, 0.5, 1.0, 2.0, 25.0] {
        let base = HabitableZone::from_luminosity(Luminosity::from_solar(luminosity));
        let doubled = HabitableZone::from_luminosity(Luminosity::from_solar(2.0 * luminosity));

        assert_relative_eq!(
            doubled.inner.to_au(),
            base.inner.to_au() * 2.0_f64.sqrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            doubled.outer.to_au(),
            base.outer.to_au() * 2.0_f64.sqrt(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_earth_sits_in_solar_zone() {
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(1.0));
    assert!(zone.contains(Length::from_au(1.0)));
}

#[test]
fn test_venus_and_jupiter_sit_outside() {
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(1.0));
    assert!(!zone.contains(Length::from_au(0.72)));
    assert!(!zone.contains(Length::from_au(5.2)));
}

#[test]
fn test_boundaries_are_inclusive() {
    // A planet exactly on either edge counts as inside
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(1.0));
    assert!(zone.contains(zone.inner));
    assert!(zone.contains(zone.outer));

    // And the smallest step outside does not
    assert!(!zone.contains(zone.inner - Length::from_au(1e-9)));
    assert!(!zone.contains(zone.outer + Length::from_au(1e-9)));
}

#[test]
fn test_dim_star_zone_hugs_the_star() {
    // An M dwarf at 1% solar luminosity keeps its zone inside 0.2 AU,
    // which is why its habitable planets are tidally locked candidates
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(0.01));
    assert!(zone.outer.to_au() < 0.2);
    assert!(zone.inner.to_au() > 0.05);
}

#[test]
fn test_zone_width() {
    let zone = HabitableZone::from_luminosity(Luminosity::from_solar(1.0));
    assert_relative_eq!(zone.width().to_au(), 0.72, max_relative = 1e-12);
}
