//! Tests for the radial-velocity relation, both directions.

use approx::assert_relative_eq;
use units::{Mass, Time, Velocity};

use crate::orbit::Orbit;
use crate::radial_velocity::{amplitude_from_planet_mass, planet_mass_from_amplitude};

// ========== Mass from velocity ==========

#[test]
fn test_mass_from_solar_year_signal() {
    // 10 m/s over a one-year period around a Sun-like star works out to a
    // sub-Saturn of ~112 Earth masses
    let orbit = Orbit::circular_edge_on(Time::from_days(365.0));
    let mass = planet_mass_from_amplitude(
        Velocity::from_meters_per_sec(10.0),
        Mass::from_solar_masses(1.0),
        &orbit,
    );
    assert!(
        (mass.to_earth_masses() - 111.8).abs() < 1.0,
        "expected ~112 M⊕, got {}",
        mass.to_earth_masses()
    );
}

#[test]
fn test_mass_scales_linearly_with_amplitude() {
    let orbit = Orbit::circular_edge_on(Time::from_days(200.0));
    let star = Mass::from_solar_masses(1.0);

    let single = planet_mass_from_amplitude(Velocity::from_meters_per_sec(5.0), star, &orbit);
    let double = planet_mass_from_amplitude(Velocity::from_meters_per_sec(10.0), star, &orbit);

    assert_relative_eq!(
        double.to_earth_masses(),
        2.0 * single.to_earth_masses(),
        max_relative = 1e-12
    );
}

#[test]
fn test_inclined_orbit_raises_minimum_mass() {
    // The observed amplitude only carries the line-of-sight projection, so a
    // tilted orbit hides mass: the same signal implies a heavier planet.
    let star = Mass::from_solar_masses(1.0);
    let amplitude = Velocity::from_meters_per_sec(10.0);

    let edge_on = Orbit::new(Time::from_days(365.0), 0.0, 90.0);
    let tilted = Orbit::new(Time::from_days(365.0), 0.0, 30.0);

    let m_edge = planet_mass_from_amplitude(amplitude, star, &edge_on);
    let m_tilted = planet_mass_from_amplitude(amplitude, star, &tilted);

    // sin(30°) = 0.5 exactly doubles the implied mass
    assert_relative_eq!(
        m_tilted.to_earth_masses(),
        2.0 * m_edge.to_earth_masses(),
        max_relative = 1e-9
    );
}

#[test]
fn test_eccentric_orbit_lowers_implied_mass() {
    let star = Mass::from_solar_masses(1.0);
    let amplitude = Velocity::from_meters_per_sec(10.0);

    let circular = Orbit::new(Time::from_days(365.0), 0.0, 90.0);
    let eccentric = Orbit::new(Time::from_days(365.0), 0.6, 90.0);

    let m_circ = planet_mass_from_amplitude(amplitude, star, &circular);
    let m_ecc = planet_mass_from_amplitude(amplitude, star, &eccentric);

    assert!(
        m_ecc < m_circ,
        "sqrt(1 - e²) must shrink the implied mass for eccentric orbits"
    );
    assert_relative_eq!(
        m_ecc.to_earth_masses(),
        m_circ.to_earth_masses() * (1.0_f64 - 0.36).sqrt(),
        max_relative = 1e-9
    );
}

// ========== Velocity from mass ==========

#[test]
fn test_earth_induces_centimeter_scale_signal() {
    // Earth pulls the Sun around at only ~0.09 m/s, the classic argument for
    // why RV surveys find giants first
    let orbit = Orbit::circular_edge_on(Time::from_days(365.25));
    let k = amplitude_from_planet_mass(
        Mass::from_earth_masses(1.0),
        Mass::from_solar_masses(1.0),
        &orbit,
    );
    assert!(
        (k.to_meters_per_sec() - 0.09).abs() < 0.005,
        "Earth's reflex signal should be ~0.09 m/s, got {}",
        k.to_meters_per_sec()
    );
}

#[test]
fn test_jupiter_analog_signal() {
    let orbit = Orbit::circular_edge_on(Time::from_days(4332.6));
    let k = amplitude_from_planet_mass(
        Mass::from_jupiter_masses(1.0),
        Mass::from_solar_masses(1.0),
        &orbit,
    );
    assert!(
        (k.to_meters_per_sec() - 12.5).abs() < 0.5,
        "Jupiter's reflex signal should be ~12.5 m/s, got {}",
        k.to_meters_per_sec()
    );
}

// ========== Round trip ==========

#[test]
fn test_round_trip_recovers_mass() {
    // mass -> K -> mass. The two directions differ at leading order by the
    // (M★ + M_p) vs M★ denominator, so the recovered mass is off by about
    // (2/3)·M_p/M★ relative; the tolerance below sits above that bound for
    // every case in the grid.
    let star = Mass::from_solar_masses(1.0);
    let cases = [
        (1.0, 365.0, 0.0, 90.0),
        (5.0, 88.0, 0.2, 60.0),
        (17.1, 600.0, 0.05, 85.0),
        (100.0, 30.0, 0.4, 45.0),
    ];

    for (mass_earth, period_days, ecc, inc_deg) in cases {
        let orbit = Orbit::new(Time::from_days(period_days), ecc, inc_deg);
        let original = Mass::from_earth_masses(mass_earth);

        let k = amplitude_from_planet_mass(original, star, &orbit);
        let recovered = planet_mass_from_amplitude(k, star, &orbit);

        assert_relative_eq!(
            recovered.to_earth_masses(),
            mass_earth,
            max_relative = 1e-3
        );
    }
}

#[test]
fn test_round_trip_low_mass_is_nearly_exact() {
    // For an Earth-mass planet the system-mass correction is ~2 parts per
    // million, so the round trip should be tight.
    let star = Mass::from_solar_masses(1.0);
    let orbit = Orbit::new(Time::from_days(365.0), 0.1, 75.0);

    let k = amplitude_from_planet_mass(Mass::from_earth_masses(1.0), star, &orbit);
    let recovered = planet_mass_from_amplitude(k, star, &orbit);

    assert_relative_eq!(recovered.to_earth_masses(), 1.0, max_relative = 1e-5);
}
