//! Formatting of evaluation results and the reference table.
//!
//! Display precision is fixed: two decimals for masses and distances, one
//! decimal for temperatures.

use std::fmt::Write;

use habitability::Evaluation;

/// Human-readable habitability label
pub fn habitability_label(in_habitable_zone: bool) -> &'static str {
    if in_habitable_zone {
        "likely habitable"
    } else {
        "not in habitable zone"
    }
}

/// Multi-line evaluation report, one labeled quantity per line.
pub fn render(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Planet mass:             {:.2} Earth masses",
        evaluation.planet_mass.to_earth_masses()
    );
    let _ = writeln!(
        out,
        "Radial velocity:         {:.2} m/s",
        evaluation.radial_velocity.to_meters_per_sec()
    );
    let _ = writeln!(
        out,
        "Orbital radius:          {:.2} AU",
        evaluation.orbital_radius.to_au()
    );
    let _ = writeln!(
        out,
        "Equilibrium temperature: {:.1} K",
        evaluation.equilibrium_temperature.to_kelvin()
    );
    let _ = writeln!(
        out,
        "Habitable zone:          {:.2} to {:.2} AU",
        evaluation.habitable_zone.inner.to_au(),
        evaluation.habitable_zone.outer.to_au()
    );
    let _ = writeln!(
        out,
        "Habitability:            {}",
        habitability_label(evaluation.in_habitable_zone)
    );

    out
}

/// The reference table as aligned columns, header first.
pub fn catalog_table() -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<20} {:<18} {:>9} {:>8} {:>10} {:>7}  {}",
        "NAME", "HOST STAR", "MASS(ME)", "SMA(AU)", "PERIOD(D)", "TEQ(K)", "HABITABLE"
    );
    for planet in catalog::CATALOG {
        let _ = writeln!(
            out,
            "{:<20} {:<18} {:>9.2} {:>8.4} {:>10.2} {:>7.0}  {}",
            planet.name,
            planet.host_star,
            planet.mass_earth,
            planet.orbital_radius_au,
            planet.period_days,
            planet.equilibrium_temp_k,
            if planet.in_habitable_zone { "yes" } else { "no" },
        );
    }

    out
}
