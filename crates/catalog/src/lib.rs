//! Embedded reference table of known exoplanets.
//!
//! A fixed, read-only dataset for browsing and export; nothing here is
//! computed at runtime. Parameters follow the NASA Exoplanet Archive
//! confirmed-planet tables, with masses quoted as M·sin i where only a
//! radial-velocity solution exists.

use std::fmt::Write;

use serde::Serialize;

#[cfg(test)]
mod catalog_test;

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceExoplanet {
    /// Planet designation
    pub name: &'static str,
    /// Host star name
    pub host_star: &'static str,
    /// Planet mass in Earth masses (minimum mass for RV-only detections)
    pub mass_earth: f64,
    /// Orbital semi-major axis in AU
    pub orbital_radius_au: f64,
    /// Orbital period in days
    pub period_days: f64,
    /// Published equilibrium temperature in Kelvin
    pub equilibrium_temp_k: f64,
    /// Whether the orbit falls in the host star's liquid-water zone
    pub in_habitable_zone: bool,
}

/// The reference table, ordered by discovery era then distance.
pub const CATALOG: &[ReferenceExoplanet] = &[
    ReferenceExoplanet {
        name: "51 Pegasi b",
        host_star: "51 Pegasi",
        mass_earth: 149.0,
        orbital_radius_au: 0.0527,
        period_days: 4.23,
        equilibrium_temp_k: 1260.0,
        in_habitable_zone: false,
    },
    ReferenceExoplanet {
        name: "HD 209458 b",
        host_star: "HD 209458",
        mass_earth: 219.0,
        orbital_radius_au: 0.0475,
        period_days: 3.52,
        equilibrium_temp_k: 1450.0,
        in_habitable_zone: false,
    },
    ReferenceExoplanet {
        name: "55 Cancri e",
        host_star: "55 Cancri",
        mass_earth: 7.99,
        orbital_radius_au: 0.0154,
        period_days: 0.74,
        equilibrium_temp_k: 1958.0,
        in_habitable_zone: false,
    },
    ReferenceExoplanet {
        name: "GJ 1214 b",
        host_star: "GJ 1214",
        mass_earth: 8.17,
        orbital_radius_au: 0.0149,
        period_days: 1.58,
        equilibrium_temp_k: 596.0,
        in_habitable_zone: false,
    },
    ReferenceExoplanet {
        name: "WASP-12 b",
        host_star: "WASP-12",
        mass_earth: 441.0,
        orbital_radius_au: 0.0234,
        period_days: 1.09,
        equilibrium_temp_k: 2580.0,
        in_habitable_zone: false,
    },
    ReferenceExoplanet {
        name: "Kepler-22 b",
        host_star: "Kepler-22",
        mass_earth: 9.1,
        orbital_radius_au: 0.849,
        period_days: 289.86,
        equilibrium_temp_k: 262.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "Kepler-62 f",
        host_star: "Kepler-62",
        mass_earth: 2.8,
        orbital_radius_au: 0.718,
        period_days: 267.29,
        equilibrium_temp_k: 208.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "Kepler-452 b",
        host_star: "Kepler-452",
        mass_earth: 5.0,
        orbital_radius_au: 1.046,
        period_days: 384.84,
        equilibrium_temp_k: 265.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "Proxima Centauri b",
        host_star: "Proxima Centauri",
        mass_earth: 1.27,
        orbital_radius_au: 0.0485,
        period_days: 11.19,
        equilibrium_temp_k: 234.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "TRAPPIST-1 e",
        host_star: "TRAPPIST-1",
        mass_earth: 0.69,
        orbital_radius_au: 0.0293,
        period_days: 6.10,
        equilibrium_temp_k: 250.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "TOI-700 d",
        host_star: "TOI-700",
        mass_earth: 1.72,
        orbital_radius_au: 0.163,
        period_days: 37.42,
        equilibrium_temp_k: 269.0,
        in_habitable_zone: true,
    },
    ReferenceExoplanet {
        name: "K2-18 b",
        host_star: "K2-18",
        mass_earth: 8.63,
        orbital_radius_au: 0.159,
        period_days: 32.94,
        equilibrium_temp_k: 255.0,
        in_habitable_zone: true,
    },
];

/// CSV column header matching [`ReferenceExoplanet::csv_row`]
pub const CSV_HEADER: &str =
    "name,host_star,mass_earth,orbital_radius_au,period_days,eq_temp_k,habitable";

impl ReferenceExoplanet {
    /// One CSV row, without a trailing newline
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{:.2},{:.4},{:.2},{:.0},{}",
            self.name,
            self.host_star,
            self.mass_earth,
            self.orbital_radius_au,
            self.period_days,
            self.equilibrium_temp_k,
            self.in_habitable_zone,
        )
    }
}

/// The whole table as delimited text, header first.
pub fn to_csv() -> String {
    let mut out = String::with_capacity(CATALOG.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for planet in CATALOG {
        // writeln! on a String cannot fail
        let _ = writeln!(out, "{}", planet.csv_row());
    }
    out
}

/// Look up a planet by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ReferenceExoplanet> {
    CATALOG
        .iter()
        .find(|planet| planet.name.eq_ignore_ascii_case(name))
}
