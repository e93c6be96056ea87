//! Tests for result presentation.

use habitability::{evaluate, HostStar, KnownQuantity, Orbit};
use units::{Time, Velocity};

use crate::report::{catalog_table, habitability_label, render};

fn earth_like_evaluation() -> habitability::Evaluation {
    evaluate(
        &HostStar::solar(),
        &Orbit::new(Time::from_days(365.0), 0.0, 90.0),
        0.3,
        KnownQuantity::RadialVelocity(Velocity::from_meters_per_sec(10.0)),
    )
    .unwrap()
}

#[test]
fn test_labels() {
    assert_eq!(habitability_label(true), "likely habitable");
    assert_eq!(habitability_label(false), "not in habitable zone");
}

#[test]
fn test_render_precision() {
    let report = render(&earth_like_evaluation());

    // Two decimals for mass and distance, one for temperature
    assert!(report.contains("Orbital radius:          1.00 AU"), "{report}");
    assert!(report.contains("Radial velocity:         10.00 m/s"), "{report}");
    assert!(report.contains("Equilibrium temperature: 254.6 K"), "{report}");
    assert!(report.contains("Habitable zone:          0.95 to 1.67 AU"), "{report}");
    assert!(report.contains("likely habitable"), "{report}");
}

#[test]
fn test_render_has_one_line_per_quantity() {
    let report = render(&earth_like_evaluation());
    assert_eq!(report.lines().count(), 6);
}

#[test]
fn test_catalog_table_shape() {
    let table = catalog_table();
    let mut lines = table.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("NAME"));
    assert!(header.contains("TEQ(K)"));

    assert_eq!(lines.count(), catalog::CATALOG.len());
    assert!(table.contains("TRAPPIST-1 e"));
}
