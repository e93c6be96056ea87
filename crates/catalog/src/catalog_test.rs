//! Tests for the embedded reference table.

use crate::{find, to_csv, CATALOG, CSV_HEADER};

#[test]
fn test_catalog_is_populated() {
    assert!(CATALOG.len() >= 10, "reference table should carry a useful sample");
}

#[test]
fn test_every_entry_is_physical() {
    for planet in CATALOG {
        assert!(planet.mass_earth > 0.0, "{} has non-positive mass", planet.name);
        assert!(
            planet.orbital_radius_au > 0.0,
            "{} has non-positive orbit",
            planet.name
        );
        assert!(planet.period_days > 0.0, "{} has non-positive period", planet.name);
        assert!(
            planet.equilibrium_temp_k > 0.0,
            "{} has non-positive temperature",
            planet.name
        );
    }
}

#[test]
fn test_both_classifications_are_represented() {
    assert!(CATALOG.iter().any(|p| p.in_habitable_zone));
    assert!(CATALOG.iter().any(|p| !p.in_habitable_zone));
}

#[test]
fn test_find_is_case_insensitive() {
    let planet = find("proxima centauri B").expect("Proxima Centauri b should be present");
    assert_eq!(planet.host_star, "Proxima Centauri");
    assert!(planet.in_habitable_zone);

    assert!(find("Tatooine").is_none());
}

#[test]
fn test_csv_shape() {
    let csv = to_csv();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.count(), CATALOG.len());

    // Every row has one field per header column
    let columns = CSV_HEADER.split(',').count();
    for line in csv.lines().skip(1) {
        assert_eq!(line.split(',').count(), columns, "bad row: {line}");
    }
}

#[test]
fn test_csv_row_formatting() {
    let hot_jupiter = find("51 Pegasi b").unwrap();
    assert_eq!(
        hot_jupiter.csv_row(),
        "51 Pegasi b,51 Pegasi,149.00,0.0527,4.23,1260,false"
    );
}
