use std::fs;

use chrono::{TimeZone, Utc};
use orrery::config::{
    ConfigError, OrbitConfig, OrbitModelSetting, PeriodUnitSetting, SimulationSettings, find_body,
    load_bodies, load_catalog, load_settings,
};

#[test]
fn shipped_catalog_loads_in_order() {
    let catalog = load_catalog("data/catalog/planets.yaml").expect("catalog");
    let names: Vec<&str> = catalog.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"]
    );
    assert_eq!(catalog.sun.radius, 20.0);
    assert!((catalog.sun.rotation_period_days - 25.38).abs() < 1e-12);

    let saturn = find_body(&catalog.bodies, "saturn").expect("saturn");
    assert!(saturn.ring.is_some());
    let facts = saturn.facts.as_ref().expect("facts");
    assert_eq!(facts.number_of_moons, Some(146));

    let earth = find_body(&catalog.bodies, "EARTH").expect("earth");
    assert_eq!(
        earth.orbit().unwrap(),
        OrbitConfig::Elliptical {
            perihelion: 245.75,
            aphelion: 254.25
        }
    );
}

#[test]
fn toml_catalog_with_circular_orbit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mini.toml");
    fs::write(
        &path,
        r#"
[sun]
radius = 20.0
rotation_period_days = 25.38

[[bodies]]
name = "Inner"
radius = 3.0
orbit_radius = 100.0
orbital_period_days = 88.0
rotation_period_days = 58.65
"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).expect("toml catalog");
    assert_eq!(catalog.bodies.len(), 1);
    let inner = &catalog.bodies[0];
    assert_eq!(inner.orbital_inclination_deg, 0.0);
    assert_eq!(
        inner.orbit().unwrap(),
        OrbitConfig::Circular { radius: 100.0 }
    );
}

#[test]
fn directory_records_load_sorted_by_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record = |name: &str, radius: f64| {
        format!(
            "name = \"{name}\"\nradius = 1.0\norbit_radius = {radius}\norbital_period_days = 10.0\nrotation_period_days = 1.0\n"
        )
    };
    fs::write(dir.path().join("02_outer.toml"), record("Outer", 200.0)).unwrap();
    fs::write(dir.path().join("01_inner.toml"), record("Inner", 100.0)).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let bodies = load_bodies(dir.path()).expect("records");
    let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Inner", "Outer"]);
}

#[test]
fn malformed_orbits_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let write = |file: &str, body: &str| {
        let path = dir.path().join(file);
        fs::write(
            &path,
            format!("sun:\n  radius: 20\n  rotation_period_days: 25\nbodies:\n{body}"),
        )
        .unwrap();
        path
    };

    let missing = write(
        "missing.yaml",
        "  - name: Lost\n    radius: 1\n    orbital_period_days: 10\n    rotation_period_days: 1\n",
    );
    assert!(matches!(
        load_catalog(&missing),
        Err(ConfigError::MissingOrbit(name)) if name == "Lost"
    ));

    let conflicting = write(
        "conflict.yaml",
        "  - name: Both\n    radius: 1\n    orbit_radius: 10\n    perihelion: 9\n    aphelion: 11\n    orbital_period_days: 10\n    rotation_period_days: 1\n",
    );
    assert!(matches!(
        load_catalog(&conflicting),
        Err(ConfigError::ConflictingOrbit(_))
    ));

    let half = write(
        "half.yaml",
        "  - name: Half\n    radius: 1\n    perihelion: 9\n    orbital_period_days: 10\n    rotation_period_days: 1\n",
    );
    assert!(matches!(
        load_catalog(&half),
        Err(ConfigError::IncompleteApsides(_))
    ));

    let twice = write(
        "twice.yaml",
        "  - name: Twin\n    radius: 1\n    orbit_radius: 10\n    orbital_period_days: 10\n    rotation_period_days: 1\n  - name: twin\n    radius: 1\n    orbit_radius: 20\n    orbital_period_days: 10\n    rotation_period_days: 1\n",
    );
    assert!(matches!(
        load_catalog(&twice),
        Err(ConfigError::DuplicateBody(_))
    ));

    let empty = write("empty.yaml", "  []\n");
    assert!(matches!(load_catalog(&empty), Err(ConfigError::EmptyCatalog)));
}

#[test]
fn settings_default_when_sections_are_missing() {
    let defaults = SimulationSettings::default();
    assert_eq!(
        defaults.reference_epoch,
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(defaults.start_date, None);
    assert_eq!(defaults.orbit_path_segments, 360);
    assert_eq!(defaults.time_scale.initial_exponent, 5.0);
    assert_eq!(defaults.picking.click_threshold_ms, 100.0);
    assert_eq!(defaults.transfer.gm, 1000.0);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sim.toml");
    fs::write(
        &path,
        r#"
start_date = "2024-03-20T03:06:00Z"
period_unit = "years"
orbit_model = "circular"

[picking]
body_hit_radius = 15.0
"#,
    )
    .unwrap();
    let settings = load_settings(&path).expect("settings");
    assert_eq!(
        settings.start_date,
        Some(Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap())
    );
    assert_eq!(settings.period_unit, PeriodUnitSetting::Years);
    assert_eq!(settings.orbit_model, OrbitModelSetting::Circular);
    assert_eq!(settings.picking.body_hit_radius, 15.0);
    assert_eq!(settings.picking.orbit_tube_base, 1.0);
    assert_eq!(settings.time_scale, defaults.time_scale);
}

#[test]
fn shipped_settings_match_defaults() {
    let settings = load_settings("configs/simulation.toml").expect("settings");
    assert_eq!(settings, SimulationSettings::default());
}
