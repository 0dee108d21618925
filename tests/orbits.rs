use std::f64::consts::{FRAC_PI_2, PI};

use orrery::config::{OrbitModelSetting, load_catalog};
use orrery::core::time::seconds_to_days;
use orrery::core::vector;
use orrery::orbits::{
    Body, ElementsError, OrbitModel, OrbitShape, OrbitalElements, Spin,
    solver::{circular_point, ellipse_point, rotation_angle, sample_path},
};

fn elements(shape: OrbitShape, rotation: f64, inclination: f64) -> OrbitalElements {
    OrbitalElements::new("Test", 5.0, shape, 100.0, rotation, inclination).expect("valid elements")
}

fn close(a: [f64; 3], b: [f64; 3]) -> bool {
    vector::distance(&a, &b) < 1e-9
}

#[test]
fn elliptical_body_returns_after_one_period() {
    let shape = OrbitShape::Elliptical {
        perihelion: 344.28,
        aphelion: 415.72,
    };
    let body = Body::new(elements(shape, 1.03, 1.8), OrbitModel::Elliptical, 0.7);
    let start = body.state_at(0.0).position;
    let after = body.state_at(100.0).position;
    assert!(close(start, after), "{start:?} vs {after:?}");
}

#[test]
fn circular_body_returns_after_one_period() {
    let body = Body::new(
        elements(OrbitShape::Circular { radius: 250.0 }, 1.0, 0.0),
        OrbitModel::Circular,
        2.0,
    );
    assert!(close(body.state_at(0.0).position, body.state_at(100.0).position));
    assert!(close(body.state_at(30.0).position, body.state_at(230.0).position));
}

#[test]
fn zero_eccentricity_ellipse_matches_circle() {
    for i in 0..16 {
        let angle = i as f64 * PI / 8.0;
        assert!(close(ellipse_point(250.0, 0.0, 0.0, angle), circular_point(250.0, angle)));
    }
}

#[test]
fn ellipse_radius_hits_apsides() {
    let (a, e) = (380.0, 0.094);
    let perihelion = ellipse_point(a, e, 0.0, 0.0);
    let aphelion = ellipse_point(a, e, 0.0, PI);
    assert!((vector::norm(&perihelion) - a * (1.0 - e)).abs() < 1e-9);
    assert!((vector::norm(&aphelion) - a * (1.0 + e)).abs() < 1e-9);
}

#[test]
fn inclination_lifts_orbit_out_of_plane() {
    let flat = ellipse_point(100.0, 0.1, 0.0, FRAC_PI_2);
    assert_eq!(flat[1], 0.0);
    let tilted = ellipse_point(100.0, 0.1, 17.2_f64.to_radians(), FRAC_PI_2);
    assert!(tilted[1] > 0.0);
    assert!((vector::norm(&flat) - vector::norm(&tilted)).abs() < 1e-9);
}

#[test]
fn live_positions_lie_on_the_drawn_path() {
    let shape = OrbitShape::Elliptical {
        perihelion: 1360.8,
        aphelion: 2239.2,
    };
    let body = Body::new(elements(shape, 6.39, 17.2), OrbitModel::Elliptical, 0.0);
    let path = body.orbit_path(360);
    assert_eq!(path.len(), 361);
    assert!(close(path[0], path[360]));
    // 100-day period sampled at 360 steps: every 100/360 days lands on a vertex.
    for k in [0usize, 45, 90, 200, 359] {
        let t = k as f64 * 100.0 / 360.0;
        let position = body.state_at(t).position;
        assert!(close(position, path[k]), "sample {k} off the path");
    }
}

#[test]
fn sample_path_enforces_a_minimum() {
    let path = sample_path(1, |angle| circular_point(1.0, angle));
    assert_eq!(path.len(), 4);
}

#[test]
fn rotation_sign_follows_period_sign() {
    assert!(rotation_angle(0.25, 1.0) < 0.0);
    assert!(rotation_angle(0.25, -243.0) > 0.0);
    assert!((rotation_angle(1.0, 1.0) + 2.0 * PI).abs() < 1e-12);

    let venus = Spin::new("Venus", -243.0).unwrap();
    let earth = Spin::new("Earth", 1.0).unwrap();
    assert!(venus.rotation_at(10.0) > 0.0);
    assert!(earth.rotation_at(10.0) < 0.0);
}

#[test]
fn model_selection_respects_override() {
    let circle = OrbitShape::Circular { radius: 10.0 };
    let ellipse = OrbitShape::Elliptical {
        perihelion: 9.0,
        aphelion: 11.0,
    };
    assert_eq!(
        OrbitModel::select(&circle, OrbitModelSetting::AsCataloged),
        OrbitModel::Circular
    );
    assert_eq!(
        OrbitModel::select(&ellipse, OrbitModelSetting::AsCataloged),
        OrbitModel::Elliptical
    );
    assert_eq!(
        OrbitModel::select(&ellipse, OrbitModelSetting::Circular),
        OrbitModel::Circular
    );
}

#[test]
fn forced_circular_uses_semi_major_axis() {
    let shape = OrbitShape::Elliptical {
        perihelion: 90.0,
        aphelion: 110.0,
    };
    let body = Body::new(elements(shape, 1.0, 5.0), OrbitModel::Circular, 0.0);
    for t in [0.0, 13.0, 57.0] {
        let p = body.state_at(t).position;
        assert!((vector::norm(&p) - 100.0).abs() < 1e-9);
        assert_eq!(p[1], 0.0);
    }
}

#[test]
fn invalid_elements_are_rejected() {
    let circle = OrbitShape::Circular { radius: 100.0 };
    assert!(matches!(
        OrbitalElements::new("A", 5.0, circle, 0.0, 1.0, 0.0),
        Err(ElementsError::OrbitalPeriod { .. })
    ));
    assert!(matches!(
        OrbitalElements::new("B", 5.0, circle, 10.0, 0.0, 0.0),
        Err(ElementsError::RotationPeriod { .. })
    ));
    assert!(matches!(
        OrbitalElements::new("C", f64::NAN, circle, 10.0, 1.0, 0.0),
        Err(ElementsError::Radius { .. })
    ));
    let inverted = OrbitShape::Elliptical {
        perihelion: 120.0,
        aphelion: 80.0,
    };
    assert!(matches!(
        OrbitalElements::new("D", 5.0, inverted, 10.0, 1.0, 0.0),
        Err(ElementsError::Apsides { .. })
    ));
    assert!(matches!(
        OrbitalElements::new("E", 5.0, circle, 10.0, 1.0, f64::INFINITY),
        Err(ElementsError::Inclination { .. })
    ));
}

#[test]
fn shipped_catalog_builds_valid_elements() {
    let catalog = load_catalog("data/catalog/planets.yaml").expect("catalog");
    assert_eq!(catalog.bodies.len(), 9);
    let elements: Vec<OrbitalElements> = catalog
        .bodies
        .iter()
        .map(|config| OrbitalElements::try_from(config).expect("valid body"))
        .collect();
    let retrograde: Vec<&str> = elements
        .iter()
        .filter(|e| e.is_retrograde())
        .map(|e| e.name())
        .collect();
    assert_eq!(retrograde, ["Venus", "Uranus"]);

    let mars = &elements[3];
    assert!((mars.semi_major_axis() - 380.0).abs() < 1e-9);
    assert!((mars.eccentricity() - 0.094).abs() < 1e-9);
}

#[test]
fn earth_like_circle_returns_after_a_year_of_seconds() {
    let elements = OrbitalElements::new(
        "Earth",
        5.0,
        OrbitShape::Circular { radius: 250.0 },
        365.25,
        1.0,
        0.0,
    )
    .unwrap();
    let body = Body::new(elements, OrbitModel::Circular, 0.0);
    let year = seconds_to_days(365.25 * 86_400.0);
    let start = body.state_at(0.0).position;
    let after = body.state_at(year).position;
    for axis in 0..3 {
        assert!(
            (start[axis] - after[axis]).abs() < 1e-6,
            "axis {axis}: {start:?} vs {after:?}"
        );
    }
}
