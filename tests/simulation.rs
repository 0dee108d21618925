use std::fs;

use chrono::TimeDelta;
use glam::DVec3;
use orrery::clock::ManualClock;
use orrery::config::{Catalog, OrbitModelSetting, SimulationSettings, load_catalog};
use orrery::orbits::j2000;
use orrery::picking::{PerspectiveCamera, Viewport};
use orrery::scene::{HeadlessRenderer, RenderBackend, Simulation, SimulationError};

const MINI_CATALOG: &str = "\
sun:
  radius: 20
  rotation_period_days: 25.38
bodies:
  - name: Alpha
    radius: 5
    orbit_radius: 100
    orbital_period_days: 100
    rotation_period_days: 1
  - name: Beta
    radius: 5
    orbit_radius: 300
    orbital_period_days: 400
    rotation_period_days: -2
";

fn mini_catalog() -> Catalog {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mini.yaml");
    fs::write(&path, MINI_CATALOG).unwrap();
    load_catalog(&path).expect("mini catalog")
}

fn settings_at_epoch() -> SimulationSettings {
    SimulationSettings {
        start_date: Some(j2000()),
        ..SimulationSettings::default()
    }
}

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

/// Camera above and in front of Alpha's start position.
fn alpha_camera() -> PerspectiveCamera {
    PerspectiveCamera::looking_at(
        DVec3::new(100.0, 60.0, 150.0),
        DVec3::new(100.0, 0.0, 0.0),
        viewport().aspect(),
    )
}

fn mini_simulation() -> (Simulation<HeadlessRenderer, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let simulation = Simulation::new(
        HeadlessRenderer::new(),
        clock.clone(),
        &mini_catalog(),
        &settings_at_epoch(),
        alpha_camera(),
        viewport(),
    )
    .expect("simulation");
    (simulation, clock)
}

#[test]
fn bodies_start_at_their_epoch_phase() {
    let (simulation, _) = mini_simulation();
    let alpha = simulation.find("alpha").unwrap();
    let state = simulation.body_state(alpha).unwrap();
    assert!((state.position[0] - 100.0).abs() < 1e-9);
    assert!(state.position[2].abs() < 1e-9);

    let handle = simulation.handle(alpha).unwrap();
    let mesh = simulation.renderer().mesh(handle).unwrap();
    assert_eq!(mesh.name, "Alpha");
    assert!(mesh.orbit_visible);
    assert_eq!(mesh.orbit_path.len(), 361);
    assert_eq!(simulation.body_for_handle(handle), Some(alpha));
    assert_eq!(simulation.body_for_handle(simulation.sun_handle()), None);
}

#[test]
fn one_tick_evaluates_every_body_at_the_same_time() {
    let (mut simulation, clock) = mini_simulation();
    clock.advance(1.0);
    let snapshot = simulation.tick();
    let expected_days = 100_000.0 / 86_400.0;
    assert!((snapshot.elapsed_days - expected_days).abs() < 1e-9);
    assert_eq!(snapshot.bodies.len(), 2);

    for frame in &snapshot.bodies {
        let body = simulation.body(frame.id).unwrap();
        assert_eq!(frame.state, body.state_at(snapshot.elapsed_days));
        let handle = simulation.handle(frame.id).unwrap();
        let mesh = simulation.renderer().mesh(handle).unwrap();
        assert_eq!(mesh.position, frame.state.position);
        assert_eq!(mesh.rotation_y, frame.state.rotation_y);
    }

    let beta = simulation.find("Beta").unwrap();
    let beta_rotation = simulation.body_state(beta).unwrap().rotation_y;
    assert!(beta_rotation > 0.0, "retrograde spin turns the other way");
    assert!(snapshot.sun_rotation_y < 0.0);

    let expected_date = j2000() + TimeDelta::milliseconds(100_000_000);
    assert_eq!(snapshot.date, expected_date);
    assert_eq!(simulation.current_simulated_date(), expected_date);
}

#[test]
fn time_scale_slider_changes_future_rate() {
    let (mut simulation, clock) = mini_simulation();
    clock.advance(1.0);
    let first = simulation.tick().elapsed_days;

    let factor = simulation.on_time_scale_changed(2.0).unwrap();
    assert!((factor - 100.0).abs() < 1e-9);
    assert_eq!(simulation.elapsed_days(), first);

    clock.advance(864.0);
    let second = simulation.tick().elapsed_days;
    assert!((second - first - 1.0).abs() < 1e-9);
}

#[test]
fn orbit_visibility_reaches_the_renderer() {
    let (mut simulation, _) = mini_simulation();
    simulation.on_orbit_visibility_changed(false);
    assert!(!simulation.orbits_visible());
    for id in simulation.body_ids() {
        let handle = simulation.handle(id).unwrap();
        assert!(!simulation.renderer().mesh(handle).unwrap().orbit_visible);
    }
}

#[test]
fn hover_and_click_select_the_body_under_the_pointer() {
    let (mut simulation, _) = mini_simulation();
    let alpha = simulation.find("Alpha").unwrap();
    let target = simulation
        .renderer()
        .project_to_screen([100.0, 0.0, 0.0], simulation.camera(), viewport())
        .expect("alpha on screen");
    assert!((target.x - 500.0).abs() < 1e-6);
    assert!((target.y - 400.0).abs() < 1e-6);

    assert_eq!(simulation.pointer_moved(target.x, target.y, 0.0), Some(alpha));
    assert_eq!(simulation.hovered_body_name(), Some("Alpha"));
    let marker = simulation.hover_marker().expect("marker");
    assert!((marker.x - target.x).abs() < 1e-6);

    simulation.pointer_down(10.0);
    assert_eq!(simulation.pointer_up(target.x, target.y, 50.0), Some(alpha));
    let info = simulation.selected_body_info().expect("selection");
    assert_eq!(info.name, "Alpha");
    assert_eq!(info.orbital_period_days, 100.0);

    // Top edge looks above the orbital plane: hover clears, selection stays.
    assert_eq!(simulation.pointer_moved(500.0, 5.0, 60.0), None);
    assert_eq!(simulation.hovered_body_name(), None);
    assert!(simulation.hover_marker().is_none());
    simulation.pointer_down(100.0);
    assert_eq!(simulation.pointer_up(500.0, 5.0, 120.0), None);
    assert_eq!(simulation.selected_body(), Some(alpha));
}

#[test]
fn slow_press_does_not_select() {
    let (mut simulation, _) = mini_simulation();
    simulation.pointer_down(0.0);
    assert_eq!(simulation.pointer_up(500.0, 400.0, 400.0), None);
    assert!(simulation.selected_body_info().is_none());
}

#[test]
fn shipped_catalog_runs_with_forced_circular_orbits() {
    let catalog = load_catalog("data/catalog/planets.yaml").unwrap();
    let settings = SimulationSettings {
        orbit_model: OrbitModelSetting::Circular,
        ..settings_at_epoch()
    };
    let clock = ManualClock::new();
    let mut simulation = Simulation::new(
        HeadlessRenderer::new(),
        clock.clone(),
        &catalog,
        &settings,
        alpha_camera(),
        viewport(),
    )
    .unwrap();
    assert_eq!(simulation.body_count(), 9);
    clock.advance(3.0);
    let snapshot = simulation.tick();
    for frame in &snapshot.bodies {
        assert_eq!(frame.state.position[1], 0.0);
    }
    let venus = simulation.find("Venus").unwrap();
    assert!(simulation.body_state(venus).unwrap().rotation_y > 0.0);
}

#[test]
fn invalid_body_aborts_construction() {
    let mut catalog = mini_catalog();
    catalog.bodies[1].orbital_period_days = -1.0;
    let result = Simulation::new(
        HeadlessRenderer::new(),
        ManualClock::new(),
        &catalog,
        &settings_at_epoch(),
        alpha_camera(),
        viewport(),
    );
    assert!(matches!(result, Err(SimulationError::Elements(_))));
}

#[test]
fn resized_canvas_and_new_camera_drive_picking() {
    let (mut simulation, _) = mini_simulation();
    let small = Viewport::new(500.0, 400.0);
    simulation.set_viewport(small);
    assert_eq!(simulation.viewport(), small);
    assert!((simulation.camera().aspect - 1.25).abs() < 1e-12);

    let alpha = simulation.find("Alpha").unwrap();
    assert_eq!(simulation.pointer_moved(250.0, 200.0, 0.0), Some(alpha));
    let marker = simulation.hover_marker().expect("marker");
    assert!((marker.x - 250.0).abs() < 1e-6);
    assert!((marker.y - 200.0).abs() < 1e-6);

    simulation.set_camera(PerspectiveCamera::looking_at(
        DVec3::new(300.0, 60.0, 150.0),
        DVec3::new(300.0, 0.0, 0.0),
        small.aspect(),
    ));
    let beta = simulation.find("Beta").unwrap();
    assert_eq!(simulation.pointer_moved(250.0, 200.0, 10.0), Some(beta));
    assert_eq!(simulation.hovered_body_name(), Some("Beta"));
}
