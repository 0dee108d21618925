//! Explicitly constructed simulation context.
//!
//! Each frame the clock ticks exactly once and every body is evaluated
//! against that single accumulated time, so no body sees a newer time than
//! its neighbours within a frame.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use orrery_clock::{ClockError, SimulationCalendar, TimeController, TimeScale, WallClock};
use orrery_config::{BodyFacts, Catalog, SimulationSettings};
use orrery_core::vector::{self, Vector3};
use orrery_orbits::{
    Body, BodyState, ElementsError, OrbitModel, OrbitShape, OrbitalElements, PeriodUnit, Spin,
};
use orrery_picking::{ClickGate, PerspectiveCamera, PointerPicker, ScreenPoint, Viewport};
use thiserror::Error;

use crate::render::{BodyHandle, RenderBackend};

const SUN_NAME: &str = "Sun";

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Elements(#[from] ElementsError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Position of a body in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What the selected-body panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f64,
    pub orbit: OrbitShape,
    pub orbital_period_days: f64,
    pub rotation_period_days: f64,
    pub inclination_deg: f64,
    pub facts: Option<BodyFacts>,
}

impl BodyInfo {
    fn new(elements: &OrbitalElements, facts: Option<BodyFacts>) -> Self {
        Self {
            name: elements.name().to_string(),
            radius: elements.radius(),
            orbit: elements.shape(),
            orbital_period_days: elements.orbital_period(),
            rotation_period_days: elements.rotation_period(),
            inclination_deg: elements.inclination_deg(),
            facts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub id: BodyId,
    pub state: BodyState,
}

/// Everything evaluated during one [`Simulation::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub elapsed_days: f64,
    pub date: DateTime<Utc>,
    pub sun_rotation_y: f64,
    pub bodies: Vec<BodyFrame>,
}

#[derive(Debug)]
struct SceneBody {
    body: Body,
    handle: BodyHandle,
    path: Vec<Vector3>,
    info: BodyInfo,
    state: BodyState,
}

pub struct Simulation<R: RenderBackend, C: WallClock> {
    renderer: R,
    controller: TimeController<C>,
    scale: TimeScale,
    calendar: SimulationCalendar,
    sun: Spin,
    sun_handle: BodyHandle,
    bodies: Vec<SceneBody>,
    handles: HashMap<BodyHandle, BodyId>,
    picker: PointerPicker,
    click: ClickGate,
    camera: PerspectiveCamera,
    viewport: Viewport,
    orbits_visible: bool,
    hovered: Option<BodyId>,
    selected: Option<BodyId>,
}

impl<R: RenderBackend, C: WallClock> Simulation<R, C> {
    /// Validate the catalog, anchor every body's start phase and create its meshes.
    ///
    /// The start date is `settings.start_date`, or the current time when unset.
    pub fn new(
        mut renderer: R,
        clock: C,
        catalog: &Catalog,
        settings: &SimulationSettings,
        camera: PerspectiveCamera,
        viewport: Viewport,
    ) -> Result<Self, SimulationError> {
        let scale = TimeScale::from_settings(&settings.time_scale)?;
        let controller = TimeController::new(clock, scale.factor())?;
        let start = settings.start_date.unwrap_or_else(Utc::now);
        let unit = PeriodUnit::from(settings.period_unit);

        let sun = Spin::new(SUN_NAME, catalog.sun.rotation_period_days)?;
        let sun_handle = renderer.create_body(SUN_NAME, catalog.sun.radius);
        renderer.set_position(sun_handle, vector::ZERO);

        let mut bodies = Vec::with_capacity(catalog.bodies.len());
        let mut handles = HashMap::with_capacity(catalog.bodies.len());
        for (index, config) in catalog.bodies.iter().enumerate() {
            let elements = match OrbitalElements::try_from(config) {
                Ok(elements) => elements,
                Err(err) => {
                    tracing::error!(body = %config.name, error = %err, "rejected orbital elements");
                    return Err(err.into());
                }
            };
            let model = OrbitModel::select(&elements.shape(), settings.orbit_model);
            let info = BodyInfo::new(&elements, config.facts.clone());
            let body = Body::anchored(elements, model, start, settings.reference_epoch, unit);

            let handle = renderer.create_body(body.name(), body.elements().radius());
            let path = body.orbit_path(settings.orbit_path_segments);
            renderer.set_orbit_path(handle, &path);
            renderer.set_orbit_visible(handle, true);

            let state = body.state_at(0.0);
            renderer.set_position(handle, state.position);
            renderer.set_rotation_y(handle, state.rotation_y);

            handles.insert(handle, BodyId(index));
            bodies.push(SceneBody {
                body,
                handle,
                path,
                info,
                state,
            });
        }

        tracing::info!(
            bodies = bodies.len(),
            start = %start,
            time_scale = scale.factor(),
            "simulation ready"
        );

        Ok(Self {
            renderer,
            controller,
            scale,
            calendar: SimulationCalendar::new(start),
            sun,
            sun_handle,
            bodies,
            handles,
            picker: PointerPicker::new(settings.picking),
            click: ClickGate::new(settings.picking.click_threshold_ms),
            camera,
            viewport,
            orbits_visible: true,
            hovered: None,
            selected: None,
        })
    }

    /// Advance the clock once and push every body's new transform to the renderer.
    pub fn tick(&mut self) -> FrameSnapshot {
        let elapsed_days = self.controller.tick();

        let sun_rotation_y = self.sun.rotation_at(elapsed_days);
        self.renderer.set_rotation_y(self.sun_handle, sun_rotation_y);

        let mut frames = Vec::with_capacity(self.bodies.len());
        for (index, scene_body) in self.bodies.iter_mut().enumerate() {
            let state = scene_body.body.state_at(elapsed_days);
            self.renderer.set_position(scene_body.handle, state.position);
            self.renderer.set_rotation_y(scene_body.handle, state.rotation_y);
            scene_body.state = state;
            frames.push(BodyFrame {
                id: BodyId(index),
                state,
            });
        }

        FrameSnapshot {
            elapsed_days,
            date: self.calendar.date_at(elapsed_days),
            sun_rotation_y,
            bodies: frames,
        }
    }

    /// Slider callback. Returns the applied scale factor after clamping and snapping.
    pub fn on_time_scale_changed(&mut self, exponent: f64) -> Result<f64, SimulationError> {
        let factor = self.scale.set_exponent(exponent);
        self.controller.set_time_scale(factor)?;
        Ok(factor)
    }

    pub fn on_orbit_visibility_changed(&mut self, visible: bool) {
        self.orbits_visible = visible;
        for scene_body in &self.bodies {
            self.renderer.set_orbit_visible(scene_body.handle, visible);
        }
        tracing::debug!(visible, "orbit visibility changed");
    }

    pub fn current_simulated_date(&self) -> DateTime<Utc> {
        self.calendar.date_at(self.controller.accumulated_days())
    }

    pub fn current_date_label(&self) -> String {
        self.calendar.display(self.controller.accumulated_days())
    }

    pub fn time_scale(&self) -> &TimeScale {
        &self.scale
    }

    pub fn elapsed_days(&self) -> f64 {
        self.controller.accumulated_days()
    }

    pub fn hovered_body(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn hovered_body_name(&self) -> Option<&str> {
        self.hovered.map(|id| self.bodies[id.0].body.name())
    }

    pub fn selected_body(&self) -> Option<BodyId> {
        self.selected
    }

    pub fn selected_body_info(&self) -> Option<&BodyInfo> {
        self.selected.map(|id| &self.bodies[id.0].info)
    }

    /// Screen position of the hovered body, for the bracket marker overlay.
    pub fn hover_marker(&self) -> Option<ScreenPoint> {
        let id = self.hovered?;
        let position = self.bodies[id.0].state.position;
        self.renderer
            .project_to_screen(position, &self.camera, self.viewport)
    }

    /// Re-evaluate the hover under the pointer.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) -> Option<BodyId> {
        self.click.pointer_move(now_ms);
        self.hovered = self.pick(x, y);
        self.hovered
    }

    pub fn pointer_down(&mut self, now_ms: f64) {
        self.click.pointer_down(now_ms);
    }

    /// End a press. A qualifying click on a body selects it; clicks on empty
    /// space or during a drag leave the selection as it was.
    pub fn pointer_up(&mut self, x: f64, y: f64, now_ms: f64) -> Option<BodyId> {
        if !self.click.pointer_up(now_ms) {
            return None;
        }
        self.hovered = self.pick(x, y);
        let id = self.hovered?;
        if self.selected != Some(id) {
            tracing::info!(body = self.bodies[id.0].body.name(), "body selected");
        }
        self.selected = Some(id);
        Some(id)
    }

    fn pick(&self, x: f64, y: f64) -> Option<BodyId> {
        let candidates: Vec<_> = self
            .bodies
            .iter()
            .map(|scene_body| {
                let path = self.orbits_visible.then_some(scene_body.path.as_slice());
                self.picker
                    .candidate(&self.camera, scene_body.state.position, path)
            })
            .collect();
        let hit = self.picker.pick(
            x,
            y,
            self.viewport,
            &self.camera,
            &candidates,
            &self.renderer,
        )?;
        let handle = self.bodies.get(hit.candidate)?.handle;
        self.handles.get(&handle).copied()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Replace the camera used for picking and the hover marker.
    pub fn set_camera(&mut self, camera: PerspectiveCamera) {
        self.camera = camera;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the canvas; the camera aspect follows.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    pub fn orbits_visible(&self) -> bool {
        self.orbits_visible
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn body_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.bodies.len()).map(BodyId)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|scene_body| scene_body.body.name().eq_ignore_ascii_case(name))
            .map(BodyId)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0).map(|scene_body| &scene_body.body)
    }

    /// State pushed to the renderer on the most recent tick.
    pub fn body_state(&self, id: BodyId) -> Option<BodyState> {
        self.bodies.get(id.0).map(|scene_body| scene_body.state)
    }

    pub fn orbit_path(&self, id: BodyId) -> Option<&[Vector3]> {
        self.bodies.get(id.0).map(|scene_body| scene_body.path.as_slice())
    }

    pub fn handle(&self, id: BodyId) -> Option<BodyHandle> {
        self.bodies.get(id.0).map(|scene_body| scene_body.handle)
    }

    pub fn sun_handle(&self) -> BodyHandle {
        self.sun_handle
    }

    /// Resolve a renderer handle back to the body it draws.
    pub fn body_for_handle(&self, handle: BodyHandle) -> Option<BodyId> {
        self.handles.get(&handle).copied()
    }
}
