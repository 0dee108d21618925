//! Scripted shuttle hops between catalog bodies.
//!
//! Unlike the ballistic sandbox, a hop is a fixed cubic Bezier curve from the
//! current body to the destination. Both inner control points keep their
//! endpoint's x and y and take a fixed z, which bows the curve sideways. A
//! shuttle makes one hop and then stays in flight.

use orrery_core::vector::{self, Vector3};

use crate::TransferError;

/// z coordinate given to both inner control points.
pub const CONTROL_Z: f64 = 60.0;
/// Segments sampled along a hop (the route holds one more point).
pub const ROUTE_SEGMENTS: usize = 50;
/// Gap between a body's surface and its parked shuttle.
pub const PARKING_GAP: f64 = 3.0;

/// Point on the cubic Bezier curve `p0 p1 p2 p3` at `t` in `[0, 1]`.
pub fn cubic_bezier(p0: &Vector3, p1: &Vector3, p2: &Vector3, p3: &Vector3, t: f64) -> Vector3 {
    let u = 1.0 - t;
    let terms = [
        vector::scale(p0, u * u * u),
        vector::scale(p1, 3.0 * u * u * t),
        vector::scale(p2, 3.0 * u * t * t),
        vector::scale(p3, t * t * t),
    ];
    terms
        .iter()
        .fold(vector::ZERO, |acc, term| vector::add(&acc, term))
}

/// One hop: the four control points and the sampled polyline drawn for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierTransfer {
    controls: [Vector3; 4],
    route: Vec<Vector3>,
}

impl BezierTransfer {
    /// Curve from `from` to `to` with both inner controls moved to `control_z`,
    /// sampled at `segments + 1` points.
    pub fn new(from: Vector3, to: Vector3, control_z: f64, segments: usize) -> Self {
        let controls = [
            from,
            [from[0], from[1], control_z],
            [to[0], to[1], control_z],
            to,
        ];
        let segments = segments.max(1);
        let route = (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                cubic_bezier(&controls[0], &controls[1], &controls[2], &controls[3], t)
            })
            .collect();
        Self { controls, route }
    }

    /// Departure, the two inner controls, arrival.
    pub fn controls(&self) -> &[Vector3; 4] {
        &self.controls
    }

    /// Sampled points, departure first and arrival last.
    pub fn route(&self) -> &[Vector3] {
        &self.route
    }

    /// Position at curve parameter `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Vector3 {
        let [p0, p1, p2, p3] = &self.controls;
        cubic_bezier(p0, p1, p2, p3, t.clamp(0.0, 1.0))
    }
}

/// Outcome of a [`Shuttle::travel_to`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelRequest {
    Departed { from: usize, to: usize },
    /// The shuttle already left; nothing changed.
    IgnoredInFlight,
}

/// Small craft parked beside a body until it hops to another one.
#[derive(Debug, Clone, PartialEq)]
pub struct Shuttle {
    current: Option<usize>,
    parking_offset: Vector3,
    route: Option<BezierTransfer>,
}

impl Shuttle {
    /// Park next to body `index`, `body_radius + PARKING_GAP` out along +x.
    pub fn parked_at(index: usize, body_radius: f64) -> Self {
        Self {
            current: Some(index),
            parking_offset: [body_radius + PARKING_GAP, 0.0, 0.0],
            route: None,
        }
    }

    /// Body the shuttle is parked at, `None` once it has departed.
    pub fn current_body(&self) -> Option<usize> {
        self.current
    }

    /// `true` once [`travel_to`](Self::travel_to) has fired.
    pub fn is_in_flight(&self) -> bool {
        self.route.is_some()
    }

    /// The hop flown, if any.
    pub fn route(&self) -> Option<&BezierTransfer> {
        self.route.as_ref()
    }

    /// World position while parked, given where its body currently is.
    pub fn parked_position(&self, body_position: &Vector3) -> Option<Vector3> {
        self.current
            .map(|_| vector::add(body_position, &self.parking_offset))
    }

    /// Leave the current body for `destination`, whose positions are looked up
    /// in `body_positions` (catalog order). Ignored while in flight.
    pub fn travel_to(
        &mut self,
        destination: usize,
        body_positions: &[Vector3],
    ) -> Result<TravelRequest, TransferError> {
        let Some(from) = self.current else {
            tracing::debug!(destination, "travel request ignored: shuttle already in flight");
            return Ok(TravelRequest::IgnoredInFlight);
        };
        let start = *body_positions
            .get(from)
            .ok_or(TransferError::UnknownOrigin(from))?;
        let end = *body_positions
            .get(destination)
            .ok_or(TransferError::UnknownDestination(destination))?;

        self.route = Some(BezierTransfer::new(
            start,
            end,
            CONTROL_Z,
            ROUTE_SEGMENTS,
        ));
        self.current = None;
        tracing::info!(from, to = destination, "shuttle departed");
        Ok(TravelRequest::Departed {
            from,
            to: destination,
        })
    }
}
