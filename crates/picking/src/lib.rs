//! Pointer picking on screen-projected bodies.
//!
//! A screen coordinate becomes a ray from the camera; the ray is tested
//! against each body's hitbox sphere and the tube around its orbit path. The
//! intersection itself sits behind [`RayCaster`] so a renderer can supply its
//! own; [`GeometricRayCaster`] is the analytic fallback.

pub mod camera;
pub mod gesture;
pub mod picker;
pub mod ray;

pub use camera::{PerspectiveCamera, ScreenPoint, Viewport, screen_to_ndc};
pub use gesture::ClickGate;
pub use picker::{
    GeometricRayCaster, PickCandidate, PointerPicker, RayCaster, RayHit, Surface, sort_hits,
};
pub use ray::Ray;
