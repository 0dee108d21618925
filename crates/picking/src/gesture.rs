//! Click versus drag discrimination.

/// Tracks one press/release cycle.
///
/// A release counts as a click only if it comes within the threshold of the
/// press and no pointer move arrived after the threshold had already passed.
/// Early jitter right after the press does not cancel the click.
#[derive(Debug, Clone)]
pub struct ClickGate {
    threshold_ms: f64,
    pressed_at: Option<f64>,
    dragging: bool,
}

impl ClickGate {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            pressed_at: None,
            dragging: false,
        }
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn pointer_down(&mut self, now_ms: f64) {
        self.pressed_at = Some(now_ms);
        self.dragging = false;
    }

    pub fn pointer_move(&mut self, now_ms: f64) {
        if self
            .pressed_at
            .is_some_and(|pressed_at| now_ms - pressed_at >= self.threshold_ms)
        {
            self.dragging = true;
        }
    }

    /// End the press. Returns `true` when it qualifies as a click.
    pub fn pointer_up(&mut self, now_ms: f64) -> bool {
        let Some(pressed_at) = self.pressed_at.take() else {
            return false;
        };
        let dragging = std::mem::take(&mut self.dragging);
        !dragging && now_ms - pressed_at < self.threshold_ms
    }
}
