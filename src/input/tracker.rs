//! Single-touch drag tracking
//!
//! One gesture at a time: the tracker remembers where the touch started and
//! where it is now, and everything downstream works off the displacement.

/// Displacement from gesture start to the current touch position, in points.
///
/// Screen coordinates: positive `dx` is rightward, positive `dy` is downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragVector {
    pub dx: f64,
    pub dy: f64,
}

impl DragVector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the drag.
    pub fn distance(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

/// Tracks one touch from down to up/cancel.
#[derive(Debug, Clone)]
pub struct DragTracker {
    start_pos: (f64, f64),
    current_pos: (f64, f64),
}

impl DragTracker {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            start_pos: (x, y),
            current_pos: (x, y),
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.current_pos = (x, y);
    }

    pub fn start_pos(&self) -> (f64, f64) {
        self.start_pos
    }

    pub fn current_pos(&self) -> (f64, f64) {
        self.current_pos
    }

    pub fn delta(&self) -> DragVector {
        DragVector::new(
            self.current_pos.0 - self.start_pos.0,
            self.current_pos.1 - self.start_pos.1,
        )
    }

    pub fn distance(&self) -> f64 {
        self.delta().distance()
    }
}
