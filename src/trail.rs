//! Swipe trail state
//!
//! While a grid-key gesture is live the controller keeps a breadcrumb trail
//! of the finger path, interpolated at fixed spacing so fast flicks still
//! produce an even line. Rendering reads the points out of the snapshot and
//! draws them in the configured trail color.

/// One trail breadcrumb, in the host's touch coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
}

/// Spacing between interpolated trail points (points).
const POINT_SPACING: f64 = 20.0;

/// Oldest points drop off past this; the trail follows the finger rather
/// than spanning the whole gesture.
const MAX_POINTS: usize = 64;

/// Finger trail for the active key gesture.
#[derive(Debug, Clone, Default)]
pub struct SwipeTrail {
    points: Vec<TrailPoint>,
    last_pos: Option<(f64, f64)>,
}

impl SwipeTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new trail at the touch-down position, discarding any leftover.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.points.clear();
        self.points.push(TrailPoint { x, y });
        self.last_pos = Some((x, y));
    }

    /// Extend the trail toward the new finger position, adding points along
    /// the path so density stays constant regardless of event rate.
    pub fn push(&mut self, x: f64, y: f64) {
        let Some(last) = self.last_pos else {
            self.begin(x, y);
            return;
        };

        let dx = x - last.0;
        let dy = y - last.1;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist >= POINT_SPACING {
            let num_points = (dist / POINT_SPACING) as i32;

            for i in 1..=num_points {
                let t = (i as f64 * POINT_SPACING) / dist;
                self.points.push(TrailPoint {
                    x: last.0 + dx * t,
                    y: last.1 + dy * t,
                });
            }

            // Carry last_pos forward to the last point actually emitted, so
            // leftover distance counts toward the next one
            let t = (num_points as f64 * POINT_SPACING) / dist;
            self.last_pos = Some((last.0 + dx * t, last.1 + dy * t));

            if self.points.len() > MAX_POINTS {
                let excess = self.points.len() - MAX_POINTS;
                self.points.drain(..excess);
            }
        }
    }

    /// Drop the trail; called on release and cancel.
    pub fn clear(&mut self) {
        self.points.clear();
        self.last_pos = None;
    }

    pub fn is_active(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Latest breadcrumb (the finger end of the trail).
    pub fn head(&self) -> Option<TrailPoint> {
        self.points.last().copied()
    }
}
