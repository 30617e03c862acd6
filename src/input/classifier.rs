//! Drag-vector classification
//!
//! Turns a drag into one of nine outcomes: a tap, or one of eight compass
//! directions. Every swipeable control (grid keys, the enter key's emoji
//! corner) goes through this one function, so there is exactly one definition
//! of what counts as "up-left".

/// Outcome of classifying a drag vector.
///
/// Directions use screen coordinates: `Up` means the finger moved toward the
/// top of the screen (negative dy). `Tap` means the drag never left the dead
/// zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Tap,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl SwipeDirection {
    /// The eight swipe directions, clockwise from `Up`. `Tap` is not a
    /// compass direction and is not included.
    pub fn compass() -> &'static [SwipeDirection; 8] {
        &[
            SwipeDirection::Up,
            SwipeDirection::UpRight,
            SwipeDirection::Right,
            SwipeDirection::DownRight,
            SwipeDirection::Down,
            SwipeDirection::DownLeft,
            SwipeDirection::Left,
            SwipeDirection::UpLeft,
        ]
    }

    /// Mapping-table slot for this direction. `Tap` has no slot, which is
    /// what makes the base-symbol fallback fall out naturally.
    pub(crate) fn slot(self) -> Option<usize> {
        match self {
            SwipeDirection::Tap => None,
            SwipeDirection::Up => Some(0),
            SwipeDirection::UpRight => Some(1),
            SwipeDirection::Right => Some(2),
            SwipeDirection::DownRight => Some(3),
            SwipeDirection::Down => Some(4),
            SwipeDirection::DownLeft => Some(5),
            SwipeDirection::Left => Some(6),
            SwipeDirection::UpLeft => Some(7),
        }
    }

    pub fn is_swipe(self) -> bool {
        self != SwipeDirection::Tap
    }
}

/// Tunable thresholds for gesture interpretation.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Dead-zone half-width in points; drags where both |dx| and |dy| stay
    /// under this are taps.
    pub swipe_threshold: f64,

    /// Rightward drag on the backspace key past this deletes a whole word.
    /// Raw dx, not the classifier; leftward drags never word-delete.
    pub word_delete_threshold: f64,

    /// Height gained per point of upward finger travel on the resize handle.
    pub resize_scale: f64,

    /// Resize-handle releases with less total vertical travel than this are
    /// taps and close the keyboard.
    pub close_tap_threshold: f64,

    /// The keyboard never shrinks below this height in points.
    pub min_height: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 30.0,       // under 30px of travel on both axes reads as a tap
            word_delete_threshold: 40.0,
            resize_scale: 0.3,           // damped so the keyboard tracks calmly under the finger
            close_tap_threshold: 10.0,
            min_height: 200.0,           // keys stop being tappable below this
        }
    }
}

/// Classify a drag vector against a dead-zone threshold.
///
/// The dead zone wins first: if both |dx| and |dy| are under `threshold` the
/// drag is a `Tap` and no angle math runs. Otherwise the angle from
/// `dy.atan2(dx)` picks one of eight 45-degree buckets. Screen coordinates
/// put positive angles below the x axis:
///
/// | angle (degrees)                 | direction |
/// |---------------------------------|-----------|
/// | [-22.5, 22.5)                   | Right     |
/// | [22.5, 67.5)                    | DownRight |
/// | [67.5, 112.5)                   | Down      |
/// | [112.5, 157.5)                  | DownLeft  |
/// | [157.5, 180] and (-180, -157.5) | Left      |
/// | [-157.5, -112.5)                | UpLeft    |
/// | [-112.5, -67.5)                 | Up        |
/// | [-67.5, -22.5)                  | UpRight   |
///
/// Buckets are half-open on the upper edge, so a drag at exactly 22.5
/// degrees is DownRight and one at exactly -157.5 degrees is UpLeft.
pub fn classify(dx: f64, dy: f64, threshold: f64) -> SwipeDirection {
    if dx.abs() < threshold && dy.abs() < threshold {
        return SwipeDirection::Tap;
    }

    // atan2 yields [-180, 180]; y grows downward, so positive angles sweep
    // clockwise from +x
    angle_bucket(dy.atan2(dx).to_degrees())
}

fn angle_bucket(angle: f64) -> SwipeDirection {
    if angle >= -22.5 && angle < 22.5 {
        SwipeDirection::Right
    } else if angle >= 22.5 && angle < 67.5 {
        SwipeDirection::DownRight
    } else if angle >= 67.5 && angle < 112.5 {
        SwipeDirection::Down
    } else if angle >= 112.5 && angle < 157.5 {
        SwipeDirection::DownLeft
    } else if angle >= 157.5 || angle < -157.5 {
        SwipeDirection::Left
    } else if angle >= -157.5 && angle < -112.5 {
        SwipeDirection::UpLeft
    } else if angle >= -112.5 && angle < -67.5 {
        SwipeDirection::Up
    } else {
        SwipeDirection::UpRight
    }
}
