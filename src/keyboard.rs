//! Keyboard controller
//!
//! Owns every piece of mutable keyboard state: the active touch, the live
//! trail, the current height, the mode and the loaded settings. Hosts feed it
//! touch_down/touch_motion/touch_up/touch_cancel and consume the
//! [`KeyboardEvent`]s that come back; rendering reads immutable
//! [`KeyboardSnapshot`]s instead of poking at the controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::input::{classify, DragTracker, GestureConfig, SwipeDirection};
use crate::layout::{KeyDefinition, KeyboardMode};
use crate::settings::KeyboardSettings;
use crate::trail::{SwipeTrail, TrailPoint};

/// Fraction of the screen the keyboard takes when it first comes up.
const DEFAULT_HEIGHT_FRACTION: f64 = 0.45;

/// Touchable controls a gesture can start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Grid key by row-major index (0..9).
    Key(usize),
    /// Space bar; doubles as the 0 key while numeric mode is on.
    Space,
    Backspace,
    Enter,
    /// The #123/ABC side key.
    ModeToggle,
    /// Drag handle above the grid: drag to resize, tap to close.
    Resize,
}

/// Discrete events the keyboard emits toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// Type one character.
    Character(char),
    /// Delete backward: one character, or the whole trailing word.
    Backspace { delete_word: bool },
    Newline,
    /// Up-left swipe on the enter key.
    OpenEmojiPicker,
    /// Tap on the resize handle; the host should hide the keyboard.
    Close,
}

/// The single tracked touch.
#[derive(Debug, Clone)]
struct ActiveTouch {
    control: Control,
    tracker: DragTracker,
    /// Height at touch_down; resize works off total displacement from here.
    grab_height: f64,
}

/// Render-ready view of the keyboard, built fresh per frame.
#[derive(Debug, Clone)]
pub struct KeyboardSnapshot {
    pub height: f64,
    pub mode: KeyboardMode,
    pub keys: [KeyDefinition; 9],
    pub trail: Vec<TrailPoint>,
    /// False under god mode; the grid renders as blank caps.
    pub show_key_labels: bool,
    pub keyboard_color: String,
    pub key_color: String,
    pub trail_color: String,
}

pub struct KeyboardController {
    config: GestureConfig,
    settings: KeyboardSettings,
    mode: KeyboardMode,
    keys: [KeyDefinition; 9],
    height: f64,
    trail: SwipeTrail,
    active: Option<ActiveTouch>,
}

impl KeyboardController {
    /// Keyboard at its default height for the given screen.
    pub fn new(screen_height: f64, settings: KeyboardSettings) -> Self {
        Self::with_config(screen_height, settings, GestureConfig::default())
    }

    pub fn with_config(
        screen_height: f64,
        settings: KeyboardSettings,
        config: GestureConfig,
    ) -> Self {
        // The floor applies from the start, not just during resizes
        let height = (screen_height * DEFAULT_HEIGHT_FRACTION).max(config.min_height);
        info!(height, "Keyboard controller ready");

        Self {
            config,
            settings,
            mode: KeyboardMode::Letters,
            keys: KeyboardMode::Letters.keys(),
            height,
            trail: SwipeTrail::new(),
            active: None,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn settings(&self) -> &KeyboardSettings {
        &self.settings
    }

    /// Swap in freshly loaded settings (hosts reload when their settings
    /// screen closes).
    pub fn set_settings(&mut self, settings: KeyboardSettings) {
        self.settings = settings;
    }

    /// Start tracking a touch on a control.
    ///
    /// Only one touch is tracked; a second touch_down resets the gesture in
    /// progress without emitting anything.
    pub fn touch_down(&mut self, control: Control, x: f64, y: f64) {
        if let Some(active) = &self.active {
            debug!(control = ?active.control, "New touch while a gesture is active, resetting");
            self.trail.clear();
        }

        debug!(?control, x, y, "Touch down");
        if let Control::Key(_) = control {
            self.trail.begin(x, y);
        }

        self.active = Some(ActiveTouch {
            control,
            tracker: DragTracker::new(x, y),
            grab_height: self.height,
        });
    }

    /// Track finger movement. Trail and height update live; nothing is
    /// emitted until release.
    pub fn touch_motion(&mut self, x: f64, y: f64) {
        let Some(active) = &mut self.active else {
            return;
        };
        active.tracker.update(x, y);

        match active.control {
            Control::Key(_) => self.trail.push(x, y),
            Control::Resize => {
                let delta = active.tracker.delta();
                // Dragging up (negative dy) grows the keyboard
                self.height = (active.grab_height - delta.dy * self.config.resize_scale)
                    .max(self.config.min_height);
            }
            _ => {}
        }
    }

    /// Finish the gesture and emit its event, if any. Safe to call with no
    /// gesture active (a release after cancel does nothing).
    pub fn touch_up(&mut self) -> Option<KeyboardEvent> {
        let active = self.active.take()?;
        self.trail.clear();

        let delta = active.tracker.delta();
        let event = match active.control {
            Control::Key(index) => match self.keys.get(index) {
                Some(key) => {
                    let direction = classify(delta.dx, delta.dy, self.config.swipe_threshold);
                    let ch = key.resolve(direction);
                    info!(index, ?direction, ch = %ch, "Key gesture");
                    Some(KeyboardEvent::Character(ch))
                }
                None => {
                    warn!(index, "Touch on a key index outside the grid");
                    None
                }
            },
            Control::Space => {
                let ch = match self.mode {
                    KeyboardMode::Letters => ' ',
                    KeyboardMode::Numeric => '0',
                };
                Some(KeyboardEvent::Character(ch))
            }
            Control::Backspace => {
                // Raw rightward displacement; the swipe threshold does not
                // apply here and leftward drags stay single-character
                let delete_word = delta.dx > self.config.word_delete_threshold;
                Some(KeyboardEvent::Backspace { delete_word })
            }
            Control::Enter => {
                let direction = classify(delta.dx, delta.dy, self.config.swipe_threshold);
                if direction == SwipeDirection::UpLeft {
                    Some(KeyboardEvent::OpenEmojiPicker)
                } else {
                    Some(KeyboardEvent::Newline)
                }
            }
            Control::ModeToggle => {
                self.mode = self.mode.toggled();
                self.keys = self.mode.keys();
                info!(mode = ?self.mode, "Keyboard mode toggled");
                None
            }
            Control::Resize => {
                if delta.dy.abs() < self.config.close_tap_threshold {
                    info!("Resize handle tapped, closing keyboard");
                    Some(KeyboardEvent::Close)
                } else {
                    info!(height = self.height, "Keyboard resized");
                    None
                }
            }
        };

        if let Some(event) = &event {
            debug!(?event, "Emitting");
        }
        event
    }

    /// Abort the gesture in progress. Clears the trail and the tracker
    /// without emitting; safe to call when nothing is active.
    pub fn touch_cancel(&mut self) {
        if self.active.take().is_some() {
            debug!("Touch cancelled");
        }
        self.trail.clear();
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            height: self.height,
            mode: self.mode,
            keys: self.keys,
            trail: self.trail.points().to_vec(),
            show_key_labels: !self.settings.god_mode,
            keyboard_color: self.settings.keyboard_color.clone(),
            key_color: self.settings.key_color.clone(),
            trail_color: self.settings.swipe_trail_color.clone(),
        }
    }
}
