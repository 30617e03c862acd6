//! Drastic keyboard - swipe gesture engine for a 3x3 touch keyboard
//!
//! The whole alphabet on nine keys: tap a key for its base letter, swipe one
//! of eight directions for the letters packed around it. This crate is the
//! engine only; it turns host touch events into typed characters and control
//! events, and leaves layout and drawing to the host.
//!
//! - [`input`] classifies drag vectors into taps and compass swipes
//! - [`layout`] maps key + direction to the symbol to type
//! - [`keyboard`] tracks the active gesture and emits events
//! - [`trail`] keeps the breadcrumb trail rendering draws under the finger
//! - [`settings`] persists colors and god mode as a flat JSON blob
//! - [`buffer`] is the text-sink seam hosts implement
//! - [`script`] replays scripted gestures, for tests and the CLI

pub mod buffer;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod script;
pub mod settings;
pub mod trail;

pub use buffer::{dispatch, EmojiPickerUnimplemented, PlainTextBuffer, TextBuffer};
pub use input::{classify, DragTracker, DragVector, GestureConfig, SwipeDirection};
pub use keyboard::{Control, KeyboardController, KeyboardEvent, KeyboardSnapshot};
pub use layout::{digit_keys, letter_keys, KeyDefinition, KeyMapping, KeyboardMode};
pub use script::{load_script, parse_script, run_script, ScriptError, ScriptEvent};
pub use settings::{FileStore, KeyboardSettings, MemoryStore, SettingsStore, SETTINGS_KEY};
pub use trail::{SwipeTrail, TrailPoint};
