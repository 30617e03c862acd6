//! Scripted touch-event replay
//!
//! The replay binary and the end-to-end tests drive the controller from
//! JSON-lines scripts: one event object per line, with blank lines and
//! `#` comments skipped.
//!
//! ```text
//! {"event":"down","control":{"key":4},"x":100,"y":300}
//! {"event":"move","x":100,"y":240}
//! {"event":"up"}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keyboard::{Control, KeyboardController, KeyboardEvent};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad event on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

/// One scripted touch event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { control: Control, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Cancel,
}

/// Parse a JSON-lines script.
pub fn parse_script(input: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ScriptError::Parse {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let contents = fs::read_to_string(path)?;
    parse_script(&contents)
}

/// Feed a script through a controller, collecting everything it emits.
pub fn run_script(
    controller: &mut KeyboardController,
    events: &[ScriptEvent],
) -> Vec<KeyboardEvent> {
    let mut emitted = Vec::new();
    for event in events {
        match *event {
            ScriptEvent::Down { control, x, y } => controller.touch_down(control, x, y),
            ScriptEvent::Move { x, y } => controller.touch_motion(x, y),
            ScriptEvent::Up => {
                if let Some(out) = controller.touch_up() {
                    emitted.push(out);
                }
            }
            ScriptEvent::Cancel => controller.touch_cancel(),
        }
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{dispatch, PlainTextBuffer};
    use crate::settings::KeyboardSettings;

    fn tap(control: Control) -> [ScriptEvent; 2] {
        [
            ScriptEvent::Down {
                control,
                x: 100.0,
                y: 100.0,
            },
            ScriptEvent::Up,
        ]
    }

    fn swipe(control: Control, dx: f64, dy: f64) -> [ScriptEvent; 3] {
        [
            ScriptEvent::Down {
                control,
                x: 100.0,
                y: 100.0,
            },
            ScriptEvent::Move {
                x: 100.0 + dx,
                y: 100.0 + dy,
            },
            ScriptEvent::Up,
        ]
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let input = "\n# warm-up\n{\"event\":\"up\"}\n\n{\"event\":\"cancel\"}\n";
        let events = parse_script(input).unwrap();
        assert_eq!(events, vec![ScriptEvent::Up, ScriptEvent::Cancel]);
    }

    #[test]
    fn test_parse_understands_every_control_form() {
        let input = concat!(
            "{\"event\":\"down\",\"control\":{\"key\":4},\"x\":1.0,\"y\":2.0}\n",
            "{\"event\":\"down\",\"control\":\"space\",\"x\":0.0,\"y\":0.0}\n",
            "{\"event\":\"down\",\"control\":\"mode_toggle\",\"x\":0.0,\"y\":0.0}\n",
            "{\"event\":\"move\",\"x\":3.5,\"y\":-4.0}\n",
        );
        let events = parse_script(input).unwrap();
        assert_eq!(
            events[0],
            ScriptEvent::Down {
                control: Control::Key(4),
                x: 1.0,
                y: 2.0
            }
        );
        assert_eq!(
            events[1],
            ScriptEvent::Down {
                control: Control::Space,
                x: 0.0,
                y: 0.0
            }
        );
        assert_eq!(
            events[2],
            ScriptEvent::Down {
                control: Control::ModeToggle,
                x: 0.0,
                y: 0.0
            }
        );
        assert_eq!(events[3], ScriptEvent::Move { x: 3.5, y: -4.0 });
    }

    #[test]
    fn test_parse_reports_the_failing_line() {
        let input = "{\"event\":\"up\"}\n\n{\"event\":\"sideways\"}";
        match parse_script(input) {
            Err(ScriptError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_script_types_into_a_buffer() {
        let mut events = Vec::new();
        events.extend(tap(Control::Key(3))); // H
        events.extend(tap(Control::Key(2))); // I
        events.extend(swipe(Control::Key(4), 0.0, -60.0)); // O swiped up -> U
        events.extend(tap(Control::Space));
        events.extend(swipe(Control::Backspace, 50.0, 0.0)); // word delete
        events.extend(tap(Control::Enter));

        let mut controller = KeyboardController::new(800.0, KeyboardSettings::default());
        let emitted = run_script(&mut controller, &events);
        assert_eq!(emitted.len(), 6);

        let mut buffer = PlainTextBuffer::new();
        for event in &emitted {
            dispatch(event, &mut buffer).unwrap();
        }
        // HIU plus a space, then the word delete takes the lot
        assert_eq!(buffer.text(), "\n");
    }

    #[test]
    fn test_cancelled_gesture_emits_nothing() {
        let events = [
            ScriptEvent::Down {
                control: Control::Key(4),
                x: 0.0,
                y: 0.0,
            },
            ScriptEvent::Move { x: 0.0, y: -60.0 },
            ScriptEvent::Cancel,
            ScriptEvent::Up,
        ];

        let mut controller = KeyboardController::new(800.0, KeyboardSettings::default());
        assert!(run_script(&mut controller, &events).is_empty());
    }
}
