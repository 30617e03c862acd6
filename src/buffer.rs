//! Text buffer collaborator seam
//!
//! The engine never edits text itself: it emits [`KeyboardEvent`]s and the
//! host's buffer applies them. [`PlainTextBuffer`] is the reference
//! implementation the replay harness types into.

use thiserror::Error;
use tracing::debug;

use crate::keyboard::KeyboardEvent;

/// Returned by hosts that have not wired up an emoji picker.
///
/// [`TextBuffer::open_emoji_picker`] defaults to this error so an unwired
/// picker surfaces loudly instead of silently eating the gesture.
#[derive(Debug, Error)]
#[error("emoji picker is not implemented")]
pub struct EmojiPickerUnimplemented;

/// Host-side text sink for keyboard events.
pub trait TextBuffer {
    fn append_char(&mut self, ch: char);

    /// Delete one character backward, or the whole trailing word when
    /// `delete_word` is set.
    fn backspace(&mut self, delete_word: bool);

    fn newline(&mut self);

    /// Bring up the host's emoji picker.
    fn open_emoji_picker(&mut self) -> Result<(), EmojiPickerUnimplemented> {
        Err(EmojiPickerUnimplemented)
    }
}

/// Apply one keyboard event to a text buffer.
///
/// [`KeyboardEvent::Close`] is not a text operation and passes through as
/// `Ok(())`, so hosts can route everything through one call site.
pub fn dispatch(
    event: &KeyboardEvent,
    buffer: &mut dyn TextBuffer,
) -> Result<(), EmojiPickerUnimplemented> {
    debug!(?event, "Dispatching keyboard event");
    match event {
        KeyboardEvent::Character(ch) => {
            buffer.append_char(*ch);
            Ok(())
        }
        KeyboardEvent::Backspace { delete_word } => {
            buffer.backspace(*delete_word);
            Ok(())
        }
        KeyboardEvent::Newline => {
            buffer.newline();
            Ok(())
        }
        KeyboardEvent::OpenEmojiPicker => buffer.open_emoji_picker(),
        KeyboardEvent::Close => Ok(()),
    }
}

/// Reference buffer: a flat string with word-aware backspace.
#[derive(Debug, Clone, Default)]
pub struct PlainTextBuffer {
    text: String,
}

impl PlainTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl TextBuffer for PlainTextBuffer {
    fn append_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn backspace(&mut self, delete_word: bool) {
        if delete_word {
            // Trailing whitespace goes first, then the word itself
            while self.text.ends_with(char::is_whitespace) {
                self.text.pop();
            }
            while self.text.ends_with(|c: char| !c.is_whitespace()) {
                self.text.pop();
            }
        } else {
            self.text.pop();
        }
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }
}
