use std::ops::Range;

use chat_types::domain::MessageId;
use serde::{Deserialize, Serialize};

use crate::error::InputStateError;

/// Snapshot of a text-input field: its content and the selected byte range.
/// A collapsed selection is the caret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextInputState {
    pub text: String,
    pub selection: Range<usize>,
}

impl TextInputState {
    /// State with the caret at the end of the text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self {
            text,
            selection: caret..caret,
        }
    }

    /// State with the caret at `caret`, clamped to the text length and
    /// floored to a character boundary.
    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        let text = text.into();
        let caret = floor_char_boundary(&text, caret);
        Self {
            text,
            selection: caret..caret,
        }
    }

    /// State with an explicit selection. Offsets must lie inside the text,
    /// on character boundaries, and in order.
    pub fn with_selection(
        text: impl Into<String>,
        selection: Range<usize>,
    ) -> Result<Self, InputStateError> {
        let text = text.into();
        for offset in [selection.start, selection.end] {
            if offset > text.len() {
                return Err(InputStateError::SelectionOutOfBounds {
                    offset,
                    len: text.len(),
                });
            }
            if !text.is_char_boundary(offset) {
                return Err(InputStateError::SelectionNotCharBoundary { offset });
            }
        }
        if selection.start > selection.end {
            return Err(InputStateError::SelectionReversed {
                start: selection.start,
                end: selection.end,
            });
        }
        Ok(Self { text, selection })
    }

    /// Caret position for a collapsed selection, `None` while a range of
    /// text is selected.
    pub fn caret(&self) -> Option<usize> {
        (self.selection.start == self.selection.end).then_some(self.selection.start)
    }
}

pub(crate) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    let mut offset = offset;
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaInputMode {
    Gif,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    None,
    Text,
    Media(MediaInputMode),
    InputButtons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageState {
    pub message_id: MessageId,
    pub input: TextInputState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceState {
    pub compose_input: TextInputState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_message: Option<EditMessageState>,
    #[serde(default)]
    pub silent_posting: bool,
}

impl InterfaceState {
    /// The input state classification should run against: the message being
    /// edited when an edit is active, the compose field otherwise.
    pub fn effective_input(&self) -> &TextInputState {
        match &self.edit_message {
            Some(edit) => &edit.input,
            None => &self.compose_input,
        }
    }
}
