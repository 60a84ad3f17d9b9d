//! Derives the text-input panel state (accessory buttons, query
//! placeholder, recording indicator) from a presentation state.

use chat_types::domain::PeerSummary;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::input_state::{InputMode, MediaInputMode};
use crate::presentation::PresentationState;
use crate::query::{InputQuery, InputQueryKind};
use crate::results::InputQueryResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AccessoryItem {
    Keyboard,
    Stickers,
    AutoremoveTimeout(Option<u32>),
    SilentPost(bool),
    Commands,
    InputButtons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ContextPlaceholder {
    BotQuery { address: String, placeholder: String },
    GifSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum MediaRecordingState {
    Audio { paused: bool },
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextInputPanelState {
    #[serde(default)]
    pub accessory_items: Vec<AccessoryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_placeholder: Option<ContextPlaceholder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_recording: Option<MediaRecordingState>,
}

/// Derives the panel state for the current presentation state. An active
/// media recording carries over unchanged; everything else is recomputed.
pub fn text_input_panel_state(state: &PresentationState) -> TextInputPanelState {
    let mut context_placeholder = bot_query_placeholder(state);
    let media_recording = state.panel.media_recording;

    let panel = match state.input_mode {
        InputMode::Media(mode) => {
            if context_placeholder.is_none()
                && state.interface.edit_message.is_none()
                && state.interface.compose_input.text.is_empty()
                && mode == MediaInputMode::Gif
            {
                context_placeholder = Some(ContextPlaceholder::GifSearch);
            }
            TextInputPanelState {
                accessory_items: vec![AccessoryItem::Keyboard],
                context_placeholder,
                media_recording,
            }
        }
        InputMode::InputButtons => TextInputPanelState {
            accessory_items: vec![AccessoryItem::Keyboard],
            context_placeholder,
            media_recording,
        },
        InputMode::None | InputMode::Text => {
            if state.interface.edit_message.is_some()
                || !state.interface.compose_input.text.is_empty()
            {
                TextInputPanelState {
                    accessory_items: Vec::new(),
                    context_placeholder,
                    media_recording,
                }
            } else {
                let mut accessory_items = Vec::new();
                if let Some(PeerSummary::Secret {
                    autoremove_timeout, ..
                }) = &state.peer
                {
                    accessory_items.push(AccessoryItem::AutoremoveTimeout(*autoremove_timeout));
                }
                if let Some(peer @ PeerSummary::Channel {
                    broadcast: true, ..
                }) = &state.peer
                {
                    if peer.can_send_messages() {
                        accessory_items
                            .push(AccessoryItem::SilentPost(state.interface.silent_posting));
                    }
                }
                if let Some(PeerSummary::User(user)) = &state.peer {
                    if user.is_bot() {
                        accessory_items.push(AccessoryItem::Commands);
                    }
                }
                accessory_items.push(AccessoryItem::Stickers);
                if let Some(message) = &state.keyboard_buttons_message {
                    if message.visible_reply_markup().is_some() {
                        accessory_items.push(AccessoryItem::InputButtons);
                    }
                }
                TextInputPanelState {
                    accessory_items,
                    context_placeholder,
                    media_recording,
                }
            }
        }
    };

    trace!(
        accessories = panel.accessory_items.len(),
        placeholder = panel.context_placeholder.is_some(),
        "panel: derived input panel state"
    );
    panel
}

/// Placeholder for an inline-bot query field: shown while the stored
/// context-request result names a bot with an advertised placeholder and
/// the query typed so far is empty.
fn bot_query_placeholder(state: &PresentationState) -> Option<ContextPlaceholder> {
    let result = state
        .input_query_results
        .get(&InputQueryKind::ContextRequest)?;
    let InputQueryResult::ContextRequestResult { bot: Some(bot), .. } = result else {
        return None;
    };
    let placeholder = bot.bot_info.as_ref()?.inline_placeholder.as_ref()?;
    for input_query in state.input_context_queries() {
        if let InputQuery::ContextRequest { address, query } = input_query {
            if query.is_empty() {
                return Some(ContextPlaceholder::BotQuery {
                    address,
                    placeholder: placeholder.clone(),
                });
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
