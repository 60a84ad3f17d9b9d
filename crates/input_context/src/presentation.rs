use std::collections::HashMap;

use chat_types::domain::{MessageSummary, PeerSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input_state::{InputMode, InterfaceState};
use crate::panel::TextInputPanelState;
use crate::query::{InputQuery, InputQueryKind};
use crate::results::InputQueryResult;
use crate::scanner::input_context_queries;

/// Everything the input surface is derived from: the interface state, the
/// conversation target, the active input mode and the suggestion results
/// gathered so far. Updates go through the consuming `updated_*` helpers so
/// every change produces a fresh value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentationState {
    pub interface: InterfaceState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<PeerSummary>,
    #[serde(default)]
    pub input_mode: InputMode,
    #[serde(default)]
    pub input_query_results: HashMap<InputQueryKind, InputQueryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_buttons_message: Option<MessageSummary>,
    #[serde(default)]
    pub panel: TextInputPanelState,
}

impl PresentationState {
    pub fn updated_interface(mut self, f: impl FnOnce(InterfaceState) -> InterfaceState) -> Self {
        self.interface = f(self.interface);
        self
    }

    pub fn updated_peer(
        mut self,
        f: impl FnOnce(Option<PeerSummary>) -> Option<PeerSummary>,
    ) -> Self {
        self.peer = f(self.peer);
        self
    }

    pub fn updated_input_mode(mut self, f: impl FnOnce(InputMode) -> InputMode) -> Self {
        self.input_mode = f(self.input_mode);
        self
    }

    pub fn updated_keyboard_buttons_message(
        mut self,
        f: impl FnOnce(Option<MessageSummary>) -> Option<MessageSummary>,
    ) -> Self {
        self.keyboard_buttons_message = f(self.keyboard_buttons_message);
        self
    }

    pub fn updated_panel(
        mut self,
        f: impl FnOnce(TextInputPanelState) -> TextInputPanelState,
    ) -> Self {
        self.panel = f(self.panel);
        self
    }

    /// Applies `f` to the stored result for `kind`. Returning `None` removes
    /// the entry, so a cleared query drops its stale suggestions.
    pub fn updated_input_query_result(
        mut self,
        kind: InputQueryKind,
        f: impl FnOnce(Option<InputQueryResult>) -> Option<InputQueryResult>,
    ) -> Self {
        let current = self.input_query_results.remove(&kind);
        match f(current) {
            Some(result) => {
                debug!(kind = ?kind, "state: input query result stored");
                self.input_query_results.insert(kind, result);
            }
            None => {
                debug!(kind = ?kind, "state: input query result cleared");
            }
        }
        self
    }

    /// Classifies the effective input state (the edited message while an
    /// edit is active, the compose field otherwise).
    pub fn input_context_queries(&self) -> Vec<InputQuery> {
        input_context_queries(self.interface.effective_input())
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
