pub mod emoji;
pub mod error;
pub mod input_state;
pub mod panel;
pub mod presentation;
pub mod query;
pub mod results;
pub mod scanner;

pub use emoji::is_single_emoji;
pub use error::InputStateError;
pub use input_state::{
    EditMessageState, InputMode, InterfaceState, MediaInputMode, TextInputState,
};
pub use panel::{
    text_input_panel_state, AccessoryItem, ContextPlaceholder, MediaRecordingState,
    TextInputPanelState,
};
pub use presentation::PresentationState;
pub use query::{ContextQuerySpan, InputQuery, InputQueryKind, MentionTypes, PossibleQueryTypes};
pub use results::{ContextResultCollection, InputQueryResult};
pub use scanner::{context_query_spans, input_context_queries};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
