use std::ops::Range;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputQueryKind {
    Emoji,
    Hashtag,
    Mention,
    Command,
    ContextRequest,
}

bitflags! {
    /// Candidate query kinds a span could still resolve to while scanning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PossibleQueryTypes: u32 {
        const EMOJI = 1 << 0;
        const HASHTAG = 1 << 1;
        const MENTION = 1 << 2;
        const COMMAND = 1 << 3;
        const CONTEXT_REQUEST = 1 << 4;
    }
}

bitflags! {
    /// Suggestion sources a mention query should be answered from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MentionTypes: u32 {
        const CONTEXT_BOTS = 1 << 0;
        const MEMBERS = 1 << 1;
        const ACCOUNT_PEER = 1 << 2;
    }
}

/// A candidate query located in the input text. `range` covers the query
/// text with the trigger character excluded; `trailing` is only present for
/// the leading inline-bot detection and covers the text after the address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextQuerySpan {
    pub range: Range<usize>,
    pub types: PossibleQueryTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InputQuery {
    Emoji(String),
    Hashtag(String),
    Mention {
        query: String,
        types: MentionTypes,
    },
    Command(String),
    ContextRequest {
        address: String,
        query: String,
    },
}

impl InputQuery {
    pub fn kind(&self) -> InputQueryKind {
        match self {
            InputQuery::Emoji(_) => InputQueryKind::Emoji,
            InputQuery::Hashtag(_) => InputQueryKind::Hashtag,
            InputQuery::Mention { .. } => InputQueryKind::Mention,
            InputQuery::Command(_) => InputQueryKind::Command,
            InputQuery::ContextRequest { .. } => InputQueryKind::ContextRequest,
        }
    }
}
