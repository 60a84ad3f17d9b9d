use chat_types::domain::{MemberSummary, PeerCommand, StickerItem, UserId, UserSummary};
use serde::{Deserialize, Serialize};

/// One page of inline-bot results, tagged with the query it answers so a
/// stale page is distinguishable from the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextResultCollection {
    pub bot_id: UserId,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
}

/// Suggestion data a lookup produced for one query kind, merged back into
/// the presentation state under that kind's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InputQueryResult {
    Stickers(Vec<StickerItem>),
    Hashtags(Vec<String>),
    Mentions(Vec<MemberSummary>),
    Commands(Vec<PeerCommand>),
    ContextRequestResult {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bot: Option<UserSummary>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        results: Option<ContextResultCollection>,
    },
}
