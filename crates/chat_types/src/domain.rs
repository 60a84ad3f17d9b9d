use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(PeerId);
id_newtype!(MessageId);
id_newtype!(FileId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub description: String,
    pub commands: Vec<BotCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_info: Option<BotInfo>,
}

impl UserSummary {
    pub fn is_bot(&self) -> bool {
        self.bot_info.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PeerSummary {
    User(UserSummary),
    Group {
        peer_id: PeerId,
        title: String,
    },
    Channel {
        peer_id: PeerId,
        title: String,
        broadcast: bool,
        can_post: bool,
    },
    Secret {
        peer_id: PeerId,
        user: UserSummary,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        autoremove_timeout: Option<u32>,
    },
}

impl PeerSummary {
    pub fn can_send_messages(&self) -> bool {
        match self {
            PeerSummary::Channel {
                broadcast: true,
                can_post,
                ..
            } => *can_post,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub user_id: UserId,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerItem {
    pub file_id: FileId,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerCommand {
    pub peer: UserSummary,
    pub command: BotCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMarkup {
    pub rows: Vec<Vec<String>>,
    pub hide_on_activation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub message_id: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl MessageSummary {
    /// Markup the input panel should surface, if any. Empty or
    /// activation-hidden keyboards stay hidden.
    pub fn visible_reply_markup(&self) -> Option<&ReplyMarkup> {
        self.reply_markup
            .as_ref()
            .filter(|markup| !markup.rows.is_empty() && !markup.hide_on_activation)
    }
}
