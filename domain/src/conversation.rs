use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundChat {
    pub message: String,
    pub user_id: String,
    pub session_id: String,
    pub context_data: ChatContext,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub user_type: String,
    pub platform: String,
}

impl Default for ChatContext {
    fn default() -> Self {
        Self {
            user_type: "patient".to_string(),
            platform: "cli".to_string(),
        }
    }
}

/// Response of the start endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTicket {
    pub session_id: String,
}

/// Response of the chat endpoint. `text` can be missing or empty; the
/// caller substitutes a fallback reply in that case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub text: Option<String>,
}
