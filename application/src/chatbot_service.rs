use domain::conversation::{ChatContext, ChatMessage, OutboundChat};
use domain::gateway::ChatbotGateway;
use domain::storage::{LocalStore, CHAT_USER_ID_KEY};
use shared::api_error::ApiError;
use uuid::Uuid;

const GREETING: &str =
    "Hello! I'm AdaAI, your virtual health assistant. How can I help you today?";
const CONNECT_APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";
const FALLBACK_REPLY: &str =
    "I'm sorry, I didn't understand that. Could you please rephrase?";
const THROTTLED_NOTICE: &str =
    "I'm receiving too many requests right now. Please wait a moment and try again.";
const INVALID_REQUEST_NOTICE: &str = "Invalid request. Please try again.";
const GENERIC_NOTICE: &str = "Sorry, I'm having trouble right now. Please try again later.";
const START_ERROR: &str = "Failed to start conversation";

/// Drives one AdaAI conversation against the chatbot backend.
///
/// The client identity is generated once and kept in durable storage; the
/// session identifier comes from the start endpoint and can be invalidated
/// by the backend at any time. `has_failed_to_start` suppresses repeated
/// start attempts once a transcript exists, so a down backend is not
/// hammered on every keystroke; it resets on explicit retry or reset.
pub struct ChatbotService<G, S> {
    gateway: G,
    vault: S,
    messages: Vec<ChatMessage>,
    user_id: Option<String>,
    session_id: Option<String>,
    is_open: bool,
    is_loading: bool,
    last_error: Option<String>,
    has_failed_to_start: bool,
}

impl<G: ChatbotGateway, S: LocalStore> ChatbotService<G, S> {
    pub fn new(gateway: G, vault: S) -> Self {
        Self {
            gateway,
            vault,
            messages: Vec::new(),
            user_id: None,
            session_id: None,
            is_open: false,
            is_loading: false,
            last_error: None,
            has_failed_to_start: false,
        }
    }

    /// Load or mint the durable client identity.
    pub fn ensure_user_id(&mut self) -> String {
        if let Some(id) = &self.user_id {
            return id.clone();
        }
        let id = match self.vault.get(CHAT_USER_ID_KEY).ok().flatten() {
            Some(stored) => stored,
            None => {
                let minted = format!("uuid_{}", Uuid::new_v4().simple());
                if let Err(err) = self.vault.put(CHAT_USER_ID_KEY, &minted) {
                    tracing::warn!("failed to persist chat identity: {err}");
                }
                minted
            }
        };
        self.user_id = Some(id.clone());
        id
    }

    /// Obtain a session from the start endpoint. Returns success; never
    /// propagates an error.
    pub async fn start_conversation(&mut self) -> bool {
        // One failed attempt per episode once a transcript exists.
        if self.has_failed_to_start && !self.messages.is_empty() {
            return false;
        }
        let user_id = self.ensure_user_id();
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.start_conversation(&user_id).await;
        self.is_loading = false;
        match result {
            Ok(ticket) => {
                self.session_id = Some(ticket.session_id);
                self.has_failed_to_start = false;
                if self.messages.is_empty() {
                    self.messages.push(ChatMessage::bot(GREETING));
                }
                true
            }
            Err(err) => {
                tracing::warn!("failed to start conversation: {err}");
                self.last_error = Some(START_ERROR.to_string());
                self.has_failed_to_start = true;
                if self.messages.is_empty() {
                    self.messages.push(ChatMessage::bot(CONNECT_APOLOGY));
                }
                false
            }
        }
    }

    /// Send one user message. Blank input and re-entry while a send is in
    /// flight are silent no-ops. The user message is appended before the
    /// call; every failure maps to at most one bot transcript entry.
    pub async fn send_message(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_loading {
            return false;
        }
        if self.session_id.is_none() && !self.start_conversation().await {
            return false;
        }
        let outgoing = trimmed.to_string();
        self.messages.push(ChatMessage::user(&outgoing));
        self.is_loading = true;
        self.last_error = None;
        let delivered = self.deliver(&outgoing).await;
        self.is_loading = false;
        delivered
    }

    /// Delivery loop. A 404 means the backend dropped the session: restart
    /// once and resend the same message; a second 404 falls through to the
    /// generic notice. Bounded by `restarted`, so there is no recursion.
    async fn deliver(&mut self, text: &str) -> bool {
        let mut restarted = false;
        loop {
            let Some(session_id) = self.session_id.clone() else {
                return false;
            };
            let outbound = OutboundChat {
                message: text.to_string(),
                user_id: self.ensure_user_id(),
                session_id,
                context_data: ChatContext::default(),
            };
            match self.gateway.send_chat(&outbound).await {
                Ok(reply) => {
                    let text = reply
                        .text
                        .filter(|text| !text.trim().is_empty())
                        .unwrap_or_else(|| FALLBACK_REPLY.to_string());
                    self.messages.push(ChatMessage::bot(text));
                    return true;
                }
                Err(ApiError::Status { status: 429, .. }) => {
                    self.messages.push(ChatMessage::bot(THROTTLED_NOTICE));
                    return false;
                }
                Err(ApiError::Status {
                    status: 400,
                    message,
                }) => {
                    let notice = message
                        .filter(|message| !message.is_empty())
                        .unwrap_or_else(|| INVALID_REQUEST_NOTICE.to_string());
                    self.messages.push(ChatMessage::bot(notice));
                    return false;
                }
                Err(ApiError::Status { status: 404, .. }) if !restarted => {
                    self.session_id = None;
                    if !self.start_conversation().await {
                        // Abandon the send; the start path already recorded
                        // the failure, no extra transcript entry.
                        return false;
                    }
                    restarted = true;
                }
                Err(err) => {
                    tracing::warn!("chat delivery failed: {err}");
                    self.messages.push(ChatMessage::bot(GENERIC_NOTICE));
                    return false;
                }
            }
        }
    }

    /// Open the widget; lazily mints the identity and starts a session
    /// unless one exists or a previous attempt already failed.
    pub async fn open_chat(&mut self) {
        self.is_open = true;
        self.ensure_user_id();
        if self.session_id.is_none() && !self.has_failed_to_start {
            self.start_conversation().await;
        }
    }

    pub fn close_chat(&mut self) {
        self.is_open = false;
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn reset_session(&mut self) {
        self.session_id = None;
        self.messages.clear();
        self.last_error = None;
        self.has_failed_to_start = false;
    }

    pub async fn retry_connection(&mut self) -> bool {
        self.reset_session();
        self.start_conversation().await
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn has_active_session(&self) -> bool {
        self.session_id.is_some()
    }

    pub fn has_failed_to_start(&self) -> bool {
        self.has_failed_to_start
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

}
