use shared::types::Result;

/// Durable local key-value storage.
///
/// Holds the three entries that survive restarts: the session token, the
/// serialized user profile, and the chatbot client identity. Keys are
/// independent; there is no transaction spanning them.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const AUTH_USER_KEY: &str = "auth_user";
pub const CHAT_USER_ID_KEY: &str = "chatbot_user_id";
