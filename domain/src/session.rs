use std::sync::{Arc, RwLock};

/// Shared handle to the bearer token of the current session.
///
/// One instance is created at startup and cloned into the HTTP client and
/// the auth service, so the token has a single owner instead of living in
/// ambient global state. Clearing it here is enough to make every
/// subsequent request go out unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap() = None;
    }
}

/// Read-only projection of a session for access decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessClaims {
    pub authenticated: bool,
    pub role: Option<String>,
}

impl AccessClaims {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(role: Option<&str>) -> Self {
        Self {
            authenticated: true,
            role: role.map(str::to_string),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role.as_deref() == Some("admin")
    }

    pub fn is_manager(&self) -> bool {
        self.authenticated && self.role.as_deref() == Some("manager")
    }
}
