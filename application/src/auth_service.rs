use domain::gateway::AuthGateway;
use domain::models::{Credentials, LoginPayload, Registration, RegistrationReceipt, User};
use domain::session::{AccessClaims, SessionContext};
use domain::storage::{LocalStore, AUTH_TOKEN_KEY, AUTH_USER_KEY};
use shared::types::Result;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Outcome of a registration attempt that reached the backend.
///
/// Registration and the follow-up automatic login are separate calls, so
/// "account created but not logged in" is a distinct, non-error outcome
/// rather than being folded into a single failure.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    Complete {
        receipt: RegistrationReceipt,
        login: LoginPayload,
    },
    AccountCreated {
        receipt: RegistrationReceipt,
        login_error: String,
    },
}

/// Owns the authenticated identity for the lifetime of the process.
///
/// The token lives in the shared `SessionContext` that the HTTP client
/// reads on every request; the user profile lives here. Both are mirrored
/// into durable storage so a restart resumes the session without a backend
/// round trip.
pub struct AuthService<G, S> {
    gateway: G,
    vault: S,
    session: SessionContext,
    user: Option<User>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<G: AuthGateway, S: LocalStore> AuthService<G, S> {
    pub fn new(gateway: G, vault: S, session: SessionContext) -> Self {
        Self {
            gateway,
            vault,
            session,
            user: None,
            is_loading: false,
            last_error: None,
        }
    }

    /// Restore a persisted session. Both keys must be present and the
    /// profile must still deserialize; the token is not re-validated.
    pub fn initialize(&mut self) {
        let token = self.vault.get(AUTH_TOKEN_KEY).ok().flatten();
        let stored_user = self.vault.get(AUTH_USER_KEY).ok().flatten();
        if let (Some(token), Some(raw)) = (token, stored_user) {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    self.session.set_token(&token);
                    self.user = Some(user);
                }
                Err(err) => tracing::warn!("stored user profile is unreadable: {err}"),
            }
        }
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginPayload> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.login(credentials).await;
        self.is_loading = false;
        match result {
            Ok(payload) => {
                self.adopt_session(&payload);
                Ok(payload)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(LOGIN_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn register(&mut self, registration: &Registration) -> Result<RegisterOutcome> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.register(registration).await;
        self.is_loading = false;
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => {
                self.last_error = Some(err.human_message(REGISTER_FALLBACK));
                return Err(err.into());
            }
        };

        let credentials = Credentials {
            email: registration.email.clone(),
            password: registration.password.clone(),
        };
        match self.login(&credentials).await {
            Ok(login) => Ok(RegisterOutcome::Complete { receipt, login }),
            Err(err) => {
                tracing::warn!("auto-login after registration failed: {err}");
                Ok(RegisterOutcome::AccountCreated {
                    receipt,
                    login_error: err.to_string(),
                })
            }
        }
    }

    /// Best-effort backend notification, then unconditional local cleanup.
    pub async fn logout(&mut self) {
        if self.session.has_token() {
            if let Err(err) = self.gateway.logout().await {
                tracing::warn!("logout request failed: {err}");
            }
        }
        self.clear_session();
    }

    /// Cleanup after any call came back 401. The HTTP client has already
    /// dropped the token; this clears the profile and durable state.
    pub fn handle_unauthorized(&mut self) {
        self.clear_session();
    }

    fn adopt_session(&mut self, payload: &LoginPayload) {
        self.session.set_token(&payload.token);
        self.user = Some(payload.user.clone());
        if let Err(err) = self.vault.put(AUTH_TOKEN_KEY, &payload.token) {
            tracing::warn!("failed to persist auth token: {err}");
        }
        match serde_json::to_string(&payload.user) {
            Ok(serialized) => {
                if let Err(err) = self.vault.put(AUTH_USER_KEY, &serialized) {
                    tracing::warn!("failed to persist user profile: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to serialize user profile: {err}"),
        }
    }

    fn clear_session(&mut self) {
        self.user = None;
        self.session.clear();
        for key in [AUTH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(err) = self.vault.remove(key) {
                tracing::warn!("failed to clear {key}: {err}");
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.has_token() && self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.role.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role() == Some("admin")
    }

    pub fn is_manager(&self) -> bool {
        self.is_authenticated() && self.role() == Some("manager")
    }

    pub fn claims(&self) -> AccessClaims {
        AccessClaims {
            authenticated: self.is_authenticated(),
            role: self.role().map(str::to_string),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
