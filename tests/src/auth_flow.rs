use crate::support::{login_payload, status, user, ScriptedAuthGateway};
use application::auth_service::{AuthService, RegisterOutcome};
use domain::models::{Credentials, Registration, RegistrationReceipt};
use domain::session::SessionContext;
use domain::storage::{LocalStore, AUTH_TOKEN_KEY, AUTH_USER_KEY};
use infrastructure::local_store::MemoryStore;

fn credentials() -> Credentials {
    Credentials {
        email: "user@medvax.test".to_string(),
        password: "hunter2".to_string(),
    }
}

fn registration() -> Registration {
    Registration {
        name: "Ada".to_string(),
        email: "user@medvax.test".to_string(),
        password: "hunter2".to_string(),
        phone: None,
    }
}

fn service(
    gateway: &ScriptedAuthGateway,
) -> (
    AuthService<&ScriptedAuthGateway, MemoryStore>,
    SessionContext,
    MemoryStore,
) {
    let session = SessionContext::new();
    let vault = MemoryStore::new();
    let service = AuthService::new(gateway, vault.clone(), session.clone());
    (service, session, vault)
}

#[tokio::test]
async fn login_populates_memory_and_durable_storage() {
    let gateway = ScriptedAuthGateway::default();
    gateway.logins.push(Ok(login_payload("t1", Some("admin"))));
    let (mut auth, session, vault) = service(&gateway);

    let payload = auth.login(&credentials()).await.unwrap();

    assert_eq!(payload.token, "t1");
    assert!(auth.is_authenticated());
    assert!(auth.is_admin());
    assert_eq!(session.token().as_deref(), Some("t1"));
    assert_eq!(vault.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("t1"));
    let stored_user = vault.get(AUTH_USER_KEY).unwrap().unwrap();
    assert!(stored_user.contains("user@medvax.test"));
}

#[tokio::test]
async fn login_failure_records_the_backend_message() {
    let gateway = ScriptedAuthGateway::default();
    gateway
        .logins
        .push(Err(status(400, Some("Invalid credentials"))));
    let (mut auth, session, vault) = service(&gateway);

    assert!(auth.login(&credentials()).await.is_err());
    assert_eq!(auth.last_error(), Some("Invalid credentials"));
    assert!(!auth.is_authenticated());
    assert!(!session.has_token());
    assert!(vault.get(AUTH_TOKEN_KEY).unwrap().is_none());
    assert!(!auth.is_loading());
}

#[tokio::test]
async fn login_failure_without_backend_message_uses_the_fallback() {
    let gateway = ScriptedAuthGateway::default();
    gateway.logins.push(Err(status(500, None)));
    let (mut auth, _, _) = service(&gateway);

    assert!(auth.login(&credentials()).await.is_err());
    assert_eq!(auth.last_error(), Some("Login failed"));
}

#[tokio::test]
async fn logout_clears_everything_even_when_the_backend_call_fails() {
    let mut gateway = ScriptedAuthGateway::default();
    gateway.logout_fails = true;
    gateway.logins.push(Ok(login_payload("t1", None)));
    let (mut auth, session, vault) = service(&gateway);

    auth.login(&credentials()).await.unwrap();
    auth.logout().await;

    assert_eq!(gateway.logout_calls(), 1);
    assert!(!auth.is_authenticated());
    assert!(auth.user().is_none());
    assert!(!session.has_token());
    assert!(vault.get(AUTH_TOKEN_KEY).unwrap().is_none());
    assert!(vault.get(AUTH_USER_KEY).unwrap().is_none());
}

#[tokio::test]
async fn logout_without_a_token_skips_the_backend() {
    let gateway = ScriptedAuthGateway::default();
    let (mut auth, _, _) = service(&gateway);

    auth.logout().await;

    assert_eq!(gateway.logout_calls(), 0);
}

#[tokio::test]
async fn register_then_auto_login_completes_the_session() {
    let gateway = ScriptedAuthGateway::default();
    gateway.registers.push(Ok(RegistrationReceipt::default()));
    gateway.logins.push(Ok(login_payload("t2", None)));
    let (mut auth, session, _) = service(&gateway);

    let outcome = auth.register(&registration()).await.unwrap();

    assert!(matches!(outcome, RegisterOutcome::Complete { .. }));
    assert!(auth.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("t2"));
}

#[tokio::test]
async fn register_with_failed_auto_login_is_not_an_error() {
    let gateway = ScriptedAuthGateway::default();
    gateway.registers.push(Ok(RegistrationReceipt::default()));
    gateway.logins.push(Err(status(503, None)));
    let (mut auth, _, _) = service(&gateway);

    let outcome = auth.register(&registration()).await.unwrap();

    match outcome {
        RegisterOutcome::AccountCreated { login_error, .. } => {
            assert!(!login_error.is_empty());
        }
        RegisterOutcome::Complete { .. } => panic!("login should have failed"),
    }
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn failed_registration_is_an_error() {
    let gateway = ScriptedAuthGateway::default();
    gateway
        .registers
        .push(Err(status(409, Some("email already registered"))));
    let (mut auth, _, _) = service(&gateway);

    assert!(auth.register(&registration()).await.is_err());
    assert_eq!(auth.last_error(), Some("email already registered"));
}

#[tokio::test]
async fn initialize_restores_a_persisted_session_without_a_backend_call() {
    let gateway = ScriptedAuthGateway::default();
    let session = SessionContext::new();
    let vault = MemoryStore::new();
    vault.put(AUTH_TOKEN_KEY, "t9").unwrap();
    vault
        .put(
            AUTH_USER_KEY,
            &serde_json::to_string(&user("u1", "user@medvax.test", Some("manager"))).unwrap(),
        )
        .unwrap();

    let mut auth = AuthService::new(&gateway, vault, session.clone());
    auth.initialize();

    assert!(auth.is_authenticated());
    assert!(auth.is_manager());
    assert_eq!(session.token().as_deref(), Some("t9"));
}

#[tokio::test]
async fn initialize_ignores_a_partial_persisted_session() {
    let gateway = ScriptedAuthGateway::default();
    let vault = MemoryStore::new();
    vault.put(AUTH_TOKEN_KEY, "t9").unwrap();

    let mut auth = AuthService::new(&gateway, vault, SessionContext::new());
    auth.initialize();

    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn unauthorized_cleanup_clears_session_and_storage() {
    let gateway = ScriptedAuthGateway::default();
    gateway.logins.push(Ok(login_payload("t1", Some("admin"))));
    let (mut auth, session, vault) = service(&gateway);
    auth.login(&credentials()).await.unwrap();

    // The HTTP client drops the token the moment a 401 arrives; the
    // service-level cleanup removes the rest.
    session.clear();
    auth.handle_unauthorized();

    assert!(!auth.is_authenticated());
    assert!(!auth.is_admin());
    assert!(auth.user().is_none());
    assert!(vault.get(AUTH_TOKEN_KEY).unwrap().is_none());
    assert!(vault.get(AUTH_USER_KEY).unwrap().is_none());
}

#[tokio::test]
async fn role_predicates_are_false_when_unauthenticated() {
    let gateway = ScriptedAuthGateway::default();
    let (auth, _, _) = service(&gateway);

    assert!(!auth.is_admin());
    assert!(!auth.is_manager());
    assert!(auth.role().is_none());
    assert!(!auth.claims().authenticated);
}
