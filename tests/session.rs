use todocards::constants::{ERROR_ACCOUNT_CREATE_FAILED, ERROR_LOGIN_FAILED, ERROR_LOGOUT_FAILED};
use todocards::session::memory::AccountSeed;
use todocards::session::{
    create_identity_provider, IdentityError, IdentityProvider, MemoryIdentityProvider, SessionView, UserSession,
};

fn seeded() -> MemoryIdentityProvider {
    MemoryIdentityProvider::with_accounts(vec![AccountSeed {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    }])
    .unwrap()
}

#[tokio::test]
async fn test_memory_provider_sign_in() {
    let provider = seeded();

    let user = provider.sign_in(" Ada@Example.com ", "hunter22").await.unwrap().unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert!(!user.id_token.is_empty());
    assert_eq!(provider.current_user().await.unwrap(), Some(user));
}

#[tokio::test]
async fn test_memory_provider_rejects_wrong_password() {
    let provider = seeded();

    let result = provider.sign_in("ada@example.com", "nope").await;

    assert!(matches!(result, Err(IdentityError::InvalidCredentials(_))));
    assert!(provider.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_provider_create_user() {
    let provider = MemoryIdentityProvider::new();

    let user = provider.create_user("new@example.com", "secret1").await.unwrap().unwrap();
    assert_eq!(provider.account_count().await, 1);
    assert_eq!(provider.current_user().await.unwrap().map(|u| u.uid), Some(user.uid));

    let duplicate = provider.create_user("NEW@example.com", "secret1").await;
    assert!(matches!(duplicate, Err(IdentityError::AccountExists(_))));

    let short = provider.create_user("other@example.com", "123").await;
    assert!(matches!(short, Err(IdentityError::InvalidData(_))));

    let malformed = provider.create_user("not-an-email", "secret1").await;
    assert!(matches!(malformed, Err(IdentityError::InvalidData(_))));
}

#[tokio::test]
async fn test_memory_provider_sign_out() {
    let provider = seeded();
    assert!(matches!(provider.sign_out().await, Err(IdentityError::NotSignedIn)));

    provider.sign_in("ada@example.com", "hunter22").await.unwrap();
    provider.sign_out().await.unwrap();
    assert!(provider.current_user().await.unwrap().is_none());
}

#[test]
fn test_duplicate_seeds_rejected() {
    let seed = AccountSeed {
        email: "a@example.com".to_string(),
        password: "password".to_string(),
    };
    let result = MemoryIdentityProvider::with_accounts(vec![seed.clone(), seed]);
    assert!(matches!(result, Err(IdentityError::AccountExists(_))));
}

#[tokio::test]
async fn test_factory_creates_memory_provider() {
    let provider = create_identity_provider("memory", "").unwrap();
    assert_eq!(provider.provider_type(), "memory");

    let creds = r#"{"accounts": [{"email": "a@example.com", "password": "password"}]}"#;
    let provider = create_identity_provider("memory", creds).unwrap();
    assert!(provider.sign_in("a@example.com", "password").await.unwrap().is_some());
}

#[test]
fn test_factory_errors() {
    assert!(create_identity_provider("firebase", "").is_err());
    assert!(create_identity_provider("memory", "{not json").is_err());
    assert!(create_identity_provider("memory", r#"{"accounts": "nope"}"#).is_err());
}

#[tokio::test]
async fn test_session_starts_pending_then_login_view() {
    let mut session = UserSession::new(Box::new(seeded()));
    assert_eq!(session.view(), SessionView::Pending);
    assert!(session.state().needs_auth_reverification);

    session.restore().await;

    assert_eq!(session.view(), SessionView::Login);
    assert!(!session.state().is_authenticated);
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_session_restore_adopts_signed_in_user() {
    let provider = seeded();
    let user = provider.sign_in("ada@example.com", "hunter22").await.unwrap().unwrap();
    let mut session = UserSession::new(Box::new(provider));

    session.restore().await;

    assert_eq!(session.view(), SessionView::Authenticated);
    assert_eq!(session.state().uid.as_deref(), Some(user.uid.as_str()));
    assert_eq!(session.token(), Some(user.id_token.as_str()));
}

#[tokio::test]
async fn test_session_login_and_logout() {
    let mut session = UserSession::new(Box::new(seeded()));
    session.restore().await;

    session.login("ada@example.com", "hunter22").await;
    assert_eq!(session.view(), SessionView::Authenticated);
    assert!(session.token().is_some());
    assert!(session.message().is_none());

    session.logout().await;
    assert_eq!(session.view(), SessionView::Login);
    assert!(session.token().is_none());
    assert!(session.state().uid.is_none());
}

#[tokio::test]
async fn test_session_failed_login_sets_message() {
    let mut session = UserSession::new(Box::new(seeded()));
    session.restore().await;

    session.login("ada@example.com", "wrong").await;

    assert_eq!(session.view(), SessionView::Login);
    let message = session.take_message().expect("error message");
    assert!(message.is_error());
    assert_eq!(message.text, ERROR_LOGIN_FAILED);
    assert!(session.message().is_none());
}

#[tokio::test]
async fn test_session_failed_account_creation_sets_message() {
    let mut session = UserSession::new(Box::new(seeded()));
    session.restore().await;

    session.create_account("ada@example.com", "hunter22").await;

    assert_eq!(session.view(), SessionView::Login);
    assert_eq!(session.message().map(|m| m.text.as_str()), Some(ERROR_ACCOUNT_CREATE_FAILED));
}

#[tokio::test]
async fn test_session_create_account_signs_in() {
    let mut session = UserSession::new(Box::new(MemoryIdentityProvider::new()));
    session.restore().await;

    session.create_account("new@example.com", "secret1").await;

    assert_eq!(session.view(), SessionView::Authenticated);
}

#[tokio::test]
async fn test_session_logout_without_user_sets_message() {
    let mut session = UserSession::new(Box::new(seeded()));
    session.restore().await;

    session.logout().await;

    assert_eq!(session.message().map(|m| m.text.as_str()), Some(ERROR_LOGOUT_FAILED));
}
