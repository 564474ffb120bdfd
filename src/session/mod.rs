//! User session gating access to the todo list.
//!
//! Wraps an [`IdentityProvider`] and keeps the small amount of state the UI
//! needs: whether a user is signed in, whether the initial auth check has
//! run, the signed-in uid and the current id token. Provider failures never
//! propagate; they become a transient [`Message`] instead.

pub mod factory;
pub mod memory;
pub mod provider;

pub use factory::create_identity_provider;
pub use memory::MemoryIdentityProvider;
pub use provider::{AuthUser, IdentityError, IdentityProvider};

use crate::constants::{ERROR_ACCOUNT_CREATE_FAILED, ERROR_INVALID_LOGIN, ERROR_LOGIN_FAILED, ERROR_LOGOUT_FAILED};
use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub needs_auth_reverification: bool,
    pub uid: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            needs_auth_reverification: true,
            uid: None,
        }
    }
}

/// What the UI should show for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    /// The initial auth check has not completed yet.
    Pending,
    Login,
    Authenticated,
}

pub struct UserSession {
    provider: Box<dyn IdentityProvider>,
    state: SessionState,
    token: Option<String>,
    message: Option<Message>,
}

impl UserSession {
    pub fn new(provider: Box<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: SessionState::default(),
            token: None,
            message: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn provider_type(&self) -> &str {
        self.provider.provider_type()
    }

    pub fn view(&self) -> SessionView {
        if self.state.needs_auth_reverification {
            SessionView::Pending
        } else if self.state.is_authenticated {
            SessionView::Authenticated
        } else {
            SessionView::Login
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn take_message(&mut self) -> Option<Message> {
        self.message.take()
    }

    /// Initial auth-state check: adopt whatever user the provider reports.
    pub async fn restore(&mut self) {
        let user = match self.provider.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Auth state check failed: {}", e);
                None
            }
        };

        self.token = user.as_ref().map(|u| u.id_token.clone());
        self.state = SessionState {
            is_authenticated: user.is_some(),
            needs_auth_reverification: false,
            uid: user.map(|u| u.uid),
        };
        log::info!("Session restored (authenticated: {})", self.state.is_authenticated);
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        match self.provider.sign_in(email, password).await {
            Ok(Some(user)) => self.adopt(user),
            Ok(None) => self.message = Some(Message::error(ERROR_INVALID_LOGIN)),
            Err(e) => {
                log::warn!("Login failed for {}: {}", email, e);
                self.message = Some(Message::error(ERROR_LOGIN_FAILED));
            }
        }
    }

    pub async fn create_account(&mut self, email: &str, password: &str) {
        match self.provider.create_user(email, password).await {
            Ok(Some(user)) => self.adopt(user),
            Ok(None) => {
                log::error!("Account creation for {} returned no user", email);
                self.message = Some(Message::error(ERROR_ACCOUNT_CREATE_FAILED));
            }
            Err(e) => {
                log::error!("Account creation for {} failed: {}", email, e);
                self.message = Some(Message::error(ERROR_ACCOUNT_CREATE_FAILED));
            }
        }
    }

    pub async fn logout(&mut self) {
        match self.provider.sign_out().await {
            Ok(()) => {
                self.token = None;
                self.state.is_authenticated = false;
                self.state.uid = None;
                log::info!("Logged out");
            }
            Err(e) => {
                log::warn!("Logout failed: {}", e);
                self.message = Some(Message::error(ERROR_LOGOUT_FAILED));
            }
        }
    }

    fn adopt(&mut self, user: AuthUser) {
        log::info!("Signed in as {} ({})", user.email, user.uid);
        self.token = Some(user.id_token);
        self.state.is_authenticated = true;
        self.state.uid = Some(user.uid);
    }
}
