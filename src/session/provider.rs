//! Identity provider abstraction.
//!
//! The session layer talks to whatever service authenticates users through
//! this trait, the same way the rest of the app would talk to a remote API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors an identity provider can report.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Account already exists: {0}")]
    AccountExists(String),

    #[error("Invalid account data: {0}")]
    InvalidData(String),

    #[error("Not signed in")]
    NotSignedIn,
}

/// A signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

/// Operations the session needs from an identity service.
///
/// `sign_in` and `create_user` return `Ok(None)` when the provider accepted
/// the request but produced no user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the provider type identifier (e.g., "memory").
    fn provider_type(&self) -> &str;

    /// The user the provider currently considers signed in, if any.
    async fn current_user(&self) -> Result<Option<AuthUser>, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Option<AuthUser>, IdentityError>;
    async fn create_user(&self, email: &str, password: &str) -> Result<Option<AuthUser>, IdentityError>;
    async fn sign_out(&self) -> Result<(), IdentityError>;
}
