//! In-process identity provider.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::provider::{AuthUser, IdentityError, IdentityProvider};

/// Minimum password length accepted when creating an account.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account seed as it appears in the provider credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    accounts: HashMap<String, Account>,
    signed_in: Option<AuthUser>,
}

/// Keeps accounts in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    state: Mutex<MemoryState>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider that already knows `seeds`. Invalid seeds are rejected.
    pub fn with_accounts(seeds: Vec<AccountSeed>) -> Result<Self, IdentityError> {
        let mut accounts = HashMap::new();
        for seed in seeds {
            validate_credentials(&seed.email, &seed.password)?;
            let email = normalize_email(&seed.email);
            if accounts.contains_key(&email) {
                return Err(IdentityError::AccountExists(email));
            }
            accounts.insert(
                email,
                Account {
                    uid: Uuid::new_v4().to_string(),
                    password: seed.password,
                },
            );
        }

        Ok(Self {
            state: Mutex::new(MemoryState {
                accounts,
                signed_in: None,
            }),
        })
    }

    pub async fn account_count(&self) -> usize {
        self.state.lock().await.accounts.len()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, IdentityError> {
        Ok(self.state.lock().await.signed_in.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Option<AuthUser>, IdentityError> {
        let email = normalize_email(email);
        let mut state = self.state.lock().await;

        let uid = match state.accounts.get(&email) {
            Some(account) if account.password == password => account.uid.clone(),
            _ => return Err(IdentityError::InvalidCredentials(email)),
        };

        let user = issue_token(uid, email);
        state.signed_in = Some(user.clone());
        Ok(Some(user))
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<Option<AuthUser>, IdentityError> {
        validate_credentials(email, password)?;
        let email = normalize_email(email);
        let mut state = self.state.lock().await;

        if state.accounts.contains_key(&email) {
            return Err(IdentityError::AccountExists(email));
        }

        let uid = Uuid::new_v4().to_string();
        state.accounts.insert(
            email.clone(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );

        let user = issue_token(uid, email);
        state.signed_in = Some(user.clone());
        Ok(Some(user))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let mut state = self.state.lock().await;
        if state.signed_in.take().is_none() {
            return Err(IdentityError::NotSignedIn);
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_credentials(email: &str, password: &str) -> Result<(), IdentityError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(IdentityError::InvalidData(format!("malformed email '{}'", email)));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(IdentityError::InvalidData(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn issue_token(uid: String, email: String) -> AuthUser {
    AuthUser {
        uid,
        email,
        id_token: Uuid::new_v4().simple().to_string(),
    }
}
