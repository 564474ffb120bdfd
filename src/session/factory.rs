//! Identity provider factory for creating providers from configuration.

use anyhow::{anyhow, Result};
use serde_json::Value;

use super::memory::{AccountSeed, MemoryIdentityProvider};
use super::provider::IdentityProvider;

/// Provider types this build knows how to create.
pub const SUPPORTED_PROVIDERS: &[&str] = &["memory"];

/// Create an identity provider from its type and credentials.
///
/// # Arguments
/// * `provider_type` - The type of provider (e.g., "memory")
/// * `credentials` - JSON-encoded credentials string
///
/// # Errors
/// Returns error if:
/// - Provider type is unknown
/// - Credentials are invalid JSON
/// - Seeded accounts are malformed
pub fn create_identity_provider(provider_type: &str, credentials: &str) -> Result<Box<dyn IdentityProvider>> {
    let creds: Value = if credentials.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(credentials).map_err(|e| anyhow!("Failed to parse credentials JSON: {}", e))?
    };

    match provider_type {
        "memory" => {
            let seeds: Vec<AccountSeed> = match creds.get("accounts") {
                Some(accounts) => serde_json::from_value(accounts.clone())
                    .map_err(|e| anyhow!("Invalid 'accounts' in memory credentials: {}", e))?,
                None => Vec::new(),
            };
            log::info!("Creating memory identity provider with {} seeded account(s)", seeds.len());
            Ok(Box::new(MemoryIdentityProvider::with_accounts(seeds)?))
        }
        _ => Err(anyhow!("Unknown identity provider type: {}", provider_type)),
    }
}
