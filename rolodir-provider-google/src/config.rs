//! Credential and token storage for the Google provider.
//!
//! Files live under:
//!   ~/.config/rolodir/providers/google/credentials.json
//!   ~/.config/rolodir/providers/google/tokens/{account}.json

use crate::types::{AccountTokens, GoogleCredentials};
use anyhow::{Context, Result};
use std::path::PathBuf;

fn base_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Could not determine config directory")?
        .join("rolodir")
        .join("providers")
        .join("google"))
}

pub fn load_credentials() -> Result<GoogleCredentials> {
    let path = base_dir()?.join("credentials.json");

    if !path.exists() {
        anyhow::bail!(
            "Google credentials not found.\n\n\
            Create {} with:\n\n\
            {{\n  \
              \"client_id\": \"your-client-id.apps.googleusercontent.com\",\n  \
              \"client_secret\": \"your-client-secret\"\n\
            }}\n\n\
            See https://console.cloud.google.com/apis/credentials for setup.",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

    let creds: GoogleCredentials = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse credentials from {}", path.display()))?;

    Ok(creds)
}

fn token_path(account: &str) -> Result<PathBuf> {
    let safe_account = account.replace(['/', '\\', ':'], "_");
    Ok(base_dir()?
        .join("tokens")
        .join(format!("{}.json", safe_account)))
}

pub fn load_tokens(account: &str) -> Result<AccountTokens> {
    let path = token_path(account)?;

    if !path.exists() {
        anyhow::bail!(
            "No tokens for account: {}\n\
            Run the authenticate command first.",
            account
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read tokens from {}", path.display()))?;

    let tokens: AccountTokens = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse tokens from {}", path.display()))?;

    Ok(tokens)
}

pub fn save_tokens(account: &str, tokens: &AccountTokens) -> Result<()> {
    let path = token_path(account)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create tokens directory at {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(tokens).context("Failed to serialize tokens")?;

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write tokens to {}", path.display()))?;

    // Owner-only (0600) since the file contains OAuth tokens:
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

/// Whether the access token is expired (or about to be).
pub fn tokens_need_refresh(tokens: &AccountTokens) -> bool {
    match tokens.expires_at {
        Some(expires_at) => chrono::Utc::now() + chrono::Duration::seconds(60) >= expires_at,
        None => false,
    }
}
