//! OAuth flow for the Google contacts feed.
//!
//! Authentication opens the consent page in a browser, receives the
//! authorization code on a localhost listener, and exchanges it for
//! tokens at the token endpoint. Tokens are stored per account by
//! [`crate::config`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use tracing::{debug, info};

use crate::config;
use crate::google::client::ContactsClient;
use crate::types::{AccountTokens, GoogleCredentials};

const REDIRECT_PORT: u16 = 8086;
const REDIRECT_URI: &str = "http://localhost:8086/callback";
const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SCOPE: &str = "https://www.google.com/m8/feeds";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: i64,
}

impl TokenResponse {
    fn into_tokens(self, previous_refresh_token: Option<&str>) -> AccountTokens {
        let expires_at = if self.expires_in > 0 {
            Some(chrono::Utc::now() + chrono::Duration::seconds(self.expires_in))
        } else {
            None
        };

        // Google typically doesn't return a new refresh_token on refresh
        let refresh_token = if self.refresh_token.is_empty() {
            previous_refresh_token.unwrap_or_default().to_string()
        } else {
            self.refresh_token
        };

        AccountTokens {
            access_token: self.access_token,
            refresh_token,
            expires_at,
        }
    }
}

fn consent_url(client_id: &str) -> Result<String> {
    let mut url = url::Url::parse(AUTH_URL)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", REDIRECT_URI)
        .append_pair("response_type", "code")
        .append_pair("scope", SCOPE)
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent");
    Ok(url.to_string())
}

/// Block on a localhost listener until the browser redirect delivers the
/// authorization code.
fn wait_for_callback() -> Result<String> {
    let listener = TcpListener::bind(("127.0.0.1", REDIRECT_PORT))
        .with_context(|| format!("Failed to bind to port {}", REDIRECT_PORT))?;

    info!("waiting for OAuth callback on port {}", REDIRECT_PORT);

    let (mut stream, _) = listener.accept().context("Failed to accept connection")?;

    let mut reader = BufReader::new(&stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let path = request_line
        .split_whitespace()
        .nth(1)
        .context("Invalid request")?;
    let url = url::Url::parse(&format!("http://localhost{}", path))?;

    let code = url
        .query_pairs()
        .find(|(k, _)| k == "code")
        .map(|(_, v)| v.to_string())
        .context("No code in callback")?;

    let response = "HTTP/1.1 200 OK\r\n\
        Content-Type: text/html\r\n\
        Connection: close\r\n\
        \r\n\
        <html><body>\
        <h1>Authentication successful!</h1>\
        <p>You can close this window and return to the terminal.</p>\
        </body></html>";
    stream.write_all(response.as_bytes())?;
    stream.flush()?;

    Ok(code)
}

async fn exchange_code(creds: &GoogleCredentials, code: &str) -> Result<TokenResponse> {
    let http = reqwest::Client::new();

    let response = http
        .post(TOKEN_URL)
        .form(&[
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", REDIRECT_URI),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .context("Failed to send token request")?;

    if !response.status().is_success() {
        let error_text = response.text().await.unwrap_or_default();
        anyhow::bail!("Token exchange failed: {}", error_text);
    }

    response.json().await.context("Failed to parse token response")
}

async fn refresh_tokens(
    creds: &GoogleCredentials,
    tokens: &AccountTokens,
) -> Result<AccountTokens> {
    let http = reqwest::Client::new();

    let response = http
        .post(TOKEN_URL)
        .form(&[
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("refresh_token", tokens.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .await
        .context("Failed to send refresh request")?;

    if !response.status().is_success() {
        let error_text = response.text().await.unwrap_or_default();
        anyhow::bail!("Failed to refresh token: {}", error_text);
    }

    let refreshed: TokenResponse = response
        .json()
        .await
        .context("Failed to parse refresh response")?;

    Ok(refreshed.into_tokens(Some(&tokens.refresh_token)))
}

/// Run the full OAuth authentication flow.
/// Returns the account email/identifier.
pub async fn authenticate() -> Result<String> {
    let creds = config::load_credentials()?;

    let auth_url = consent_url(&creds.client_id)?;
    eprintln!("\nOpen this URL in your browser to authenticate:\n");
    eprintln!("{}\n", auth_url);

    if open::that(&auth_url).is_err() {
        eprintln!("(Could not open browser automatically, please copy the URL above)");
    }

    let code = wait_for_callback()?;
    info!("received authorization code, exchanging for tokens");

    let tokens = exchange_code(&creds, &code).await?.into_tokens(None);

    // Discover the account's email from the feed author
    let client = ContactsClient::new(&tokens.access_token);
    let email = client
        .account_email()
        .await?
        .unwrap_or_else(|| "(unknown)".to_string());

    config::save_tokens(&email, &tokens)?;
    info!(account = %email, "authentication successful");

    Ok(email)
}

/// Get tokens for an account, refreshing if needed
pub async fn get_valid_tokens(account: &str) -> Result<AccountTokens> {
    let mut tokens = config::load_tokens(account)?;

    if config::tokens_need_refresh(&tokens) {
        debug!("access token expired, refreshing");
        let creds = config::load_credentials()?;
        tokens = refresh_tokens(&creds, &tokens).await?;
        config::save_tokens(account, &tokens)?;
    }

    Ok(tokens)
}
