//! rolodir-provider-google - Google Contacts provider for rolodir
//!
//! This binary implements the rolodir provider protocol, communicating
//! with the front-end via JSON over stdin/stdout.
//!
//! The provider manages its own credentials and tokens:
//!   ~/.config/rolodir/providers/google/credentials.json
//!   ~/.config/rolodir/providers/google/tokens/{account}.json

mod config;
mod entry;
mod google;
mod google_contact;
mod types;

use rolodir_core::protocol::{
    Command, CreateContact, ListContacts, ListGroups, Request, Response, UpdateContact,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout carries protocol JSON; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("failed to read stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(stdout, "{}", response).unwrap();
                stdout.flush().unwrap();
                continue;
            }
        };

        let response = handle_request(request).await;

        writeln!(stdout, "{}", response).unwrap();
        stdout.flush().unwrap();
    }
}

async fn handle_request(request: Request) -> String {
    match request.command {
        Command::Authenticate => handle_authenticate().await,
        Command::ListGroups => handle_list_groups(&request.params).await,
        Command::ListContacts => handle_list_contacts(&request.params).await,
        Command::CreateContact => handle_create_contact(&request.params).await,
        Command::UpdateContact => handle_update_contact(&request.params).await,
    }
}

async fn handle_authenticate() -> String {
    match google::auth::authenticate().await {
        Ok(account) => Response::success(account),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

async fn handle_list_groups(params: &serde_json::Value) -> String {
    let params: ListGroups = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match google::api::fetch_groups(&params.account).await {
        Ok(groups) => Response::success(groups),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

async fn handle_list_contacts(params: &serde_json::Value) -> String {
    let params: ListContacts = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match google::api::fetch_contacts(&params.account, params.group_id.as_deref()).await {
        Ok(contacts) => Response::success(contacts),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

async fn handle_create_contact(params: &serde_json::Value) -> String {
    let params: CreateContact = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match google::api::create_contact(
        &params.account,
        params.group_id.as_deref(),
        &params.contact,
    )
    .await
    {
        Ok(contact) => Response::success(contact),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

async fn handle_update_contact(params: &serde_json::Value) -> String {
    let params: UpdateContact = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match google::api::update_contact(&params.account, &params.contact).await {
        Ok(contact) => Response::success(contact),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}
