//! Contacts feed operations behind the provider protocol.

use anyhow::Result;
use rolodir_core::contact::Contact;
use rolodir_core::group::Group;
use tracing::debug;

use crate::google::auth::get_valid_tokens;
use crate::google::client::ContactsClient;
use crate::google_contact::{FromGoogle, save, update};

/// Fetch the list of contact groups
pub async fn fetch_groups(account: &str) -> Result<Vec<Group>> {
    let tokens = get_valid_tokens(account).await?;
    let client = ContactsClient::new(&tokens.access_token);

    let entries = client.list_groups().await?;

    Ok(entries
        .into_iter()
        .filter_map(|g| {
            let id = g.id?;
            Some(Group {
                id,
                name: if g.title.is_empty() {
                    "(unnamed)".to_string()
                } else {
                    g.title
                },
                system: g.system_group.is_some(),
            })
        })
        .collect())
}

/// Fetch contacts, optionally restricted to one group
pub async fn fetch_contacts(account: &str, group_id: Option<&str>) -> Result<Vec<Contact>> {
    let tokens = get_valid_tokens(account).await?;
    let client = ContactsClient::new(&tokens.access_token);

    let entries = client.list_contacts(group_id).await?;
    debug!(count = entries.len(), "entries received from feed");

    Ok(entries
        .iter()
        .map(|entry| Contact::from_google(entry).contact)
        .collect())
}

/// Create a new contact on the feed
pub async fn create_contact(
    account: &str,
    group_id: Option<&str>,
    contact: &Contact,
) -> Result<Contact> {
    let tokens = get_valid_tokens(account).await?;
    let client = ContactsClient::new(&tokens.access_token);

    let mut contact = contact.clone();
    if contact.group_id.is_none() {
        contact.group_id = group_id.map(|g| g.to_string());
    }

    save(&mut contact, &client).await?;

    Ok(contact)
}

/// Update an existing contact. The feed's update protocol (ETag'd PUT) is
/// not wired up, so this reports the unsupported operation instead of
/// quietly creating a duplicate.
pub async fn update_contact(account: &str, contact: &Contact) -> Result<Contact> {
    let tokens = get_valid_tokens(account).await?;
    let client = ContactsClient::new(&tokens.access_token);

    Ok(update(contact, &client).await?)
}
