//! Save contract against the remote contact store.

use anyhow::Result;
use async_trait::async_trait;
use rolodir_core::contact::Contact;
use rolodir_core::error::{RolodirError, RolodirResult};
use tracing::debug;

use crate::entry::ContactEntry;
use crate::google_contact::ToGoogle;

/// The slice of the remote store that saving consumes.
#[async_trait]
pub trait EntryStore {
    /// Create the entry on the remote store. Returns the confirmed entry
    /// (carrying the store-assigned identifier) if the store produced one.
    async fn create(&self, entry: &ContactEntry) -> Result<Option<ContactEntry>>;
}

/// Export `contact` and create it on the store.
///
/// On success the store-assigned identifier is written back into the
/// record and returned. A create that comes back without a confirmed
/// identifier is a save failure and leaves the record unchanged.
pub async fn save<S: EntryStore + ?Sized>(
    contact: &mut Contact,
    store: &S,
) -> RolodirResult<String> {
    let mut entry = contact.to_google().entry;
    entry.id = None; // the store assigns the identifier

    let created = store
        .create(&entry)
        .await
        .map_err(|e| RolodirError::Provider(format!("{e:#}")))?;

    match created.and_then(|e| e.id) {
        Some(id) => {
            debug!(id = %id, "contact created");
            contact.id = Some(id.clone());
            Ok(id)
        }
        None => Err(RolodirError::Save(
            "create returned no confirmed identifier".to_string(),
        )),
    }
}

/// Updating an existing contact takes a different feed protocol than
/// create and is not wired up yet.
pub async fn update<S: EntryStore + ?Sized>(
    _contact: &Contact,
    _store: &S,
) -> RolodirResult<Contact> {
    Err(RolodirError::Unsupported("updating an existing contact"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoStore {
        id: &'static str,
    }

    #[async_trait]
    impl EntryStore for EchoStore {
        async fn create(&self, entry: &ContactEntry) -> Result<Option<ContactEntry>> {
            let mut created = entry.clone();
            created.id = Some(self.id.to_string());
            Ok(Some(created))
        }
    }

    struct UnconfirmedStore;

    #[async_trait]
    impl EntryStore for UnconfirmedStore {
        async fn create(&self, _entry: &ContactEntry) -> Result<Option<ContactEntry>> {
            Ok(None)
        }
    }

    fn make_test_contact() -> Contact {
        let mut contact = Contact::default();
        contact.first_name = Some("Nora".to_string());
        contact.last_name = Some("Quist".to_string());
        contact.set_full_name("Nora Quist");
        contact
    }

    #[tokio::test]
    async fn test_save_updates_record_identity_from_confirmation() {
        let mut contact = make_test_contact();
        let store = EchoStore {
            id: "https://contacts.example/feed/base/8d2f",
        };

        let id = save(&mut contact, &store).await.expect("save should succeed");

        assert_eq!(id, "https://contacts.example/feed/base/8d2f");
        assert_eq!(
            contact.id.as_deref(),
            Some("https://contacts.example/feed/base/8d2f"),
            "record identity should match the confirmation"
        );
    }

    #[tokio::test]
    async fn test_save_discards_any_preexisting_identifier() {
        let mut contact = make_test_contact();
        contact.id = Some("stale-id".to_string());

        struct AssertNoId;

        #[async_trait]
        impl EntryStore for AssertNoId {
            async fn create(&self, entry: &ContactEntry) -> Result<Option<ContactEntry>> {
                assert!(entry.id.is_none(), "create must let the store assign the id");
                let mut created = entry.clone();
                created.id = Some("fresh-id".to_string());
                Ok(Some(created))
            }
        }

        let id = save(&mut contact, &AssertNoId).await.unwrap();
        assert_eq!(id, "fresh-id");
    }

    #[tokio::test]
    async fn test_save_without_confirmation_is_a_failure() {
        let mut contact = make_test_contact();

        let err = save(&mut contact, &UnconfirmedStore)
            .await
            .expect_err("save should fail");

        assert!(
            matches!(err, RolodirError::Save(_)),
            "expected a save failure, got {err:?}"
        );
        assert!(
            contact.id.is_none(),
            "a failed save must not touch the record identity"
        );
    }

    #[tokio::test]
    async fn test_update_is_unsupported() {
        let contact = make_test_contact();

        let err = update(&contact, &UnconfirmedStore)
            .await
            .expect_err("update should be rejected");

        assert!(matches!(err, RolodirError::Unsupported(_)));
    }
}
