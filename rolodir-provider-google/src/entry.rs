//! Wire types for Google contact entries.
//!
//! These mirror the shape of the vendor's contact and group feeds but are
//! defined locally to keep the provider self-contained. Items carry a
//! relation tag (`rel`) naming their category and a `primary` marker;
//! field groups with no values are omitted from the serialized entry
//! entirely rather than sent as empty placeholders.

use serde::{Deserialize, Serialize};

// Relation tags used by the contacts feed.
pub const REL_HOME: &str = "home";
pub const REL_WORK: &str = "work";
pub const REL_OTHER: &str = "other";
pub const REL_MOBILE: &str = "mobile";
pub const REL_HOME_FAX: &str = "home-fax";
pub const REL_WORK_FAX: &str = "work-fax";
/// Websites use their own home tag.
pub const REL_HOME_PAGE: &str = "home-page";
/// Tag on the generic event list marking an anniversary.
pub const REL_ANNIVERSARY: &str = "anniversary";

fn is_false(v: &bool) -> bool {
    !v
}

/// A contact entry as the feed represents it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<EntryName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Free-text notes body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<EntryEmail>,
    /// Phone and fax numbers share one list, told apart by `rel`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<EntryPhone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<EntryOrganization>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postal_addresses: Vec<EntryPostalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Generic dated events (anniversary and the like).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EntryEvent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub websites: Vec<EntryWebsite>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ims: Vec<EntryIm>,

    /// User-defined key/value fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_defined: Vec<EntryUserDefined>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_memberships: Vec<EntryGroupMembership>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl EntryName {
    pub fn is_empty(&self) -> bool {
        self.given_name.is_none()
            && self.family_name.is_none()
            && self.full_name.is_none()
            && self.prefix.is_none()
            && self.suffix.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryEmail {
    pub address: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPhone {
    pub value: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryOrganization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub rel: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPostalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub rel: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryEvent {
    pub rel: String,
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryWebsite {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryIm {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub rel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryUserDefined {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryGroupMembership {
    pub href: String,
}

/// A contact group entry from the groups feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Set for provider-defined groups like "My Contacts".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_serializes_to_nothing() {
        let value = serde_json::to_value(ContactEntry::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({}),
            "empty field groups must be omitted, not sent as empty placeholders"
        );
    }

    #[test]
    fn test_false_primary_marker_is_omitted() {
        let email = EntryEmail {
            address: "nora@example.com".to_string(),
            rel: REL_HOME.to_string(),
            primary: false,
        };
        let value = serde_json::to_value(&email).unwrap();
        assert!(value.get("primary").is_none());

        let back: EntryEmail = serde_json::from_value(value).unwrap();
        assert!(!back.primary);
    }

    #[test]
    fn test_unknown_groups_still_deserialize() {
        let json = serde_json::json!({
            "id": "https://contacts.example/feed/base/1",
            "ims": [{"address": "nora@chat.example", "rel": "home"}],
            "postal_addresses": [{"street": "Main St 1", "rel": "home"}]
        });
        let entry: ContactEntry = serde_json::from_value(json).unwrap();

        assert_eq!(entry.ims.len(), 1);
        assert_eq!(entry.postal_addresses.len(), 1);
        assert_eq!(entry.postal_addresses[0].street.as_deref(), Some("Main St 1"));
    }
}
