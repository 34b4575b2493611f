//! Provider-neutral contact types.
//!
//! These types represent address-book records in a provider-agnostic way.
//! Providers convert their API responses into these types, and rolodir
//! front-ends work exclusively with them.

use serde::{Deserialize, Serialize};

/// A contact record (provider-neutral)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Provider-assigned identifier. `None` until the contact has been
    /// created on a remote store.
    pub id: Option<String>,

    // Name fields
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// Listing name ("file as"). Kept in sync with `full_name`; some
    /// consumers (notably Outlook-style address books) require it.
    pub file_as: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<String>,

    /// Free-text notes, in order.
    pub notes: Vec<String>,

    // Categorized collections
    pub emails: Emails,
    pub phones: Phones,
    pub faxes: Faxes,
    pub websites: Websites,

    pub organization: Organization,

    /// Free-text postal address placeholder.
    pub postal: Option<String>,

    // Dates are carried verbatim: the vendor allows year-less values
    // like "--03-20", which no calendar date type can hold.
    pub birthday: Option<String>,
    pub anniversary: Option<String>,

    /// Identifier of the group this contact belongs to.
    pub group_id: Option<String>,

    /// Extensible custom-property area (not mapped to any wire format yet)
    pub custom_properties: Vec<(String, String)>,
}

impl Contact {
    /// Set the display name, keeping the "file as" listing name in sync.
    pub fn set_full_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.file_as = Some(name.clone());
        self.full_name = Some(name);
    }
}

/// Email address category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    Home,
    Work,
    Other,
}

/// Phone number category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    Home,
    Work,
    Other,
    Mobile,
}

/// Fax number category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaxKind {
    Home,
    Work,
}

/// Website category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteKind {
    Home,
    Work,
}

/// Categorized email addresses.
///
/// The designated primary carries the category it lives in, so a value
/// that happens to appear in two categories still names a single item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emails {
    pub home: Vec<String>,
    pub work: Vec<String>,
    pub other: Vec<String>,
    pub primary: Option<(EmailKind, String)>,
}

impl Emails {
    pub fn add(&mut self, kind: EmailKind, address: impl Into<String>) {
        let address = address.into();
        match kind {
            EmailKind::Home => self.home.push(address),
            EmailKind::Work => self.work.push(address),
            EmailKind::Other => self.other.push(address),
        }
    }

    pub fn set_primary(&mut self, kind: EmailKind, address: impl Into<String>) {
        self.primary = Some((kind, address.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.work.is_empty() && self.other.is_empty()
    }
}

/// Categorized phone numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phones {
    pub home: Vec<String>,
    pub work: Vec<String>,
    pub other: Vec<String>,
    pub mobile: Vec<String>,
    pub primary: Option<(PhoneKind, String)>,
}

impl Phones {
    pub fn add(&mut self, kind: PhoneKind, number: impl Into<String>) {
        let number = number.into();
        match kind {
            PhoneKind::Home => self.home.push(number),
            PhoneKind::Work => self.work.push(number),
            PhoneKind::Other => self.other.push(number),
            PhoneKind::Mobile => self.mobile.push(number),
        }
    }

    pub fn set_primary(&mut self, kind: PhoneKind, number: impl Into<String>) {
        self.primary = Some((kind, number.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.work.is_empty() && self.other.is_empty() && self.mobile.is_empty()
    }
}

/// Categorized fax numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faxes {
    pub home: Vec<String>,
    pub work: Vec<String>,
    pub primary: Option<(FaxKind, String)>,
}

impl Faxes {
    pub fn add(&mut self, kind: FaxKind, number: impl Into<String>) {
        let number = number.into();
        match kind {
            FaxKind::Home => self.home.push(number),
            FaxKind::Work => self.work.push(number),
        }
    }

    pub fn set_primary(&mut self, kind: FaxKind, number: impl Into<String>) {
        self.primary = Some((kind, number.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.work.is_empty()
    }
}

/// Categorized websites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Websites {
    pub home: Vec<String>,
    pub work: Vec<String>,
    pub primary: Option<(WebsiteKind, String)>,
}

impl Websites {
    pub fn add(&mut self, kind: WebsiteKind, url: impl Into<String>) {
        let url = url.into();
        match kind {
            WebsiteKind::Home => self.home.push(url),
            WebsiteKind::Work => self.work.push(url),
        }
    }

    pub fn set_primary(&mut self, kind: WebsiteKind, url: impl Into<String>) {
        self.primary = Some((kind, url.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.work.is_empty()
    }
}

/// Organization details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub company: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
}

impl Organization {
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.title.is_none() && self.department.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_full_name_keeps_file_as_in_sync() {
        let mut contact = Contact::default();
        contact.set_full_name("Nora Quist");

        assert_eq!(contact.full_name.as_deref(), Some("Nora Quist"));
        assert_eq!(
            contact.file_as.as_deref(),
            Some("Nora Quist"),
            "file_as should track full_name"
        );
    }

    #[test]
    fn test_categorized_add_lands_in_the_right_collection() {
        let mut phones = Phones::default();
        phones.add(PhoneKind::Mobile, "+46 70 123 45 67");
        phones.add(PhoneKind::Home, "+46 8 765 43 21");

        assert_eq!(phones.mobile, vec!["+46 70 123 45 67"]);
        assert_eq!(phones.home, vec!["+46 8 765 43 21"]);
        assert!(phones.work.is_empty());
        assert!(!phones.is_empty());
    }

    #[test]
    fn test_primary_carries_its_category() {
        let mut emails = Emails::default();
        emails.add(EmailKind::Home, "nora@example.com");
        emails.add(EmailKind::Work, "nora@example.com");
        emails.set_primary(EmailKind::Work, "nora@example.com");

        let (kind, value) = emails.primary.expect("primary should be set");
        assert_eq!(kind, EmailKind::Work);
        assert_eq!(value, "nora@example.com");
    }

    #[test]
    fn test_fresh_contact_has_no_populated_groups() {
        let contact = Contact::default();

        assert!(contact.emails.is_empty());
        assert!(contact.phones.is_empty());
        assert!(contact.faxes.is_empty());
        assert!(contact.websites.is_empty());
        assert!(contact.organization.is_empty());
        assert!(contact.notes.is_empty());
        assert!(contact.id.is_none());
    }
}
