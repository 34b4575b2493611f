use rolodir_core::contact::{Contact, EmailKind, FaxKind, PhoneKind, WebsiteKind};
use tracing::warn;

use crate::entry::{
    ContactEntry, REL_ANNIVERSARY, REL_HOME, REL_HOME_FAX, REL_HOME_PAGE, REL_MOBILE, REL_OTHER,
    REL_WORK, REL_WORK_FAX,
};
use crate::google_contact::UnsupportedGroup;

/// Result of hydrating a [`Contact`] from a wire entry.
#[derive(Debug, Clone)]
pub struct Import {
    pub contact: Contact,
    /// Field groups present on the wire that were not carried over.
    pub skipped: Vec<UnsupportedGroup>,
}

pub trait FromGoogle {
    fn from_google(entry: &ContactEntry) -> Import;
}

impl FromGoogle for Contact {
    fn from_google(entry: &ContactEntry) -> Import {
        let mut contact = Contact::default();

        contact.id = entry.id.clone();

        import_names(&mut contact, entry);
        import_notes(&mut contact, entry);
        import_emails(&mut contact, entry);
        import_organization(&mut contact, entry);
        import_phones_and_faxes(&mut contact, entry);
        import_dates(&mut contact, entry);
        import_websites(&mut contact, entry);
        import_group(&mut contact, entry);

        let mut skipped = Vec::new();
        if !entry.postal_addresses.is_empty() {
            skipped.push(UnsupportedGroup::PostalAddress);
        }
        if !entry.ims.is_empty() {
            skipped.push(UnsupportedGroup::InstantMessenger);
        }
        if !entry.user_defined.is_empty() {
            skipped.push(UnsupportedGroup::CustomProperties);
        }
        for group in &skipped {
            warn!(
                group = group.as_str(),
                "wire field group not supported yet; skipping"
            );
        }

        Import { contact, skipped }
    }
}

fn import_names(contact: &mut Contact, entry: &ContactEntry) {
    if let Some(ref name) = entry.name {
        contact.first_name = name.given_name.clone();
        contact.last_name = name.family_name.clone();
        if let Some(ref full) = name.full_name {
            // Also populates file_as, which some consumers require.
            contact.set_full_name(full.clone());
        }
        contact.prefix = name.prefix.clone();
        contact.suffix = name.suffix.clone();
    }

    contact.nickname = entry.nickname.clone();
    contact.gender = entry.gender.clone();
}

fn import_notes(contact: &mut Contact, entry: &ContactEntry) {
    if let Some(ref content) = entry.content {
        if !content.is_empty() {
            contact.notes.push(content.clone());
        }
    }
}

fn import_emails(contact: &mut Contact, entry: &ContactEntry) {
    for email in &entry.emails {
        if email.address.is_empty() {
            continue;
        }

        let kind = match email.rel.as_str() {
            REL_HOME => EmailKind::Home,
            REL_WORK => EmailKind::Work,
            REL_OTHER => EmailKind::Other,
            _ => continue,
        };

        contact.emails.add(kind, email.address.clone());
        if email.primary {
            contact.emails.set_primary(kind, email.address.clone());
        }
    }
}

fn import_organization(contact: &mut Contact, entry: &ContactEntry) {
    if let Some(ref org) = entry.organization {
        contact.organization.company = org.name.clone();
        contact.organization.title = org.title.clone();
        contact.organization.department = org.department.clone();
    }
}

fn import_phones_and_faxes(contact: &mut Contact, entry: &ContactEntry) {
    for phone in &entry.phones {
        if phone.value.is_empty() {
            continue;
        }

        let phone_kind = match phone.rel.as_str() {
            REL_HOME => Some(PhoneKind::Home),
            REL_WORK => Some(PhoneKind::Work),
            REL_OTHER => Some(PhoneKind::Other),
            REL_MOBILE => Some(PhoneKind::Mobile),
            _ => None,
        };

        if let Some(kind) = phone_kind {
            contact.phones.add(kind, phone.value.clone());
            if phone.primary {
                contact.phones.set_primary(kind, phone.value.clone());
            }
            continue;
        }

        let fax_kind = match phone.rel.as_str() {
            REL_HOME_FAX => FaxKind::Home,
            REL_WORK_FAX => FaxKind::Work,
            _ => continue,
        };

        contact.faxes.add(fax_kind, phone.value.clone());
        if phone.primary {
            contact.faxes.set_primary(fax_kind, phone.value.clone());
        }
    }
}

fn import_dates(contact: &mut Contact, entry: &ContactEntry) {
    contact.birthday = entry.birthday.clone();

    // Anniversaries hide in the generic event list.
    contact.anniversary = entry
        .events
        .iter()
        .find(|event| event.rel == REL_ANNIVERSARY)
        .map(|event| event.start.clone());
}

fn import_websites(contact: &mut Contact, entry: &ContactEntry) {
    for site in &entry.websites {
        if site.href.is_empty() {
            continue;
        }

        let kind = match site.rel.as_str() {
            REL_HOME_PAGE => WebsiteKind::Home,
            REL_WORK => WebsiteKind::Work,
            _ => continue,
        };

        contact.websites.add(kind, site.href.clone());
        if site.primary {
            contact.websites.set_primary(kind, site.href.clone());
        }
    }
}

fn import_group(contact: &mut Contact, entry: &ContactEntry) {
    // Only the first membership survives; multi-group contacts lose the rest.
    contact.group_id = entry.group_memberships.first().map(|m| m.href.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{
        EntryEmail, EntryEvent, EntryGroupMembership, EntryIm, EntryName, EntryOrganization,
        EntryPhone, EntryPostalAddress, EntryUserDefined, EntryWebsite,
    };

    fn entry_with_names() -> ContactEntry {
        ContactEntry {
            id: Some("https://contacts.example/feed/base/77".to_string()),
            name: Some(EntryName {
                given_name: Some("Nora".to_string()),
                family_name: Some("Quist".to_string()),
                full_name: Some("Nora Quist".to_string()),
                prefix: Some("Dr".to_string()),
                suffix: None,
            }),
            nickname: Some("Q".to_string()),
            gender: Some("female".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_import_names_and_gender() {
        let Import { contact, skipped } = Contact::from_google(&entry_with_names());

        assert!(skipped.is_empty());
        assert_eq!(contact.id.as_deref(), Some("https://contacts.example/feed/base/77"));
        assert_eq!(contact.first_name.as_deref(), Some("Nora"));
        assert_eq!(contact.last_name.as_deref(), Some("Quist"));
        assert_eq!(contact.full_name.as_deref(), Some("Nora Quist"));
        assert_eq!(
            contact.file_as.as_deref(),
            Some("Nora Quist"),
            "full name should also populate file_as"
        );
        assert_eq!(contact.prefix.as_deref(), Some("Dr"));
        assert!(contact.suffix.is_none());
        assert_eq!(contact.nickname.as_deref(), Some("Q"));
        assert_eq!(contact.gender.as_deref(), Some("female"));
    }

    #[test]
    fn test_import_branches_emails_on_relation_tag() {
        let mut entry = ContactEntry::default();
        entry.emails = vec![
            EntryEmail {
                address: "nora@home.example".to_string(),
                rel: REL_HOME.to_string(),
                primary: false,
            },
            EntryEmail {
                address: "nq@corp.example".to_string(),
                rel: REL_WORK.to_string(),
                primary: true,
            },
            EntryEmail {
                address: "misc@other.example".to_string(),
                rel: REL_OTHER.to_string(),
                primary: false,
            },
        ];

        let contact = Contact::from_google(&entry).contact;

        assert_eq!(contact.emails.home, vec!["nora@home.example"]);
        assert_eq!(contact.emails.work, vec!["nq@corp.example"]);
        assert_eq!(contact.emails.other, vec!["misc@other.example"]);
        assert_eq!(
            contact.emails.primary,
            Some((EmailKind::Work, "nq@corp.example".to_string()))
        );
    }

    #[test]
    fn test_import_splits_faxes_out_of_the_phone_list() {
        let mut entry = ContactEntry::default();
        entry.phones = vec![
            EntryPhone {
                value: "+46 70 123 45 67".to_string(),
                rel: REL_MOBILE.to_string(),
                primary: true,
            },
            EntryPhone {
                value: "+46 8 555 01 00".to_string(),
                rel: REL_WORK_FAX.to_string(),
                primary: true,
            },
            EntryPhone {
                value: String::new(),
                rel: REL_HOME.to_string(),
                primary: false,
            },
        ];

        let contact = Contact::from_google(&entry).contact;

        assert_eq!(contact.phones.mobile, vec!["+46 70 123 45 67"]);
        assert!(contact.phones.home.is_empty(), "empty values are dropped");
        assert_eq!(contact.faxes.work, vec!["+46 8 555 01 00"]);
        assert_eq!(
            contact.phones.primary,
            Some((PhoneKind::Mobile, "+46 70 123 45 67".to_string())),
            "a primary phone lands on the phone group"
        );
        assert_eq!(
            contact.faxes.primary,
            Some((FaxKind::Work, "+46 8 555 01 00".to_string())),
            "a primary fax lands on the fax group"
        );
    }

    #[test]
    fn test_import_finds_anniversary_in_event_list() {
        let mut entry = ContactEntry::default();
        entry.birthday = Some("1984-03-20".to_string());
        entry.events = vec![
            EntryEvent {
                rel: "graduation".to_string(),
                start: "2006-06-10".to_string(),
            },
            EntryEvent {
                rel: REL_ANNIVERSARY.to_string(),
                start: "2010-09-01".to_string(),
            },
        ];

        let contact = Contact::from_google(&entry).contact;

        assert_eq!(contact.birthday.as_deref(), Some("1984-03-20"));
        assert_eq!(contact.anniversary.as_deref(), Some("2010-09-01"));
    }

    #[test]
    fn test_import_websites_and_group() {
        let mut entry = ContactEntry::default();
        entry.websites = vec![
            EntryWebsite {
                href: "https://nora.example".to_string(),
                rel: REL_HOME_PAGE.to_string(),
                primary: true,
            },
            EntryWebsite {
                href: "https://corp.example/~nq".to_string(),
                rel: REL_WORK.to_string(),
                primary: false,
            },
        ];
        entry.group_memberships = vec![EntryGroupMembership {
            href: "https://contacts.example/groups/base/42".to_string(),
        }];

        let contact = Contact::from_google(&entry).contact;

        assert_eq!(contact.websites.home, vec!["https://nora.example"]);
        assert_eq!(contact.websites.work, vec!["https://corp.example/~nq"]);
        assert_eq!(
            contact.websites.primary,
            Some((WebsiteKind::Home, "https://nora.example".to_string()))
        );
        assert_eq!(
            contact.group_id.as_deref(),
            Some("https://contacts.example/groups/base/42")
        );
    }

    #[test]
    fn test_import_organization() {
        let mut entry = ContactEntry::default();
        entry.organization = Some(EntryOrganization {
            name: Some("Quist Labs".to_string()),
            title: None,
            department: Some("R&D".to_string()),
            rel: REL_WORK.to_string(),
            primary: true,
        });

        let contact = Contact::from_google(&entry).contact;

        assert_eq!(contact.organization.company.as_deref(), Some("Quist Labs"));
        assert!(contact.organization.title.is_none());
        assert_eq!(contact.organization.department.as_deref(), Some("R&D"));
    }

    #[test]
    fn test_import_flags_postal_addresses_as_unsupported() {
        let mut entry = entry_with_names();
        entry.postal_addresses = vec![EntryPostalAddress {
            street: Some("Main St 1".to_string()),
            formatted: None,
            rel: REL_HOME.to_string(),
            primary: true,
        }];

        let import = Contact::from_google(&entry);

        assert_eq!(
            import.skipped,
            vec![UnsupportedGroup::PostalAddress],
            "postal data must be reported, not silently dropped"
        );
        assert!(import.contact.postal.is_none());
    }

    #[test]
    fn test_import_flags_ims_and_user_defined_as_unsupported() {
        let mut entry = ContactEntry::default();
        entry.ims = vec![EntryIm {
            address: "nora@chat.example".to_string(),
            protocol: Some("xmpp".to_string()),
            rel: REL_HOME.to_string(),
        }];
        entry.user_defined = vec![EntryUserDefined {
            key: "sync-tag".to_string(),
            value: "abc".to_string(),
        }];

        let import = Contact::from_google(&entry);

        assert!(import.skipped.contains(&UnsupportedGroup::InstantMessenger));
        assert!(import.skipped.contains(&UnsupportedGroup::CustomProperties));
    }

    #[test]
    fn test_import_of_empty_entry_matches_fresh_contact() {
        let import = Contact::from_google(&ContactEntry::default());

        assert!(import.skipped.is_empty());
        assert_eq!(
            import.contact,
            Contact::default(),
            "an entry with no data must be indistinguishable from a fresh record"
        );
    }
}
