use rolodir_core::contact::{Contact, EmailKind, FaxKind, PhoneKind, WebsiteKind};
use tracing::warn;

use crate::entry::{
    ContactEntry, EntryEmail, EntryEvent, EntryGroupMembership, EntryName, EntryOrganization,
    EntryPhone, EntryPostalAddress, EntryWebsite, REL_ANNIVERSARY, REL_HOME, REL_HOME_FAX,
    REL_HOME_PAGE, REL_MOBILE, REL_OTHER, REL_WORK, REL_WORK_FAX,
};
use crate::google_contact::UnsupportedGroup;

/// Result of serializing a [`Contact`] to a wire entry.
#[derive(Debug, Clone)]
pub struct Export {
    pub entry: ContactEntry,
    /// Record field groups that were populated but not exported.
    pub skipped: Vec<UnsupportedGroup>,
}

pub trait ToGoogle {
    fn to_google(&self) -> Export;
}

impl ToGoogle for Contact {
    fn to_google(&self) -> Export {
        let mut entry = ContactEntry::default();

        entry.id = self.id.clone();

        export_names(self, &mut entry);
        export_notes(self, &mut entry);
        export_group_membership(self, &mut entry);
        export_emails(self, &mut entry);
        export_postal(self, &mut entry);
        export_organization(self, &mut entry);
        export_phones_and_faxes(self, &mut entry);
        export_dates(self, &mut entry);
        export_websites(self, &mut entry);

        let mut skipped = Vec::new();
        if !self.custom_properties.is_empty() {
            skipped.push(UnsupportedGroup::CustomProperties);
        }
        for group in &skipped {
            warn!(
                group = group.as_str(),
                "record field group not exported; skipping"
            );
        }

        Export { entry, skipped }
    }
}

/// Consume the designated primary if it names this category and value, so
/// at most one exported item per group carries the marker.
fn take_primary<K: PartialEq + Copy>(
    primary: &mut Option<(K, String)>,
    kind: K,
    value: &str,
) -> bool {
    let hit = primary
        .as_ref()
        .is_some_and(|(k, v)| *k == kind && v == value);
    if hit {
        *primary = None;
    }
    hit
}

fn export_names(contact: &Contact, entry: &mut ContactEntry) {
    let name = EntryName {
        given_name: contact.first_name.clone(),
        family_name: contact.last_name.clone(),
        full_name: contact.full_name.clone(),
        prefix: contact.prefix.clone(),
        suffix: contact.suffix.clone(),
    };
    if !name.is_empty() {
        entry.name = Some(name);
    }

    entry.nickname = contact.nickname.clone();
    entry.gender = contact.gender.clone();
}

fn export_notes(contact: &Contact, entry: &mut ContactEntry) {
    // Only the first note fits the single content field.
    if let Some(first) = contact.notes.first() {
        entry.content = Some(first.clone());
    }
}

fn export_group_membership(contact: &Contact, entry: &mut ContactEntry) {
    if let Some(ref group_id) = contact.group_id {
        entry.group_memberships.push(EntryGroupMembership {
            href: group_id.clone(),
        });
    }
}

fn export_emails(contact: &Contact, entry: &mut ContactEntry) {
    let mut primary = contact.emails.primary.clone();

    let categories: [(EmailKind, &str, &[String]); 3] = [
        (EmailKind::Home, REL_HOME, &contact.emails.home),
        (EmailKind::Work, REL_WORK, &contact.emails.work),
        (EmailKind::Other, REL_OTHER, &contact.emails.other),
    ];

    for (kind, rel, addresses) in categories {
        for address in addresses {
            entry.emails.push(EntryEmail {
                address: address.clone(),
                rel: rel.to_string(),
                primary: take_primary(&mut primary, kind, address),
            });
        }
    }
}

fn export_postal(contact: &Contact, entry: &mut ContactEntry) {
    // Free-text placeholder on a single home address until structured
    // addresses are mapped.
    if let Some(ref postal) = contact.postal {
        entry.postal_addresses.push(EntryPostalAddress {
            street: Some(postal.clone()),
            formatted: None,
            rel: REL_HOME.to_string(),
            primary: true,
        });
    }
}

fn export_organization(contact: &Contact, entry: &mut ContactEntry) {
    let org = &contact.organization;
    if org.is_empty() {
        return;
    }

    // Absent sub-fields are omitted rather than sent as empty values.
    entry.organization = Some(EntryOrganization {
        name: org.company.clone(),
        title: org.title.clone(),
        department: org.department.clone(),
        rel: REL_WORK.to_string(),
        primary: true,
    });
}

fn export_phones_and_faxes(contact: &Contact, entry: &mut ContactEntry) {
    let mut phone_primary = contact.phones.primary.clone();

    let phone_categories: [(PhoneKind, &str, &[String]); 4] = [
        (PhoneKind::Home, REL_HOME, &contact.phones.home),
        (PhoneKind::Work, REL_WORK, &contact.phones.work),
        (PhoneKind::Other, REL_OTHER, &contact.phones.other),
        (PhoneKind::Mobile, REL_MOBILE, &contact.phones.mobile),
    ];

    for (kind, rel, numbers) in phone_categories {
        for number in numbers {
            entry.phones.push(EntryPhone {
                value: number.clone(),
                rel: rel.to_string(),
                primary: take_primary(&mut phone_primary, kind, number),
            });
        }
    }

    // Faxes share the phone list, told apart by their relation tags.
    let mut fax_primary = contact.faxes.primary.clone();

    let fax_categories: [(FaxKind, &str, &[String]); 2] = [
        (FaxKind::Home, REL_HOME_FAX, &contact.faxes.home),
        (FaxKind::Work, REL_WORK_FAX, &contact.faxes.work),
    ];

    for (kind, rel, numbers) in fax_categories {
        for number in numbers {
            entry.phones.push(EntryPhone {
                value: number.clone(),
                rel: rel.to_string(),
                primary: take_primary(&mut fax_primary, kind, number),
            });
        }
    }
}

fn export_dates(contact: &Contact, entry: &mut ContactEntry) {
    entry.birthday = contact.birthday.clone();

    if let Some(ref anniversary) = contact.anniversary {
        entry.events.push(EntryEvent {
            rel: REL_ANNIVERSARY.to_string(),
            start: anniversary.clone(),
        });
    }
}

fn export_websites(contact: &Contact, entry: &mut ContactEntry) {
    let mut primary = contact.websites.primary.clone();

    let categories: [(WebsiteKind, &str, &[String]); 2] = [
        (WebsiteKind::Home, REL_HOME_PAGE, &contact.websites.home),
        (WebsiteKind::Work, REL_WORK, &contact.websites.work),
    ];

    for (kind, rel, urls) in categories {
        for url in urls {
            entry.websites.push(EntryWebsite {
                href: url.clone(),
                rel: rel.to_string(),
                primary: take_primary(&mut primary, kind, url),
            });
        }
    }
}
