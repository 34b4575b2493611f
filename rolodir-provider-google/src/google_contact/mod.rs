//! Bidirectional mapping between the provider-neutral [`Contact`] record
//! and the Google contact entry wire shape.
//!
//! The mapping is lossy and best-effort: a missing field group on either
//! side is simply skipped. Field groups the mapper recognizes but cannot
//! carry yet are surfaced through [`UnsupportedGroup`] so callers can tell
//! "no data" apart from "data we dropped".
//!
//! [`Contact`]: rolodir_core::contact::Contact

mod from_google;
mod save;
mod to_google;

pub use from_google::{FromGoogle, Import};
pub use save::{EntryStore, save, update};
pub use to_google::{Export, ToGoogle};

/// Wire field groups the mapper does not carry yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedGroup {
    /// Structured postal addresses (import side; export emits a free-text
    /// placeholder).
    PostalAddress,
    InstantMessenger,
    CustomProperties,
}

impl UnsupportedGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsupportedGroup::PostalAddress => "postal-address",
            UnsupportedGroup::InstantMessenger => "instant-messenger",
            UnsupportedGroup::CustomProperties => "custom-properties",
        }
    }
}
