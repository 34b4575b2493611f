//! Contact group types.

use serde::{Deserialize, Serialize};

/// A contact group from the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Provider-defined system group (e.g. "My Contacts") rather than a
    /// user-created one.
    pub system: bool,
}
