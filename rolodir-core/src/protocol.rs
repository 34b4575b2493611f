//! Provider protocol types.
//!
//! Defines the JSON protocol used for communication between rolodir
//! front-ends and provider binaries over stdin/stdout.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::contact::Contact;
use crate::group::Group;

/// Binds a typed parameter struct to its command and response type,
/// so provider calls are checked at compile time.
pub trait ProviderCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

/// Commands that providers must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Authenticate,
    ListGroups,
    ListContacts,
    CreateContact,
    UpdateContact,
}

/// Request sent from the front-end to a provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from a provider to the front-end.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Run the provider's interactive authentication flow.
#[derive(Debug, Serialize, Deserialize)]
pub struct Authenticate;

impl ProviderCommand for Authenticate {
    type Response = String; // Account identifier (e.g., email)
    fn command() -> Command {
        Command::Authenticate
    }
}

/// List the contact groups of an authenticated account.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListGroups {
    pub account: String,
}

impl ProviderCommand for ListGroups {
    type Response = Vec<Group>;
    fn command() -> Command {
        Command::ListGroups
    }
}

/// List contacts, optionally restricted to one group.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListContacts {
    pub account: String,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl ProviderCommand for ListContacts {
    type Response = Vec<Contact>;
    fn command() -> Command {
        Command::ListContacts
    }
}

/// Create a new contact in a group.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateContact {
    pub account: String,
    #[serde(default)]
    pub group_id: Option<String>,
    pub contact: Contact,
}

impl ProviderCommand for CreateContact {
    type Response = Contact;
    fn command() -> Command {
        Command::CreateContact
    }
}

/// Update an existing contact.
///
/// No provider implements this yet; the google provider answers with an
/// unsupported-operation error rather than silently creating a duplicate.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateContact {
    pub account: String,
    pub contact: Contact,
}

impl ProviderCommand for UpdateContact {
    type Response = Contact;
    fn command() -> Command {
        Command::UpdateContact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_serialize_snake_case() {
        let json = serde_json::to_string(&Command::ListContacts).unwrap();
        assert_eq!(json, "\"list_contacts\"");

        let cmd: Command = serde_json::from_str("\"create_contact\"").unwrap();
        assert_eq!(cmd, Command::CreateContact);
    }

    #[test]
    fn test_request_params_default_to_null() {
        let request: Request = serde_json::from_str("{\"command\":\"authenticate\"}").unwrap();
        assert_eq!(request.command, Command::Authenticate);
        assert!(request.params.is_null());
    }

    #[test]
    fn test_response_envelopes() {
        let ok = Response::success(vec!["a".to_string()]);
        assert_eq!(ok, "{\"status\":\"success\",\"data\":[\"a\"]}");

        let err = Response::error("boom");
        assert_eq!(err, "{\"status\":\"error\",\"error\":\"boom\"}");
    }

    #[test]
    fn test_typed_command_round_trip() {
        let params = ListContacts {
            account: "nora@example.com".to_string(),
            group_id: Some("grp-1".to_string()),
        };
        let value = serde_json::to_value(&params).unwrap();
        let back: ListContacts = serde_json::from_value(value).unwrap();

        assert_eq!(back.account, "nora@example.com");
        assert_eq!(back.group_id.as_deref(), Some("grp-1"));
    }
}
