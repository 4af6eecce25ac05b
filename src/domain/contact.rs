//! Contact domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact domain entity.
///
/// `id` is sequential across all owners; `owner_id` is fixed at creation
/// and is the sole tenancy boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub owner_id: u64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    /// Create a new contact owned by `owner_id`.
    pub fn new(id: u64, owner_id: u64, fields: CreateContact) -> Self {
        Self {
            id,
            owner_id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    /// Merge supplied fields into this contact.
    ///
    /// Unspecified fields keep their prior values; `id` and `owner_id`
    /// are not touched by construction.
    pub fn apply(&mut self, changes: UpdateContact) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(phone) = changes.phone {
            self.phone = Some(phone);
        }
        if let Some(email) = changes.email {
            self.email = Some(email);
        }
    }
}

/// Contact creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    /// Display name (required, non-empty)
    pub name: String,
    /// Phone number
    pub phone: Option<String>,
    /// Email address (no uniqueness constraint)
    pub email: Option<String>,
}

/// Partial contact update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    /// New display name
    pub name: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New email address
    pub email: Option<String>,
}

/// Contact response (wire representation, camelCase)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Unique contact identifier
    pub id: u64,
    /// Owning user's identifier
    pub owner_id: u64,
    /// Display name
    pub name: String,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            owner_id: contact.owner_id,
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new(
            1,
            7,
            CreateContact {
                name: "Bob".to_string(),
                phone: Some("555".to_string()),
                email: None,
            },
        )
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut contact = sample();
        contact.apply(UpdateContact {
            phone: Some("777".to_string()),
            ..UpdateContact::default()
        });

        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.phone.as_deref(), Some("777"));
        assert_eq!(contact.email, None);
    }

    #[test]
    fn apply_cannot_move_ownership() {
        let mut contact = sample();
        contact.apply(UpdateContact {
            name: Some("Robert".to_string()),
            ..UpdateContact::default()
        });

        assert_eq!(contact.id, 1);
        assert_eq!(contact.owner_id, 7);
    }

    #[test]
    fn response_uses_camel_case_owner_id() {
        let json = serde_json::to_value(ContactResponse::from(sample())).unwrap();

        assert_eq!(json["ownerId"], 7);
        assert_eq!(json["name"], "Bob");
        // Absent optional fields are omitted entirely
        assert!(json.get("email").is_none());
    }
}
