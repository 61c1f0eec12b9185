use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use crate::models::is_null;
use crate::models::receipt::InsertReceipt;

/// Account types the listing routes filter on. Stored documents may carry
/// any other `type` value; those are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
            UserRole::Admin => "admin",
        }
    }
}

/// A marketplace account, keyed by email.
///
/// Nothing is validated: `email` keeps whatever value the client sent
/// (null included) and is matched as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "is_null")]
    pub email: Bson,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    // Name, photo, phone and anything else this service never looks at.
    #[serde(flatten)]
    pub extra: Document,
}

/// Result of a self-registration: a fresh insert, or the records that
/// already carry the email.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Registration {
    Created(InsertReceipt),
    Existing(Vec<User>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};
    use serde_json::json;

    #[test]
    fn role_travels_under_the_type_key() {
        let user: User = serde_json::from_value(json!({
            "email": "seller@example.com",
            "name": "Sam",
            "type": "seller",
            "photo": "https://img.example.com/sam.png"
        }))
        .unwrap();

        assert_eq!(user.role.as_deref(), Some(UserRole::Seller.as_str()));
        assert_eq!(user.email, Bson::String("seller@example.com".into()));
        assert_eq!(user.extra.get_str("name").unwrap(), "Sam");
        assert_eq!(user.extra.get_str("photo").unwrap(), "https://img.example.com/sam.png");

        let stored = bson::to_document(&user).unwrap();
        assert_eq!(stored.get_str("type").unwrap(), "seller");
        assert!(!stored.contains_key("_id"));
        assert!(!stored.contains_key("verified"));
    }

    #[test]
    fn stored_document_reads_back_with_its_id() {
        let id = ObjectId::new();
        let stored = doc! {
            "_id": id,
            "email": "buyer@example.com",
            "type": "buyer",
            "verified": true,
        };

        let user: User = bson::from_document(stored).unwrap();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.role.as_deref(), Some("buyer"));
        assert_eq!(user.verified, Some(true));
        assert!(user.extra.is_empty());
    }

    #[test]
    fn unexpected_shapes_are_kept_untouched() {
        let user: User = serde_json::from_value(json!({
            "email": null,
            "type": "Seller"
        }))
        .unwrap();
        assert_eq!(user.email, Bson::Null);
        assert_eq!(user.role.as_deref(), Some("Seller"));

        let stored = bson::to_document(&user).unwrap();
        assert!(!stored.contains_key("email"));
        assert_eq!(stored.get_str("type").unwrap(), "Seller");

        let listed: User = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "email": "mod@example.com",
            "type": "moderator",
            "name": 7,
        })
        .unwrap();
        assert_eq!(listed.role.as_deref(), Some("moderator"));
        assert_eq!(listed.extra.get_i32("name").unwrap(), 7);
    }
}
