use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Listing status that makes an advertised product visible on the home page.
pub const AVAILABLE: &str = "Available";

/// A listing posted by a seller.
///
/// Only the fields used in filters and flag updates are typed; price,
/// description, images and the rest stay in `details` untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertised: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(flatten)]
    pub details: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use serde_json::json;

    #[test]
    fn listing_details_survive_a_store_round_trip() {
        let product: Product = serde_json::from_value(json!({
            "name": "Pixel 6",
            "category": "63680e4f2a",
            "seller_email": "seller@example.com",
            "status": "Available",
            "resale_price": 220,
            "description": "Lightly used"
        }))
        .unwrap();

        assert_eq!(product.seller_email.as_deref(), Some("seller@example.com"));
        assert_eq!(product.status.as_deref(), Some(AVAILABLE));
        assert_eq!(product.advertised, None);

        let stored = bson::to_document(&product).unwrap();
        assert_eq!(stored.get_str("description").unwrap(), "Lightly used");
        assert!(!stored.contains_key("advertised"));

        let back: Product = bson::from_document(stored).unwrap();
        assert_eq!(back, product);
    }
}
