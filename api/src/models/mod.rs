pub mod booking;
pub mod product;
pub mod receipt;
pub mod user;

use mongodb::bson::{oid::ObjectId, Bson};

use crate::error::ApiError;

/// Fields the client left out (or sent as null) are not written back.
pub(crate) fn is_null(value: &Bson) -> bool {
    matches!(value, Bson::Null)
}

/// Renders a raw field value for messages, strings without quotes.
pub(crate) fn display_value(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses a path identifier in the store's native `ObjectId` hex form.
pub fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))
}
