use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use crate::models::receipt::InsertReceipt;
use crate::models::{display_value, is_null};

/// A buyer's reservation of a product. `email` and `product` are raw
/// values: the duplicate check matches them exactly as sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "is_null")]
    pub email: Bson,
    #[serde(default, skip_serializing_if = "is_null")]
    pub product: Bson,
    // Meeting location, phone, price...
    #[serde(flatten)]
    pub details: Document,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BookingOutcome {
    Created(InsertReceipt),
    AlreadyBooked { acknowledged: bool, message: String },
}

impl BookingOutcome {
    pub fn already_booked(product: &Bson) -> Self {
        BookingOutcome::AlreadyBooked {
            acknowledged: false,
            message: format!("You already have a booking for {}", display_value(product)),
        }
    }
}
