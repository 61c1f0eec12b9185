pub mod booking_repository;
pub mod product_repository;
pub mod user_repository;

pub use booking_repository::BookingRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;

use mongodb::bson::{doc, Document};
use mongodb::options::UpdateOptions;

/// Flag updates never create documents.
pub(crate) fn no_upsert() -> UpdateOptions {
    UpdateOptions::builder().upsert(false).build()
}

/// `$set` of a single boolean field to `true`.
pub(crate) fn set_flag(field: &str) -> Document {
    let mut fields = Document::new();
    fields.insert(field, true);
    doc! { "$set": fields }
}
