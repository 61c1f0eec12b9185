use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::{Collection, Database};
use tracing::{debug, info};

use crate::models::booking::{Booking, BookingOutcome};

pub struct BookingRepository {
    collection: Collection<Booking>,
}

impl BookingRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Booking>("bookings");
        BookingRepository { collection }
    }

    pub async fn find_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        let mut cursor = self.collection.find(doc! { "email": email }, None).await?;
        let mut bookings = Vec::new();
        while let Some(booking) = cursor.try_next().await? {
            bookings.push(booking);
        }
        Ok(bookings)
    }

    /// Books the product unless this buyer already holds a booking for it.
    ///
    /// The existence check is a plain read before the insert, so two
    /// identical requests racing each other may both be stored.
    pub async fn create_booking(&self, booking: Booking) -> Result<BookingOutcome> {
        let filter = doc! { "email": booking.email.clone(), "product": booking.product.clone() };
        if self.collection.find_one(filter, None).await?.is_some() {
            debug!(email = %booking.email, product = %booking.product, "duplicate booking");
            return Ok(BookingOutcome::already_booked(&booking.product));
        }

        let result = self.collection.insert_one(&booking, None).await?;
        info!(email = %booking.email, product = %booking.product, "booking created");
        Ok(BookingOutcome::Created(result.into()))
    }
}
