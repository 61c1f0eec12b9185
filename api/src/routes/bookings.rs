use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::error::Result;
use crate::models::booking::{Booking, BookingOutcome};
use crate::repository::BookingRepository;
use crate::services::AuthUser;

#[get("/bookings?<email>")]
pub async fn get_bookings(
    auth: AuthUser,
    email: Option<String>,
    booking_repo: &State<BookingRepository>,
) -> Result<Json<Vec<Booking>>> {
    let email = auth.ensure_identity(email.as_deref())?;
    Ok(Json(booking_repo.find_bookings_by_email(email).await?))
}

#[post("/bookings", data = "<booking>")]
pub async fn create_booking(
    _auth: AuthUser,
    booking: Json<Booking>,
    booking_repo: &State<BookingRepository>,
) -> Result<Json<BookingOutcome>> {
    Ok(Json(booking_repo.create_booking(booking.into_inner()).await?))
}
