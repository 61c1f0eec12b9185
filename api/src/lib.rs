//! HTTP backend for a secondhand phone marketplace.
//!
//! Three MongoDB collections (products, users, bookings) are exposed over
//! plain JSON routes. Owner-restricted routes require a bearer token issued
//! by `/jwt`; routes that take an `email` query parameter additionally
//! require that email to match the token.

pub mod config;
pub mod error;
pub mod jwt;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use mongodb::Client;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket};

use crate::config::Config;
use crate::jwt::TokenKeys;
use crate::repository::{BookingRepository, ProductRepository, UserRepository};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PATCH, DELETE, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization",
        ));
    }
}

/// Assembles the server around an existing store client.
///
/// Collection handles and token keys are created here once and shared
/// read-only by every request.
pub fn build_rocket(config: &Config, client: &Client) -> Rocket<Build> {
    let db = client.database(&config.database);
    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));

    rocket::custom(figment)
        .manage(UserRepository::new(&db))
        .manage(ProductRepository::new(&db))
        .manage(BookingRepository::new(&db))
        .manage(TokenKeys::new(config.access_token_secret.as_bytes()))
        .attach(Cors)
        .mount("/", routes::all())
        .register("/", routes::catchers())
}
