pub mod auth;
pub mod bookings;
pub mod products;
pub mod users;

use std::path::PathBuf;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, catchers, get, options, routes, Catcher, Request, Route};
use serde_json::{json, Value};

#[get("/")]
fn index() -> &'static str {
    "server running"
}

// CORS preflight
#[options("/<_path..>")]
fn all_options(_path: PathBuf) -> Status {
    Status::Ok
}

pub fn all() -> Vec<Route> {
    let mut all = routes![index, all_options];
    all.extend(routes![auth::issue_token]);
    all.extend(routes![
        users::get_all_users,
        users::get_sellers,
        users::get_buyers,
        users::verify_seller,
        users::delete_user,
        users::get_user,
        users::register_user,
    ]);
    all.extend(routes![
        products::get_category_products,
        products::add_product,
        products::get_seller_products,
        products::delete_product,
        products::get_advertised_products,
        products::advertise_product,
        products::get_reported_products,
        products::report_product,
    ]);
    all.extend(routes![bookings::get_bookings, bookings::create_booking]);
    all
}

#[catch(401)]
fn unauthorized() -> Json<Value> {
    Json(json!({ "message": "unauthorized access" }))
}

#[catch(403)]
fn forbidden() -> Json<Value> {
    Json(json!({ "message": "forbidden access" }))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    Json(json!({ "message": format!("404: '{}' route not found", req.uri()) }))
}

#[catch(500)]
fn internal_error() -> Json<Value> {
    Json(json!({ "message": "internal server error" }))
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> Json<Value> {
    Json(json!({ "message": format!("{}: {}", status.code, status.reason_lossy()) }))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![unauthorized, forbidden, not_found, internal_error, default_catcher]
}
