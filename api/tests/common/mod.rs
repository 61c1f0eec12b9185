#![allow(dead_code)]

use clap::Parser;
use mongodb::Client;
use resell_backend::build_rocket;
use resell_backend::config::Config;
use resell_backend::jwt::TokenKeys;
use rocket::http::Header;
use rocket::local::asynchronous::Client as LocalClient;

pub const SECRET: &str = "integration-test-secret";

/// Nothing listens here; any query fails fast.
pub const UNREACHABLE_STORE: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=250&connectTimeoutMS=250";

pub fn config(database: &str) -> Config {
    Config::try_parse_from([
        "resell-backend",
        "--access-token-secret",
        SECRET,
        "--database",
        database,
    ])
    .unwrap()
}

pub async fn local_client(mongodb_uri: &str, database: &str) -> LocalClient {
    let store = Client::with_uri_str(mongodb_uri).await.unwrap();
    LocalClient::tracked(build_rocket(&config(database), &store))
        .await
        .unwrap()
}

/// Router whose store can never answer.
pub async fn offline_client() -> LocalClient {
    local_client(UNREACHABLE_STORE, "resell-offline").await
}

pub fn bearer(email: &str) -> Header<'static> {
    let token = TokenKeys::new(SECRET.as_bytes()).create_token(email).unwrap();
    Header::new("Authorization", format!("Bearer {}", token))
}
