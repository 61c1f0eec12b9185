use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use resell_backend::build_rocket;
use resell_backend::config::{setup_mongo, Config};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional; missing .env is fine.
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!(address = %config.address, port = config.port, "starting server");

    let client = setup_mongo(&config).await?;
    build_rocket(&config, &client).launch().await?;

    info!("server stopped");
    Ok(())
}
