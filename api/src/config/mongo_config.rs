use mongodb::{error::Result, options::ClientOptions, Client};
use tracing::info;

use crate::config::Config;

pub async fn setup_mongo(config: &Config) -> Result<Client> {
    let mut client_options = ClientOptions::parse(config.connection_uri()).await?;
    client_options.app_name = Some("resell-backend".to_string());
    let client = Client::with_options(client_options)?;

    info!(database = %config.database, "document store client ready");
    Ok(client)
}
