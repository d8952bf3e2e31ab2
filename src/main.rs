use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use skycast::config::SkycastConfig;
use skycast::session::WeatherSession;
use skycast::weather::WeatherApiClient;
use skycast::web;

fn init_tracing(config: &SkycastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load()?;
    init_tracing(&config);

    let client = WeatherApiClient::new(&config)?;
    let session = Arc::new(Mutex::new(WeatherSession::new(client)));

    web::run(&config, session).await
}
