use led_core::LightingClient;
use led_demo::DemoConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cfg = DemoConfig::from_env()?;
    info!(base_url = %cfg.base_url, "driving lighting service");

    let client = LightingClient::new(&cfg.base_url, &cfg.auth_password);
    if let Err(e) = led_demo::run(&client, &cfg).await {
        error!("an error occurred: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
