//! Example driver for the lighting client: on, color, off.

pub mod config;

use anyhow::{Context, Result};
use led_core::{LightingClient, Transport};
use tokio::time::sleep;
use tracing::info;

pub use config::DemoConfig;

/// Power on, wait, set the configured color, wait, power off. Stops at the
/// first failed request.
pub async fn run<T: Transport>(client: &LightingClient<T>, cfg: &DemoConfig) -> Result<()> {
    let response = client.power_on().await.context("power on")?;
    info!(%response, "lights on");

    sleep(cfg.power_on_delay).await;

    let response = client
        .set_color(&cfg.color)
        .await
        .with_context(|| format!("set color {}", cfg.color))?;
    info!(%response, color = %cfg.color, "color set");

    sleep(cfg.color_delay).await;

    let response = client.power_off().await.context("power off")?;
    info!(%response, "lights off");

    Ok(())
}
