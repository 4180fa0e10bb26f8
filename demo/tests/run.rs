use std::time::Duration;

use led_core::LightingClient;
use led_demo::DemoConfig;
use mock_server::{AppState, DeviceCommand};
use tokio::net::TcpListener;

async fn start(password: &str) -> (String, AppState) {
    let state = AppState::new(password);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, state.clone()));
    (format!("http://{addr}"), state)
}

fn config(base_url: String, color: &str) -> DemoConfig {
    DemoConfig {
        base_url,
        auth_password: "pw".to_string(),
        color: color.to_string(),
        power_on_delay: Duration::ZERO,
        color_delay: Duration::ZERO,
    }
}

#[tokio::test]
async fn runs_full_sequence() {
    let (base_url, state) = start("pw").await;
    let cfg = config(base_url, "#00F");
    let client = LightingClient::new(&cfg.base_url, &cfg.auth_password);

    led_demo::run(&client, &cfg).await.unwrap();

    assert_eq!(
        state.commands().await,
        vec![
            DeviceCommand::PowerOn,
            DeviceCommand::Color {
                red: 0,
                green: 0,
                blue: 0xFF
            },
            DeviceCommand::PowerOff,
        ]
    );
}

#[tokio::test]
async fn stops_at_first_failure() {
    let (base_url, state) = start("pw").await;
    let cfg = config(base_url, "blue");
    let client = LightingClient::new(&cfg.base_url, &cfg.auth_password);

    let err = led_demo::run(&client, &cfg).await.unwrap_err();
    assert!(format!("{err:#}").contains("set color blue"), "{err:#}");
    assert_eq!(state.commands().await, vec![DeviceCommand::PowerOn]);
}
