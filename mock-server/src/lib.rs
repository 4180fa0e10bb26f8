//! In-process stand-in for the LED lighting service.
//!
//! Serves `/power_on`, `/power_off` and `/set_color` behind a password check
//! on the `Authorization` header. Accepted commands are encoded as device
//! frames and recorded in [`AppState`] instead of being written to hardware.

pub mod device;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

pub use device::{parse_hex_color, DeviceCommand};

#[derive(Deserialize)]
pub struct SetColor {
    pub color: String,
}

#[derive(Clone)]
pub struct AppState {
    auth_password: Arc<str>,
    commands: Arc<RwLock<Vec<DeviceCommand>>>,
}

impl AppState {
    pub fn new(auth_password: &str) -> Self {
        Self {
            auth_password: Arc::from(auth_password),
            commands: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Commands accepted so far, oldest first.
    pub async fn commands(&self) -> Vec<DeviceCommand> {
        self.commands.read().await.clone()
    }

    async fn send(&self, command: DeviceCommand) {
        let frame = command.to_frame();
        info!(?command, frame = %hex(&frame), "sending device command");
        self.commands.write().await.push(command);
    }
}

pub fn app(auth_password: &str) -> Router {
    router(AppState::new(auth_password))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/power_on", post(power_on))
        .route("/power_off", post(power_off))
        .route("/set_color", post(set_color))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}

async fn authenticate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let password = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if password != Some(&*state.auth_password) {
        warn!(path = %request.uri().path(), "rejected unauthorized request");
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response();
    }
    next.run(request).await
}

// Unknown paths still go through `authenticate` first.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn power_on(State(state): State<AppState>) -> Json<Value> {
    state.send(DeviceCommand::PowerOn).await;
    Json(json!({ "status": "Lights turned on" }))
}

async fn power_off(State(state): State<AppState>) -> Json<Value> {
    state.send(DeviceCommand::PowerOff).await;
    Json(json!({ "status": "Lights turned off" }))
}

async fn set_color(
    State(state): State<AppState>,
    Json(input): Json<SetColor>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let (red, green, blue) = parse_hex_color(&input.color)
        .ok_or((StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid hex code" }))))?;
    state.send(DeviceCommand::Color { red, green, blue }).await;
    Ok(Json(json!({ "status": "Color set", "color": input.color })))
}

fn hex(frame: &[u8]) -> String {
    frame
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
