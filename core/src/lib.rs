//! Async client for a remote LED lighting service.
//!
//! # Overview
//! Three operations, each a single authenticated `POST`:
//! `power_on`, `power_off` and `set_color`. A 200 response resolves to the
//! decoded JSON body; anything else resolves to `RequestError`.
//!
//! # Design
//! - `LightingClient` is stateless: an immutable `ClientConfig` plus a
//!   `Transport`.
//! - Requests are built and responses parsed as plain data (`HttpRequest`,
//!   `HttpResponse`), so the I/O boundary is a single trait call.
//! - No retries and no client-side timeout; callers decide what to do with
//!   an error.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, LightingClient};
pub use error::{RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ColorPayload, Endpoint, HexColor, RequestBody};
