//! Wire types for the lighting service.
//!
//! # Design
//! The service takes at most one payload shape, so request bodies are a
//! closed enum rather than an arbitrary JSON map. Endpoints are an enum for
//! the same reason. Responses are not modelled: the client hands back
//! whatever JSON the service returned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// One of the three operations the lighting service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    PowerOn,
    PowerOff,
    SetColor,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PowerOn => "power_on",
            Endpoint::PowerOff => "power_off",
            Endpoint::SetColor => "set_color",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Body of a `set_color` request: `{"color": "<hex>"}` and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorPayload {
    pub color: String,
}

/// Request body for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `power_on` and `power_off` send no body at all.
    Empty,
    Color(ColorPayload),
}

impl RequestBody {
    /// Serialize to the JSON sent on the wire, `None` for an empty body.
    pub fn to_json(&self) -> Result<Option<String>, RequestError> {
        match self {
            RequestBody::Empty => Ok(None),
            RequestBody::Color(payload) => serde_json::to_string(payload)
                .map(Some)
                .map_err(|e| RequestError::Serialize(e.to_string())),
        }
    }
}

/// A color code accepted by the lighting service: `#RGB` or `#RRGGBB`.
///
/// Kept as written: `#f00` is sent as `#f00`, not `#FF0000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| RequestError::InvalidColor(s.to_string()))?;
        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RequestError::InvalidColor(s.to_string()));
        }
        Ok(HexColor(s.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HexColor> for ColorPayload {
    fn from(color: HexColor) -> Self {
        ColorPayload { color: color.0 }
    }
}
