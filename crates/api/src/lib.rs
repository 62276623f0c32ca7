//! Shared API types for the Cheese App tutorial service.
//!
//! This crate is the single source of truth for all request/response
//! shapes. The server (Axum) and the integration tests import these types
//! directly, so the wire format is defined in exactly one place.

use serde::{Deserialize, Serialize};

// ─── Informational endpoints ─────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ─── Euclidean distance ──────────────────────────────────────────────────────

/// Query parameters for `GET /euclidean_distance/`.
///
/// Both coordinates are optional; missing values fall back to the tutorial
/// defaults `x = 1`, `y = 2`.
#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    #[serde(default = "default_x")]
    pub x: f64,
    #[serde(default = "default_y")]
    pub y: f64,
}

fn default_x() -> f64 {
    1.0
}

fn default_y() -> f64 {
    2.0
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub x: f64,
    pub y: f64,
    pub distance: f64,
    pub message: String,
}

// ─── Addition ────────────────────────────────────────────────────────────────

/// Query parameters for `GET /add/`. Missing values default to 0.
#[derive(Debug, Deserialize)]
pub struct AddQuery {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub result: f64,
}
