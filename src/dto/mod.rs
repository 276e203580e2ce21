//! Transport records returned to API clients.

use serde::Serialize;

pub mod categories;
pub mod videos;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Acknowledgement carrying a human-readable message.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Response of the root endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub docs: &'static str,
}

/// Response of the health endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    pub fn from_database_up(up: bool) -> Self {
        if up {
            Self {
                status: "healthy",
                database: "connected",
            }
        } else {
            Self {
                status: "unhealthy",
                database: "disconnected",
            }
        }
    }
}
