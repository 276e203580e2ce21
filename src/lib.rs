//! Sign language video library service.
//!
//! The `data` feature exposes the persistence layer on its own (connection
//! provider, domain types, diesel models and repositories). The `server`
//! feature adds the forms, services, media storage and actix-web routes.

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod media;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Largest accepted upload request body.
#[cfg(feature = "server")]
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;
