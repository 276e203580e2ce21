use crate::dto::{HealthResponse, StatusResponse};
use crate::repository::HealthReader;

/// Body of the root endpoint.
pub fn status() -> StatusResponse {
    StatusResponse {
        status: "OK",
        message: "Ugandan Sign Language API",
        docs: "/docs",
    }
}

/// Report whether the database answers queries. Never fails.
pub fn check_health<R>(repo: &R) -> HealthResponse
where
    R: HealthReader,
{
    match repo.ping() {
        Ok(()) => HealthResponse::from_database_up(true),
        Err(e) => {
            log::warn!("Database health check failed: {e}");
            HealthResponse::from_database_up(false)
        }
    }
}
