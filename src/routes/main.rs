use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::HealthResponse;
use crate::repository::DieselRepository;
use crate::services::main::{check_health, status};

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(status())
}

#[get("/health")]
pub async fn health(repo: web::Data<DieselRepository>) -> impl Responder {
    let report = web::block(move || check_health(repo.get_ref()))
        .await
        .unwrap_or_else(|e| {
            log::error!("Health check did not complete: {e}");
            HealthResponse::from_database_up(false)
        });

    HttpResponse::Ok().json(report)
}
