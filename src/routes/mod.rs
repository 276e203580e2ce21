use actix_multipart::form::MultipartFormConfig;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, ResponseError, web};

use crate::MAX_UPLOAD_BYTES;
use crate::dto::ErrorResponse;
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod main;
pub mod videos;

/// Map a service error onto a JSON `{detail}` response.
///
/// `not_found` is the detail reported for [`ServiceError::NotFound`].
pub fn error_response(err: ServiceError, not_found: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(not_found)),
        ServiceError::Conflict(message) | ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// Run a blocking service call on the actix blocking thread pool.
pub async fn run_service<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.unwrap_or_else(|e| {
        log::error!("Blocking service call failed: {e}");
        Err(ServiceError::Internal)
    })
}

/// JSON extractor settings reporting malformed bodies as `{detail}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Query extractor settings reporting malformed parameters as `{detail}`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Path extractor settings reporting unparsable segments, e.g. `/videos/abc`,
/// as `{detail}`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Multipart settings: upload size limit and `{detail}` error bodies.
pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(MAX_UPLOAD_BYTES)
        .error_handler(|err, _req| {
            let response = HttpResponse::build(err.status_code())
                .json(ErrorResponse::new(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// Register every API route.
///
/// Static routes under `/videos` are registered before `/videos/{video_id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .app_data(multipart_config())
        .service(main::index)
        .service(main::health)
        .service(videos::search_videos)
        .service(videos::upload_video)
        .service(videos::show_videos)
        .service(videos::add_video)
        .service(videos::show_video)
        .service(videos::like_video)
        .service(categories::show_categories)
        .service(categories::add_category)
        .service(categories::show_category_videos)
        .service(categories::show_category)
        .service(categories::update_category)
        .service(categories::delete_category);
}
