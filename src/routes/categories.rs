use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::MessageResponse;
use crate::dto::categories::{CategoryListResponse, CategoryResponse};
use crate::forms::categories::{
    AddCategoryForm, AddCategoryFormPayload, UpdateCategoryForm, UpdateCategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_service};
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, delete_category as delete_category_service,
    show_categories as show_categories_service, show_category as show_category_service,
    show_category_videos as show_category_videos_service,
    update_category as update_category_service,
};

const CATEGORY_NOT_FOUND: &str = "Category not found";

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_service(move || show_categories_service(repo.get_ref())).await {
        Ok(categories) => HttpResponse::Ok().json(CategoryListResponse::from(categories)),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match run_service(move || show_category_service(category_id, repo.get_ref())).await {
        Ok(category) => HttpResponse::Ok().json(CategoryResponse::from(category)),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), CATEGORY_NOT_FOUND),
    };

    match run_service(move || add_category_service(payload, repo.get_ref())).await {
        Ok(category) => HttpResponse::Ok().json(CategoryResponse::from(category)),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> impl Responder {
    let category_id = category_id.into_inner();
    let payload: UpdateCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), CATEGORY_NOT_FOUND),
    };

    match run_service(move || update_category_service(category_id, payload, repo.get_ref())).await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            success: true,
            message: "Category updated".to_string(),
        }),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match run_service(move || delete_category_service(category_id, repo.get_ref())).await {
        Ok(message) => HttpResponse::Ok().json(MessageResponse {
            success: true,
            message: message.to_string(),
        }),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}

#[get("/categories/{category_id}/videos")]
pub async fn show_category_videos(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match run_service(move || show_category_videos_service(category_id, repo.get_ref())).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, CATEGORY_NOT_FOUND),
    }
}
