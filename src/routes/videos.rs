use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::videos::{SuccessResponse, VideoListResponse};
use crate::forms::videos::{
    AddVideoForm, AddVideoFormPayload, ListVideosQuery, SearchVideosQuery, UploadVideoForm,
    UploadVideoFormPayload, UploadVideoQuery,
};
use crate::media::MediaStorage;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_service};
use crate::services::ServiceError;
use crate::services::videos::{
    add_video as add_video_service, like_video as like_video_service,
    search_videos as search_videos_service, show_video as show_video_service,
    show_videos as show_videos_service, upload_video as upload_video_service,
};

const VIDEO_NOT_FOUND: &str = "Video not found";

#[get("/videos")]
pub async fn show_videos(
    params: web::Query<ListVideosQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();

    match run_service(move || show_videos_service(params, repo.get_ref())).await {
        Ok(videos) => HttpResponse::Ok().json(VideoListResponse::from(videos)),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}

#[get("/videos/search")]
pub async fn search_videos(
    params: web::Query<SearchVideosQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();

    match run_service(move || search_videos_service(params, repo.get_ref())).await {
        Ok(videos) => HttpResponse::Ok().json(VideoListResponse::from(videos)),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}

#[get("/videos/{video_id}")]
pub async fn show_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let video_id = video_id.into_inner();

    match run_service(move || show_video_service(video_id, repo.get_ref())).await {
        Ok(video) => HttpResponse::Ok().json(video),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}

#[post("/videos")]
pub async fn add_video(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddVideoForm>,
) -> impl Responder {
    let payload: AddVideoFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), VIDEO_NOT_FOUND),
    };

    match run_service(move || add_video_service(payload, repo.get_ref())).await {
        Ok(video) => HttpResponse::Ok().json(video),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}

#[post("/videos/upload")]
pub async fn upload_video(
    params: web::Query<UploadVideoQuery>,
    storage: web::Data<MediaStorage>,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadVideoForm>,
) -> impl Responder {
    let payload = match UploadVideoFormPayload::new(params.into_inner(), form) {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), VIDEO_NOT_FOUND),
    };

    match run_service(move || upload_video_service(payload, storage.get_ref(), repo.get_ref()))
        .await
    {
        Ok(uploaded) => HttpResponse::Ok().json(uploaded),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}

#[post("/videos/{video_id}/like")]
pub async fn like_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let video_id = video_id.into_inner();

    match run_service(move || like_video_service(video_id, repo.get_ref())).await {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse { success: true }),
        Err(err) => error_response(err, VIDEO_NOT_FOUND),
    }
}
