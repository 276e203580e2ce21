use actix_files::Files;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;
use ugsl_videos::media::MediaStorage;
use ugsl_videos::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr, $media_dir:expr) => {{
        let storage = MediaStorage::new($media_dir, "/media");
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .app_data(web::Data::new(storage.clone()))
                .service(Files::new(storage.url_prefix(), storage.dir()))
                .configure(routes::configure),
        )
        .await
    }};
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn root_and_health_report_status() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Ugandan Sign Language API");

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "database": "connected"})
    );
}

#[actix_web::test]
async fn category_lifecycle() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/categories")
            .set_json(json!({"name": "Basic Communication", "color": "#2196F3"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Basic Communication");
    assert_eq!(body["data"]["description"], "");

    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri("/categories/1")
            .set_json(json!({"name": "Greetings"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Category updated"})
    );

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/categories"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Greetings");

    let (status, body) = call_json!(app, test::TestRequest::delete().uri("/categories/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Category deleted successfully"})
    );

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/categories/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Category not found"}));
}

#[actix_web::test]
async fn missing_category_operations_return_404() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri("/categories/9")
            .set_json(json!({"name": "Nothing"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(app, test::TestRequest::delete().uri("/categories/9"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(app, test::TestRequest::get().uri("/categories/9/videos"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn video_walkthrough() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/categories")
            .set_json(json!({"name": "Basic Communication"}))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/videos")
            .set_json(json!({"title": "Greetings", "category_id": 1}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["video_url"], "");
    assert_eq!(body["difficulty"], "beginner");
    assert_eq!(body["views"], 0);
    assert!(body["created_at"].as_str().unwrap().contains('T'));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["views"], 1);

    let (status, body) = call_json!(app, test::TestRequest::post().uri("/videos/1/like"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/categories/1/videos"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["name"], "Basic Communication");
    assert_eq!(body["count"], 1);
    assert_eq!(body["videos"][0]["likes"], 1);

    let (status, body) = call_json!(app, test::TestRequest::delete().uri("/categories/1"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Cannot delete: This category still has videos."})
    );
}

#[actix_web::test]
async fn list_and_search_videos() {
    let test_db = common::TestDb::new();
    test_db.insert_video_at(
        "Greetings & Introductions",
        "Learn basic greetings",
        None,
        "2024-01-01 09:00:00",
    );
    test_db.insert_video_at("Family Members", "", None, "2024-01-02 09:00:00");
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["title"], "Family Members");
    assert_eq!(body["data"][1]["created_at"], "2024-01-01T09:00:00");

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos/search?q=greet"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["title"], "Greetings & Introductions");

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos?limit=0"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn invalid_video_requests_are_rejected() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Video not found"}));

    let (status, _) = call_json!(app, test::TestRequest::post().uri("/videos/5/like"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/videos")
            .set_json(json!({"title": "Orphan", "category_id": 77}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/videos")
            .set_json(json!({"title": "Hard", "difficulty": "expert"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/videos")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

const BOUNDARY: &str = "----ugsl-boundary";

fn multipart_upload(field: &str, file_name: &str) -> test::TestRequest {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: video/mp4\r\n\r\n\
         fake video bytes\r\n\
         --{BOUNDARY}--\r\n"
    );
    test::TestRequest::post()
        .uri("/videos/upload?title=Hello")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn upload_stores_file_and_serves_it() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, json_body) = call_json!(app, multipart_upload("file", "../hello.mp4"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body,
        json!({"success": true, "id": 1, "video_url": "/media/hello.mp4"})
    );

    let stored = std::fs::read_to_string(media.path().join("hello.mp4")).unwrap();
    assert_eq!(stored, "fake video bytes");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/media/hello.mp4").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, video) = call_json!(app, test::TestRequest::get().uri("/videos/1"));
    assert_eq!(video["title"], "Hello");
    assert_eq!(video["video_url"], "/media/hello.mp4");
}

#[actix_web::test]
async fn upload_without_file_field_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(app, multipart_upload("attachment", "hello.mp4"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn upload_into_unwritable_media_dir_is_a_server_error() {
    let test_db = common::TestDb::new();
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let app = init_app!(test_db, blocker.path().join("videos"));

    let (status, body) = call_json!(app, multipart_upload("file", "hello.mp4"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Internal server error"}));

    let (_, listing) = call_json!(app, test::TestRequest::get().uri("/videos"));
    assert_eq!(listing["count"], 0);
}

#[actix_web::test]
async fn unparsable_path_ids_are_bad_requests() {
    let test_db = common::TestDb::new();
    let media = TempDir::new().unwrap();
    let app = init_app!(test_db, media.path());

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/videos/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, body) = call_json!(app, test::TestRequest::delete().uri("/categories/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}
