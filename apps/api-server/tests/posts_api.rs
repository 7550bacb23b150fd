use actix_web::{App, http::StatusCode, middleware::from_fn, test, web};
use serde_json::json;

use api_server::{AppState, handlers, observability};
use quill_shared::{ApiInfo, ErrorResponse, PostResponse};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(from_fn(observability::request_id))
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn create_get_delete_scenario() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hello", "content": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PostResponse = test::read_body_json(resp).await;
    assert_eq!(created.title, "Hello");
    assert_eq!(created.content, "World");
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let fetched: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_with_blank_fields_is_rejected() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "   ", "content": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.detail.as_deref(), Some("Title is required"));

    // Missing field is reported the same way
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.status, 400);
}

#[actix_web::test]
async fn update_keeps_id_and_created_at() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hello", "content": "World" }))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(json!({ "title": " Updated ", "content": "Body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: PostResponse = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.content, "Body");

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let fetched: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn update_validation_and_missing_posts() {
    let app = app!();
    let missing = uuid::Uuid::new_v4();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{missing}"))
        .set_json(json!({ "title": "Hello", "content": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{missing}"))
        .set_json(json!({ "title": "", "content": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_is_not_idempotent() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hello", "content": "World" }))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/posts/{}", created.id);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_id_is_not_found() {
    let app = app!();

    for req in [
        test::TestRequest::get().uri("/api/posts/not-an-id").to_request(),
        test::TestRequest::delete().uri("/api/posts/not-an-id").to_request(),
        test::TestRequest::put()
            .uri("/api/posts/not-an-id")
            .set_json(json!({ "title": "Hello", "content": "World" }))
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn list_returns_every_created_post() {
    let app = app!();

    let mut created = Vec::new();
    for i in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": format!("Post {i}"), "content": format!("Body {i}") }))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        created.push(post);
    }

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, created);
}

#[actix_web::test]
async fn responses_carry_request_id() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("x-request-id", "trace-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "trace-123"
    );

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn problem_bodies_carry_request_id() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
        .insert_header(("x-request-id", "trace-404"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.request_id.as_deref(), Some("trace-404"));
    assert_eq!(problem.status, 404);

    // Body errors raised by the JSON extractor go through the same path
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .insert_header(("x-request-id", "trace-400"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "trace-400"
    );
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.request_id.as_deref(), Some("trace-400"));
}

#[actix_web::test]
async fn root_lists_post_endpoints() {
    let app = app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let info: ApiInfo = test::call_and_read_body_json(&app, req).await;
    assert_eq!(info.endpoints.len(), 5);
    assert!(info.endpoints.iter().any(|e| e == "DELETE /api/posts/{id}"));
}
