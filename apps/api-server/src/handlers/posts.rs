//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_shared::{PostPayload, PostResponse};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        created_at: post.created_at,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.posts.create(&req.title, &req.content).await?;

    tracing::info!(request_id = %request_id, post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.posts.update(&path, &req.title, &req.content).await?;

    tracing::info!(request_id = %request_id, post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;

    tracing::info!(request_id = %request_id, post_id = %path, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
