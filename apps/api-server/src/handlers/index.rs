//! Service banner at the root path.

use actix_web::HttpResponse;
use quill_shared::ApiInfo;

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiInfo {
        message: "Quill blog API is running".to_string(),
        endpoints: vec![
            "GET /api/posts".to_string(),
            "GET /api/posts/{id}".to_string(),
            "POST /api/posts".to_string(),
            "PUT /api/posts/{id}".to_string(),
            "DELETE /api/posts/{id}".to_string(),
        ],
    })
}
