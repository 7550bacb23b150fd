//! # Quill API Server
//!
//! HTTP surface of the post store: routes, error mapping, request IDs,
//! configuration and application state.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use actix_cors::Cors;

pub use config::AppConfig;
pub use state::AppState;

/// CORS policy: one configured origin, or any origin when none is set.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}
