//! # Quill Shared
//!
//! Wire types shared by the API server and the client.

pub mod dto;
pub mod response;

pub use dto::{ApiInfo, PostPayload, PostResponse};
pub use response::ErrorResponse;
