//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! Posts, their validation rules, the repository ports and the post service
//! live here, with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
