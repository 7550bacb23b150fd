//! # Quill Client
//!
//! Keeps client-side views in step with the Quill post API.
//!
//! Every view holds a [`ViewState`] (`Loading`, `Error` or `Ready`), issues one
//! fetch when mounted, and reports where to go next after a mutation through
//! the [`Followup`] table. Rendering is left to the UI layer.

pub mod api;
pub mod config;
pub mod error;
pub mod route;
pub mod state;
pub mod views;

pub use api::PostsApi;
pub use config::ClientConfig;
pub use error::ClientError;
pub use route::{Followup, Mutation, Route, Screen};
pub use state::ViewState;
pub use views::{
    Confirm, EditorMode, PendingSubmit, PostDetailView, PostEditorView, PostListView,
};
