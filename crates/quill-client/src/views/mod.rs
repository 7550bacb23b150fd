//! Views over the post API, one per client route.

mod detail;
mod editor;
mod list;

pub use detail::PostDetailView;
pub use editor::{EditorMode, PendingSubmit, PostEditorView};
pub use list::PostListView;

/// Prompt shown before any delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
