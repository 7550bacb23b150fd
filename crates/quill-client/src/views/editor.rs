use quill_shared::{PostPayload, PostResponse};

use crate::api::PostsApi;
use crate::error::ClientError;
use crate::route::{Followup, Mutation, Route, Screen};
use crate::state::ViewState;

const MISSING_FIELDS: &str = "Title and content are required";

/// Whether the editor writes a new post or an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

/// Form for creating or editing a post.
///
/// `state` tracks loading of the post being edited. A failed submit keeps the
/// draft and records its message in `submit_error` instead.
#[derive(Debug)]
pub struct PostEditorView {
    api: PostsApi,
    mode: EditorMode,
    state: ViewState<PostPayload>,
    submitting: bool,
    submit_error: Option<String>,
}

impl PostEditorView {
    /// Editor for a new post; ready immediately with an empty draft.
    pub fn create(api: PostsApi) -> Self {
        Self {
            api,
            mode: EditorMode::Create,
            state: ViewState::Ready(PostPayload::default()),
            submitting: false,
            submit_error: None,
        }
    }

    /// Editor for an existing post; loading until mounted.
    pub fn edit(api: PostsApi, id: impl Into<String>) -> Self {
        Self {
            api,
            mode: EditorMode::Edit(id.into()),
            state: ViewState::Loading,
            submitting: false,
            submit_error: None,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn state(&self) -> &ViewState<PostPayload> {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Load the post being edited into the draft. No request in create mode.
    pub async fn mount(&mut self) {
        let EditorMode::Edit(id) = &self.mode else {
            return;
        };

        self.state = ViewState::Loading;
        self.state = match self.api.get(id).await {
            Ok(post) => ViewState::Ready(PostPayload::new(post.title, post.content)),
            Err(e) => ViewState::Error(e.user_message("fetch post")),
        };
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.state.data_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = self.state.data_mut() {
            draft.content = content.into();
        }
    }

    /// Validate and send the draft. On success returns the new post's detail route.
    ///
    /// Shorthand for [`begin_submit`](Self::begin_submit), [`PendingSubmit::send`]
    /// and [`finish_submit`](Self::finish_submit) when nothing needs to render
    /// the in-flight state.
    pub async fn submit(&mut self) -> Option<Route> {
        let pending = self.begin_submit()?;
        let result = pending.send().await;
        self.finish_submit(result)
    }

    /// Validate the draft and mark the editor as submitting.
    ///
    /// Returns `None` when the draft is not loaded, a submit is already in
    /// flight, or a field is blank (which sets `submit_error`).
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.submitting {
            return None;
        }
        let draft = self.state.data()?.clone();

        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            self.submit_error = Some(MISSING_FIELDS.to_string());
            return None;
        }

        self.submitting = true;
        self.submit_error = None;

        Some(PendingSubmit {
            api: self.api.clone(),
            mode: self.mode.clone(),
            draft,
        })
    }

    /// Apply the outcome of a [`PendingSubmit`]. Returns where to navigate, if anywhere.
    pub fn finish_submit(&mut self, result: Result<PostResponse, ClientError>) -> Option<Route> {
        self.submitting = false;

        let (mutation, action) = match &self.mode {
            EditorMode::Create => (Mutation::Create, "create post"),
            EditorMode::Edit(_) => (Mutation::Update, "update post"),
        };

        match result {
            Ok(post) => match Followup::after(mutation, Screen::Editor, &post.id) {
                Followup::Navigate(route) => Some(route),
                Followup::RefreshList => None,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Post submit failed");
                self.submit_error = Some(e.user_message(action));
                None
            }
        }
    }

    /// Where "Cancel" leads.
    pub fn cancel(&self) -> Route {
        match &self.mode {
            EditorMode::Create => Route::List,
            EditorMode::Edit(id) => Route::Detail(id.clone()),
        }
    }
}

/// A validated draft on its way to the server, detached from the editor so
/// the view stays readable while the request runs.
#[derive(Debug)]
pub struct PendingSubmit {
    api: PostsApi,
    mode: EditorMode,
    draft: PostPayload,
}

impl PendingSubmit {
    pub async fn send(self) -> Result<PostResponse, ClientError> {
        match &self.mode {
            EditorMode::Create => self.api.create(&self.draft).await,
            EditorMode::Edit(id) => self.api.update(id, &self.draft).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn api() -> PostsApi {
        // Nothing listens here; tests below must not reach the network.
        PostsApi::new(ClientConfig::new("http://127.0.0.1:9/api"))
    }

    #[tokio::test]
    async fn test_blank_draft_is_rejected_locally() {
        let mut editor = PostEditorView::create(api());
        editor.set_title("   ");
        editor.set_content("Body");

        assert_eq!(editor.submit().await, None);
        assert_eq!(editor.submit_error(), Some(MISSING_FIELDS));
        assert_eq!(editor.state().data().unwrap().content, "Body");
    }

    #[test]
    fn test_submitting_is_visible_until_finished() {
        let mut editor = PostEditorView::create(api());
        editor.set_title("Hello");
        editor.set_content("World");

        let pending = editor.begin_submit();
        assert!(pending.is_some());
        assert!(editor.is_submitting());
        // A second click while the first request runs sends nothing
        assert!(editor.begin_submit().is_none());

        assert_eq!(editor.finish_submit(Err(ClientError::NotFound)), None);
        assert!(!editor.is_submitting());
        assert_eq!(editor.submit_error(), Some("Post not found"));
        assert_eq!(
            editor.state().data(),
            Some(&PostPayload::new("Hello", "World"))
        );
    }

    #[test]
    fn test_new_submit_clears_previous_error() {
        let mut editor = PostEditorView::edit(api(), "p1");
        editor.state = ViewState::Ready(PostPayload::new("Hello", "World"));

        let _ = editor.finish_submit(Err(ClientError::Rejected {
            status: 500,
            detail: None,
        }));
        assert_eq!(editor.submit_error(), Some("Failed to update post"));

        assert!(editor.begin_submit().is_some());
        assert_eq!(editor.submit_error(), None);
    }

    #[tokio::test]
    async fn test_create_mode_needs_no_fetch() {
        let mut editor = PostEditorView::create(api());
        editor.mount().await;
        assert_eq!(editor.state(), &ViewState::Ready(PostPayload::default()));
    }

    #[test]
    fn test_cancel_routes() {
        assert_eq!(PostEditorView::create(api()).cancel(), Route::List);
        assert_eq!(
            PostEditorView::edit(api(), "p1").cancel(),
            Route::Detail("p1".to_string())
        );
    }

    #[test]
    fn test_edit_mode_starts_loading_and_ignores_input() {
        let mut editor = PostEditorView::edit(api(), "p1");
        editor.set_title("ignored");
        assert!(editor.state().is_loading());
    }
}
