use quill_shared::PostResponse;

use super::{Confirm, DELETE_PROMPT};
use crate::api::PostsApi;
use crate::route::{Followup, Mutation, Route, Screen};
use crate::state::ViewState;

/// A single post, looked up by the id in the route.
#[derive(Debug)]
pub struct PostDetailView {
    api: PostsApi,
    id: String,
    state: ViewState<PostResponse>,
}

impl PostDetailView {
    pub fn new(api: PostsApi, id: impl Into<String>) -> Self {
        Self {
            api,
            id: id.into(),
            state: ViewState::Loading,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ViewState<PostResponse> {
        &self.state
    }

    /// Fetch the post once. A 404 becomes "Post not found".
    pub async fn mount(&mut self) {
        self.state = ViewState::Loading;
        self.state = match self.api.get(&self.id).await {
            Ok(post) => ViewState::Ready(post),
            Err(e) => ViewState::Error(e.user_message("fetch post")),
        };
    }

    pub fn edit_route(&self) -> Route {
        Route::Edit(self.id.clone())
    }

    /// Delete this post after confirmation and head back to the list.
    pub async fn delete(&mut self, confirm: impl Confirm) -> Option<Route> {
        if !confirm.confirm(DELETE_PROMPT) {
            return None;
        }

        match self.api.delete(&self.id).await {
            Ok(()) => match Followup::after(Mutation::Delete, Screen::Detail, &self.id) {
                Followup::Navigate(route) => Some(route),
                Followup::RefreshList => None,
            },
            Err(e) => {
                self.state = ViewState::Error(e.user_message("delete post"));
                None
            }
        }
    }
}
