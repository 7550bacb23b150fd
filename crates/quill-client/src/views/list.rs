use quill_shared::PostResponse;

use super::{Confirm, DELETE_PROMPT};
use crate::api::PostsApi;
use crate::route::{Followup, Mutation, Route, Screen};
use crate::state::ViewState;

/// All posts, as shown on the home route.
#[derive(Debug)]
pub struct PostListView {
    api: PostsApi,
    state: ViewState<Vec<PostResponse>>,
}

impl PostListView {
    pub fn new(api: PostsApi) -> Self {
        Self {
            api,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<PostResponse>> {
        &self.state
    }

    /// Fetch the list once.
    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Delete `id` after confirmation, then re-fetch the whole list.
    ///
    /// The list is never patched locally, so changes made by other clients
    /// show up too. Returns a route only if the followup leaves this view.
    pub async fn delete(&mut self, id: &str, confirm: impl Confirm) -> Option<Route> {
        if !confirm.confirm(DELETE_PROMPT) {
            return None;
        }

        if let Err(e) = self.api.delete(id).await {
            self.state = ViewState::Error(e.user_message("delete post"));
            return None;
        }

        match Followup::after(Mutation::Delete, Screen::List, id) {
            Followup::RefreshList => {
                self.load().await;
                None
            }
            Followup::Navigate(route) => Some(route),
        }
    }

    async fn load(&mut self) {
        self.state = ViewState::Loading;
        self.state = match self.api.list().await {
            Ok(posts) => ViewState::Ready(posts),
            Err(e) => ViewState::Error(e.user_message("fetch posts")),
        };
    }
}
