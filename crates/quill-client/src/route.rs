//! Client routes and the post-mutation followup table.

/// A client-side location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/create`
    Create,
    /// `/posts/{id}`
    Detail(String),
    /// `/posts/{id}/edit`
    Edit(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::Detail(id) => format!("/posts/{id}"),
            Route::Edit(id) => format!("/posts/{id}/edit"),
        }
    }

    /// Parse a client path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::List),
            ["create"] => Some(Route::Create),
            ["posts", id] if !id.is_empty() => Some(Route::Detail(id.to_string())),
            ["posts", id, "edit"] if !id.is_empty() => Some(Route::Edit(id.to_string())),
            _ => None,
        }
    }
}

/// The view a mutation was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
    Editor,
}

/// A successful write against the post API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

/// What a view does once a mutation has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Leave the current view.
    Navigate(Route),
    /// Stay and re-fetch the full post list.
    RefreshList,
}

impl Followup {
    /// The followup for `mutation` of post `id`, started from `screen`.
    ///
    /// | mutation       | screen      | followup               |
    /// |----------------|-------------|------------------------|
    /// | create, update | any         | navigate to its detail |
    /// | delete         | list        | refresh the list       |
    /// | delete         | detail/edit | navigate to the list   |
    pub fn after(mutation: Mutation, screen: Screen, id: &str) -> Self {
        match (mutation, screen) {
            (Mutation::Create | Mutation::Update, _) => {
                Followup::Navigate(Route::Detail(id.to_string()))
            }
            (Mutation::Delete, Screen::List) => Followup::RefreshList,
            (Mutation::Delete, _) => Followup::Navigate(Route::List),
        }
    }
}
