//! Post service - the CRUD contract over posts, independent of storage.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// CRUD operations over posts with field validation.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List every post.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(internal)
    }

    /// Fetch one post by its textual id.
    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        let uuid = parse_id(id)?;
        self.find(uuid, id).await
    }

    /// Validate and persist a new post.
    pub async fn create(&self, title: &str, content: &str) -> Result<Post, DomainError> {
        let draft = PostDraft::parse(title, content)?;
        self.repo.insert(Post::new(draft)).await.map_err(internal)
    }

    /// Replace the title and content of an existing post.
    pub async fn update(&self, id: &str, title: &str, content: &str) -> Result<Post, DomainError> {
        let uuid = parse_id(id)?;
        let draft = PostDraft::parse(title, content)?;

        let mut post = self.find(uuid, id).await?;
        post.apply(draft);

        self.repo.update(post).await.map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => internal(other),
        })
    }

    /// Remove a post permanently. Deleting twice reports `NotFound` the second time.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let uuid = parse_id(id)?;
        self.repo.delete(uuid).await.map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => internal(other),
        })
    }

    async fn find(&self, uuid: Uuid, id: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(uuid)
            .await
            .map_err(internal)?
            .ok_or_else(|| not_found(id))
    }
}

fn parse_id(id: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id).map_err(|_| DomainError::InvalidIdentifier(id.to_string()))
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id: id.to_string(),
    }
}

fn internal(err: RepoError) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::Internal("unexpected missing row".to_string()),
        other => DomainError::Internal(other.to_string()),
    }
}
