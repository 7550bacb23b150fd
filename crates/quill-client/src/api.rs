//! Thin HTTP wrapper over the post endpoints.

use reqwest::{Client, Response, StatusCode, Url};

use quill_shared::{ErrorResponse, PostPayload, PostResponse};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Post API calls. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PostsApi {
    client: Client,
    config: ClientConfig,
}

impl PostsApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.config.base_url)
    }

    /// `{base}/posts/{id}` with `id` encoded as a single path segment.
    fn post_url(&self, id: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Transport("API URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(["posts", id]);
        Ok(url)
    }

    /// GET /posts
    pub async fn list(&self) -> Result<Vec<PostResponse>, ClientError> {
        let res = self.client.get(self.posts_url()).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// GET /posts/{id}
    pub async fn get(&self, id: &str) -> Result<PostResponse, ClientError> {
        let res = self.client.get(self.post_url(id)?).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// POST /posts
    pub async fn create(&self, payload: &PostPayload) -> Result<PostResponse, ClientError> {
        let res = self.client.post(self.posts_url()).json(payload).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// PUT /posts/{id}
    pub async fn update(
        &self,
        id: &str,
        payload: &PostPayload,
    ) -> Result<PostResponse, ClientError> {
        let res = self.client.put(self.post_url(id)?).json(payload).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// DELETE /posts/{id}
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let res = self.client.delete(self.post_url(id)?).send().await?;
        check(res).await?;
        Ok(())
    }
}

async fn check(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let detail = res
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|problem| problem.detail);

    tracing::debug!(status = status.as_u16(), ?detail, "Post API rejected request");

    Err(ClientError::Rejected {
        status: status.as_u16(),
        detail,
    })
}
