use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, PostDigest};
use crate::error::RepoError;

/// Post store port - the full persistence surface the HTTP layer consumes.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a freshly created post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Rewrite an edited post. Fails with [`RepoError::NotFound`] if the row
    /// no longer exists.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. Fails with [`RepoError::NotFound`] when nothing was
    /// deleted.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Projections of every post created at or after `cutoff` (inclusive,
    /// no upper bound). Feeds the weekly statistics aggregation.
    async fn digests_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<PostDigest>, RepoError>;
}
