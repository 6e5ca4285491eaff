//! In-memory post store - used when no database is configured and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use corkboard_core::domain::{Post, PostDigest};
use corkboard_core::error::RepoError;
use corkboard_core::ports::PostRepository;

/// In-memory post store using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("post id already exists".to_string()));
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }

    async fn digests_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<PostDigest>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|post| post.created_at >= cutoff)
            .map(|post| PostDigest {
                title: Some(post.title.clone()),
                content: Some(post.content.clone()),
                created_at: post.created_at,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn post(title: &str, created_at: DateTime<Utc>) -> Post {
        let mut post = Post::new(
            title.to_string(),
            "content".to_string(),
            "anon".to_string(),
            "pw".to_string(),
        );
        post.created_at = created_at;
        post
    }

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("older", at(9))).await.unwrap();
        repo.insert(post("newer", at(15))).await.unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "newer");
        assert_eq!(posts[1].title, "older");
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let ghost = post("ghost", at(10));

        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("bye", at(10))).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(saved.id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn digests_since_is_an_inclusive_lower_bound() {
        let repo = InMemoryPostRepository::new();
        let cutoff = at(12);
        repo.insert(post("before", cutoff - Duration::seconds(1)))
            .await
            .unwrap();
        repo.insert(post("boundary", cutoff)).await.unwrap();
        repo.insert(post("after", cutoff + Duration::hours(2)))
            .await
            .unwrap();

        let digests = repo.digests_since(cutoff).await.unwrap();
        assert_eq!(digests.len(), 2);
        assert!(digests.iter().all(|d| d.created_at >= cutoff));
    }
}
