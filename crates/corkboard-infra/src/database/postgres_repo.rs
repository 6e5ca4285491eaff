//! PostgreSQL post store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use corkboard_core::domain::{Post, PostDigest};
use corkboard_core::error::RepoError;
use corkboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Columns fetched for the statistics sweep. Nullable reads so a malformed
/// row degrades to zero characters instead of aborting the mapping.
#[derive(Debug, FromQueryResult)]
struct DigestRow {
    title: Option<String>,
    content: Option<String>,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(model.map(Into::into))
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let msg = e.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint("post id already exists".to_string())
            } else {
                RepoError::Query(msg)
            }
        })?;

        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn digests_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<PostDigest>, RepoError> {
        tracing::debug!(since = %cutoff, "Fetching post digests for statistics");

        let rows = PostEntity::find()
            .select_only()
            .column(post::Column::Title)
            .column(post::Column::Content)
            .column(post::Column::CreatedAt)
            .filter(post::Column::CreatedAt.gte(cutoff))
            .into_model::<DigestRow>()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows
            .into_iter()
            .map(|row| PostDigest {
                title: row.title,
                content: row.content,
                created_at: row.created_at.into(),
            })
            .collect())
    }
}
