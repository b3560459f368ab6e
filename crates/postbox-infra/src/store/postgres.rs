//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{DbConn, DbErr, EntityTrait};

use postbox_core::domain::{NewPost, Post};
use postbox_core::error::StoreError;
use postbox_core::ports::PostStore;

use crate::database::entity::post::{self, Entity as PostEntity};

/// PostgreSQL-backed store.
///
/// Each operation is a single statement against the pool; there are no
/// multi-statement transactions. Ids come from the table's BIGSERIAL
/// sequence, which never reuses values.
///
/// Backend failures are propagated as `StoreError::Connection`/`Query`
/// instead of being collapsed into empty result sets, so the caller can
/// tell "no matches" from "the database is down".
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        let rows = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn store_err(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn create(&self, new: NewPost) -> Result<i64, StoreError> {
        let model: post::ActiveModel = new.into();
        let result = PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        tracing::debug!(post_id = result.last_insert_id, "Inserted post");
        Ok(result.last_insert_id)
    }

    async fn get(&self, id: i64) -> Result<Post, StoreError> {
        let found = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;

        found.map(Into::into).ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        tracing::debug!(rows = result.rows_affected, "Deleted all posts");
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Post>, StoreError> {
        self.fetch_all().await
    }

    // Tag and due-date matching happen in Rust over the fetched rows so the
    // semantics (every tag position; calendar date in the stored offset)
    // stay identical to the in-memory store.

    async fn by_tag(&self, tag: &str) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.fetch_all().await?;
        posts.retain(|p| p.has_tag(tag));
        Ok(posts)
    }

    async fn by_due(&self, year: i32, month: u32, day: u32) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.fetch_all().await?;
        posts.retain(|p| p.due_on(year, month, day));
        Ok(posts)
    }
}
