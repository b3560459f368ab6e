use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::StoreError;

/// Post store capability - the full operation set over the post collection.
///
/// Handlers depend on `Arc<dyn PostStore>` only; the concrete variant
/// (in-memory or database-backed) is chosen at startup. Every operation is
/// atomic from the caller's perspective and callers always receive owned
/// copies, never references into store internals.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post and return its assigned id.
    ///
    /// Ids are strictly increasing and never reused, even after deletions.
    /// The store performs no validation; that is the caller's job.
    async fn create(&self, new: NewPost) -> Result<i64, StoreError>;

    /// Fetch a single post by id.
    async fn get(&self, id: i64) -> Result<Post, StoreError>;

    /// Remove a single post by id. A repeated delete of the same id
    /// reports `NotFound` again.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Remove every post. The id counter is not reset, so later creates
    /// keep issuing fresh ids.
    async fn delete_all(&self) -> Result<(), StoreError>;

    /// Snapshot of every stored post, in unspecified order.
    async fn all(&self) -> Result<Vec<Post>, StoreError>;

    /// Every post whose tag list contains an exact match for `tag`.
    /// A post matching on several tag positions appears once.
    async fn by_tag(&self, tag: &str) -> Result<Vec<Post>, StoreError>;

    /// Every post due on the given calendar day, in the post's own
    /// timezone. Time-of-day is ignored.
    async fn by_due(&self, year: i32, month: u32, day: u32) -> Result<Vec<Post>, StoreError>;
}
