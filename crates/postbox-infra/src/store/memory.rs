//! In-memory post store - the default when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use postbox_core::domain::{NewPost, Post};
use postbox_core::error::StoreError;
use postbox_core::ports::PostStore;

struct Inner {
    posts: HashMap<i64, Post>,
    next_id: i64,
}

/// In-memory store: a HashMap plus an id counter behind one async mutex.
///
/// The single lock covers both the map and the counter, so every operation
/// is atomic with respect to every other. Nothing blocks on I/O while the
/// lock is held. Note: data is lost on process restart.
pub struct MemoryPostStore {
    inner: Mutex<Inner>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                posts: HashMap::new(),
                next_id: 0,
            }),
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, new: NewPost) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id;
        inner.posts.insert(id, Post::from_new(id, new));
        // Incremented exactly once per create, never rewound. Deleted ids
        // are not handed out again.
        inner.next_id += 1;

        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Post, StoreError> {
        let inner = self.inner.lock().await;
        inner
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        // The counter stays put so ids are never recycled across a wipe.
        inner.posts.clear();
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.posts.values().cloned().collect())
    }

    async fn by_tag(&self, tag: &str) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .posts
            .values()
            .filter(|p| p.has_tag(tag))
            .cloned()
            .collect())
    }

    async fn by_due(&self, year: i32, month: u32, day: u32) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .posts
            .values()
            .filter(|p| p.due_on(year, month, day))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn new_post(author: &str, text: &str, tags: &[&str], due: &str) -> NewPost {
        NewPost {
            author: author.to_string(),
            text: text.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            due: due.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_increase_from_zero() {
        let store = MemoryPostStore::new();
        for expected in 0..5 {
            let id = store
                .create(new_post("a", "t", &[], "2024-01-01T00:00:00Z"))
                .await
                .unwrap();
            assert_eq!(id, expected);
        }
    }

    #[tokio::test]
    async fn test_get_after_create_returns_equal_fields() {
        let store = MemoryPostStore::new();
        let id = store
            .create(new_post("alice", "hello", &["go", "rest"], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        let post = store.get(id).await.unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.author, "alice");
        assert_eq!(post.text, "hello");
        assert_eq!(post.tags, vec!["go", "rest"]);
        assert_eq!(post.due.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryPostStore::new();
        match store.get(42).await {
            Err(StoreError::NotFound { id }) => assert_eq!(id, 42),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = MemoryPostStore::new();
        let id = store
            .create(new_post("a", "t", &[], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        store.delete(id).await.unwrap();
        assert!(matches!(
            store.get(id).await,
            Err(StoreError::NotFound { .. })
        ));
        // A second delete of the same id reports NotFound again.
        assert!(matches!(
            store.delete(id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_all_keeps_counter() {
        let store = MemoryPostStore::new();
        for _ in 0..3 {
            store
                .create(new_post("a", "t", &[], "2024-01-01T00:00:00Z"))
                .await
                .unwrap();
        }

        store.delete_all().await.unwrap();
        assert!(store.all().await.unwrap().is_empty());

        // Ids continue past the highest ever issued, even after a wipe.
        let id = store
            .create(new_post("a", "t", &[], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_by_tag_exact_membership() {
        let store = MemoryPostStore::new();
        let a = store
            .create(new_post("a", "first", &["go", "rest"], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .create(new_post("b", "second", &["rust"], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        // Duplicate tag: the post must still appear exactly once.
        let c = store
            .create(new_post("c", "third", &["rest", "rest"], "2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        let mut ids: Vec<i64> = store
            .by_tag("rest")
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![a, c]);

        assert!(store.by_tag("missing").await.unwrap().is_empty());
        // Exact match only, no substring matching.
        assert!(store.by_tag("re").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_by_due_ignores_time_of_day() {
        let store = MemoryPostStore::new();
        let id = store
            .create(new_post("a", "t", &[], "2024-03-05T23:59:00Z"))
            .await
            .unwrap();
        store
            .create(new_post("b", "u", &[], "2024-04-01T00:00:00Z"))
            .await
            .unwrap();

        let due = store.by_due(2024, 3, 5).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, id);

        assert!(store.by_due(2024, 3, 6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_distinct_ids() {
        let store = Arc::new(MemoryPostStore::new());
        let n = 32;

        let mut handles = Vec::with_capacity(n);
        for i in 0..n {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(new_post("a", &format!("post {i}"), &[], "2024-01-01T00:00:00Z"))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        // No lost updates: every create got its own id and its own entry.
        assert_eq!(ids.len(), n);
        assert_eq!(store.all().await.unwrap().len(), n);
        for id in ids {
            store.get(id).await.unwrap();
        }
    }
}
