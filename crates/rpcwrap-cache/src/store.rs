use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::error::StoreError;

/// Byte store the cache reads envelopes from and writes them to.
///
/// Keying, TTL, and eviction are the implementer's business.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
    async fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError>;
}

/// Process-local store backed by a `DashMap`.
#[derive(Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Bytes>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<Bytes> {
        self.entries.remove(key).map(|(_, v)| v)
    }

    pub fn peek(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ResultStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        Ok(self.peek(key))
    }

    async fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

#[async_trait]
impl<S: ResultStore + ?Sized> ResultStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        (**self).put(key, value).await
    }
}
