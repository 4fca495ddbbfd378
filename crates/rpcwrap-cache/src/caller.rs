//! Cache-aside wrapper around an RPC call.

use std::future::Future;

use bytes::Bytes;
use rpcwrap_core::{EnvelopeCodec, Payload, ResultPair, RpcStatus};

use crate::config::CacheConfig;
use crate::store::ResultStore;

/// Where a call's outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Upstream,
}

/// Serves repeated calls from a [`ResultStore`], replaying both messages
/// and structured errors.
///
/// Store failures never fail the call: a failed read counts as a miss, a
/// failed write is logged and dropped.
pub struct CachedCaller<S> {
    store: S,
    codec: EnvelopeCodec,
    cache_errors: bool,
    max_entry_bytes: usize,
}

impl<S: ResultStore> CachedCaller<S> {
    pub fn new(store: S, cfg: &CacheConfig) -> Self {
        Self {
            store,
            codec: EnvelopeCodec::new(cfg.codec),
            cache_errors: cfg.cache_errors,
            max_entry_bytes: cfg.max_entry_bytes,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up `key`. A missing, unreadable, or corrupt entry is `None`.
    pub async fn lookup<M: Payload>(&self, key: &str) -> Option<ResultPair<M>> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(%key, error = %e, "cache read failed; treating as miss");
                return None;
            }
        };
        match self.codec.decode::<M>(&raw) {
            Ok(pair) => Some(pair),
            Err(e) => {
                tracing::warn!(%key, kind = e.kind().as_str(), error = %e, "cached entry unreadable; treating as miss");
                None
            }
        }
    }

    /// Encode and write back one outcome. Returns whether it was stored.
    pub async fn remember<M: Payload>(&self, key: &str, outcome: &Result<M, RpcStatus>) -> bool {
        if outcome.is_err() && !self.cache_errors {
            return false;
        }
        let bytes = match self.codec.encode_result(outcome) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(%key, kind = e.kind().as_str(), error = %e, "encode failed; not caching");
                return false;
            }
        };
        if self.max_entry_bytes != 0 && bytes.len() > self.max_entry_bytes {
            tracing::debug!(%key, len = bytes.len(), "entry over size limit; not caching");
            return false;
        }
        match self.store.put(key, Bytes::from(bytes)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%key, error = %e, "cache write failed");
                false
            }
        }
    }

    /// Return the cached outcome for `key`, or run `rpc` and cache its outcome.
    pub async fn call<M, F>(&self, key: &str, rpc: F) -> (Result<M, RpcStatus>, Source)
    where
        M: Payload,
        F: Future<Output = Result<M, RpcStatus>>,
    {
        if let Some(pair) = self.lookup::<M>(key).await {
            tracing::debug!(%key, "cache hit");
            return (pair.into_result(), Source::Cache);
        }

        tracing::debug!(%key, "cache miss");
        let outcome = rpc.await;
        self.remember(key, &outcome).await;
        (outcome, Source::Upstream)
    }
}
