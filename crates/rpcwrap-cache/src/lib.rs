//! rpcwrap cache: cache-aside helper built on the envelope codec.
//!
//! The store is an interface; the crate only ships an in-memory reference
//! implementation. Keying, TTL, and eviction stay with the store.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod caller;
pub mod config;
pub mod error;
pub mod store;

pub use caller::{CachedCaller, Source};
pub use config::CacheConfig;
pub use error::{ConfigError, Result, StoreError};
pub use store::{InMemoryStore, ResultStore};
