//! Top-level facade crate for rpcwrap.
//!
//! Re-exports the envelope codec and the cache-aside helper so users can depend on a single crate.

pub mod core {
    pub use rpcwrap_core::*;
}

pub mod cache {
    pub use rpcwrap_cache::*;
}

pub use rpcwrap_cache::{CachedCaller, InMemoryStore, ResultStore};
pub use rpcwrap_core::{EnvelopeCodec, Payload, ResultPair, RpcStatus};
