//! rpcwrap core: envelope codec for cached RPC results.
//!
//! Encodes a `(message, error)` pair into a portable byte envelope and back,
//! so an RPC outcome can sit under an opaque key in an external store and be
//! replayed with its structured status (code, message, details) intact.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed envelopes and mismatched bodies surface as `DecodeError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod config;
pub mod error;
pub mod payload;
pub mod protocol;
pub mod status;

pub use codec::{EnvelopeCodec, Part, ResultPair};
pub use config::{CodecConfig, EmptyBodyPolicy};
pub use error::{DecodeError, EncodeError, Error, ErrorKind, Result};
pub use payload::Payload;
pub use status::{classify, materialize, Code, Detail, RpcStatus, StatusRecord};
