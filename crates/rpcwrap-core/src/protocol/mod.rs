//! Envelope wire format.
//!
//! The wrapper is a JSON record with two nullable fields:
//! `{"Body": <base64 | null>, "Err": <status record | null>}`.
//! Parsing never panics: malformed input is reported as `DecodeError`.

pub mod b64;
pub mod envelope;

pub use envelope::Envelope;
