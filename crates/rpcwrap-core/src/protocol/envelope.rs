//! Envelope record (JSON).
//!
//! Unknown top-level fields are ignored so newer writers stay readable.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError};
use crate::protocol::b64;
use crate::status::StatusRecord;

/// Wire-level wrapper around one result pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Serialized message bytes. `None` means no message was carried;
    /// `Some(vec![])` means an empty message was carried explicitly.
    #[serde(rename = "Body", default, with = "b64::option")]
    pub body: Option<Vec<u8>>,
    /// Status record of the error, if any.
    #[serde(rename = "Err", default)]
    pub status: Option<StatusRecord>,
}

impl Envelope {
    pub fn to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(EncodeError::Envelope)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
