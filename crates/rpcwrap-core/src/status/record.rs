//! Status record: the structured error shape stored inside an envelope.
//!
//! Field layout mirrors `google.rpc.Status`, so the same type serves both
//! the JSON wrapper and the protobuf bytes gRPC carries in status details.

use serde::{Deserialize, Deserializer, Serialize};

use crate::protocol::b64;

/// URL prefix used when packing typed detail messages.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// One opaque detail payload (`google.protobuf.Any` wire shape).
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct Detail {
    /// Type identifier, e.g. `type.googleapis.com/demo.ErrMsg`.
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub type_url: String,
    /// Serialized message bytes, passed through untouched. Omitted from
    /// JSON when empty (e.g. a `google.protobuf.Empty` detail).
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "b64", skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<u8>,
}

impl Detail {
    pub fn new(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }

    /// Pack a typed message under `type.googleapis.com/<full name>`.
    pub fn pack<M: prost::Name>(msg: &M) -> Self {
        Self::new(
            format!("{TYPE_URL_PREFIX}{}", M::full_name()),
            msg.encode_to_vec(),
        )
    }

    /// Whether this detail holds a message of type `M`, ignoring the URL host part.
    pub fn is<M: prost::Name>(&self) -> bool {
        let name = self
            .type_url
            .rsplit_once('/')
            .map_or(self.type_url.as_str(), |(_, n)| n);
        name == M::full_name()
    }

    /// Decode the payload as `M`. Returns `None` when the type identifier does not match.
    pub fn unpack<M: prost::Name + Default>(&self) -> Option<Result<M, prost::DecodeError>> {
        self.is::<M>().then(|| M::decode(self.value.as_slice()))
    }
}

impl From<prost_types::Any> for Detail {
    fn from(any: prost_types::Any) -> Self {
        Self::new(any.type_url, any.value)
    }
}

impl From<Detail> for prost_types::Any {
    fn from(d: Detail) -> Self {
        prost_types::Any {
            type_url: d.type_url,
            value: d.value,
        }
    }
}

/// `{code, message, details}`. Zero/empty fields are omitted from JSON,
/// matching the canonical status encoder.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Raw numeric code; kept even if it falls outside the known code space.
    #[prost(int32, tag = "1")]
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "is_zero")]
    pub code: i32,
    #[prost(string, tag = "2")]
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[prost(message, repeated, tag = "3")]
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
}

impl StatusRecord {
    pub fn new(code: i32, message: impl Into<String>, details: Vec<Detail>) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

/// Explicit `null` reads as the zero value, same as a missing key.
fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
