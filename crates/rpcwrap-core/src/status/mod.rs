//! Status model and the translator between arbitrary errors and status records.
//!
//! Every error that enters an envelope collapses to one [`StatusRecord`]; on
//! the way out the record is materialized as an [`RpcStatus`], a structured
//! error value carrying the same code, message, and details.

pub mod record;
mod translate;

use bytes::Bytes;
use prost::Message;
use thiserror::Error;

pub use record::{Detail, StatusRecord, TYPE_URL_PREFIX};
pub use tonic::Code;
pub use translate::{classify, materialize, IntoStatusRecord};

/// Structured RPC error rebuilt from (or destined for) an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rpc error: code = {:?} desc = {}", Code::from_i32(.record.code), .record.message)]
pub struct RpcStatus {
    record: StatusRecord,
}

impl RpcStatus {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            record: StatusRecord::new(code as i32, message, Vec::new()),
        }
    }

    /// Attach opaque details in order.
    pub fn with_details(mut self, details: impl IntoIterator<Item = Detail>) -> Self {
        self.record.details.extend(details);
        self
    }

    /// Pack a typed message and append it as a detail.
    pub fn add_detail<M: prost::Name>(mut self, msg: &M) -> Self {
        self.record.details.push(Detail::pack(msg));
        self
    }

    /// Typed code; integers outside the known code space read as `Unknown`.
    pub fn code(&self) -> Code {
        Code::from_i32(self.record.code)
    }

    /// Raw numeric code as stored on the wire.
    pub fn raw_code(&self) -> i32 {
        self.record.code
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    pub fn details(&self) -> &[Detail] {
        &self.record.details
    }

    /// First detail of type `M`, decoded.
    pub fn unpack_detail<M: prost::Name + Default>(&self) -> Option<Result<M, prost::DecodeError>> {
        self.record.details.iter().find_map(Detail::unpack::<M>)
    }

    pub fn record(&self) -> &StatusRecord {
        &self.record
    }

    pub fn into_record(self) -> StatusRecord {
        self.record
    }
}

impl From<StatusRecord> for RpcStatus {
    fn from(record: StatusRecord) -> Self {
        Self { record }
    }
}

impl From<RpcStatus> for tonic::Status {
    fn from(s: RpcStatus) -> Self {
        let code = s.code();
        if s.record.details.is_empty() {
            return tonic::Status::new(code, s.record.message);
        }
        // Details ride along as an encoded google.rpc.Status.
        let details = Bytes::from(s.record.encode_to_vec());
        tonic::Status::with_details(code, s.record.message, details)
    }
}

impl From<&tonic::Status> for RpcStatus {
    fn from(s: &tonic::Status) -> Self {
        Self {
            record: translate::from_tonic(s),
        }
    }
}

impl From<tonic::Status> for RpcStatus {
    fn from(s: tonic::Status) -> Self {
        Self::from(&s)
    }
}
