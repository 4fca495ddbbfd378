use std::error::Error as StdError;

use prost::Message;

use super::{Code, RpcStatus, StatusRecord};

/// Errors that know their own status record without runtime inspection.
pub trait IntoStatusRecord {
    fn into_status_record(self) -> StatusRecord;
}

impl IntoStatusRecord for StatusRecord {
    fn into_status_record(self) -> StatusRecord {
        self
    }
}

impl IntoStatusRecord for RpcStatus {
    fn into_status_record(self) -> StatusRecord {
        self.into_record()
    }
}

impl IntoStatusRecord for tonic::Status {
    fn into_status_record(self) -> StatusRecord {
        from_tonic(&self)
    }
}

/// Normalize any error into a status record. Total: never fails.
///
/// Structured statuses ([`RpcStatus`], [`tonic::Status`]) pass through
/// unchanged. A status found further down the `source()` chain keeps its
/// code and details but takes the outer error's text as message. Anything
/// else becomes `Unknown` with the error's display text.
pub fn classify(err: &(dyn StdError + 'static)) -> StatusRecord {
    if let Some(record) = structured(err) {
        return record;
    }

    let mut cur = err.source();
    while let Some(e) = cur {
        if let Some(mut record) = structured(e) {
            record.message = err.to_string();
            return record;
        }
        cur = e.source();
    }

    StatusRecord::new(Code::Unknown as i32, err.to_string(), Vec::new())
}

/// Rebuild a structured error from a record. Exact inverse of [`classify`]
/// for structured inputs.
pub fn materialize(record: StatusRecord) -> RpcStatus {
    RpcStatus::from(record)
}

fn structured(err: &(dyn StdError + 'static)) -> Option<StatusRecord> {
    if let Some(s) = err.downcast_ref::<RpcStatus>() {
        return Some(s.record().clone());
    }
    err.downcast_ref::<tonic::Status>().map(from_tonic)
}

pub(super) fn from_tonic(s: &tonic::Status) -> StatusRecord {
    let details = if s.details().is_empty() {
        Vec::new()
    } else {
        match StatusRecord::decode(s.details()) {
            Ok(inner) => inner.details,
            Err(e) => {
                tracing::debug!(error = %e, "tonic status details are not a google.rpc.Status; dropping");
                Vec::new()
            }
        }
    };
    StatusRecord::new(s.code() as i32, s.message(), details)
}
