//! Error types for envelope encoding and decoding.

use thiserror::Error;

/// Stable, machine-readable error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Encode was not given exactly `[message, error]`.
    WrongArity,
    /// The message codec refused to serialize the payload.
    MessageSerializationFailed,
    /// The wrapper record could not be written.
    EnvelopeSerializationFailed,
    /// Envelope bytes are not a valid wrapper record.
    MalformedEnvelope,
    /// Body bytes do not decode as the target message type.
    TypeMismatch,
}

impl ErrorKind {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::WrongArity => "WRONG_ARITY",
            ErrorKind::MessageSerializationFailed => "MESSAGE_SERIALIZATION_FAILED",
            ErrorKind::EnvelopeSerializationFailed => "ENVELOPE_SERIALIZATION_FAILED",
            ErrorKind::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
        }
    }
}

/// Failure to produce an envelope. No bytes are emitted when this is returned.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("wrong arity: expected 2 parts (message, error), got {got}")]
    Arity { got: usize },
    #[error("wrong arity: parts must be ordered (message, error)")]
    PartOrder,
    #[error("message serialization failed: {0}")]
    Serialize(#[from] prost::EncodeError),
    #[error("envelope serialization failed: {0}")]
    Envelope(#[source] serde_json::Error),
}

impl EncodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::Arity { .. } | EncodeError::PartOrder => ErrorKind::WrongArity,
            EncodeError::Serialize(_) => ErrorKind::MessageSerializationFailed,
            EncodeError::Envelope(_) => ErrorKind::EnvelopeSerializationFailed,
        }
    }
}

/// Failure to reconstruct a result pair from envelope bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("type mismatch: body does not decode as {got}: {source}")]
    TypeMismatch {
        got: &'static str,
        #[source]
        source: prost::DecodeError,
    },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Malformed(_) => ErrorKind::MalformedEnvelope,
            DecodeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for callers that handle both directions.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encode(e) => e.kind(),
            Error::Decode(e) => e.kind(),
        }
    }
}
