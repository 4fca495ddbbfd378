//! Envelope codec: `(message, error)` <-> envelope bytes.

use std::error::Error as StdError;

use crate::config::{CodecConfig, EmptyBodyPolicy};
use crate::error::{DecodeError, EncodeError};
use crate::payload::Payload;
use crate::protocol::Envelope;
use crate::status::{self, RpcStatus};

/// One positional input to [`EnvelopeCodec::encode_parts`].
#[derive(Debug)]
pub enum Part<'a, M> {
    Message(Option<&'a M>),
    Error(Option<&'a (dyn StdError + 'static)>),
}

/// A decoded result. Both halves may be present at once.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPair<M> {
    pub message: M,
    pub error: Option<RpcStatus>,
}

impl<M> ResultPair<M> {
    /// Collapse to a `Result`; the error wins when both are present.
    pub fn into_result(self) -> Result<M, RpcStatus> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.message),
        }
    }
}

/// Stateless codec; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeCodec {
    config: CodecConfig,
}

impl EnvelopeCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn empty_body_policy(&self) -> EmptyBodyPolicy {
        self.config.empty_body
    }

    /// Encode a result pair into envelope bytes.
    pub fn encode<M: Payload>(
        &self,
        message: Option<&M>,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<Vec<u8>, EncodeError> {
        let body = match message {
            Some(m) if self.config.empty_body.carries(m.is_empty_payload()) => {
                let mut buf = Vec::with_capacity(m.encoded_len());
                m.encode(&mut buf)?;
                Some(buf)
            }
            _ => None,
        };
        let status = error.map(status::classify);

        let env = Envelope { body, status };
        let out = env.to_vec()?;
        tracing::debug!(
            msg_type = M::type_name(),
            body_len = env.body.as_ref().map(Vec::len),
            code = env.status.as_ref().map(|s| s.code),
            "envelope encoded"
        );
        Ok(out)
    }

    /// Typed convenience over [`encode`](Self::encode).
    pub fn encode_status<M: Payload>(
        &self,
        message: Option<&M>,
        error: Option<&RpcStatus>,
    ) -> Result<Vec<u8>, EncodeError> {
        self.encode(message, error.map(|e| e as &(dyn StdError + 'static)))
    }

    /// Encode the outcome of a call: `Ok` carries the message, `Err` the error.
    pub fn encode_result<M, E>(&self, result: &Result<M, E>) -> Result<Vec<u8>, EncodeError>
    where
        M: Payload,
        E: StdError + 'static,
    {
        match result {
            Ok(m) => self.encode(Some(m), None),
            Err(e) => self.encode::<M>(None, Some(e)),
        }
    }

    /// Positional entry point: requires exactly `[Message, Error]`.
    pub fn encode_parts<M: Payload>(&self, parts: &[Part<'_, M>]) -> Result<Vec<u8>, EncodeError> {
        match parts {
            [Part::Message(m), Part::Error(e)] => self.encode(*m, *e),
            [_, _] => {
                tracing::warn!("encode rejected: parts out of order");
                Err(EncodeError::PartOrder)
            }
            _ => {
                tracing::warn!(got = parts.len(), "encode rejected: wrong arity");
                Err(EncodeError::Arity { got: parts.len() })
            }
        }
    }

    /// Decode envelope bytes into `target` and return the carried error.
    ///
    /// With no body, `target` is reset to `M::default()`. On a body decode
    /// failure `target` is left untouched.
    pub fn decode_into<M: Payload>(
        &self,
        bytes: &[u8],
        target: &mut M,
    ) -> Result<Option<RpcStatus>, DecodeError> {
        let env = Envelope::from_slice(bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "envelope decode failed");
        })?;

        match env.body {
            Some(body) => {
                *target = M::decode(body.as_slice()).map_err(|source| {
                    tracing::warn!(msg_type = M::type_name(), error = %source, "body decode failed");
                    DecodeError::TypeMismatch {
                        got: M::type_name(),
                        source,
                    }
                })?;
            }
            None => *target = M::default(),
        }

        let error = env.status.map(status::materialize);
        tracing::debug!(
            msg_type = M::type_name(),
            code = error.as_ref().map(RpcStatus::raw_code),
            "envelope decoded"
        );
        Ok(error)
    }

    /// Decode into a fresh `M`.
    pub fn decode<M: Payload>(&self, bytes: &[u8]) -> Result<ResultPair<M>, DecodeError> {
        let mut message = M::default();
        let error = self.decode_into(bytes, &mut message)?;
        Ok(ResultPair { message, error })
    }
}
