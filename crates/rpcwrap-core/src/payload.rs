//! The message capability the codec requires.

use prost::Message;

/// A protobuf message that can travel as an envelope body.
///
/// Implemented for every `prost::Message + Default`; the default value is
/// the "zero" instance a decode falls back to when no body was carried.
pub trait Payload: Message + Default {
    /// True when the message equals its type's default value, i.e. it
    /// encodes to zero bytes under proto3 rules.
    fn is_empty_payload(&self) -> bool {
        self.encoded_len() == 0
    }

    /// Concrete type name, for diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Message + Default> Payload for T {}
