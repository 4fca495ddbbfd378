//! Codec configuration.

use serde::Deserialize;

/// How a present-but-empty message is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyBodyPolicy {
    /// An empty message is written as `Body: null`, same as an absent one.
    #[default]
    OmitEmpty,
    /// Only an absent message is written as `Body: null`; an empty message
    /// is written as `Body: ""`.
    AbsentOnly,
}

impl EmptyBodyPolicy {
    pub(crate) fn carries(self, empty: bool) -> bool {
        match self {
            EmptyBodyPolicy::OmitEmpty => !empty,
            EmptyBodyPolicy::AbsentOnly => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    #[serde(default)]
    pub empty_body: EmptyBodyPolicy,
}
