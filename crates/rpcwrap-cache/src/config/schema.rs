use rpcwrap_core::CodecConfig;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    pub version: u32,

    #[serde(default)]
    pub codec: CodecConfig,

    /// Store error outcomes too, so failing calls are replayed from cache.
    #[serde(default = "default_cache_errors")]
    pub cache_errors: bool,

    /// Entries larger than this are not written back. `0` disables the limit.
    #[serde(default)]
    pub max_entry_bytes: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            version: 1,
            codec: CodecConfig::default(),
            cache_errors: default_cache_errors(),
            max_entry_bytes: 0,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if self.max_entry_bytes != 0 && self.max_entry_bytes < MIN_ENTRY_BYTES {
            return Err(ConfigError::Invalid(format!(
                "max_entry_bytes must be 0 or at least {MIN_ENTRY_BYTES}"
            )));
        }
        Ok(())
    }
}

/// Size of the smallest envelope, `{"Body":null,"Err":null}`.
const MIN_ENTRY_BYTES: usize = 24;

fn default_cache_errors() -> bool {
    true
}
