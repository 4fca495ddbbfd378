//! Cache config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::Result;

pub use schema::CacheConfig;

pub fn load_from_file(path: &str) -> Result<CacheConfig> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CacheConfig> {
    let cfg: CacheConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}
