use std::fs;
use std::path::Path;

use eyre::{eyre, OptionExt};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::utils::parse_pubkey;

pub const DEFAULT_POOL_CONFIG_FILE: &str = "buffer-pool-config.json";

/// Persisted record of every account the pool has provisioned. Written by
/// `setup`/`add`, read back at `watch` startup to enumerate buffer handles.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PoolConfig {
    pub queue: Option<String>,
    pub crank: Option<String>,
    pub oracle: Option<String>,
    pub oracle_permission: Option<String>,
    #[serde(default)]
    pub buffers: Vec<String>,
}

impl PoolConfig {
    pub fn load(path: &Path) -> eyre::Result<PoolConfig> {
        if !path.exists() {
            return Ok(PoolConfig::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn queue_pubkey(&self) -> eyre::Result<Pubkey> {
        let queue = self
            .queue
            .as_deref()
            .ok_or_eyre("Queue missing from config, run \"buffer-pool setup\" first")?;
        parse_pubkey(queue).ok_or_eyre("Invalid queue pubkey in config")
    }

    pub fn buffer_handles(&self) -> eyre::Result<Vec<Pubkey>> {
        self.buffers
            .iter()
            .map(|b| parse_pubkey(b).ok_or(eyre!("Invalid buffer pubkey in config: {b}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_poolconfig_roundtrip() {
        let tmpdir = TempDir::with_prefix("bufferpool-tests-").unwrap();
        let path = tmpdir.path().join("pool.json");

        let mut config = PoolConfig::default();
        assert!(config.queue_pubkey().is_err());

        config.queue = Some(Pubkey::new_unique().to_string());
        config.buffers.push(Pubkey::new_unique().to_string());
        config.save(&path).unwrap();

        let loaded = PoolConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.buffer_handles().unwrap().len(), 1);
        assert!(loaded.queue_pubkey().is_ok());
    }

    #[test]
    fn test_poolconfig_missing_file_is_default() {
        let tmpdir = TempDir::with_prefix("bufferpool-tests-").unwrap();
        let loaded = PoolConfig::load(&tmpdir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, PoolConfig::default());
    }

    #[test]
    fn test_poolconfig_rejects_bad_buffer_key() {
        let config = PoolConfig {
            buffers: vec!["garbage".to_string()],
            ..Default::default()
        };
        assert!(config.buffer_handles().is_err());
    }
}
