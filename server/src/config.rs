use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sitepeek::{ArchiveLimits, FetchConfig};

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub allowed_origins: Vec<String>,
    pub fetch: FetchConfig,
    pub archive: ArchiveLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            allowed_origins: DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
            fetch: FetchConfig::default(),
            archive: ArchiveLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Read `SITEPEEK_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("SITEPEEK_ADDR") {
            config.addr = addr;
        }

        if let Some(origins) = lookup("SITEPEEK_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(secs) = lookup("SITEPEEK_FETCH_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("SITEPEEK_FETCH_TIMEOUT_SECS must be a whole number of seconds")?;
            config.fetch.timeout = Duration::from_secs(secs);
        }

        if let Some(n) = lookup("SITEPEEK_ARCHIVE_CONCURRENCY") {
            config.archive.concurrency = n
                .parse()
                .context("SITEPEEK_ARCHIVE_CONCURRENCY must be a positive integer")?;
        }

        Ok(config)
    }
}
