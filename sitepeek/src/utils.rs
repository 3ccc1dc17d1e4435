use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// Last path segment of `url` with any query string removed, or `default`
/// when that leaves nothing.
pub fn file_name_from_url(url: &str, default: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or("");
    let name = last.split('?').next().unwrap_or("");
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    info!("Wrote {}", path.display());
    Ok(())
}

pub fn save_bytes(content: &[u8], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    info!("Wrote {}", path.display());
    Ok(())
}
