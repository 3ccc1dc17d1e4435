use tracing::debug;
use url::Url;

use crate::error::{Result, SitePeekError};

/// Resolve `reference` against `base` the way a browser would (RFC 3986).
///
/// Returns `None` when the reference cannot be turned into an absolute URL;
/// callers drop it and carry on with the rest of the document.
pub fn resolve(base: &Url, reference: &str) -> Option<String> {
    match base.join(reference) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            debug!("Skipping reference {:?} against {}: {}", reference, base, e);
            None
        }
    }
}

/// Parse a page URL supplied by a caller. Only http and https are accepted.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| SitePeekError::InvalidInput(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        other => Err(SitePeekError::InvalidInput(format!(
            "{}: unsupported scheme or missing host ({})",
            raw, other
        ))),
    }
}
