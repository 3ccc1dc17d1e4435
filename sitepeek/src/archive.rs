//! Bulk download of a page and its assets into one zip file.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::utils::file_name_from_url;

pub const PAGE_ENTRY: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Css,
    Js,
    Image,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [Self::Css, Self::Js, Self::Image, Self::Other];

    pub fn dir(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
            Self::Image => "images",
            Self::Other => "others",
        }
    }

    /// Entry name used when the URL has no last path segment.
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Css => "style.css",
            Self::Js => "script.js",
            Self::Image => "image.jpg",
            Self::Other => "file",
        }
    }
}

/// Per-category caps and fetch concurrency for one archive.
#[derive(Debug, Clone)]
pub struct ArchiveLimits {
    pub css: usize,
    pub js: usize,
    pub images: usize,
    pub others: usize,
    pub concurrency: usize,
}

impl Default for ArchiveLimits {
    fn default() -> Self {
        Self {
            css: 20,
            js: 20,
            images: 30,
            others: 10,
            concurrency: 5,
        }
    }
}

impl ArchiveLimits {
    pub fn cap(&self, category: AssetCategory) -> usize {
        match category {
            AssetCategory::Css => self.css,
            AssetCategory::Js => self.js,
            AssetCategory::Image => self.images,
            AssetCategory::Other => self.others,
        }
    }
}

/// Result of fetching one asset.
#[derive(Debug)]
pub enum FileOutcome {
    Fetched {
        url: String,
        entry: String,
        body: Vec<u8>,
    },
    Failed {
        url: String,
        reason: String,
    },
}

/// The finished archive plus what went into it.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    pub bytes: Vec<u8>,
    /// Entry names, `index.html` first.
    pub written: Vec<String>,
    /// `(url, reason)` for every asset left out.
    pub omitted: Vec<(String, String)>,
}

#[derive(Clone)]
pub struct ArchiveBuilder {
    analyzer: Analyzer,
    limits: ArchiveLimits,
}

impl ArchiveBuilder {
    pub fn new(analyzer: Analyzer, limits: ArchiveLimits) -> Self {
        Self { analyzer, limits }
    }

    /// Fetch `page_url`, then up to the per-category cap of each asset kind,
    /// and zip everything that could be retrieved.
    ///
    /// A missing asset never fails the call; only the page fetch or the
    /// archive itself can.
    pub async fn build_archive(&self, page_url: &str) -> Result<ArchiveReport> {
        let page = self.analyzer.fetch_and_extract(page_url).await?;
        let assets = &page.assets;

        let mut outcomes = Vec::new();
        for category in AssetCategory::ALL {
            let urls = match category {
                AssetCategory::Css => &assets.css,
                AssetCategory::Js => &assets.js,
                AssetCategory::Image => &assets.images,
                AssetCategory::Other => &assets.others,
            };
            let selected: Vec<String> = urls
                .iter()
                .take(self.limits.cap(category))
                .cloned()
                .collect();
            outcomes.extend(self.fetch_category(category, selected).await);
        }

        let report = write_archive(&page.html, outcomes)?;
        info!(
            "Built archive for {}: {} entries, {} omitted, {} bytes",
            page.url,
            report.written.len(),
            report.omitted.len(),
            report.bytes.len()
        );
        Ok(report)
    }

    async fn fetch_category(&self, category: AssetCategory, urls: Vec<String>) -> Vec<FileOutcome> {
        let fetcher: Arc<dyn Fetcher> = self.analyzer.fetcher().clone();

        stream::iter(urls)
            .map(move |url| {
                let fetcher = fetcher.clone();
                async move {
                    match fetcher.get(&url).await {
                        Ok(file) => {
                            let name = file_name_from_url(&url, category.default_name());
                            FileOutcome::Fetched {
                                entry: format!("{}/{}", category.dir(), name),
                                url,
                                body: file.body,
                            }
                        }
                        Err(e) => FileOutcome::Failed {
                            url,
                            reason: e.to_string(),
                        },
                    }
                }
            })
            .buffered(self.limits.concurrency.max(1))
            .collect()
            .await
    }
}

/// `entry` itself, or `stem-N.ext` with the first `N` not yet taken.
fn unique_entry(taken: &HashSet<String>, entry: &str) -> String {
    if !taken.contains(entry) {
        return entry.to_string();
    }

    let (dir, name) = entry.rsplit_once('/').unwrap_or(("", entry));
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => name.split_at(dot),
        _ => (name, ""),
    };
    let prefix = if dir.is_empty() {
        String::new()
    } else {
        format!("{}/", dir)
    };

    (1..)
        .map(|n| format!("{}{}-{}{}", prefix, stem, n, ext))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| entry.to_string())
}

/// Zip the page source and every fetched asset. Failed fetches and entries
/// that cannot be written are recorded as omissions.
pub fn write_archive(html: &str, outcomes: Vec<FileOutcome>) -> Result<ArchiveReport> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let mut report = ArchiveReport::default();
    let mut names = HashSet::new();

    zip.start_file(PAGE_ENTRY, options)?;
    zip.write_all(html.as_bytes())?;
    names.insert(PAGE_ENTRY.to_string());
    report.written.push(PAGE_ENTRY.to_string());

    for outcome in outcomes {
        match outcome {
            FileOutcome::Fetched { url, entry, body } => {
                let entry = unique_entry(&names, &entry);
                let written = zip
                    .start_file(entry.as_str(), options)
                    .map_err(|e| e.to_string())
                    .and_then(|_| zip.write_all(&body).map_err(|e| e.to_string()));
                match written {
                    Ok(()) => {
                        names.insert(entry.clone());
                        report.written.push(entry);
                    }
                    Err(reason) => {
                        warn!("Failed to write {} to archive: {}", url, reason);
                        report.omitted.push((url, reason));
                    }
                }
            }
            FileOutcome::Failed { url, reason } => {
                warn!("Failed to download {}: {}", url, reason);
                report.omitted.push((url, reason));
            }
        }
    }

    report.bytes = zip.finish()?.into_inner();
    Ok(report)
}
