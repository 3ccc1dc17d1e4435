pub mod analysis;
pub mod archive;
pub mod content_type;
pub mod design;
pub mod document;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod patterns;
pub mod resolver;
pub mod tree;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use analysis::Analyzer;
pub use archive::{ArchiveBuilder, ArchiveLimits, ArchiveReport};
pub use error::{Result, SitePeekError};
pub use fetcher::{FetchConfig, FetchedFile, Fetcher, HttpFetcher};
pub use tree::{PathNode, PathTree};

/// Everything learned about one page in a single analysis pass.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub html_source: String,
    pub css_files: Vec<String>,
    pub js_files: Vec<String>,
    pub images: Vec<String>,
    pub others: Vec<String>,
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub structure: PathTree,
    pub summary: Summary,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_css: usize,
    pub total_js: usize,
    pub total_images: usize,
    pub total_others: usize,
}

impl AnalysisResult {
    pub fn total_assets(&self) -> usize {
        self.summary.total_css
            + self.summary.total_js
            + self.summary.total_images
            + self.summary.total_others
    }
}
