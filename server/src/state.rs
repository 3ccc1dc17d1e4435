use std::sync::Arc;

use sitepeek::{Analyzer, ArchiveBuilder, Fetcher, HttpFetcher};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
    pub analyzer: Analyzer,
    pub archiver: ArchiveBuilder,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> sitepeek::Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.fetch)?);
        Ok(Self::with_fetcher(fetcher, config))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, config: &ServerConfig) -> Self {
        let analyzer = Analyzer::new(fetcher.clone());
        AppState {
            fetcher,
            archiver: ArchiveBuilder::new(analyzer.clone(), config.archive.clone()),
            analyzer,
        }
    }
}
