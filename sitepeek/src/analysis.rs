use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::error::Result;
use crate::extractor::{Extractor, PageAssets};
use crate::fetcher::Fetcher;
use crate::resolver::parse_page_url;
use crate::tree::build_tree;
use crate::{AnalysisResult, Summary};

/// A fetched page together with everything extracted from it.
pub struct ExtractedPage {
    pub url: Url,
    pub html: String,
    pub assets: PageAssets,
}

/// Fetches a page and runs every extractor over it.
#[derive(Clone)]
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
}

impl Analyzer {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Arc<dyn Fetcher> {
        &self.fetcher
    }

    /// Fetch `page_url` and extract its assets and design tokens.
    ///
    /// Parsing runs on the blocking pool; the parsed document never crosses
    /// an await point.
    pub async fn fetch_and_extract(&self, page_url: &str) -> Result<ExtractedPage> {
        let url = parse_page_url(page_url)?;
        let html = self.fetcher.get_text(url.as_str()).await?;

        let (html, assets) = {
            let base = url.clone();
            tokio::task::spawn_blocking(move || {
                let assets = Extractor::with_html(base, &html).extract();
                (html, assets)
            })
            .await?
        };

        Ok(ExtractedPage { url, html, assets })
    }

    pub async fn analyze(&self, page_url: &str) -> Result<AnalysisResult> {
        let page = self.fetch_and_extract(page_url).await?;
        let result = AnalysisResult::from_page(page);

        info!(
            "Analyzed page: {} css, {} js, {} images, {} others, {} colors, {} fonts",
            result.summary.total_css,
            result.summary.total_js,
            result.summary.total_images,
            result.summary.total_others,
            result.colors.len(),
            result.fonts.len()
        );

        Ok(result)
    }
}

impl AnalysisResult {
    pub fn from_page(page: ExtractedPage) -> Self {
        let PageAssets {
            css,
            js,
            images,
            others,
            colors,
            fonts,
        } = page.assets;

        let css_files: Vec<String> = css.into_iter().collect();
        let js_files: Vec<String> = js.into_iter().collect();
        let images: Vec<String> = images.into_iter().collect();
        let others: Vec<String> = others.into_iter().collect();

        let structure = build_tree(
            css_files
                .iter()
                .chain(&js_files)
                .chain(&images)
                .chain(&others),
        );

        let summary = Summary {
            total_css: css_files.len(),
            total_js: js_files.len(),
            total_images: images.len(),
            total_others: others.len(),
        };

        Self {
            html_source: page.html,
            css_files,
            js_files,
            images,
            others,
            colors: colors.into_iter().collect(),
            fonts: fonts.into_iter().collect(),
            structure,
            summary,
        }
    }
}
