use std::collections::BTreeSet;

use url::Url;

use crate::design;
use crate::document::Document;
use crate::patterns::{
    has_extension, CSS_IMPORT, CSS_URL, FONT_EXTENSIONS, IMAGE_EXTENSIONS, OTHER_EXTENSIONS,
    SRCSET_ABSOLUTE, SRCSET_TOKEN,
};
use crate::resolver::resolve;

/// Deduplicated set of absolute URLs.
pub type UrlSet = BTreeSet<String>;

/// Everything mined from one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageAssets {
    pub css: UrlSet,
    pub js: UrlSet,
    pub images: UrlSet,
    pub others: UrlSet,
    pub colors: BTreeSet<String>,
    pub fonts: BTreeSet<String>,
}

/// Extraction over a page that may or may not have been loaded yet.
///
/// Every operation is a pure function of the currently loaded document; before
/// [`Extractor::load`] is called they all return empty sets.
pub struct Extractor {
    base: Url,
    document: Option<Document>,
}

impl Extractor {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            document: None,
        }
    }

    pub fn with_html(base: Url, markup: &str) -> Self {
        let mut extractor = Self::new(base);
        extractor.load(markup);
        extractor
    }

    pub fn load(&mut self, markup: &str) {
        self.document = Some(Document::parse(markup));
    }

    pub fn stylesheets(&self) -> UrlSet {
        self.document
            .as_ref()
            .map(|doc| extract_stylesheets(doc, &self.base))
            .unwrap_or_default()
    }

    pub fn scripts(&self) -> UrlSet {
        self.document
            .as_ref()
            .map(|doc| extract_scripts(doc, &self.base))
            .unwrap_or_default()
    }

    pub fn images(&self) -> UrlSet {
        self.document
            .as_ref()
            .map(|doc| extract_images(doc, &self.base))
            .unwrap_or_default()
    }

    pub fn other_files(&self) -> UrlSet {
        self.document
            .as_ref()
            .map(|doc| extract_other_files(doc, &self.base))
            .unwrap_or_default()
    }

    pub fn colors(&self) -> BTreeSet<String> {
        self.document
            .as_ref()
            .map(design::extract_colors)
            .unwrap_or_default()
    }

    pub fn fonts(&self) -> BTreeSet<String> {
        self.document
            .as_ref()
            .map(design::extract_fonts)
            .unwrap_or_default()
    }

    pub fn extract(&self) -> PageAssets {
        PageAssets {
            css: self.stylesheets(),
            js: self.scripts(),
            images: self.images(),
            others: self.other_files(),
            colors: self.colors(),
            fonts: self.fonts(),
        }
    }
}

fn is_stylesheet_rel(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("stylesheet"))
}

/// `<link rel="stylesheet" href>` plus `@import` references in `<style>` blocks.
pub fn extract_stylesheets(doc: &Document, base: &Url) -> UrlSet {
    let mut found = UrlSet::new();

    for link in doc.by_tag_with_attr("link", "rel") {
        if !link.attr("rel").is_some_and(is_stylesheet_rel) {
            continue;
        }
        if let Some(url) = link
            .attr("href")
            .filter(|href| !href.is_empty())
            .and_then(|href| resolve(base, href))
        {
            found.insert(url);
        }
    }

    for block in doc.style_blocks() {
        for caps in CSS_IMPORT.captures_iter(&block) {
            if let Some(url) = resolve(base, &caps[1]) {
                found.insert(url);
            }
        }
    }

    found
}

pub fn extract_scripts(doc: &Document, base: &Url) -> UrlSet {
    doc.attr_values("script", "src")
        .into_iter()
        .filter_map(|src| resolve(base, src))
        .collect()
}

/// Image URLs from `<img src>`, `srcset` attributes and inline `url(...)`.
///
/// `<img srcset>` only contributes tokens that are already absolute and they
/// are taken as written; `<source srcset>` tokens are resolved and must carry
/// an image extension.
pub fn extract_images(doc: &Document, base: &Url) -> UrlSet {
    let mut found: UrlSet = doc
        .attr_values("img", "src")
        .into_iter()
        .filter_map(|src| resolve(base, src))
        .collect();

    for srcset in doc.attr_values("img", "srcset") {
        for caps in SRCSET_ABSOLUTE.captures_iter(srcset) {
            found.insert(caps[1].to_string());
        }
    }

    for srcset in doc.attr_values("source", "srcset") {
        for caps in SRCSET_TOKEN.captures_iter(srcset) {
            if let Some(url) = resolve(base, &caps[1]) {
                if has_extension(&url, IMAGE_EXTENSIONS) {
                    found.insert(url);
                }
            }
        }
    }

    for style in doc.inline_styles() {
        for caps in CSS_URL.captures_iter(style) {
            if let Some(url) = resolve(base, &caps[1]) {
                if has_extension(&url, IMAGE_EXTENSIONS) {
                    found.insert(url);
                }
            }
        }
    }

    found
}

/// Downloadable documents, fonts and media.
pub fn extract_other_files(doc: &Document, base: &Url) -> UrlSet {
    let mut found = UrlSet::new();

    for href in doc.attr_values("a", "href") {
        if has_extension(href, OTHER_EXTENSIONS) {
            found.extend(resolve(base, href));
        }
    }

    for href in doc.attr_values("link", "href") {
        if has_extension(href, FONT_EXTENSIONS) {
            found.extend(resolve(base, href));
        }
    }

    for tag in ["video", "audio", "source"] {
        for src in doc.attr_values(tag, "src") {
            found.extend(resolve(base, src));
        }
    }

    found
}
