//! Read-only view over a parsed HTML page.
//!
//! Only the query shapes the extractors need are exposed, so nothing outside
//! this module touches `scraper` directly.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

pub struct Document {
    html: Html,
}

/// One element matched by a [`Document`] query.
#[derive(Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn text(&self) -> String {
        self.0.text().collect()
    }
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All `<tag>` elements.
    pub fn by_tag(&self, tag: &str) -> Vec<Element<'_>> {
        self.select(tag)
    }

    /// All `<tag>` elements that carry `attr`.
    pub fn by_tag_with_attr(&self, tag: &str, attr: &str) -> Vec<Element<'_>> {
        self.select(&format!("{}[{}]", tag, attr))
    }

    /// Every element, whatever its tag, that carries `attr`.
    pub fn with_attr(&self, attr: &str) -> Vec<Element<'_>> {
        self.select(&format!("[{}]", attr))
    }

    /// Non-empty `attr` values of `<tag attr>` elements.
    pub fn attr_values(&self, tag: &str, attr: &str) -> Vec<&str> {
        self.by_tag_with_attr(tag, attr)
            .into_iter()
            .filter_map(|el| el.attr(attr))
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Values of every inline `style="..."` attribute.
    pub fn inline_styles(&self) -> Vec<&str> {
        self.with_attr("style")
            .into_iter()
            .filter_map(|el| el.attr("style"))
            .collect()
    }

    /// Text content of every `<style>` block.
    pub fn style_blocks(&self) -> Vec<String> {
        self.by_tag("style").iter().map(Element::text).collect()
    }

    fn select(&self, selector: &str) -> Vec<Element<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).map(Element).collect(),
            Err(e) => {
                debug!("Ignoring invalid selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <style>body { color: red; }</style>
        <link rel="stylesheet" href="a.css">
        <link rel="icon">
    </head><body style="margin:0">
        <img src="" alt="empty">
        <img src="x.png">
        <p style="color:blue">hi</p>
    </body></html>"#;

    #[test]
    fn test_by_tag_with_attr() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.by_tag("link").len(), 2);
        assert_eq!(doc.by_tag_with_attr("link", "href").len(), 1);
        assert_eq!(doc.by_tag_with_attr("link", "href")[0].attr("href"), Some("a.css"));
    }

    #[test]
    fn test_attr_values_skip_empty() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.attr_values("img", "src"), vec!["x.png"]);
    }

    #[test]
    fn test_inline_styles_and_blocks() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.inline_styles(), vec!["margin:0", "color:blue"]);
        assert_eq!(doc.style_blocks(), vec!["body { color: red; }".to_string()]);
    }
}
