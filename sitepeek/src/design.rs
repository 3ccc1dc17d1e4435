//! Colors and font families mined from inline styles and `<style>` blocks.

use std::collections::BTreeSet;

use regex::Regex;

use crate::document::Document;
use crate::patterns::{
    FONT_FACE, FONT_FAMILY_BLOCK, FONT_FAMILY_INLINE, HEX_COLOR, HSL_COLOR, RGBA_COLOR, RGB_COLOR,
};

/// Color literals, deduplicated as exact strings and sorted.
///
/// Hex values always come out `#`-prefixed with their original case;
/// `rgb()`, `rgba()` and `hsl()` matches are kept verbatim.
pub fn extract_colors(doc: &Document) -> BTreeSet<String> {
    let mut colors = BTreeSet::new();

    for style in doc.inline_styles() {
        collect_colors(style, &mut colors);
    }
    for block in doc.style_blocks() {
        collect_colors(&block, &mut colors);
    }

    colors
}

fn collect_colors(text: &str, colors: &mut BTreeSet<String>) {
    for caps in HEX_COLOR.captures_iter(text) {
        colors.insert(format!("#{}", &caps[1]));
    }
    for pattern in [&*RGB_COLOR, &*RGBA_COLOR, &*HSL_COLOR] {
        colors.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }
}

/// Font family names from `font-family` declarations and `@font-face` rules, sorted.
pub fn extract_fonts(doc: &Document) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();

    for style in doc.inline_styles() {
        collect_families(&FONT_FAMILY_INLINE, style, &mut fonts);
    }

    for block in doc.style_blocks() {
        collect_families(&FONT_FAMILY_BLOCK, &block, &mut fonts);

        for caps in FONT_FACE.captures_iter(&block) {
            let name = caps[1].trim();
            if !name.is_empty() {
                fonts.insert(name.to_string());
            }
        }
    }

    fonts
}

fn collect_families(pattern: &Regex, text: &str, fonts: &mut BTreeSet<String>) {
    for caps in pattern.captures_iter(text) {
        for family in caps[1].split(',') {
            let name = family.trim().trim_matches(|c| c == '"' || c == '\'');
            if !name.is_empty() {
                fonts.insert(name.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: BTreeSet<String>) -> Vec<String> {
        set.into_iter().collect()
    }

    #[test]
    fn test_colors_inline_and_block() {
        let doc = Document::parse(
            r#"<html><head><style>.a{color:rgb(1, 2, 3)}</style></head>
            <body><div style="color:#FFF;background:#112233"></div></body></html>"#,
        );
        assert_eq!(
            sorted(extract_colors(&doc)),
            vec!["#112233", "#FFF", "rgb(1, 2, 3)"]
        );
    }

    #[test]
    fn test_colors_keep_case_and_format() {
        let doc = Document::parse(
            r#"<style>
                .a { color: #fff; border-color: #FFFFFF; }
                .b { color: RGBA(0,0,0,0.5); background: hsl(10, 20%, 30%); }
                .c { color: rgb(1,2,3); }
            </style>"#,
        );
        assert_eq!(
            sorted(extract_colors(&doc)),
            vec![
                "#FFFFFF",
                "#fff",
                "RGBA(0,0,0,0.5)",
                "hsl(10, 20%, 30%)",
                "rgb(1,2,3)",
            ]
        );
    }

    #[test]
    fn test_colors_ignore_ids_that_are_not_hex() {
        let doc = Document::parse(r#"<a style="color: #zzz; x: #12345"></a>"#);
        assert!(extract_colors(&doc).is_empty());
    }

    #[test]
    fn test_inline_font_family() {
        let doc = Document::parse(r#"<p style="font-family: 'Open Sans', Arial">x</p>"#);
        assert_eq!(sorted(extract_fonts(&doc)), vec!["Arial", "Open Sans"]);
    }

    #[test]
    fn test_block_font_family_and_font_face() {
        let doc = Document::parse(
            r#"<style>
                body { font-family: "Helvetica Neue", , sans-serif }
                @font-face { src: url(brand.woff2); font-family: 'Brand Display'; }
            </style>"#,
        );
        assert_eq!(
            sorted(extract_fonts(&doc)),
            vec!["Brand Display", "Helvetica Neue", "sans-serif"]
        );
    }

    #[test]
    fn test_no_styles_no_design() {
        let doc = Document::parse("<p>plain</p>");
        assert!(extract_colors(&doc).is_empty());
        assert!(extract_fonts(&doc).is_empty());
    }
}
