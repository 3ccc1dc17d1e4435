//! Extraction rules shared by the resource and design extractors.
//!
//! CSS is never parsed; everything below is literal pattern matching over
//! attribute values and `<style>` text, so malformed CSS still yields
//! whatever partial matches it contains.

use once_cell::sync::Lazy;
use regex::Regex;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp", ".ico", ".bmp",
];

pub const OTHER_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".zip", ".woff", ".woff2", ".ttf", ".eot", ".otf",
    ".mp4", ".webm", ".mp3", ".wav", ".ogg",
];

pub const FONT_EXTENSIONS: &[&str] = &[".woff", ".woff2", ".ttf", ".eot", ".otf"];

/// `@import "a.css"` / `@import 'a.css'`
pub static CSS_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@import\s+["']([^"']+)["']"#).expect("valid regex"));

/// `url(...)` with optional quotes.
pub static CSS_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"url\(["']?([^"')]+)["']?\)"#).expect("valid regex"));

/// Absolute candidates inside an `<img srcset>`.
pub static SRCSET_ABSOLUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://[^\s,]+)").expect("valid regex"));

/// Every whitespace/comma separated token of a `<source srcset>`, descriptors included.
pub static SRCSET_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\s,]+)").expect("valid regex"));

pub static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})\b").expect("valid regex"));

pub static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rgb\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)").expect("valid regex")
});

pub static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rgba\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)").expect("valid regex")
});

pub static HSL_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)hsl\s*\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*\)").expect("valid regex")
});

/// `font-family` inside a `style="..."` attribute; the value runs to `;`.
pub static FONT_FAMILY_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-family\s*:\s*([^;]+)").expect("valid regex"));

/// `font-family` inside a `<style>` block; the value runs to `;` or `}`.
pub static FONT_FAMILY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-family\s*:\s*([^;}]+)").expect("valid regex"));

pub static FONT_FACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)@font-face\s*\{[^}]*font-family\s*:\s*["']?([^"';}]+)"#)
        .expect("valid regex")
});

/// Case-insensitive suffix check on the raw value. Query strings are not
/// stripped first, so `a.png?v=1` does not count as an image.
pub fn has_extension(value: &str, extensions: &[&str]) -> bool {
    let lower = value.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}
