const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const EXTENSION_MAP: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".xml", "application/xml"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".webp", "image/webp"),
    (".ico", "image/x-icon"),
    (".pdf", "application/pdf"),
    (".zip", "application/zip"),
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".ttf", "font/ttf"),
    (".eot", "application/vnd.ms-fontobject"),
    (".otf", "font/otf"),
    (".mp4", "video/mp4"),
    (".webm", "video/webm"),
    (".mp3", "audio/mpeg"),
    (".wav", "audio/wav"),
    (".ogg", "audio/ogg"),
];

/// Best guess at a MIME type from the URL suffix, used when a response has
/// no `Content-Type` header.
pub fn guess_content_type(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    EXTENSION_MAP
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("https://x.com/a.CSS"), "text/css");
        assert_eq!(guess_content_type("https://x.com/f.woff2"), "font/woff2");
        assert_eq!(guess_content_type("https://x.com/f.woff"), "font/woff");
        assert_eq!(guess_content_type("https://x.com/data"), "application/octet-stream");
        assert_eq!(guess_content_type("https://x.com/a.png?x=1"), "application/octet-stream");
    }
}
