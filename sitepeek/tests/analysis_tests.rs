use std::sync::Arc;

use serde_json::json;
use sitepeek::{Analyzer, FetchConfig, HttpFetcher, SitePeekError};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn analyzer() -> Analyzer {
    Analyzer::new(Arc::new(HttpFetcher::new(&FetchConfig::default()).unwrap()))
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="/css/main.css">
  <link rel="stylesheet" href="css/main.css">
  <style>
    @import "/css/print.css";
    body { font-family: "Inter", sans-serif; color: #333; }
    @font-face { src: url(/fonts/inter.woff2); font-family: 'Inter Display'; }
  </style>
  <script src="/js/app.js"></script>
</head>
<body style="background: rgba(0, 0, 0, 0.5)">
  <img src="/img/logo.png">
  <a href="/files/brochure.pdf">Brochure</a>
</body>
</html>"#;

#[tokio::test]
async fn test_analyze_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/site/index.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(PAGE.as_bytes()),
        )
        .mount(&mock_server)
        .await;

    let base = mock_server.uri();
    let result = analyzer()
        .analyze(&format!("{}/site/index.html", base))
        .await
        .unwrap();

    assert_eq!(result.html_source, PAGE);
    assert_eq!(
        result.css_files,
        vec![
            format!("{}/css/main.css", base),
            format!("{}/css/print.css", base),
            format!("{}/site/css/main.css", base),
        ]
    );
    assert_eq!(result.js_files, vec![format!("{}/js/app.js", base)]);
    assert_eq!(result.images, vec![format!("{}/img/logo.png", base)]);
    assert_eq!(result.others, vec![format!("{}/files/brochure.pdf", base)]);
    assert_eq!(result.colors, vec!["#333", "rgba(0, 0, 0, 0.5)"]);
    assert_eq!(result.fonts, vec!["Inter", "Inter Display", "sans-serif"]);
    assert_eq!(result.total_assets(), 6);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value["summary"],
        json!({ "total_css": 3, "total_js": 1, "total_images": 1, "total_others": 1 })
    );
    assert_eq!(
        value["structure"]["css"]["print.css"],
        json!(format!("{}/css/print.css", base))
    );
    assert_eq!(
        value["structure"]["site"]["css"]["main.css"],
        json!(format!("{}/site/css/main.css", base))
    );
}

#[tokio::test]
async fn test_malformed_url_is_invalid_input() {
    let err = analyzer().analyze("not a url").await.unwrap_err();
    assert!(matches!(err, SitePeekError::InvalidInput(_)));
}

#[tokio::test]
async fn test_unreachable_page_is_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = analyzer().analyze(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, SitePeekError::FetchFailed { .. }));
}

#[tokio::test]
async fn test_page_without_assets() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>just text</p>"))
        .mount(&mock_server)
        .await;

    let result = analyzer().analyze(&mock_server.uri()).await.unwrap();
    assert_eq!(result.total_assets(), 0);
    assert!(result.structure.is_empty());
    assert!(result.colors.is_empty());
}

#[tokio::test]
async fn test_latin1_page_is_decoded() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=iso-8859-1")
                .set_body_bytes(b"<html><body><p>caf\xE9</p></body></html>".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let result = analyzer().analyze(&mock_server.uri()).await.unwrap();
    assert!(result.html_source.contains("caf\u{e9}"));
    assert!(!result.html_source.contains('\u{fffd}'));
}
