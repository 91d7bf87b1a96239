use article_tldr::errors::SummaryError;
use article_tldr::sources::{ArticleSource, HtmlFileSource, TextSource, UrlSource, html_to_text};
use url::Url;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Ignored title</title><style>p { color: red; }</style></head>
  <body>
    <article>
      <h1>Ferris goes north</h1>
      <p>The crab walked for three days.</p>
    </article>
  </body>
</html>"#;

#[test]
fn test_html_to_text_keeps_visible_text() {
    let text = html_to_text(PAGE.as_bytes()).unwrap();
    assert!(text.contains("Ferris goes north"), "Actual: {text}");
    assert!(text.contains("The crab walked for three days."), "Actual: {text}");
    assert!(!text.contains("<p>"), "Markup should be removed. Actual: {text}");
}

#[tokio::test]
async fn test_text_source_passes_text_through() {
    let source = TextSource::new("already extracted");
    assert_eq!(
        source.article_text().await.unwrap().as_deref(),
        Some("already extracted")
    );
    assert_eq!(TextSource::empty().article_text().await.unwrap(), None);
}

#[tokio::test]
async fn test_html_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, PAGE).unwrap();

    let text = HtmlFileSource::new(&path).article_text().await.unwrap().unwrap();
    assert!(text.contains("The crab walked for three days."));
}

#[tokio::test]
async fn test_missing_html_file_is_extraction_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = HtmlFileSource::new(dir.path().join("missing.html"))
        .article_text()
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Extraction { .. }));
}

#[tokio::test]
async fn test_url_source_fetches_page() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/post")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/post", server.url())).unwrap();
    let text = UrlSource::new(url).article_text().await.unwrap().unwrap();
    assert!(text.contains("Ferris goes north"));
}

#[tokio::test]
async fn test_url_source_plain_text_is_not_parsed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/notes.txt")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("<not a tag> just text")
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/notes.txt", server.url())).unwrap();
    let text = UrlSource::new(url).article_text().await.unwrap();
    assert_eq!(text.as_deref(), Some("<not a tag> just text"));
}

#[tokio::test]
async fn test_url_source_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/gone")
        .with_status(404)
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/gone", server.url())).unwrap();
    let err = UrlSource::new(url).article_text().await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Could not extract article text from this page."
    );
}
