use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use logocrawler_engine::{
    logo_filename, FallbackSettings, FetchSettings, ImageStore, LogoApiClient, LogoExtractor,
    LogoLocation, LogoPipeline, PipelineSettings, ReqwestFetcher,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGO_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

fn pipeline_for(fallback: &MockServer, out: &TempDir) -> LogoPipeline {
    crawl_logging::initialize_for_tests();
    LogoPipeline::new(PipelineSettings {
        fetch: FetchSettings::default(),
        fallback: FallbackSettings {
            base_url: fallback.uri(),
            ..FallbackSettings::default()
        },
        output_dir: Some(out.path().to_path_buf()),
    })
}

#[tokio::test]
async fn logo_on_page_is_returned_as_remote_url() {
    let page = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><img class="logo" src="https://cdn.example.com/logo.png"></body></html>"#,
            "text/html",
        ))
        .mount(&page)
        .await;
    // The fallback API must never be contacted when the chain finds a logo.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(LOGO_BYTES))
        .expect(0)
        .mount(&fallback)
        .await;

    let out = TempDir::new().unwrap();
    let pipeline = pipeline_for(&fallback, &out);
    let domain = page.address().to_string();

    let result = pipeline.resolve(&domain).await;
    assert_eq!(
        result,
        Some(LogoLocation::Remote(
            "https://cdn.example.com/logo.png".to_string()
        ))
    );
}

#[tokio::test]
async fn unreachable_page_falls_back_to_api_and_stores_image() {
    let page = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&page)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(LOGO_BYTES))
        .expect(1)
        .mount(&fallback)
        .await;

    let out = TempDir::new().unwrap();
    let pipeline = pipeline_for(&fallback, &out);
    let domain = page.address().to_string();

    let result = pipeline.resolve(&domain).await;
    let expected_path = out.path().join(logo_filename(&domain));
    assert_eq!(result, Some(LogoLocation::Stored(expected_path.clone())));
    assert_eq!(fs::read(&expected_path).unwrap(), LOGO_BYTES);
}

#[tokio::test]
async fn unreachable_page_never_runs_the_heuristic_chain() {
    struct CountingExtractor(Arc<AtomicUsize>);

    impl LogoExtractor for CountingExtractor {
        fn extract(&self, _html: &str) -> Option<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    let page = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&page)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(LOGO_BYTES))
        .mount(&fallback)
        .await;

    crawl_logging::initialize_for_tests();
    let calls = Arc::new(AtomicUsize::new(0));
    let out = TempDir::new().unwrap();
    let pipeline = LogoPipeline::with_parts(
        Box::new(ReqwestFetcher::new(FetchSettings::default())),
        Box::new(LogoApiClient::new(FallbackSettings {
            base_url: fallback.uri(),
            ..FallbackSettings::default()
        })),
        Box::new(CountingExtractor(calls.clone())),
        ImageStore::new(out.path().to_path_buf()),
    );
    let domain = page.address().to_string();

    let result = pipeline.resolve(&domain).await;
    assert!(matches!(result, Some(LogoLocation::Stored(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn page_without_logo_uses_the_fallback_leg() {
    let page = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><p>nothing to see</p></body></html>"#,
            "text/html",
        ))
        .mount(&page)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(LOGO_BYTES))
        .expect(1)
        .mount(&fallback)
        .await;

    let out = TempDir::new().unwrap();
    let pipeline = pipeline_for(&fallback, &out);
    let domain = page.address().to_string();

    let result = pipeline.resolve(&domain).await;
    assert!(matches!(result, Some(LogoLocation::Stored(_))));
}

#[tokio::test]
async fn fallback_failure_yields_the_terminal_negative() {
    let page = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&page)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&fallback)
        .await;

    let out = TempDir::new().unwrap();
    let pipeline = pipeline_for(&fallback, &out);
    let domain = page.address().to_string();

    let result = pipeline.resolve(&domain).await;
    assert_eq!(result, None);
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}
