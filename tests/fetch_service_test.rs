//! Tests for FetchService: validation order and rendering per output format

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::Value;

use arc_blog::application::services::FetchService;
use arc_blog::application::{ApplicationError, OutputFormat, OutputOptions};
use arc_blog::config::Settings;
use arc_blog::domain::{DomainError, FetchRequest, FetchResult, DEFAULT_OUT_DIR};
use arc_blog::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn service() -> FetchService {
    FetchService::new(Arc::new(Settings::default()))
}

fn output(format: &str) -> OutputOptions {
    OutputOptions {
        output: Some(format.into()),
        ..Default::default()
    }
}

fn url_request(analyze: bool) -> FetchRequest {
    FetchRequest::new(
        Some("https://example.com/post".into()),
        None,
        DEFAULT_OUT_DIR,
        analyze,
    )
}

fn run(service: &FetchService, request: &FetchRequest, options: &OutputOptions) -> String {
    let mut buf = Vec::new();
    service.run(request, options, &mut buf).expect("run fetch");
    String::from_utf8(buf).expect("utf8 output")
}

// ============================================================
// Validation
// ============================================================

#[rstest]
#[case("table")]
#[case("json")]
#[case("yaml")]
#[case("quiet")]
#[case("xml")]
fn given_no_source_when_run_then_missing_source_regardless_of_output(
    service: FetchService,
    #[case] format: &str,
) {
    let request = FetchRequest::new(None, None, "/tmp/x", true);
    let mut buf = Vec::new();

    let err = service
        .run(&request, &output(format), &mut buf)
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::MissingSource { .. })
    ));
    assert!(buf.is_empty(), "nothing written on usage error");
}

#[rstest]
fn given_unknown_output_when_run_then_format_error_and_nothing_written(service: FetchService) {
    let request = url_request(false);
    let mut buf = Vec::new();

    let err = service.run(&request, &output("xml"), &mut buf).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::UnknownOutputFormat { ref value } if value == "xml"
    ));
    assert!(buf.is_empty());
}

#[rstest]
#[case(Some("https://example.com/post"), None)]
#[case(None, Some("feed.xml"))]
#[case(Some("https://example.com/post"), Some("feed.xml"))]
fn given_any_source_when_fetch_then_stub_status(
    service: FetchService,
    #[case] url: Option<&str>,
    #[case] playlist: Option<&str>,
) {
    let request = FetchRequest::new(
        url.map(String::from),
        playlist.map(String::from),
        DEFAULT_OUT_DIR,
        false,
    );

    let result = service.fetch(&request).expect("fetch");

    assert_eq!(result.status, "stub");
    assert_eq!(result.next_step, "Phase 2 ingestion pipeline");
}

// ============================================================
// Rendering
// ============================================================

#[rstest]
fn given_url_when_run_json_then_exact_document(service: FetchService) {
    let request = url_request(false);

    let out = run(&service, &request, &output("json"));

    let expected = r#"{
  "url": "https://example.com/post",
  "playlist": "",
  "out_dir": "docs/research-external/blog",
  "analyze": false,
  "status": "stub",
  "next_step": "Phase 2 ingestion pipeline"
}
"#;
    assert_eq!(out, expected);
}

#[rstest]
fn given_both_sources_when_run_json_then_decodes_to_input(service: FetchService) {
    let request = FetchRequest::new(
        Some("https://example.com/post".into()),
        Some("feed.xml".into()),
        "/tmp/x",
        true,
    );

    let out = run(&service, &request, &output("json"));
    let value: Value = serde_json::from_str(&out).expect("valid json");

    let mut keys: Vec<&str> = value
        .as_object()
        .expect("json object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["analyze", "next_step", "out_dir", "playlist", "status", "url"]
    );
    assert_eq!(value["url"], "https://example.com/post");
    assert_eq!(value["playlist"], "feed.xml");
    assert_eq!(value["out_dir"], "/tmp/x");
    assert_eq!(value["analyze"], true);
}

#[rstest]
fn given_playlist_when_run_yaml_then_decodes_to_input(service: FetchService) {
    let request = FetchRequest::new(None, Some("feed.xml".into()), "/tmp/x", true);

    let out = run(&service, &request, &output("yaml"));
    let decoded: FetchResult = serde_yaml::from_str(&out).expect("valid yaml");

    assert_eq!(decoded, FetchResult::stub(&request));
    assert!(out.starts_with("url:"), "field order preserved: {out}");
}

#[rstest]
fn given_quiet_when_run_then_zero_bytes(service: FetchService) {
    let request = url_request(true);

    let out = run(&service, &request, &output("quiet"));

    assert!(out.is_empty());
}

#[rstest]
fn given_playlist_when_run_table_then_no_url_line(service: FetchService) {
    let request = FetchRequest::new(None, Some("feed.xml".into()), "/tmp/x", false);

    let out = run(&service, &request, &OutputOptions::default());

    assert_eq!(
        out,
        "blog fetch (stub) -> out_dir=/tmp/x analyze=false\n  Playlist: feed.xml\n"
    );
    assert!(!out.contains("URL:"));
}

#[rstest]
fn given_url_when_run_table_then_no_playlist_line(service: FetchService) {
    let request = url_request(true);

    let out = run(&service, &request, &OutputOptions::default());

    assert_eq!(
        out,
        "blog fetch (stub) -> out_dir=docs/research-external/blog analyze=true\n  URL: https://example.com/post\n"
    );
}

#[test]
fn given_configured_default_output_when_no_flag_then_uses_it() {
    let settings = Settings {
        output: "json".into(),
        ..Settings::default()
    };
    let service = FetchService::new(Arc::new(settings));
    let request = FetchRequest::new(None, Some("feed.xml".into()), DEFAULT_OUT_DIR, false);
    let mut buf = Vec::new();

    let format = service
        .run(&request, &OutputOptions::default(), &mut buf)
        .expect("run fetch");

    assert_eq!(format, OutputFormat::Json);
    let value: Value = serde_json::from_slice(&buf).expect("valid json");
    assert_eq!(value["playlist"], "feed.xml");
}
