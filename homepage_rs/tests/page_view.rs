//! PageView against a mocked content API.

use homepage::{Config, FetchError, HomeClient, PageView};
use pageview_leptos::state::{ViewState, FETCH_FAILED_MESSAGE, LOADING_MESSAGE, NO_DATA_MESSAGE};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn acme_payload() -> serde_json::Value {
    json!({
        "brand": "Acme",
        "hero": {"title": "T", "subtitle": "S", "ctaPrimary": "Go", "ctaSecondary": "Learn"},
        "metrics": [{"label": "Uptime", "value": "99.9%"}],
        "servicePillars": [],
        "industries": [],
        "caseStudies": [],
        "insights": [],
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

async fn serve_home(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/home"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

async fn load_from(server: &MockServer) -> PageView {
    let config = Config::new(Some(server.uri().as_str()));
    let mut view = PageView::new(&config);
    view.load().await;
    view
}

#[test]
fn starts_in_loading_state() {
    let view = PageView::new(&Config::new(Some("http://127.0.0.1:9")));

    assert_eq!(view.state(), &ViewState::Loading);
    assert!(view.render().contains(LOADING_MESSAGE));
}

#[tokio::test]
async fn renders_content_from_api() {
    let server = serve_home(ResponseTemplate::new(200).set_body_json(acme_payload())).await;

    let view = load_from(&server).await;
    let content = view.state().content().expect("loaded content");
    assert_eq!(content.brand, "Acme");
    assert_eq!(content.metrics.len(), 1);

    let html = view.render();
    assert!(html.contains(r#"<div class="brand">Acme</div>"#));
    assert!(html.contains("<h1>T</h1>"));
    assert_eq!(html.matches(r#"class="card metric-card""#).count(), 1);
    assert!(html.contains("width: 48%"));
    assert!(html.contains("1/1/2024, 12:00:00 AM"));
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_ignored() {
    let server = serve_home(ResponseTemplate::new(200).set_body_json(acme_payload())).await;

    let config = Config::new(Some(format!("{}/", server.uri()).as_str()));
    let mut view = PageView::new(&config);
    assert_eq!(view.endpoint(), format!("{}/api/home", server.uri()));

    view.load().await;
    assert!(view.state().content().is_some());
}

#[tokio::test]
async fn second_load_does_not_refetch() {
    // `expect(1)` fails the test on drop if the endpoint is hit twice
    let server = serve_home(ResponseTemplate::new(200).set_body_json(acme_payload())).await;

    let mut view = load_from(&server).await;
    let first = view.state().clone();
    let second = view.load().await.clone();

    assert_eq!(first, second);
}

#[tokio::test]
async fn non_success_status_is_generic_error() {
    for status in [400u16, 401, 404, 500, 503] {
        let server =
            serve_home(ResponseTemplate::new(status).set_body_json(acme_payload())).await;

        let view = load_from(&server).await;
        assert_eq!(view.state(), &ViewState::fetch_failed(), "status {status}");

        let html = view.render();
        assert!(html.contains(FETCH_FAILED_MESSAGE));
        assert!(!html.contains("Acme"));
    }
}

#[tokio::test]
async fn connection_refused_is_generic_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let mut view = PageView::new(&Config::new(Some(format!("http://{addr}").as_str())));
    view.load().await;

    assert_eq!(view.state(), &ViewState::fetch_failed());
    assert!(view.render().contains(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn same_origin_without_origin_fails() {
    let mut view = PageView::new(&Config::new(None));
    assert_eq!(view.endpoint(), "/api/home");

    view.load().await;
    assert_eq!(view.state(), &ViewState::fetch_failed());
}

#[tokio::test]
async fn same_origin_uses_configured_origin() {
    let server = serve_home(ResponseTemplate::new(200).set_body_json(acme_payload())).await;

    let config = Config::new(Some("  ")).with_origin(Some(server.uri().as_str()));
    let mut view = PageView::new(&config);
    view.load().await;

    assert!(view.state().content().is_some());
}

#[tokio::test]
async fn null_body_renders_no_data() {
    let server = serve_home(
        ResponseTemplate::new(200)
            .insert_header("content-type", "application/json")
            .set_body_string("null"),
    )
    .await;

    let view = load_from(&server).await;
    assert_eq!(view.state(), &ViewState::Loaded(None));

    let html = view.render();
    assert!(html.contains(NO_DATA_MESSAGE));
    assert!(!html.contains(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn empty_body_renders_no_data() {
    let server = serve_home(ResponseTemplate::new(200)).await;

    let view = load_from(&server).await;
    assert_eq!(view.state(), &ViewState::Loaded(None));
    assert!(view.render().contains(NO_DATA_MESSAGE));
}

#[tokio::test]
async fn malformed_body_is_generic_error() {
    for body in ["not json", "[1, 2]", "{\"metrics\": \"many\"}"] {
        let server = serve_home(ResponseTemplate::new(200).set_body_string(body)).await;

        let view = load_from(&server).await;
        assert_eq!(view.state(), &ViewState::fetch_failed(), "body {body:?}");
    }
}

#[tokio::test]
async fn partial_payload_still_loads() {
    let server =
        serve_home(ResponseTemplate::new(200).set_body_json(json!({"brand": "Half"}))).await;

    let view = load_from(&server).await;
    let html = view.render();

    assert!(html.contains(r#"<div class="brand">Half</div>"#));
    assert!(html.contains("Invalid Date"));
}

#[tokio::test]
async fn client_reports_status_variant() {
    let server = serve_home(ResponseTemplate::new(404)).await;

    let result = HomeClient::new()
        .fetch_home(&format!("{}/api/home", server.uri()))
        .await;

    assert!(matches!(result, Err(FetchError::Status(404))));
}

#[tokio::test]
async fn client_reports_decode_variant() {
    let server = serve_home(ResponseTemplate::new(200).set_body_string("{oops")).await;

    let result = HomeClient::new()
        .fetch_home(&format!("{}/api/home", server.uri()))
        .await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}
