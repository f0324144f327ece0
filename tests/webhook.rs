use std::time::Duration;

use linksumma::summary::ResponseError;
use linksumma::webhook::GENERIC_FAILURE;
use linksumma::{Summarizer, Summary, WebhookClient, WebhookError, WebhookSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = "https://example.com/article";

fn client_for(server: &MockServer) -> WebhookClient {
    let endpoint = Url::parse(&format!("{}/hook", server.uri())).unwrap();
    WebhookClient::new(WebhookSettings::new(endpoint)).unwrap()
}

async fn respond_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn posts_json_url_and_returns_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": ARTICLE })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"summary": "Short text.", "title": "Example"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server).summarize(ARTICLE).await.unwrap();
    assert_eq!(summary, Summary::new("Example", "Short text."));
}

#[tokio::test]
async fn default_title_and_text_fallback() {
    let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Body"}))).await;

    let summary = client_for(&server).summarize(ARTICLE).await.unwrap();
    assert_eq!(summary, Summary::new("Content Summary", "Body"));
}

#[tokio::test]
async fn server_error_embeds_status() {
    let server = respond_with(ResponseTemplate::new(500)).await;

    let err = client_for(&server).summarize(ARTICLE).await.unwrap_err();
    assert!(matches!(err, WebhookError::Server(500)));
    assert_eq!(err.to_string(), "Server error: 500");
}

#[tokio::test]
async fn error_field_is_application_error() {
    let server = respond_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({"error": "Page is paywalled", "summary": "ignored"})),
    )
    .await;

    let err = client_for(&server).summarize(ARTICLE).await.unwrap_err();
    assert!(matches!(
        err,
        WebhookError::Response(ResponseError::Application(_))
    ));
    assert_eq!(err.to_string(), "Page is paywalled");
}

#[tokio::test]
async fn empty_object_is_empty_result() {
    let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let err = client_for(&server).summarize(ARTICLE).await.unwrap_err();
    assert_eq!(err.to_string(), "could not obtain a summary of the content");
    assert_eq!(err.kind(), "empty-result");
}

#[tokio::test]
async fn non_json_body_gets_generic_message() {
    let server = respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = client_for(&server).summarize(ARTICLE).await.unwrap_err();
    assert!(matches!(err, WebhookError::MalformedBody(_)));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn slow_webhook_times_out() {
    let server = respond_with(
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(500))
            .set_body_json(json!({"summary": "late"})),
    )
    .await;

    let endpoint = Url::parse(&format!("{}/hook", server.uri())).unwrap();
    let settings = WebhookSettings {
        endpoint,
        timeout: Duration::from_millis(50),
    };
    let client = WebhookClient::new(settings).unwrap();

    let err = client.summarize(ARTICLE).await.unwrap_err();
    assert!(matches!(err, WebhookError::Timeout));
    assert_eq!(err.to_string(), "Request took too long. Please try again.");
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/hook")).unwrap();
    let client = WebhookClient::new(WebhookSettings::new(endpoint)).unwrap();

    let err = client.summarize(ARTICLE).await.unwrap_err();
    assert!(matches!(err, WebhookError::Network(_)));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}
