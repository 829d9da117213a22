//! End-to-end tests against a local HTTP server.

use std::time::Duration;

use serde_json::{Value, json};
use ses_notify::invocation::{Disposition, Invocation, InvocationError};
use ses_notify::message::{Formatter, MessageTemplate};
use ses_notify::webhook::{IsRetryable, ReqwestClient, USER_AGENT, WebhookDispatcher};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bounce_event() -> String {
    let notification = json!({
        "notificationType": "Bounce",
        "mail": {
            "source": "bounces@sender.example",
            "messageId": "0100018c-test",
            "headersTruncated": false,
            "commonHeaders": {
                "subject": "Ünïcödé newsletter",
                "from": ["Sender <news@sender.example>"],
            },
        },
        "bounce": {
            "bounceType": "Permanent",
            "bounceSubType": "General",
            "bouncedRecipients": [{
                "emailAddress": "gone@example.com",
                "action": "failed",
                "diagnosticCode": "smtp; 550 5.1.1 user unknown",
            }],
            "timestamp": "2024-03-01T12:00:00.000Z",
        },
    });

    json!({ "Records": [{ "Sns": { "Message": notification.to_string() } }] }).to_string()
}

fn invocation(server: &MockServer) -> Invocation<ReqwestClient> {
    let url = Url::parse(&format!("{}/services/hook", server.uri())).unwrap();
    let dispatcher = WebhookDispatcher::new(ReqwestClient::new().unwrap(), url);
    let template = MessageTemplate::from_value(json!({ "username": "SES" })).unwrap();

    Invocation::new(dispatcher, Formatter::new().with_template(template))
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/services/hook"))
        .and(header("content-type", "application/json"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn posts_formatted_message() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("ok")).await;

    let disposition = invocation(&server).handle(&bounce_event()).await.unwrap();

    let Disposition::Delivered(result) = disposition else {
        panic!("expected delivery, got {disposition:?}");
    };
    assert_eq!(result.status.as_u16(), 200);
    assert_eq!(result.body, "ok");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let body: Value = serde_json::from_slice(&request.body).unwrap();

    assert_eq!(body["text"], "*SES Message Bounce (Permanent - General)*");
    assert_eq!(body["username"], "SES");
    assert_eq!(body["attachments"][0]["color"], "danger");
    assert_eq!(body["attachments"][0]["fields"][0]["value"], "Ünïcödé newsletter");

    // Byte length, not character count
    let content_length = request.headers.get("content-length").unwrap();
    assert_eq!(
        content_length.to_str().unwrap(),
        request.body.len().to_string()
    );
    assert_eq!(
        request.headers.get("user-agent").unwrap().to_str().unwrap(),
        USER_AGENT
    );
}

#[tokio::test]
async fn client_error_is_not_retried() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(404).set_body_string("no_service")).await;

    let disposition = invocation(&server).handle(&bounce_event()).await.unwrap();

    let Disposition::Rejected(result) = disposition else {
        panic!("expected rejection, got {disposition:?}");
    };
    assert_eq!(result.status_message, "Not Found");
    assert_eq!(result.body, "no_service");
}

#[tokio::test]
async fn server_error_is_retryable() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(503)).await;

    let error = invocation(&server)
        .handle(&bounce_event())
        .await
        .unwrap_err();

    assert!(error.is_retryable());
    assert_eq!(
        error.to_string(),
        "Server error when processing message: 503 - Service Unavailable"
    );
}

#[tokio::test]
async fn slow_webhook_hits_deadline() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_secs(5)),
    )
    .await;

    let error = invocation(&server)
        .with_deadline(Duration::from_millis(200))
        .handle(&bounce_event())
        .await
        .unwrap_err();

    assert!(matches!(error, InvocationError::DeadlineExceeded(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn unreachable_webhook_is_retryable() {
    // Nothing listens on port 1.
    let url = Url::parse("http://127.0.0.1:1/services/hook").unwrap();
    let dispatcher = WebhookDispatcher::new(ReqwestClient::new().unwrap(), url);

    let error = Invocation::new(dispatcher, Formatter::new())
        .handle(&bounce_event())
        .await
        .unwrap_err();

    assert!(matches!(error, InvocationError::Dispatch(_)));
    assert!(error.is_retryable());
}
