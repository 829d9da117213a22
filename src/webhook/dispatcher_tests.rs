//! Tests for `WebhookDispatcher`, `DeliveryOutcome` and retry classification.

use super::{
    DeliveryOutcome, DeliveryResult, DispatchError, HttpClient, HttpError, HttpRequest,
    HttpResponse, IsRetryable, WebhookDispatcher,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn status(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn test_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T0/B0/X").unwrap()
}

mod dispatcher_builder {
    use super::*;

    #[test]
    fn new_keeps_url() {
        let dispatcher = WebhookDispatcher::new(MockClient::status(200, ""), test_url());
        assert_eq!(
            dispatcher.url().as_str(),
            "https://hooks.example.com/services/T0/B0/X"
        );
    }
}

mod dispatcher_post {
    use super::*;

    #[tokio::test]
    async fn posts_json_to_configured_url() {
        let client = Arc::new(MockClient::status(200, "ok"));
        let dispatcher = WebhookDispatcher::new(client.clone(), test_url());

        dispatcher.post(&json!({"text": "hi"})).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(requests[0].url, test_url());
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"text": "hi"}));
    }

    #[tokio::test]
    async fn content_length_counts_bytes_not_chars() {
        let client = Arc::new(MockClient::status(200, "ok"));
        let dispatcher = WebhookDispatcher::new(client.clone(), test_url());
        let message = json!({"text": "Zustellung \u{00fc}ber \u{2709}"});

        dispatcher.post(&message).await.unwrap();

        let request = &client.captured_requests()[0];
        let body = request.body.as_ref().unwrap();
        let serialized = serde_json::to_string(&message).unwrap();
        assert!(body.len() > serialized.chars().count());
        assert_eq!(
            request.headers.get(http::header::CONTENT_LENGTH).unwrap(),
            body.len().to_string().as_str()
        );
    }

    #[tokio::test]
    async fn returns_status_reason_and_body() {
        let dispatcher = WebhookDispatcher::new(MockClient::status(404, "no_team"), test_url());

        let result = dispatcher.post(&json!({})).await.unwrap();

        assert_eq!(result.status, http::StatusCode::NOT_FOUND);
        assert_eq!(result.status_message, "Not Found");
        assert_eq!(result.body, "no_team");
    }

    #[tokio::test]
    async fn server_errors_are_results_not_errors() {
        let dispatcher = WebhookDispatcher::new(MockClient::status(503, ""), test_url());

        let result = dispatcher.post(&json!({})).await.unwrap();

        assert_eq!(result.outcome(), DeliveryOutcome::ServerError);
    }

    #[tokio::test]
    async fn transport_failure_is_http_error() {
        let dispatcher = WebhookDispatcher::new(
            MockClient::failing(HttpError::Connection(Box::new(std::io::Error::other(
                "reset",
            )))),
            test_url(),
        );

        let result = dispatcher.post(&json!({})).await;

        assert!(matches!(
            result,
            Err(DispatchError::Http(HttpError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn sends_exactly_one_request() {
        let client = Arc::new(MockClient::new(vec![
            Ok(HttpResponse::new(
                http::StatusCode::INTERNAL_SERVER_ERROR,
                http::HeaderMap::new(),
                vec![],
            )),
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                vec![],
            )),
        ]));
        let dispatcher = WebhookDispatcher::new(client.clone(), test_url());

        let result = dispatcher.post(&json!({})).await.unwrap();

        assert_eq!(result.status, http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(client.captured_requests().len(), 1);
    }
}

mod delivery_outcome {
    use super::*;

    fn outcome(code: u16) -> DeliveryOutcome {
        DeliveryOutcome::from_status(http::StatusCode::from_u16(code).unwrap())
    }

    #[test]
    fn below_400_is_delivered() {
        for code in [200, 201, 204, 301, 302, 399] {
            assert_eq!(outcome(code), DeliveryOutcome::Delivered, "{code}");
        }
    }

    #[test]
    fn client_errors_are_rejected() {
        for code in [400, 403, 404, 410, 429, 499] {
            assert_eq!(outcome(code), DeliveryOutcome::Rejected, "{code}");
        }
    }

    #[test]
    fn server_errors_are_server_error() {
        for code in [500, 502, 503, 504, 599] {
            assert_eq!(outcome(code), DeliveryOutcome::ServerError, "{code}");
        }
    }

    #[test]
    fn only_server_error_is_failure() {
        assert!(DeliveryOutcome::Delivered.is_success());
        assert!(DeliveryOutcome::Rejected.is_success());
        assert!(!DeliveryOutcome::ServerError.is_success());
    }

    #[test]
    fn displays_label() {
        assert_eq!(DeliveryOutcome::ServerError.to_string(), "server error");
    }

    #[test]
    fn delivery_result_classifies_its_status() {
        let result = DeliveryResult {
            status: http::StatusCode::OK,
            status_message: "OK".to_string(),
            body: "ok".to_string(),
        };
        assert_eq!(result.outcome(), DeliveryOutcome::Delivered);
    }
}

mod is_retryable {
    use super::*;

    #[test]
    fn transport_failures_are_retryable() {
        assert!(HttpError::Timeout.is_retryable());
        assert!(HttpError::Connection(Box::new(std::io::Error::other("x"))).is_retryable());
    }

    #[test]
    fn configuration_failures_are_not_retryable() {
        assert!(!HttpError::InvalidUrl("bad".to_string()).is_retryable());
        assert!(!HttpError::Build(Box::new(std::io::Error::other("x"))).is_retryable());
    }

    #[test]
    fn dispatch_error_delegates_to_http_error() {
        assert!(DispatchError::Http(HttpError::Timeout).is_retryable());
        assert!(!DispatchError::Http(HttpError::InvalidUrl("bad".to_string())).is_retryable());
    }

    #[test]
    fn serialization_failure_is_not_retryable() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!DispatchError::Serialize(error).is_retryable());
    }
}
