//! Webhook dispatcher and retry classification.

use http::StatusCode;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use super::{DeliveryOutcome, DispatchError, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Outcome of a single webhook exchange.
///
/// Consumed once by the invocation to decide between success, permanent
/// failure and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// HTTP status code.
    pub status: StatusCode,
    /// Reason phrase for the status.
    pub status_message: String,
    /// Full response body.
    pub body: String,
}

impl DeliveryResult {
    /// Classifies the status code.
    #[must_use]
    pub fn outcome(&self) -> DeliveryOutcome {
        DeliveryOutcome::from_status(self.status)
    }
}

impl From<HttpResponse> for DeliveryResult {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.status,
            status_message: response.reason().to_string(),
            body: response.body_text(),
        }
    }
}

/// Posts JSON messages to a single webhook endpoint.
///
/// Performs exactly one request per call. Retrying is left to the caller,
/// driven by the returned status code.
///
/// # Example
///
/// ```no_run
/// use ses_notify::webhook::{ReqwestClient, WebhookDispatcher};
/// use serde_json::json;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = WebhookDispatcher::new(
///     ReqwestClient::new()?,
///     Url::parse("https://hooks.example.com/services/T000/B000/XXXX")?,
/// );
/// let result = dispatcher.post(&json!({ "text": "hello" })).await?;
/// println!("{} {}", result.status, result.status_message);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookDispatcher<H> {
    client: H,
    url: url::Url,
}

impl<H> WebhookDispatcher<H> {
    /// Creates a dispatcher for the given endpoint.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> WebhookDispatcher<H> {
    /// Serializes `message` and POSTs it to the endpoint.
    ///
    /// Any response, including 4xx and 5xx, is returned as a
    /// [`DeliveryResult`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if serialization fails or no response was
    /// received.
    pub async fn post<T: Serialize + Sync>(
        &self,
        message: &T,
    ) -> Result<DeliveryResult, DispatchError> {
        let request = self.build_request(message)?;

        tracing::debug!(
            host = self.url.host_str().unwrap_or_default(),
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Posting message to webhook"
        );

        let response = self.client.request(request).await?;
        Ok(DeliveryResult::from(response))
    }

    fn build_request<T: Serialize>(&self, message: &T) -> Result<HttpRequest, DispatchError> {
        let body = serde_json::to_vec(message)?;
        // Byte length, not character count.
        let length = HeaderValue::from(body.len());

        Ok(HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(CONTENT_LENGTH, length)
            .with_body(body))
    }
}

/// Extension trait for checking if an error is retryable.
///
/// Determines whether an error represents a transient failure that the
/// invoking host should retry by re-running the whole invocation.
pub trait IsRetryable {
    /// Returns true if the error is potentially transient and should be retried.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for HttpError {
    fn is_retryable(&self) -> bool {
        match self {
            // Network errors are typically transient
            Self::Connection(_) | Self::Timeout => true,
            // Configuration issues, not transient
            Self::InvalidUrl(_) | Self::Build(_) => false,
        }
    }
}

impl IsRetryable for DispatchError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_retryable(),
            Self::Serialize(_) => false,
        }
    }
}
