//! Webhook layer for delivering messages to a chat endpoint.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot message delivery ([`WebhookDispatcher`], [`DeliveryResult`])
//! - Response and error classification ([`DeliveryOutcome`], [`IsRetryable`])

mod client;
mod dispatcher;
mod error;
mod http;
mod outcome;

#[cfg(test)]
mod dispatcher_tests;

pub use client::{ReqwestClient, USER_AGENT};
pub use dispatcher::{DeliveryResult, IsRetryable, WebhookDispatcher};
pub use error::{DispatchError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use outcome::DeliveryOutcome;
