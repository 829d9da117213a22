//! ses-notify: email notification forwarder
//!
//! A library for turning email-service delivery, bounce and complaint
//! notifications into chat webhook messages, with status-based retry
//! signaling for the host that invokes it.

pub mod config;
pub mod event;
pub mod invocation;
pub mod message;
pub mod webhook;
