//! HTTP adapter for the chatline REST API.
//!
//! `ApiClient` wraps every outbound request with the base endpoint, JSON
//! defaults, and a bounded timeout, and reports failures as `ApiError`.
//! Deciding what a failure means for login, registration, or a profile
//! fetch is the auth layer's job, not the adapter's.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
