//! Authentication and session state.
//!
//! This module provides:
//! - `Credentials`: transient username/password pair for login and registration
//! - `SessionStore`: durable, file-backed storage for the current token
//! - `AuthService`: login, registration, and profile retrieval
//!
//! A stored token survives restarts and is only ever replaced by the next
//! successful login. There is no logout path: the original client never
//! invalidates a session, it relies on the server to stop honoring the token.

pub mod credentials;
pub mod error;
pub mod service;
pub mod session;

pub use credentials::Credentials;
pub use error::{AuthenticationError, FailureKind, ProfileFetchError, RegistrationError};
pub use service::AuthService;
pub use session::SessionStore;
