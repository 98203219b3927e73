//! Error taxonomy for the auth layer.
//!
//! Each operation fails with its own named error so callers always know
//! which flow broke, and every error carries a `FailureKind` derived from
//! the server's status so callers can branch without parsing messages.
//! The original client collapsed everything into one opaque failure per
//! operation; the kind classification replaces that.

use std::fmt;

use thiserror::Error;

use crate::api::ApiError;

/// Cause classification shared by the operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server rejected the credential pair.
    InvalidCredentials,
    /// Registration collided with an existing account.
    DuplicateAccount,
    /// A protected request was made without an acceptable token.
    Unauthorized,
    /// The request never completed (DNS, connection refused, timeout).
    NetworkUnavailable,
    /// The session token could not be persisted locally.
    Storage,
    /// Any other failure the server reported.
    Server,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::InvalidCredentials => "invalid username or password",
            FailureKind::DuplicateAccount => "account already exists",
            FailureKind::Unauthorized => "not authorized",
            FailureKind::NetworkUnavailable => "network unavailable",
            FailureKind::Storage => "session could not be saved",
            FailureKind::Server => "server error",
        })
    }
}

/// Login failed.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The server rejected the login or the request never completed.
    /// The session store is left untouched.
    #[error("login failed: {kind}")]
    Rejected {
        kind: FailureKind,
        #[source]
        source: ApiError,
    },

    /// The server accepted the login but the token could not be persisted.
    #[error("login succeeded but the session could not be saved")]
    SessionStore(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthenticationError {
    pub(crate) fn from_api(source: ApiError) -> Self {
        let kind = match &source {
            // The backend answers a bad credential pair with 401 (or 400 on
            // malformed input); both read as "wrong credentials" to the user.
            ApiError::Unauthorized | ApiError::BadRequest(_) => FailureKind::InvalidCredentials,
            ApiError::Network(_) => FailureKind::NetworkUnavailable,
            _ => FailureKind::Server,
        };
        Self::Rejected { kind, source }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { kind, .. } => *kind,
            Self::SessionStore(_) => FailureKind::Storage,
        }
    }
}

/// Registration failed.
#[derive(Debug, Error)]
#[error("registration failed: {kind}")]
pub struct RegistrationError {
    pub kind: FailureKind,
    #[source]
    pub source: ApiError,
}

impl RegistrationError {
    pub(crate) fn from_api(source: ApiError) -> Self {
        let kind = match &source {
            // FastAPI-style backends report a taken username as 400,
            // stricter ones as 409.
            ApiError::Conflict(_) | ApiError::BadRequest(_) => FailureKind::DuplicateAccount,
            ApiError::Network(_) => FailureKind::NetworkUnavailable,
            _ => FailureKind::Server,
        };
        Self { kind, source }
    }
}

/// Profile fetch failed.
#[derive(Debug, Error)]
#[error("profile fetch failed: {kind}")]
pub struct ProfileFetchError {
    pub kind: FailureKind,
    #[source]
    pub source: ApiError,
}

impl ProfileFetchError {
    pub(crate) fn from_api(source: ApiError) -> Self {
        let kind = match &source {
            ApiError::Unauthorized => FailureKind::Unauthorized,
            ApiError::Network(_) => FailureKind::NetworkUnavailable,
            _ => FailureKind::Server,
        };
        Self { kind, source }
    }
}
