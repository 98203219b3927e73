//! Credential submission and profile retrieval.
//!
//! `AuthService` owns the HTTP client and an injected `SessionStore`; it is
//! the only place the store is ever written. The token is read from the
//! store at request time, so a re-login is picked up by the next protected
//! request.
//!
//! Known hazard: a `login` and a `get_profile` awaited concurrently are not
//! ordered with respect to each other - the profile request sends whatever
//! token the store held when it started. This mirrors the original client,
//! which made no ordering guarantee either; we document it rather than
//! serialize the calls.

use serde::Deserialize;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::models::UserProfile;

use super::error::{AuthenticationError, ProfileFetchError, RegistrationError};
use super::{Credentials, SessionStore};

/// Login endpoint path
const LOGIN_PATH: &str = "/auth/login";
/// Registration endpoint path
const REGISTER_PATH: &str = "/auth/register";
/// Profile endpoint path
const PROFILE_PATH: &str = "/user/profile";

/// Successful login response. Extra fields (`token_type`, user echo, ...)
/// are ignored; only the token matters to this client.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct AuthService {
    api: ApiClient,
    store: SessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// Read access to the session store, for callers that gate views on
    /// whether a token exists.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Submit credentials and commit the issued token to the session store.
    ///
    /// The store is written only after the server accepts the login, so a
    /// failed attempt leaves any previous session in place. Logging in again
    /// simply overwrites the stored token.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        let response: TokenResponse = self
            .api
            .post(LOGIN_PATH, credentials, None)
            .await
            .map_err(AuthenticationError::from_api)?;

        self.store
            .set_token(response.access_token)
            .map_err(|e| AuthenticationError::SessionStore(e.into()))?;

        info!("login succeeded, session saved");
        Ok(())
    }

    /// Create an account. Registration never touches the session store; the
    /// user logs in afterwards to establish a session.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), RegistrationError> {
        self.api
            .post_discard(REGISTER_PATH, credentials, None)
            .await
            .map_err(RegistrationError::from_api)?;

        info!("registration accepted");
        Ok(())
    }

    /// Fetch the current user's profile through the authenticated path.
    ///
    /// The request is attempted even when no token is stored - the server is
    /// the sole arbiter of whether an unauthenticated request is acceptable.
    pub async fn get_profile(&self) -> Result<UserProfile, ProfileFetchError> {
        let token = self.store.token();
        if token.is_none() {
            debug!("no stored session, requesting profile unauthenticated");
        }
        self.api
            .get(PROFILE_PATH, token)
            .await
            .map_err(ProfileFetchError::from_api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token": "tok123", "token_type": "bearer", "user": {"id": 1}}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok123");
    }

    #[test]
    fn test_token_response_requires_access_token() {
        let json = r#"{"token_type": "bearer"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }
}
