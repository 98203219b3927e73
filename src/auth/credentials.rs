use std::fmt;

use serde::Serialize;

/// Username/password pair supplied by the user for login or registration.
///
/// Credentials exist only for the duration of a submission and serialize
/// straight into the request body. They are never written to disk.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Manual impl so a stray debug log can never leak the password.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "hunter2");
        let output = format!("{:?}", credentials);
        assert!(output.contains("alice"));
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_serializes_both_fields() {
        let credentials = Credentials::new("alice", "hunter2");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "hunter2");
    }
}
