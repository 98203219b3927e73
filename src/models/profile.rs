use serde::{Deserialize, Serialize};

/// Profile of the authenticated user as returned by `GET /user/profile`.
///
/// Fetched on demand and not cached; a rendered profile stays valid even if
/// the session token is later replaced. Unknown server fields are ignored so
/// the backend contract can grow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let json = r#"{"username": "alice", "email": "alice@example.com"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@example.com");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"username": "alice", "email": "a@b.c", "avatar_url": null, "id": 7}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "alice");
    }
}
