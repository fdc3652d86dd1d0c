//! Authentication — user profile types and the auth sub-client.
//!
//! ## Session model
//!
//! The backend runs Google OAuth and sets an HTTP-only `access_token` cookie.
//! The client never sees the token: `TradingHttp`'s cookie store carries it,
//! `GET /api/auth/me` validates it, `POST /api/auth/logout` clears it.
//! Login itself is a full-page redirect to `{origin}/api/auth/google`, not an
//! API call.

pub mod client;

use crate::shared::parse_backend_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub google_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Wire shape of `GET /api/auth/me`.
///
/// The profile timestamps are only present when the backend returns the full
/// DB record; treat them as optional.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub google_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl From<UserResponse> for User {
    fn from(u: UserResponse) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            picture: u.picture,
            google_id: u.google_id,
            created_at: u.created_at.as_deref().map(parse_backend_timestamp),
            last_login: u.last_login.as_deref().map(parse_backend_timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_without_timestamps() {
        let json = r#"{
            "id": "u-1",
            "email": "dev@example.com",
            "name": "Dev",
            "picture": null,
            "google_id": "g-123"
        }"#;
        let user: User = serde_json::from_str::<UserResponse>(json).unwrap().into();
        assert_eq!(user.email, "dev@example.com");
        assert!(user.created_at.is_none());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_user_response_with_timestamps() {
        let json = r#"{
            "id": "u-1",
            "email": "dev@example.com",
            "name": "Dev",
            "picture": "https://lh3.example/p.png",
            "google_id": "g-123",
            "created_at": "2025-01-02T03:04:05",
            "last_login": "2025-08-20T10:00:00"
        }"#;
        let user: User = serde_json::from_str::<UserResponse>(json).unwrap().into();
        assert_eq!(
            user.created_at.unwrap().to_rfc3339(),
            "2025-01-02T03:04:05+00:00"
        );
        assert_eq!(user.picture.as_deref(), Some("https://lh3.example/p.png"));
    }
}
