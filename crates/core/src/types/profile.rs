//! Authentication requests and the signed-in user's profile.

use serde::{Deserialize, Serialize};

/// Role value the backend assigns to administrators.
const ADMIN_ROLE: &str = "admin";

/// The user record returned by `GET /api/auth/profile`.
///
/// Only the fields the console displays are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Profile {
    /// Whether the backend marked this user as an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Admin")
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login or registration response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let json = r#"{"_id":"u1","name":"Root","email":"r@x.io","role":"admin","createdAt":"x"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.is_admin());
        assert_eq!(profile.display_name(), "Root");
    }

    #[test]
    fn test_profile_non_admin() {
        let profile: Profile = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert!(!profile.is_admin());
        assert_eq!(profile.display_name(), "Admin");
    }

    #[test]
    fn test_profile_wrapped_user_has_no_role() {
        let profile: Profile = serde_json::from_str(r#"{"user":{"role":"admin"}}"#).unwrap();
        assert!(!profile.is_admin());
    }
}
