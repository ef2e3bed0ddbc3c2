//! Payload shapes exchanged with the identity authority.

use serde::{Deserialize, Serialize};

/// User identity record resolved by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Assigned role (e.g. `"admin"`).
    pub role: String,
}

/// Credentials sent to `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login response: the issued token plus the identity it names.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Error payload the authority may attach to a rejection.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong, when the server
    /// bothers to include one.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
