//! Authentication data models
//!
//! Request and response shapes for the backend login endpoint

use serde::{Deserialize, Serialize};

/// Login request payload
///
/// Serialized verbatim; the backend is responsible for all validation.
/// The role is the value selected at the login form ("student", "teacher",
/// "principal" or "admin").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Account email address
    pub email: String,
    /// Plain text password
    pub password: String,
    /// Requested role
    pub role: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReply {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// The authenticated account
    pub user: UserProfile,
}

/// Account record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}
