//! Session view shared with the presentation layer.
//!
//! The view layer may read exactly two values per request: the display name
//! and the logged-in flag. Everything else about a session stays server-side.

use serde::{Deserialize, Serialize};

/// Display name used when nobody is logged in
pub const GUEST_NAME: &str = "Guest";

/// Read-only values derived from the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// `user.username` when logged in, otherwise [`GUEST_NAME`]
    pub username: String,
    /// Whether the session belongs to an authenticated user
    pub is_logged: bool,
}

impl SessionView {
    /// View of an anonymous session
    pub fn guest() -> Self {
        Self {
            username: GUEST_NAME.to_string(),
            is_logged: false,
        }
    }

    /// View of a session owned by `username`
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_logged: true,
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::guest()
    }
}
