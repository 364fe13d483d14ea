//! Local user profile.

use anchor_protocol::User;
use serde::{Deserialize, Serialize};

/// Name used when neither the profile nor the environment provides one.
pub const FALLBACK_NAME: &str = "friend";

/// Who is using anchor on this machine, and whether to sign in on start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Name shown in the header. Defaults to `$USER`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Restore a signed-in session at start-up instead of showing the
    /// sign-in screen.
    #[serde(default)]
    pub auto_sign_in: bool,
}

impl ProfileConfig {
    /// Resolves the user this profile signs in as.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_config::ProfileConfig;
    ///
    /// let profile = ProfileConfig {
    ///     display_name: Some("Sam".into()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(profile.user().name, "Sam");
    /// ```
    #[must_use]
    pub fn user(&self) -> User {
        let name = self
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|name| !name.is_empty()))
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        User {
            name,
            email: self.email.clone(),
        }
    }
}
