//! Authentication state published by the session collaborator.

use serde::{Deserialize, Serialize};

/// The signed-in person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }
}

/// A point-in-time view of the session.
///
/// # Examples
///
/// ```
/// use anchor_protocol::{AuthGate, AuthSnapshot, User};
///
/// assert_eq!(AuthSnapshot::loading().gate(), AuthGate::Loading);
/// assert_eq!(AuthSnapshot::signed_out().gate(), AuthGate::SignedOut);
/// assert_eq!(AuthSnapshot::signed_in(User::new("Sam")).gate(), AuthGate::SignedIn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    /// Set while the session is still being restored.
    pub is_loading: bool,
}

impl AuthSnapshot {
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    /// Decides what the shell may show. Loading wins over everything else.
    #[must_use]
    pub const fn gate(&self) -> AuthGate {
        if self.is_loading {
            AuthGate::Loading
        } else if self.user.is_some() {
            AuthGate::SignedIn
        } else {
            AuthGate::SignedOut
        }
    }
}

/// Which top-level screen the session allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthGate {
    Loading,
    SignedOut,
    SignedIn,
}
