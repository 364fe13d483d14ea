//! Session handling.
//!
//! A [`SessionProvider`] publishes [`AuthSnapshot`]s on a `tokio` watch
//! channel. The UI subscribes once and reads the latest snapshot every
//! frame. [`LocalSession`] is the only implementation: it signs in as the
//! configured profile, with no remote back-end.

use std::fmt;

use anchor_protocol::AuthSnapshot;
use tokio::sync::watch;
use tracing::info;

use crate::profile::ProfileConfig;

/// The authentication collaborator consulted by the UI.
pub trait SessionProvider: fmt::Debug {
    /// Returns a receiver that always holds the latest snapshot.
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot>;

    /// Resolves the initial loading state. Called once at start-up.
    fn restore(&self);

    fn login(&self);

    fn logout(&self);
}

/// A session backed by the local profile.
///
/// # Examples
///
/// ```
/// use anchor_config::{LocalSession, ProfileConfig, SessionProvider};
/// use anchor_protocol::AuthGate;
///
/// let session = LocalSession::new(ProfileConfig::default());
/// let auth = session.subscribe();
/// assert_eq!(auth.borrow().gate(), AuthGate::Loading);
///
/// session.restore();
/// assert_eq!(auth.borrow().gate(), AuthGate::SignedOut);
///
/// session.login();
/// assert_eq!(auth.borrow().gate(), AuthGate::SignedIn);
/// ```
pub struct LocalSession {
    profile: ProfileConfig,
    sender: watch::Sender<AuthSnapshot>,
}

impl fmt::Debug for LocalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSession")
            .field("profile", &self.profile)
            .field("current", &*self.sender.borrow())
            .finish()
    }
}

impl LocalSession {
    /// Creates a session in the loading state.
    #[must_use]
    pub fn new(profile: ProfileConfig) -> Self {
        let (sender, _) = watch::channel(AuthSnapshot::loading());
        Self { profile, sender }
    }

    fn publish(&self, snapshot: AuthSnapshot) {
        self.sender.send_replace(snapshot);
    }
}

impl SessionProvider for LocalSession {
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.sender.subscribe()
    }

    fn restore(&self) {
        if self.profile.auto_sign_in {
            self.login();
        } else {
            self.publish(AuthSnapshot::signed_out());
        }
    }

    fn login(&self) {
        let user = self.profile.user();
        info!(user = %user.name, "signed in");
        self.publish(AuthSnapshot::signed_in(user));
    }

    fn logout(&self) {
        info!("signed out");
        self.publish(AuthSnapshot::signed_out());
    }
}
