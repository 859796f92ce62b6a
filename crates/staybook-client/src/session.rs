//! Client session state machine.
//!
//! ```text
//! Unknown ──IdentityConfirmed──▶ Authenticated ──SignedOut / RefreshFailed──▶ Anonymous
//!    └──────IdentityRejected───────────────────────────────────────────────▶ Anonymous
//! Anonymous ──SignedIn──▶ Authenticated
//! ```
//!
//! `SignedIn` is accepted from every phase and replaces the held session.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use staybook_entity::user::UserProfile;

/// Where the client stands with respect to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No identity check has completed yet.
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// Inputs to the session machine.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// `GET /api/me` succeeded.
    IdentityConfirmed {
        access_token: Option<String>,
        user: Option<UserProfile>,
    },
    /// `GET /api/me` failed.
    IdentityRejected,
    /// Sign-in or sign-up succeeded.
    SignedIn {
        access_token: Option<String>,
        user: Option<UserProfile>,
    },
    SignedOut,
    /// The interceptor could not renew the access token.
    RefreshFailed,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::IdentityConfirmed { .. } => "identity_confirmed",
            Self::IdentityRejected => "identity_rejected",
            Self::SignedIn { .. } => "signed_in",
            Self::SignedOut => "signed_out",
            Self::RefreshFailed => "refresh_failed",
        }
    }
}

/// The in-memory session: phase plus the current access token and user.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    phase: SessionPhase,
    access_token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Applies `event`. Returns false, leaving the state untouched, when the
    /// event is not defined for the current phase.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        let from = self.phase;
        let event_name = event.name();

        match (from, event) {
            (SessionPhase::Unknown, SessionEvent::IdentityConfirmed { access_token, user })
            | (_, SessionEvent::SignedIn { access_token, user }) => {
                self.phase = SessionPhase::Authenticated;
                self.access_token = access_token;
                self.user = user;
            }
            (SessionPhase::Unknown, SessionEvent::IdentityRejected)
            | (SessionPhase::Authenticated, SessionEvent::SignedOut)
            | (SessionPhase::Authenticated, SessionEvent::RefreshFailed) => {
                self.phase = SessionPhase::Anonymous;
                self.access_token = None;
                self.user = None;
            }
            _ => {
                warn!(phase = ?from, event = event_name, "Ignoring undefined session transition");
                return false;
            }
        }

        debug!(from = ?from, to = ?self.phase, event = event_name, "Session transition");
        true
    }

    /// Swaps in a renewed access token. The phase is unchanged.
    pub fn replace_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }
}
