/**
 * Session Management
 *
 * Server-side session store mapping opaque tokens (carried in the session
 * cookie) to session state. One `SessionManager` is created at startup, held
 * in the application state and torn down at shutdown; request handlers reach
 * it through axum state, never through a global.
 *
 * # State Machine
 *
 * ```text
 * Anonymous --promote--> LoggedIn
 *     |                     |
 *     +------destroy--------+--> Destroyed (entry removed)
 * ```
 *
 * A logged-in session lives for a fixed time from login. An anonymous session
 * also has an idle timeout, much shorter by default, which each request
 * renews up to the same fixed cap; clients that never send the cookie back
 * only leave short-lived entries behind. An expired token behaves exactly
 * like an unknown one: it resumes as a brand new anonymous session.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::PublicUser;
use crate::backend::error::SessionError;
use crate::shared::config::DEFAULT_SESSION_ANONYMOUS_IDLE;
use crate::shared::session::SessionView;

/// Session token (UUID stored in cookie)
pub type SessionToken = String;

/// Lifecycle state of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    /// Logged in; the user is part of the state so the flag cannot exist without it
    LoggedIn(PublicUser),
    /// Destroyed, expired or never issued
    Destroyed,
}

impl SessionState {
    pub fn is_logged(&self) -> bool {
        self.user().is_some()
    }

    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Self::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Values the view layer is allowed to read
    pub fn view(&self) -> SessionView {
        self.user()
            .map(|user| SessionView::logged_in(user.username.clone()))
            .unwrap_or_else(SessionView::guest)
    }
}

/// A live session as seen by one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub state: SessionState,
    /// True when the token was issued by this call and the cookie must be set
    pub is_new: bool,
}

impl Session {
    pub fn view(&self) -> SessionView {
        self.state.view()
    }
}

#[derive(Debug, Clone)]
struct SessionEntry {
    state: SessionState,
    created_at: Instant,
    expires_at: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory session store
///
/// Cloning is cheap; all clones share the same map. Sessions are ephemeral and
/// lost on server restart.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<SessionToken, SessionEntry>>>,
    max_age: Duration,
    anonymous_idle: Duration,
}

impl SessionManager {
    /// Create an empty store whose sessions live for `max_age`
    ///
    /// Anonymous sessions idle out after `DEFAULT_SESSION_ANONYMOUS_IDLE`.
    pub fn new(max_age: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_age,
            anonymous_idle: DEFAULT_SESSION_ANONYMOUS_IDLE.min(max_age),
        }
    }

    /// Set the idle timeout of anonymous sessions, capped at `max_age`
    pub fn with_anonymous_idle(mut self, idle: Duration) -> Self {
        self.anonymous_idle = idle.min(self.max_age);
        self
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn anonymous_idle(&self) -> Duration {
        self.anonymous_idle
    }

    fn new_token() -> SessionToken {
        Uuid::new_v4().to_string()
    }

    fn anonymous_deadline(&self, created_at: Instant, now: Instant) -> Instant {
        (now + self.anonymous_idle).min(created_at + self.max_age)
    }

    fn new_entry(&self, state: SessionState) -> SessionEntry {
        let now = Instant::now();
        let expires_at = match state {
            SessionState::Anonymous => self.anonymous_deadline(now, now),
            _ => now + self.max_age,
        };
        SessionEntry {
            state,
            created_at: now,
            expires_at,
        }
    }

    /// Resume the session behind `token`, or start a new anonymous one
    ///
    /// Absent, unknown and expired tokens all get a fresh token; expired
    /// entries are dropped on the way. Resuming an anonymous session renews
    /// its idle timeout.
    pub async fn create_or_resume(&self, token: Option<&str>) -> Session {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if let Some(token) = token {
            let expired = match sessions.get_mut(token) {
                Some(entry) if !entry.is_expired(now) => {
                    if entry.state == SessionState::Anonymous {
                        entry.expires_at = self.anonymous_deadline(entry.created_at, now);
                    }
                    return Session {
                        token: token.to_string(),
                        state: entry.state.clone(),
                        is_new: false,
                    };
                }
                Some(_) => true,
                None => false,
            };
            if expired {
                sessions.remove(token);
                tracing::debug!("Dropped expired session");
            }
        }

        let token = Self::new_token();
        sessions.insert(token.clone(), self.new_entry(SessionState::Anonymous));

        Session {
            token,
            state: SessionState::Anonymous,
            is_new: true,
        }
    }

    /// Move an anonymous session to the logged-in state
    ///
    /// The old token is retired and a new one issued, so a token planted
    /// before login is useless afterwards.
    pub async fn promote(&self, token: &str, user: PublicUser) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;

        let now = Instant::now();
        let current = sessions
            .get(token)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.state.clone());

        match current {
            Some(SessionState::Anonymous) => {}
            Some(SessionState::LoggedIn(_)) => return Err(SessionError::AlreadyLoggedIn),
            Some(SessionState::Destroyed) | None => {
                sessions.remove(token);
                return Err(SessionError::NotFound);
            }
        }

        sessions.remove(token);

        let new_token = Self::new_token();
        let state = SessionState::LoggedIn(user);
        sessions.insert(new_token.clone(), self.new_entry(state.clone()));

        Ok(Session {
            token: new_token,
            state,
            is_new: true,
        })
    }

    /// Remove the session and all of its data
    ///
    /// Idempotent: destroying an unknown or already destroyed token is a no-op.
    /// Returns whether anything was removed.
    pub async fn destroy(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Current state of `token`; missing and expired tokens are `Destroyed`
    pub async fn state(&self, token: &str) -> SessionState {
        let sessions = self.sessions.read().await;
        match sessions.get(token) {
            Some(entry) if !entry.is_expired(Instant::now()) => entry.state.clone(),
            _ => SessionState::Destroyed,
        }
    }

    /// Display name and logged-in flag for `token`
    pub async fn view(&self, token: &str) -> SessionView {
        self.state(token).await.view()
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now));
        before - sessions.len()
    }

    /// Get the number of stored sessions (for debugging)
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}
