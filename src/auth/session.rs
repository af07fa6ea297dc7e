//! Explicit session object: who is logged in, restored across restarts.

use tracing::{info, instrument, warn};

use crate::auth::directory::IdentityProvider;
use crate::auth::persistence::SessionPersistence;
use crate::error::CoreError;
use crate::model::identity::Identity;
use crate::model::role::Role;

/// `Uninitialized → Loading → Ready`. Views wait for `Ready` before deciding
/// between "logged in" and "logged out".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready(Option<Identity>),
}

pub struct SessionStore<P, I> {
    persistence: P,
    provider: I,
    state: SessionState,
}

impl<P: SessionPersistence, I: IdentityProvider> SessionStore<P, I> {
    pub fn new(persistence: P, provider: I) -> Self {
        Self {
            persistence,
            provider,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Restores a persisted identity. Runs once; later calls return the
    /// settled state untouched.
    pub fn initialize(&mut self) -> &SessionState {
        if self.state != SessionState::Uninitialized {
            return &self.state;
        }
        self.state = SessionState::Loading;

        let restored = self.persistence.load();
        match &restored {
            Some(identity) => info!(user_id = identity.id, "Session restored"),
            None => {
                // Drops whatever unreadable leftover the slot may hold.
                if let Err(e) = self.persistence.clear() {
                    warn!(error = %e, "Failed to clear stored session");
                }
            }
        }

        self.state = SessionState::Ready(restored);
        &self.state
    }

    /// Like [`login`](Self::login), with the generic failure as an error.
    #[instrument(name = "session_login", skip(self, password))]
    pub fn try_login(&mut self, email: &str, password: &str) -> Result<&Identity, CoreError> {
        let Some(identity) = self.provider.find_by_credentials(email, password) else {
            info!("Invalid credentials");
            return Err(CoreError::AuthFailure);
        };

        if let Err(e) = self.persistence.save(&identity) {
            warn!(error = %e, "Failed to persist session");
        }
        info!(user_id = identity.id, role = %identity.role, "Login successful");

        self.state = SessionState::Ready(Some(identity));
        match &self.state {
            SessionState::Ready(Some(identity)) => Ok(identity),
            _ => Err(CoreError::AuthFailure),
        }
    }

    /// True and logged in on a credential match; false and unchanged otherwise.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.try_login(email, password).is_ok()
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current_identity() {
            info!(user_id = identity.id, "Logged out");
        }
        self.state = SessionState::Ready(None);
        if let Err(e) = self.persistence.clear() {
            warn!(error = %e, "Failed to clear stored session");
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Ready(identity) => identity.as_ref(),
            _ => None,
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_identity().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_identity().is_some()
    }
}
