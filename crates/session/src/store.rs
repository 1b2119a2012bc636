//! Process-wide session store with login/logout lifecycle.

use crate::profile::UserProfile;
use crate::roles::Role;
use crate::storage::{SessionStorage, ROLE_KEY, TOKEN_KEY, USER_KEY};

/// Single source of truth for the current session.
///
/// Two states: logged out (token absent) and logged in (token present).
/// `restore` may move logged-out to logged-in if valid persisted data
/// exists; `login` always (re-)enters logged-in; `logout` always leaves it.
/// There is no refresh or expiry transition: a token is trusted until the
/// backend rejects it.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    user: Option<UserProfile>,
    token: Option<String>,
    role: Option<Role>,
    loading: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store in the loading state. Callers must run [`restore`]
    /// before making authorization decisions.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            user: None,
            token: None,
            role: None,
            loading: true,
        }
    }

    /// Rehydrate the session from storage.
    ///
    /// Populates in-memory state only when all three persisted entries are
    /// present; absence simply means "logged out". The loading flag is
    /// cleared unconditionally: this is the suspension point route guards
    /// wait on.
    pub fn restore(&mut self) {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<UserProfile>(&raw)
                .map_err(|err| tracing::warn!("discarding unreadable persisted profile: {err}"))
                .ok()
        });
        let role = self.storage.get(ROLE_KEY).map(|s| Role::from_canonical(&s));

        if let (Some(token), Some(user), Some(role)) = (token, user, role) {
            tracing::debug!(role = %role, "session restored from storage");
            self.token = Some(token);
            self.user = Some(user);
            self.role = Some(role);
        }

        self.loading = false;
    }

    /// Establish a session from the backend's raw profile and bearer token.
    ///
    /// The raw role string is translated through the fixed mapping table and
    /// all three entries are persisted together.
    pub fn login(&mut self, profile: UserProfile, token: impl Into<String>) {
        let token = token.into();
        let role = Role::from_raw(&profile.rol);
        tracing::info!(email = %profile.email, role = %role, "login");

        self.storage.set(TOKEN_KEY, &token);
        match serde_json::to_string(&profile) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(err) => tracing::error!("failed to serialize profile for storage: {err}"),
        }
        self.storage.set(ROLE_KEY, role.as_str());

        self.token = Some(token);
        self.user = Some(profile);
        self.role = Some(role);
        self.loading = false;
    }

    /// Clear the session. Idempotent: a logged-out store stays logged out.
    pub fn logout(&mut self) {
        if self.token.is_some() {
            tracing::info!("logout");
        }
        self.user = None;
        self.token = None;
        self.role = None;

        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(ROLE_KEY);
    }

    /// Whether the startup rehydration has completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Consume the store and hand back its storage (reload simulation in
    /// tests, storage migration in the shell).
    pub fn into_storage(self) -> S {
        self.storage
    }
}
