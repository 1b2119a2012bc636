//! Role-gated view selector.

use ecoobra_session::{Role, SessionStorage, SessionStore};

/// Redirect target when no session exists.
pub const LANDING_PATH: &str = "/";
/// Redirect target when the role is not in the allow-list.
pub const FORBIDDEN_PATH: &str = "/unauthorized";

/// What a protected view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session rehydration has not finished; show a neutral indicator only.
    Loading,
    /// No token; send the user to the public landing view.
    RedirectToLanding,
    /// Authenticated but the role is not allowed; send to the forbidden view.
    RedirectToForbidden,
    /// Render the protected children.
    Render,
}

impl RouteDecision {
    /// Redirect path, if this decision is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            RouteDecision::RedirectToLanding => Some(LANDING_PATH),
            RouteDecision::RedirectToForbidden => Some(FORBIDDEN_PATH),
            RouteDecision::Loading | RouteDecision::Render => None,
        }
    }
}

/// Guard for one protected view.
///
/// `allowed_roles == None` means any authenticated role may enter. An empty
/// list is not the same thing: the membership test then denies everyone.
/// No route in the app is configured that way, but the semantics are kept
/// consistent with the membership check rather than special-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    allowed_roles: Option<Vec<Role>>,
}

impl RouteGuard {
    /// Any authenticated role may enter.
    pub fn any_authenticated() -> Self {
        Self {
            allowed_roles: None,
        }
    }

    /// Only the listed roles may enter.
    pub fn allowing(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: Some(roles.into_iter().collect()),
        }
    }

    pub fn allowed_roles(&self) -> Option<&[Role]> {
        self.allowed_roles.as_deref()
    }

    /// Decide what to render for the current session.
    ///
    /// Pure and synchronous once the session has loaded; recomputed on every
    /// navigation.
    pub fn decide<S: SessionStorage>(&self, session: &SessionStore<S>) -> RouteDecision {
        if session.is_loading() {
            return RouteDecision::Loading;
        }
        if !session.is_logged_in() {
            return RouteDecision::RedirectToLanding;
        }
        match (&self.allowed_roles, session.role()) {
            (None, _) => RouteDecision::Render,
            (Some(allowed), Some(role)) if allowed.contains(role) => RouteDecision::Render,
            (Some(_), _) => RouteDecision::RedirectToForbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoobra_session::{MemoryStorage, UserProfile};

    fn logged_in(raw_role: &str) -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();
        store.login(UserProfile::new("user@example.com", raw_role), "tok");
        store
    }

    fn logged_out() -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();
        store
    }

    #[test]
    fn loading_session_renders_nothing_else() {
        let store = SessionStore::new(MemoryStorage::new());
        let guard = RouteGuard::allowing([Role::Superadmin]);
        assert_eq!(guard.decide(&store), RouteDecision::Loading);
    }

    #[test]
    fn missing_token_redirects_to_landing() {
        let guard = RouteGuard::allowing([Role::Superadmin]);
        let decision = guard.decide(&logged_out());
        assert_eq!(decision, RouteDecision::RedirectToLanding);
        assert_eq!(decision.redirect_target(), Some(LANDING_PATH));
    }

    #[test]
    fn role_in_allow_list_renders() {
        let guard = RouteGuard::allowing([Role::Superadmin, Role::Tecnico]);
        assert_eq!(
            guard.decide(&logged_in("tecnico")),
            RouteDecision::Render
        );
    }

    #[test]
    fn role_outside_allow_list_redirects_to_forbidden() {
        let guard = RouteGuard::allowing([Role::Superadmin]);
        let decision = guard.decide(&logged_in("cliente"));
        assert_eq!(decision, RouteDecision::RedirectToForbidden);
        assert_eq!(decision.redirect_target(), Some(FORBIDDEN_PATH));
    }

    #[test]
    fn no_allow_list_admits_any_authenticated_role() {
        let guard = RouteGuard::any_authenticated();
        assert_eq!(guard.decide(&logged_in("xyz")), RouteDecision::Render);
        assert_eq!(
            guard.decide(&logged_out()),
            RouteDecision::RedirectToLanding
        );
    }

    #[test]
    fn empty_allow_list_denies_everyone() {
        let guard = RouteGuard::allowing([]);
        assert_eq!(
            guard.decide(&logged_in("super_administrador")),
            RouteDecision::RedirectToForbidden
        );
    }
}
