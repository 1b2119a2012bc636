//! Wire types for the backend's JSON endpoints.

use ecoobra_session::Role;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/usuarios/login/`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. `rol` is the backend's raw role string and
/// still needs translation before use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    pub rol: String,
    pub token: String,
}

/// Nested account record some listings carry instead of a flat email.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsuarioRef {
    pub email: Option<String>,
}

/// Technician as returned by `GET /api/tecnicos/lista/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tecnico {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub usuario: Option<UsuarioRef>,
}

impl Tecnico {
    /// The email to match the logged-in user against. The nested account
    /// email wins over the flat field when both are present.
    pub fn email_candidate(&self) -> Option<&str> {
        self.usuario
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .or(self.email.as_deref())
    }
}

/// Supervisor as returned by `GET /api/supervisores/{obra}/supervisores/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Supervisor {
    pub id: i64,
    pub nombre: String,
}

/// Technicians offered to the current user.
///
/// A technician-role user may only pick themselves, so the listing is
/// narrowed to entries whose email matches theirs (case-insensitively).
/// Every other role sees the full list.
pub fn tecnicos_for_session(role: &Role, logged_email: &str, list: Vec<Tecnico>) -> Vec<Tecnico> {
    if *role != Role::Tecnico {
        return list;
    }
    let logged = logged_email.to_lowercase();
    list.into_iter()
        .filter(|t| {
            t.email_candidate()
                .is_some_and(|email| email.to_lowercase() == logged)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tecnico(id: i64, email: Option<&str>, nested: Option<&str>) -> Tecnico {
        Tecnico {
            id,
            nombre: format!("T{id}"),
            email: email.map(str::to_string),
            usuario: nested.map(|e| UsuarioRef {
                email: Some(e.to_string()),
            }),
        }
    }

    #[test]
    fn nested_account_email_wins_over_the_flat_field() {
        let t = tecnico(1, Some("flat@x.com"), Some("nested@x.com"));
        assert_eq!(t.email_candidate(), Some("nested@x.com"));

        let t = tecnico(2, Some("flat@x.com"), None);
        assert_eq!(t.email_candidate(), Some("flat@x.com"));
    }

    #[test]
    fn technician_role_only_sees_their_own_entry() {
        let list = vec![
            tecnico(1, Some("ana@eco.com"), None),
            tecnico(2, None, Some("Beto@Eco.com")),
            tecnico(3, None, None),
        ];

        let mine = tecnicos_for_session(&Role::Tecnico, "beto@eco.com", list.clone());
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, 2);

        let all = tecnicos_for_session(&Role::Coordinador, "beto@eco.com", list);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn technician_without_any_email_never_matches() {
        let list = vec![tecnico(3, None, None)];
        assert!(tecnicos_for_session(&Role::Tecnico, "x@y.com", list).is_empty());
    }

    #[test]
    fn login_response_decodes_the_backend_shape() {
        let body = r#"{"email": "ana@eco.com", "rol": "coordinador_obra", "token": "abc123"}"#;
        let resp: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.email, "ana@eco.com");
        assert_eq!(resp.rol, "coordinador_obra");
        assert_eq!(resp.token, "abc123");
    }
}
