//! Opaque user profile as delivered by the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The backend's raw user profile.
///
/// Only `email` and the raw role string are interpreted; everything else is
/// carried opaquely so a round trip through storage is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,

    /// Untranslated backend role string (e.g. `coordinador_obra`).
    pub rol: String,

    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>, rol: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            rol: rol.into(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_profile_fields_survive_a_round_trip() {
        let raw = json!({
            "email": "tec@example.com",
            "rol": "tecnico",
            "nombre": "Ana",
            "telefono": "099111222"
        });
        let profile: UserProfile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.email, "tec@example.com");
        assert_eq!(profile.extra.get("nombre"), Some(&json!("Ana")));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back, raw);
    }
}
