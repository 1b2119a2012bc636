//! Canonical roles and the raw-to-canonical translation table.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical role identifier used by route guards and menus.
///
/// The backend sends raw role strings (e.g. `coordinador_obra`); [`Role::from_raw`]
/// maps them through a fixed table. Raw values outside the table pass through
/// unchanged as [`Role::Unrecognized`]: the historical behavior of the client,
/// kept so an unknown role degrades to "no route matches" instead of a login
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Superadmin,
    Cliente,
    Coordinador,
    CoordinadorLogistico,
    Tecnico,
    Supervisor,
    /// A raw role string with no translation entry, carried verbatim.
    Unrecognized(String),
}

impl Role {
    /// Translate a raw backend role string into a canonical role.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "super_administrador" => Role::Superadmin,
            "cliente" => Role::Cliente,
            "coordinador_obra" => Role::Coordinador,
            "coordinador_logistico" => Role::CoordinadorLogistico,
            "tecnico" => Role::Tecnico,
            "supervisor_obra" => Role::Supervisor,
            other => {
                tracing::warn!(raw = other, "unrecognized raw role; passing through");
                Role::Unrecognized(other.to_string())
            }
        }
    }

    /// Parse a canonical role string (the persisted form).
    pub fn from_canonical(s: &str) -> Self {
        match s {
            "superadmin" => Role::Superadmin,
            "cliente" => Role::Cliente,
            "coordinador" => Role::Coordinador,
            "coordinadorlogistico" => Role::CoordinadorLogistico,
            "tecnico" => Role::Tecnico,
            "supervisor" => Role::Supervisor,
            other => Role::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Cliente => "cliente",
            Role::Coordinador => "coordinador",
            Role::CoordinadorLogistico => "coordinadorlogistico",
            Role::Tecnico => "tecnico",
            Role::Supervisor => "supervisor",
            Role::Unrecognized(s) => s,
        }
    }

    /// Whether this role belongs to the closed canonical set.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Err(D::Error::custom("role cannot be empty"));
        }
        Ok(Role::from_canonical(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_table_covers_all_raw_roles() {
        assert_eq!(Role::from_raw("super_administrador"), Role::Superadmin);
        assert_eq!(Role::from_raw("coordinador_obra"), Role::Coordinador);
        assert_eq!(
            Role::from_raw("coordinador_logistico"),
            Role::CoordinadorLogistico
        );
        assert_eq!(Role::from_raw("supervisor_obra"), Role::Supervisor);
        assert_eq!(Role::from_raw("tecnico"), Role::Tecnico);
        assert_eq!(Role::from_raw("cliente"), Role::Cliente);
    }

    #[test]
    fn unrecognized_raw_role_passes_through_unchanged() {
        let role = Role::from_raw("xyz");
        assert_eq!(role, Role::Unrecognized("xyz".to_string()));
        assert_eq!(role.as_str(), "xyz");
        assert!(!role.is_canonical());
    }

    #[test]
    fn canonical_string_round_trips() {
        for role in [
            Role::Superadmin,
            Role::Cliente,
            Role::Coordinador,
            Role::CoordinadorLogistico,
            Role::Tecnico,
            Role::Supervisor,
        ] {
            assert_eq!(Role::from_canonical(role.as_str()), role);
            assert!(role.is_canonical());
        }
    }

    #[test]
    fn serde_uses_the_canonical_string() {
        let json = serde_json::to_string(&Role::CoordinadorLogistico).unwrap();
        assert_eq!(json, "\"coordinadorlogistico\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::CoordinadorLogistico);
    }
}
