//! `ecoobra-client`: HTTP access to the ecoobra backend.
//!
//! Wraps the backend's token-authenticated JSON endpoints (login, technician
//! and supervisor listings, inspection form submission) behind [`ApiClient`],
//! with request cancellation for lookups that become stale when the user
//! changes their selection.

pub mod api;
pub mod cancel;
pub mod config;
pub mod driver;
pub mod error;
pub mod types;

pub use api::ApiClient;
pub use cancel::{abort_pair, abortable, AbortHandle, AbortRegistration, Aborted};
pub use config::ApiConfig;
pub use driver::{advance_wizard, DriverOutcome};
pub use error::{ApiError, ApiResult};
pub use types::{tecnicos_for_session, LoginRequest, LoginResponse, Supervisor, Tecnico, UsuarioRef};
