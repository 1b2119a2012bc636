//! `ecoobra-session`: who is logged in, with what credential, at what
//! permission level.
//!
//! Single source of truth for the session, durable across restarts via a
//! pluggable [`SessionStorage`]. Views read it by reference; only `login`
//! and `logout` mutate.

pub mod profile;
pub mod roles;
pub mod storage;
pub mod store;

pub use profile::UserProfile;
pub use roles::Role;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, ROLE_KEY, TOKEN_KEY, USER_KEY};
pub use store::SessionStore;
