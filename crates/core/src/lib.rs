//! `ecoobra-core`: shared building blocks for the admin client.
//!
//! This crate contains the client-wide error taxonomy and the reusable
//! user-facing feedback abstraction. No IO, no HTTP.

pub mod error;
pub mod feedback;

pub use error::{ClientError, ClientResult};
pub use feedback::Feedback;
