//! `ecoobra-routing`: role-gated view selection and navigation.
//!
//! The guard is a pure predicate over the session once loading has finished;
//! the registry and menu mirror the app's route table.

pub mod guard;
pub mod menu;
pub mod routes;

pub use guard::{RouteDecision, RouteGuard, FORBIDDEN_PATH, LANDING_PATH};
pub use menu::{home_view, menu_items, visible_items, HomeView, MenuItem};
pub use routes::{decide_for_path, find_route, routes, Access, RouteSpec};
