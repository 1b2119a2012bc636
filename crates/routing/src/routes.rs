//! Route registry: per-path access rules.

use ecoobra_session::{Role, SessionStorage, SessionStore};

use crate::guard::{RouteDecision, RouteGuard};

/// Access rule for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session (landing, login, self-registration).
    Public,
    /// Requires a session; optionally restricted to an allow-list of roles.
    Protected(RouteGuard),
}

/// One entry of the navigable route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: Access,
}

impl RouteSpec {
    fn public(path: &'static str) -> Self {
        Self {
            path,
            access: Access::Public,
        }
    }

    fn protected(path: &'static str, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            path,
            access: Access::Protected(RouteGuard::allowing(roles)),
        }
    }

    fn authenticated(path: &'static str) -> Self {
        Self {
            path,
            access: Access::Protected(RouteGuard::any_authenticated()),
        }
    }
}

/// The full route table.
///
/// Allow-lists are per-view configuration owned by the app shell, which is
/// why this is data rather than anything derived from the roles themselves.
pub fn routes() -> Vec<RouteSpec> {
    use Role::{Cliente, Coordinador, CoordinadorLogistico, Superadmin, Supervisor, Tecnico};

    vec![
        RouteSpec::public("/"),
        RouteSpec::public("/login"),
        RouteSpec::public("/unauthorized"),
        RouteSpec::public("/altacliente"),
        RouteSpec::public("/registrocliente"),
        // Clients and users
        RouteSpec::protected("/clientes", [Superadmin, Coordinador, CoordinadorLogistico]),
        RouteSpec::authenticated("/detallescliente"),
        RouteSpec::protected("/editarcliente", [Cliente, Superadmin, CoordinadorLogistico, Coordinador]),
        RouteSpec::protected("/altausuario", [Superadmin]),
        RouteSpec::protected("/editarusuario", [Superadmin]),
        RouteSpec::protected("/listarusuarios", [Superadmin]),
        // Obras
        RouteSpec::protected("/listadeobras", [Cliente, Superadmin, CoordinadorLogistico]),
        RouteSpec::protected("/altaobra", [Cliente, Superadmin]),
        RouteSpec::protected("/detallesobra", [Cliente, Superadmin, CoordinadorLogistico]),
        RouteSpec::protected("/editarobra", [Cliente, Superadmin, Supervisor]),
        RouteSpec::protected("/obraslist", [Tecnico, Superadmin]),
        // Coordinations
        RouteSpec::protected(
            "/coordinaciones",
            [Superadmin, Supervisor, Cliente, CoordinadorLogistico, Tecnico],
        ),
        RouteSpec::protected("/altacoordinaciones", [Superadmin, Supervisor, Cliente]),
        RouteSpec::protected(
            "/detallescoordinacion",
            [Superadmin, Supervisor, Cliente, CoordinadorLogistico],
        ),
        RouteSpec::protected("/editarcoordinacion", [Superadmin, Supervisor, Cliente]),
        RouteSpec::protected("/solicitudes", [Superadmin, Coordinador, CoordinadorLogistico]),
        // Haulers and treatment companies
        RouteSpec::protected("/transportistas", [Superadmin, CoordinadorLogistico]),
        RouteSpec::protected("/altatransportistas", [CoordinadorLogistico, Superadmin]),
        // Ungated upstream, unlike its guarded twin below.
        RouteSpec::public("/detalletransportista"),
        RouteSpec::protected("/detallestransportista", [CoordinadorLogistico, Superadmin]),
        RouteSpec::protected("/editartransportista", [CoordinadorLogistico, Superadmin]),
        RouteSpec::protected("/empresasgestoras", [Superadmin, CoordinadorLogistico]),
        RouteSpec::protected("/altaempresas", [Cliente, Superadmin]),
        RouteSpec::protected("/detalleempresa", [Superadmin, CoordinadorLogistico, Cliente]),
        RouteSpec::protected("/editarempresasgestoras", [CoordinadorLogistico, Superadmin]),
        // Clean points
        RouteSpec::protected("/puntolimpio", [Superadmin, Coordinador, CoordinadorLogistico]),
        RouteSpec::protected("/altapuntolimpio", [Superadmin, Coordinador, CoordinadorLogistico]),
        RouteSpec::protected("/detallespuntolimpio", [Coordinador, CoordinadorLogistico, Superadmin]),
        RouteSpec::protected("/editarpuntolimpio", [Coordinador, CoordinadorLogistico, Superadmin]),
        // Mixed-waste batches
        RouteSpec::protected(
            "/listamezclados",
            [Cliente, Superadmin, CoordinadorLogistico, Coordinador, Supervisor],
        ),
        RouteSpec::protected(
            "/altamezclados",
            [Cliente, Superadmin, CoordinadorLogistico, Coordinador, Supervisor],
        ),
        RouteSpec::protected(
            "/detallesmezclados",
            [Cliente, Superadmin, CoordinadorLogistico, Coordinador, Supervisor],
        ),
        // Inspection forms, trainings, reports, images
        RouteSpec::protected("/formularios", [Tecnico, Superadmin]),
        RouteSpec::protected("/formularios/detalle", [Tecnico, Superadmin, Coordinador]),
        RouteSpec::protected("/capacitaciones", [Cliente, Superadmin, Tecnico, Coordinador]),
        RouteSpec::protected("/altacapacitaciones", [Tecnico, Superadmin]),
        RouteSpec::protected("/detallescapacitaciones", [Tecnico, Superadmin]),
        RouteSpec::protected("/informes", [CoordinadorLogistico, Superadmin, Coordinador]),
        RouteSpec::protected("/imagenes", [Superadmin, Tecnico]),
        RouteSpec::protected("/altaimagenes", [Superadmin, Tecnico]),
        RouteSpec::protected("/verimagenes", [Superadmin, Tecnico]),
    ]
}

/// Look up a route by path. Matching is case-insensitive, the router
/// convention this table was lifted from.
pub fn find_route(path: &str) -> Option<RouteSpec> {
    routes()
        .into_iter()
        .find(|r| r.path.eq_ignore_ascii_case(path))
}

/// Decide what to render for a path. Unknown paths fall back to the
/// landing redirect once loading completes.
pub fn decide_for_path<S: SessionStorage>(
    path: &str,
    session: &SessionStore<S>,
) -> RouteDecision {
    match find_route(path) {
        Some(RouteSpec {
            access: Access::Public,
            ..
        }) => RouteDecision::Render,
        Some(RouteSpec {
            access: Access::Protected(guard),
            ..
        }) => guard.decide(session),
        None => {
            if session.is_loading() {
                RouteDecision::Loading
            } else {
                tracing::debug!(path, "unknown path");
                RouteDecision::RedirectToLanding
            }
        }
    }
}
