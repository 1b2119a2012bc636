//! Drawer menu and per-role home view.

use ecoobra_session::Role;

/// One drawer entry, visible to the listed roles only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: Vec<Role>,
}

impl MenuItem {
    pub fn visible_to(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }
}

/// The full drawer menu.
pub fn menu_items() -> Vec<MenuItem> {
    use Role::{Cliente, Coordinador, CoordinadorLogistico, Superadmin, Supervisor, Tecnico};

    let item = |path, label, roles: &[Role]| MenuItem {
        path,
        label,
        roles: roles.to_vec(),
    };

    vec![
        item("/listarusuarios", "Usuarios", &[Superadmin]),
        item(
            "/clientes",
            "Clientes",
            &[Superadmin, Coordinador, CoordinadorLogistico],
        ),
        item(
            "/listadeobras",
            "Obras",
            &[Superadmin, Cliente, CoordinadorLogistico],
        ),
        item(
            "/solicitudes",
            "Solicitudes",
            &[Superadmin, Coordinador, CoordinadorLogistico],
        ),
        item(
            "/coordinaciones",
            "Coordinaciones",
            &[Superadmin, Supervisor, Cliente, Tecnico, CoordinadorLogistico],
        ),
        item(
            "/transportistas",
            "Transportistas",
            &[Superadmin, CoordinadorLogistico],
        ),
        item(
            "/empresasgestoras",
            "Empresa Gestora",
            &[Superadmin, CoordinadorLogistico],
        ),
        item("/capacitaciones", "Capacitaciones", &[Superadmin, Tecnico]),
        item(
            "/informes",
            "Informes",
            &[Superadmin, Coordinador, Tecnico],
        ),
        item("/imagenes", "Imagenes", &[Superadmin, Tecnico]),
        item("/obraslist", "Formularios", &[Superadmin, Tecnico]),
        item(
            "/puntolimpio",
            "Puntos Limpios",
            &[Superadmin, Coordinador, CoordinadorLogistico],
        ),
        item(
            "/listamezclados",
            "Mezclados",
            &[Superadmin, Coordinador, CoordinadorLogistico, Supervisor],
        ),
    ]
}

/// Menu filtered down to one role.
pub fn visible_items(role: &Role) -> Vec<MenuItem> {
    menu_items()
        .into_iter()
        .filter(|item| item.visible_to(role))
        .collect()
}

/// The main view shown at `/`, selected by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    Landing,
    ObraList,
    ClientList,
    TrainingList,
    CoordinationList,
}

/// Pick the home view for the current session state.
///
/// Unrecognized roles fall back to the landing view, the same dead end an
/// unknown raw role string ends up in everywhere else.
pub fn home_view(logged_in: bool, role: Option<&Role>) -> HomeView {
    if !logged_in {
        return HomeView::Landing;
    }
    match role {
        Some(Role::Superadmin) | Some(Role::Cliente) => HomeView::ObraList,
        Some(Role::Coordinador) | Some(Role::CoordinadorLogistico) => HomeView::ClientList,
        Some(Role::Tecnico) => HomeView::TrainingList,
        Some(Role::Supervisor) => HomeView::CoordinationList,
        Some(Role::Unrecognized(_)) | None => HomeView::Landing,
    }
}
