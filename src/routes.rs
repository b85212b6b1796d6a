//! Route Table
//!
//! Static list of pages with the permission each one requires. Guards and
//! the navigation menu both read this table; nothing is registered
//! conditionally.

use std::collections::BTreeSet;

use tracing::debug;

/// Capability granted to a session by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    /// Governing board, reviews projects and raises observations
    BoardReviewer,
    /// Organization that submits projects
    OriginatingOrganization,
    /// Organization that covers stages
    CollaboratingOrganization,
    /// Managers, see the monitoring stats
    ManagerialProfile,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Self::BoardReviewer,
        Self::OriginatingOrganization,
        Self::CollaboratingOrganization,
        Self::ManagerialProfile,
    ];

    /// Tag as sent by the backend
    pub fn tag(self) -> &'static str {
        match self {
            Self::BoardReviewer => "consejo_directivo",
            Self::OriginatingOrganization => "ong_originante",
            Self::CollaboratingOrganization => "ong_colaborativa",
            Self::ManagerialProfile => "perfil_gerencial",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag() == tag.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Unknown tags are skipped
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for tag in tags {
            match Permission::from_tag(tag.as_ref()) {
                Some(p) => {
                    set.insert(p);
                }
                None => debug!("[ROUTER] Ignoring unknown permission tag {:?}", tag.as_ref()),
            }
        }
        Self(set)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Permission lifecycle of the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PermissionState {
    /// Not fetched yet
    #[default]
    Unknown,
    Granted(PermissionSet),
    /// Fetch failed; every guarded page stays closed
    Denied,
}

impl PermissionState {
    pub fn allows(&self, permission: Permission) -> bool {
        matches!(self, Self::Granted(set) if set.contains(permission))
    }

    /// The backend accepted the session cookies
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

// ========================
// Routes
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    ReviewProjects,
    NewProject,
    Observations,
    AvailableStages,
    OwnedStages,
    Stats,
}

#[derive(Debug)]
pub struct RouteDef {
    pub route: Route,
    pub path: &'static str,
    pub title: &'static str,
    pub requires: Option<Permission>,
    pub in_menu: bool,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { route: Route::Landing, path: "/", title: "Inicio", requires: None, in_menu: false },
    RouteDef { route: Route::Login, path: "/login", title: "Iniciar Sesión", requires: None, in_menu: false },
    RouteDef {
        route: Route::ReviewProjects,
        path: "/projects",
        title: "Proyectos",
        requires: Some(Permission::BoardReviewer),
        in_menu: true,
    },
    RouteDef {
        route: Route::NewProject,
        path: "/projects/new",
        title: "Presentar Proyecto",
        requires: Some(Permission::OriginatingOrganization),
        in_menu: true,
    },
    RouteDef {
        route: Route::Observations,
        path: "/projects/observations",
        title: "Observaciones",
        requires: Some(Permission::OriginatingOrganization),
        in_menu: true,
    },
    RouteDef {
        route: Route::AvailableStages,
        path: "/projects/available",
        title: "Etapas Disponibles",
        requires: Some(Permission::CollaboratingOrganization),
        in_menu: true,
    },
    RouteDef {
        route: Route::OwnedStages,
        path: "/projects/owned",
        title: "Mis Contribuciones",
        requires: Some(Permission::CollaboratingOrganization),
        in_menu: true,
    },
    RouteDef {
        route: Route::Stats,
        path: "/stats",
        title: "Estadísticas",
        requires: Some(Permission::ManagerialProfile),
        in_menu: true,
    },
];

impl Route {
    pub fn def(self) -> &'static RouteDef {
        ROUTES
            .iter()
            .find(|d| d.route == self)
            .unwrap_or(&ROUTES[0])
    }

    pub fn path(self) -> &'static str {
        self.def().path
    }

    /// Match a location path; query string, fragment and trailing slash are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        ROUTES.iter().find(|d| d.path == path).map(|d| d.route)
    }

    pub fn is_allowed(self, state: &PermissionState) -> bool {
        match self.def().requires {
            None => true,
            Some(p) => state.allows(p),
        }
    }
}

/// Menu entries the session may see, in table order
pub fn menu_entries(state: &PermissionState) -> Vec<&'static RouteDef> {
    ROUTES
        .iter()
        .filter(|d| d.in_menu && d.route.is_allowed(state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(tags: &[&str]) -> PermissionState {
        PermissionState::Granted(PermissionSet::from_tags(tags))
    }

    #[test]
    fn test_collaborating_menu() {
        let paths: Vec<&str> = menu_entries(&granted(&["ong_colaborativa"]))
            .iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(paths, vec!["/projects/available", "/projects/owned"]);
    }

    #[test]
    fn test_many_permissions_combine() {
        let state = granted(&["consejo_directivo", "perfil_gerencial", "desconocido"]);
        let paths: Vec<&str> = menu_entries(&state).iter().map(|d| d.path).collect();
        assert_eq!(paths, vec!["/projects", "/stats"]);
    }

    #[test]
    fn test_pending_and_denied_fail_closed() {
        for state in [PermissionState::Unknown, PermissionState::Denied, granted(&[])] {
            assert!(menu_entries(&state).is_empty());
            assert!(!Route::Stats.is_allowed(&state));
            assert!(Route::Login.is_allowed(&state));
            assert!(Route::Landing.is_allowed(&state));
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path(""), Some(Route::Landing));
        assert_eq!(Route::from_path("/projects/owned/"), Some(Route::OwnedStages));
        assert_eq!(Route::from_path("/projects/new?draft=1"), Some(Route::NewProject));
        assert_eq!(Route::from_path("/projects/12/edit"), None);
    }

    #[test]
    fn test_every_route_has_one_entry() {
        for def in ROUTES {
            assert_eq!(def.route.def().path, def.path);
            assert_eq!(Route::from_path(def.path), Some(def.route));
        }
    }

    #[test]
    fn test_permission_tags_round_trip() {
        for p in Permission::ALL {
            assert_eq!(Permission::from_tag(p.tag()), Some(p));
        }
        assert_eq!(Permission::from_tag("admin"), None);
    }
}
