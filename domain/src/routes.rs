use crate::session::AccessClaims;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const MANAGER_DASHBOARD: &str = "/manager/dashboard";

/// Access requirements attached to a route. Routes without requirements
/// are public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub requires_manager: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_admin: false,
        requires_manager: false,
    };

    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
        requires_manager: false,
    };

    pub const MANAGER: Self = Self {
        requires_auth: true,
        requires_admin: false,
        requires_manager: true,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

pub const ROUTES: &[Route] = &[
    Route { path: HOME, name: "Home", meta: RouteMeta::PUBLIC },
    Route { path: "/about", name: "About", meta: RouteMeta::PUBLIC },
    Route { path: "/innovation", name: "Innovation", meta: RouteMeta::PUBLIC },
    Route { path: "/e-pharmacy", name: "E-Pharmacy", meta: RouteMeta::PUBLIC },
    Route { path: "/blog", name: "Blog", meta: RouteMeta::PUBLIC },
    Route { path: "/bookings", name: "Bookings", meta: RouteMeta::PUBLIC },
    Route { path: "/contact-us", name: "Contact Us", meta: RouteMeta::PUBLIC },
    Route { path: "/privacy", name: "Privacy", meta: RouteMeta::PUBLIC },
    Route { path: LOGIN, name: "Login", meta: RouteMeta::PUBLIC },
    Route { path: REGISTER, name: "Register", meta: RouteMeta::PUBLIC },
    Route { path: ADMIN_DASHBOARD, name: "Admin Dashboard", meta: RouteMeta::ADMIN },
    Route { path: MANAGER_DASHBOARD, name: "Manager Dashboard", meta: RouteMeta::MANAGER },
];

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Pre-navigation access check. Pure; the caller performs the redirect.
///
/// Rules are evaluated in order, first match wins:
/// 1. auth-only route, anonymous session -> login
/// 2. admin route, non-admin session -> login
/// 3. manager route, non-manager session -> login
/// 4. authenticated session heading to login/register -> role dashboard
/// 5. allow
pub fn resolve_navigation(path: &str, meta: RouteMeta, claims: &AccessClaims) -> GuardDecision {
    if meta.requires_auth && !claims.authenticated {
        return GuardDecision::Redirect(LOGIN);
    }
    if meta.requires_admin && !claims.is_admin() {
        return GuardDecision::Redirect(LOGIN);
    }
    if meta.requires_manager && !claims.is_manager() {
        return GuardDecision::Redirect(LOGIN);
    }
    if claims.authenticated && (path == LOGIN || path == REGISTER) {
        let dashboard = if claims.is_admin() {
            ADMIN_DASHBOARD
        } else if claims.is_manager() {
            MANAGER_DASHBOARD
        } else {
            HOME
        };
        return GuardDecision::Redirect(dashboard);
    }
    GuardDecision::Allow
}
