//! Route table and access rules
//!
//! Paths are the hash fragments the app has always used, so bookmarks keep
//! working.

use billed_types::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// Exact path match; an empty path is the login page
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" | "#" => Some(Route::Login),
            "#employee/bills" => Some(Route::Bills),
            "#employee/bill/new" => Some(Route::NewBill),
            _ => None,
        }
    }

    /// Whether the page is only reachable by a signed-in employee
    pub fn requires_employee(self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Route actually shown for `path` given the current session
pub fn resolve(path: &str, user: Option<&User>) -> Route {
    let requested = Route::from_path(path).unwrap_or(Route::Login);
    let is_employee = user.is_some_and(User::is_employee);
    if requested.requires_employee() && !is_employee {
        tracing::debug!(path, "no employee session, falling back to login");
        return Route::Login;
    }
    requested
}

/// Swaps the mounted page; injected into every container
pub trait Navigator {
    fn navigate(&self, route: Route);
}
