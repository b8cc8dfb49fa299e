//! Static route table for the application shell.
//!
//! Three fixed entries, resolved by exact path match. There are no nested
//! routes, guards, or redirects; an unmatched path resolves to `None` and
//! what happens next is the caller's concern.

/// Route path constants - single source of truth for the application paths.
pub mod paths {
    /// Home page.
    pub const HOME: &str = "/";
    /// First vista.
    pub const VISTA1: &str = "/vista1";
    /// Second vista.
    pub const VISTA2: &str = "/vista2";
}

/// Page views the routes render. The view implementations live outside this
/// crate; the enum is only the reference the table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing page.
    Home,
    /// First vista page.
    First,
    /// Second vista page.
    Second,
}

/// A single route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Exact URL path.
    pub path: &'static str,
    /// Route name.
    pub name: &'static str,
    /// Page view rendered for this path.
    pub view: View,
}

/// The route table, in declaration order. Fixed at build time.
pub static ROUTES: [Route; 3] = [
    Route {
        path: paths::HOME,
        name: "HomeView",
        view: View::Home,
    },
    Route {
        path: paths::VISTA1,
        name: "FirstView",
        view: View::First,
    },
    Route {
        path: paths::VISTA2,
        name: "SecondView",
        view: View::Second,
    },
];

/// Resolves a requested path to its route entry.
///
/// # Example
///
/// ```
/// use vistas_client::router;
///
/// let route = router::resolve("/vista1").unwrap();
/// assert_eq!(route.name, "FirstView");
/// assert!(router::resolve("/vista3").is_none());
/// ```
pub fn resolve(path: &str) -> Option<&'static Route> {
    let route = ROUTES.iter().find(|route| route.path == path);
    if route.is_none() {
        tracing::debug!(path, "no route matched");
    }
    route
}

/// Looks a route up by its name.
///
/// # Example
///
/// ```
/// use vistas_client::router;
///
/// let route = router::find_by_name("HomeView").unwrap();
/// assert_eq!(route.path, "/");
/// ```
pub fn find_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}
