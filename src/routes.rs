use serde::Serialize;

use crate::display_mode::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub display_mode: DisplayMode,
}

/// Every route renders the same todo view with a different display mode.
pub const ROUTES: [Route; 3] = [
    Route {
        name: "index",
        path: "/",
        display_mode: DisplayMode::All,
    },
    Route {
        name: "completed",
        path: "/completed",
        display_mode: DisplayMode::Finished,
    },
    Route {
        name: "active",
        path: "/active",
        display_mode: DisplayMode::Unfinished,
    },
];

pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

pub fn by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}
