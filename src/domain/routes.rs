use std::fmt;

use crate::domain::entities::role::Role;

/// Views of the role-aware router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Feedback,
    CourseList,
    CourseManagement,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Only(Role),
}

const ROUTES: [(Route, &str, Access); 7] = [
    (Route::Home, "/", Access::Public),
    (Route::Login, "/login", Access::Public),
    (Route::Register, "/register", Access::Public),
    (Route::Feedback, "/feedback", Access::Public),
    (Route::CourseList, "/list", Access::Only(Role::Student)),
    (Route::CourseManagement, "/course", Access::Only(Role::Teacher)),
    (Route::Profile, "/user", Access::Public),
];

impl Route {
    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(route, _, _)| route == self)
            .map(|(_, path, _)| *path)
            .unwrap_or("/")
    }

    pub fn access(&self) -> Access {
        ROUTES
            .iter()
            .find(|(route, _, _)| route == self)
            .map(|(_, _, access)| *access)
            .unwrap_or(Access::Public)
    }

    /// Looks up a route, ignoring query, fragment and a trailing slash.
    pub fn match_path(path: &str) -> Option<Route> {
        let path = normalize(path);
        ROUTES
            .iter()
            .find(|(_, candidate, _)| *candidate == path)
            .map(|(route, _, _)| *route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl Access {
    pub fn allows(&self, role: Option<Role>) -> bool {
        match self {
            Access::Public => true,
            Access::Only(required) => role == Some(*required),
        }
    }
}

/// Whether `path` may be rendered for `role`. Unknown paths are never reachable.
pub fn is_reachable(path: &str, role: Option<Role>) -> bool {
    Route::match_path(path).is_some_and(|route| route.access().allows(role))
}
