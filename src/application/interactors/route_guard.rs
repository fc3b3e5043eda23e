use tracing::info;

use crate::application::dto::route::Navigation;
use crate::application::interactors::role::RoleResolver;
use crate::domain::routes::{is_reachable, Route};

#[derive(Clone)]
pub struct RouteGuard {
    resolver: RoleResolver,
}

impl RouteGuard {
    pub fn new(resolver: RoleResolver) -> Self {
        Self { resolver }
    }

    /// Decides a navigation. The role is read again on every call.
    pub fn navigate(&self, path: &str) -> Navigation {
        let role = self.resolver.resolve();
        if let Some(route) = Route::match_path(path).filter(|_| is_reachable(path, role)) {
            return Navigation::Render(route);
        }
        info!("Redirecting {} to {} for role {:?}", path, Route::Home, role);
        Navigation::Redirect {
            from: path.to_string(),
            to: Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::mock;
    use rstest::rstest;

    use crate::application::app_error::AppResult;
    use crate::application::dto::route::Navigation;
    use crate::application::interactors::role::RoleResolver;
    use crate::application::interactors::route_guard::RouteGuard;
    use crate::application::interface::session::SessionContext;
    use crate::domain::routes::Route;
    use crate::tests::helpers::MemorySessionContext;

    mock! {
        pub SessionContextMock {}

        impl SessionContext for SessionContextMock {
            fn get(&self, key: &str) -> AppResult<Option<String>>;
        }
    }

    fn guard(marker: Option<&str>) -> RouteGuard {
        RouteGuard::new(RoleResolver::new(Arc::new(MemorySessionContext::with_role(marker))))
    }

    #[test]
    fn test_teacher_redirected_from_student_only_path() {
        let navigation = guard(Some("teacher")).navigate("/list");
        assert_eq!(
            navigation,
            Navigation::Redirect {
                from: "/list".to_string(),
                to: Route::Home
            }
        );
    }

    #[rstest]
    #[case(Some("student"), "/list", Route::CourseList)]
    #[case(Some("teacher"), "/course", Route::CourseManagement)]
    #[case(None, "/user", Route::Profile)]
    #[case(None, "/login", Route::Login)]
    fn test_reachable_paths_render(#[case] marker: Option<&str>, #[case] path: &str, #[case] route: Route) {
        assert_eq!(guard(marker).navigate(path), Navigation::Render(route));
    }

    #[rstest]
    #[case(None, "/list")]
    #[case(Some("student"), "/course")]
    #[case(Some("student"), "/nowhere")]
    fn test_unreachable_paths_redirect(#[case] marker: Option<&str>, #[case] path: &str) {
        assert!(matches!(
            guard(marker).navigate(path),
            Navigation::Redirect { to: Route::Home, .. }
        ));
    }

    #[test]
    fn test_role_is_read_on_every_navigation() {
        let mut session = MockSessionContextMock::new();
        let mut calls = 0;
        session.expect_get().times(2).returning(move |_| {
            calls += 1;
            let marker = if calls == 1 { "student" } else { "teacher" };
            Ok(Some(marker.to_string()))
        });
        let guard = RouteGuard::new(RoleResolver::new(Arc::new(session)));

        assert_eq!(guard.navigate("/list"), Navigation::Render(Route::CourseList));
        assert!(matches!(guard.navigate("/list"), Navigation::Redirect { .. }));
    }
}
