use std::sync::Arc;

use crate::adapter::http::gateway::profile::HttpProfileGateway;
use crate::application::interactors::profile_page::ProfilePage;
use crate::application::interactors::role::RoleResolver;
use crate::application::interactors::route_guard::RouteGuard;
use crate::application::interface::notifier::Notifier;
use crate::application::interface::session::SessionContext;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: Arc<dyn SessionContext>,
    pub gateway: Arc<HttpProfileGateway>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn role_resolver(&self) -> RoleResolver {
        RoleResolver::new(self.session.clone())
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.role_resolver())
    }

    /// Mounts a fresh page; every mount gets its own store and editor.
    pub async fn mount_profile_page(&self) -> ProfilePage {
        ProfilePage::mount(
            &self.role_resolver(),
            self.gateway.clone(),
            self.gateway.clone(),
            self.notifier.clone(),
        )
        .await
    }
}
