use std::sync::Arc;
use std::time::Duration;

use crate::adapter::http::gateway::profile::HttpProfileGateway;
use crate::adapter::notify::console::ConsoleNotifier;
use crate::adapter::session::file::FileSessionContext;
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

pub mod cli;
pub mod config;
pub mod setup;
pub mod state;

pub fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let gateway = HttpProfileGateway::new(
        &config.remote.base_url,
        Duration::from_secs(config.remote.timeout_secs),
    )?;
    let session = FileSessionContext::new(&config.session.path);

    Ok(AppState {
        config: Arc::new(config.clone()),
        session: Arc::new(session),
        gateway: Arc::new(gateway),
        notifier: Arc::new(ConsoleNotifier),
    })
}
