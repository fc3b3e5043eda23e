use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::interface::session::{SessionContext, ROLE_KEY};
use crate::domain::entities::role::Role;

#[derive(Clone)]
pub struct RoleResolver {
    session: Arc<dyn SessionContext>,
}

impl RoleResolver {
    pub fn new(session: Arc<dyn SessionContext>) -> Self {
        Self { session }
    }

    /// Reads the role marker. Missing, unreadable or unrecognised markers
    /// resolve to `None`.
    pub fn resolve(&self) -> Option<Role> {
        let marker = match self.session.get(ROLE_KEY) {
            Ok(Some(marker)) => marker,
            Ok(None) => {
                debug!("No `{}` marker in session context", ROLE_KEY);
                return None;
            }
            Err(err) => {
                warn!("Failed to read `{}` from session context: {}", ROLE_KEY, err);
                return None;
            }
        };
        match marker.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                warn!("Unrecognised role marker: {}", marker);
                None
            }
        }
    }
}
