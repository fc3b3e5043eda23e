use crate::application::app_error::AppResult;

/// Session key holding the role marker written at login.
pub const ROLE_KEY: &str = "userType";

/// Read-only view of the durable key-value session store.
pub trait SessionContext: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
}
