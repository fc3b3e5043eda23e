use std::sync::Arc;

use tracing::{error, info};

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::profile::ProfileReader;
use crate::domain::entities::patch::ProfilePatch;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::role::Role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Holds the last server-confirmed profile of one mounted page.
#[derive(Clone)]
pub struct ProfileStore {
    reader: Arc<dyn ProfileReader>,
    snapshot: Option<Profile>,
    load_state: LoadState,
}

impl ProfileStore {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self {
            reader,
            snapshot: None,
            load_state: LoadState::Idle,
        }
    }

    pub fn snapshot(&self) -> Option<&Profile> {
        self.snapshot.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Fetches the role's profile. On failure the previous snapshot stays in place.
    pub async fn load(&mut self, role: Role) -> AppResult<()> {
        self.load_state = LoadState::Loading;
        let result = match role {
            Role::Teacher => self.reader.fetch_teacher_profile().await.map(Profile::from),
            Role::Student => self.reader.fetch_student_profile().await.map(Profile::from),
        };
        match result {
            Ok(profile) => {
                self.snapshot = Some(profile);
                self.load_state = LoadState::Loaded;
                info!("Loaded {} profile", role);
                Ok(())
            }
            Err(err) => {
                self.load_state = LoadState::Error;
                error!("Failed to load {} profile: {}", role, err);
                Err(AppError::LoadFailure(err.to_string()))
            }
        }
    }

    /// Merges the fields of a successful save into the snapshot.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) -> AppResult<()> {
        let mut next = self
            .snapshot
            .clone()
            .unwrap_or_else(|| Profile::empty(patch.role()));
        next.apply_patch(patch)?;
        self.snapshot = Some(next);
        Ok(())
    }
}
