use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{EditFormDTO, FormFieldDTO, PanelRowDTO, ProfilePanelDTO};
use crate::application::interactors::edit_session::{
    Completion, EditPhase, EditSession, SaveState, SubmitStep, SubmitTicket,
};
use crate::application::interactors::profile_store::{LoadState, ProfileStore};
use crate::application::interactors::role::RoleResolver;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::notifier::Notifier;
use crate::domain::entities::field::{FieldErrors, ProfileField};
use crate::domain::entities::patch::ProfilePatch;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::role::{role_label, Role};
use crate::domain::schema;

pub const LOAD_FAILED_MESSAGE: &str = "无法获取用户信息，请检查您的网络连接或稍后重试！";
pub const SAVE_FAILED_MESSAGE: &str = "更新失败，无法连接服务器，请稍后再试！";

fn saved_message(role: Role) -> &'static str {
    match role {
        Role::Teacher => "教师信息已更新！",
        Role::Student => "学生信息已更新！",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed,
    Invalid(FieldErrors),
    Failed,
    Ignored,
    Dropped,
    /// The service accepted the save but the snapshot could not take the patch.
    Unmerged,
}

/// Sends a ticket through the role-specific update call.
#[derive(Clone)]
pub struct SubmitDispatcher {
    writer: Arc<dyn ProfileWriter>,
}

impl SubmitDispatcher {
    pub fn new(writer: Arc<dyn ProfileWriter>) -> Self {
        Self { writer }
    }

    pub async fn send(&self, ticket: &SubmitTicket) -> AppResult<()> {
        let result = match ticket.patch() {
            ProfilePatch::Teacher(p) => {
                self.writer
                    .update_teacher_profile(
                        &p.name,
                        p.password.value(),
                        &p.gender,
                        &p.introduction,
                        &p.profession,
                        &p.college,
                        &p.id_card,
                    )
                    .await
            }
            ProfilePatch::Student(p) => {
                self.writer
                    .update_student_profile(
                        &p.name,
                        p.password.value(),
                        &p.gender,
                        &p.class_name,
                        &p.profession,
                        &p.college,
                        &p.id_card,
                    )
                    .await
            }
        };
        result.map_err(|err| AppError::SaveFailure(err.to_string()))
    }
}

/// One mounted profile view: the role read at mount, its store and its editor.
pub struct ProfilePage {
    mount_id: Uuid,
    role: Option<Role>,
    store: ProfileStore,
    editor: EditSession,
    dispatcher: SubmitDispatcher,
    notifier: Arc<dyn Notifier>,
}

impl ProfilePage {
    /// Resolves the role once and, for a known role, fetches the profile once.
    pub async fn mount(
        resolver: &RoleResolver,
        reader: Arc<dyn ProfileReader>,
        writer: Arc<dyn ProfileWriter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mount_id = Uuid::now_v7();
        let mut page = Self {
            mount_id,
            role: resolver.resolve(),
            store: ProfileStore::new(reader),
            editor: EditSession::new(),
            dispatcher: SubmitDispatcher::new(writer),
            notifier,
        };
        let span = info_span!("profile-page", mount_id = %mount_id);
        page.load_once().instrument(span).await;
        page
    }

    async fn load_once(&mut self) {
        let Some(role) = self.role else {
            warn!("Role is unknown, profile fetch skipped");
            return;
        };
        if let Err(err) = self.store.load(role).await {
            error!("Profile load failed: {}", err);
            self.notifier.error(LOAD_FAILED_MESSAGE);
        }
    }

    pub fn mount_id(&self) -> Uuid {
        self.mount_id
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn load_state(&self) -> LoadState {
        self.store.load_state()
    }

    pub fn canonical(&self) -> Option<&Profile> {
        self.store.snapshot()
    }

    pub fn edit_phase(&self) -> EditPhase {
        self.editor.phase()
    }

    pub fn save_state(&self) -> SaveState {
        self.editor.save_state()
    }

    pub fn editor(&self) -> &EditSession {
        &self.editor
    }

    pub fn panel(&self) -> ProfilePanelDTO {
        let Some(role) = self.role else {
            return ProfilePanelDTO {
                role_label: role_label(None),
                loading: false,
                trusted: false,
                can_edit: false,
                rows: Vec::new(),
            };
        };
        let snapshot = self.store.snapshot();
        let rows = schema::panel_fields(role)
            .map(|spec| {
                let value = snapshot.and_then(|profile| profile.get(spec.field));
                PanelRowDTO {
                    field: spec.field,
                    label: spec.label,
                    value: schema::format_display(role, spec.field, value.as_deref()),
                }
            })
            .collect();
        let load_state = self.store.load_state();
        ProfilePanelDTO {
            role_label: role.label(),
            loading: load_state == LoadState::Loading,
            trusted: load_state == LoadState::Loaded,
            can_edit: self.can_edit(),
            rows,
        }
    }

    /// Editing needs a known role and a profile confirmed by the service.
    pub fn can_edit(&self) -> bool {
        self.role.is_some() && self.store.load_state() == LoadState::Loaded && self.store.snapshot().is_some()
    }

    pub fn form(&self) -> Option<EditFormDTO> {
        let buffer = self.editor.buffer()?;
        let errors = self.editor.errors();
        let fields = schema::form_fields(buffer.role())
            .map(|spec| FormFieldDTO {
                field: spec.field,
                label: spec.label,
                kind: spec.kind,
                rule: spec.rule,
                value: buffer.get(spec.field),
                errors: errors.get(spec.field).to_vec(),
            })
            .collect();
        Some(EditFormDTO {
            fields,
            saving: self.editor.phase() == EditPhase::Submitting,
        })
    }

    /// Opens the edit modal. Has no effect when the role is unknown or the
    /// profile has not been loaded.
    pub fn open_editor(&mut self) -> bool {
        if self.role.is_none() {
            debug!("Edit trigger ignored, role is unknown");
            return false;
        }
        let profile = match self.store.snapshot() {
            Some(profile) if self.can_edit() => profile.clone(),
            _ => {
                warn!("Edit trigger ignored, profile is not loaded ({:?})", self.store.load_state());
                return false;
            }
        };
        self.editor.open(&profile);
        true
    }

    pub fn edit_field(&mut self, field: ProfileField, value: Option<String>) -> AppResult<()> {
        self.editor.set_field(field, value)
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Validates the draft and hands out the ticket to send, or the outcome
    /// when nothing should be sent.
    pub fn prepare_submit(&mut self) -> Result<SubmitTicket, SubmitOutcome> {
        match self.editor.begin_submit() {
            SubmitStep::Dispatch(ticket) => Ok(ticket),
            SubmitStep::Invalid(errors) => Err(SubmitOutcome::Invalid(errors)),
            SubmitStep::Ignored => Err(SubmitOutcome::Ignored),
        }
    }

    pub fn dispatcher(&self) -> SubmitDispatcher {
        self.dispatcher.clone()
    }

    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: AppResult<()>) -> SubmitOutcome {
        match self.editor.complete(ticket, result) {
            Completion::Committed(patch) => self.commit(&patch),
            Completion::Failed(err) => {
                error!(mount_id = %self.mount_id, "Profile update failed: {}", err);
                self.notifier.error(SAVE_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
            Completion::Dropped => SubmitOutcome::Dropped,
        }
    }

    fn commit(&mut self, patch: &ProfilePatch) -> SubmitOutcome {
        if let Err(err) = self.store.apply_patch(patch) {
            error!(mount_id = %self.mount_id, "Saved profile could not be merged: {}", err);
            self.notifier.error(LOAD_FAILED_MESSAGE);
            return SubmitOutcome::Unmerged;
        }
        info!(mount_id = %self.mount_id, "Profile of {} saved", patch.role());
        self.notifier.success(saved_message(patch.role()));
        SubmitOutcome::Committed
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let ticket = match self.prepare_submit() {
            Ok(ticket) => ticket,
            Err(outcome) => return outcome,
        };
        let result = self.dispatcher.send(&ticket).await;
        self.finish_submit(ticket, result)
    }
}
