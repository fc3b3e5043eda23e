use tracing::{debug, info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::edit_buffer::EditBuffer;
use crate::domain::entities::field::{FieldErrors, ProfileField};
use crate::domain::entities::patch::ProfilePatch;
use crate::domain::entities::profile::Profile;
use crate::domain::schema;

/// Visibility and progress of the edit modal. Validation runs synchronously
/// between `Open` and `Submitting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Closed,
    Open,
    OpenWithErrors,
    Submitting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

/// A validated submission waiting for the remote update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    patch: ProfilePatch,
}

impl SubmitTicket {
    pub fn patch(&self) -> &ProfilePatch {
        &self.patch
    }
}

#[derive(Debug)]
pub enum SubmitStep {
    Dispatch(SubmitTicket),
    Invalid(FieldErrors),
    Ignored,
}

#[derive(Debug)]
pub enum Completion {
    Committed(ProfilePatch),
    Failed(AppError),
    Dropped,
}

#[derive(Debug, Default)]
pub struct EditSession {
    phase: EditPhase,
    save_state: SaveState,
    buffer: Option<EditBuffer>,
    errors: FieldErrors,
    generation: u64,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.buffer.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Closed
    }

    /// Seeds a fresh buffer from the snapshot. Does nothing while already open.
    pub fn open(&mut self, profile: &Profile) {
        if self.is_open() {
            debug!("Edit session already open");
            return;
        }
        self.generation += 1;
        self.buffer = Some(EditBuffer::from_profile(profile));
        self.errors = FieldErrors::new();
        self.save_state = SaveState::Idle;
        self.phase = EditPhase::Open;
        info!("Edit session {} opened for {}", self.generation, profile.role());
    }

    pub fn set_field(&mut self, field: ProfileField, value: Option<String>) -> AppResult<()> {
        if self.phase == EditPhase::Submitting {
            return Err(AppError::SubmitInFlight);
        }
        let buffer = self.buffer.as_mut().ok_or(AppError::EditorClosed)?;
        buffer.set(field, value)
    }

    /// Discards the buffer unconditionally. A response still in flight will be dropped.
    pub fn cancel(&mut self) {
        if self.buffer.take().is_some() {
            info!("Edit session {} cancelled in phase {:?}", self.generation, self.phase);
        }
        if self.save_state == SaveState::Saving {
            self.save_state = SaveState::Idle;
        }
        self.errors = FieldErrors::new();
        self.phase = EditPhase::Closed;
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        let buffer = match (&self.phase, &self.buffer) {
            (EditPhase::Open | EditPhase::OpenWithErrors, Some(buffer)) => buffer,
            (EditPhase::Submitting, _) => {
                debug!("Submit ignored, save already in flight");
                return SubmitStep::Ignored;
            }
            _ => return SubmitStep::Ignored,
        };
        debug!("Validating edit session {}", self.generation);
        if let Err(errors) = schema::validate(buffer) {
            warn!("Profile form validation failed: {}", errors);
            self.errors = errors.clone();
            self.phase = EditPhase::OpenWithErrors;
            return SubmitStep::Invalid(errors);
        }
        let patch = buffer.normalize();
        self.errors = FieldErrors::new();
        self.phase = EditPhase::Submitting;
        self.save_state = SaveState::Saving;
        SubmitStep::Dispatch(SubmitTicket {
            generation: self.generation,
            patch,
        })
    }

    /// Applies the remote result to the session that issued `ticket`.
    pub fn complete(&mut self, ticket: SubmitTicket, result: AppResult<()>) -> Completion {
        if self.phase != EditPhase::Submitting || ticket.generation != self.generation {
            warn!(
                "Dropping response for edit session {}, current session {} is {:?}",
                ticket.generation, self.generation, self.phase
            );
            return Completion::Dropped;
        }
        match result {
            Ok(()) => {
                self.buffer = None;
                self.phase = EditPhase::Closed;
                self.save_state = SaveState::Success;
                info!("Edit session {} committed", self.generation);
                Completion::Committed(ticket.patch)
            }
            Err(err) => {
                self.phase = EditPhase::Open;
                self.save_state = SaveState::Error;
                Completion::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::entities::profile::{StudentProfile, TeacherProfile};
    use crate::domain::entities::role::Role;
    use crate::tests::fixtures::{student_profile, teacher_profile};

    fn dispatch(session: &mut EditSession) -> SubmitTicket {
        match session.begin_submit() {
            SubmitStep::Dispatch(ticket) => ticket,
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[rstest]
    fn test_open_seeds_buffer(student_profile: StudentProfile) {
        let mut session = EditSession::new();
        assert_eq!(session.phase(), EditPhase::Closed);
        assert!(session.buffer().is_none());

        session.open(&Profile::from(student_profile.clone()));

        assert_eq!(session.phase(), EditPhase::Open);
        assert_eq!(session.save_state(), SaveState::Idle);
        let buffer = session.buffer().expect("buffer while open");
        assert_eq!(buffer.role(), Role::Student);
        assert_eq!(buffer.get(ProfileField::Name), Some(student_profile.name));
    }

    #[rstest]
    fn test_open_twice_keeps_edits(teacher_profile: TeacherProfile) {
        let profile = Profile::from(teacher_profile);
        let mut session = EditSession::new();
        session.open(&profile);
        session.set_field(ProfileField::Name, Some("Draft".to_string())).unwrap();

        session.open(&profile);

        assert_eq!(session.buffer().unwrap().get(ProfileField::Name).as_deref(), Some("Draft"));
    }

    #[test]
    fn test_set_field_when_closed() {
        let mut session = EditSession::new();
        let result = session.set_field(ProfileField::Name, Some("Wei".to_string()));
        assert!(matches!(result, Err(AppError::EditorClosed)));
    }

    #[rstest]
    fn test_invalid_password_keeps_session_open(teacher_profile: TeacherProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(teacher_profile));
        session.set_field(ProfileField::Password, Some("12345".to_string())).unwrap();

        let step = session.begin_submit();

        assert!(matches!(step, SubmitStep::Invalid(ref errors) if !errors.get(ProfileField::Password).is_empty()));
        assert_eq!(session.phase(), EditPhase::OpenWithErrors);
        assert_eq!(session.save_state(), SaveState::Idle);
        assert!(!session.errors().is_empty());
    }

    #[rstest]
    fn test_fixing_errors_allows_submit(teacher_profile: TeacherProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(teacher_profile));
        session.set_field(ProfileField::Password, Some("123".to_string())).unwrap();
        assert!(matches!(session.begin_submit(), SubmitStep::Invalid(_)));

        session.set_field(ProfileField::Password, Some("123456".to_string())).unwrap();
        let ticket = dispatch(&mut session);

        assert_eq!(session.phase(), EditPhase::Submitting);
        assert!(session.errors().is_empty());
        let ProfilePatch::Teacher(patch) = ticket.patch() else {
            panic!("expected teacher patch");
        };
        assert_eq!(patch.password.value(), "123456");
    }

    #[rstest]
    fn test_submit_while_saving_is_ignored(student_profile: StudentProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(student_profile));
        let _ticket = dispatch(&mut session);

        assert!(matches!(session.begin_submit(), SubmitStep::Ignored));
        assert!(matches!(
            session.set_field(ProfileField::Name, Some("x".to_string())),
            Err(AppError::SubmitInFlight)
        ));
        assert_eq!(session.save_state(), SaveState::Saving);
    }

    #[test]
    fn test_submit_when_closed_is_ignored() {
        let mut session = EditSession::new();
        assert!(matches!(session.begin_submit(), SubmitStep::Ignored));
    }

    #[rstest]
    fn test_success_closes_session(student_profile: StudentProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(student_profile));
        session.set_field(ProfileField::Name, Some("Wei".to_string())).unwrap();
        let ticket = dispatch(&mut session);

        let completion = session.complete(ticket, Ok(()));

        assert!(matches!(completion, Completion::Committed(ref patch) if patch.name() == "Wei"));
        assert_eq!(session.phase(), EditPhase::Closed);
        assert_eq!(session.save_state(), SaveState::Success);
        assert!(session.buffer().is_none());
    }

    #[rstest]
    fn test_failure_retains_buffer(teacher_profile: TeacherProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(teacher_profile));
        session.set_field(ProfileField::Name, Some("Typed".to_string())).unwrap();
        let ticket = dispatch(&mut session);

        let completion = session.complete(ticket, Err(AppError::Remote("500".to_string())));

        assert!(matches!(completion, Completion::Failed(AppError::Remote(_))));
        assert_eq!(session.phase(), EditPhase::Open);
        assert_eq!(session.save_state(), SaveState::Error);
        assert_eq!(session.buffer().unwrap().get(ProfileField::Name).as_deref(), Some("Typed"));

        let retry = dispatch(&mut session);
        assert_eq!(retry.patch().name(), "Typed");
    }

    #[rstest]
    fn test_late_response_after_cancel_is_dropped(student_profile: StudentProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(student_profile));
        let ticket = dispatch(&mut session);

        session.cancel();
        let completion = session.complete(ticket, Ok(()));

        assert!(matches!(completion, Completion::Dropped));
        assert_eq!(session.phase(), EditPhase::Closed);
        assert!(session.buffer().is_none());
    }

    #[rstest]
    fn test_late_response_after_reopen_is_dropped(student_profile: StudentProfile) {
        let profile = Profile::from(student_profile);
        let mut session = EditSession::new();
        session.open(&profile);
        let stale = dispatch(&mut session);
        session.cancel();
        session.open(&profile);
        let _current = dispatch(&mut session);

        assert!(matches!(session.complete(stale, Ok(())), Completion::Dropped));
        assert_eq!(session.phase(), EditPhase::Submitting);
    }

    #[rstest]
    fn test_cancel_discards_from_any_phase(teacher_profile: TeacherProfile) {
        let mut session = EditSession::new();
        session.open(&Profile::from(teacher_profile));
        session.set_field(ProfileField::Password, Some("1".to_string())).unwrap();
        let _ = session.begin_submit();
        assert_eq!(session.phase(), EditPhase::OpenWithErrors);

        session.cancel();

        assert_eq!(session.phase(), EditPhase::Closed);
        assert!(session.buffer().is_none());
        assert!(session.errors().is_empty());
    }
}
