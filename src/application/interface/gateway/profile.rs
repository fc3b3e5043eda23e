use crate::{
    application::app_error::AppResult,
    domain::entities::profile::{StudentProfile, TeacherProfile},
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn fetch_teacher_profile(&self) -> AppResult<TeacherProfile>;
    async fn fetch_student_profile(&self) -> AppResult<StudentProfile>;
}

/// Role-specific update calls. Argument order is fixed by the remote service.
#[async_trait]
pub trait ProfileWriter: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn update_teacher_profile(
        &self,
        name: &str,
        password: &str,
        gender: &str,
        introduction: &str,
        profession: &str,
        college: &str,
        id_card: &str,
    ) -> AppResult<()>;

    #[allow(clippy::too_many_arguments)]
    async fn update_student_profile(
        &self,
        name: &str,
        password: &str,
        gender: &str,
        class_name: &str,
        profession: &str,
        college: &str,
        id_card: &str,
    ) -> AppResult<()>;
}
