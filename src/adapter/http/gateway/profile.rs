use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::adapter::http::schema::profile::{ApiEnvelope, UpdateStudentRequest, UpdateTeacherRequest};
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::profile::{StudentProfile, TeacherProfile};

pub const TEACHER_INFO_PATH: &str = "/teacher/info";
pub const TEACHER_UPDATE_PATH: &str = "/teacher/update";
pub const STUDENT_INFO_PATH: &str = "/student/info";
pub const STUDENT_UPDATE_PATH: &str = "/student/update";

#[derive(Debug, Clone)]
pub struct HttpProfileGateway {
    client: Client,
    base_url: String,
}

impl HttpProfileGateway {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let envelope: ApiEnvelope<T> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.data)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<()> {
        let url = self.url(path);
        debug!("POST {}", url);
        self.client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ProfileReader for HttpProfileGateway {
    async fn fetch_teacher_profile(&self) -> AppResult<TeacherProfile> {
        self.fetch(TEACHER_INFO_PATH).await
    }

    async fn fetch_student_profile(&self) -> AppResult<StudentProfile> {
        self.fetch(STUDENT_INFO_PATH).await
    }
}

#[async_trait]
impl ProfileWriter for HttpProfileGateway {
    async fn update_teacher_profile(
        &self,
        name: &str,
        password: &str,
        gender: &str,
        introduction: &str,
        profession: &str,
        college: &str,
        id_card: &str,
    ) -> AppResult<()> {
        let body = UpdateTeacherRequest {
            username: name,
            password,
            sex: gender,
            introduction,
            profession,
            college,
            idcard: id_card,
        };
        self.post(TEACHER_UPDATE_PATH, &body).await
    }

    async fn update_student_profile(
        &self,
        name: &str,
        password: &str,
        gender: &str,
        class_name: &str,
        profession: &str,
        college: &str,
        id_card: &str,
    ) -> AppResult<()> {
        let body = UpdateStudentRequest {
            username: name,
            password,
            sex: gender,
            classer: class_name,
            profession,
            college,
            idcard: id_card,
        };
        self.post(STUDENT_UPDATE_PATH, &body).await
    }
}
