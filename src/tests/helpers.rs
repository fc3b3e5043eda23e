#![cfg(test)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::notifier::Notifier;
use crate::application::interface::session::{SessionContext, ROLE_KEY};

#[derive(Debug, Default)]
pub struct MemorySessionContext {
    entries: HashMap<String, String>,
}

impl MemorySessionContext {
    pub fn with_role(marker: Option<&str>) -> Self {
        let mut entries = HashMap::new();
        if let Some(marker) = marker {
            entries.insert(ROLE_KEY.to_string(), marker.to_string());
        }
        Self { entries }
    }
}

impl SessionContext for MemorySessionContext {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCall {
    Teacher {
        name: String,
        password: String,
        gender: String,
        introduction: String,
        profession: String,
        college: String,
        id_card: String,
    },
    Student {
        name: String,
        password: String,
        gender: String,
        class_name: String,
        profession: String,
        college: String,
        id_card: String,
    },
}

/// Records every update call and answers with a fixed result.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    calls: Mutex<Vec<UpdateCall>>,
    fail: bool,
}

impl RecordingWriter {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<UpdateCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: UpdateCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(AppError::Remote("500 Internal Server Error".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileWriter for RecordingWriter {
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
        self.record(UpdateCall::Teacher {
            name: name.to_string(),
            password: password.to_string(),
            gender: gender.to_string(),
            introduction: introduction.to_string(),
            profession: profession.to_string(),
            college: college.to_string(),
            id_card: id_card.to_string(),
        })
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
        self.record(UpdateCall::Student {
            name: name.to_string(),
            password: password.to_string(),
            gender: gender.to_string(),
            class_name: class_name.to_string(),
            profession: profession.to_string(),
            college: college.to_string(),
            id_card: id_card.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.lock().unwrap().push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.lock().unwrap().push(Toast::Error(message.to_string()));
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let address = listener.local_addr().expect("stub server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{}", address)
}
