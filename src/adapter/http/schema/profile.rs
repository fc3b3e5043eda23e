use serde::{Deserialize, Serialize};

/// Every response of the profile service wraps its payload in `data`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct UpdateTeacherRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub sex: &'a str,
    pub introduction: &'a str,
    pub profession: &'a str,
    pub college: &'a str,
    pub idcard: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateStudentRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub sex: &'a str,
    pub classer: &'a str,
    pub profession: &'a str,
    pub college: &'a str,
    pub idcard: &'a str,
}
