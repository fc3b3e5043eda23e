use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::application::{app_error::AppResult, interface::session::SessionContext};

/// Session store persisted as a flat JSON object, re-read on every lookup.
#[derive(Debug, Clone)]
pub struct FileSessionContext {
    path: PathBuf,
}

impl FileSessionContext {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionContext for FileSessionContext {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entries: Map<String, Value> = serde_json::from_str(&contents)?;
        Ok(entries.get(key).and_then(Value::as_str).map(str::to_string))
    }
}
