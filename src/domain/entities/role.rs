use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label shown wherever a value is missing or the role is unknown.
pub const UNSET_LABEL: &str = "未设置";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Marker value stored under the session key.
    pub fn marker(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Teacher => "教师",
            Role::Student => "学生",
        }
    }
}

/// Label for a role that may be unresolved.
pub fn role_label(role: Option<Role>) -> &'static str {
    role.map(|role| role.label()).unwrap_or(UNSET_LABEL)
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleMarker(pub String);

impl FromStr for Role {
    type Err = UnknownRoleMarker;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(UnknownRoleMarker(other.to_string())),
        }
    }
}
