use crate::domain::entities::password::Password;
use crate::domain::entities::role::Role;

/// Normalized teacher submission, in the update call's positional order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub name: String,
    pub password: Password,
    pub gender: String,
    pub introduction: String,
    pub profession: String,
    pub college: String,
    pub id_card: String,
}

/// Normalized student submission, in the update call's positional order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: String,
    pub password: Password,
    pub gender: String,
    pub class_name: String,
    pub profession: String,
    pub college: String,
    pub id_card: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePatch {
    Teacher(TeacherPatch),
    Student(StudentPatch),
}

impl ProfilePatch {
    pub fn role(&self) -> Role {
        match self {
            ProfilePatch::Teacher(_) => Role::Teacher,
            ProfilePatch::Student(_) => Role::Student,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProfilePatch::Teacher(patch) => &patch.name,
            ProfilePatch::Student(patch) => &patch.name,
        }
    }
}
