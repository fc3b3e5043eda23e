use serde::{Deserialize, Deserializer, Serialize};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::field::ProfileField;
use crate::domain::entities::patch::ProfilePatch;
use crate::domain::entities::role::Role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unset,
}

impl Gender {
    /// Decodes a wire code. Unknown codes decode to `Unset`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Gender::Male,
            "F" => Gender::Female,
            _ => Gender::Unset,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unset => "U",
        }
    }
}

impl From<Option<String>> for Gender {
    fn from(code: Option<String>) -> Self {
        code.as_deref().map(Gender::from_code).unwrap_or_default()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.code().to_string()
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherProfile {
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, rename = "sex")]
    pub gender: Gender,
    #[serde(default, deserialize_with = "nullable_text")]
    pub introduction: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub profession: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub college: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, rename = "idcard", deserialize_with = "nullable_text")]
    pub id_card: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, rename = "sex")]
    pub gender: Gender,
    #[serde(default, rename = "classer", deserialize_with = "nullable_text")]
    pub class_name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub profession: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub college: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, rename = "idcard", deserialize_with = "nullable_text")]
    pub id_card: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Teacher(TeacherProfile),
    Student(StudentProfile),
}

impl Profile {
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Teacher => Profile::Teacher(TeacherProfile::default()),
            Role::Student => Profile::Student(StudentProfile::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Profile::Teacher(_) => Role::Teacher,
            Profile::Student(_) => Role::Student,
        }
    }

    /// Raw stored value of a field, `None` when the field is not part of this
    /// role's profile. Gender is returned as its wire code.
    pub fn get(&self, field: ProfileField) -> Option<String> {
        let value = match (self, field) {
            (Profile::Teacher(p), ProfileField::Name) => &p.name,
            (Profile::Teacher(p), ProfileField::Gender) => return Some(p.gender.code().to_string()),
            (Profile::Teacher(p), ProfileField::Introduction) => &p.introduction,
            (Profile::Teacher(p), ProfileField::Profession) => &p.profession,
            (Profile::Teacher(p), ProfileField::College) => &p.college,
            (Profile::Teacher(p), ProfileField::Email) => &p.email,
            (Profile::Teacher(p), ProfileField::IdCard) => &p.id_card,
            (Profile::Student(p), ProfileField::Name) => &p.name,
            (Profile::Student(p), ProfileField::Gender) => return Some(p.gender.code().to_string()),
            (Profile::Student(p), ProfileField::ClassName) => &p.class_name,
            (Profile::Student(p), ProfileField::Profession) => &p.profession,
            (Profile::Student(p), ProfileField::College) => &p.college,
            (Profile::Student(p), ProfileField::Email) => &p.email,
            (Profile::Student(p), ProfileField::IdCard) => &p.id_card,
            _ => return None,
        };
        Some(value.clone())
    }

    /// Merges a saved field set. Fields outside the patch (email) are kept and
    /// the password is never stored.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) -> AppResult<()> {
        match (self, patch) {
            (Profile::Teacher(profile), ProfilePatch::Teacher(patch)) => {
                profile.name = patch.name.clone();
                profile.gender = Gender::from_code(&patch.gender);
                profile.introduction = patch.introduction.clone();
                profile.profession = patch.profession.clone();
                profile.college = patch.college.clone();
                profile.id_card = patch.id_card.clone();
                Ok(())
            }
            (Profile::Student(profile), ProfilePatch::Student(patch)) => {
                profile.name = patch.name.clone();
                profile.gender = Gender::from_code(&patch.gender);
                profile.class_name = patch.class_name.clone();
                profile.profession = patch.profession.clone();
                profile.college = patch.college.clone();
                profile.id_card = patch.id_card.clone();
                Ok(())
            }
            (profile, patch) => Err(AppError::RoleMismatch {
                expected: profile.role(),
                actual: patch.role(),
            }),
        }
    }
}

impl From<TeacherProfile> for Profile {
    fn from(profile: TeacherProfile) -> Self {
        Profile::Teacher(profile)
    }
}

impl From<StudentProfile> for Profile {
    fn from(profile: StudentProfile) -> Self {
        Profile::Student(profile)
    }
}
