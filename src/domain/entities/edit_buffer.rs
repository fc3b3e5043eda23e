use validator::{Validate, ValidationErrors};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::field::ProfileField;
use crate::domain::entities::password::Password;
use crate::domain::entities::patch::{ProfilePatch, StudentPatch, TeacherPatch};
use crate::domain::entities::profile::{Gender, Profile};
use crate::domain::entities::role::Role;
use crate::domain::schema::password_rule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct TeacherDraft {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub introduction: Option<String>,
    pub profession: Option<String>,
    pub college: Option<String>,
    pub id_card: Option<String>,
    #[validate(custom(function = "password_rule"))]
    pub password: Option<Password>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub class_name: Option<String>,
    pub profession: Option<String>,
    pub college: Option<String>,
    pub id_card: Option<String>,
    #[validate(custom(function = "password_rule"))]
    pub password: Option<Password>,
}

/// Draft of the editable fields while the edit modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditBuffer {
    Teacher(TeacherDraft),
    Student(StudentDraft),
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn secret(value: &Option<Password>) -> Password {
    value.clone().unwrap_or_default()
}

fn code(value: &Option<Gender>) -> String {
    value.map(|gender| gender.code().to_string()).unwrap_or_default()
}

impl EditBuffer {
    pub fn from_profile(profile: &Profile) -> Self {
        match profile {
            Profile::Teacher(p) => EditBuffer::Teacher(TeacherDraft {
                name: Some(p.name.clone()),
                gender: Some(p.gender),
                introduction: Some(p.introduction.clone()),
                profession: Some(p.profession.clone()),
                college: Some(p.college.clone()),
                id_card: Some(p.id_card.clone()),
                password: None,
            }),
            Profile::Student(p) => EditBuffer::Student(StudentDraft {
                name: Some(p.name.clone()),
                gender: Some(p.gender),
                class_name: Some(p.class_name.clone()),
                profession: Some(p.profession.clone()),
                college: Some(p.college.clone()),
                id_card: Some(p.id_card.clone()),
                password: None,
            }),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            EditBuffer::Teacher(_) => Role::Teacher,
            EditBuffer::Student(_) => Role::Student,
        }
    }

    /// Current draft text of a field. The password is never read back.
    pub fn get(&self, field: ProfileField) -> Option<String> {
        match (self, field) {
            (_, ProfileField::Password) => None,
            (EditBuffer::Teacher(d), ProfileField::Name) => d.name.clone(),
            (EditBuffer::Teacher(d), ProfileField::Gender) => d.gender.map(|g| g.code().to_string()),
            (EditBuffer::Teacher(d), ProfileField::Introduction) => d.introduction.clone(),
            (EditBuffer::Teacher(d), ProfileField::Profession) => d.profession.clone(),
            (EditBuffer::Teacher(d), ProfileField::College) => d.college.clone(),
            (EditBuffer::Teacher(d), ProfileField::IdCard) => d.id_card.clone(),
            (EditBuffer::Student(d), ProfileField::Name) => d.name.clone(),
            (EditBuffer::Student(d), ProfileField::Gender) => d.gender.map(|g| g.code().to_string()),
            (EditBuffer::Student(d), ProfileField::ClassName) => d.class_name.clone(),
            (EditBuffer::Student(d), ProfileField::Profession) => d.profession.clone(),
            (EditBuffer::Student(d), ProfileField::College) => d.college.clone(),
            (EditBuffer::Student(d), ProfileField::IdCard) => d.id_card.clone(),
            _ => None,
        }
    }

    pub fn has_password(&self) -> bool {
        let password = match self {
            EditBuffer::Teacher(d) => &d.password,
            EditBuffer::Student(d) => &d.password,
        };
        password.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Sets or clears a draft field. Fields outside the role's form are rejected.
    pub fn set(&mut self, field: ProfileField, value: Option<String>) -> AppResult<()> {
        match (self, field) {
            (EditBuffer::Teacher(d), ProfileField::Name) => d.name = value,
            (EditBuffer::Teacher(d), ProfileField::Gender) => d.gender = value.map(|c| Gender::from_code(&c)),
            (EditBuffer::Teacher(d), ProfileField::Introduction) => d.introduction = value,
            (EditBuffer::Teacher(d), ProfileField::Profession) => d.profession = value,
            (EditBuffer::Teacher(d), ProfileField::College) => d.college = value,
            (EditBuffer::Teacher(d), ProfileField::IdCard) => d.id_card = value,
            (EditBuffer::Teacher(d), ProfileField::Password) => d.password = value.map(Password::new),
            (EditBuffer::Student(d), ProfileField::Name) => d.name = value,
            (EditBuffer::Student(d), ProfileField::Gender) => d.gender = value.map(|c| Gender::from_code(&c)),
            (EditBuffer::Student(d), ProfileField::ClassName) => d.class_name = value,
            (EditBuffer::Student(d), ProfileField::Profession) => d.profession = value,
            (EditBuffer::Student(d), ProfileField::College) => d.college = value,
            (EditBuffer::Student(d), ProfileField::IdCard) => d.id_card = value,
            (EditBuffer::Student(d), ProfileField::Password) => d.password = value.map(Password::new),
            (_, field) => return Err(AppError::FieldNotEditable(field)),
        }
        Ok(())
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        match self {
            EditBuffer::Teacher(d) => d.validate(),
            EditBuffer::Student(d) => d.validate(),
        }
    }

    /// Fills every absent field with an empty string.
    pub fn normalize(&self) -> ProfilePatch {
        match self {
            EditBuffer::Teacher(d) => ProfilePatch::Teacher(TeacherPatch {
                name: text(&d.name),
                password: secret(&d.password),
                gender: code(&d.gender),
                introduction: text(&d.introduction),
                profession: text(&d.profession),
                college: text(&d.college),
                id_card: text(&d.id_card),
            }),
            EditBuffer::Student(d) => ProfilePatch::Student(StudentPatch {
                name: text(&d.name),
                password: secret(&d.password),
                gender: code(&d.gender),
                class_name: text(&d.class_name),
                profession: text(&d.profession),
                college: text(&d.college),
                id_card: text(&d.id_card),
            }),
        }
    }
}
