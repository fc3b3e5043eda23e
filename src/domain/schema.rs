//! Role-keyed field schema for the profile panel and the edit form.
//!
//! Everything that differs between the teacher and the student profile lives
//! here: which fields exist, their labels, which ones the form may edit, how
//! stored values are rendered, and the validation rules applied on submit.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::edit_buffer::EditBuffer;
use crate::domain::entities::field::{FieldErrors, ProfileField};
use crate::domain::entities::password::Password;
use crate::domain::entities::role::{Role, UNSET_LABEL};

pub const PASSWORD_MIN_CHARS: usize = 6;
pub const PASSWORD_MASK: &str = "******";
pub const PASSWORD_TOO_SHORT: &str = "密码长度不能少于6位";

/// Options offered by the gender select, as `(code, label)`.
pub const GENDER_OPTIONS: [(&str, &str); 3] = [("M", "男生"), ("F", "女生"), ("U", "未知")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Minimum length in characters, checked only for non-empty values.
    MinChars { min: usize, message: &'static str },
}

impl FieldRule {
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match *self {
            FieldRule::MinChars { min, message } => {
                if value.is_empty() || value.chars().count() >= min {
                    return Ok(());
                }
                let mut error = ValidationError::new("min_chars");
                error.message = Some(Cow::Borrowed(message));
                Err(error)
            }
        }
    }
}

const PASSWORD_RULE: FieldRule = FieldRule::MinChars {
    min: PASSWORD_MIN_CHARS,
    message: PASSWORD_TOO_SHORT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: ProfileField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub editable: bool,
    pub required: bool,
    pub in_panel: bool,
    pub rule: Option<FieldRule>,
}

const fn text(field: ProfileField, label: &'static str) -> FieldSpec {
    FieldSpec {
        field,
        label,
        kind: FieldKind::Text,
        editable: true,
        required: false,
        in_panel: true,
        rule: None,
    }
}

const NAME: FieldSpec = text(ProfileField::Name, "姓名");
const GENDER: FieldSpec = FieldSpec {
    kind: FieldKind::Select,
    ..text(ProfileField::Gender, "性别")
};
const INTRODUCTION: FieldSpec = text(ProfileField::Introduction, "简介");
const CLASS_NAME: FieldSpec = text(ProfileField::ClassName, "班级");
const PROFESSION: FieldSpec = text(ProfileField::Profession, "专业");
const COLLEGE: FieldSpec = text(ProfileField::College, "学院");
// Neither update call accepts an email, so it is shown but never edited.
const EMAIL: FieldSpec = FieldSpec {
    kind: FieldKind::Email,
    editable: false,
    ..text(ProfileField::Email, "电子邮件")
};
const ID_CARD: FieldSpec = text(ProfileField::IdCard, "身份证号");
const PASSWORD: FieldSpec = FieldSpec {
    kind: FieldKind::Password,
    in_panel: false,
    rule: Some(PASSWORD_RULE),
    ..text(ProfileField::Password, "密码")
};

static TEACHER_FIELDS: [FieldSpec; 8] = [NAME, GENDER, INTRODUCTION, PROFESSION, COLLEGE, EMAIL, ID_CARD, PASSWORD];
static STUDENT_FIELDS: [FieldSpec; 8] = [NAME, GENDER, CLASS_NAME, PROFESSION, COLLEGE, EMAIL, ID_CARD, PASSWORD];

pub fn fields_for(role: Role) -> &'static [FieldSpec] {
    match role {
        Role::Teacher => &TEACHER_FIELDS,
        Role::Student => &STUDENT_FIELDS,
    }
}

pub fn field_spec(role: Role, field: ProfileField) -> Option<&'static FieldSpec> {
    fields_for(role).iter().find(|spec| spec.field == field)
}

pub fn panel_fields(role: Role) -> impl Iterator<Item = &'static FieldSpec> {
    fields_for(role).iter().filter(|spec| spec.in_panel)
}

pub fn form_fields(role: Role) -> impl Iterator<Item = &'static FieldSpec> {
    fields_for(role).iter().filter(|spec| spec.editable)
}

pub fn gender_label(code: &str) -> &'static str {
    match code {
        "M" => "男生",
        "F" => "女生",
        _ => UNSET_LABEL,
    }
}

/// Renders a stored value for the read-only panel. Total over every input.
pub fn format_display(role: Role, field: ProfileField, value: Option<&str>) -> String {
    if field_spec(role, field).is_none() {
        return UNSET_LABEL.to_string();
    }
    let value = value.unwrap_or_default();
    match field {
        ProfileField::Gender => gender_label(value).to_string(),
        ProfileField::Password if !value.is_empty() => PASSWORD_MASK.to_string(),
        _ if value.is_empty() => UNSET_LABEL.to_string(),
        _ => value.to_string(),
    }
}

pub(crate) fn password_rule(password: &Password) -> Result<(), ValidationError> {
    PASSWORD_RULE.check(password.value())
}

fn into_field_errors(errors: ValidationErrors) -> FieldErrors {
    let mut result = FieldErrors::new();
    for (key, errors) in errors.field_errors() {
        let Some(field) = ProfileField::from_key(&key) else {
            continue;
        };
        for error in errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());
            result.push(field, message);
        }
    }
    result
}

/// Runs the role's form rules against a draft.
pub fn validate(buffer: &EditBuffer) -> Result<(), FieldErrors> {
    buffer.check().map_err(into_field_errors)
}
