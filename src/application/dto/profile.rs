use crate::domain::entities::field::ProfileField;
use crate::domain::schema::{FieldKind, FieldRule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRowDTO {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePanelDTO {
    pub role_label: &'static str,
    pub loading: bool,
    pub trusted: bool,
    pub can_edit: bool,
    pub rows: Vec<PanelRowDTO>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldDTO {
    pub field: ProfileField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: Option<FieldRule>,
    pub value: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormDTO {
    pub fields: Vec<FormFieldDTO>,
    pub saving: bool,
}
