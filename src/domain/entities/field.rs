use std::collections::BTreeMap;
use std::fmt;

/// Every field a profile view can show or edit, across both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    Gender,
    Introduction,
    ClassName,
    Profession,
    College,
    Email,
    IdCard,
    Password,
}

impl ProfileField {
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Gender => "gender",
            ProfileField::Introduction => "introduction",
            ProfileField::ClassName => "class_name",
            ProfileField::Profession => "profession",
            ProfileField::College => "college",
            ProfileField::Email => "email",
            ProfileField::IdCard => "id_card",
            ProfileField::Password => "password",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "name" => ProfileField::Name,
            "gender" => ProfileField::Gender,
            "introduction" => ProfileField::Introduction,
            "class_name" => ProfileField::ClassName,
            "profession" => ProfileField::Profession,
            "college" => ProfileField::College,
            "email" => ProfileField::Email,
            "id_card" => ProfileField::IdCard,
            "password" => ProfileField::Password,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level messages produced by form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProfileField, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: ProfileField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ProfileField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ProfileField::Name)]
    #[case(ProfileField::Gender)]
    #[case(ProfileField::Introduction)]
    #[case(ProfileField::ClassName)]
    #[case(ProfileField::Profession)]
    #[case(ProfileField::College)]
    #[case(ProfileField::Email)]
    #[case(ProfileField::IdCard)]
    #[case(ProfileField::Password)]
    fn test_field_key_lookup(#[case] field: ProfileField) {
        assert_eq!(ProfileField::from_key(field.key()), Some(field));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(ProfileField::from_key("username"), None);
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.push(ProfileField::Password, "too short");
        errors.push(ProfileField::Password, "still too short");

        assert_eq!(errors.get(ProfileField::Password).len(), 2);
        assert!(errors.get(ProfileField::Name).is_empty());
        assert_eq!(errors.to_string(), "password: too short, still too short");
    }
}
