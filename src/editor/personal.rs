// src/editor/personal.rs
//! Scalar editors for personal info and the summary paragraph.

use crate::types::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

/// Set one personal-info field to the latest value from the form.
pub fn set_field(resume: &mut Resume, field: PersonalField, value: &str) {
    let info = &mut resume.personal_info;
    let slot = match field {
        PersonalField::Name => &mut info.name,
        PersonalField::Email => &mut info.email,
        PersonalField::Phone => &mut info.phone,
        PersonalField::Location => &mut info.location,
        PersonalField::Linkedin => &mut info.linkedin,
        PersonalField::Website => &mut info.website,
    };
    *slot = value.to_string();
}

pub fn set_summary(resume: &mut Resume, value: &str) {
    resume.summary = value.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_overwrites_unconditionally() {
        let mut resume = Resume::default();
        set_field(&mut resume, PersonalField::Email, "ada@example.com");
        set_field(&mut resume, PersonalField::Email, "ada@lovelace.dev");
        assert_eq!(resume.personal_info.email, "ada@lovelace.dev");
    }

    #[test]
    fn summary_replaces_previous_text() {
        let mut resume = Resume::default();
        set_summary(&mut resume, "First draft");
        set_summary(&mut resume, "");
        assert!(resume.summary.is_empty());
    }
}
