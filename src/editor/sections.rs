// src/editor/sections.rs
//! Per-section visibility toggles driven by the shell's checkboxes.

use crate::types::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PersonalInfo,
    Summary,
    ProfessionalExperience,
    Education,
    Awards,
    CoreCompetencies,
    Certifications,
    Publications,
}

pub fn set_active(resume: &mut Resume, section: Section, active: bool) {
    let toggles = &mut resume.sections;
    let slot = match section {
        Section::PersonalInfo => &mut toggles.personal_info,
        Section::Summary => &mut toggles.summary,
        Section::ProfessionalExperience => &mut toggles.professional_experience,
        Section::Education => &mut toggles.education,
        Section::Awards => &mut toggles.awards,
        Section::CoreCompetencies => &mut toggles.core_competencies,
        Section::Certifications => &mut toggles.certifications,
        Section::Publications => &mut toggles.publications,
    };
    *slot = active;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_off_keeps_section_data() {
        let mut resume = Resume::default();
        resume.summary = "Kept".to_string();
        set_active(&mut resume, Section::Summary, false);
        assert!(!resume.sections.summary);
        assert_eq!(resume.summary, "Kept");
        set_active(&mut resume, Section::Summary, true);
        assert!(resume.sections.summary);
    }
}
