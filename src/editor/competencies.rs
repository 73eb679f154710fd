// src/editor/competencies.rs
//! Core-competency categories: free-form category names mapping to skill
//! lists, kept in the order categories were first added.

use crate::types::Resume;

/// Delimiter the form layer joins skills with before handing them over.
const SKILL_DELIMITER: &str = ", ";

/// Add a category with an empty skill list.
///
/// Re-adding an existing name re-initializes it to empty, discarding the
/// skills previously stored under that name. That overwrite is the contract
/// the UI exposes; a merge or rename operation does not exist.
pub fn add_category(resume: &mut Resume, name: &str) {
    resume
        .core_competencies
        .insert(name.to_string(), Vec::new());
}

/// Replace a category's skills wholesale from a `", "`-joined input. Creates
/// the category if it does not exist yet.
pub fn set_skills(resume: &mut Resume, name: &str, joined: &str) {
    let skills = if joined.is_empty() {
        Vec::new()
    } else {
        joined
            .split(SKILL_DELIMITER)
            .map(|skill| skill.to_string())
            .collect()
    };
    resume.core_competencies.insert(name.to_string(), skills);
}

/// Drop a category; the order of the remaining categories is unchanged.
pub fn remove_category(resume: &mut Resume, name: &str) {
    resume.core_competencies.shift_remove(name);
}
