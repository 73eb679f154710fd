// src/editor/education.rs

use anyhow::{Context, Result};

use crate::types::{Education, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Location,
    Degree,
}

pub fn append(resume: &mut Resume) {
    resume.education.push(Education::default());
}

pub fn update(resume: &mut Resume, idx: usize, field: EducationField, value: &str) -> Result<()> {
    let entry = resume
        .education
        .get_mut(idx)
        .with_context(|| format!("No education entry at index {}", idx))?;
    let slot = match field {
        EducationField::Institution => &mut entry.institution,
        EducationField::Location => &mut entry.location,
        EducationField::Degree => &mut entry.degree,
    };
    *slot = value.to_string();
    Ok(())
}

pub fn remove(resume: &mut Resume, idx: usize) -> Result<()> {
    if idx >= resume.education.len() {
        anyhow::bail!("No education entry at index {}", idx);
    }
    resume.education.remove(idx);
    Ok(())
}
