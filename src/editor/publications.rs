// src/editor/publications.rs

use anyhow::{Context, Result};

use crate::types::{Publication, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationField {
    Title,
    Publisher,
    Date,
}

pub fn append(resume: &mut Resume) {
    resume.publications.push(Publication::default());
}

pub fn update(resume: &mut Resume, idx: usize, field: PublicationField, value: &str) -> Result<()> {
    let entry = resume
        .publications
        .get_mut(idx)
        .with_context(|| format!("No publication at index {}", idx))?;
    let slot = match field {
        PublicationField::Title => &mut entry.title,
        PublicationField::Publisher => &mut entry.publisher,
        PublicationField::Date => &mut entry.date,
    };
    *slot = value.to_string();
    Ok(())
}

pub fn remove(resume: &mut Resume, idx: usize) -> Result<()> {
    if idx >= resume.publications.len() {
        anyhow::bail!("No publication at index {}", idx);
    }
    resume.publications.remove(idx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_update_remove() {
        let mut resume = Resume::default();
        append(&mut resume);
        update(&mut resume, 0, PublicationField::Title, "On Resumes").unwrap();
        update(&mut resume, 0, PublicationField::Publisher, "ACM").unwrap();
        update(&mut resume, 0, PublicationField::Date, "2022").unwrap();
        assert_eq!(resume.publications[0].publisher, "ACM");
        remove(&mut resume, 0).unwrap();
        assert!(update(&mut resume, 0, PublicationField::Date, "x").is_err());
    }
}
