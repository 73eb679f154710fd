// src/editor/awards.rs

use anyhow::{Context, Result};

use crate::types::{Award, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardField {
    Name,
    Date,
}

pub fn append(resume: &mut Resume) {
    resume.awards.push(Award::default());
}

pub fn update(resume: &mut Resume, idx: usize, field: AwardField, value: &str) -> Result<()> {
    let entry = resume
        .awards
        .get_mut(idx)
        .with_context(|| format!("No award at index {}", idx))?;
    let slot = match field {
        AwardField::Name => &mut entry.name,
        AwardField::Date => &mut entry.date,
    };
    *slot = value.to_string();
    Ok(())
}

pub fn remove(resume: &mut Resume, idx: usize) -> Result<()> {
    if idx >= resume.awards.len() {
        anyhow::bail!("No award at index {}", idx);
    }
    resume.awards.remove(idx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_update_remove() {
        let mut resume = Resume::default();
        append(&mut resume);
        update(&mut resume, 0, AwardField::Name, "Best Paper").unwrap();
        update(&mut resume, 0, AwardField::Date, "2023").unwrap();
        assert_eq!(resume.awards[0].name, "Best Paper");
        remove(&mut resume, 0).unwrap();
        assert!(resume.awards.is_empty());
        assert!(remove(&mut resume, 0).is_err());
    }
}
