// src/editor/experience.rs
//! Editors for professional experience: the job list and, nested one level
//! down, each job's responsibilities list.

use anyhow::{Context, Result};

use crate::types::{Job, Responsibility, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
}

/// Append a new job with every scalar field empty and no responsibilities.
pub fn append_job(resume: &mut Resume) {
    resume.professional_experience.push(Job::default());
}

pub fn update_job(resume: &mut Resume, job_idx: usize, field: JobField, value: &str) -> Result<()> {
    let job = job_mut(resume, job_idx)?;
    let slot = match field {
        JobField::Title => &mut job.title,
        JobField::Company => &mut job.company,
        JobField::Location => &mut job.location,
        JobField::StartDate => &mut job.start_date,
        JobField::EndDate => &mut job.end_date,
    };
    *slot = value.to_string();
    Ok(())
}

/// Remove a job; the relative order of the remaining jobs is unchanged.
pub fn remove_job(resume: &mut Resume, job_idx: usize) -> Result<()> {
    if job_idx >= resume.professional_experience.len() {
        anyhow::bail!("No job at index {}", job_idx);
    }
    resume.professional_experience.remove(job_idx);
    Ok(())
}

pub fn append_responsibility(resume: &mut Resume, job_idx: usize, content: &str) -> Result<()> {
    job_mut(resume, job_idx)?
        .responsibilities
        .push(Responsibility::new(content));
    Ok(())
}

pub fn update_responsibility(
    resume: &mut Resume,
    job_idx: usize,
    resp_idx: usize,
    content: &str,
) -> Result<()> {
    responsibility_mut(resume, job_idx, resp_idx)?.content = content.to_string();
    Ok(())
}

/// Tag a responsibility with an internal name used by the form layer.
pub fn set_responsibility_internal_name(
    resume: &mut Resume,
    job_idx: usize,
    resp_idx: usize,
    internal_name: Option<&str>,
) -> Result<()> {
    responsibility_mut(resume, job_idx, resp_idx)?.internal_name =
        internal_name.map(|name| name.to_string());
    Ok(())
}

pub fn remove_responsibility(resume: &mut Resume, job_idx: usize, resp_idx: usize) -> Result<()> {
    let job = job_mut(resume, job_idx)?;
    if resp_idx >= job.responsibilities.len() {
        anyhow::bail!("No responsibility at index {} for job {}", resp_idx, job_idx);
    }
    job.responsibilities.remove(resp_idx);
    Ok(())
}

fn job_mut(resume: &mut Resume, job_idx: usize) -> Result<&mut Job> {
    resume
        .professional_experience
        .get_mut(job_idx)
        .with_context(|| format!("No job at index {}", job_idx))
}

fn responsibility_mut(
    resume: &mut Resume,
    job_idx: usize,
    resp_idx: usize,
) -> Result<&mut Responsibility> {
    job_mut(resume, job_idx)?
        .responsibilities
        .get_mut(resp_idx)
        .with_context(|| format!("No responsibility at index {} for job {}", resp_idx, job_idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_starts_empty() {
        let mut resume = Resume::default();
        append_job(&mut resume);
        let job = &resume.professional_experience[0];
        assert!(job.title.is_empty());
        assert!(job.responsibilities.is_empty());
    }

    #[test]
    fn stored_order_matches_append_order() {
        let mut resume = Resume::default();
        for title in ["First", "Second", "Third"] {
            append_job(&mut resume);
            let idx = resume.professional_experience.len() - 1;
            update_job(&mut resume, idx, JobField::Title, title).unwrap();
        }
        let titles: Vec<_> = resume
            .professional_experience
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut resume = Resume::default();
        for title in ["A", "B", "C"] {
            append_job(&mut resume);
            let idx = resume.professional_experience.len() - 1;
            update_job(&mut resume, idx, JobField::Title, title).unwrap();
        }
        remove_job(&mut resume, 1).unwrap();
        let titles: Vec<_> = resume
            .professional_experience
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn responsibilities_addressed_by_pair() {
        let mut resume = Resume::default();
        append_job(&mut resume);
        append_job(&mut resume);
        append_responsibility(&mut resume, 1, "Built X").unwrap();
        append_responsibility(&mut resume, 1, "Shipped Y").unwrap();
        update_responsibility(&mut resume, 1, 0, "Built X v2").unwrap();

        assert!(resume.professional_experience[0].responsibilities.is_empty());
        assert_eq!(
            resume.professional_experience[1].responsibilities[0].content,
            "Built X v2"
        );
        remove_responsibility(&mut resume, 1, 0).unwrap();
        assert_eq!(
            resume.professional_experience[1].responsibilities[0].content,
            "Shipped Y"
        );
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut resume = Resume::default();
        assert!(update_job(&mut resume, 0, JobField::Title, "x").is_err());
        assert!(remove_job(&mut resume, 0).is_err());
        append_job(&mut resume);
        assert!(append_responsibility(&mut resume, 3, "x").is_err());
        assert!(remove_responsibility(&mut resume, 0, 0).is_err());
    }
}
