// src/export/blocks.rs
//! Shared projection of a resume into an ordered stream of styled text
//! blocks. The preview renderer and both document exporters consume the same
//! stream, so the three outputs carry identical content in identical order.

use crate::types::{Job, Resume};

/// Section headings in their fixed output order.
pub const SECTION_HEADINGS: [&str; 8] = [
    "Personal Info",
    "Summary",
    "Professional Experience",
    "Education",
    "Awards",
    "Core Competencies",
    "Certifications",
    "Publications",
];

pub const DOCUMENT_TITLE: &str = "Resume";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Body(String),
    Bullet(String),
}

/// Walk the resume in section order and emit its styled blocks.
///
/// Every active section emits its heading even when empty; sections toggled
/// off are skipped entirely. Field values are interpolated verbatim.
pub fn document_blocks(resume: &Resume) -> Vec<Block> {
    let mut blocks = vec![Block::Title(DOCUMENT_TITLE.to_string())];
    let toggles = &resume.sections;

    if toggles.personal_info {
        blocks.push(Block::Heading(SECTION_HEADINGS[0].to_string()));
        let info = &resume.personal_info;
        for (label, value) in [
            ("Name", &info.name),
            ("Email", &info.email),
            ("Phone", &info.phone),
            ("Location", &info.location),
            ("LinkedIn", &info.linkedin),
            ("Website", &info.website),
        ] {
            if !value.is_empty() {
                blocks.push(Block::Body(format!("{}: {}", label, value)));
            }
        }
    }

    if toggles.summary {
        blocks.push(Block::Heading(SECTION_HEADINGS[1].to_string()));
        if !resume.summary.is_empty() {
            blocks.push(Block::Body(resume.summary.clone()));
        }
    }

    if toggles.professional_experience {
        blocks.push(Block::Heading(SECTION_HEADINGS[2].to_string()));
        for job in &resume.professional_experience {
            push_job(&mut blocks, job);
        }
    }

    if toggles.education {
        blocks.push(Block::Heading(SECTION_HEADINGS[3].to_string()));
        for entry in &resume.education {
            blocks.push(Block::Body(format!(
                "{} - {}, {}",
                entry.degree, entry.institution, entry.location
            )));
        }
    }

    if toggles.awards {
        blocks.push(Block::Heading(SECTION_HEADINGS[4].to_string()));
        for award in &resume.awards {
            blocks.push(Block::Body(format!("{} ({})", award.name, award.date)));
        }
    }

    if toggles.core_competencies {
        blocks.push(Block::Heading(SECTION_HEADINGS[5].to_string()));
        for (category, skills) in &resume.core_competencies {
            blocks.push(Block::Body(category.clone()));
            for skill in skills {
                blocks.push(Block::Bullet(skill.clone()));
            }
        }
    }

    if toggles.certifications {
        blocks.push(Block::Heading(SECTION_HEADINGS[6].to_string()));
        for certification in &resume.certifications {
            blocks.push(Block::Bullet(certification.clone()));
        }
    }

    if toggles.publications {
        blocks.push(Block::Heading(SECTION_HEADINGS[7].to_string()));
        for publication in &resume.publications {
            blocks.push(Block::Body(format!(
                "{}, {}, {}",
                publication.title, publication.publisher, publication.date
            )));
        }
    }

    blocks
}

fn push_job(blocks: &mut Vec<Block>, job: &Job) {
    blocks.push(Block::Body(format!("{} at {}", job.title, job.company)));
    blocks.push(Block::Body(format!(
        "{} | {} - {}",
        job.location, job.start_date, job.end_date
    )));
    for responsibility in &job.responsibilities {
        blocks.push(Block::Bullet(responsibility.content.clone()));
    }
}
