// src/export/mod.rs
//! Export backends. Each exporter takes the full resume and rebuilds its
//! output from scratch; none of them mutate the document, so a failed export
//! can always be retried after the content is fixed.

pub mod blocks;
pub mod docx;
pub mod json;
pub mod pdf;

use anyhow::Result;

use crate::types::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Docx,
    Pdf,
}

impl Format {
    /// Canonical download filename for this format.
    pub fn filename(&self) -> &'static str {
        match self {
            Format::Json => "resume_data.json",
            Format::Docx => "resume.docx",
            Format::Pdf => "resume.pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Format::Pdf => "application/pdf",
        }
    }
}

/// A finished export: the bytes plus the metadata the download layer needs.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: &'static str,
    pub mime_type: &'static str,
}

pub fn export(resume: &Resume, format: Format) -> Result<ExportArtifact> {
    let bytes = match format {
        Format::Json => json::to_bytes(resume)?,
        Format::Docx => docx::to_bytes(resume)?,
        Format::Pdf => pdf::to_bytes(resume)?,
    };
    Ok(ExportArtifact {
        bytes,
        filename: format.filename(),
        mime_type: format.mime_type(),
    })
}
