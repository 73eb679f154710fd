// src/types/resume.rs
//! Resume document structure shared by the editors, the renderer, and the
//! exporters.
//!
//! Every field carries `#[serde(default)]` so a partial JSON document imports
//! with the missing sections backfilled as empty rather than failing the
//! whole import. List order is insertion order everywhere; nothing in the
//! pipeline sorts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full resume edited during a session. One instance per session,
/// explicitly owned and passed through editor/render/export calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub professional_experience: Vec<Job>,
    pub education: Vec<Education>,
    pub awards: Vec<Award>,
    /// Category name to skills, in the order categories were added.
    pub core_competencies: IndexMap<String, Vec<String>>,
    pub certifications: Vec<String>,
    pub publications: Vec<Publication>,
    pub sections: SectionToggles,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<Responsibility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Responsibility {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,
}

impl Responsibility {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            internal_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub publisher: String,
    pub date: String,
}

/// Per-section visibility flags. A section toggled off keeps its data but is
/// skipped by the renderer and the document exporters. Documents written
/// before the flags existed import with everything visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub personal_info: bool,
    pub summary: bool,
    pub professional_experience: bool,
    pub education: bool,
    pub awards: bool,
    pub core_competencies: bool,
    pub certifications: bool,
    pub publications: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            personal_info: true,
            summary: true,
            professional_experience: true,
            education: true,
            awards: true,
            core_competencies: true,
            certifications: true,
            publications: true,
        }
    }
}
