// src/store.rs
//! Session-scoped owner of the resume being edited.
//!
//! One store per session, one resume per store. The store hands out mutable
//! access to a single document; there is no ambient/global state and no
//! concurrency control, matching the single-writer session model.

use anyhow::{Context, Result};
use tracing::info;

use crate::types::Resume;

#[derive(Debug, Default)]
pub struct ResumeStore {
    current: Option<Resume>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current resume, creating the all-empty default on first access.
    pub fn get_or_init(&mut self) -> &mut Resume {
        self.current.get_or_insert_with(Resume::default)
    }

    /// Overwrite the session document wholesale.
    pub fn replace(&mut self, resume: Resume) {
        self.current = Some(resume);
    }

    /// Read-only view without initializing.
    pub fn snapshot(&self) -> Option<&Resume> {
        self.current.as_ref()
    }

    /// Replace the session document from an uploaded JSON document.
    ///
    /// All-or-nothing: a document that does not parse leaves the held resume
    /// untouched. Missing keys in a parseable document backfill with their
    /// section defaults through serde.
    pub fn import_json(&mut self, bytes: &[u8]) -> Result<()> {
        let imported: Resume =
            serde_json::from_slice(bytes).context("Failed to parse imported resume JSON")?;
        info!(
            jobs = imported.professional_experience.len(),
            education = imported.education.len(),
            "Imported resume document"
        );
        self.current = Some(imported);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::personal::{self, PersonalField};

    #[test]
    fn get_or_init_creates_empty_document_once() {
        let mut store = ResumeStore::new();
        assert!(store.snapshot().is_none());
        personal::set_field(store.get_or_init(), PersonalField::Name, "Ada");
        assert_eq!(store.get_or_init().personal_info.name, "Ada");
    }

    #[test]
    fn malformed_import_keeps_previous_document() {
        let mut store = ResumeStore::new();
        personal::set_field(store.get_or_init(), PersonalField::Name, "Ada");

        let err = store.import_json(b"{ not json").unwrap_err();
        assert!(err.to_string().contains("parse"));
        assert_eq!(store.get_or_init().personal_info.name, "Ada");
    }

    #[test]
    fn import_backfills_missing_sections() {
        let mut store = ResumeStore::new();
        store
            .import_json(br#"{"personal_info": {"name": "Ada"}}"#)
            .unwrap();
        let resume = store.get_or_init();
        assert_eq!(resume.personal_info.name, "Ada");
        assert!(resume.awards.is_empty());
        assert!(resume.core_competencies.is_empty());
    }

    #[test]
    fn import_replaces_wholesale() {
        let mut store = ResumeStore::new();
        personal::set_field(store.get_or_init(), PersonalField::Name, "Ada");
        store.get_or_init().summary = "Old summary".to_string();

        store
            .import_json(br#"{"personal_info": {"name": "Grace"}}"#)
            .unwrap();
        let resume = store.get_or_init();
        assert_eq!(resume.personal_info.name, "Grace");
        assert!(resume.summary.is_empty());
    }
}
