// src/export/json.rs
//! JSON passthrough export: the resume serialized per its schema, 2-space
//! indentation, UTF-8. Round-trips losslessly through the store's importer.

use anyhow::{Context, Result};

use crate::types::Resume;

pub fn to_bytes(resume: &Resume) -> Result<Vec<u8>> {
    let mut bytes =
        serde_json::to_vec_pretty(resume).context("Failed to serialize resume to JSON")?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{competencies, personal::PersonalField};
    use crate::store::ResumeStore;

    fn sample() -> Resume {
        let mut resume = Resume::default();
        crate::editor::personal::set_field(&mut resume, PersonalField::Name, "Ada Lovelace");
        resume.summary = "Analyst and programmer.".to_string();
        competencies::set_skills(&mut resume, "Languages", "Go, Rust");
        resume.certifications = vec!["CKA".to_string(), String::new()];
        resume
    }

    #[test]
    fn export_round_trips_through_import() {
        let resume = sample();
        let bytes = to_bytes(&resume).unwrap();
        let mut store = ResumeStore::new();
        store.import_json(&bytes).unwrap();
        assert_eq!(*store.get_or_init(), resume);
    }

    #[test]
    fn output_is_two_space_indented() {
        let bytes = to_bytes(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n  \"personal_info\""));
    }
}
