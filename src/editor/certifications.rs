// src/editor/certifications.rs
//! Certifications are edited as one newline-delimited block and stored as an
//! ordered list, split on every edit. Empty lines pass through as empty
//! entries rather than being filtered.

use crate::types::Resume;

pub fn set_block(resume: &mut Resume, block: &str) {
    resume.certifications = if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').map(|line| line.to_string()).collect()
    };
}

/// Joined form handed back to the text area.
pub fn as_block(resume: &Resume) -> String {
    resume.certifications.join("\n")
}
