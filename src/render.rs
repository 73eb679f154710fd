// src/render.rs
//! Plain-text preview of the resume, built from the same block stream the
//! document exporters use. Deterministic and side-effect-free: the same
//! document always renders to byte-identical text.

use crate::export::blocks::{document_blocks, Block};
use crate::types::Resume;

pub fn render(resume: &Resume) -> String {
    let mut out = String::new();
    for block in document_blocks(resume) {
        match block {
            Block::Title(text) => {
                out.push_str("# ");
                out.push_str(&text);
                out.push('\n');
            }
            Block::Heading(text) => {
                out.push('\n');
                out.push_str("## ");
                out.push_str(&text);
                out.push('\n');
            }
            Block::Body(text) => {
                out.push_str(&text);
                out.push('\n');
            }
            Block::Bullet(text) => {
                out.push_str("- ");
                out.push_str(&text);
                out.push('\n');
            }
        }
    }
    out
}
