// src/export/docx.rs
//! Flow-document export: one heading-styled paragraph per section, one
//! paragraph or bullet per entry, in the shared block order.

use std::io::Cursor;

use anyhow::{Context, Result};
use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start,
};

use crate::export::blocks::{document_blocks, Block};
use crate::types::Resume;

// Half-point font sizes.
const TITLE_SIZE: usize = 48;
const HEADING_SIZE: usize = 32;
const BODY_SIZE: usize = 22;

const BULLET_NUMBERING: usize = 1;

pub fn to_bytes(resume: &Resume) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    for block in document_blocks(resume) {
        docx = docx.add_paragraph(paragraph_for(block));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .context("Failed to pack DOCX archive")?;
    Ok(cursor.into_inner())
}

fn paragraph_for(block: Block) -> Paragraph {
    match block {
        Block::Title(text) => {
            Paragraph::new().add_run(Run::new().add_text(text).size(TITLE_SIZE).bold())
        }
        Block::Heading(text) => {
            Paragraph::new().add_run(Run::new().add_text(text).size(HEADING_SIZE).bold())
        }
        Block::Body(text) => Paragraph::new().add_run(Run::new().add_text(text).size(BODY_SIZE)),
        Block::Bullet(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).size(BODY_SIZE))
            .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_a_zip_archive() {
        let bytes = to_bytes(&Resume::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn export_does_not_mutate_the_resume() {
        let resume = Resume::default();
        let before = resume.clone();
        to_bytes(&resume).unwrap();
        assert_eq!(resume, before);
    }
}
