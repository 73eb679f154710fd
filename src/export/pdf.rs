// src/export/pdf.rs
//! Paginated export: the shared block stream laid out on US Letter pages.
//! The exporter only feeds ordered styled lines to the layout backend and
//! starts a new page when the cursor passes the bottom margin; wrapping of
//! overlong lines is the backend's concern.

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::export::blocks::{document_blocks, Block};
use crate::types::Resume;

// US Letter, millimetres.
const PAGE_WIDTH: f64 = 215.9;
const PAGE_HEIGHT: f64 = 279.4;
const MARGIN: f64 = 20.0;
const BULLET_INDENT: f64 = 6.0;

pub fn to_bytes(resume: &Resume) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Resume", Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to load builtin font")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to load builtin bold font")?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PAGE_HEIGHT - MARGIN;

    for block in document_blocks(resume) {
        let advance = line_advance(&block);
        if cursor - advance < MARGIN {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            cursor = PAGE_HEIGHT - MARGIN;
        }
        cursor -= advance;
        place_block(&layer, &block, cursor, &regular, &bold);
    }

    doc.save_to_bytes().context("Failed to write PDF document")
}

fn line_advance(block: &Block) -> f64 {
    match block {
        Block::Title(_) => 10.0,
        Block::Heading(_) => 9.0,
        Block::Body(_) | Block::Bullet(_) => 5.5,
    }
}

fn place_block(
    layer: &PdfLayerReference,
    block: &Block,
    y: f64,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    match block {
        Block::Title(text) => layer.use_text(text.clone(), 18.0, Mm(MARGIN as f32), Mm(y as f32), bold),
        Block::Heading(text) => layer.use_text(text.clone(), 14.0, Mm(MARGIN as f32), Mm(y as f32), bold),
        Block::Body(text) => layer.use_text(text.clone(), 11.0, Mm(MARGIN as f32), Mm(y as f32), regular),
        Block::Bullet(text) => layer.use_text(
            format!("• {}", text),
            11.0,
            Mm((MARGIN + BULLET_INDENT) as f32),
            Mm(y as f32),
            regular,
        ),
    }
}
