// src/lib.rs
//! Resume builder core: an owned resume document, section editors that
//! mutate it, a plain-text preview renderer, and JSON/DOCX/PDF exporters
//! that all walk the document in the same order.

use anyhow::Result;

pub mod cli;
pub mod editor;
pub mod export;
pub mod render;
pub mod store;
pub mod types;

pub use export::{export, ExportArtifact, Format};
pub use render::render;
pub use store::ResumeStore;
pub use types::Resume;

/// Convenience wrapper: import a JSON document and export it in one call.
pub fn convert(json: &[u8], format: Format) -> Result<ExportArtifact> {
    let mut store = ResumeStore::new();
    store.import_json(json)?;
    export::export(store.get_or_init(), format)
}

/// A small filled-in document, used by the CLI `sample` command and handy
/// for smoke-testing the pipeline end to end.
pub fn sample_resume() -> Resume {
    use editor::education::EducationField;
    use editor::experience::JobField;
    use editor::personal::PersonalField;
    use editor::publications::PublicationField;

    let mut resume = Resume::default();
    editor::personal::set_field(&mut resume, PersonalField::Name, "Ada Lovelace");
    editor::personal::set_field(&mut resume, PersonalField::Email, "ada@example.com");
    editor::personal::set_field(&mut resume, PersonalField::Location, "London");
    editor::personal::set_summary(
        &mut resume,
        "Engineer focused on analytical machines and reliable computation.",
    );

    editor::experience::append_job(&mut resume);
    for (field, value) in [
        (JobField::Title, "Engineer"),
        (JobField::Company, "Acme"),
        (JobField::Location, "Remote"),
        (JobField::StartDate, "Jan 2020"),
        (JobField::EndDate, "Present"),
    ] {
        editor::experience::update_job(&mut resume, 0, field, value).expect("job 0 exists");
    }
    editor::experience::append_responsibility(&mut resume, 0, "Built X").expect("job 0 exists");
    editor::experience::append_responsibility(&mut resume, 0, "Shipped Y").expect("job 0 exists");

    editor::education::append(&mut resume);
    for (field, value) in [
        (EducationField::Institution, "University of London"),
        (EducationField::Degree, "BSc Mathematics"),
        (EducationField::Location, "London"),
    ] {
        editor::education::update(&mut resume, 0, field, value).expect("entry 0 exists");
    }

    editor::awards::append(&mut resume);
    editor::awards::update(&mut resume, 0, editor::awards::AwardField::Name, "Best Paper")
        .expect("entry 0 exists");
    editor::awards::update(&mut resume, 0, editor::awards::AwardField::Date, "2023")
        .expect("entry 0 exists");

    editor::competencies::set_skills(&mut resume, "Languages", "Go, Rust");
    editor::certifications::set_block(&mut resume, "Certified Analyst\nEngine Operator");

    editor::publications::append(&mut resume);
    for (field, value) in [
        (PublicationField::Title, "Notes on the Analytical Engine"),
        (PublicationField::Publisher, "Taylor's Scientific Memoirs"),
        (PublicationField::Date, "1843"),
    ] {
        editor::publications::update(&mut resume, 0, field, value).expect("entry 0 exists");
    }

    resume
}
