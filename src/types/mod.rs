// src/types/mod.rs
//! Domain types for the resume document

pub mod resume;

pub use resume::{
    Award, Education, Job, PersonalInfo, Publication, Responsibility, Resume, SectionToggles,
};
