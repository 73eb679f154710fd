// src/editor/mod.rs
//! Section editors: one module per resume section, each a set of mutation
//! functions over one subtree of a `&mut Resume`.
//!
//! The form layer supplies the latest field values; editors write them
//! unconditionally, with no diffing and no format validation. List entries
//! are addressed by index, which is safe under the synchronous single-writer
//! session model.

pub mod awards;
pub mod certifications;
pub mod competencies;
pub mod education;
pub mod experience;
pub mod personal;
pub mod publications;
pub mod sections;
