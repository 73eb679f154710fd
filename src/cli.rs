// src/cli.rs
//! Command-line shell: selects what to do with a resume document and where
//! the artifact lands. The core never touches the filesystem; all I/O
//! happens here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::export::{self, Format};
use crate::render::render;
use crate::store::ResumeStore;
use crate::types::Resume;

#[derive(Parser)]
#[command(name = "resume-forge")]
#[command(about = "Build, preview, and export resume documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a plain-text preview of a resume JSON document
    Preview { input: PathBuf },
    /// Export a resume JSON document as json, docx, or pdf
    Export {
        input: PathBuf,
        #[arg(long, value_enum)]
        format: FormatArg,
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
        /// Add a timestamp to the output filename instead of the canonical name
        #[arg(long)]
        stamped: bool,
    },
    /// Write a small sample resume document to edit from
    Sample {
        #[arg(default_value = "sample_resume.json")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Docx,
    Pdf,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Docx => Format::Docx,
            FormatArg::Pdf => Format::Pdf,
        }
    }
}

pub fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Preview { input } => {
            let resume = load_document(&input)?;
            print!("{}", render(&resume));
            Ok(())
        }
        Command::Export {
            input,
            format,
            output_dir,
            stamped,
        } => {
            let resume = load_document(&input)?;
            let artifact = export::export(&resume, format.into())?;

            fs::create_dir_all(&output_dir).with_context(|| {
                format!("Failed to create output directory: {}", output_dir.display())
            })?;
            let target = if stamped {
                output_dir.join(stamped_filename(artifact.filename))
            } else {
                output_dir.join(artifact.filename)
            };
            fs::write(&target, &artifact.bytes)
                .with_context(|| format!("Failed to write {}", target.display()))?;

            info!(
                bytes = artifact.bytes.len(),
                mime = artifact.mime_type,
                "Exported {}",
                target.display()
            );
            println!("✓ Exported {}", target.display());
            Ok(())
        }
        Command::Sample { output } => {
            let bytes = export::json::to_bytes(&crate::sample_resume())?;
            fs::write(&output, bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("✓ Wrote sample document to {}", output.display());
            Ok(())
        }
    }
}

fn load_document(input: &Path) -> Result<Resume> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let mut store = ResumeStore::new();
    store.import_json(&bytes)?;
    Ok(store.get_or_init().clone())
}

/// `resume.pdf` becomes `resume_20240101_121530.pdf`.
fn stamped_filename(filename: &str) -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, stamp, ext),
        None => format!("{}_{}", filename, stamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamped_filename_keeps_extension() {
        let name = stamped_filename("resume.pdf");
        assert!(name.starts_with("resume_"));
        assert!(name.ends_with(".pdf"));
    }
}
