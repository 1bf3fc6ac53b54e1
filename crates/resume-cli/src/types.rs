//! Shared result types for command runners.

use std::path::PathBuf;

use resume_ingest::FileError;
use resume_model::ResumeDocument;

/// How the imported bytes were interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    /// A JSON payload routed through the format discriminator.
    Json,
    /// A tabular export bundle archive.
    Bundle,
}

/// Result of an import run, for the summary printer.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub input: PathBuf,
    pub source: ImportSource,
    pub document: ResumeDocument,
    /// Bundle files that parsed successfully (empty for JSON imports).
    pub files_processed: Vec<String>,
    /// Bundle files that failed (empty for JSON imports).
    pub file_errors: Vec<FileError>,
}

impl ImportOutcome {
    pub fn has_errors(&self) -> bool {
        !self.file_errors.is_empty()
    }
}
