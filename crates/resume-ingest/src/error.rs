use thiserror::Error;

/// Failures that abort a bundle import outright.
///
/// Per-file parse failures do NOT appear here. They are recorded in the
/// import report and never abort the remaining files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive's file listing contains none of the expected names.
    /// Raised before any file is parsed.
    #[error("archive does not contain any recognized export files")]
    UnrecognizedArchive,
}

pub type Result<T> = std::result::Result<T, IngestError>;
