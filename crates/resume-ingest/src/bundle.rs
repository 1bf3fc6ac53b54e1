//! Bundle recognition and import orchestration.
//!
//! A bundle is a ZIP archive of comma-delimited files exported by a
//! third-party service. Recognition happens on the archive's file listing
//! alone, before any parsing: an archive with none of the expected names
//! fails fast as unrecognized. Each recognized file is then parsed
//! independently, so one broken file becomes a recorded error instead of
//! an aborted import.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::{debug, info, warn};
use zip::ZipArchive;

use resume_model::ResumeDocument;

use crate::error::{IngestError, Result};
use crate::tables;

/// The recognizable files of an export bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFile {
    Profile,
    Positions,
    Education,
    Skills,
    Languages,
    Certifications,
}

impl BundleFile {
    pub const ALL: [BundleFile; 6] = [
        BundleFile::Profile,
        BundleFile::Positions,
        BundleFile::Education,
        BundleFile::Skills,
        BundleFile::Languages,
        BundleFile::Certifications,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            BundleFile::Profile => "Profile.csv",
            BundleFile::Positions => "Positions.csv",
            BundleFile::Education => "Education.csv",
            BundleFile::Skills => "Skills.csv",
            BundleFile::Languages => "Languages.csv",
            BundleFile::Certifications => "Certifications.csv",
        }
    }

    /// Match an archive entry, case-insensitively, on its final path
    /// component; exports often nest files under a dated folder.
    fn matches(&self, entry_name: &str) -> bool {
        let base = entry_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(entry_name);
        base.eq_ignore_ascii_case(self.file_name())
    }
}

/// One file that failed to parse. The rest of the bundle still imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub file: String,
    pub message: String,
}

/// Outcome of a bundle import: which files landed, which failed, and the
/// document assembled from the successes.
#[derive(Debug, Clone)]
pub struct BundleImportReport {
    pub files_processed: Vec<String>,
    pub errors: Vec<FileError>,
    pub document: ResumeDocument,
}

/// Import a bundle from any seekable reader.
///
/// # Errors
///
/// - [`IngestError::Archive`] when the bytes are not a readable archive;
/// - [`IngestError::UnrecognizedArchive`] when the listing contains no
///   expected file name (raised before anything is parsed).
///
/// Per-file parse failures never error; they are recorded in the report.
pub fn import_bundle<R: Read + Seek>(reader: R) -> Result<BundleImportReport> {
    let mut archive = ZipArchive::new(reader)?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let recognized: Vec<(BundleFile, String)> = BundleFile::ALL
        .iter()
        .filter_map(|file| {
            names
                .iter()
                .find(|name| file.matches(name))
                .map(|name| (*file, name.clone()))
        })
        .collect();

    if recognized.is_empty() {
        warn!(entries = names.len(), "archive matched no expected files");
        return Err(IngestError::UnrecognizedArchive);
    }
    debug!(
        recognized = recognized.len(),
        entries = names.len(),
        "recognized export bundle"
    );

    let mut document = ResumeDocument::default();
    let mut files_processed = Vec::new();
    let mut errors = Vec::new();

    for (file, name) in recognized {
        let data = match read_entry(&mut archive, &name) {
            Ok(data) => data,
            Err(message) => {
                warn!(file = %name, %message, "failed to read bundle entry");
                errors.push(FileError {
                    file: name,
                    message,
                });
                continue;
            }
        };
        match apply_file(&mut document, file, &data) {
            Ok(()) => files_processed.push(name),
            Err(message) => {
                warn!(file = %name, %message, "failed to parse bundle file");
                errors.push(FileError {
                    file: name,
                    message,
                });
            }
        }
    }

    info!(
        processed = files_processed.len(),
        failed = errors.len(),
        "bundle import finished"
    );
    Ok(BundleImportReport {
        files_processed,
        errors,
        document,
    })
}

/// Import a bundle from a file on disk.
pub fn import_bundle_path(path: &Path) -> Result<BundleImportReport> {
    let file = File::open(path)?;
    import_bundle(file)
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> std::result::Result<String, String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|error| error.to_string())?;
    let mut data = String::new();
    entry
        .read_to_string(&mut data)
        .map_err(|error| error.to_string())?;
    Ok(data)
}

/// Apply one parsed file to the document under assembly. Parsers collect
/// their rows completely before returning, so a failure applies nothing.
fn apply_file(
    document: &mut ResumeDocument,
    file: BundleFile,
    data: &str,
) -> std::result::Result<(), String> {
    match file {
        BundleFile::Profile => document.basics = tables::parse_profile(data)?,
        BundleFile::Positions => document.work = tables::parse_positions(data)?,
        BundleFile::Education => document.education = tables::parse_education(data)?,
        BundleFile::Skills => document.skills = tables::parse_skills(data)?,
        BundleFile::Languages => document.languages = tables::parse_languages(data)?,
        BundleFile::Certifications => {
            document.certificates = tables::parse_certifications(data)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_and_folders() {
        assert!(BundleFile::Profile.matches("Profile.csv"));
        assert!(BundleFile::Profile.matches("Export-2026/profile.CSV"));
        assert!(BundleFile::Skills.matches("data\\Skills.csv"));
        assert!(!BundleFile::Profile.matches("Profiles.csv"));
        assert!(!BundleFile::Profile.matches("Profile.csv.bak"));
    }
}
