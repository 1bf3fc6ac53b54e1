//! End-to-end bundle import against in-memory and on-disk archives.

use std::io::{Cursor, Write};

use zip::ZipArchive;
use zip::write::SimpleFileOptions;

use resume_ingest::{IngestError, import_bundle, import_bundle_path};

fn build_zip(files: &[(&str, &str)]) -> Cursor<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, data) in files {
        writer.start_file(*name, options).expect("start zip entry");
        writer.write_all(data.as_bytes()).expect("write zip entry");
    }
    let mut cursor = writer.finish().expect("finish zip");
    cursor.set_position(0);
    cursor
}

const PROFILE: &str = "First Name,Last Name,Headline,Summary,Websites\n\
                       Ada,Lovelace,Analyst,First programmer,[PERSONAL:https://ada.example]\n";
const POSITIONS: &str = "Company Name,Title,Description,Location,Started On,Finished On\n\
                         Engine Works,Analyst,Differential engines,London,Jan 2020,2021\n\
                         Tabulators Ltd,Consultant,,Remote,Mar 2018,Dec 2019\n";
const SKILLS: &str = "Name,Endorsement Count\nAnalysis,41\nDocumentation,6\n";
const LANGUAGES: &str = "Name,Proficiency\nEnglish,Native or bilingual proficiency\n";

#[test]
fn imports_a_full_bundle() {
    let cursor = build_zip(&[
        ("Profile.csv", PROFILE),
        ("Positions.csv", POSITIONS),
        ("Skills.csv", SKILLS),
        ("Languages.csv", LANGUAGES),
    ]);
    let report = import_bundle(cursor).expect("bundle imports");

    assert_eq!(report.files_processed.len(), 4);
    assert!(report.errors.is_empty());

    let doc = &report.document;
    assert_eq!(doc.basics.name, "Ada Lovelace");
    assert_eq!(doc.basics.url, "https://ada.example");
    assert_eq!(doc.work.len(), 2);
    assert_eq!(doc.work[0].start_date, "2020-01-01");
    assert_eq!(doc.work[1].end_date, "2019-12-01");
    assert!(doc.work.iter().all(|work| work.visible));
    assert_eq!(doc.skills[0].level, "Expert");
    assert_eq!(doc.skills[1].level, "Intermediate");
    assert_eq!(doc.languages[0].language, "English");
}

#[test]
fn recognizes_files_nested_in_a_folder() {
    let cursor = build_zip(&[("Export-2026-08/Skills.csv", "Name\nRust\n")]);
    let report = import_bundle(cursor).expect("bundle imports");
    assert_eq!(report.files_processed, vec!["Export-2026-08/Skills.csv"]);
    assert_eq!(report.document.skills[0].name, "Rust");
}

#[test]
fn fails_fast_on_unrecognized_archives() {
    let cursor = build_zip(&[("notes.txt", "hello"), ("data.json", "{}")]);
    let error = import_bundle(cursor).unwrap_err();
    assert!(matches!(error, IngestError::UnrecognizedArchive));
}

#[test]
fn one_broken_file_is_a_partial_error_not_an_abort() {
    let broken_positions = "Company Name,Title\nAcme\n"; // ragged row
    let cursor = build_zip(&[
        ("Positions.csv", broken_positions),
        ("Skills.csv", "Name\nRust\n"),
    ]);
    let report = import_bundle(cursor).expect("import continues");

    assert_eq!(report.files_processed, vec!["Skills.csv"]);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].file, "Positions.csv");
    // Nothing from the broken file landed.
    assert!(report.document.work.is_empty());
    assert_eq!(report.document.skills.len(), 1);
}

#[test]
fn garbage_bytes_are_an_archive_error() {
    let cursor = Cursor::new(b"this is not a zip file".to_vec());
    let error = import_bundle(cursor).unwrap_err();
    assert!(matches!(error, IngestError::Archive(_)));
}

#[test]
fn imports_from_a_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("export.zip");
    let cursor = build_zip(&[("Skills.csv", "Name\nRust\n")]);
    std::fs::write(&path, cursor.into_inner()).expect("write archive");

    let report = import_bundle_path(&path).expect("bundle imports");
    assert_eq!(report.document.skills.len(), 1);
}
