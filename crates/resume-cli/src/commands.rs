//! Command runners.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use resume_core::import_document;
use resume_ingest::import_bundle_path;
use resume_model::{ResumeDocument, SectionKey};
use resume_schema::{export_alternate, export_backup, export_portable};
use resume_validate::{ValidationReport, validate};

use crate::cli::{ExportArgs, ExportFormatArg, ImportArgs, ValidateArgs};
use crate::summary::section_table;
use crate::types::{ImportOutcome, ImportSource};

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let outcome = if is_bundle(&args.input) {
        let report = import_bundle_path(&args.input)
            .with_context(|| format!("import bundle {}", args.input.display()))?;
        ImportOutcome {
            input: args.input.clone(),
            source: ImportSource::Bundle,
            document: report.document,
            files_processed: report.files_processed,
            file_errors: report.errors,
        }
    } else {
        let raw = read_json(&args.input)?;
        let document = import_document(&raw)
            .with_context(|| format!("import {}", args.input.display()))?;
        ImportOutcome {
            input: args.input.clone(),
            source: ImportSource::Json,
            document,
            files_processed: Vec::new(),
            file_errors: Vec::new(),
        }
    };

    write_payload(
        args.output.as_deref(),
        &serde_json::to_value(&outcome.document).context("serialize canonical document")?,
    )?;
    info!(input = %args.input.display(), "import finished");
    Ok(outcome)
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let raw = read_json(&args.input)?;
    // Normalize whatever came in; export always works from canonical form.
    let document = import_document(&raw)
        .with_context(|| format!("import {}", args.input.display()))?;

    let payload = match args.format {
        ExportFormatArg::Portable => export_portable(&document).context("export portable")?,
        ExportFormatArg::Alternate => {
            serde_json::to_value(export_alternate(&document)).context("export alternate")?
        }
        ExportFormatArg::Backup => {
            serde_json::to_value(export_backup(&document).context("export backup")?)
                .context("serialize backup envelope")?
        }
    };

    write_payload(args.output.as_deref(), &payload)?;
    info!(input = %args.input.display(), format = ?args.format, "export finished");
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let raw = read_json(&args.input)?;
    Ok(validate(&raw))
}

pub fn run_sections() {
    let mut table = section_table();
    let document = ResumeDocument::default();
    for key in SectionKey::ALL {
        let visible = if document.section_visibility.get(key) {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![key.as_str().to_string(), visible.to_string()]);
    }
    println!("{table}");
}

/// Bundle inputs are recognized by extension; everything else is parsed
/// as JSON.
fn is_bundle(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("zip"))
}

fn read_json(path: &Path) -> Result<Value> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse {} as JSON", path.display()))
}

fn write_payload(output: Option<&Path>, payload: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(payload).context("serialize payload")?;
    match output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
