//! Row mapping for each recognized tabular file.
//!
//! Every file is comma-delimited with a header row. Columns are looked up
//! by header name, case-insensitively, so column order and extra columns
//! do not matter. Each parser collects its rows completely before
//! returning; a malformed record fails the whole file so that no partial
//! file content ever lands in the document.

use csv::StringRecord;

use resume_model::{Basics, Certificate, Education, Language, Skill, WorkExperience};

use crate::dates::normalize_date;
use crate::proficiency::tier_for_endorsements;

type FileResult<T> = std::result::Result<T, String>;

fn read_records(data: &str) -> FileResult<(StringRecord, Vec<StringRecord>)> {
    // Strict field counts: a ragged row fails the record, which fails the
    // whole file (recorded as a partial error by the caller).
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let headers = reader
        .headers()
        .map_err(|error| format!("header row: {error}"))?
        .clone();
    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| format!("record {}: {error}", index + 1))?;
        records.push(record);
    }
    Ok((headers, records))
}

fn field(headers: &StringRecord, record: &StringRecord, name: &str) -> String {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .and_then(|index| record.get(index))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn has_column(headers: &StringRecord, name: &str) -> bool {
    headers
        .iter()
        .any(|header| header.trim().eq_ignore_ascii_case(name))
}

/// The profile file: one row of contact data.
pub(crate) fn parse_profile(data: &str) -> FileResult<Basics> {
    let (headers, records) = read_records(data)?;
    let Some(record) = records.first() else {
        return Ok(Basics::default());
    };

    let first_name = field(&headers, record, "First Name");
    let last_name = field(&headers, record, "Last Name");
    let name = [first_name, last_name]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let mut basics = Basics {
        name,
        label: field(&headers, record, "Headline"),
        summary: field(&headers, record, "Summary"),
        url: first_website(&field(&headers, record, "Websites")),
        ..Basics::default()
    };
    basics.location.address = field(&headers, record, "Address");
    basics.location.postal_code = field(&headers, record, "Zip Code");
    basics.location.city = field(&headers, record, "Geo Location");
    Ok(basics)
}

/// The websites column packs labeled links: `[PERSONAL:https://…,…]`.
/// The first link wins; its label prefix is stripped.
fn first_website(raw: &str) -> String {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');
    let Some(first) = inner.split(',').map(str::trim).find(|part| !part.is_empty()) else {
        return String::new();
    };
    match first.split_once(':') {
        Some((label, rest))
            if !label.is_empty() && label.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            rest.trim().to_string()
        }
        _ => first.to_string(),
    }
}

pub(crate) fn parse_positions(data: &str) -> FileResult<Vec<WorkExperience>> {
    let (headers, records) = read_records(data)?;
    Ok(records
        .iter()
        .filter_map(|record| {
            let name = field(&headers, record, "Company Name");
            let position = field(&headers, record, "Title");
            if name.is_empty() && position.is_empty() {
                return None;
            }
            Some(WorkExperience {
                name,
                position,
                location: field(&headers, record, "Location"),
                summary: field(&headers, record, "Description"),
                start_date: normalize_date(&field(&headers, record, "Started On")),
                end_date: normalize_date(&field(&headers, record, "Finished On")),
                ..WorkExperience::default()
            })
        })
        .collect())
}

pub(crate) fn parse_education(data: &str) -> FileResult<Vec<Education>> {
    let (headers, records) = read_records(data)?;
    Ok(records
        .iter()
        .filter_map(|record| {
            let institution = field(&headers, record, "School Name");
            if institution.is_empty() {
                return None;
            }
            Some(Education {
                institution,
                study_type: field(&headers, record, "Degree Name"),
                start_date: normalize_date(&field(&headers, record, "Start Date")),
                end_date: normalize_date(&field(&headers, record, "End Date")),
                ..Education::default()
            })
        })
        .collect())
}

/// The skills file has a bare `Name` column; an endorsement count column
/// is optional. Without one, proficiency stays unset: an absent signal
/// is not a "Beginner" rating.
pub(crate) fn parse_skills(data: &str) -> FileResult<Vec<Skill>> {
    let (headers, records) = read_records(data)?;
    let endorsement_column = ["Endorsement Count", "Endorsements"]
        .into_iter()
        .find(|name| has_column(&headers, name));
    Ok(records
        .iter()
        .filter_map(|record| {
            let name = field(&headers, record, "Name");
            if name.is_empty() {
                return None;
            }
            let level = endorsement_column
                .map(|column| {
                    let count = field(&headers, record, column).parse().unwrap_or(0);
                    tier_for_endorsements(count).to_string()
                })
                .unwrap_or_default();
            Some(Skill {
                name,
                level,
                ..Skill::default()
            })
        })
        .collect())
}

pub(crate) fn parse_languages(data: &str) -> FileResult<Vec<Language>> {
    let (headers, records) = read_records(data)?;
    Ok(records
        .iter()
        .filter_map(|record| {
            let language = field(&headers, record, "Name");
            if language.is_empty() {
                return None;
            }
            Some(Language {
                language,
                fluency: field(&headers, record, "Proficiency"),
                ..Language::default()
            })
        })
        .collect())
}

pub(crate) fn parse_certifications(data: &str) -> FileResult<Vec<Certificate>> {
    let (headers, records) = read_records(data)?;
    Ok(records
        .iter()
        .filter_map(|record| {
            let name = field(&headers, record, "Name");
            if name.is_empty() {
                return None;
            }
            Some(Certificate {
                name,
                issuer: field(&headers, record, "Authority"),
                date: normalize_date(&field(&headers, record, "Started On")),
                url: field(&headers, record, "Url"),
                ..Certificate::default()
            })
        })
        .collect())
}
