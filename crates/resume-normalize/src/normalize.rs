//! The normalization engine.
//!
//! Builds a structurally complete canonical document from arbitrary JSON
//! object input. The engine assumes its input already passed the
//! validation gate: the only error it can raise is a non-object root.
//! Everything below the root is repaired: missing sections become empty
//! arrays, missing scalars become empty strings, malformed list elements
//! are dropped, and visibility markers are made explicit.
//!
//! Normalization is idempotent: feeding the serialized output back in
//! produces an equal document.

use serde_json::{Map, Value};
use tracing::debug;

use resume_model::{
    Award, Basics, Certificate, Education, Interest, Language, ListEntry, Location, Profile,
    Project, Publication, Reference, ResumeDocument, SectionKey, SectionVisibility, Skill,
    VolunteerExperience, WorkExperience,
};

use crate::error::{NormalizeError, Result, json_type_name};
use crate::migrate;
use crate::sanitize::{clean_array, sanitize_array_item};

/// Build a canonical document from arbitrary object input.
///
/// # Errors
///
/// Fails with [`NormalizeError::NotAnObject`] when `raw` is not a JSON
/// object. Never fails otherwise.
pub fn normalize(raw: &Value) -> Result<ResumeDocument> {
    let root = raw.as_object().ok_or(NormalizeError::NotAnObject {
        found: json_type_name(raw),
    })?;

    let document = ResumeDocument {
        basics: normalize_basics(root.get("basics")),
        work: normalize_section(root.get("work"), normalize_work),
        volunteer: normalize_section(root.get("volunteer"), normalize_volunteer),
        education: normalize_section(root.get("education"), normalize_education),
        skills: normalize_section(root.get("skills"), normalize_skill),
        projects: normalize_section(root.get("projects"), normalize_project),
        awards: normalize_section(root.get("awards"), normalize_award),
        certificates: normalize_section(root.get("certificates"), normalize_certificate),
        publications: normalize_section(root.get("publications"), normalize_publication),
        languages: normalize_section(root.get("languages"), normalize_language),
        interests: normalize_section(root.get("interests"), normalize_interest),
        references: normalize_section(root.get("references"), normalize_reference),
        section_visibility: normalize_visibility(root.get("sectionVisibility")),
        meta: root.get("meta").cloned(),
        non_conforming_data: root.get("nonConformingData").cloned(),
    };

    debug!(
        items = SectionKey::ALL
            .iter()
            .map(|key| document.section_len(*key))
            .sum::<usize>(),
        profiles = document.basics.profiles.len(),
        "normalized document"
    );
    Ok(document)
}

/// Coerce one list-section to an array of typed items.
///
/// Missing or non-array input becomes an empty section; non-object
/// elements are dropped.
fn normalize_section<T>(value: Option<&Value>, build: fn(&Map<String, Value>) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(build)
            .collect(),
        _ => Vec::new(),
    }
}

/// An item is hidden only by an explicit `visible: false`.
fn explicit_visible(object: &Map<String, Value>) -> bool {
    !matches!(object.get("visible"), Some(Value::Bool(false)))
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn entries_field(object: &Map<String, Value>, key: &str) -> Vec<ListEntry> {
    match object.get(key) {
        Some(Value::Array(items)) => clean_array(items),
        _ => Vec::new(),
    }
}

fn normalize_basics(value: Option<&Value>) -> Basics {
    let Some(Value::Object(object)) = value else {
        return Basics::default();
    };
    Basics {
        name: string_field(object, "name"),
        label: string_field(object, "label"),
        image: string_field(object, "image"),
        image_size: migrate::image_size(object),
        email: string_field(object, "email"),
        phone: string_field(object, "phone"),
        url: migrate::url_field(object),
        summary: string_field(object, "summary"),
        location: normalize_location(object.get("location")),
        profiles: normalize_profiles(object.get("profiles")),
    }
}

fn normalize_location(value: Option<&Value>) -> Location {
    let Some(Value::Object(object)) = value else {
        return Location::default();
    };
    Location {
        address: string_field(object, "address"),
        city: string_field(object, "city"),
        region: string_field(object, "region"),
        postal_code: string_field(object, "postalCode"),
        country_code: string_field(object, "countryCode"),
    }
}

/// Sanitize profiles with the array-sanitizer rules, then type the
/// survivors. Plain-text elements have no profile mapping and are dropped
/// rather than coerced.
fn normalize_profiles(value: Option<&Value>) -> Vec<Profile> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    let profiles: Vec<Profile> = items
        .iter()
        .filter_map(|item| {
            match sanitize_array_item(item)? {
                ListEntry::Entry(_) => {}
                ListEntry::Text(_) => return None,
            }
            let object = item.as_object()?;
            Some(Profile {
                network: string_field(object, "network"),
                username: string_field(object, "username"),
                url: migrate::url_field(object),
                visible: explicit_visible(object),
            })
        })
        .collect();
    if profiles.len() < items.len() {
        debug!(
            dropped = items.len() - profiles.len(),
            "dropped malformed profile entries"
        );
    }
    profiles
}

fn normalize_visibility(value: Option<&Value>) -> SectionVisibility {
    let mut visibility = SectionVisibility::default();
    if let Some(Value::Object(object)) = value {
        for key in SectionKey::ALL {
            if let Some(Value::Bool(flag)) = object.get(key.as_str()) {
                visibility.set(key, *flag);
            }
        }
    }
    visibility
}

fn normalize_work(object: &Map<String, Value>) -> WorkExperience {
    WorkExperience {
        name: string_field(object, "name"),
        position: string_field(object, "position"),
        url: migrate::url_field(object),
        location: string_field(object, "location"),
        start_date: string_field(object, "startDate"),
        end_date: string_field(object, "endDate"),
        summary: string_field(object, "summary"),
        highlights: entries_field(object, "highlights"),
        visible: explicit_visible(object),
    }
}

fn normalize_volunteer(object: &Map<String, Value>) -> VolunteerExperience {
    VolunteerExperience {
        organization: string_field(object, "organization"),
        position: string_field(object, "position"),
        url: string_field(object, "url"),
        start_date: string_field(object, "startDate"),
        end_date: string_field(object, "endDate"),
        summary: string_field(object, "summary"),
        highlights: entries_field(object, "highlights"),
        visible: explicit_visible(object),
    }
}

fn normalize_education(object: &Map<String, Value>) -> Education {
    Education {
        institution: string_field(object, "institution"),
        url: string_field(object, "url"),
        area: string_field(object, "area"),
        study_type: string_field(object, "studyType"),
        start_date: string_field(object, "startDate"),
        end_date: string_field(object, "endDate"),
        score: string_field(object, "score"),
        courses: entries_field(object, "courses"),
        visible: explicit_visible(object),
    }
}

fn normalize_skill(object: &Map<String, Value>) -> Skill {
    Skill {
        name: string_field(object, "name"),
        level: string_field(object, "level"),
        keywords: entries_field(object, "keywords"),
        visible: explicit_visible(object),
    }
}

fn normalize_project(object: &Map<String, Value>) -> Project {
    Project {
        name: string_field(object, "name"),
        description: string_field(object, "description"),
        url: string_field(object, "url"),
        start_date: string_field(object, "startDate"),
        end_date: string_field(object, "endDate"),
        highlights: entries_field(object, "highlights"),
        keywords: entries_field(object, "keywords"),
        roles: entries_field(object, "roles"),
        visible: explicit_visible(object),
    }
}

fn normalize_award(object: &Map<String, Value>) -> Award {
    Award {
        title: string_field(object, "title"),
        date: string_field(object, "date"),
        awarder: string_field(object, "awarder"),
        summary: string_field(object, "summary"),
        visible: explicit_visible(object),
    }
}

fn normalize_certificate(object: &Map<String, Value>) -> Certificate {
    Certificate {
        name: string_field(object, "name"),
        date: string_field(object, "date"),
        issuer: string_field(object, "issuer"),
        url: string_field(object, "url"),
        visible: explicit_visible(object),
    }
}

fn normalize_publication(object: &Map<String, Value>) -> Publication {
    Publication {
        name: string_field(object, "name"),
        publisher: string_field(object, "publisher"),
        release_date: string_field(object, "releaseDate"),
        url: string_field(object, "url"),
        summary: string_field(object, "summary"),
        visible: explicit_visible(object),
    }
}

fn normalize_language(object: &Map<String, Value>) -> Language {
    Language {
        language: string_field(object, "language"),
        fluency: string_field(object, "fluency"),
        visible: explicit_visible(object),
    }
}

fn normalize_interest(object: &Map<String, Value>) -> Interest {
    Interest {
        name: string_field(object, "name"),
        keywords: entries_field(object, "keywords"),
        visible: explicit_visible(object),
    }
}

fn normalize_reference(object: &Map<String, Value>) -> Reference {
    Reference {
        name: string_field(object, "name"),
        reference: string_field(object, "reference"),
        visible: explicit_visible(object),
    }
}
