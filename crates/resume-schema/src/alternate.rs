//! The industry-alternate schema.
//!
//! A person/employment/education/skills/certifications nesting used by HR
//! systems. The field mapping is explicit and asymmetric, and the round
//! trip is intentionally lossy; do not assume `import(export(doc))`
//! reproduces `doc`:
//!
//! - the display name splits on the first whitespace into given/family on
//!   export and rejoins with a single space on import, so single-token
//!   names and names with irregular spacing do not survive;
//! - highlights, keywords, profiles, visibility markers, and the sections
//!   this schema has no home for (projects, awards, publications,
//!   languages, interests, references, volunteer) are dropped on export;
//! - imported records are all visible.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use resume_model::{
    Basics, Certificate, Education, Location, ResumeDocument, Skill, WorkExperience,
};

use crate::error::{Result, SchemaError};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlternatePayload {
    pub person: Person,
    pub employment: Vec<EmploymentRecord>,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<SkillRecord>,
    pub certifications: Vec<CertificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub name: PersonName,
    pub communication: Communication,
    pub location: PersonLocation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonName {
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Communication {
    pub email: String,
    pub phone: String,
    pub web: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonLocation {
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentRecord {
    pub employer: String,
    pub title: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub institution: String,
    pub program: String,
    pub degree: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRecord {
    pub name: String,
    pub proficiency_level: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRecord {
    pub name: String,
    pub issuing_authority: String,
    pub issue_date: String,
    pub url: String,
}

/// Map a canonical document onto the alternate nesting.
///
/// Hidden items are exported like visible ones; hiding affects rendering,
/// not payload composition.
pub fn export_alternate(document: &ResumeDocument) -> AlternatePayload {
    let (given_name, family_name) = split_display_name(&document.basics.name);
    AlternatePayload {
        person: Person {
            name: PersonName {
                given_name,
                family_name,
            },
            communication: Communication {
                email: document.basics.email.clone(),
                phone: document.basics.phone.clone(),
                web: document.basics.url.clone(),
            },
            location: PersonLocation {
                address: document.basics.location.address.clone(),
                city: document.basics.location.city.clone(),
                region: document.basics.location.region.clone(),
                postal_code: document.basics.location.postal_code.clone(),
                country_code: document.basics.location.country_code.clone(),
            },
        },
        employment: document
            .work
            .iter()
            .map(|work| EmploymentRecord {
                employer: work.name.clone(),
                title: work.position.clone(),
                location: work.location.clone(),
                start: work.start_date.clone(),
                end: work.end_date.clone(),
                description: work.summary.clone(),
            })
            .collect(),
        education: document
            .education
            .iter()
            .map(|education| EducationRecord {
                institution: education.institution.clone(),
                program: education.area.clone(),
                degree: education.study_type.clone(),
                start: education.start_date.clone(),
                end: education.end_date.clone(),
            })
            .collect(),
        skills: document
            .skills
            .iter()
            .map(|skill| SkillRecord {
                name: skill.name.clone(),
                proficiency_level: skill.level.clone(),
            })
            .collect(),
        certifications: document
            .certificates
            .iter()
            .map(|certificate| CertificationRecord {
                name: certificate.name.clone(),
                issuing_authority: certificate.issuer.clone(),
                issue_date: certificate.date.clone(),
                url: certificate.url.clone(),
            })
            .collect(),
    }
}

/// Import an alternate-schema payload into a canonical document.
///
/// # Errors
///
/// [`SchemaError::Validation`] when a known field has the wrong aggregate
/// type.
pub fn import_alternate(raw: &Value) -> Result<ResumeDocument> {
    let payload: AlternatePayload =
        serde_json::from_value(raw.clone()).map_err(|error| SchemaError::Validation {
            errors: vec![format!("alternate payload: {error}")],
        })?;

    let name = join_display_name(
        &payload.person.name.given_name,
        &payload.person.name.family_name,
    );

    Ok(ResumeDocument {
        basics: Basics {
            name,
            email: payload.person.communication.email,
            phone: payload.person.communication.phone,
            url: payload.person.communication.web,
            location: Location {
                address: payload.person.location.address,
                city: payload.person.location.city,
                region: payload.person.location.region,
                postal_code: payload.person.location.postal_code,
                country_code: payload.person.location.country_code,
            },
            ..Basics::default()
        },
        work: payload
            .employment
            .into_iter()
            .map(|record| WorkExperience {
                name: record.employer,
                position: record.title,
                location: record.location,
                start_date: record.start,
                end_date: record.end,
                summary: record.description,
                ..WorkExperience::default()
            })
            .collect(),
        education: payload
            .education
            .into_iter()
            .map(|record| Education {
                institution: record.institution,
                area: record.program,
                study_type: record.degree,
                start_date: record.start,
                end_date: record.end,
                ..Education::default()
            })
            .collect(),
        skills: payload
            .skills
            .into_iter()
            .map(|record| Skill {
                name: record.name,
                level: record.proficiency_level,
                ..Skill::default()
            })
            .collect(),
        certificates: payload
            .certifications
            .into_iter()
            .map(|record| Certificate {
                name: record.name,
                issuer: record.issuing_authority,
                date: record.issue_date,
                url: record.url,
                ..Certificate::default()
            })
            .collect(),
        ..ResumeDocument::default()
    })
}

/// Split a display name on the first whitespace run.
///
/// "Ada Lovelace" becomes ("Ada", "Lovelace"); a single token becomes the
/// given name with an empty family name. The split is a heuristic and is
/// where the alternate round trip loses information.
fn split_display_name(name: &str) -> (String, String) {
    let trimmed = name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((given, family)) => (given.to_string(), family.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

fn join_display_name(given: &str, family: &str) -> String {
    let given = given.trim();
    let family = family.trim();
    if given.is_empty() {
        family.to_string()
    } else if family.is_empty() {
        given.to_string()
    } else {
        format!("{given} {family}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_splits_on_first_whitespace() {
        assert_eq!(
            split_display_name("Ada Lovelace"),
            ("Ada".to_string(), "Lovelace".to_string())
        );
        assert_eq!(
            split_display_name("Ada Marie Lovelace"),
            ("Ada".to_string(), "Marie Lovelace".to_string())
        );
        assert_eq!(
            split_display_name("Cher"),
            ("Cher".to_string(), String::new())
        );
        assert_eq!(split_display_name("   "), (String::new(), String::new()));
    }

    #[test]
    fn export_maps_work_onto_employment() {
        let mut doc = ResumeDocument::default();
        doc.basics.name = "Ada Lovelace".into();
        doc.work.push(WorkExperience {
            name: "Engine Works".into(),
            position: "Analyst".into(),
            start_date: "1842-01-01".into(),
            ..WorkExperience::default()
        });
        let payload = export_alternate(&doc);
        assert_eq!(payload.person.name.given_name, "Ada");
        assert_eq!(payload.person.name.family_name, "Lovelace");
        assert_eq!(payload.employment.len(), 1);
        assert_eq!(payload.employment[0].employer, "Engine Works");
        assert_eq!(payload.employment[0].title, "Analyst");
    }

    #[test]
    fn import_builds_visible_canonical_items() {
        let raw = json!({
            "person": {
                "name": {"givenName": "Ada", "familyName": "Lovelace"},
                "communication": {"email": "ada@example.org"}
            },
            "employment": [{"employer": "Engine Works", "title": "Analyst"}],
            "skills": [{"name": "Analysis", "proficiencyLevel": "Expert"}]
        });
        let doc = import_alternate(&raw).unwrap();
        assert_eq!(doc.basics.name, "Ada Lovelace");
        assert_eq!(doc.basics.email, "ada@example.org");
        assert!(doc.work[0].visible);
        assert_eq!(doc.skills[0].level, "Expert");
    }

    #[test]
    fn import_rejects_wrong_aggregate_types() {
        let error = import_alternate(&json!({"person": {}, "employment": 5})).unwrap_err();
        assert!(matches!(error, SchemaError::Validation { .. }));
    }

    #[test]
    fn round_trip_is_lossy_for_single_token_names() {
        let mut doc = ResumeDocument::default();
        doc.basics.name = "Cher".into();
        doc.basics.label = "Performer".into();
        let round =
            import_alternate(&serde_json::to_value(export_alternate(&doc)).unwrap()).unwrap();
        // The name survives, the label does not: this round trip is
        // documented as non-reversible.
        assert_eq!(round.basics.name, "Cher");
        assert_eq!(round.basics.label, "");
    }
}
