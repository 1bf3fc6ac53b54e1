//! The fixed list-section categories and their item types.
//!
//! Every item carries an explicit `visible` marker. A missing marker in the
//! source means "render": item defaults set `visible` to `true`, and the
//! normalization engine only writes `false` when the source said exactly
//! `false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::ListEntry;

/// The fixed top-level list categories of a resume document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Work,
    Volunteer,
    Education,
    Skills,
    Projects,
    Awards,
    Certificates,
    Publications,
    Languages,
    Interests,
    References,
}

impl SectionKey {
    /// All fixed section keys, in canonical document order.
    pub const ALL: [SectionKey; 11] = [
        SectionKey::Work,
        SectionKey::Volunteer,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Awards,
        SectionKey::Certificates,
        SectionKey::Publications,
        SectionKey::Languages,
        SectionKey::Interests,
        SectionKey::References,
    ];

    /// The wire name of this section as it appears in document JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Work => "work",
            SectionKey::Volunteer => "volunteer",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Awards => "awards",
            SectionKey::Certificates => "certificates",
            SectionKey::Publications => "publications",
            SectionKey::Languages => "languages",
            SectionKey::Interests => "interests",
            SectionKey::References => "references",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    /// Parse a section name. Case-insensitive to tolerate hand-edited files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SectionKey::ALL
            .iter()
            .find(|key| key.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("Unknown section: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub name: String,
    pub position: String,
    pub url: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for WorkExperience {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            url: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            summary: String::new(),
            highlights: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerExperience {
    pub organization: String,
    pub position: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for VolunteerExperience {
    fn default() -> Self {
        Self {
            organization: String::new(),
            position: String::new(),
            url: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            summary: String::new(),
            highlights: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub url: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    pub end_date: String,
    pub score: String,
    pub courses: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            institution: String::new(),
            url: String::new(),
            area: String::new(),
            study_type: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            score: String::new(),
            courses: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub keywords: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: String::new(),
            keywords: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<ListEntry>,
    pub keywords: Vec<ListEntry>,
    pub roles: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            url: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            highlights: Vec::new(),
            keywords: Vec::new(),
            roles: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: String,
    pub date: String,
    pub awarder: String,
    pub summary: String,
    pub visible: bool,
}

impl Default for Award {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            awarder: String::new(),
            summary: String::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub name: String,
    pub date: String,
    pub issuer: String,
    pub url: String,
    pub visible: bool,
}

impl Default for Certificate {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            issuer: String::new(),
            url: String::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub name: String,
    pub publisher: String,
    pub release_date: String,
    pub url: String,
    pub summary: String,
    pub visible: bool,
}

impl Default for Publication {
    fn default() -> Self {
        Self {
            name: String::new(),
            publisher: String::new(),
            release_date: String::new(),
            url: String::new(),
            summary: String::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub language: String,
    pub fluency: String,
    pub visible: bool,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            language: String::new(),
            fluency: String::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Interest {
    pub name: String,
    pub keywords: Vec<ListEntry>,
    pub visible: bool,
}

impl Default for Interest {
    fn default() -> Self {
        Self {
            name: String::new(),
            keywords: Vec::new(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: String,
    pub reference: String,
    pub visible: bool,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            name: String::new(),
            reference: String::new(),
            visible: true,
        }
    }
}

/// One item of any list-section, tagged with its section.
///
/// Edit actions move items through the session layer as this enum so that a
/// single action type can address all eleven sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionItem {
    Work(WorkExperience),
    Volunteer(VolunteerExperience),
    Education(Education),
    Skills(Skill),
    Projects(Project),
    Awards(Award),
    Certificates(Certificate),
    Publications(Publication),
    Languages(Language),
    Interests(Interest),
    References(Reference),
}

impl SectionItem {
    /// The section this item belongs to.
    pub fn key(&self) -> SectionKey {
        match self {
            SectionItem::Work(_) => SectionKey::Work,
            SectionItem::Volunteer(_) => SectionKey::Volunteer,
            SectionItem::Education(_) => SectionKey::Education,
            SectionItem::Skills(_) => SectionKey::Skills,
            SectionItem::Projects(_) => SectionKey::Projects,
            SectionItem::Awards(_) => SectionKey::Awards,
            SectionItem::Certificates(_) => SectionKey::Certificates,
            SectionItem::Publications(_) => SectionKey::Publications,
            SectionItem::Languages(_) => SectionKey::Languages,
            SectionItem::Interests(_) => SectionKey::Interests,
            SectionItem::References(_) => SectionKey::References,
        }
    }

    /// The item's visibility marker.
    pub fn visible(&self) -> bool {
        match self {
            SectionItem::Work(item) => item.visible,
            SectionItem::Volunteer(item) => item.visible,
            SectionItem::Education(item) => item.visible,
            SectionItem::Skills(item) => item.visible,
            SectionItem::Projects(item) => item.visible,
            SectionItem::Awards(item) => item.visible,
            SectionItem::Certificates(item) => item.visible,
            SectionItem::Publications(item) => item.visible,
            SectionItem::Languages(item) => item.visible,
            SectionItem::Interests(item) => item.visible,
            SectionItem::References(item) => item.visible,
        }
    }

    /// Set the item's visibility marker.
    pub fn set_visible(&mut self, visible: bool) {
        match self {
            SectionItem::Work(item) => item.visible = visible,
            SectionItem::Volunteer(item) => item.visible = visible,
            SectionItem::Education(item) => item.visible = visible,
            SectionItem::Skills(item) => item.visible = visible,
            SectionItem::Projects(item) => item.visible = visible,
            SectionItem::Awards(item) => item.visible = visible,
            SectionItem::Publications(item) => item.visible = visible,
            SectionItem::Certificates(item) => item.visible = visible,
            SectionItem::Languages(item) => item.visible = visible,
            SectionItem::Interests(item) => item.visible = visible,
            SectionItem::References(item) => item.visible = visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_key_round_trips_through_str() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>().unwrap(), key);
        }
        assert!("Skills".parse::<SectionKey>().is_ok());
        assert!("nonsense".parse::<SectionKey>().is_err());
    }

    #[test]
    fn items_default_visible() {
        assert!(WorkExperience::default().visible);
        assert!(Language::default().visible);
        assert!(Reference::default().visible);
    }

    #[test]
    fn partial_item_json_fills_defaults() {
        let item: Skill = serde_json::from_str(r#"{"name": "Rust"}"#).unwrap();
        assert_eq!(item.name, "Rust");
        assert!(item.visible);
        assert!(item.keywords.is_empty());
    }

    #[test]
    fn section_item_key_matches_variant() {
        let item = SectionItem::Skills(Skill::default());
        assert_eq!(item.key(), SectionKey::Skills);
        let mut item = SectionItem::Work(WorkExperience::default());
        assert!(item.visible());
        item.set_visible(false);
        assert!(!item.visible());
    }
}
