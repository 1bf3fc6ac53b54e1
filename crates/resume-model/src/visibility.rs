//! The fixed-key section visibility map.

use serde::{Deserialize, Serialize};

use crate::sections::SectionKey;

/// Per-section render toggles.
///
/// The key set is fixed: every section always has a boolean value, and a
/// freshly built map is all-true. Deserializing a partial map fills the
/// missing keys from the default, which is how unspecified sections come
/// out visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub work: bool,
    pub volunteer: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub awards: bool,
    pub certificates: bool,
    pub publications: bool,
    pub languages: bool,
    pub interests: bool,
    pub references: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            work: true,
            volunteer: true,
            education: true,
            skills: true,
            projects: true,
            awards: true,
            certificates: true,
            publications: true,
            languages: true,
            interests: true,
            references: true,
        }
    }
}

impl SectionVisibility {
    pub fn get(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Work => self.work,
            SectionKey::Volunteer => self.volunteer,
            SectionKey::Education => self.education,
            SectionKey::Skills => self.skills,
            SectionKey::Projects => self.projects,
            SectionKey::Awards => self.awards,
            SectionKey::Certificates => self.certificates,
            SectionKey::Publications => self.publications,
            SectionKey::Languages => self.languages,
            SectionKey::Interests => self.interests,
            SectionKey::References => self.references,
        }
    }

    pub fn set(&mut self, key: SectionKey, visible: bool) {
        match key {
            SectionKey::Work => self.work = visible,
            SectionKey::Volunteer => self.volunteer = visible,
            SectionKey::Education => self.education = visible,
            SectionKey::Skills => self.skills = visible,
            SectionKey::Projects => self.projects = visible,
            SectionKey::Awards => self.awards = visible,
            SectionKey::Certificates => self.certificates = visible,
            SectionKey::Publications => self.publications = visible,
            SectionKey::Languages => self.languages = visible,
            SectionKey::Interests => self.interests = visible,
            SectionKey::References => self.references = visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_visible() {
        let visibility = SectionVisibility::default();
        for key in SectionKey::ALL {
            assert!(visibility.get(key), "{key} should default to visible");
        }
    }

    #[test]
    fn partial_json_fills_missing_keys_true() {
        let visibility: SectionVisibility =
            serde_json::from_str(r#"{"awards": false}"#).unwrap();
        assert!(!visibility.get(SectionKey::Awards));
        assert!(visibility.get(SectionKey::Work));
        assert!(visibility.get(SectionKey::References));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut visibility = SectionVisibility::default();
        visibility.set(SectionKey::Projects, false);
        assert!(!visibility.get(SectionKey::Projects));
        visibility.set(SectionKey::Projects, true);
        assert!(visibility.get(SectionKey::Projects));
    }
}
