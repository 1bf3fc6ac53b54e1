//! The canonical resume document and its contact header.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sections::{
    Award, Certificate, Education, Interest, Language, Project, Publication, Reference,
    SectionItem, SectionKey, Skill, VolunteerExperience, WorkExperience,
};
use crate::visibility::SectionVisibility;

/// Rendered size of the portrait image, in pixels, when the source supplies
/// none.
pub const DEFAULT_IMAGE_SIZE: u32 = 128;

/// Street-level location for the contact header.
///
/// Always structurally complete: all five fields exist, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country_code: String,
}

/// A social or professional network handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub network: String,
    pub username: String,
    pub url: String,
    pub visible: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            network: String::new(),
            username: String::new(),
            url: String::new(),
            visible: true,
        }
    }
}

/// Contact header: scalar fields, location, and network profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub image: String,
    pub image_size: u32,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub summary: String,
    pub location: Location,
    pub profiles: Vec<Profile>,
}

impl Default for Basics {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            image: String::new(),
            image_size: DEFAULT_IMAGE_SIZE,
            email: String::new(),
            phone: String::new(),
            url: String::new(),
            summary: String::new(),
            location: Location::default(),
            profiles: Vec::new(),
        }
    }
}

/// The canonical in-memory resume representation.
///
/// Single owner: the editing session. Every list-section field is always an
/// array, `sectionVisibility` always carries the full key set, and
/// `basics.location` is always complete. `meta` and `nonConformingData` are
/// opaque passthrough payloads that are never validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub basics: Basics,
    pub work: Vec<WorkExperience>,
    pub volunteer: Vec<VolunteerExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub awards: Vec<Award>,
    pub certificates: Vec<Certificate>,
    pub publications: Vec<Publication>,
    pub languages: Vec<Language>,
    pub interests: Vec<Interest>,
    pub references: Vec<Reference>,
    pub section_visibility: SectionVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_conforming_data: Option<Value>,
}

impl ResumeDocument {
    /// Number of items in a section.
    pub fn section_len(&self, key: SectionKey) -> usize {
        match key {
            SectionKey::Work => self.work.len(),
            SectionKey::Volunteer => self.volunteer.len(),
            SectionKey::Education => self.education.len(),
            SectionKey::Skills => self.skills.len(),
            SectionKey::Projects => self.projects.len(),
            SectionKey::Awards => self.awards.len(),
            SectionKey::Certificates => self.certificates.len(),
            SectionKey::Publications => self.publications.len(),
            SectionKey::Languages => self.languages.len(),
            SectionKey::Interests => self.interests.len(),
            SectionKey::References => self.references.len(),
        }
    }

    /// Number of items the renderer would show: those with
    /// `visible != false`.
    pub fn visible_item_count(&self, key: SectionKey) -> usize {
        match key {
            SectionKey::Work => count_visible(&self.work, |item| item.visible),
            SectionKey::Volunteer => count_visible(&self.volunteer, |item| item.visible),
            SectionKey::Education => count_visible(&self.education, |item| item.visible),
            SectionKey::Skills => count_visible(&self.skills, |item| item.visible),
            SectionKey::Projects => count_visible(&self.projects, |item| item.visible),
            SectionKey::Awards => count_visible(&self.awards, |item| item.visible),
            SectionKey::Certificates => count_visible(&self.certificates, |item| item.visible),
            SectionKey::Publications => count_visible(&self.publications, |item| item.visible),
            SectionKey::Languages => count_visible(&self.languages, |item| item.visible),
            SectionKey::Interests => count_visible(&self.interests, |item| item.visible),
            SectionKey::References => count_visible(&self.references, |item| item.visible),
        }
    }

    /// Append an item to the section it belongs to.
    pub fn push_item(&mut self, item: SectionItem) {
        match item {
            SectionItem::Work(value) => self.work.push(value),
            SectionItem::Volunteer(value) => self.volunteer.push(value),
            SectionItem::Education(value) => self.education.push(value),
            SectionItem::Skills(value) => self.skills.push(value),
            SectionItem::Projects(value) => self.projects.push(value),
            SectionItem::Awards(value) => self.awards.push(value),
            SectionItem::Certificates(value) => self.certificates.push(value),
            SectionItem::Publications(value) => self.publications.push(value),
            SectionItem::Languages(value) => self.languages.push(value),
            SectionItem::Interests(value) => self.interests.push(value),
            SectionItem::References(value) => self.references.push(value),
        }
    }

    /// Replace the item at `index` in the item's own section.
    ///
    /// Returns `false` (leaving the document unchanged) when the index is
    /// out of range.
    pub fn replace_item(&mut self, index: usize, item: SectionItem) -> bool {
        match item {
            SectionItem::Work(value) => replace_at(&mut self.work, index, value),
            SectionItem::Volunteer(value) => replace_at(&mut self.volunteer, index, value),
            SectionItem::Education(value) => replace_at(&mut self.education, index, value),
            SectionItem::Skills(value) => replace_at(&mut self.skills, index, value),
            SectionItem::Projects(value) => replace_at(&mut self.projects, index, value),
            SectionItem::Awards(value) => replace_at(&mut self.awards, index, value),
            SectionItem::Certificates(value) => replace_at(&mut self.certificates, index, value),
            SectionItem::Publications(value) => replace_at(&mut self.publications, index, value),
            SectionItem::Languages(value) => replace_at(&mut self.languages, index, value),
            SectionItem::Interests(value) => replace_at(&mut self.interests, index, value),
            SectionItem::References(value) => replace_at(&mut self.references, index, value),
        }
    }

    /// Remove and return the item at `index`, or `None` when out of range.
    ///
    /// Removal deletes data. Hiding an item is a different operation
    /// ([`ResumeDocument::set_item_visible`]); the two are never inferred
    /// from each other.
    pub fn remove_item(&mut self, key: SectionKey, index: usize) -> Option<SectionItem> {
        if index >= self.section_len(key) {
            return None;
        }
        Some(match key {
            SectionKey::Work => SectionItem::Work(self.work.remove(index)),
            SectionKey::Volunteer => SectionItem::Volunteer(self.volunteer.remove(index)),
            SectionKey::Education => SectionItem::Education(self.education.remove(index)),
            SectionKey::Skills => SectionItem::Skills(self.skills.remove(index)),
            SectionKey::Projects => SectionItem::Projects(self.projects.remove(index)),
            SectionKey::Awards => SectionItem::Awards(self.awards.remove(index)),
            SectionKey::Certificates => SectionItem::Certificates(self.certificates.remove(index)),
            SectionKey::Publications => SectionItem::Publications(self.publications.remove(index)),
            SectionKey::Languages => SectionItem::Languages(self.languages.remove(index)),
            SectionKey::Interests => SectionItem::Interests(self.interests.remove(index)),
            SectionKey::References => SectionItem::References(self.references.remove(index)),
        })
    }

    /// Flip the visibility marker of one item, keeping the item's data.
    ///
    /// Returns `false` when the index is out of range.
    pub fn set_item_visible(&mut self, key: SectionKey, index: usize, visible: bool) -> bool {
        match key {
            SectionKey::Work => set_visible_at(&mut self.work, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Volunteer => set_visible_at(&mut self.volunteer, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Education => set_visible_at(&mut self.education, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Skills => set_visible_at(&mut self.skills, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Projects => set_visible_at(&mut self.projects, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Awards => set_visible_at(&mut self.awards, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Certificates => {
                set_visible_at(&mut self.certificates, index, visible, |i, v| {
                    i.visible = v;
                })
            }
            SectionKey::Publications => {
                set_visible_at(&mut self.publications, index, visible, |i, v| {
                    i.visible = v;
                })
            }
            SectionKey::Languages => set_visible_at(&mut self.languages, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::Interests => set_visible_at(&mut self.interests, index, visible, |i, v| {
                i.visible = v;
            }),
            SectionKey::References => set_visible_at(&mut self.references, index, visible, |i, v| {
                i.visible = v;
            }),
        }
    }
}

fn count_visible<T>(items: &[T], visible: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| visible(item)).count()
}

fn replace_at<T>(items: &mut [T], index: usize, value: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn set_visible_at<T>(
    items: &mut [T],
    index: usize,
    visible: bool,
    apply: impl FnOnce(&mut T, bool),
) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            apply(item, visible);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_structurally_complete() {
        let doc = ResumeDocument::default();
        for key in SectionKey::ALL {
            assert_eq!(doc.section_len(key), 0);
            assert!(doc.section_visibility.get(key));
        }
        assert_eq!(doc.basics.image_size, DEFAULT_IMAGE_SIZE);
        assert_eq!(doc.basics.location, Location::default());
        assert!(doc.meta.is_none());
    }

    #[test]
    fn serialized_document_always_carries_arrays() {
        let json = serde_json::to_value(ResumeDocument::default()).unwrap();
        for key in SectionKey::ALL {
            assert!(
                json.get(key.as_str()).is_some_and(Value::is_array),
                "{key} must serialize as an array"
            );
        }
        assert!(json.get("sectionVisibility").is_some());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn push_replace_remove_round_trip() {
        let mut doc = ResumeDocument::default();
        doc.push_item(SectionItem::Skills(Skill {
            name: "Rust".into(),
            ..Skill::default()
        }));
        assert_eq!(doc.section_len(SectionKey::Skills), 1);

        let replaced = doc.replace_item(
            0,
            SectionItem::Skills(Skill {
                name: "Systems".into(),
                ..Skill::default()
            }),
        );
        assert!(replaced);
        assert_eq!(doc.skills[0].name, "Systems");

        assert!(!doc.replace_item(5, SectionItem::Skills(Skill::default())));

        let removed = doc.remove_item(SectionKey::Skills, 0).unwrap();
        assert_eq!(removed.key(), SectionKey::Skills);
        assert_eq!(doc.section_len(SectionKey::Skills), 0);
        assert!(doc.remove_item(SectionKey::Skills, 0).is_none());
    }

    #[test]
    fn visible_count_filters_hidden_items() {
        let mut doc = ResumeDocument::default();
        doc.push_item(SectionItem::Skills(Skill {
            name: "Rust".into(),
            ..Skill::default()
        }));
        doc.push_item(SectionItem::Skills(Skill {
            name: "Hidden".into(),
            visible: false,
            ..Skill::default()
        }));
        assert_eq!(doc.section_len(SectionKey::Skills), 2);
        assert_eq!(doc.visible_item_count(SectionKey::Skills), 1);
    }

    #[test]
    fn hide_keeps_item_data() {
        let mut doc = ResumeDocument::default();
        doc.push_item(SectionItem::Work(WorkExperience {
            name: "Acme".into(),
            ..WorkExperience::default()
        }));
        assert!(doc.set_item_visible(SectionKey::Work, 0, false));
        assert!(!doc.work[0].visible);
        assert_eq!(doc.work[0].name, "Acme");
        assert!(!doc.set_item_visible(SectionKey::Work, 3, false));
    }
}
