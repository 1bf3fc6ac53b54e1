//! Edit actions and the pure transition function.
//!
//! UI handlers describe changes as [`EditAction`] values; the transition
//! function builds the next document from the current one without mutating
//! it. The session commits the result, so every edit is an atomic
//! whole-document replacement.

use resume_model::{Basics, Location, ResumeDocument, SectionItem, SectionKey};

use crate::error::EditError;

/// Partial-field patch for the contact header scalars. `None` leaves a
/// field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicsPatch {
    pub name: Option<String>,
    pub label: Option<String>,
    pub image: Option<String>,
    pub image_size: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

impl BasicsPatch {
    fn apply(&self, basics: &mut Basics) {
        if let Some(name) = &self.name {
            basics.name = name.clone();
        }
        if let Some(label) = &self.label {
            basics.label = label.clone();
        }
        if let Some(image) = &self.image {
            basics.image = image.clone();
        }
        if let Some(image_size) = self.image_size {
            basics.image_size = image_size;
        }
        if let Some(email) = &self.email {
            basics.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            basics.phone = phone.clone();
        }
        if let Some(url) = &self.url {
            basics.url = url.clone();
        }
        if let Some(summary) = &self.summary {
            basics.summary = summary.clone();
        }
    }
}

/// Partial-field patch for the location block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
}

impl LocationPatch {
    fn apply(&self, location: &mut Location) {
        if let Some(address) = &self.address {
            location.address = address.clone();
        }
        if let Some(city) = &self.city {
            location.city = city.clone();
        }
        if let Some(region) = &self.region {
            location.region = region.clone();
        }
        if let Some(postal_code) = &self.postal_code {
            location.postal_code = postal_code.clone();
        }
        if let Some(country_code) = &self.country_code {
            location.country_code = country_code.clone();
        }
    }
}

/// One discrete document mutation.
///
/// Hiding an item (`SetItemVisibility`) and removing it (`RemoveItem`) are
/// deliberately separate actions; neither is ever inferred from the other.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    UpdateBasics(BasicsPatch),
    UpdateLocation(LocationPatch),
    AddItem(SectionItem),
    UpdateItem {
        section: SectionKey,
        index: usize,
        item: SectionItem,
    },
    RemoveItem {
        section: SectionKey,
        index: usize,
    },
    SetItemVisibility {
        section: SectionKey,
        index: usize,
        visible: bool,
    },
    SetSectionVisibility {
        section: SectionKey,
        visible: bool,
    },
    ReplaceDocument(ResumeDocument),
    Reset,
}

/// Build the next document from the current one. Pure: the input document
/// is never mutated, and a rejected action produces no document at all.
pub fn apply_action(
    document: &ResumeDocument,
    action: &EditAction,
) -> Result<ResumeDocument, EditError> {
    let mut next = document.clone();
    match action {
        EditAction::UpdateBasics(patch) => patch.apply(&mut next.basics),
        EditAction::UpdateLocation(patch) => patch.apply(&mut next.basics.location),
        EditAction::AddItem(item) => next.push_item(item.clone()),
        EditAction::UpdateItem {
            section,
            index,
            item,
        } => {
            if item.key() != *section {
                return Err(EditError::SectionMismatch {
                    expected: *section,
                    found: item.key(),
                });
            }
            if !next.replace_item(*index, item.clone()) {
                return Err(EditError::IndexOutOfRange {
                    section: *section,
                    index: *index,
                    len: document.section_len(*section),
                });
            }
        }
        EditAction::RemoveItem { section, index } => {
            if next.remove_item(*section, *index).is_none() {
                return Err(EditError::IndexOutOfRange {
                    section: *section,
                    index: *index,
                    len: document.section_len(*section),
                });
            }
        }
        EditAction::SetItemVisibility {
            section,
            index,
            visible,
        } => {
            if !next.set_item_visible(*section, *index, *visible) {
                return Err(EditError::IndexOutOfRange {
                    section: *section,
                    index: *index,
                    len: document.section_len(*section),
                });
            }
        }
        EditAction::SetSectionVisibility { section, visible } => {
            next.section_visibility.set(*section, *visible);
        }
        EditAction::ReplaceDocument(replacement) => next = replacement.clone(),
        EditAction::Reset => next = ResumeDocument::default(),
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_model::Skill;

    #[test]
    fn patches_merge_only_given_fields() {
        let mut document = ResumeDocument::default();
        document.basics.name = "Ada".into();
        document.basics.email = "ada@example.org".into();

        let next = apply_action(
            &document,
            &EditAction::UpdateBasics(BasicsPatch {
                label: Some("Analyst".into()),
                ..BasicsPatch::default()
            }),
        )
        .unwrap();

        assert_eq!(next.basics.name, "Ada");
        assert_eq!(next.basics.email, "ada@example.org");
        assert_eq!(next.basics.label, "Analyst");
        // The input document was not touched.
        assert_eq!(document.basics.label, "");
    }

    #[test]
    fn update_rejects_section_mismatch() {
        let mut document = ResumeDocument::default();
        document.skills.push(Skill::default());
        let error = apply_action(
            &document,
            &EditAction::UpdateItem {
                section: SectionKey::Work,
                index: 0,
                item: SectionItem::Skills(Skill::default()),
            },
        )
        .unwrap_err();
        assert_eq!(error, EditError::SectionMismatch {
            expected: SectionKey::Work,
            found: SectionKey::Skills,
        });
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let document = ResumeDocument::default();
        let error = apply_action(&document, &EditAction::RemoveItem {
            section: SectionKey::Skills,
            index: 0,
        })
        .unwrap_err();
        assert_eq!(error, EditError::IndexOutOfRange {
            section: SectionKey::Skills,
            index: 0,
            len: 0,
        });
    }

    #[test]
    fn hide_and_remove_are_distinct() {
        let mut document = ResumeDocument::default();
        document.skills.push(Skill {
            name: "Rust".into(),
            ..Skill::default()
        });

        let hidden = apply_action(&document, &EditAction::SetItemVisibility {
            section: SectionKey::Skills,
            index: 0,
            visible: false,
        })
        .unwrap();
        assert_eq!(hidden.skills.len(), 1);
        assert!(!hidden.skills[0].visible);

        let removed = apply_action(&document, &EditAction::RemoveItem {
            section: SectionKey::Skills,
            index: 0,
        })
        .unwrap();
        assert!(removed.skills.is_empty());
    }

    #[test]
    fn reset_yields_the_default_document() {
        let mut document = ResumeDocument::default();
        document.basics.name = "Ada".into();
        let next = apply_action(&document, &EditAction::Reset).unwrap();
        assert_eq!(next, ResumeDocument::default());
    }
}
