pub mod document;
pub mod entry;
pub mod sections;
pub mod summary;
pub mod visibility;

pub use document::{Basics, DEFAULT_IMAGE_SIZE, Location, Profile, ResumeDocument};
pub use entry::{ListEntry, NamedEntry};
pub use sections::{
    Award, Certificate, Education, Interest, Language, Project, Publication, Reference,
    SectionItem, SectionKey, Skill, VolunteerExperience, WorkExperience,
};
pub use summary::NamedSummary;
pub use visibility::SectionVisibility;
