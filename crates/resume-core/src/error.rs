use thiserror::Error;

use resume_model::SectionKey;

/// A rejected edit. The current document is untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{section}[{index}] is out of range (section has {len} items)")]
    IndexOutOfRange {
        section: SectionKey,
        index: usize,
        len: usize,
    },

    #[error("item belongs to section {found}, not {expected}")]
    SectionMismatch {
        expected: SectionKey,
        found: SectionKey,
    },
}
