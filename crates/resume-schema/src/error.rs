use thiserror::Error;

use resume_normalize::NormalizeError;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The payload failed the structural gate. Carries one message per
    /// offending field; the current document stays untouched.
    #[error("structural validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// The payload root was not an object.
    #[error(transparent)]
    Shape(#[from] NormalizeError),

    /// The payload matched no known external format.
    #[error("payload is not a recognized resume format")]
    Unrecognized,

    /// A backup envelope from an incompatible schema generation.
    #[error("unsupported backup schema version {found} (supported major: {supported})")]
    UnsupportedVersion { found: String, supported: u64 },

    /// A backup envelope missing a required part.
    #[error("backup envelope is malformed: {0}")]
    MalformedEnvelope(&'static str),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
