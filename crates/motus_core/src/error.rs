//! Attribute binding error types

use thiserror::Error;

/// Reasons an attribute path fails to resolve against a target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The path (or one of its segments) is empty
    #[error("Attribute path `{0}` has an empty segment")]
    EmptySegment(String),

    /// No group or leaf with this name exists
    #[error("Unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// An intermediate segment names something that is not an attribute group
    #[error("Attribute `{0}` is not a group")]
    NotAGroup(String),

    /// The final segment names a group instead of a value slot
    #[error("Attribute `{0}` is a group, not a value")]
    NotALeaf(String),

    /// The group exists in the registry but the target has no such sub-object yet
    #[error("Attribute group `{0}` is not available on this target")]
    GroupUnavailable(String),

    /// The slot cannot be both read and written
    #[error("Attribute `{0}` is not readable and writable")]
    NotReadWrite(String),
}

/// Result type for attribute resolution
pub type Result<T> = std::result::Result<T, BindError>;
