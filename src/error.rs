use thiserror::Error;

/// Errors that can occur when defining or using containers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The container name passed to `define` was empty
    #[error("empty container name")]
    EmptyName,
    /// A declared field name was empty
    #[error("invalid field specification: field names must be non-empty")]
    InvalidFieldSpec,
    /// A strict constructor was given a field name that was never declared
    #[error("unknown attribute '{name}' for container '{container}'")]
    UnknownAttribute { container: String, name: String },
    /// Attempted to read a field that doesn't exist on the instance
    #[error("container '{container}' has no attribute '{name}'")]
    NoSuchAttribute { container: String, name: String },
    /// Attempted to write a declared field after construction
    #[error("property '{name}' is immutable")]
    ImmutableProperty { name: String },
    /// Attempted to read a field with a type that doesn't match what was stored
    #[error("type mismatch reading attribute '{name}' (stored {stored})")]
    TypeMismatch { name: String, stored: &'static str },
    /// The extra-field lock was poisoned by a panicking writer
    #[error("extra-field lock poisoned")]
    LockPoisoned,
}

/// The broad category a [`ContainerError`] falls into.
///
/// Useful when callers want to branch on the class of failure rather than
/// the specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A structural violation in factory arguments
    Type,
    /// A well-typed but semantically invalid argument
    Value,
    /// An access or mutation violation on an instance
    Attribute,
}

impl ContainerError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFieldSpec => ErrorKind::Type,
            Self::EmptyName | Self::UnknownAttribute { .. } => ErrorKind::Value,
            Self::NoSuchAttribute { .. }
            | Self::ImmutableProperty { .. }
            | Self::TypeMismatch { .. }
            | Self::LockPoisoned => ErrorKind::Attribute,
        }
    }
}
