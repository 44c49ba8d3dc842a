/// Structured error types for listkeeper-core.
///
/// Every variant is recoverable by the caller. The `Display` text is written
/// for end users, so the request layer can attach it to a rendered view as-is.
use std::fmt;

use thiserror::Error;

use crate::validation::{MAX_NAME_LEN, MIN_NAME_LEN};

/// Which kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    List,
    Todo,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Todo => f.write_str("todo"),
        }
    }
}

/// Main error type for list and todo operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A sibling with the same name already exists
    #[error("The {entity} name must be unique.")]
    DuplicateName { entity: Entity },

    /// Trimmed name is shorter than `min` or longer than `max` characters
    #[error("The {entity} name must be between {min} and {max} characters.")]
    InvalidLength {
        entity: Entity,
        min: usize,
        max: usize,
    },

    /// No record with this id
    #[error("The specified {entity} was not found.")]
    NotFound { entity: Entity, id: u64 },
}

/// Result type alias for listkeeper-core operations
pub type Result<T> = std::result::Result<T, ListError>;

impl ListError {
    pub fn duplicate_name(entity: Entity) -> Self {
        Self::DuplicateName { entity }
    }

    pub fn invalid_length(entity: Entity) -> Self {
        Self::InvalidLength {
            entity,
            min: MIN_NAME_LEN,
            max: MAX_NAME_LEN,
        }
    }

    pub fn not_found(entity: Entity, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// True for the errors caused by bad user input (as opposed to a stale id)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::DuplicateName { .. } | Self::InvalidLength { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ListError::duplicate_name(Entity::List).to_string(),
            "The list name must be unique."
        );
        assert_eq!(
            ListError::invalid_length(Entity::Todo).to_string(),
            "The todo name must be between 1 and 100 characters."
        );
        assert_eq!(
            ListError::not_found(Entity::List, 7).to_string(),
            "The specified list was not found."
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ListError::duplicate_name(Entity::Todo).is_validation());
        assert!(ListError::invalid_length(Entity::List).is_validation());
        assert!(!ListError::not_found(Entity::Todo, 1).is_validation());
    }
}
