//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title exceeds the storage limit.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count supplied.
        actual: usize,
    },

    /// The description exceeds the storage limit.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count supplied.
        actual: usize,
    },

    /// The task identifier is not a positive integer.
    #[error("invalid task id '{0}', expected a positive integer")]
    InvalidTaskId(String),
}
