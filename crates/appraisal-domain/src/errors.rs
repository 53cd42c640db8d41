//! Domain errors for Appraisal

use thiserror::Error;

use crate::value_objects::Category;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("cannot add a duplicate assessment category: {category}")]
    DuplicateAssessmentCategory { category: Category },

    #[error("review has already been completed")]
    ReviewAlreadyCompleted,

    #[error("only the designated reviewer can mark a review as completed")]
    ReviewerExpected,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
