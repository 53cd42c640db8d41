//! Feedback entity holding one assessor's comments and rating

use serde::{Deserialize, Serialize};

use crate::value_objects::{Rating, User};

/// One assessor's comments and rating for an assessment.
///
/// Immutable once constructed. Only [`Assessment::provide_feedback`] builds
/// one; a later submission from the same assessor replaces it wholesale.
///
/// [`Assessment::provide_feedback`]: crate::entities::Assessment::provide_feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    assessor: User,
    comments: String,
    rating: Rating,
}

impl Feedback {
    pub(crate) fn new(assessor: User, comments: String, rating: Rating) -> Self {
        Self {
            assessor,
            comments,
            rating,
        }
    }

    /// Get the assessor who submitted this feedback
    pub fn assessor(&self) -> &User {
        &self.assessor
    }

    /// Get the comments
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Get the rating
    pub fn rating(&self) -> Rating {
        self.rating
    }
}
