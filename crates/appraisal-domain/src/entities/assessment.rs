//! Assessment entity tracking feedback submissions for one category

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{Category, Rating, User};

use super::Feedback;

/// One weighted category's evaluation within a review.
///
/// Category and weighting are fixed at creation; only
/// [`Review::add_assessment`] constructs an assessment, and the feedback map
/// is mutated exclusively through [`provide_feedback`].
///
/// [`Review::add_assessment`]: crate::entities::Review::add_assessment
/// [`provide_feedback`]: Assessment::provide_feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    category: Category,
    weighting: u32,
    feedback: HashMap<User, Feedback>,
}

impl Assessment {
    pub(crate) fn new(category: Category, weighting: u32) -> Self {
        Self {
            category,
            weighting,
            feedback: HashMap::new(),
        }
    }

    /// Record feedback from an assessor, replacing any prior submission.
    ///
    /// At most one feedback entry exists per assessor; resubmitting
    /// overwrites the earlier entry with no history retained. No
    /// authorization check is performed here.
    pub fn provide_feedback(&mut self, user: User, comments: impl Into<String>, rating: Rating) {
        let feedback = Feedback::new(user.clone(), comments.into(), rating);
        self.feedback.insert(user, feedback);
    }

    /// Get the category this assessment evaluates
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Get the weighting
    pub fn weighting(&self) -> u32 {
        self.weighting
    }

    /// Get the feedback submitted so far, keyed by assessor
    pub fn feedback(&self) -> &HashMap<User, Feedback> {
        &self.feedback
    }
}
