//! Review aggregate root owning assessments and the completion lifecycle

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Category, User};

use super::Assessment;

/// Aggregate representing one evaluation cycle between a reviewee and a
/// reviewer.
///
/// A review is open until the designated reviewer marks it completed;
/// completion is terminal. Each category appears at most once in the
/// assessment map, and the map is mutated only through
/// [`add_assessment`](Review::add_assessment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    name: String,
    reviewee: User,
    reviewer: User,
    assessments: HashMap<Category, Assessment>,
}

impl Review {
    /// Create a new open review.
    ///
    /// No argument validation is performed; in particular a review where
    /// reviewee and reviewer are the same user is accepted.
    pub fn new(
        created_at: DateTime<Utc>,
        name: impl Into<String>,
        reviewee: User,
        reviewer: User,
    ) -> Self {
        Self {
            created_at,
            completed_at: None,
            name: name.into(),
            reviewee,
            reviewer,
            assessments: HashMap::new(),
        }
    }

    /// Reconstruct a review from existing data (for repository use).
    ///
    /// Passing a `completed_at` timestamp rebuilds an already-completed
    /// review; further completion attempts fail as they would on any
    /// completed review.
    pub fn reconstruct(
        created_at: DateTime<Utc>,
        name: impl Into<String>,
        reviewee: User,
        reviewer: User,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            completed_at,
            name: name.into(),
            reviewee,
            reviewer,
            assessments: HashMap::new(),
        }
    }

    /// Add an assessment for a category with the given weighting.
    ///
    /// Fails with [`DomainError::DuplicateAssessmentCategory`] when the
    /// category is already assessed; the assessment map is left unchanged.
    pub fn add_assessment(&mut self, category: Category, weighting: u32) -> DomainResult<()> {
        if self.assessments.contains_key(&category) {
            return Err(DomainError::DuplicateAssessmentCategory { category });
        }
        let assessment = Assessment::new(category.clone(), weighting);
        self.assessments.insert(category, assessment);
        Ok(())
    }

    /// Mark the review as completed on behalf of `user`.
    ///
    /// Fails with [`DomainError::ReviewAlreadyCompleted`] when the review is
    /// already completed; this check takes priority over the caller check.
    /// Fails with [`DomainError::ReviewerExpected`] when `user` is not the
    /// designated reviewer. On success the completion timestamp is set to
    /// the current time.
    pub fn mark_as_completed(&mut self, user: &User) -> DomainResult<()> {
        if self.completed_at.is_some() {
            return Err(DomainError::ReviewAlreadyCompleted);
        }
        if *user != self.reviewer {
            return Err(DomainError::ReviewerExpected);
        }
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Replace the review name, in any state
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the completion timestamp, if completed
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Check whether the review has been completed
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Get the review name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the user being evaluated
    pub fn reviewee(&self) -> &User {
        &self.reviewee
    }

    /// Get the user authorized to complete the review
    pub fn reviewer(&self) -> &User {
        &self.reviewer
    }

    /// Get the assessments, keyed by category
    pub fn assessments(&self) -> &HashMap<Category, Assessment> {
        &self.assessments
    }

    /// Look up the assessment for a category
    pub fn assessment(&self, category: &Category) -> Option<&Assessment> {
        self.assessments.get(category)
    }

    /// Look up the assessment for a category, for providing feedback
    pub fn assessment_mut(&mut self, category: &Category) -> Option<&mut Assessment> {
        self.assessments.get_mut(category)
    }
}
