//! Core domain entities with business logic
//!
//! This module contains the domain entities organized by responsibility:
//! - `feedback`: one assessor's comments and rating
//! - `assessment`: one weighted category's evaluation within a review
//! - `review`: the aggregate root owning assessments and the completion
//!   lifecycle

mod assessment;
mod feedback;
mod review;

pub use assessment::Assessment;
pub use feedback::Feedback;
pub use review::Review;
