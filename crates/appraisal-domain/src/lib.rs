//! Core domain model for Appraisal, a peer-review workflow.
//!
//! A [`Review`] pairs a reviewee with the reviewer authorized to complete
//! it, and owns one weighted [`Assessment`] per [`Category`]. Assessors
//! submit [`Feedback`] with a qualitative [`Rating`]; resubmission replaces
//! the assessor's earlier entry. The aggregate enforces the workflow
//! invariants (category uniqueness, completion authorization, terminal
//! completion) and surfaces violations as [`DomainError`] values.
//!
//! Persistence and presentation live outside this crate: collaborators
//! construct the entities, drive the public operations, and read state back
//! through the read-only accessors.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export public types
pub use entities::{Assessment, Feedback, Review};
pub use errors::{DomainError, DomainResult};
pub use value_objects::{Category, Rating, User};
