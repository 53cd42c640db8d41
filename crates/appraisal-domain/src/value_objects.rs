//! Value objects representing immutable domain concepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// A participant in a review: reviewer, reviewee, or feedback assessor.
///
/// Equality and hashing are structural over all three fields, so two
/// independently constructed values for the same person are interchangeable
/// as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create a new user
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}

/// Named, described classification used to structure assessments.
///
/// Keys a review's assessment map; equality is structural over name and
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Qualitative rating level assigned by an assessor, ordered from lowest to
/// highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Unsatisfactory,
    Expected,
    RoleModel,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Unsatisfactory => write!(f, "Unsatisfactory"),
            Rating::Expected => write!(f, "Expected"),
            Rating::RoleModel => write!(f, "Role Model"),
        }
    }
}
