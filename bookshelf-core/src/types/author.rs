//! The normalized Author shape

use super::{Kind, UNKNOWN_AUTHOR};
use serde::{Deserialize, Serialize};

/// An author as returned by author searches and author lookups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    /// Always `Kind::Author`
    pub kind: Kind,

    /// Upstream author key, e.g. `/authors/OL23919A` or `OL23919A`
    pub slug: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Best-known work title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_work: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_subjects: Option<Vec<String>>,
}

impl Author {
    /// Create an author with the required fields
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: Kind::Author,
            slug: slug.into(),
            name: name.into(),
            birth_date: None,
            death_date: None,
            bio: None,
            top_work: None,
            top_subjects: None,
        }
    }

    /// Stand-in for an author reference upstream could not resolve
    pub fn placeholder(slug: impl Into<String>) -> Self {
        Self::new(slug, UNKNOWN_AUTHOR)
    }

    /// "born - died" style lifespan, if either date is known
    pub fn lifespan(&self) -> Option<String> {
        match (&self.birth_date, &self.death_date) {
            (None, None) => None,
            (Some(born), None) => Some(format!("b. {}", born)),
            (None, Some(died)) => Some(format!("d. {}", died)),
            (Some(born), Some(died)) => Some(format!("{} - {}", born, died)),
        }
    }
}
