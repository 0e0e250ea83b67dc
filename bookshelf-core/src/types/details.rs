//! Expanded book record for the details view

use super::Author;
use serde::{Deserialize, Serialize};

/// A work with its authors resolved to full records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDetails {
    /// Upstream work key, e.g. `/works/OL45804W`
    pub slug: String,

    pub title: String,

    /// Resolved authors, in the order the work lists them
    pub authors: Vec<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_places: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_people: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_times: Option<Vec<String>>,

    /// Free-form date string as published upstream ("1997", "June 26, 1997")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_date: Option<String>,

    /// All cover ids attached to the work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covers: Option<Vec<i64>>,

    /// First usable cover id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl BookDetails {
    /// The author shown first on a details page
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }
}
