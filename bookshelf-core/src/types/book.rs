//! The normalized Book shape returned by searches

use super::Kind;
use serde::{Deserialize, Serialize};

/// Base URL of the OpenLibrary cover CDN
pub const COVERS_URL: &str = "https://covers.openlibrary.org";

/// Display string used when a record lists no authors
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Derive the large cover image URL for a cover id.
///
/// OpenLibrary uses non-positive ids (usually `-1`) as "no cover" markers,
/// so those yield `None` just like a missing id.
pub fn cover_image_url(cover_id: i64) -> Option<String> {
    (cover_id > 0).then(|| format!("{}/b/id/{}-L.jpg", COVERS_URL, cover_id))
}

/// A book as it appears in search results and the new-books feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Always `Kind::Book`
    pub kind: Kind,

    /// Upstream work key, e.g. `/works/OL45804W`
    pub slug: String,

    /// Book title (empty when upstream has none)
    pub title: String,

    /// Comma-joined author names
    pub authors: String,

    /// OpenLibrary cover id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    /// Subjects in upstream order, untruncated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Large cover URL derived from `cover_id`
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Book {
    /// Create a book with the required fields
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        authors: impl Into<String>,
    ) -> Self {
        Self {
            kind: Kind::Book,
            slug: slug.into(),
            title: title.into(),
            authors: authors.into(),
            cover_id: None,
            first_publish_year: None,
            subjects: None,
            description: None,
            image_url: None,
        }
    }

    /// Set the cover id and derive the image URL from it
    pub fn with_cover(mut self, cover_id: i64) -> Self {
        self.cover_id = Some(cover_id);
        self.image_url = cover_image_url(cover_id);
        self
    }

    /// Up to `n` leading subjects, for compact displays
    pub fn top_subjects(&self, n: usize) -> &[String] {
        match &self.subjects {
            Some(subjects) => &subjects[..subjects.len().min(n)],
            None => &[],
        }
    }
}
