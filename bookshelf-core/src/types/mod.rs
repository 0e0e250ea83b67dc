//! Normalized output shapes shared by the server and the CLI

mod author;
mod book;
mod details;

pub use author::Author;
pub use book::{cover_image_url, Book, COVERS_URL, UNKNOWN_AUTHOR};
pub use details::BookDetails;

use serde::{Deserialize, Serialize};

/// Discriminator carried by every search result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Book,
    Author,
}

/// One element of a search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchHit {
    Book(Book),
    Author(Author),
}

impl SearchHit {
    pub fn kind(&self) -> Kind {
        match self {
            SearchHit::Book(_) => Kind::Book,
            SearchHit::Author(_) => Kind::Author,
        }
    }

    /// Upstream key of the underlying record
    pub fn slug(&self) -> &str {
        match self {
            SearchHit::Book(book) => &book.slug,
            SearchHit::Author(author) => &author.slug,
        }
    }
}

impl From<Book> for SearchHit {
    fn from(book: Book) -> Self {
        SearchHit::Book(book)
    }
}

impl From<Author> for SearchHit {
    fn from(author: Author) -> Self {
        SearchHit::Author(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_serializes_flat() {
        let hit = SearchHit::from(Author::new("/authors/OL1A", "Tove Jansson"));
        let json = serde_json::to_value(&hit).unwrap();

        assert_eq!(json["kind"], "author");
        assert_eq!(json["name"], "Tove Jansson");
        assert_eq!(hit.kind(), Kind::Author);
        assert_eq!(hit.slug(), "/authors/OL1A");
    }

    #[test]
    fn test_hit_deserializes_by_shape() {
        let json = serde_json::json!({
            "kind": "book",
            "slug": "/works/OL1W",
            "title": "Moomin",
            "authors": "Tove Jansson"
        });
        let hit: SearchHit = serde_json::from_value(json).unwrap();
        assert_eq!(hit.kind(), Kind::Book);
    }
}
