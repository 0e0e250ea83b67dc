//! Mapping raw OpenLibrary records to the output shapes
//!
//! Everything here is pure and total: a missing optional field becomes an
//! absent field, never an error. The only records dropped are those with no
//! `key`, since every returned record must carry a slug.

use crate::types::{cover_image_url, Author, Book, BookDetails, UNKNOWN_AUTHOR};
use crate::upstream::{RawAuthorDoc, RawAuthorRecord, RawBookDoc, RawWork, TextValue};

/// Normalize a `/search.json` doc. `None` when the doc has no key.
pub fn normalize_book_doc(raw: RawBookDoc) -> Option<Book> {
    let slug = non_empty(raw.key)?;

    let authors = match raw.author_name {
        Some(names) if !names.is_empty() => names.join(", "),
        _ => UNKNOWN_AUTHOR.to_string(),
    };

    let mut book = Book::new(slug, raw.title.unwrap_or_default(), authors);
    if let Some(cover_id) = raw.cover_i {
        book = book.with_cover(cover_id);
    }
    book.first_publish_year = raw.first_publish_year;
    book.subjects = raw.subject;
    book.description = raw.description.map(TextValue::into_text);

    Some(book)
}

/// Normalize a `/search/authors.json` doc. `None` when the doc has no key.
pub fn normalize_author_doc(raw: RawAuthorDoc) -> Option<Author> {
    let slug = non_empty(raw.key)?;

    let mut author = Author::new(slug, raw.name.unwrap_or_default());
    author.birth_date = raw.birth_date;
    author.death_date = raw.death_date;
    author.bio = raw.bio.map(TextValue::into_text);
    author.top_work = raw.top_work;
    author.top_subjects = raw.top_subjects;

    Some(author)
}

/// Normalize an `/authors/{id}.json` record.
///
/// `slug` is the key the record was requested under, used when the record
/// itself carries none.
pub fn normalize_author_record(raw: RawAuthorRecord, slug: &str) -> Author {
    let name = raw
        .name
        .or(raw.personal_name)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let mut author = Author::new(non_empty(raw.key).unwrap_or_else(|| slug.to_string()), name);
    author.birth_date = raw.birth_date;
    author.death_date = raw.death_date;
    author.bio = raw.bio.map(TextValue::into_text);
    author
}

/// Normalize a `/works/{id}.json` record with its already-resolved authors
pub fn normalize_work(raw: RawWork, slug: &str, authors: Vec<Author>) -> BookDetails {
    let cover_id = raw
        .covers
        .as_ref()
        .and_then(|covers| covers.iter().copied().find(|id| *id > 0));

    BookDetails {
        slug: non_empty(raw.key).unwrap_or_else(|| slug.to_string()),
        title: raw.title.unwrap_or_default(),
        authors,
        description: raw.description.map(TextValue::into_text),
        subjects: raw.subjects,
        subject_places: raw.subject_places,
        subject_people: raw.subject_people,
        subject_times: raw.subject_times,
        first_publish_date: raw.first_publish_date,
        covers: raw.covers,
        cover_id,
        image_url: cover_id.and_then(cover_image_url),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;
    use serde_json::json;

    fn book_doc(value: serde_json::Value) -> RawBookDoc {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_book_doc_full() {
        let book = normalize_book_doc(book_doc(json!({
            "key": "/works/OL82563W",
            "title": "Harry Potter and the Philosopher's Stone",
            "author_name": ["J. K. Rowling", "Mary GrandPré"],
            "cover_i": 10521270,
            "first_publish_year": 1997,
            "subject": ["Magic", "Wizards", "Schools"]
        })))
        .unwrap();

        assert_eq!(book.kind, Kind::Book);
        assert_eq!(book.slug, "/works/OL82563W");
        assert_eq!(book.authors, "J. K. Rowling, Mary GrandPré");
        assert_eq!(book.cover_id, Some(10521270));
        assert_eq!(
            book.image_url.as_deref(),
            Some("https://covers.openlibrary.org/b/id/10521270-L.jpg")
        );
        assert_eq!(book.first_publish_year, Some(1997));
        // Subjects pass through untruncated
        assert_eq!(book.subjects.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_book_doc_missing_authors() {
        let book = normalize_book_doc(book_doc(json!({ "key": "/works/OL1W" }))).unwrap();
        assert_eq!(book.authors, "Unknown Author");
        assert_eq!(book.title, "");
        assert!(book.image_url.is_none());

        let book =
            normalize_book_doc(book_doc(json!({ "key": "/works/OL1W", "author_name": [] })))
                .unwrap();
        assert_eq!(book.authors, "Unknown Author");
    }

    #[test]
    fn test_book_doc_without_key_is_dropped() {
        assert!(normalize_book_doc(book_doc(json!({ "title": "Orphan" }))).is_none());
        assert!(normalize_book_doc(book_doc(json!({ "key": "  " }))).is_none());
    }

    #[test]
    fn test_description_forms_match() {
        let plain = normalize_book_doc(book_doc(json!({
            "key": "/works/OL1W",
            "description": "A desert planet."
        })))
        .unwrap();
        let wrapped = normalize_book_doc(book_doc(json!({
            "key": "/works/OL1W",
            "description": { "type": "/type/text", "value": "A desert planet." }
        })))
        .unwrap();

        assert_eq!(plain.description, wrapped.description);
        assert_eq!(plain.description.as_deref(), Some("A desert planet."));
    }

    #[test]
    fn test_author_doc() {
        let raw: RawAuthorDoc = serde_json::from_value(json!({
            "key": "OL23919A",
            "name": "J. K. Rowling",
            "birth_date": "31 July 1965",
            "top_work": "Harry Potter and the Philosopher's Stone",
            "top_subjects": ["Fiction", "Magic"]
        }))
        .unwrap();
        let author = normalize_author_doc(raw).unwrap();

        assert_eq!(author.kind, Kind::Author);
        assert_eq!(author.slug, "OL23919A");
        assert_eq!(author.birth_date.as_deref(), Some("31 July 1965"));
        assert!(author.death_date.is_none());
        assert_eq!(author.top_subjects.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_author_record_uses_requested_slug() {
        let raw: RawAuthorRecord = serde_json::from_value(json!({
            "personal_name": "Tove Jansson",
            "bio": { "type": "/type/text", "value": "Finnish author." }
        }))
        .unwrap();
        let author = normalize_author_record(raw, "/authors/OL9A");

        assert_eq!(author.slug, "/authors/OL9A");
        assert_eq!(author.name, "Tove Jansson");
        assert_eq!(author.bio.as_deref(), Some("Finnish author."));
    }

    #[test]
    fn test_work_picks_first_real_cover() {
        let raw: RawWork = serde_json::from_value(json!({
            "key": "/works/OL1W",
            "title": "Dune",
            "covers": [-1, 11481354, 222],
            "first_publish_date": "1965"
        }))
        .unwrap();
        let details = normalize_work(raw, "OL1W", Vec::new());

        assert_eq!(details.slug, "/works/OL1W");
        assert_eq!(details.cover_id, Some(11481354));
        assert_eq!(
            details.image_url.as_deref(),
            Some("https://covers.openlibrary.org/b/id/11481354-L.jpg")
        );
        assert_eq!(details.first_publish_date.as_deref(), Some("1965"));
    }
}
