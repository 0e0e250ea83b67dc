//! Plain-text rendering of books and authors

use bookshelf_core::{Author, Book, BookDetails, SearchHit};

/// Shown where a record has no cover image
pub const NO_COVER: &str = "[no cover]";

/// Subjects shown per book in listings
pub const TOP_SUBJECTS: usize = 3;

/// Multi-line card for a search result
pub fn hit(hit: &SearchHit) -> String {
    match hit {
        SearchHit::Book(book) => book_card(book),
        SearchHit::Author(author) => author_card(author),
    }
}

/// Card used in book listings
pub fn book_card(book: &Book) -> String {
    let mut lines = vec![format!("{} by {}", display_title(&book.title), book.authors)];

    if let Some(year) = book.first_publish_year {
        lines.push(format!("  First published: {}", year));
    }
    let subjects = book.top_subjects(TOP_SUBJECTS);
    if !subjects.is_empty() {
        lines.push(format!("  Subjects:        {}", subjects.join(", ")));
    }
    lines.push(format!(
        "  Cover:           {}",
        book.image_url.as_deref().unwrap_or(NO_COVER)
    ));
    lines.push(format!("  Key:             {}", book.slug));

    lines.join("\n")
}

/// Card used in author listings and for author details
pub fn author_card(author: &Author) -> String {
    let mut lines = vec![author.name.clone()];

    if let Some(lifespan) = author.lifespan() {
        lines.push(format!("  Lived:     {}", lifespan));
    }
    if let Some(work) = &author.top_work {
        lines.push(format!("  Top work:  {}", work));
    }
    if let Some(subjects) = &author.top_subjects {
        if !subjects.is_empty() {
            let shown = &subjects[..subjects.len().min(TOP_SUBJECTS)];
            lines.push(format!("  Subjects:  {}", shown.join(", ")));
        }
    }
    if let Some(bio) = &author.bio {
        lines.push(format!("  Bio:       {}", bio));
    }
    lines.push(format!("  Key:       {}", author.slug));

    lines.join("\n")
}

/// Full details page for a work
pub fn details(details: &BookDetails) -> String {
    let mut lines = vec![display_title(&details.title).to_string()];

    let names: Vec<&str> = details.authors.iter().map(|a| a.name.as_str()).collect();
    if names.is_empty() {
        lines.push("by Unknown Author".to_string());
    } else {
        lines.push(format!("by {}", names.join(", ")));
    }

    if let Some(date) = &details.first_publish_date {
        lines.push(format!("First published: {}", date));
    }
    let category = details
        .subjects
        .as_ref()
        .and_then(|subjects| subjects.first())
        .map(String::as_str)
        .unwrap_or("No category");
    lines.push(format!("Category:        {}", category));
    lines.push(format!(
        "Cover:           {}",
        details.image_url.as_deref().unwrap_or(NO_COVER)
    ));
    lines.push(String::new());
    lines.push(
        details
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string()),
    );

    if let Some(author) = details.primary_author() {
        if let Some(bio) = &author.bio {
            lines.push(String::new());
            lines.push(format!("About {}: {}", author.name, bio));
        }
    }

    lines.join("\n")
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        "(untitled)"
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_card_without_cover() {
        let mut book = Book::new("/works/OL1W", "Dune", "Frank Herbert");
        book.subjects = Some(vec![
            "Science fiction".into(),
            "Deserts".into(),
            "Ecology".into(),
            "Politics".into(),
        ]);

        let card = book_card(&book);
        assert!(card.starts_with("Dune by Frank Herbert"));
        assert!(card.contains("Science fiction, Deserts, Ecology"));
        assert!(!card.contains("Politics"));
        assert!(card.contains(NO_COVER));
    }

    #[test]
    fn test_book_card_with_cover() {
        let book = Book::new("/works/OL1W", "", "Unknown Author").with_cover(5);
        let card = book_card(&book);
        assert!(card.starts_with("(untitled) by Unknown Author"));
        assert!(card.contains("https://covers.openlibrary.org/b/id/5-L.jpg"));
    }

    #[test]
    fn test_author_card() {
        let mut author = Author::new("OL23919A", "J. K. Rowling");
        author.birth_date = Some("31 July 1965".into());
        author.top_work = Some("Harry Potter and the Philosopher's Stone".into());

        let card = hit(&SearchHit::Author(author));
        assert!(card.contains("b. 31 July 1965"));
        assert!(card.contains("Top work:  Harry Potter"));
    }

    #[test]
    fn test_details_fallbacks() {
        let details = BookDetails {
            slug: "/works/OL1W".into(),
            title: "Dune".into(),
            authors: Vec::new(),
            description: None,
            subjects: None,
            subject_places: None,
            subject_people: None,
            subject_times: None,
            first_publish_date: None,
            covers: None,
            cover_id: None,
            image_url: None,
        };

        let page = super::details(&details);
        assert!(page.contains("by Unknown Author"));
        assert!(page.contains("No category"));
        assert!(page.contains("No description"));
        assert!(page.contains(NO_COVER));
    }
}
