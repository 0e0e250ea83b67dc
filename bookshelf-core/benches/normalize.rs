//! Normalization benchmarks

use bookshelf_core::normalize::normalize_book_doc;
use bookshelf_core::upstream::{RawBookDoc, SearchResponse};
use bookshelf_core::Page;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

/// A search page the size OpenLibrary returns by default
fn search_page() -> SearchResponse<RawBookDoc> {
    let docs = (0..100)
        .map(|i| {
            json!({
                "key": format!("/works/OL{}W", i),
                "title": format!("Book {}", i),
                "author_name": ["First Author", "Second Author"],
                "cover_i": 1000 + i,
                "first_publish_year": 1900 + i,
                "subject": ["Fiction", "Adventure", "Classics", "Travel"],
                "description": { "type": "/type/text", "value": "Lorem ipsum dolor sit amet." }
            })
        })
        .collect::<Vec<_>>();
    serde_json::from_value(json!({ "numFound": 100, "docs": docs })).unwrap()
}

fn normalize_benchmark(c: &mut Criterion) {
    let page = search_page();

    c.bench_function("normalize_100_book_docs", |b| {
        b.iter(|| {
            let books: Vec<_> = page
                .docs
                .iter()
                .cloned()
                .filter_map(normalize_book_doc)
                .collect();
            std::hint::black_box(Page::new(Some(10), Some(20)).slice(books))
        })
    });

    let body = serde_json::to_vec(&page).unwrap();
    c.bench_function("decode_search_page", |b| {
        b.iter(|| {
            let decoded: SearchResponse<RawBookDoc> = serde_json::from_slice(&body).unwrap();
            std::hint::black_box(decoded)
        })
    });
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
