//! Bookshelf Core Library
//!
//! This crate talks to the OpenLibrary API and reshapes its heterogeneous
//! responses into the normalized Book and Author records served by the
//! Bookshelf server and rendered by the CLI.

pub mod config;
pub mod details;
pub mod error;
pub mod normalize;
pub mod search;
pub mod types;
pub mod upstream;

pub use config::ClientConfig;
pub use details::{author_details, book_details, new_books};
pub use error::{BookshelfError, Result, UpstreamError};
pub use search::{search, Page, SearchFilter};
pub use types::{Author, Book, BookDetails, Kind, SearchHit};
pub use upstream::{HttpOpenLibrary, MemoryOpenLibrary, OpenLibrary};
