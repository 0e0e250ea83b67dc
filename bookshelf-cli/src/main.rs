//! Bookshelf CLI - search OpenLibrary from the terminal

mod commands;

use anyhow::Result;
use bookshelf_core::{ClientConfig, HttpOpenLibrary, SearchFilter};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse the search filter argument (books or authors)
fn parse_filter(s: &str) -> Result<SearchFilter, String> {
    s.parse()
        .map_err(|_| format!("'{}' is not a valid filter (use books or authors)", s))
}

/// Parse a count argument that must be at least 1
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// OpenLibrary API root (overrides BOOKSHELF_OPENLIBRARY_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search OpenLibrary for books or authors
    Search {
        /// Free-text query
        query: String,

        /// Result type (books, authors)
        #[arg(short, long, value_parser = parse_filter)]
        filter: SearchFilter,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of results to skip
        #[arg(short, long)]
        offset: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a book with its authors
    Book {
        /// Work key (OL45804W or /works/OL45804W)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an author
    Author {
        /// Author key (OL23919A or /authors/OL23919A)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recently published books
    New {
        /// Number of books (must be at least 1)
        #[arg(short, long, default_value = "10", value_parser = parse_positive)]
        limit: usize,

        /// OpenLibrary query selecting the books (default: this year's releases)
        #[arg(short, long)]
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let upstream = HttpOpenLibrary::new(&config)?;

    match cli.command {
        Commands::Search {
            query,
            filter,
            limit,
            offset,
            json,
        } => commands::search(&upstream, &query, filter, limit, offset, json).await,

        Commands::Book { key, json } => {
            commands::book(&upstream, &key, config.author_concurrency, json).await
        }

        Commands::Author { key, json } => commands::author(&upstream, &key, json).await,

        Commands::New { limit, query, json } => {
            commands::new_books(&upstream, query.as_deref(), limit, json).await
        }
    }
}
