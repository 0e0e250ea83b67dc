//! Raw OpenLibrary response shapes
//!
//! Every field OpenLibrary may leave out is an `Option`, so a sparse record
//! still deserializes. Unknown fields are ignored.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of `/search.json` and `/search/authors.json`
///
/// A doc whose fields have unexpected types is dropped on its own; only a
/// body that is not a search envelope at all fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct SearchResponse<T> {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,

    #[serde(default = "Vec::new", deserialize_with = "lenient_docs")]
    pub docs: Vec<T>,
}

fn lenient_docs<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    let total = raw.len();

    let docs: Vec<T> = raw
        .into_iter()
        .filter_map(|doc| match serde_json::from_value(doc) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("Dropping undecodable search doc: {}", e);
                None
            }
        })
        .collect();

    if docs.len() < total {
        tracing::debug!("Kept {} of {} search docs", docs.len(), total);
    }
    Ok(docs)
}

impl<T> SearchResponse<T> {
    pub fn new(docs: Vec<T>) -> Self {
        Self {
            num_found: docs.len() as u64,
            docs,
        }
    }
}

/// Text field that is either a bare string or a `{ "type": ..., "value": ... }` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Wrapped { value: String },
}

impl TextValue {
    pub fn as_str(&self) -> &str {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Wrapped { value } => value,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Wrapped { value } => value,
        }
    }
}

/// A doc from `/search.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBookDoc {
    pub key: Option<String>,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub cover_i: Option<i64>,
    pub first_publish_year: Option<i32>,
    pub subject: Option<Vec<String>>,
    pub description: Option<TextValue>,
}

/// A doc from `/search/authors.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAuthorDoc {
    pub key: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub bio: Option<TextValue>,
    pub top_work: Option<String>,
    pub top_subjects: Option<Vec<String>>,
}

/// A record from `/works/{id}.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWork {
    pub key: Option<String>,
    pub title: Option<String>,
    pub authors: Option<Vec<RawWorkAuthor>>,
    pub description: Option<TextValue>,
    pub subjects: Option<Vec<String>>,
    pub subject_places: Option<Vec<String>>,
    pub subject_people: Option<Vec<String>>,
    pub subject_times: Option<Vec<String>>,
    pub first_publish_date: Option<String>,
    pub covers: Option<Vec<i64>>,
}

impl RawWork {
    /// Author keys referenced by the work, in listed order
    pub fn author_keys(&self) -> Vec<String> {
        self.authors
            .iter()
            .flatten()
            .filter_map(|entry| entry.author.as_ref())
            .map(|reference| reference.key().to_string())
            .collect()
    }
}

/// Entry of a work's `authors` list
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWorkAuthor {
    pub author: Option<AuthorRef>,
}

/// Reference to an author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Keyed { key: String },
    Bare(String),
}

impl AuthorRef {
    pub fn key(&self) -> &str {
        match self {
            AuthorRef::Keyed { key } => key,
            AuthorRef::Bare(key) => key,
        }
    }
}

/// A record from `/authors/{id}.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAuthorRecord {
    pub key: Option<String>,
    pub name: Option<String>,
    pub personal_name: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub bio: Option<TextValue>,
}
