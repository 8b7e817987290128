//! Legis Core - Domain types, search payloads, result extraction, configuration.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod search;

pub use config::{Credentials, Endpoints, HttpConfig};
pub use error::AppError;
pub use extract::extract_results;
pub use models::{AccessToken, Excerpt, ExtractedItem};
pub use search::{Corpus, FieldType, Filter, MatchMode, SearchPayload, SearchRequest, SortOrder};
