//! confdl-fetch: dataset retrieval (HTTP or local checkout), YAML decoding and
//! concurrent collection of tracked conferences.

pub mod collect;
pub mod document;
pub mod error;
pub mod source;

pub use collect::ConferenceFetcher;
pub use document::parse_document;
pub use error::{FetchError, Result};
pub use source::{DEFAULT_BASE_URL, DEFAULT_EXTENSION, DirSource, DocumentSource, HttpSource};
