//! In-memory word search over text files.
//!
//! The engine builds a term -> file -> count table by scanning files line by
//! line, answers exact, comma-separated multi-term, and `*`-wildcard queries
//! against it with deterministic ranking, and suggests nearby dictionary
//! words for misspelled terms via Levenshtein distance.
//!
//! The index lives only for the lifetime of the process; there is no
//! persistence and no relevance scoring beyond raw occurrence counts.

pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod suggest;
pub mod tokenizer;

pub use engine::SearchEngine;
pub use error::EngineError;
pub use index::{InvertedIndex, PostingList, ScanFailure, ScanReport};
pub use query::{QueryResult, SearchHit};
pub use suggest::SpellSuggester;
