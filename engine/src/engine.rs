use std::collections::BTreeSet;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::EngineError;
use crate::index::{InvertedIndex, ScanReport};
use crate::query::{self, QueryResult};
use crate::suggest::SpellSuggester;

/// Owned facade over the index, the query modes, and the suggester.
///
/// Indexing holds the write lock for the duration of a file or directory
/// scan; searches hold the read lock, so a reader never observes a
/// half-merged posting list. A search racing a concurrent scan may still mix
/// pre- and post-scan counts across different terms, which is accepted.
pub struct SearchEngine {
    index: RwLock<InvertedIndex>,
    suggester: SpellSuggester,
}

impl SearchEngine {
    /// Engine without a dictionary; `suggest` returns nothing.
    pub fn new() -> Self {
        Self::with_suggester(SpellSuggester::from_words(Vec::<String>::new()))
    }

    /// Engine with spell suggestions backed by the given dictionary.
    pub fn with_suggester(suggester: SpellSuggester) -> Self {
        Self {
            index: RwLock::new(InvertedIndex::new()),
            suggester,
        }
    }

    pub fn index_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        self.index.write().index_file(path)
    }

    pub fn index_directory<P: AsRef<Path>>(&self, root: P) -> Result<ScanReport, EngineError> {
        self.index.write().index_directory(root)
    }

    pub fn search(&self, term: &str) -> QueryResult {
        query::search(&self.index.read(), term)
    }

    pub fn search_multi(&self, csv: &str) -> QueryResult {
        query::search_multi(&self.index.read(), csv)
    }

    pub fn search_wildcard(&self, pattern: &str) -> Result<QueryResult, EngineError> {
        query::search_wildcard(&self.index.read(), pattern)
    }

    pub fn suggest(&self, term: &str) -> BTreeSet<String> {
        self.suggester.suggest(term)
    }

    pub fn suggester(&self) -> &SpellSuggester {
        &self.suggester
    }

    pub fn term_count(&self) -> usize {
        self.index.read().term_count()
    }

    pub fn file_count(&self) -> usize {
        self.index.read().file_count()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
