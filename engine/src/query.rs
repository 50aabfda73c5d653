use std::collections::{BTreeSet, HashMap};

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::EngineError;
use crate::index::InvertedIndex;

/// One ranked result: a file and the aggregate number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub count: u64,
}

/// Results ordered by count descending, ties broken by ascending path, so
/// repeated runs over identical input produce identical output.
pub type QueryResult = Vec<SearchHit>;

/// Exact single-term search on the lowercased term.
pub fn search(index: &InvertedIndex, term: &str) -> QueryResult {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    let mut merged = HashMap::new();
    accumulate(index, &term, &mut merged);
    rank(merged)
}

/// Comma-separated multi-term search. Terms are trimmed, lowercased, and
/// deduplicated; per-file counts from each distinct term are summed, so a
/// file matching two of three terms scores the sum of those two counts.
pub fn search_multi(index: &InvertedIndex, csv: &str) -> QueryResult {
    let terms: BTreeSet<String> = csv
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    let mut merged = HashMap::new();
    for term in &terms {
        accumulate(index, term, &mut merged);
    }
    rank(merged)
}

/// Wildcard search: `*` matches zero or more characters, every other
/// character matches itself case-insensitively, and the pattern must cover
/// the whole term (`cat*` matches `category` but not `concat`).
///
/// Scans every distinct term in the index and merges matching terms'
/// postings additively, exactly as [`search_multi`] does.
pub fn search_wildcard(index: &InvertedIndex, pattern: &str) -> Result<QueryResult, EngineError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    let matcher = wildcard_matcher(pattern)?;
    let mut merged = HashMap::new();
    for term in index.terms() {
        if matcher.is_match(term) {
            accumulate(index, term, &mut merged);
        }
    }
    Ok(rank(merged))
}

fn accumulate(index: &InvertedIndex, term: &str, merged: &mut HashMap<String, u64>) {
    if let Some(postings) = index.lookup(term) {
        for (path, count) in postings {
            *merged.entry(path.clone()).or_insert(0) += count;
        }
    }
}

fn rank(merged: HashMap<String, u64>) -> QueryResult {
    let mut hits: Vec<SearchHit> = merged
        .into_iter()
        .map(|(path, count)| SearchHit { path, count })
        .collect();
    hits.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path)));
    hits
}

/// Translate a wildcard pattern into an anchored, case-insensitive regex.
/// Everything between the `*`s is escaped, so regex metacharacters in the
/// pattern match only themselves.
fn wildcard_matcher(pattern: &str) -> Result<Regex, EngineError> {
    let mut translated = String::with_capacity(pattern.len() + 2);
    translated.push('^');
    for (i, chunk) in pattern.split('*').enumerate() {
        if i > 0 {
            translated.push_str(".*");
        }
        translated.push_str(&regex::escape(chunk));
    }
    translated.push('$');
    RegexBuilder::new(&translated)
        .case_insensitive(true)
        .build()
        .map_err(|source| EngineError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}
