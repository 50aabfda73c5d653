use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use walkdir::WalkDir;

use crate::error::EngineError;
use crate::tokenizer::tokenize;

/// Per-term mapping from file path to occurrence count.
pub type PostingList = HashMap<String, u64>;

/// In-memory term -> file -> count table.
///
/// The index only grows: postings for files that disappear from disk after
/// indexing remain until the process exits. Re-indexing a path is the one
/// exception; see [`InvertedIndex::index_file`].
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingList>,
    /// Terms each indexed file contributed, so a re-scan can remove the old
    /// counts before merging new ones.
    file_terms: HashMap<String, HashSet<String>>,
}

/// Per-file outcomes of a directory scan. Failures are collected here
/// instead of aborting the scan, so callers can inspect what was skipped.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub indexed: Vec<String>,
    pub failures: Vec<ScanFailure>,
}

#[derive(Debug)]
pub struct ScanFailure {
    pub path: String,
    pub error: EngineError,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one text file, line by line.
    ///
    /// Counts are accumulated locally and merged only after the whole file
    /// has been read, so a failed read leaves the index untouched. If the
    /// path was indexed before, its previous contribution is replaced rather
    /// than added to, so re-scanning an unchanged file is a no-op.
    pub fn index_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EngineError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
        let reader = BufReader::new(file);

        let mut counts: HashMap<String, u64> = HashMap::new();
        for line in reader.lines() {
            let line = line.map_err(|e| EngineError::io(path, e))?;
            for token in tokenize(&line) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let key = path.display().to_string();
        self.remove_file(&key);
        let mut contributed = HashSet::with_capacity(counts.len());
        for (term, n) in counts {
            contributed.insert(term.clone());
            self.terms.entry(term).or_default().insert(key.clone(), n);
        }
        self.file_terms.insert(key, contributed);
        Ok(())
    }

    /// Recursively index every regular file reachable from `root`.
    ///
    /// Symlinks are not followed and non-regular files are skipped. A file
    /// that fails to index is recorded in the report and the scan continues;
    /// only a root that cannot be listed at all is an error.
    pub fn index_directory<P: AsRef<Path>>(&mut self, root: P) -> Result<ScanReport, EngineError> {
        let root = root.as_ref();
        std::fs::read_dir(root).map_err(|e| EngineError::root(root, e))?;

        let mut report = ScanReport::default();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    report.failures.push(ScanFailure {
                        path: path.display().to_string(),
                        error: EngineError::Io {
                            path,
                            source: e.into(),
                        },
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match self.index_file(entry.path()) {
                Ok(()) => report.indexed.push(entry.path().display().to_string()),
                Err(error) => report.failures.push(ScanFailure {
                    path: entry.path().display().to_string(),
                    error,
                }),
            }
        }

        tracing::info!(
            indexed = report.indexed.len(),
            failed = report.failures.len(),
            num_terms = self.terms.len(),
            "directory scan complete"
        );
        Ok(report)
    }

    /// Postings for the lowercased term, or `None` if it was never indexed.
    /// The sole exact-match primitive the query modes build on.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(&term.to_lowercase())
    }

    /// All distinct indexed terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn file_count(&self) -> usize {
        self.file_terms.len()
    }

    fn remove_file(&mut self, path: &str) {
        if let Some(old_terms) = self.file_terms.remove(path) {
            for term in old_terms {
                if let Some(postings) = self.terms.get_mut(&term) {
                    postings.remove(path);
                    if postings.is_empty() {
                        self.terms.remove(&term);
                    }
                }
            }
        }
    }
}
