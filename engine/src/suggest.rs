use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Edit-distance spell suggester over a fixed word list.
///
/// The dictionary is loaded once and immutable thereafter. Every `suggest`
/// call scans it in full, O(words x term_len x word_len); fine for
/// interactive word lists, not for corpus-sized ones.
pub struct SpellSuggester {
    dictionary: Vec<String>,
    load_error: Option<String>,
}

impl SpellSuggester {
    /// Load a dictionary with one candidate word per line, lowercased.
    ///
    /// A missing or unreadable dictionary does not fail construction: the
    /// suggester degrades to an empty word list, logs a warning, and records
    /// the cause for [`SpellSuggester::load_error`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match load_words(path) {
            Ok(dictionary) => Self {
                dictionary,
                load_error: None,
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "dictionary unavailable, suggestions disabled"
                );
                Self {
                    dictionary: Vec::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Build from an in-memory word list. Duplicates are tolerated; they
    /// cannot change which words achieve the minimal distance.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self {
            dictionary,
            load_error: None,
        }
    }

    /// Why the dictionary failed to load, if it did.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// All dictionary words at minimal edit distance from the term,
    /// including the term itself (distance 0) when it is in the dictionary.
    /// Blank terms and an empty dictionary yield an empty set.
    pub fn suggest(&self, term: &str) -> BTreeSet<String> {
        let term = term.trim().to_lowercase();
        let mut suggestions = BTreeSet::new();
        if term.is_empty() || self.dictionary.is_empty() {
            return suggestions;
        }

        let mut best = usize::MAX;
        for word in &self.dictionary {
            let distance = levenshtein(&term, word);
            if distance < best {
                best = distance;
                suggestions.clear();
                suggestions.insert(word.clone());
            } else if distance == best {
                suggestions.insert(word.clone());
            }
        }
        suggestions
    }
}

fn load_words(path: &Path) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

/// Levenshtein distance, computed over chars with the standard
/// dynamic-programming table.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = dp[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = substitution
                .min(dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1);
        }
    }
    dp[a.len()][b.len()]
}
