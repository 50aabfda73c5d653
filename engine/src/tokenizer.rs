use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Tokenize a line into lowercased word tokens: maximal runs of letters,
/// digits, and underscores. No other normalization is applied.
///
/// The returned iterator is lazy and finite; call `tokenize` again on the
/// same line to restart.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(line).map(|m| m.as_str().to_lowercase())
}
