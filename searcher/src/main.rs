use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use engine::{SearchEngine, SpellSuggester};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Index text files and search them by word", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Single exact term
    Exact,
    /// Comma-separated terms; per-file counts are summed
    Multi,
    /// `*` matches any run of characters, anchored to the whole word
    Wildcard,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a file or directory, run one query, print ranked results
    Search {
        /// File or directory to index
        #[arg(long)]
        path: PathBuf,
        /// Query term, comma-separated terms, or wildcard pattern
        #[arg(long)]
        query: String,
        #[arg(long, value_enum, default_value = "exact")]
        mode: Mode,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Word list consulted for suggestions when an exact search is empty
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
    /// Print the dictionary words closest to a term by edit distance
    Suggest {
        /// Word list, one candidate per line
        #[arg(long)]
        dictionary: PathBuf,
        #[arg(long)]
        term: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            path,
            query,
            mode,
            json,
            dictionary,
        } => run_search(&path, &query, mode, json, dictionary.as_deref()),
        Commands::Suggest { dictionary, term } => run_suggest(&dictionary, &term),
    }
}

fn run_search(
    path: &Path,
    query: &str,
    mode: Mode,
    json: bool,
    dictionary: Option<&Path>,
) -> Result<()> {
    let suggester = match dictionary {
        Some(p) => SpellSuggester::from_file(p),
        None => SpellSuggester::from_words(Vec::<String>::new()),
    };
    let engine = SearchEngine::with_suggester(suggester);

    if path.is_dir() {
        let report = engine.index_directory(path)?;
        for failure in &report.failures {
            tracing::warn!(path = %failure.path, error = %failure.error, "skipped during scan");
        }
    } else {
        engine.index_file(path)?;
    }
    tracing::info!(
        terms = engine.term_count(),
        files = engine.file_count(),
        "index built"
    );

    let results = match mode {
        Mode::Exact => engine.search(query),
        Mode::Multi => engine.search_multi(query),
        Mode::Wildcard => engine.search_wildcard(query)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no matches for '{query}'");
        if matches!(mode, Mode::Exact) {
            let suggestions = engine.suggest(query);
            if !suggestions.is_empty() {
                let joined = suggestions.into_iter().collect::<Vec<_>>().join(", ");
                println!("did you mean: {joined}");
            }
        }
    } else {
        for hit in &results {
            println!("{}: {}", hit.path, hit.count);
        }
    }
    Ok(())
}

fn run_suggest(dictionary: &Path, term: &str) -> Result<()> {
    let suggester = SpellSuggester::from_file(dictionary);
    if let Some(err) = suggester.load_error() {
        anyhow::bail!(
            "dictionary {} could not be read: {err}",
            dictionary.display()
        );
    }

    let suggestions = suggester.suggest(term);
    if suggestions.is_empty() {
        println!("no suggestions for '{term}'");
    } else {
        for word in suggestions {
            println!("{word}");
        }
    }
    Ok(())
}
