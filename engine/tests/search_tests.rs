use engine::query::{search, search_multi, search_wildcard};
use engine::{InvertedIndex, SearchEngine, SearchHit, SpellSuggester};
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

/// File A: "apple banana apple", file B: "banana".
fn two_file_index() -> (TempDir, InvertedIndex, String, String) {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "apple banana apple").unwrap();
    fs::write(&b, "banana").unwrap();

    let mut index = InvertedIndex::new();
    let report = index.index_directory(dir.path()).unwrap();
    assert!(report.is_clean());

    let (a, b) = (a.display().to_string(), b.display().to_string());
    (dir, index, a, b)
}

#[test]
fn exact_search_ranks_by_count_then_path() {
    let (_dir, index, a, b) = two_file_index();
    assert_eq!(
        search(&index, "apple"),
        vec![SearchHit { path: a.clone(), count: 2 }]
    );
    // Tied counts come back in ascending path order.
    assert_eq!(
        search(&index, "banana"),
        vec![
            SearchHit { path: a, count: 1 },
            SearchHit { path: b, count: 1 },
        ]
    );
}

#[test]
fn search_is_case_insensitive() {
    let (_dir, index, ..) = two_file_index();
    assert_eq!(search(&index, "BANANA"), search(&index, "banana"));
    assert_eq!(search(&index, "BaNaNa"), search(&index, "banana"));
}

#[test]
fn unknown_terms_and_blank_queries_return_nothing() {
    let (_dir, index, ..) = two_file_index();
    assert!(search(&index, "cherry").is_empty());
    assert!(search(&index, "   ").is_empty());
    assert!(search_multi(&index, " , ,").is_empty());
    assert!(search_wildcard(&index, "  ").unwrap().is_empty());
}

#[test]
fn multi_term_counts_are_additive() {
    let (_dir, index, a, b) = two_file_index();
    let merged = search_multi(&index, "apple,banana");
    assert_eq!(
        merged,
        vec![
            SearchHit { path: a.clone(), count: 3 },
            SearchHit { path: b.clone(), count: 1 },
        ]
    );

    // Per file, the merged count is the sum of the exact-search counts.
    for hit in &merged {
        let sum: u64 = ["apple", "banana"]
            .iter()
            .flat_map(|t| search(&index, t))
            .filter(|h| h.path == hit.path)
            .map(|h| h.count)
            .sum();
        assert_eq!(hit.count, sum);
    }
}

#[test]
fn multi_term_deduplicates_and_skips_blank_segments() {
    let (_dir, index, ..) = two_file_index();
    let plain = search_multi(&index, "apple,banana");
    assert_eq!(search_multi(&index, "apple, APPLE ,banana"), plain);
    assert_eq!(search_multi(&index, ",,apple,  ,banana,"), plain);
    assert_eq!(search_multi(&index, "banana"), search(&index, "banana"));
}

#[test]
fn wildcard_matches_whole_terms_only() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("words.txt");
    fs::write(&file, "cat cats category concat").unwrap();
    let mut index = InvertedIndex::new();
    index.index_file(&file).unwrap();

    let key = file.display().to_string();
    assert_eq!(
        search_wildcard(&index, "cat*").unwrap(),
        vec![SearchHit { path: key.clone(), count: 3 }]
    );
    assert_eq!(
        search_wildcard(&index, "*").unwrap(),
        vec![SearchHit { path: key, count: 4 }]
    );
    // `.` is a literal character, not a metacharacter.
    assert!(search_wildcard(&index, "c.t").unwrap().is_empty());
}

#[test]
fn wildcard_agrees_with_exact_search() {
    let (_dir, index, ..) = two_file_index();
    assert_eq!(
        search_wildcard(&index, "ban*").unwrap(),
        search(&index, "banana")
    );
}

#[test]
fn engine_facade_end_to_end() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "apple banana apple").unwrap();
    fs::write(dir.path().join("b.txt"), "banana").unwrap();

    let engine =
        SearchEngine::with_suggester(SpellSuggester::from_words(["cat", "cats", "bat"]));
    let report = engine.index_directory(dir.path()).unwrap();
    assert!(report.is_clean());
    assert_eq!(engine.file_count(), 2);
    assert_eq!(engine.term_count(), 2);

    assert_eq!(engine.search("apple").len(), 1);
    assert_eq!(
        engine.search_wildcard("ban*").unwrap(),
        engine.search("banana")
    );
    assert_eq!(engine.suggest("cot"), BTreeSet::from(["cat".to_string()]));
}

#[test]
fn searches_run_concurrently_with_indexing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "apple banana apple").unwrap();
    fs::write(dir.path().join("b.txt"), "banana").unwrap();

    let engine = Arc::new(SearchEngine::new());
    engine.index_directory(dir.path()).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    for hit in engine.search("banana") {
                        assert_eq!(hit.count, 1);
                    }
                }
            })
        })
        .collect();

    // Re-scan while the readers hammer the index.
    for _ in 0..5 {
        engine.index_directory(dir.path()).unwrap();
    }
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(engine.search("banana").len(), 2);
}
