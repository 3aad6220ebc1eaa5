//! Embedding-space parsing and neighbor ranking.

use std::fs;

use tempfile::tempdir;
use textlens_embed::EmbeddingSpace;

const SPACE: &str = "\
run 1.0 0.0 0.0
sprint 0.9 0.1 0.0
jog 0.8 0.2 0.0
walk 0.2 0.9 0.1
table 0.0 0.0 1.0
";

#[test]
fn parses_rows_and_indexes_case_insensitively() {
    let space = EmbeddingSpace::parse(SPACE).unwrap();
    assert_eq!(space.len(), 5);
    assert!(space.contains("run"));
    assert!(space.contains("RUN"));
    assert!(!space.contains("fly"));
}

#[test]
fn neighbors_rank_by_cosine_distance_ascending() {
    let space = EmbeddingSpace::parse(SPACE).unwrap();
    let neighbors = space.neighbors("run", 3);
    let words: Vec<&str> = neighbors.iter().map(|n| n.word.as_str()).collect();
    assert_eq!(words, vec!["sprint", "jog", "walk"]);
    assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn query_word_is_never_its_own_neighbor() {
    let space = EmbeddingSpace::parse(SPACE).unwrap();
    let neighbors = space.neighbors("run", 10);
    assert!(neighbors.iter().all(|n| n.word != "run"));
    assert_eq!(neighbors.len(), 4);
}

#[test]
fn limit_caps_the_result_and_zero_means_none() {
    let space = EmbeddingSpace::parse(SPACE).unwrap();
    assert_eq!(space.neighbors("run", 2).len(), 2);
    assert!(space.neighbors("run", 0).is_empty());
}

#[test]
fn unknown_word_has_no_neighbors() {
    let space = EmbeddingSpace::parse(SPACE).unwrap();
    assert!(space.neighbors("fly", 5).is_empty());
}

#[test]
fn word2vec_header_row_is_tolerated() {
    let with_header = format!("5 3\n{SPACE}");
    let space = EmbeddingSpace::parse(&with_header).unwrap();
    assert_eq!(space.len(), 5);
}

#[test]
fn malformed_and_mismatched_rows_are_skipped() {
    let raw = "\
run 1.0 0.0
bad one two
short 1.0
sprint 0.9 0.1
";
    let space = EmbeddingSpace::parse(raw).unwrap();
    assert_eq!(space.len(), 2);
    assert!(space.contains("run"));
    assert!(space.contains("sprint"));
}

#[test]
fn empty_input_is_no_space() {
    assert!(EmbeddingSpace::parse("").is_none());
    assert!(EmbeddingSpace::parse("justwords\n").is_none());
}

#[test]
fn load_for_reads_tagged_files_and_misses_gracefully() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en.vec"), SPACE).unwrap();

    let space = EmbeddingSpace::load_for(dir.path(), "en").unwrap();
    assert!(space.contains("run"));
    assert!(EmbeddingSpace::load_for(dir.path(), "fr").is_none());
    assert!(EmbeddingSpace::load_for(&dir.path().join("missing"), "en").is_none());
}

mod properties {
    use proptest::prelude::*;
    use textlens_embed::EmbeddingSpace;

    proptest! {
        #[test]
        fn neighbor_count_is_bounded_by_limit(limit in 0usize..12) {
            let space = EmbeddingSpace::parse(super::SPACE).unwrap();
            prop_assert!(space.neighbors("run", limit).len() <= limit);
        }

        #[test]
        fn parse_never_panics(raw in "\\PC*") {
            let _ = EmbeddingSpace::parse(&raw);
        }
    }
}
