//! Named-entity tagging with multi-word name joining.
//!
//! Word-level tagging over capitalized token runs: consecutive capitalized
//! tokens merge into one match, connectives ("of", "de", "van", …) are
//! allowed inside an open run when another capitalized token follows, and
//! title prefixes ("Mr.", "Dr.", …) force the person category without
//! appearing in the matched text. Classification is gazetteer-first, in the
//! order organization → place → person; runs that match no category are
//! dropped silently, as are capitalized common words.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use textlens_types::{EntityFilter, EntityKind, EntityRecord};

static PLACES: Lazy<HashSet<String>> = Lazy::new(|| load_lines(include_str!("../assets/places.txt")));
static ORG_NAMES: Lazy<HashSet<String>> =
    Lazy::new(|| load_lines(include_str!("../assets/org_names.txt")));
static ORG_KEYWORDS: Lazy<HashSet<String>> =
    Lazy::new(|| load_lines(include_str!("../assets/org_keywords.txt")));
static GIVEN_NAMES: Lazy<HashSet<String>> =
    Lazy::new(|| load_lines(include_str!("../assets/given_names.txt")));

static TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Mr|Mrs|Ms|Miss|Dr|Prof|Sir|Lady|Lord|President|Senator|Captain)\.?$")
        .expect("valid title pattern")
});

fn load_lines(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Capitalized everyday words that never open a name run on their own.
const COMMON_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "always", "an", "and", "another", "any", "are",
    "as", "at", "bad", "be", "because", "been", "before", "big", "but", "by", "can", "could",
    "did", "do", "does", "down", "each", "early", "every", "few", "find", "first", "for", "found",
    "from", "good", "great", "had", "has", "have", "he", "hello", "her", "here", "hi", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "last", "late", "like",
    "little", "long", "many", "may", "might", "more", "most", "much", "must", "my", "never",
    "no", "not", "now", "of", "often", "old", "on", "once", "one", "only", "or", "other",
    "our", "out", "over", "please", "she", "should", "small", "so", "some", "such", "thank",
    "thanks", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "to", "today", "tomorrow", "too", "under", "up", "very", "was", "we", "welcome", "were",
    "what", "when", "where", "which", "while", "who", "why", "will", "with", "would", "yes",
    "yesterday", "you", "your",
];

static COMMON: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_WORDS.iter().copied().collect());

/// Lowercase connectives allowed inside an already-open name run.
const CONNECTIVES: &[&str] = &["de", "da", "del", "der", "di", "du", "la", "le", "of", "van", "von"];

#[derive(Debug, Clone, Default)]
pub struct EntityTagger;

impl EntityTagger {
    pub fn new() -> Self {
        Self
    }

    /// Entities of the requested categories, in input order.
    pub fn tag(&self, text: &str, filter: EntityFilter) -> Vec<EntityRecord> {
        if !filter.any() {
            return Vec::new();
        }

        let tokens: Vec<String> = text
            .split_whitespace()
            .map(clean_token)
            .filter(|t| !t.is_empty())
            .collect();

        let mut records = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if !opens_run(&tokens[i]) {
                i += 1;
                continue;
            }

            let titled = TITLE.is_match(&tokens[i]);
            let mut span: Vec<&str> = Vec::new();
            if !titled {
                span.push(&tokens[i]);
            }

            let mut j = i + 1;
            while j < tokens.len() {
                if is_capitalized(&tokens[j]) && !TITLE.is_match(&tokens[j]) {
                    span.push(&tokens[j]);
                    j += 1;
                } else if !span.is_empty()
                    && CONNECTIVES.contains(&tokens[j].to_lowercase().as_str())
                    && j + 1 < tokens.len()
                    && is_capitalized(&tokens[j + 1])
                {
                    span.push(&tokens[j]);
                    span.push(&tokens[j + 1]);
                    j += 2;
                } else {
                    break;
                }
            }

            if let Some(kind) = classify(&span, titled)
                && filter.wants(kind)
            {
                records.push(EntityRecord {
                    kind,
                    text: span.join(" "),
                });
            }
            i = j;
        }
        records
    }
}

/// Strip surrounding punctuation and a trailing possessive marker.
fn clean_token(raw: &str) -> String {
    let stripped = raw.trim_matches(|c: char| !c.is_alphanumeric());
    stripped
        .strip_suffix("'s")
        .or_else(|| stripped.strip_suffix("’s"))
        .unwrap_or(stripped)
        .to_string()
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_uppercase())
}

/// A run opens on a capitalized token that is not an everyday word.
fn opens_run(token: &str) -> bool {
    is_capitalized(token) && !COMMON.contains(token.to_lowercase().as_str())
}

/// Gazetteer-first classification, organization → place → person.
fn classify(span: &[&str], titled: bool) -> Option<EntityKind> {
    if span.is_empty() {
        return None;
    }
    let phrase = span.join(" ").to_lowercase();

    if ORG_NAMES.contains(&phrase)
        || span
            .iter()
            .any(|t| ORG_KEYWORDS.contains(&t.to_lowercase()))
    {
        return Some(EntityKind::Organization);
    }
    if PLACES.contains(&phrase) {
        return Some(EntityKind::Place);
    }
    if titled || GIVEN_NAMES.contains(&span[0].to_lowercase()) || span.len() >= 2 {
        return Some(EntityKind::Person);
    }
    None
}
