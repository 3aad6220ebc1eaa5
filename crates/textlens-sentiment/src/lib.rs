//! Paragraph-level sentiment scoring.
//!
//! The provider is an embedded valence lexicon with negator handling: each
//! scored word contributes a value in [-5, 5], a negator within the three
//! preceding tokens flips the sign, and the sum is normalized by the number
//! of scored words so the final score lands in [-1.0, 1.0]. Text with no
//! lexicon hits yields `None`; the caller decides the fallback (0.0).

use std::collections::HashMap;

use once_cell::sync::Lazy;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../assets/valence.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid valence lexicon")
});

/// Highest absolute valence in the lexicon scale.
const MAX_VALENCE: f64 = 5.0;

/// How many preceding tokens a negator reaches over.
const NEGATION_WINDOW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score the whole text, or `None` when nothing in it carries valence.
    pub fn score(&self, text: &str) -> Option<f64> {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut sum = 0i32;
        let mut hits = 0usize;

        for i in 0..tokens.len() {
            let base = match LEXICON.get(tokens[i].as_str()) {
                Some(&v) => v,
                None => continue,
            };
            let negated = (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(&tokens[i - k]));
            sum += if negated { -base } else { base };
            hits += 1;
        }

        if hits == 0 {
            return None;
        }
        let score = sum as f64 / (hits as f64 * MAX_VALENCE);
        Some(score.clamp(-1.0, 1.0))
    }
}

/// Alphanumeric tokens, lowercased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn"
            | "wasn"
            | "aren"
            | "don"
            | "doesn"
            | "didn"
            | "couldn"
            | "wouldn"
            | "shouldn"
            | "cannot"
            | "without"
            | "hardly"
            | "barely"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_parses_and_stays_in_scale() {
        assert!(!LEXICON.is_empty());
        assert!(LEXICON.values().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn tokenize_splits_contractions() {
        let tokens: Vec<String> = tokenize("isn't bad").collect();
        assert_eq!(tokens, vec!["isn", "t", "bad"]);
    }
}
