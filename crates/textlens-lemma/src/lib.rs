//! Word-level lemma tagging.
//!
//! Each alphabetic token is resolved in order: the embedded irregular-form
//! table for the language, then the Snowball stemmer, then the lowercased
//! surface form for languages without a stemmer. Order follows the input,
//! duplicates are preserved, and empty forms are never emitted.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use textlens_lang::Lang;

static IRREGULAR: Lazy<HashMap<String, HashMap<String, String>>> = Lazy::new(|| {
    let raw = include_str!("../assets/irregular.json");
    serde_json::from_str(raw).expect("valid irregular-form table")
});

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lemmas for every word of `text`, in input order.
    pub fn lemmas(&self, text: &str, lang: Option<Lang>) -> Vec<String> {
        let irregular = lang.and_then(|l| IRREGULAR.get(l.tag()));
        let stemmer = lang.and_then(algorithm_for).map(Stemmer::create);

        words(text)
            .map(|word| {
                let lower = word.to_lowercase();
                if let Some(mapped) = irregular.and_then(|table| table.get(&lower)) {
                    return mapped.clone();
                }
                match &stemmer {
                    Some(stemmer) => stemmer.stem(&lower).into_owned(),
                    None => lower,
                }
            })
            .map(|lemma| lemma.trim().to_string())
            .filter(|lemma| !lemma.is_empty())
            .collect()
    }
}

/// Snowball algorithm for the language, if one exists.
fn algorithm_for(lang: Lang) -> Option<Algorithm> {
    match lang {
        Lang::English => Some(Algorithm::English),
        Lang::Spanish => Some(Algorithm::Spanish),
        Lang::French => Some(Algorithm::French),
        Lang::German => Some(Algorithm::German),
        Lang::Italian => Some(Algorithm::Italian),
        Lang::Portuguese => Some(Algorithm::Portuguese),
        Lang::Russian => Some(Algorithm::Russian),
        Lang::Arabic => Some(Algorithm::Arabic),
        Lang::Chinese | Lang::Japanese | Lang::Korean => None,
    }
}

/// Alphabetic runs, in order.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
}
