//! The engine boundary.
//!
//! Every linguistic capability the CLI uses goes through the [`Engine`]
//! trait, so the packaged providers can be swapped for another toolkit
//! without touching the glue layer. [`StackEngine`] is the default
//! composition of the in-repo providers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use textlens_embed::EmbeddingSpace;
use textlens_lang::{Lang, LanguageIdent};
use textlens_lemma::Lemmatizer;
use textlens_ner::EntityTagger;
use textlens_sentiment::SentimentScorer;
use textlens_types::{Alternative, EntityFilter, EntityRecord};

/// The five delegated NLP capabilities.
///
/// Absence of data is a result, not an error: inconclusive detection is
/// `None`, unknown words have no neighbors, and so on. Implementations are
/// expected to be deterministic for a given input.
pub trait Engine {
    /// Best-guess language tag, or `None` when inconclusive.
    fn detect_language(&self, text: &str) -> Option<String>;

    /// Paragraph-level polarity in [-1.0, 1.0], or `None` for no signal.
    fn sentiment(&self, text: &str) -> Option<f64>;

    /// Word lemmas in input order; never contains empty entries.
    fn lemmas(&self, text: &str, language: &str) -> Vec<String>;

    /// Up to `limit` nearest neighbors of `word` in the embedding space
    /// for `language`; empty when no space exists.
    fn neighbors(&self, word: &str, language: &str, limit: usize) -> Vec<Alternative>;

    /// Entities of the requested categories, in input order.
    fn entities(&self, text: &str, filter: EntityFilter) -> Vec<EntityRecord>;
}

/// Construction options for [`StackEngine`].
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Directory holding `<tag>.vec` embedding spaces. `None` disables
    /// neighbor lookup entirely.
    pub embeddings_dir: Option<PathBuf>,
}

/// Default engine: the in-repo providers stacked behind the trait.
pub struct StackEngine {
    ident: LanguageIdent,
    scorer: SentimentScorer,
    lemmatizer: Lemmatizer,
    tagger: EntityTagger,
    embeddings_dir: Option<PathBuf>,
    // Spaces load lazily, once per language per invocation.
    spaces: RefCell<HashMap<String, Option<EmbeddingSpace>>>,
}

impl StackEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            ident: LanguageIdent::new(),
            scorer: SentimentScorer::new(),
            lemmatizer: Lemmatizer::new(),
            tagger: EntityTagger::new(),
            embeddings_dir: options.embeddings_dir,
            spaces: RefCell::new(HashMap::new()),
        }
    }
}

impl Engine for StackEngine {
    fn detect_language(&self, text: &str) -> Option<String> {
        self.ident.identify(text).map(|lang| lang.tag().to_string())
    }

    fn sentiment(&self, text: &str) -> Option<f64> {
        self.scorer.score(text)
    }

    fn lemmas(&self, text: &str, language: &str) -> Vec<String> {
        self.lemmatizer.lemmas(text, Lang::from_tag(language))
    }

    fn neighbors(&self, word: &str, language: &str, limit: usize) -> Vec<Alternative> {
        let Some(dir) = &self.embeddings_dir else {
            return Vec::new();
        };
        let mut spaces = self.spaces.borrow_mut();
        let space = spaces
            .entry(language.to_string())
            .or_insert_with(|| EmbeddingSpace::load_for(dir, language));
        match space {
            Some(space) => space.neighbors(word, limit),
            None => Vec::new(),
        }
    }

    fn entities(&self, text: &str, filter: EntityFilter) -> Vec<EntityRecord> {
        self.tagger.tag(text, filter)
    }
}
