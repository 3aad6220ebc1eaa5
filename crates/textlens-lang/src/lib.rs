//! Language identification.
//!
//! Detection combines two passes: Unicode script ranges settle CJK, Hangul,
//! Arabic, and Cyrillic immediately; Latin-script text is scored against
//! small character-trigram frequency models. Inputs with no usable letters
//! are inconclusive and yield `None`, which callers print as `und`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Languages the identifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Arabic,
    Chinese,
    Japanese,
    Korean,
}

impl Lang {
    /// ISO 639-1 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Spanish => "es",
            Lang::French => "fr",
            Lang::German => "de",
            Lang::Italian => "it",
            Lang::Portuguese => "pt",
            Lang::Russian => "ru",
            Lang::Arabic => "ar",
            Lang::Chinese => "zh",
            Lang::Japanese => "ja",
            Lang::Korean => "ko",
        }
    }

    /// Parse an ISO 639-1 tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::English),
            "es" => Some(Lang::Spanish),
            "fr" => Some(Lang::French),
            "de" => Some(Lang::German),
            "it" => Some(Lang::Italian),
            "pt" => Some(Lang::Portuguese),
            "ru" => Some(Lang::Russian),
            "zh" => Some(Lang::Chinese),
            "ja" => Some(Lang::Japanese),
            "ko" => Some(Lang::Korean),
            "ar" => Some(Lang::Arabic),
            _ => None,
        }
    }
}

const TRIGRAM: usize = 3;

/// Character-trigram frequency model over lowercased seed text.
struct TrigramModel {
    ngrams: HashMap<String, f32>,
    total: f32,
}

impl TrigramModel {
    fn new() -> Self {
        Self {
            ngrams: HashMap::new(),
            total: 0.0,
        }
    }

    fn train(&mut self, text: &str) {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        for window in chars.windows(TRIGRAM) {
            let ngram: String = window.iter().collect();
            *self.ngrams.entry(ngram).or_insert(0.0) += 1.0;
            self.total += 1.0;
        }
    }

    /// Average log-probability of the text's trigrams, with add-one style
    /// smoothing for unseen grams. Returns `None` when the text is too
    /// short to produce a single trigram.
    fn score(&self, text: &str) -> Option<f32> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let mut score = 0.0;
        let mut count = 0usize;

        for window in chars.windows(TRIGRAM) {
            let ngram: String = window.iter().collect();
            match self.ngrams.get(&ngram) {
                Some(&freq) => score += (freq / self.total).ln(),
                None => score += (1.0 / (self.total + 1.0)).ln(),
            }
            count += 1;
        }

        (count > 0).then(|| score / count as f32)
    }
}

fn seed_models() -> Vec<(Lang, TrigramModel)> {
    let seeds: &[(Lang, &[&str])] = &[
        (
            Lang::English,
            &[
                "the quick brown fox jumps over the lazy dog",
                "this is a plain sample of english text for the model",
                "hello world how are you doing today",
                "what a wonderful day it is to learn something new",
                "thank you very much for all of your help with this",
                "the weather in the city was beautiful this morning",
            ],
        ),
        (
            Lang::Spanish,
            &[
                "el veloz murcielago hindu comia feliz cardillo y kiwi",
                "esta es una muestra sencilla de texto en espanol para el modelo",
                "hola mundo como estas hoy",
                "que dia tan maravilloso para aprender algo nuevo",
                "muchas gracias por toda su ayuda con esto",
                "el tiempo en la ciudad era hermoso esta manana",
            ],
        ),
        (
            Lang::French,
            &[
                "le vif renard brun saute par dessus le chien paresseux",
                "ceci est un simple echantillon de texte francais pour le modele",
                "bonjour le monde comment allez vous aujourd hui",
                "quelle belle journee pour apprendre quelque chose de nouveau",
                "merci beaucoup pour toute votre aide avec ceci",
                "le temps dans la ville etait magnifique ce matin",
            ],
        ),
        (
            Lang::German,
            &[
                "der schnelle braune fuchs springt uber den faulen hund",
                "dies ist eine einfache probe deutschen textes fur das modell",
                "hallo welt wie geht es dir heute",
                "was fur ein wunderbarer tag um etwas neues zu lernen",
                "vielen dank fur ihre ganze hilfe damit",
                "das wetter in der stadt war heute morgen wunderschon",
            ],
        ),
        (
            Lang::Italian,
            &[
                "la rapida volpe marrone salta sopra il cane pigro",
                "questo e un semplice campione di testo italiano per il modello",
                "ciao mondo come stai oggi",
                "che giornata meravigliosa per imparare qualcosa di nuovo",
                "grazie mille per tutto il vostro aiuto con questo",
                "il tempo nella citta era bellissimo questa mattina",
            ],
        ),
        (
            Lang::Portuguese,
            &[
                "a rapida raposa marrom pula sobre o cao preguicoso",
                "esta e uma amostra simples de texto em portugues para o modelo",
                "ola mundo como voce esta hoje",
                "que dia maravilhoso para aprender algo novo",
                "muito obrigado por toda a sua ajuda com isto",
                "o tempo na cidade estava lindo esta manha",
            ],
        ),
    ];

    seeds
        .iter()
        .map(|(lang, sentences)| {
            let mut model = TrigramModel::new();
            for sentence in *sentences {
                model.train(sentence);
            }
            (*lang, model)
        })
        .collect()
}

static MODELS: Lazy<Vec<(Lang, TrigramModel)>> = Lazy::new(seed_models);

/// Language identifier over script heuristics plus trigram models.
#[derive(Debug, Default)]
pub struct LanguageIdent;

impl LanguageIdent {
    pub fn new() -> Self {
        Self
    }

    /// Best-guess language, or `None` when the input is inconclusive.
    pub fn identify(&self, text: &str) -> Option<Lang> {
        if text.trim().is_empty() {
            return None;
        }

        if let Some(lang) = script_guess(text) {
            return Some(lang);
        }

        let letters: String = text
            .chars()
            .map(|c| if c.is_alphabetic() { c } else { ' ' })
            .collect();
        if letters.trim().chars().count() < TRIGRAM {
            return None;
        }

        MODELS
            .iter()
            .filter_map(|(lang, model)| model.score(&letters).map(|s| (*lang, s)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(lang, _)| lang)
    }
}

/// Settle non-Latin scripts by Unicode ranges before any model scoring.
fn script_guess(text: &str) -> Option<Lang> {
    let total = text.chars().filter(|c| !c.is_whitespace()).count().max(1) as f32;

    let in_range = |lo: u32, hi: u32| {
        text.chars()
            .filter(|c| (lo..=hi).contains(&(*c as u32)))
            .count() as f32
    };

    // Hiragana or katakana anywhere means Japanese, even among Han chars.
    if in_range(0x3040, 0x309F) + in_range(0x30A0, 0x30FF) > 0.0 {
        return Some(Lang::Japanese);
    }
    if in_range(0x4E00, 0x9FFF) / total > 0.3 {
        return Some(Lang::Chinese);
    }
    if in_range(0xAC00, 0xD7AF) / total > 0.3 {
        return Some(Lang::Korean);
    }
    if in_range(0x0600, 0x06FF) / total > 0.3 {
        return Some(Lang::Arabic);
    }
    if in_range(0x0400, 0x04FF) / total > 0.3 {
        return Some(Lang::Russian);
    }
    None
}
