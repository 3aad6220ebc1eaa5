//! Identification behavior across scripts and inconclusive inputs.

use textlens_lang::{Lang, LanguageIdent};

fn ident() -> LanguageIdent {
    LanguageIdent::new()
}

#[test]
fn english_text_is_english() {
    assert_eq!(
        ident().identify("the weather today is beautiful and the day is long"),
        Some(Lang::English)
    );
}

#[test]
fn spanish_text_is_spanish() {
    assert_eq!(
        ident().identify("hola mundo que dia tan maravilloso para aprender"),
        Some(Lang::Spanish)
    );
}

#[test]
fn french_text_is_french() {
    assert_eq!(
        ident().identify("bonjour le monde quelle belle journee pour apprendre"),
        Some(Lang::French)
    );
}

#[test]
fn german_text_is_german() {
    assert_eq!(
        ident().identify("hallo welt was fur ein wunderbarer tag um etwas zu lernen"),
        Some(Lang::German)
    );
}

#[test]
fn cyrillic_is_russian() {
    assert_eq!(ident().identify("это русский текст"), Some(Lang::Russian));
}

#[test]
fn han_is_chinese() {
    assert_eq!(ident().identify("这是中文文本"), Some(Lang::Chinese));
}

#[test]
fn kana_wins_over_han_for_japanese() {
    assert_eq!(
        ident().identify("これは日本語のテキストです"),
        Some(Lang::Japanese)
    );
}

#[test]
fn hangul_is_korean() {
    assert_eq!(
        ident().identify("이것은 한국어 텍스트입니다"),
        Some(Lang::Korean)
    );
}

#[test]
fn arabic_script_is_arabic() {
    assert_eq!(ident().identify("هذا نص عربي"), Some(Lang::Arabic));
}

#[test]
fn empty_and_symbol_only_inputs_are_inconclusive() {
    assert_eq!(ident().identify(""), None);
    assert_eq!(ident().identify("   "), None);
    assert_eq!(ident().identify("12345 !!! ???"), None);
    assert_eq!(ident().identify("ab"), None);
}

mod properties {
    use proptest::prelude::*;
    use textlens_lang::LanguageIdent;

    proptest! {
        #[test]
        fn identification_never_panics(text in "\\PC*") {
            let _ = LanguageIdent::new().identify(&text);
        }

        #[test]
        fn latin_words_always_resolve_to_some_language(words in proptest::collection::vec("[a-z]{3,10}", 1..20)) {
            // Three or more Latin letters always produce a scorable trigram.
            let text = words.join(" ");
            prop_assert!(LanguageIdent::new().identify(&text).is_some());
        }
    }
}
