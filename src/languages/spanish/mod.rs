//! Implementación del idioma español

pub mod words;

use crate::dictionary::{Gender, VocabularyBuilder, WordCategory};
use crate::languages::Language;

use words::*;

pub struct Spanish;

impl Spanish {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Spanish {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Spanish {
    fn code(&self) -> &str {
        "es"
    }

    fn name(&self) -> &str {
        "Español"
    }

    fn vocabulary(&self) -> VocabularyBuilder {
        builtin_vocabulary()
    }
}

/// Vocabulario incorporado, listo para ampliarse antes de construirlo
pub fn builtin_vocabulary() -> VocabularyBuilder {
    let mut builder = VocabularyBuilder::new();
    builder
        .extend(WordCategory::Articulo, Gender::Masculine, ARTICLES_MASCULINE.iter().copied())
        .extend(WordCategory::Articulo, Gender::Feminine, ARTICLES_FEMININE.iter().copied())
        .extend(WordCategory::Articulo, Gender::Neutral, ARTICLES_NEUTRAL.iter().copied())
        .extend(WordCategory::Sustantivo, Gender::Masculine, NOUNS_MASCULINE.iter().copied())
        .extend(WordCategory::Sustantivo, Gender::Feminine, NOUNS_FEMININE.iter().copied())
        .extend(WordCategory::Verbo, Gender::Neutral, VERBS.iter().copied())
        .extend(WordCategory::Adjetivo, Gender::Neutral, ADJECTIVES.iter().copied())
        .extend(WordCategory::Preposicion, Gender::Neutral, PREPOSITIONS.iter().copied())
        .extend(WordCategory::Conjuncion, Gender::Neutral, CONJUNCTIONS.iter().copied());
    builder
}
