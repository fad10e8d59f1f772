//! Token clasificado

use serde::{Deserialize, Serialize};

use crate::dictionary::{normalize, WordCategory};

/// Palabra ya clasificada que consume el analizador sintáctico
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub category: WordCategory,
}

impl Token {
    /// Crea un token normalizando la palabra
    pub fn new(word: &str, category: WordCategory) -> Self {
        Self {
            word: normalize(word),
            category,
        }
    }

    pub fn is(&self, category: WordCategory) -> bool {
        self.category == category
    }
}
