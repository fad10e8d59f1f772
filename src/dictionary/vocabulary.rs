//! Vocabulario categorizado
//!
//! Listas de palabras por categoría y género, más un índice precalculado
//! palabra → (categoría, género) construido una sola vez.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Categoría gramatical de una palabra
///
/// El orden de las variantes es la precedencia de clasificación: si una
/// palabra aparece en varias listas, gana la categoría declarada antes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Articulo,
    Sustantivo,
    Verbo,
    Adjetivo,
    Preposicion,
    Conjuncion,
}

impl WordCategory {
    pub const ALL: [WordCategory; 6] = [
        WordCategory::Articulo,
        WordCategory::Sustantivo,
        WordCategory::Verbo,
        WordCategory::Adjetivo,
        WordCategory::Preposicion,
        WordCategory::Conjuncion,
    ];

    /// Interpreta un nombre de categoría (español, inglés o abreviado)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "articulo" | "artículo" | "article" | "art" | "det" => Some(WordCategory::Articulo),
            "sustantivo" | "noun" | "n" | "sust" => Some(WordCategory::Sustantivo),
            "verbo" | "verb" | "v" => Some(WordCategory::Verbo),
            "adjetivo" | "adjective" | "adj" => Some(WordCategory::Adjetivo),
            "preposicion" | "preposición" | "preposition" | "prep" => {
                Some(WordCategory::Preposicion)
            }
            "conjuncion" | "conjunción" | "conjunction" | "conj" => {
                Some(WordCategory::Conjuncion)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Articulo => "articulo",
            WordCategory::Sustantivo => "sustantivo",
            WordCategory::Verbo => "verbo",
            WordCategory::Adjetivo => "adjetivo",
            WordCategory::Preposicion => "preposicion",
            WordCategory::Conjuncion => "conjuncion",
        }
    }

    /// Solo artículos y sustantivos llevan género
    pub fn is_gendered(&self) -> bool {
        matches!(self, WordCategory::Articulo | WordCategory::Sustantivo)
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Género gramatical
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    /// Artículos indefinidos y palabras sin género
    Neutral,
}

impl Gender {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" | "masculino" => Some(Gender::Masculine),
            "f" | "fem" | "feminine" | "femenino" => Some(Gender::Feminine),
            "n" | "" | "neutral" | "neutro" => Some(Gender::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculino",
            Gender::Feminine => "femenino",
            Gender::Neutral => "neutro",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normaliza una palabra: recorta espacios, pasa a mayúsculas y quita tildes.
/// La Ñ se conserva porque es una letra propia del alfabeto.
pub fn normalize(word: &str) -> String {
    word.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(ch: char) -> char {
    match ch {
        'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        other => other,
    }
}

/// Información de una palabra en el índice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub category: WordCategory,
    pub gender: Gender,
}

/// Vocabulario inmutable
#[derive(Debug, Clone)]
pub struct Vocabulary {
    lists: BTreeMap<(WordCategory, Gender), Vec<String>>,
    index: HashMap<String, Entry>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// Vocabulario español incorporado
    pub fn spanish() -> Self {
        crate::languages::spanish::builtin_vocabulary().build()
    }

    /// Entrada de una palabra (normaliza la consulta)
    pub fn entry(&self, word: &str) -> Option<Entry> {
        self.index.get(&normalize(word)).copied()
    }

    pub fn category_of(&self, word: &str) -> Option<WordCategory> {
        self.entry(word).map(|e| e.category)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&normalize(word))
    }

    /// Todas las palabras de todas las listas, en orden de precedencia.
    /// Una palabra presente en dos listas aparece dos veces.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lists.values().flatten().map(String::as_str)
    }

    /// Palabras de una categoría (todas sus listas de género)
    pub fn words_of(&self, category: WordCategory) -> impl Iterator<Item = &str> {
        self.lists
            .range((category, Gender::Masculine)..=(category, Gender::Neutral))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
    }

    /// Lista concreta de una categoría y género
    pub fn list(&self, category: WordCategory, gender: Gender) -> &[String] {
        self.lists
            .get(&(category, gender))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Número de palabras distintas
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Constructor de vocabulario
#[derive(Debug, Default, Clone)]
pub struct VocabularyBuilder {
    lists: BTreeMap<(WordCategory, Gender), Vec<String>>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade una palabra. Las categorías sin género se guardan como neutras.
    pub fn add(&mut self, category: WordCategory, gender: Gender, word: &str) -> &mut Self {
        let word = normalize(word);
        if word.is_empty() {
            return self;
        }
        let gender = if category.is_gendered() {
            gender
        } else {
            Gender::Neutral
        };
        let list = self.lists.entry((category, gender)).or_default();
        if !list.contains(&word) {
            list.push(word);
        }
        self
    }

    pub fn extend<'a, I>(&mut self, category: WordCategory, gender: Gender, words: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.add(category, gender, word);
        }
        self
    }

    pub fn build(self) -> Vocabulary {
        let mut index: HashMap<String, Entry> = HashMap::new();

        for (&(category, gender), words) in &self.lists {
            for word in words {
                match index.get(word) {
                    Some(existing) => {
                        tracing::debug!(
                            palabra = %word,
                            conservada = %existing.category,
                            descartada = %category,
                            "palabra en varias categorías"
                        );
                    }
                    None => {
                        index.insert(word.clone(), Entry { category, gender });
                    }
                }
            }
        }

        tracing::debug!(palabras = index.len(), listas = self.lists.len(), "vocabulario construido");

        Vocabulary {
            lists: self.lists,
            index,
        }
    }
}
