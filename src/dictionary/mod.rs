//! Módulo de diccionario
//!
//! Vocabulario categorizado y autómata de reconocimiento de palabras.

pub mod loader;
pub mod trie;
pub mod vocabulary;

pub use loader::VocabularyLoader;
pub use trie::{AutomatonStats, PrefixCheck, Recognition, StateId, WordTrieAutomaton};
pub use vocabulary::{normalize, Entry, Gender, Vocabulary, VocabularyBuilder, WordCategory};
