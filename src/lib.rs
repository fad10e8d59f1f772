//! Gramática - Reconocimiento de palabras y análisis sintáctico de oraciones
//!
//! Proporciona un autómata finito con forma de Trie sobre un vocabulario
//! categorizado, una gramática libre de contexto con analizador de retroceso,
//! validación de concordancia de género y un autómata secuencial de oraciones.

pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod grammar;
pub mod languages;

pub use analyzer::{Analyzer, SentenceReport};
pub use config::Config;
pub use error::{Error, Result};
