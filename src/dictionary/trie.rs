//! Autómata finito determinista con forma de Trie
//!
//! Cada palabra del vocabulario es un camino desde el estado 0; los caminos
//! solo se comparten en prefijos comunes. Los estados se crean al insertar y
//! nunca se eliminan, y tras la construcción el autómata es de solo lectura.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::vocabulary::{normalize, Vocabulary, WordCategory};

/// Identificador de estado
pub type StateId = usize;

/// Estado inicial
pub const INITIAL_STATE: StateId = 0;

#[derive(Debug, Default)]
struct State {
    transitions: BTreeMap<char, StateId>,
    is_final: bool,
    word: Option<String>,
    category: Option<WordCategory>,
}

/// Resultado de reconocer una cadena completa
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recognition {
    pub accepted: bool,
    pub word: Option<String>,
    pub category: Option<WordCategory>,
    /// Estados visitados tras cada carácter consumido (sin el inicial)
    pub path: Vec<StateId>,
}

/// Resultado de verificar un prefijo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixCheck {
    pub valid: bool,
    pub path: Vec<StateId>,
    /// Caracteres con transición desde el estado alcanzado, ordenados
    pub continuations: Vec<char>,
    pub is_complete_word: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutomatonStats {
    pub state_count: usize,
    pub final_state_count: usize,
    pub transition_count: usize,
    pub word_count: usize,
}

/// Autómata de palabras
#[derive(Debug)]
pub struct WordTrieAutomaton {
    vocabulary: Arc<Vocabulary>,
    states: Vec<State>,
    final_state_count: usize,
    transition_count: usize,
    word_count: usize,
}

enum Walk {
    Landed(StateId),
    Stuck,
}

impl WordTrieAutomaton {
    /// Construye el autómata con todas las palabras del vocabulario
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        let words: Vec<String> = vocabulary.words().map(str::to_string).collect();
        Self::from_words(vocabulary, words)
    }

    /// Construye el autómata a partir de una secuencia ordenada de palabras.
    /// Las repetidas vuelven a marcar el mismo estado final.
    pub fn from_words<I, S>(vocabulary: Arc<Vocabulary>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self {
            vocabulary,
            states: vec![State::default()],
            final_state_count: 0,
            transition_count: 0,
            word_count: 0,
        };

        for word in words {
            automaton.insert(&normalize(word.as_ref()));
        }

        tracing::debug!(
            estados = automaton.states.len(),
            finales = automaton.final_state_count,
            transiciones = automaton.transition_count,
            palabras = automaton.word_count,
            "autómata de palabras construido"
        );

        automaton
    }

    fn insert(&mut self, word: &str) {
        self.word_count += 1;
        if word.is_empty() {
            return;
        }

        let mut current = INITIAL_STATE;
        for ch in word.chars() {
            current = match self.states[current].transitions.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.states.len();
                    self.states.push(State::default());
                    self.states[current].transitions.insert(ch, next);
                    self.transition_count += 1;
                    next
                }
            };
        }

        let category = self.vocabulary.category_of(word);
        let state = &mut self.states[current];
        if !state.is_final {
            state.is_final = true;
            self.final_state_count += 1;
        }
        state.word = Some(word.to_string());
        state.category = category;
    }

    /// Recorre el autómata registrando el camino
    fn walk(&self, input: &str, path: &mut Vec<StateId>) -> Walk {
        let mut current = INITIAL_STATE;
        for ch in input.chars() {
            match self.states[current].transitions.get(&ch) {
                Some(&next) => {
                    current = next;
                    path.push(next);
                }
                None => return Walk::Stuck,
            }
        }
        Walk::Landed(current)
    }

    /// Clasifica una palabra según el vocabulario
    pub fn classify(&self, word: &str) -> Option<WordCategory> {
        self.vocabulary.category_of(word)
    }

    /// Reconoce una cadena completa
    pub fn recognize(&self, input: &str) -> Recognition {
        let input = normalize(input);
        let mut path = Vec::with_capacity(input.len());

        match self.walk(&input, &mut path) {
            Walk::Landed(id) => {
                let state = &self.states[id];
                Recognition {
                    accepted: state.is_final,
                    word: state.word.clone(),
                    category: state.category,
                    path,
                }
            }
            Walk::Stuck => Recognition {
                accepted: false,
                word: None,
                category: None,
                path,
            },
        }
    }

    /// Verifica si la cadena es prefijo de alguna palabra
    pub fn check_prefix(&self, input: &str) -> PrefixCheck {
        let input = normalize(input);
        let mut path = Vec::with_capacity(input.len());

        match self.walk(&input, &mut path) {
            Walk::Landed(id) => {
                let state = &self.states[id];
                PrefixCheck {
                    valid: true,
                    path,
                    continuations: state.transitions.keys().copied().collect(),
                    is_complete_word: state.is_final,
                }
            }
            Walk::Stuck => PrefixCheck {
                valid: false,
                path,
                continuations: Vec::new(),
                is_complete_word: false,
            },
        }
    }

    /// Palabras que empiezan con un prefijo, en orden lexicográfico
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let mut path = Vec::new();
        let mut words = Vec::new();

        if let Walk::Landed(id) = self.walk(&prefix, &mut path) {
            self.collect_words(id, &mut words);
        }
        words
    }

    fn collect_words(&self, id: StateId, words: &mut Vec<String>) {
        let state = &self.states[id];
        if let Some(ref word) = state.word {
            words.push(word.clone());
        }
        for &child in state.transitions.values() {
            self.collect_words(child, words);
        }
    }

    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            state_count: self.states.len(),
            final_state_count: self.final_state_count,
            transition_count: self.transition_count,
            word_count: self.word_count,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Gender;

    fn small_automaton() -> WordTrieAutomaton {
        let mut builder = Vocabulary::builder();
        builder
            .add(WordCategory::Sustantivo, Gender::Feminine, "casa")
            .add(WordCategory::Sustantivo, Gender::Feminine, "casas")
            .add(WordCategory::Verbo, Gender::Neutral, "come")
            .add(WordCategory::Preposicion, Gender::Neutral, "con");
        WordTrieAutomaton::new(Arc::new(builder.build()))
    }

    #[test]
    fn test_recognize_word() {
        let automaton = small_automaton();
        let result = automaton.recognize("casa");

        assert!(result.accepted);
        assert_eq!(result.word.as_deref(), Some("CASA"));
        assert_eq!(result.category, Some(WordCategory::Sustantivo));
        assert_eq!(result.path.len(), 4);
    }

    #[test]
    fn test_recognize_prefix_is_not_word() {
        let automaton = small_automaton();
        let result = automaton.recognize("cas");

        assert!(!result.accepted);
        assert_eq!(result.word, None);
        assert_eq!(result.category, None);
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn test_recognize_stuck() {
        let automaton = small_automaton();
        let result = automaton.recognize("cama");

        assert!(!result.accepted);
        assert_eq!(result.path.len(), 2);
    }

    #[test]
    fn test_empty_input_not_accepted() {
        let automaton = small_automaton();
        let result = automaton.recognize("   ");

        assert!(!result.accepted);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_check_prefix_continuations() {
        let automaton = small_automaton();

        let co = automaton.check_prefix("co");
        assert!(co.valid);
        assert_eq!(co.continuations, vec!['M', 'N']);
        assert!(!co.is_complete_word);

        let casa = automaton.check_prefix("CASA");
        assert!(casa.valid);
        assert_eq!(casa.continuations, vec!['S']);
        assert!(casa.is_complete_word);

        let invalid = automaton.check_prefix("cx");
        assert!(!invalid.valid);
        assert!(invalid.continuations.is_empty());
        assert_eq!(invalid.path.len(), 1);
    }

    #[test]
    fn test_check_prefix_leaf_has_no_continuations() {
        let automaton = small_automaton();
        let casas = automaton.check_prefix("casas");

        assert!(casas.valid);
        assert!(casas.is_complete_word);
        assert!(casas.continuations.is_empty());
        assert_eq!(casas.path.len(), 5);
    }

    #[test]
    fn test_shared_prefix_states() {
        let automaton = small_automaton();
        let stats = automaton.stats();

        // raíz + C + A,S,A,S (casa/casas) + O,M,E (come) + N (con)
        assert_eq!(stats.state_count, 10);
        assert_eq!(stats.transition_count, 9);
        assert_eq!(stats.final_state_count, 4);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_duplicates_remark_same_state() {
        let vocab = Arc::new(Vocabulary::spanish());
        let automaton = WordTrieAutomaton::from_words(vocab, ["come", "COME", "corre"]);
        let stats = automaton.stats();

        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.final_state_count, 2);
        assert_eq!(automaton.recognize("come").category, Some(WordCategory::Verbo));
    }

    #[test]
    fn test_word_outside_vocabulary_has_no_category() {
        let vocab = Arc::new(Vocabulary::spanish());
        let automaton = WordTrieAutomaton::from_words(vocab, ["ZORRO"]);
        let result = automaton.recognize("zorro");

        assert!(result.accepted);
        assert_eq!(result.category, None);
    }

    #[test]
    fn test_completions() {
        let automaton = small_automaton();
        assert_eq!(automaton.completions("ca"), vec!["CASA", "CASAS"]);
        assert!(automaton.completions("x").is_empty());
    }
}
