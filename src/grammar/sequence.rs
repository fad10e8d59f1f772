//! Autómata secuencial de oraciones: Artículo → Sustantivo → Verbo
//!
//! No guarda estado propio; quien llama conserva el `SentenceState` y lo
//! pasa en cada paso.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::dictionary::WordCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SentenceState {
    #[default]
    Initial,
    ArticleSeen,
    NounSeen,
    Final,
}

impl SentenceState {
    pub const ALL: [SentenceState; 4] = [
        SentenceState::Initial,
        SentenceState::ArticleSeen,
        SentenceState::NounSeen,
        SentenceState::Final,
    ];

    /// Categoría que espera el estado
    pub fn expected(&self) -> Option<WordCategory> {
        match self {
            SentenceState::Initial => Some(WordCategory::Articulo),
            SentenceState::ArticleSeen => Some(WordCategory::Sustantivo),
            SentenceState::NounSeen => Some(WordCategory::Verbo),
            SentenceState::Final => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SentenceState::Initial => "INICIAL",
            SentenceState::ArticleSeen => "ARTICULO",
            SentenceState::NounSeen => "SUSTANTIVO",
            SentenceState::Final => "FINAL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SentenceState::Initial => "Esperando artículo",
            SentenceState::ArticleSeen => "Artículo recibido, esperando sustantivo",
            SentenceState::NounSeen => "Sustantivo recibido, esperando verbo",
            SentenceState::Final => "Oración completa",
        }
    }
}

impl fmt::Display for SentenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resultado de un paso del autómata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    pub success: bool,
    pub new_state: SentenceState,
    pub is_complete: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SequentialSentenceAutomaton {
    transitions: HashMap<(SentenceState, WordCategory), SentenceState>,
}

impl SequentialSentenceAutomaton {
    pub fn new() -> Self {
        let transitions = HashMap::from([
            (
                (SentenceState::Initial, WordCategory::Articulo),
                SentenceState::ArticleSeen,
            ),
            (
                (SentenceState::ArticleSeen, WordCategory::Sustantivo),
                SentenceState::NounSeen,
            ),
            (
                (SentenceState::NounSeen, WordCategory::Verbo),
                SentenceState::Final,
            ),
        ]);
        Self { transitions }
    }

    /// Avanza un paso desde `current`. Una transición no definida deja el
    /// estado sin cambios.
    pub fn step(&self, category: WordCategory, current: SentenceState) -> StepResult {
        match self.transitions.get(&(current, category)) {
            Some(&next) => StepResult {
                success: true,
                new_state: next,
                is_complete: next == SentenceState::Final,
                message: next.description().to_string(),
            },
            None => {
                let message = match current.expected() {
                    Some(expected) => {
                        format!("Error: se esperaba {}, pero se recibió {}", expected, category)
                    }
                    None => format!("Error: la oración ya está completa, se recibió {}", category),
                };
                StepResult {
                    success: false,
                    new_state: current,
                    is_complete: false,
                    message,
                }
            }
        }
    }

    pub fn reset(&self) -> SentenceState {
        SentenceState::Initial
    }

    pub fn state_count(&self) -> usize {
        SentenceState::ALL.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl Default for SequentialSentenceAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
