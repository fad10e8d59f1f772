//! Constructor incremental de oraciones Artículo → Sustantivo → Verbo
//!
//! Combina el autómata secuencial con la concordancia de género: el primer
//! artículo fija el género y el sustantivo debe concordar con él. Un artículo
//! recibido a mitad de oración reinicia la oración con ese artículo.

use serde::Serialize;

use super::agreement::GenderAgreementValidator;
use super::sequence::{SentenceState, SequentialSentenceAutomaton};
use crate::dictionary::{normalize, Gender, WordCategory};

/// Resultado de añadir una palabra
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderStep {
    pub accepted: bool,
    /// La palabra reinició la oración
    pub restarted: bool,
    pub complete: bool,
    pub state: SentenceState,
    pub message: String,
}

#[derive(Debug)]
pub struct SentenceBuilder<'a> {
    automaton: &'a SequentialSentenceAutomaton,
    agreement: &'a GenderAgreementValidator,
    state: SentenceState,
    article: Option<String>,
    noun: Option<String>,
    verb: Option<String>,
    gender: Option<Gender>,
    completed: usize,
}

impl<'a> SentenceBuilder<'a> {
    pub fn new(
        automaton: &'a SequentialSentenceAutomaton,
        agreement: &'a GenderAgreementValidator,
    ) -> Self {
        Self {
            automaton,
            agreement,
            state: automaton.reset(),
            article: None,
            noun: None,
            verb: None,
            gender: None,
            completed: 0,
        }
    }

    /// Añade una palabra ya clasificada
    pub fn push(&mut self, word: &str, category: WordCategory) -> BuilderStep {
        // Una oración completa deja paso a la siguiente
        if self.state == SentenceState::Final {
            self.clear();
        }

        let word = normalize(word);

        if category == WordCategory::Sustantivo && self.state == SentenceState::ArticleSeen {
            if let Some(ref article) = self.article {
                if !self.agreement.agrees(article, &word) {
                    let message = format!(
                        "Concordancia incorrecta: \"{}\" no concuerda con \"{}\"",
                        article, word
                    );
                    return self.rejected(message);
                }
            }
        }

        let step = self.automaton.step(category, self.state);
        if step.success {
            let message = match category {
                WordCategory::Articulo => {
                    let gender = self.set_article(word);
                    format!("Artículo agregado ({}). Esperando sustantivo...", gender)
                }
                WordCategory::Sustantivo => {
                    self.noun = Some(word);
                    "Sustantivo agregado. Esperando verbo...".to_string()
                }
                _ => {
                    self.verb = Some(word);
                    "¡Oración completa!".to_string()
                }
            };
            self.state = step.new_state;
            if step.is_complete {
                self.completed += 1;
                tracing::debug!(oracion = ?self.sentence(), "oración completa");
            }
            return BuilderStep {
                accepted: true,
                restarted: false,
                complete: step.is_complete,
                state: self.state,
                message,
            };
        }

        let mid_sentence = matches!(
            self.state,
            SentenceState::ArticleSeen | SentenceState::NounSeen
        );
        if category == WordCategory::Articulo && mid_sentence {
            self.clear();
            let gender = self.set_article(word);
            self.state = self.automaton.step(category, self.state).new_state;
            return BuilderStep {
                accepted: true,
                restarted: true,
                complete: false,
                state: self.state,
                message: format!("Nuevo artículo ({}). Esperando sustantivo...", gender),
            };
        }

        self.rejected(step.message)
    }

    fn set_article(&mut self, word: String) -> Gender {
        let gender = self.agreement.gender_of_determiner(&word);
        self.article = Some(word);
        self.gender = Some(gender);
        gender
    }

    fn rejected(&self, message: String) -> BuilderStep {
        BuilderStep {
            accepted: false,
            restarted: false,
            complete: false,
            state: self.state,
            message,
        }
    }

    fn clear(&mut self) {
        self.state = self.automaton.reset();
        self.article = None;
        self.noun = None;
        self.verb = None;
        self.gender = None;
    }

    /// Descarta la oración en curso. El contador de oraciones se conserva.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Qué se espera a continuación
    pub fn hint(&self) -> String {
        match self.state {
            SentenceState::Initial => "Esperando artículo (EL, LA, UN, UNA...)".to_string(),
            SentenceState::ArticleSeen => match (&self.article, self.gender) {
                (Some(article), Some(gender)) => {
                    let examples = self.agreement.compatible_nouns(article);
                    let examples: Vec<&str> = examples.into_iter().take(3).collect();
                    format!("Esperando sustantivo {} ({}...)", gender, examples.join(", "))
                }
                _ => "Esperando sustantivo".to_string(),
            },
            SentenceState::NounSeen => "Esperando verbo".to_string(),
            SentenceState::Final => "Oración completa".to_string(),
        }
    }

    /// Oración terminada, si la hay
    pub fn sentence(&self) -> Option<String> {
        match (&self.article, &self.noun, &self.verb) {
            (Some(a), Some(n), Some(v)) => Some(format!("{} {} {}", a, n, v)),
            _ => None,
        }
    }

    pub fn state(&self) -> SentenceState {
        self.state
    }

    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }

    pub fn noun(&self) -> Option<&str> {
        self.noun.as_deref()
    }

    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn completed(&self) -> usize {
        self.completed
    }
}
