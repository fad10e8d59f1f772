//! Concordancia de género entre determinante y sustantivo

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::parser::ParseNode;
use super::rules::NonTerminal;
use crate::dictionary::{normalize, Gender, Vocabulary, WordCategory};

/// Determinante y sustantivo que no concuerdan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgreementMismatch {
    pub determiner: String,
    pub noun: String,
    pub determiner_gender: Gender,
    pub noun_gender: Gender,
}

impl fmt::Display for AgreementMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "concordancia incorrecta: \"{}\" ({}) no concuerda con \"{}\" ({})",
            self.determiner, self.determiner_gender, self.noun, self.noun_gender
        )
    }
}

/// Validador de concordancia de género
#[derive(Debug, Clone)]
pub struct GenderAgreementValidator {
    vocabulary: Arc<Vocabulary>,
}

impl GenderAgreementValidator {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Género de un determinante. Los indefinidos, y cualquier palabra que no
    /// sea artículo, son neutros.
    pub fn gender_of_determiner(&self, word: &str) -> Gender {
        self.gender_within(word, WordCategory::Articulo)
    }

    /// Género de un sustantivo, neutro si no es un sustantivo conocido
    pub fn gender_of_noun(&self, word: &str) -> Gender {
        self.gender_within(word, WordCategory::Sustantivo)
    }

    fn gender_within(&self, word: &str, category: WordCategory) -> Gender {
        match self.vocabulary.entry(word) {
            Some(entry) if entry.category == category => entry.gender,
            _ => Gender::Neutral,
        }
    }

    /// ¿Concuerdan determinante y sustantivo?
    pub fn agrees(&self, determiner: &str, noun: &str) -> bool {
        match self.gender_of_determiner(determiner) {
            Gender::Neutral => true,
            gender => gender == self.gender_of_noun(noun),
        }
    }

    /// Sustantivos que admite un determinante, en orden del vocabulario
    pub fn compatible_nouns(&self, determiner: &str) -> Vec<&str> {
        let gender = self.gender_of_determiner(determiner);
        let mut seen = HashSet::new();

        self.vocabulary
            .words_of(WordCategory::Sustantivo)
            .filter(|noun| match self.vocabulary.entry(noun) {
                Some(entry) if entry.category == WordCategory::Sustantivo => {
                    gender == Gender::Neutral || entry.gender == gender
                }
                _ => false,
            })
            .filter(|noun| seen.insert(*noun))
            .collect()
    }

    /// Comprueba la concordancia de cada sintagma nominal de un árbol
    pub fn check_tree(&self, node: &ParseNode) -> Vec<AgreementMismatch> {
        let mut mismatches = Vec::new();
        self.collect_mismatches(node, &mut mismatches);
        mismatches
    }

    fn collect_mismatches(&self, node: &ParseNode, mismatches: &mut Vec<AgreementMismatch>) {
        if node.symbol == NonTerminal::NounPhrase {
            let determiner = node
                .child(NonTerminal::Determiner)
                .and_then(|n| n.value.as_deref());
            let noun = node.child(NonTerminal::Noun).and_then(|n| n.value.as_deref());

            if let (Some(determiner), Some(noun)) = (determiner, noun) {
                if !self.agrees(determiner, noun) {
                    tracing::debug!(determinante = determiner, sustantivo = noun, "sin concordancia");
                    mismatches.push(AgreementMismatch {
                        determiner: normalize(determiner),
                        noun: normalize(noun),
                        determiner_gender: self.gender_of_determiner(determiner),
                        noun_gender: self.gender_of_noun(noun),
                    });
                }
            }
        }

        for child in &node.children {
            self.collect_mismatches(child, mismatches);
        }
    }
}
