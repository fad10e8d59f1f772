//! Gramática libre de contexto
//!
//! Tabla fija de reglas de producción. Las alternativas de cada no terminal
//! se guardan en el orden en que el analizador las prueba.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use super::parser::ParseNode;
use crate::dictionary::WordCategory;

/// Símbolo no terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NonTerminal {
    Sentence,
    NounPhrase,
    VerbPhrase,
    Determiner,
    Noun,
    Verb,
    Adjective,
    Preposition,
    Conjunction,
}

impl NonTerminal {
    pub fn label(&self) -> &'static str {
        match self {
            NonTerminal::Sentence => "S",
            NonTerminal::NounPhrase => "NP",
            NonTerminal::VerbPhrase => "VP",
            NonTerminal::Determiner => "DET",
            NonTerminal::Noun => "NOUN",
            NonTerminal::Verb => "VERB",
            NonTerminal::Adjective => "ADJ",
            NonTerminal::Preposition => "PREP",
            NonTerminal::Conjunction => "CONJ",
        }
    }

    /// Preterminal que envuelve una categoría
    pub fn preterminal(category: WordCategory) -> Self {
        match category {
            WordCategory::Articulo => NonTerminal::Determiner,
            WordCategory::Sustantivo => NonTerminal::Noun,
            WordCategory::Verbo => NonTerminal::Verb,
            WordCategory::Adjetivo => NonTerminal::Adjective,
            WordCategory::Preposicion => NonTerminal::Preposition,
            WordCategory::Conjuncion => NonTerminal::Conjunction,
        }
    }

    /// Categoría que envuelve un no terminal preterminal
    pub fn terminal(&self) -> Option<WordCategory> {
        match self {
            NonTerminal::Determiner => Some(WordCategory::Articulo),
            NonTerminal::Noun => Some(WordCategory::Sustantivo),
            NonTerminal::Verb => Some(WordCategory::Verbo),
            NonTerminal::Adjective => Some(WordCategory::Adjetivo),
            NonTerminal::Preposition => Some(WordCategory::Preposicion),
            NonTerminal::Conjunction => Some(WordCategory::Conjuncion),
            NonTerminal::Sentence | NonTerminal::NounPhrase | NonTerminal::VerbPhrase => None,
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Símbolo de la gramática
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    NonTerminal(NonTerminal),
    Terminal(WordCategory),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
            Symbol::Terminal(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrammarStats {
    pub rule_count: usize,
    pub alternative_count: usize,
    pub terminal_count: usize,
    pub nonterminal_count: usize,
}

/// Gramática de oraciones
#[derive(Debug, Clone)]
pub struct Grammar {
    start: NonTerminal,
    rules: BTreeMap<NonTerminal, Vec<Vec<Symbol>>>,
}

impl Grammar {
    pub fn new() -> Self {
        use NonTerminal::*;
        let nt = Symbol::NonTerminal;

        let mut rules = BTreeMap::new();
        rules.insert(
            Sentence,
            vec![
                vec![nt(NounPhrase), nt(VerbPhrase)],
                vec![nt(NounPhrase), nt(VerbPhrase), nt(Preposition), nt(NounPhrase)],
                vec![nt(NounPhrase), nt(Conjunction), nt(NounPhrase), nt(VerbPhrase)],
                vec![nt(NounPhrase), nt(VerbPhrase), nt(Adjective)],
            ],
        );
        rules.insert(
            NounPhrase,
            vec![
                vec![nt(Determiner), nt(Noun)],
                vec![nt(Determiner), nt(Noun), nt(Adjective)],
                vec![nt(Determiner), nt(Adjective), nt(Noun)],
            ],
        );
        rules.insert(
            VerbPhrase,
            vec![
                vec![nt(Verb)],
                vec![nt(Verb), nt(NounPhrase)],
                vec![nt(Verb), nt(Adjective)],
            ],
        );
        for preterminal in [Determiner, Noun, Verb, Adjective, Preposition, Conjunction] {
            if let Some(category) = preterminal.terminal() {
                rules.insert(preterminal, vec![vec![Symbol::Terminal(category)]]);
            }
        }

        Self {
            start: Sentence,
            rules,
        }
    }

    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// Alternativas de un no terminal, en orden de prueba
    pub fn alternatives(&self, lhs: NonTerminal) -> &[Vec<Symbol>] {
        self.rules.get(&lhs).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = NonTerminal> + '_ {
        self.rules.keys().copied()
    }

    pub fn terminals(&self) -> BTreeSet<WordCategory> {
        self.rules
            .values()
            .flatten()
            .flatten()
            .filter_map(|symbol| match symbol {
                Symbol::Terminal(category) => Some(*category),
                Symbol::NonTerminal(_) => None,
            })
            .collect()
    }

    /// ¿Es `rhs` una de las alternativas de `lhs`?
    pub fn derives(&self, lhs: NonTerminal, rhs: &[Symbol]) -> bool {
        self.alternatives(lhs).iter().any(|alt| alt.as_slice() == rhs)
    }

    /// Verifica que cada nodo del árbol corresponde a una producción
    pub fn conforms(&self, node: &ParseNode) -> bool {
        if node.children.is_empty() {
            return match (node.symbol.terminal(), &node.value) {
                (Some(category), Some(_)) => {
                    self.derives(node.symbol, &[Symbol::Terminal(category)])
                }
                _ => false,
            };
        }

        let rhs: Vec<Symbol> = node
            .children
            .iter()
            .map(|child| Symbol::NonTerminal(child.symbol))
            .collect();
        self.derives(node.symbol, &rhs) && node.children.iter().all(|c| self.conforms(c))
    }

    pub fn stats(&self) -> GrammarStats {
        GrammarStats {
            rule_count: self.rules.len(),
            alternative_count: self.rules.values().map(Vec::len).sum(),
            terminal_count: self.terminals().len(),
            nonterminal_count: self.rules.len(),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (lhs, alternatives) in &self.rules {
            let rendered: Vec<String> = alternatives
                .iter()
                .map(|alt| {
                    alt.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            writeln!(f, "{} -> {}", lhs, rendered.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_stats() {
        let grammar = Grammar::new();
        let stats = grammar.stats();

        assert_eq!(stats.rule_count, 9);
        assert_eq!(stats.nonterminal_count, 9);
        assert_eq!(stats.terminal_count, 6);
        assert_eq!(stats.alternative_count, 4 + 3 + 3 + 6);
    }

    #[test]
    fn test_alternative_order() {
        let grammar = Grammar::new();
        let sentence = grammar.alternatives(NonTerminal::Sentence);

        assert_eq!(
            sentence[0],
            vec![
                Symbol::NonTerminal(NonTerminal::NounPhrase),
                Symbol::NonTerminal(NonTerminal::VerbPhrase)
            ]
        );
        assert_eq!(sentence[2][1], Symbol::NonTerminal(NonTerminal::Conjunction));
    }

    #[test]
    fn test_terminals_never_on_left() {
        let grammar = Grammar::new();
        assert!(grammar
            .nonterminals()
            .all(|nt| !grammar.alternatives(nt).is_empty()));
        assert_eq!(grammar.terminals().len(), WordCategory::ALL.len());
    }

    #[test]
    fn test_display() {
        let rendered = Grammar::new().to_string();
        assert!(rendered.contains("S -> NP VP | NP VP PREP NP | NP CONJ NP VP | NP VP ADJ"));
        assert!(rendered.contains("DET -> articulo"));
    }
}
