//! Analizador sintáctico descendente recursivo con retroceso
//!
//! Cada no terminal tiene un manejador que avanza un cursor sobre los tokens
//! y devuelve el nodo reconocido o un `ParseError`. Quien llama decide si
//! prueba otra alternativa; antes de hacerlo restaura el cursor. El cursor y
//! los errores viven en la llamada a `parse`, nunca en el analizador.
//!
//! La concordancia de género no se verifica aquí: esta capa solo comprueba
//! estructura. Ver `GenderAgreementValidator::check_tree`.

use std::fmt;

use serde::{Serialize, Serializer};

use super::rules::{Grammar, NonTerminal};
use super::token::Token;
use crate::dictionary::WordCategory;

/// Nodo del árbol sintáctico
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    pub symbol: NonTerminal,
    /// Palabra de las hojas
    pub value: Option<String>,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(symbol: NonTerminal, word: &str) -> Self {
        Self {
            symbol,
            value: Some(word.to_string()),
            children: Vec::new(),
        }
    }

    pub fn branch(symbol: NonTerminal, children: Vec<ParseNode>) -> Self {
        Self {
            symbol,
            value: None,
            children,
        }
    }

    /// Primer hijo con el símbolo dado
    pub fn child(&self, symbol: NonTerminal) -> Option<&ParseNode> {
        self.children.iter().find(|c| c.symbol == symbol)
    }

    /// Árbol indentado, un nodo por línea
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, level: usize, out: &mut String) {
        out.push_str(&"  ".repeat(level));
        out.push_str(self.symbol.label());
        if let Some(ref value) = self.value {
            out.push_str(&format!(" -> \"{}\"", value));
        }
        out.push('\n');
        for child in &self.children {
            child.render_into(level + 1, out);
        }
    }

    /// Forma compacta: `S(NP(DET EL, NOUN GATO), VP(VERB COME))`
    pub fn bracketed(&self) -> String {
        match self.value {
            Some(ref value) => format!("{} {}", self.symbol, value),
            None => {
                let children: Vec<String> = self.children.iter().map(|c| c.bracketed()).collect();
                format!("{}({})", self.symbol, children.join(", "))
            }
        }
    }

    /// Palabras de las hojas, de izquierda a derecha
    pub fn words(&self) -> Vec<&str> {
        match self.value {
            Some(ref value) => vec![value.as_str()],
            None => self.children.iter().flat_map(|c| c.words()).collect(),
        }
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bracketed())
    }
}

/// Fallo estructural
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("se esperaba {expected} pero se alcanzó el final de la oración")]
    UnexpectedEnd { expected: WordCategory },

    #[error("se esperaba {expected} pero se encontró {found} ({word})")]
    UnexpectedToken {
        expected: WordCategory,
        found: WordCategory,
        word: String,
    },

    #[error("error analizando SN: {0}")]
    NounPhrase(Box<ParseError>),

    #[error("no se pudo analizar la oración. Errores: {first}, {second}")]
    NoProduction {
        first: Box<ParseError>,
        second: Box<ParseError>,
    },

    #[error("tokens no consumidos: {}", words.join(" "))]
    Unconsumed { words: Vec<String> },
}

impl Serialize for ParseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Resultado del análisis de una oración
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub valid: bool,
    pub tree: Option<ParseNode>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Cursor sobre el flujo de tokens
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek_category(&self) -> Option<WordCategory> {
        self.tokens.get(self.pos).map(|t| t.category)
    }

    fn remaining(&self) -> &'a [Token] {
        let tokens = self.tokens;
        &tokens[self.pos.min(tokens.len())..]
    }

    /// Consume un token de la categoría esperada como hoja preterminal
    fn expect(&mut self, expected: WordCategory) -> Result<ParseNode, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEnd { expected })?;

        if !token.is(expected) {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: token.category,
                word: token.word.clone(),
            });
        }

        self.pos += 1;
        Ok(ParseNode::leaf(NonTerminal::preterminal(expected), &token.word))
    }
}

/// Analizador de oraciones
#[derive(Debug, Clone, Default)]
pub struct SentenceParser {
    grammar: Grammar,
}

impl SentenceParser {
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new(),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Analiza una secuencia de tokens ya clasificados
    pub fn parse(&self, tokens: &[Token]) -> ParseResult {
        let mut cursor = Cursor::new(tokens);

        let tree = match Self::sentence(&mut cursor) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::trace!(error = %err, "oración rechazada");
                return ParseResult {
                    valid: false,
                    tree: None,
                    errors: vec![err],
                };
            }
        };

        let remaining = cursor.remaining();
        if !remaining.is_empty() {
            let words = remaining.iter().map(|t| t.word.clone()).collect();
            return ParseResult {
                valid: false,
                tree: None,
                errors: vec![ParseError::Unconsumed { words }],
            };
        }

        debug_assert!(self.grammar.conforms(&tree));
        ParseResult {
            valid: true,
            tree: Some(tree),
            errors: Vec::new(),
        }
    }

    /// S -> NP VP [PREP NP | ADJ] | NP CONJ NP VP
    fn sentence(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let checkpoint = cursor.pos;

        let first = match Self::predicate_sentence(cursor) {
            Ok(node) => return Ok(node),
            Err(err) => err,
        };
        tracing::trace!(error = %first, "S -> NP VP falló, probando NP CONJ NP VP");

        cursor.pos = checkpoint;
        Self::coordinated_sentence(cursor).map_err(|second| {
            cursor.pos = checkpoint;
            ParseError::NoProduction {
                first: Box::new(first),
                second: Box::new(second),
            }
        })
    }

    /// NP VP, ampliada con PREP NP o ADJ según el siguiente token
    fn predicate_sentence(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let subject = Self::noun_phrase(cursor)?;
        let predicate = Self::verb_phrase(cursor)?;
        let mut children = vec![subject, predicate];

        match cursor.peek_category() {
            Some(WordCategory::Preposicion) => {
                let checkpoint = cursor.pos;
                match Self::prepositional_tail(cursor) {
                    Ok(mut tail) => children.append(&mut tail),
                    Err(err) => {
                        tracing::trace!(error = %err, "complemento PREP NP descartado");
                        cursor.pos = checkpoint;
                    }
                }
            }
            Some(WordCategory::Adjetivo) => children.push(cursor.expect(WordCategory::Adjetivo)?),
            _ => {}
        }

        Ok(ParseNode::branch(NonTerminal::Sentence, children))
    }

    fn prepositional_tail(cursor: &mut Cursor) -> Result<Vec<ParseNode>, ParseError> {
        let preposition = cursor.expect(WordCategory::Preposicion)?;
        let object = Self::noun_phrase(cursor)?;
        Ok(vec![preposition, object])
    }

    /// NP CONJ NP VP
    fn coordinated_sentence(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let first = Self::noun_phrase(cursor)?;
        let conjunction = cursor.expect(WordCategory::Conjuncion)?;
        let second = Self::noun_phrase(cursor)?;
        let predicate = Self::verb_phrase(cursor)?;
        Ok(ParseNode::branch(
            NonTerminal::Sentence,
            vec![first, conjunction, second, predicate],
        ))
    }

    /// NP -> DET NOUN | DET NOUN ADJ | DET ADJ NOUN
    fn noun_phrase(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let checkpoint = cursor.pos;
        Self::noun_phrase_body(cursor).map_err(|err| {
            cursor.pos = checkpoint;
            ParseError::NounPhrase(Box::new(err))
        })
    }

    fn noun_phrase_body(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let determiner = cursor.expect(WordCategory::Articulo)?;

        let children = if cursor.peek_category() == Some(WordCategory::Adjetivo) {
            let adjective = cursor.expect(WordCategory::Adjetivo)?;
            let noun = cursor.expect(WordCategory::Sustantivo)?;
            vec![determiner, adjective, noun]
        } else {
            let noun = cursor.expect(WordCategory::Sustantivo)?;
            let mut children = vec![determiner, noun];
            if cursor.peek_category() == Some(WordCategory::Adjetivo) {
                children.push(cursor.expect(WordCategory::Adjetivo)?);
            }
            children
        };

        Ok(ParseNode::branch(NonTerminal::NounPhrase, children))
    }

    /// VP -> VERB | VERB NP | VERB ADJ
    fn verb_phrase(cursor: &mut Cursor) -> Result<ParseNode, ParseError> {
        let verb = cursor.expect(WordCategory::Verbo)?;
        let mut children = vec![verb];

        match cursor.peek_category() {
            Some(WordCategory::Articulo) => {
                let checkpoint = cursor.pos;
                match Self::noun_phrase(cursor) {
                    Ok(object) => children.push(object),
                    Err(err) => {
                        tracing::trace!(error = %err, "objeto NP descartado, VP -> VERB");
                        cursor.pos = checkpoint;
                    }
                }
            }
            Some(WordCategory::Adjetivo) => children.push(cursor.expect(WordCategory::Adjetivo)?),
            _ => {}
        }

        Ok(ParseNode::branch(NonTerminal::VerbPhrase, children))
    }
}
