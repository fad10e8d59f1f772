//! Motor principal de análisis
//!
//! Reúne vocabulario, autómata de palabras, analizador sintáctico,
//! concordancia y autómata secuencial en una sola instancia.

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::dictionary::{Vocabulary, VocabularyLoader, WordTrieAutomaton};
use crate::error::{Error, Result};
use crate::grammar::{
    AgreementMismatch, GenderAgreementValidator, ParseResult, SentenceBuilder, SentenceParser,
    SequentialSentenceAutomaton, Token,
};
use crate::languages::get_language;

/// Informe de una oración: estructura y concordancia
#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    pub tokens: Vec<Token>,
    pub parse: ParseResult,
    pub agreement: Vec<AgreementMismatch>,
}

impl SentenceReport {
    /// Válida si la estructura es correcta y todo concuerda
    pub fn is_valid(&self) -> bool {
        self.parse.valid && self.agreement.is_empty()
    }

    /// Todos los mensajes de error
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.parse.messages();
        messages.extend(self.agreement.iter().map(ToString::to_string));
        messages
    }
}

/// Motor principal del analizador
pub struct Analyzer {
    vocabulary: Arc<Vocabulary>,
    automaton: WordTrieAutomaton,
    parser: SentenceParser,
    agreement: GenderAgreementValidator,
    sequence: SequentialSentenceAutomaton,
    check_agreement: bool,
}

impl Analyzer {
    /// Crea una nueva instancia del analizador
    pub fn new(config: &Config) -> Result<Self> {
        let language = get_language(&config.language)
            .ok_or_else(|| Error::UnsupportedLanguage(config.language.clone()))?;

        let mut builder = language.vocabulary();
        if let Some(ref path) = config.vocabulary_file {
            VocabularyLoader::append_from_file(&mut builder, path)?;
        }

        tracing::debug!(idioma = language.code(), "analizador inicializado");

        let mut analyzer = Self::with_vocabulary(builder.build());
        analyzer.check_agreement = config.check_agreement;
        Ok(analyzer)
    }

    /// Crea el analizador sobre un vocabulario ya construido
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        let vocabulary = Arc::new(vocabulary);
        Self {
            automaton: WordTrieAutomaton::new(Arc::clone(&vocabulary)),
            agreement: GenderAgreementValidator::new(Arc::clone(&vocabulary)),
            parser: SentenceParser::new(),
            sequence: SequentialSentenceAutomaton::new(),
            check_agreement: true,
            vocabulary,
        }
    }

    /// Clasifica cada palabra con el autómata
    pub fn tokenize<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Token>> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let recognition = self.automaton.recognize(word.as_ref());
                match (recognition.accepted, recognition.category) {
                    (true, Some(category)) => Ok(Token::new(word.as_ref(), category)),
                    _ => Err(Error::UnknownWord {
                        word: word.as_ref().to_string(),
                        position,
                    }),
                }
            })
            .collect()
    }

    /// Analiza una oración: estructura y, si está activada, concordancia
    pub fn analyze<S: AsRef<str>>(&self, words: &[S]) -> Result<SentenceReport> {
        let tokens = self.tokenize(words)?;
        Ok(self.analyze_tokens(tokens))
    }

    /// Analiza tokens ya clasificados
    pub fn analyze_tokens(&self, tokens: Vec<Token>) -> SentenceReport {
        let parse = self.parser.parse(&tokens);
        let agreement = match parse.tree {
            Some(ref tree) if self.check_agreement => self.agreement.check_tree(tree),
            _ => Vec::new(),
        };

        SentenceReport {
            tokens,
            parse,
            agreement,
        }
    }

    /// Constructor incremental ligado a este analizador
    pub fn sentence_builder(&self) -> SentenceBuilder<'_> {
        SentenceBuilder::new(&self.sequence, &self.agreement)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn automaton(&self) -> &WordTrieAutomaton {
        &self.automaton
    }

    pub fn parser(&self) -> &SentenceParser {
        &self.parser
    }

    pub fn agreement(&self) -> &GenderAgreementValidator {
        &self.agreement
    }

    pub fn sequence(&self) -> &SequentialSentenceAutomaton {
        &self.sequence
    }
}
