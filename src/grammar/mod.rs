//! Motor de gramática
//!
//! Gramática libre de contexto, analizador con retroceso, concordancia de
//! género y autómata secuencial de oraciones.

pub mod agreement;
pub mod builder;
pub mod parser;
pub mod rules;
pub mod sequence;
pub mod token;

pub use agreement::{AgreementMismatch, GenderAgreementValidator};
pub use builder::{BuilderStep, SentenceBuilder};
pub use parser::{ParseError, ParseNode, ParseResult, SentenceParser};
pub use rules::{Grammar, GrammarStats, NonTerminal, Symbol};
pub use sequence::{SentenceState, SequentialSentenceAutomaton, StepResult};
pub use token::Token;
