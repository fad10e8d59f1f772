//! Tests de integración: vocabulario, autómatas, gramática y concordancia.
//!
//! Ejecutar solo estos tests:  cargo test --test sentences

use std::sync::Arc;

use gramatica::dictionary::{Vocabulary, WordCategory, WordTrieAutomaton};
use gramatica::grammar::{
    GenderAgreementValidator, NonTerminal, ParseError, SentenceParser, SentenceState,
    SequentialSentenceAutomaton, Token,
};
use gramatica::languages::spanish::words;
use gramatica::{Analyzer, Config};
use rstest::rstest;

use WordCategory::*;

fn tokens(pairs: &[(&str, WordCategory)]) -> Vec<Token> {
    pairs.iter().map(|&(w, c)| Token::new(w, c)).collect()
}

fn spanish_automaton() -> WordTrieAutomaton {
    WordTrieAutomaton::new(Arc::new(Vocabulary::spanish()))
}

#[test]
fn test_every_vocabulary_word_is_accepted_with_its_category() {
    let vocab = Vocabulary::spanish();
    let automaton = spanish_automaton();

    for word in vocab.words() {
        let result = automaton.recognize(word);
        assert!(result.accepted, "'{}' debería ser aceptada", word);
        assert_eq!(result.category, vocab.category_of(word), "categoría de '{}'", word);
        assert_eq!(result.path.len(), word.chars().count());
    }
}

#[rstest]
#[case::articulo_masculino(words::ARTICLES_MASCULINE, Articulo)]
#[case::articulo_femenino(words::ARTICLES_FEMININE, Articulo)]
#[case::articulo_indefinido(words::ARTICLES_NEUTRAL, Articulo)]
#[case::sustantivo_masculino(words::NOUNS_MASCULINE, Sustantivo)]
#[case::sustantivo_femenino(words::NOUNS_FEMININE, Sustantivo)]
#[case::verbo(words::VERBS, Verbo)]
#[case::adjetivo(words::ADJECTIVES, Adjetivo)]
#[case::preposicion(words::PREPOSITIONS, Preposicion)]
#[case::conjuncion(words::CONJUNCTIONS, Conjuncion)]
fn test_source_list_category(#[case] list: &[&str], #[case] category: WordCategory) {
    let automaton = spanish_automaton();
    for word in list {
        let result = automaton.recognize(word);
        assert!(result.accepted, "{}", word);
        assert_eq!(result.category, Some(category), "{}", word);
        assert_eq!(automaton.classify(word), Some(category), "{}", word);
    }
}

#[test]
fn test_builtin_lists_are_disjoint() {
    let vocab = Vocabulary::spanish();
    assert_eq!(vocab.words().count(), vocab.len());

    let automaton = spanish_automaton();
    let stats = automaton.stats();
    assert_eq!(stats.word_count, stats.final_state_count);
}

#[test]
fn test_extra_vocabulary_overlap_uses_precedence() {
    let mut builder = gramatica::languages::spanish::builtin_vocabulary();
    builder.add(Adjetivo, gramatica::dictionary::Gender::Neutral, "bebe");
    builder.add(Sustantivo, gramatica::dictionary::Gender::Feminine, "sale");
    let vocab = builder.build();

    assert_eq!(vocab.category_of("BEBE"), Some(Verbo));
    assert_eq!(vocab.category_of("SALE"), Some(Sustantivo));
    assert_eq!(vocab.words().count(), vocab.len() + 2);
}

#[test]
fn test_every_proper_prefix_is_valid() {
    let vocab = Vocabulary::spanish();
    let automaton = spanish_automaton();

    for word in vocab.words() {
        let chars: Vec<char> = word.chars().collect();
        for end in 1..chars.len() {
            let prefix: String = chars[..end].iter().collect();
            let check = automaton.check_prefix(&prefix);
            assert!(check.valid, "'{}' es prefijo de '{}'", prefix, word);
            assert!(check.continuations.contains(&chars[end]));
        }
    }
}

#[rstest]
#[case("GATX", 3)]
#[case("XGATO", 0)]
#[case("PEQUEÑA", 6)]
#[case("EL GATO", 2)]
fn test_invalid_character_stops_walk(#[case] input: &str, #[case] consumed: usize) {
    let automaton = spanish_automaton();

    let recognition = automaton.recognize(input);
    assert!(!recognition.accepted);
    assert_eq!(recognition.path.len(), consumed);

    let check = automaton.check_prefix(input);
    assert!(!check.valid);
    assert_eq!(check.path.len(), consumed);
}

#[test]
fn test_accents_and_case_are_normalized() {
    let automaton = spanish_automaton();
    let result = automaton.recognize("  está ");

    assert!(result.accepted);
    assert_eq!(result.word.as_deref(), Some("ESTA"));
    assert_eq!(result.category, Some(Verbo));
    assert!(automaton.recognize("pequeño").accepted);
}

#[test]
fn test_classify_is_stable() {
    let automaton = spanish_automaton();
    let first: Vec<_> = ["el", "casa", "xyz", "porque"]
        .iter()
        .map(|w| automaton.classify(w))
        .collect();
    for _ in 0..3 {
        let again: Vec<_> = ["el", "casa", "xyz", "porque"]
            .iter()
            .map(|w| automaton.classify(w))
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(first, vec![Some(Articulo), Some(Sustantivo), None, Some(Conjuncion)]);
}

#[test]
fn test_automaton_stats() {
    let vocab = Vocabulary::spanish();
    let automaton = spanish_automaton();
    let stats = automaton.stats();

    assert_eq!(stats.word_count, vocab.words().count());
    assert_eq!(stats.final_state_count, vocab.len());
    assert_eq!(stats.transition_count, stats.state_count - 1);
}

#[test]
fn test_agreement_matches_compatible_nouns() {
    let vocab = Vocabulary::spanish();
    let validator = GenderAgreementValidator::new(Arc::new(vocab.clone()));

    for determiner in vocab.words_of(Articulo) {
        let compatible = validator.compatible_nouns(determiner);
        for noun in vocab.words_of(Sustantivo) {
            assert_eq!(
                validator.agrees(determiner, noun),
                compatible.contains(&noun),
                "{} + {}",
                determiner,
                noun
            );
        }
    }
}

#[test]
fn test_parse_simple_sentence_tree() {
    let parser = SentenceParser::new();
    let result = parser.parse(&tokens(&[("EL", Articulo), ("GATO", Sustantivo), ("COME", Verbo)]));

    assert!(result.valid);
    assert!(result.errors.is_empty());
    let tree = result.tree.unwrap();
    assert_eq!(tree.symbol, NonTerminal::Sentence);
    assert_eq!(tree.bracketed(), "S(NP(DET EL, NOUN GATO), VP(VERB COME))");
    assert!(parser.grammar().conforms(&tree));
}

#[test]
fn test_parse_rejects_trailing_determiner() {
    let parser = SentenceParser::new();
    let result = parser.parse(&tokens(&[
        ("EL", Articulo),
        ("GATO", Sustantivo),
        ("COME", Verbo),
        ("EL", Articulo),
    ]));

    assert!(!result.valid);
    assert_eq!(
        result.errors,
        vec![ParseError::Unconsumed {
            words: vec!["EL".to_string()]
        }]
    );
}

#[test]
fn test_parse_backtracks_to_coordination() {
    let parser = SentenceParser::new();
    let result = parser.parse(&tokens(&[
        ("EL", Articulo),
        ("GATO", Sustantivo),
        ("Y", Conjuncion),
        ("EL", Articulo),
        ("PERRO", Sustantivo),
        ("COMEN", Verbo),
    ]));

    assert!(result.valid);
    let tree = result.tree.unwrap();
    let labels: Vec<NonTerminal> = tree.children.iter().map(|c| c.symbol).collect();
    assert_eq!(
        labels,
        vec![
            NonTerminal::NounPhrase,
            NonTerminal::Conjunction,
            NonTerminal::NounPhrase,
            NonTerminal::VerbPhrase
        ]
    );
}

#[rstest]
#[case(&["el", "gato", "negro", "come"])]
#[case(&["la", "pequeño", "casa", "es", "bonito"])]
#[case(&["un", "chico", "lee", "un", "libro", "en", "la", "escuela"])]
#[case(&["el", "sol", "sale", "rapido", "feliz"])]
#[case(&["la", "chica", "y", "el", "chico", "baila"])]
#[case(&["el", "gato", "bebe"])]
#[case(&["el", "gato", "duerme", "bajo", "la", "mesa"])]
fn test_grammatical_sentences(#[case] words: &[&str]) {
    let config = Config {
        check_agreement: false,
        ..Config::default()
    };
    let analyzer = Analyzer::new(&config).unwrap();

    let report = analyzer.analyze(words).unwrap();
    assert!(report.parse.valid, "{:?}: {:?}", words, report.messages());
}

#[rstest]
#[case(&["gato", "come"])]
#[case(&["el", "gato"])]
#[case(&["el", "come", "gato"])]
#[case(&["el", "gato", "come", "en"])]
#[case(&["y", "el", "gato", "come"])]
fn test_ungrammatical_sentences(#[case] words: &[&str]) {
    let analyzer = Analyzer::with_vocabulary(Vocabulary::spanish());
    let report = analyzer.analyze(words).unwrap();

    assert!(!report.parse.valid, "{:?} no debería ser válida", words);
    assert!(!report.messages().is_empty());
}

#[test]
fn test_structure_and_agreement_are_independent_layers() {
    let analyzer = Analyzer::with_vocabulary(Vocabulary::spanish());
    let report = analyzer.analyze(&["el", "casa", "es", "grande"]).unwrap();

    assert!(report.parse.valid);
    assert_eq!(report.agreement.len(), 1);
    assert_eq!(report.agreement[0].noun, "CASA");
    assert!(!report.is_valid());
}

#[test]
fn test_sequential_automaton_rejects_noun_first() {
    let automaton = SequentialSentenceAutomaton::new();
    let step = automaton.step(Sustantivo, SentenceState::Initial);

    assert!(!step.success);
    assert_eq!(step.new_state, SentenceState::Initial);
    assert!(step.message.contains("articulo"));
}

#[test]
fn test_sentence_builder_through_analyzer() {
    let analyzer = Analyzer::with_vocabulary(Vocabulary::spanish());
    let mut builder = analyzer.sentence_builder();

    for word in ["la", "gato", "el", "gato", "duerme"] {
        let category = analyzer.automaton().classify(word).unwrap();
        builder.push(word, category);
    }

    assert_eq!(builder.sentence().as_deref(), Some("EL GATO DUERME"));
    assert_eq!(builder.completed(), 1);
}

#[test]
fn test_components_are_shareable_across_threads() {
    let analyzer = Arc::new(Analyzer::with_vocabulary(Vocabulary::spanish()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || {
                analyzer
                    .analyze(&["el", "perro", "corre"])
                    .map(|r| r.is_valid())
                    .unwrap_or(false)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
