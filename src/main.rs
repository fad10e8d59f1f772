use std::process;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gramatica::config::{Cli, Command, OutputFormat};
use gramatica::dictionary::normalize;
use gramatica::{Analyzer, Error};

fn main() {
    let cli = match Cli::from_args(std::env::args().collect()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    let analyzer = match Analyzer::new(&cli.config()) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error inicializando analizador: {}", e);
            process::exit(2);
        }
    };

    match run(&analyzer, &cli.command, cli.format) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e @ Error::UnknownWord { .. }) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Ejecuta el comando. Devuelve `false` si la entrada fue rechazada.
fn run(analyzer: &Analyzer, command: &Command, format: OutputFormat) -> gramatica::Result<bool> {
    match command {
        Command::Recognize { word } => {
            let result = analyzer.automaton().recognize(word);
            emit(format, &result, || match (&result.word, result.category) {
                (Some(w), Some(c)) if result.accepted => format!("{}: {}", w, c),
                (Some(w), None) if result.accepted => format!("{}: sin categoría", w),
                _ => format!(
                    "'{}' no reconocida ({} caracteres válidos)",
                    word,
                    result.path.len()
                ),
            });
            Ok(result.accepted)
        }
        Command::Prefix { partial } => {
            let check = analyzer.automaton().check_prefix(partial);
            emit(format, &check, || {
                if !check.valid {
                    return format!("'{}' no es prefijo de ninguna palabra", partial);
                }
                let continuations: String = check.continuations.iter().collect();
                let completions = analyzer.automaton().completions(partial);
                format!(
                    "prefijo válido{}; continuaciones: [{}]; palabras: {}",
                    if check.is_complete_word { " (palabra completa)" } else { "" },
                    continuations,
                    completions.join(", ")
                )
            });
            Ok(check.valid)
        }
        Command::Classify { words } => {
            let classified: Vec<Classified> = words
                .iter()
                .map(|w| Classified {
                    word: w.clone(),
                    category: analyzer.automaton().classify(w).map(|c| c.as_str()),
                })
                .collect();
            emit(format, &classified, || {
                classified
                    .iter()
                    .map(|c| format!("{}: {}", c.word, c.category.unwrap_or("desconocida")))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            Ok(classified.iter().all(|c| c.category.is_some()))
        }
        Command::Parse { words } => {
            let report = analyzer.analyze(words)?;
            emit(format, &report, || {
                let mut out = match report.parse.tree {
                    Some(ref tree) => tree.render(),
                    None => String::new(),
                };
                for message in report.messages() {
                    out.push_str(&format!("✗ {}\n", message));
                }
                out.push_str(if report.is_valid() { "oración válida" } else { "oración inválida" });
                out
            });
            Ok(report.is_valid())
        }
        Command::Sequence { words } => {
            let tokens = analyzer.tokenize(words)?;
            let mut builder = analyzer.sentence_builder();
            let steps: Vec<_> = tokens
                .iter()
                .map(|t| builder.push(&t.word, t.category))
                .collect();
            emit(format, &steps, || {
                steps
                    .iter()
                    .zip(&tokens)
                    .map(|(s, t)| format!("{} [{}] {}", t.word, s.state, s.message))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            Ok(steps.iter().all(|s| s.accepted) && builder.completed() > 0)
        }
        Command::Agreement { determiner, noun } => {
            let validator = analyzer.agreement();
            let agrees = validator.agrees(determiner, noun);
            let result = AgreementOutput {
                agrees,
                determiner_gender: validator.gender_of_determiner(determiner).as_str(),
                noun_gender: validator.gender_of_noun(noun).as_str(),
            };
            emit(format, &result, || {
                format!(
                    "{} ({}) + {} ({}): {}",
                    normalize(determiner),
                    result.determiner_gender,
                    normalize(noun),
                    result.noun_gender,
                    if agrees { "concuerdan" } else { "no concuerdan" }
                )
            });
            Ok(agrees)
        }
        Command::Stats => {
            let stats = StatsOutput {
                automaton: analyzer.automaton().stats(),
                grammar: analyzer.parser().grammar().stats(),
                vocabulary_size: analyzer.vocabulary().len(),
            };
            emit(format, &stats, || {
                format!(
                    "estados: {}\nestados finales: {}\ntransiciones: {}\npalabras: {}\n\
                     reglas: {}\nalternativas: {}\n\n{}",
                    stats.automaton.state_count,
                    stats.automaton.final_state_count,
                    stats.automaton.transition_count,
                    stats.automaton.word_count,
                    stats.grammar.rule_count,
                    stats.grammar.alternative_count,
                    analyzer.parser().grammar()
                )
            });
            Ok(true)
        }
    }
}

#[derive(Serialize)]
struct Classified {
    word: String,
    category: Option<&'static str>,
}

#[derive(Serialize)]
struct AgreementOutput {
    agrees: bool,
    determiner_gender: &'static str,
    noun_gender: &'static str,
}

#[derive(Serialize)]
struct StatsOutput {
    automaton: gramatica::dictionary::AutomatonStats,
    grammar: gramatica::grammar::GrammarStats,
    vocabulary_size: usize,
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializando resultado: {}", e),
        },
        OutputFormat::Text => println!("{}", text()),
    }
}
