//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone)]
pub struct Config {
    /// Idioma a usar (default: "es")
    pub language: String,
    /// Vocabulario adicional (palabra|categoría|género)
    pub vocabulary_file: Option<PathBuf>,
    /// Comprobar concordancia de género al analizar oraciones
    pub check_agreement: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            vocabulary_file: None,
            check_agreement: true,
        }
    }
}

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Autómata de vocabulario y analizador sintáctico de oraciones
#[derive(Debug, Parser)]
#[command(name = "gramatica", version, about)]
pub struct Cli {
    /// Idioma a usar
    #[arg(short, long = "lang", global = true, default_value = "es")]
    pub language: String,

    /// Vocabulario adicional (palabra|categoría|género por línea)
    #[arg(short = 'd', long = "vocab", global = true, value_name = "ARCHIVO")]
    pub vocabulary_file: Option<PathBuf>,

    /// No comprobar concordancia de género
    #[arg(long, global = true)]
    pub no_agreement: bool,

    /// Formato de salida
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Más detalle en el registro (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Reconoce una palabra completa
    Recognize { word: String },

    /// Verifica un prefijo y muestra sus continuaciones
    Prefix { partial: String },

    /// Clasifica palabras según el vocabulario
    Classify {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Analiza una oración con la gramática
    Parse {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Construye oraciones Artículo → Sustantivo → Verbo palabra a palabra
    Sequence {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Comprueba la concordancia entre determinante y sustantivo
    Agreement { determiner: String, noun: String },

    /// Estadísticas del autómata y la gramática
    Stats,
}

impl Cli {
    /// Los alias de idioma se resuelven en `languages::get_language`
    pub fn from_args(args: Vec<String>) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    pub fn config(&self) -> Config {
        Config {
            language: self.language.clone(),
            vocabulary_file: self.vocabulary_file.clone(),
            check_agreement: !self.no_agreement,
        }
    }
}
