//! Errores del analizador
//!
//! Los rechazos léxicos, sintácticos y de concordancia son datos normales
//! devueltos por cada componente. Este tipo cubre solo la capa exterior:
//! carga de vocabulario, configuración y clasificación de entradas.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no se pudo leer el vocabulario '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("línea {line}: entrada mal formada '{content}' (formato: palabra|categoría|género)")]
    MalformedEntry { line: usize, content: String },

    #[error("línea {line}: categoría desconocida '{category}'")]
    UnknownCategory { line: usize, category: String },

    #[error("línea {line}: género desconocido '{gender}'")]
    UnknownGender { line: usize, gender: String },

    #[error("idioma no soportado: {0}")]
    UnsupportedLanguage(String),

    #[error("palabra no reconocida en la posición {position}: '{word}'")]
    UnknownWord { word: String, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
