//! Soporte para idiomas
//!
//! Cada idioma aporta su vocabulario incorporado.

pub mod spanish;

use crate::dictionary::VocabularyBuilder;

/// Trait que define lo que un idioma aporta al analizador
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "es")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    /// Vocabulario incorporado, ampliable antes de construirse
    fn vocabulary(&self) -> VocabularyBuilder;
}

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    match code.trim().to_lowercase().as_str() {
        "es" | "spanish" | "espanol" | "español" => Some(Box::new(spanish::Spanish::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_language() {
        let language = get_language("Español").unwrap();
        assert_eq!(language.code(), "es");
        assert!(get_language("ca").is_none());
    }
}
