//! Cargador de vocabulario desde archivos

use std::fs;
use std::path::Path;

use super::vocabulary::{Gender, VocabularyBuilder, WordCategory};
use crate::error::{Error, Result};

pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Añade al constructor las entradas de un archivo
    ///
    /// Formato esperado: palabra|categoría|género
    /// Ejemplo: casa|sustantivo|f
    ///
    /// El género es opcional. Devuelve el número de entradas leídas.
    pub fn append_from_file<P: AsRef<Path>>(
        builder: &mut VocabularyBuilder,
        path: P,
    ) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let count = Self::append_from_str(builder, &content)?;
        tracing::debug!(archivo = %path.display(), entradas = count, "vocabulario adicional cargado");
        Ok(count)
    }

    /// Añade al constructor las entradas de un texto
    pub fn append_from_str(builder: &mut VocabularyBuilder, content: &str) -> Result<usize> {
        let mut count = 0;

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();

            // Ignorar líneas vacías y comentarios
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            if parts.len() < 2 || parts.len() > 3 || parts[0].is_empty() {
                return Err(Error::MalformedEntry {
                    line: line_num,
                    content: line.to_string(),
                });
            }

            let category =
                WordCategory::from_name(parts[1]).ok_or_else(|| Error::UnknownCategory {
                    line: line_num,
                    category: parts[1].to_string(),
                })?;

            let gender_field = parts.get(2).copied().unwrap_or("");
            let gender = Gender::from_name(gender_field).ok_or_else(|| Error::UnknownGender {
                line: line_num,
                gender: gender_field.to_string(),
            })?;

            builder.add(category, gender, parts[0]);
            count += 1;
        }

        Ok(count)
    }
}
