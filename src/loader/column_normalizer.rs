use std::collections::HashMap;

use super::error::DataLoadError;

/// Maps raw header names onto the canonical `lowercase_with_underscores` form.
pub struct ColumnNormalizer;

impl ColumnNormalizer {
    pub fn normalize_name(&self, raw: &str) -> String {
        raw.trim_start_matches('\u{feff}')
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Normalizes every header, rejecting two raw names that collapse onto
    /// the same canonical one.
    pub fn normalize_columns(&self, raw: &[&str]) -> Result<Vec<String>, DataLoadError> {
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(raw.len());
        let mut normalized = Vec::with_capacity(raw.len());

        for &name in raw {
            let canonical = self.normalize_name(name);
            if let Some(first) = seen.insert(canonical.clone(), name) {
                return Err(DataLoadError::DuplicateColumn {
                    first: first.to_string(),
                    second: name.to_string(),
                    normalized: canonical,
                });
            }
            normalized.push(canonical);
        }

        Ok(normalized)
    }
}
