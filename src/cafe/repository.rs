//! Café Catalog
//!
//! Read-only mapping from city name to the ordered list of its cafés. The
//! catalog is built once at startup and shared between requests.

use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use thiserror::Error;

/// City served by the built-in catalog
pub const DEFAULT_CITY: &str = "moscow";

/// Cafés of [`DEFAULT_CITY`] in the built-in catalog
pub const DEFAULT_CAFES: [&str; 4] = ["Мир кофе", "Сладкоежка", "Кофе и завтраки", "Сытый студент"];

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read café catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse café catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable city → café list lookup.
///
/// Deserializes from a plain JSON object, e.g. `{"moscow": ["A", "B"]}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CafeRepository {
    cafes: HashMap<String, Vec<String>>,
}

impl CafeRepository {
    /// Builds a repository from any iterator of `(city, cafés)` pairs
    pub fn new<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<N>)>,
        C: Into<String>,
        N: Into<String>,
    {
        let cafes = entries
            .into_iter()
            .map(|(city, names)| (city.into(), names.into_iter().map(Into::into).collect()))
            .collect();
        Self { cafes }
    }

    /// The catalog served when no data file is configured
    pub fn with_default_cafes() -> Self {
        Self::new([(DEFAULT_CITY, DEFAULT_CAFES.to_vec())])
    }

    /// Loads a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| RepositoryError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Whether `city` is an exact-match key of the catalog
    pub fn contains_city(&self, city: &str) -> bool {
        self.cafes.contains_key(city)
    }

    /// Cafés of `city` in catalog order, `None` for unknown cities
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cafes.get(city).map(Vec::as_slice)
    }

    /// Number of cities in the catalog
    pub fn city_count(&self) -> usize {
        self.cafes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog() {
        let repo = CafeRepository::with_default_cafes();

        assert!(repo.contains_city("moscow"));
        assert!(!repo.contains_city("Moscow"), "lookup must be exact-match");
        assert_eq!(repo.cafes("moscow").unwrap().len(), 4);
        assert_eq!(repo.cafes("moscow").unwrap()[0], "Мир кофе");
        assert!(repo.cafes("tula").is_none());
    }

    #[test]
    fn test_empty_city_is_known() {
        let repo = CafeRepository::new([("ghost-town", Vec::<String>::new())]);

        assert!(repo.contains_city("ghost-town"));
        assert_eq!(repo.cafes("ghost-town"), Some(&[][..]));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"kazan": ["Первая", "Вторая"], "tver": []}}"#
        )
        .unwrap();

        let repo = CafeRepository::from_json_file(file.path()).unwrap();

        assert_eq!(repo.city_count(), 2);
        assert_eq!(
            repo.cafes("kazan").unwrap(),
            &["Первая".to_string(), "Вторая".to_string()]
        );
        assert!(repo.contains_city("tver"));
    }

    #[test]
    fn test_load_errors() {
        let missing = CafeRepository::from_json_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(RepositoryError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["not", "a", "map"]"#).unwrap();
        let malformed = CafeRepository::from_json_file(file.path());
        assert!(matches!(malformed, Err(RepositoryError::Parse { .. })));
    }
}
