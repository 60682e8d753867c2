use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use quiz_core::model::Logo;

use crate::error::CatalogError;

/// The dataset bundled into the binary, so the app works with no
/// configuration at all.
const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/logos.json");

/// A validated, ordered list of logo records to sample sessions from.
///
/// The catalog is loaded once before a session starts and never mutated;
/// sessions hold their own drawn copies of the records.
#[derive(Debug, Clone)]
pub struct LogoCatalog {
    logos: Vec<Logo>,
}

impl LogoCatalog {
    /// Builds a catalog from pre-constructed records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list,
    /// `CatalogError::DuplicateName` when two entries share a display name,
    /// and propagates per-logo validation failures.
    pub fn new(logos: Vec<Logo>) -> Result<Self, CatalogError> {
        if logos.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for logo in &logos {
            logo.validate()?;
            if !seen.insert(logo.name()) {
                return Err(CatalogError::DuplicateName {
                    name: logo.name().to_string(),
                });
            }
        }

        Ok(Self { logos })
    }

    /// Parses a catalog from a JSON array of logo records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, plus the same
    /// validation failures as [`LogoCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let logos: Vec<Logo> = serde_json::from_str(json)?;
        Self::new(logos)
    }

    /// Loads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` when the file cannot be read, plus the
    /// same failures as [`LogoCatalog::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), logos = catalog.len(), "loaded logo catalog");
        Ok(catalog)
    }

    /// The embedded default dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled JSON is invalid, which the catalog tests
    /// guard against.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    #[must_use]
    pub fn logos(&self) -> &[Logo] {
        &self.logos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.logos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(name: &str) -> Logo {
        Logo::new(name, "x.png", "a hint", vec![name.to_string()]).unwrap()
    }

    #[test]
    fn builtin_catalog_parses_and_covers_default_session_size() {
        let catalog = LogoCatalog::builtin().unwrap();
        assert!(catalog.len() >= crate::quiz_service::DEFAULT_ROUND_COUNT);
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = LogoCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = LogoCatalog::new(vec![logo("DBS"), logo("DBS")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn json_round_trips_into_validated_records() {
        let json = r#"[
            {
                "name": "DBS",
                "file_name": "dbs.png",
                "hint": "A bank headquartered at Marina Bay",
                "accepted_answers": ["DBS", "DBS Bank"]
            }
        ]"#;
        let catalog = LogoCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.logos()[0].name(), "DBS");
    }

    #[test]
    fn invalid_record_in_json_rejected() {
        let json = r#"[
            {
                "name": "DBS",
                "file_name": "dbs.png",
                "hint": "A bank",
                "accepted_answers": []
            }
        ]"#;
        let err = LogoCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Logo(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = LogoCatalog::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
