//! Character catalog.
//!
//! The built-in catalog is embedded at compile time from
//! `contrib/catalog/spider-verse.toml`. A catalog is read-only once built and
//! is handed to the matcher explicitly; there is no global instance.

use crate::types::CharacterProfile;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../../contrib/catalog/spider-verse.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk layout: a list of `[[profile]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    profile: Vec<CharacterProfile>,
}

/// Ordered, immutable set of character profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    profiles: Vec<CharacterProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<CharacterProfile>) -> Self {
        Self { profiles }
    }

    /// The 16 Spider-Verse profiles shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_toml_str(&src)?;
        tracing::info!(
            path = %path.display(),
            profiles = catalog.len(),
            "loaded character catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        Ok(Self::new(file.profile))
    }

    pub fn profiles(&self) -> &[CharacterProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&CharacterProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeBracket, Gender};

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        assert!(catalog.profiles().iter().all(|p| p.age_bracket.is_some() && p.gender.is_some()));
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let profiles = catalog.profiles();
        assert_eq!(profiles[0].name, "Peter Parker (Earth-616)");
        assert_eq!(profiles[1].name, "Miles Morales (Earth-1610)");
        assert_eq!(
            profiles[15].name,
            "Takuya Yamashiro / Japanese Spider-Man (Earth-51778)"
        );
    }

    #[test]
    fn test_builtin_catalog_fields() {
        let catalog = Catalog::builtin().unwrap();
        let gwen = catalog.find("Gwen Stacy / Spider-Gwen (Earth-65)").unwrap();
        assert_eq!(gwen.age_bracket, Some(AgeBracket::YoungAdult));
        assert_eq!(gwen.gender, Some(Gender::Female));
        assert!(gwen.traits.iter().any(|t| t == "shaved head"));
    }

    #[test]
    fn test_profile_without_age_or_gender() {
        let catalog = Catalog::from_toml_str(
            r#"
[[profile]]
name = "Spider-Ham"
traits = ["cartoon"]
"#,
        )
        .unwrap();
        let ham = &catalog.profiles()[0];
        assert_eq!(ham.age_bracket, None);
        assert_eq!(ham.gender, None);
    }

    #[test]
    fn test_empty_toml_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_age_bracket_rejected() {
        let result = Catalog::from_toml_str(
            r#"
[[profile]]
name = "Spider-Toddler"
age_bracket = "infant"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Catalog::from_path("/nonexistent/spidermatch/catalog.toml");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
