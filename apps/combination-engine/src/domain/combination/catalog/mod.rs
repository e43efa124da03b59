//! Combination Catalog
//!
//! Ordered collection of combination templates, built once from the YAML
//! rule source and read-only afterwards. Catalog order is the priority
//! order: the first template that fits a set of legs wins.
//!
//! # Example
//!
//! ```rust
//! use combination_engine::domain::combination::Catalog;
//!
//! let catalog = Catalog::from_yaml_str(r#"
//! combinations:
//!   - name: Long Call
//!     shortname: LC
//!     identifier: long_call
//!     legs:
//!       cardinality: fixed
//!       leg:
//!         - { type: C, ratio: "+" }
//! "#)?;
//! assert_eq!(catalog.len(), 1);
//! # Ok::<(), combination_engine::domain::combination::CatalogError>(())
//! ```

mod decode;
mod source;

use std::path::Path;

use super::errors::CatalogError;
use super::value_objects::CombinationTemplate;
use source::CatalogSource;

/// Ordered, immutable set of combination templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<CombinationTemplate>,
}

impl Catalog {
    /// Create a catalog from templates already in priority order.
    #[must_use]
    pub const fn new(templates: Vec<CombinationTemplate>) -> Self {
        Self { templates }
    }

    /// Load the catalog from a YAML rule source on disk.
    ///
    /// Either every template decodes or no catalog is produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let catalog = Self::from_yaml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            templates = catalog.len(),
            "Combination catalog loaded"
        );
        Ok(catalog)
    }

    /// Build the catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let source: CatalogSource = serde_yaml_bw::from_str(yaml)?;

        let templates = source
            .combinations
            .into_iter()
            .map(decode::decode_combination)
            .collect::<Result<Vec<_>, _>>()?;

        if templates.is_empty() {
            tracing::warn!("Combination catalog has no templates; every position is unclassified");
        }

        Ok(Self::new(templates))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate templates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &CombinationTemplate> {
        self.templates.iter()
    }

    /// Find the first template with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CombinationTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// Find the first template with the given identifier.
    #[must_use]
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&CombinationTemplate> {
        self.templates.iter().find(|t| t.identifier() == identifier)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CombinationTemplate;
    type IntoIter = std::slice::Iter<'a, CombinationTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
