//! Optional TOML configuration shared by the three demo binaries.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock demo inputs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::DocumentKind;
use crate::error::{DemoError, Result};
use crate::forecast::ForecastParams;
use crate::search::{sample_products, Catalog, Product};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSection {
    pub initial_value: f64,
    pub growth_rate: f64,
    pub years: u32,
    pub currency: String,
}

impl Default for ForecastSection {
    fn default() -> Self {
        let params = ForecastParams::default();
        Self {
            initial_value: params.initial_value,
            growth_rate: params.growth_rate,
            years: params.years,
            currency: "₹".to_string(),
        }
    }
}

impl ForecastSection {
    pub fn params(&self) -> Result<ForecastParams> {
        ForecastParams::new(self.initial_value, self.growth_rate, self.years)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub products: Vec<Product>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            products: sample_products(),
        }
    }
}

impl CatalogSection {
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.products.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsSection {
    pub kinds: Vec<DocumentKind>,
}

impl Default for DocumentsSection {
    fn default() -> Self {
        Self {
            kinds: DocumentKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub forecast: ForecastSection,
    pub catalog: CatalogSection,
    pub documents: DocumentsSection,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.forecast.params()?;
        if self.catalog.products.is_empty() {
            return Err(DemoError::EmptyCatalog);
        }
        Ok(())
    }
}
