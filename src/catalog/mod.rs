//! Transparency catalog: the static tables behind every explanation.
//!
//! This module provides:
//! - `Catalog`: the versioned catalog document, loaded once at startup
//! - `AlgorithmRegistry`: read-only lookup of algorithm explanations
//! - Data types for limitations, data sources, metrics and disclosures
//!
//! The built-in document lives in `catalog/transparency.json` and is embedded
//! at compile time. [`Catalog::from_path`] loads a replacement document.

mod registry;
mod types;

pub use registry::AlgorithmRegistry;
pub use types::*;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{CatalogError, CatalogResult};

const BUILTIN_CATALOG: &str = include_str!("../../catalog/transparency.json");

/// Raw on-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: String,
    system_overview: SystemOverview,
    algorithms: Vec<AlgorithmExplanation>,
    limitations: Vec<SystemLimitation>,
    data_sources: Vec<DataSourceInfo>,
    model_metrics: ModelMetrics,
    ethical_considerations: EthicalConsiderations,
    user_rights: UserRights,
}

/// Validated, immutable transparency catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    overview: SystemOverview,
    registry: AlgorithmRegistry,
    limitations: Vec<SystemLimitation>,
    data_sources: Vec<DataSourceInfo>,
    model_metrics: ModelMetrics,
    ethics: EthicalConsiderations,
    user_rights: UserRights,
}

impl Catalog {
    /// Load the catalog embedded in the binary.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog document from disk.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        validate(&doc)?;

        let registry = AlgorithmRegistry::new(doc.algorithms)?;
        info!(
            version = %doc.version,
            algorithms = registry.len(),
            limitations = doc.limitations.len(),
            data_sources = doc.data_sources.len(),
            "Transparency catalog loaded"
        );

        Ok(Self {
            version: doc.version,
            overview: doc.system_overview,
            registry,
            limitations: doc.limitations,
            data_sources: doc.data_sources,
            model_metrics: doc.model_metrics,
            ethics: doc.ethical_considerations,
            user_rights: doc.user_rights,
        })
    }

    /// Catalog content version.
    pub fn version(&self) -> &str {
        &self.version
    }

    #[inline]
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    pub fn overview(&self) -> &SystemOverview {
        &self.overview
    }

    /// Documented system limitations, as an owned copy.
    pub fn limitations(&self) -> Vec<SystemLimitation> {
        self.limitations.clone()
    }

    /// Data source descriptors, as an owned copy.
    pub fn data_sources(&self) -> Vec<DataSourceInfo> {
        self.data_sources.clone()
    }

    pub fn model_metrics(&self) -> &ModelMetrics {
        &self.model_metrics
    }

    pub fn ethics(&self) -> &EthicalConsiderations {
        &self.ethics
    }

    pub fn user_rights(&self) -> &UserRights {
        &self.user_rights
    }
}

fn check_unit(field: String, value: f64) -> CatalogResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::Invalid {
            field,
            reason: format!("{} is outside [0, 1]", value),
        })
    }
}

fn validate(doc: &CatalogDocument) -> CatalogResult<()> {
    for (i, alg) in doc.algorithms.iter().enumerate() {
        if alg.name.trim().is_empty() {
            return Err(CatalogError::Invalid {
                field: format!("algorithms[{}].name", i),
                reason: "algorithm name is required".to_string(),
            });
        }
        check_unit(format!("algorithms[{}].confidence", i), alg.confidence)?;
        for (j, factor) in alg.input_factors.iter().enumerate() {
            check_unit(
                format!("algorithms[{}].input_factors[{}].weight", i, j),
                factor.weight,
            )?;
            check_unit(
                format!("algorithms[{}].input_factors[{}].quality", i, j),
                factor.quality,
            )?;
        }
        let mut seen = std::collections::HashSet::new();
        for req in &alg.data_requirements {
            if !seen.insert(req.as_str()) {
                return Err(CatalogError::Invalid {
                    field: format!("algorithms[{}].data_requirements", i),
                    reason: format!("duplicate requirement '{}'", req),
                });
            }
        }
    }

    for (i, limitation) in doc.limitations.iter().enumerate() {
        check_unit(format!("limitations[{}].severity", i), limitation.severity)?;
    }
    for (i, source) in doc.data_sources.iter().enumerate() {
        check_unit(format!("data_sources[{}].quality", i), source.quality)?;
    }

    Ok(())
}
