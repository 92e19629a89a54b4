//! System transparency report assembly.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    AlgorithmExplanation, Catalog, DataSourceInfo, EthicalConsiderations, ModelMetrics,
    SystemLimitation, SystemOverview, UserRights,
};

/// Composite, read-only disclosure of how the system works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTransparencyReport {
    pub catalog_version: String,
    pub system_overview: SystemOverview,
    pub algorithms: Vec<AlgorithmExplanation>,
    pub limitations: Vec<SystemLimitation>,
    pub data_sources: Vec<DataSourceInfo>,
    pub model_metrics: ModelMetrics,
    pub ethical_considerations: EthicalConsiderations,
    pub user_rights: UserRights,
}

/// Builds transparency reports from a loaded catalog.
#[derive(Debug, Clone, Copy)]
pub struct TransparencyReporter<'a> {
    catalog: &'a Catalog,
}

impl<'a> TransparencyReporter<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn build_report(&self) -> SystemTransparencyReport {
        SystemTransparencyReport {
            catalog_version: self.catalog.version().to_string(),
            system_overview: self.catalog.overview().clone(),
            algorithms: self.catalog.registry().list(),
            limitations: self.catalog.limitations(),
            data_sources: self.catalog.data_sources(),
            model_metrics: self.catalog.model_metrics().clone(),
            ethical_considerations: self.catalog.ethics().clone(),
            user_rights: self.catalog.user_rights().clone(),
        }
    }
}
