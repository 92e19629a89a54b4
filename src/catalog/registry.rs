//! Algorithm registry for explanation lookup.

use std::collections::HashMap;

use super::types::AlgorithmExplanation;
use crate::error::{CatalogError, CatalogResult};

/// Read-only catalog of algorithm explanations.
///
/// Built once at startup and shared by reference with the trace generator
/// and the transparency reporter. Insertion order is preserved for listing.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    algorithms: Vec<AlgorithmExplanation>,
    index: HashMap<String, usize>,
}

impl AlgorithmRegistry {
    /// Create a registry from an ordered list of explanations.
    ///
    /// # Errors
    /// Returns error if an id is empty or appears more than once.
    pub fn new(algorithms: Vec<AlgorithmExplanation>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(algorithms.len());
        for (position, algorithm) in algorithms.iter().enumerate() {
            if algorithm.id.is_empty() {
                return Err(CatalogError::Invalid {
                    field: format!("algorithms[{}].id", position),
                    reason: "algorithm id is required".to_string(),
                });
            }
            if index.insert(algorithm.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateAlgorithm {
                    id: algorithm.id.clone(),
                });
            }
        }

        Ok(Self { algorithms, index })
    }

    /// Get an algorithm explanation by id.
    pub fn lookup(&self, id: &str) -> Option<&AlgorithmExplanation> {
        self.index.get(id).map(|&i| &self.algorithms[i])
    }

    /// All explanations in insertion order, as an owned copy.
    pub fn list(&self) -> Vec<AlgorithmExplanation> {
        self.algorithms.clone()
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.id.as_str()).collect()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}
