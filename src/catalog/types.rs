//! Data types for the transparency catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Explanation record for one recommendation algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmExplanation {
    /// Unique algorithm identifier (e.g., "cosine-similarity").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Algorithm family.
    #[serde(rename = "type")]
    pub kind: AlgorithmKind,
    /// What the algorithm does.
    pub description: String,
    /// How it does it.
    pub methodology: String,
    /// Weighted inputs, in display order.
    pub input_factors: Vec<InputFactor>,
    /// Description of the produced output.
    pub output_format: String,
    /// Overall confidence in [0, 1].
    pub confidence: f64,
    /// Known limitations.
    #[serde(default)]
    pub limitations: Vec<String>,
    /// Known biases.
    #[serde(default)]
    pub biases: Vec<String>,
    /// Data the algorithm needs; entries are unique.
    #[serde(default)]
    pub data_requirements: Vec<String>,
    /// How often the algorithm is recalibrated.
    pub update_frequency: String,
    /// Date of the last update.
    pub last_updated: NaiveDate,
}

impl AlgorithmExplanation {
    /// Find an input factor by its display name.
    pub fn factor(&self, name: &str) -> Option<&InputFactor> {
        self.input_factors.iter().find(|f| f.name == name)
    }
}

/// Algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Similarity,
    Ranking,
    Scoring,
    Filtering,
    Classification,
}

/// A weighted input considered by an algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFactor {
    pub name: String,
    pub description: String,
    /// Relative weight in [0, 1].
    pub weight: f64,
    pub data_type: FactorDataType,
    /// Where the factor's data comes from.
    pub source: String,
    /// Data quality in [0, 1].
    pub quality: f64,
    pub impact: ImpactLevel,
}

/// Data type of an input factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorDataType {
    Text,
    Numeric,
    Categorical,
    Boolean,
}

/// Coarse impact classification shared by factors and limitations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

/// A documented limitation of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLimitation {
    pub id: String,
    pub category: LimitationCategory,
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub affected_features: Vec<String>,
    pub mitigation_strategies: Vec<String>,
    /// Severity in [0, 1].
    pub severity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitationCategory {
    Data,
    Algorithm,
    Context,
    Ethical,
    Technical,
}

/// A data source feeding the recommendation system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DataSourceKind,
    pub description: String,
    pub size: String,
    pub last_updated: NaiveDate,
    /// Quality in [0, 1].
    pub quality: f64,
    pub coverage: String,
    pub biases: Vec<String>,
    pub limitations: Vec<String>,
    pub update_schedule: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceKind {
    Training,
    RealTime,
    Reference,
    UserGenerated,
}

/// Snapshot of evaluation metrics for the deployed models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub confidence_distribution: Vec<ConfidenceBucket>,
    pub performance_by_category: Vec<CategoryPerformance>,
    pub training_date: NaiveDate,
    pub validation_date: NaiveDate,
    pub test_set_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBucket {
    pub range: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub category: String,
    pub score: f64,
}

/// High-level description of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemOverview {
    pub version: String,
    pub architecture: String,
    pub components: Vec<String>,
    pub capabilities: Vec<String>,
    pub last_updated: NaiveDate,
}

/// Ethics disclosures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalConsiderations {
    pub biases: Vec<String>,
    pub fairness_metrics: Vec<FairnessMetric>,
    pub privacy_measures: Vec<String>,
    pub accountability_measures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetric {
    pub metric: String,
    pub score: f64,
}

/// Rights users hold over their data and over decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRights {
    pub data_rights: Vec<String>,
    pub appeal_process: Vec<String>,
    pub contact_info: String,
}
