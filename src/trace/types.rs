//! Data types for decision traces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prism::PrismScores;

/// Algorithm id of the cosine similarity matcher.
pub const COSINE_SIMILARITY: &str = "cosine-similarity";
/// Algorithm id of the hybrid risk ranker.
pub const HYBRID_RANKING: &str = "hybrid-ranking";
/// Algorithm id of the PRISM scorer.
pub const PRISM_SCORING: &str = "prism-scoring";

/// Product profile used for similarity matching.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimilarityInput {
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub purposes: Vec<String>,
}

/// An incident returned by a matcher or ranker.
///
/// Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentMatch {
    #[serde(default, alias = "id")]
    pub incident_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "similarity")]
    pub score: f64,
}

/// Per-incident factor values fed to the hybrid ranker, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCandidate {
    pub incident_id: String,
    pub similarity: f64,
    pub impact_scale: f64,
    pub risk_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prism_composite: Option<f64>,
}

impl RankingCandidate {
    pub(crate) fn factors(&self) -> [f64; 4] {
        [
            self.similarity,
            self.impact_scale,
            self.risk_level,
            self.prism_composite.unwrap_or(0.0),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankingInput {
    #[serde(default)]
    pub candidates: Vec<RankingCandidate>,
}

/// What was known about an incident when it was PRISM-scored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrismScoringInput {
    #[serde(default)]
    pub incident_id: String,
    /// Number of external sources available for fact checking.
    #[serde(default)]
    pub source_count: usize,
    #[serde(default)]
    pub expert_annotated: bool,
}

/// Input/output pair to explain, keyed by algorithm id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", content = "data", rename_all = "kebab-case")]
pub enum TraceRequest {
    CosineSimilarity {
        input: SimilarityInput,
        output: Vec<IncidentMatch>,
    },
    HybridRanking {
        input: RankingInput,
        output: Vec<IncidentMatch>,
    },
    PrismScoring {
        input: PrismScoringInput,
        output: PrismScores,
    },
    /// An algorithm without a step producer; payloads are carried as-is.
    Unsupported {
        id: String,
        input: serde_json::Value,
        output: serde_json::Value,
    },
}

impl TraceRequest {
    /// Algorithm id this request refers to.
    pub fn algorithm_id(&self) -> &str {
        match self {
            TraceRequest::CosineSimilarity { .. } => COSINE_SIMILARITY,
            TraceRequest::HybridRanking { .. } => HYBRID_RANKING,
            TraceRequest::PrismScoring { .. } => PRISM_SCORING,
            TraceRequest::Unsupported { id, .. } => id,
        }
    }
}

/// How results are being explained to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationMode {
    Generic,
    Prism,
}

/// Optional caller context for explanations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ExplanationMode>,
}

/// Composite score of one ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub incident_id: String,
    pub composite: f64,
}

/// Local input or output recorded on a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepSnapshot {
    ProductProfile(SimilarityInput),
    NormalizedFeatures {
        technologies: Vec<String>,
        features: String,
    },
    Technologies {
        technologies: Vec<String>,
    },
    Vector {
        vector_dim: u32,
        sparsity: f64,
    },
    QueryVector {
        query_vector: String,
        candidate_count: u32,
    },
    Matches {
        matches: Vec<IncidentMatch>,
    },
    Candidates {
        candidates: Vec<RankingCandidate>,
    },
    FactorWeights {
        weights: Vec<(String, f64)>,
    },
    Composites {
        composites: Vec<CompositeScore>,
    },
    IncidentEvidence(PrismScoringInput),
    Scores(PrismScores),
    Composite {
        composite: f64,
    },
}

/// One stage of a decision trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionStep {
    /// 1-based, contiguous within a trace.
    pub step_number: u32,
    pub name: String,
    pub description: String,
    pub input: StepSnapshot,
    /// Human-readable description of the transformation applied.
    pub processing: String,
    pub output: StepSnapshot,
    pub confidence: f64,
    /// Estimated processing time in whole milliseconds.
    pub time_ms: u64,
}

/// A strategy that could have been used instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeOption {
    pub description: String,
    pub score: f64,
    pub reasoning: String,
    pub tradeoffs: Vec<String>,
}

impl AlternativeOption {
    pub(crate) fn new(description: &str, score: f64, reasoning: &str, tradeoffs: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            score,
            reasoning: reasoning.to_string(),
            tradeoffs: tradeoffs.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Step-by-step explanation of one algorithm invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub algorithm: String,
    pub request: TraceRequest,
    pub steps: Vec<DecisionStep>,
    pub confidence: f64,
    pub alternative_options: Vec<AlternativeOption>,
    pub warnings: Vec<String>,
    pub explanations: Vec<String>,
}
