//! PRISM six-dimension quality scores and feedback blending.
//!
//! A user who disagrees with an incident's PRISM scores submits a partial
//! correction. [`blend_prism_scores`] moves each corrected dimension exactly
//! halfway toward the user's value and reports which dimensions changed.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum absolute change for a dimension to count as changed.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// One of the six PRISM dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrismDimension {
    LogicalCoherence,
    FactualAccuracy,
    PracticalImplementability,
    ContextualRelevance,
    Uniqueness,
    ImpactScale,
}

impl PrismDimension {
    /// All dimensions in canonical order.
    pub const ALL: [PrismDimension; 6] = [
        PrismDimension::LogicalCoherence,
        PrismDimension::FactualAccuracy,
        PrismDimension::PracticalImplementability,
        PrismDimension::ContextualRelevance,
        PrismDimension::Uniqueness,
        PrismDimension::ImpactScale,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrismDimension::LogicalCoherence => "logical_coherence",
            PrismDimension::FactualAccuracy => "factual_accuracy",
            PrismDimension::PracticalImplementability => "practical_implementability",
            PrismDimension::ContextualRelevance => "contextual_relevance",
            PrismDimension::Uniqueness => "uniqueness",
            PrismDimension::ImpactScale => "impact_scale",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PrismDimension::LogicalCoherence => "Logical Coherence",
            PrismDimension::FactualAccuracy => "Factual Accuracy",
            PrismDimension::PracticalImplementability => "Practical Implementability",
            PrismDimension::ContextualRelevance => "Contextual Relevance",
            PrismDimension::Uniqueness => "Uniqueness",
            PrismDimension::ImpactScale => "Impact Scale",
        }
    }

    /// Weight of this dimension in the composite score.
    ///
    /// Contextual relevance and impact dominate; the weights sum to 1.0.
    pub fn composite_weight(&self) -> f64 {
        match self {
            PrismDimension::LogicalCoherence => 0.15,
            PrismDimension::FactualAccuracy => 0.15,
            PrismDimension::PracticalImplementability => 0.15,
            PrismDimension::ContextualRelevance => 0.25,
            PrismDimension::Uniqueness => 0.05,
            PrismDimension::ImpactScale => 0.25,
        }
    }
}

impl std::fmt::Display for PrismDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete set of PRISM scores, each expected in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrismScores {
    pub logical_coherence: f64,
    pub factual_accuracy: f64,
    pub practical_implementability: f64,
    pub contextual_relevance: f64,
    pub uniqueness: f64,
    pub impact_scale: f64,
}

impl PrismScores {
    pub fn get(&self, dim: PrismDimension) -> f64 {
        match dim {
            PrismDimension::LogicalCoherence => self.logical_coherence,
            PrismDimension::FactualAccuracy => self.factual_accuracy,
            PrismDimension::PracticalImplementability => self.practical_implementability,
            PrismDimension::ContextualRelevance => self.contextual_relevance,
            PrismDimension::Uniqueness => self.uniqueness,
            PrismDimension::ImpactScale => self.impact_scale,
        }
    }

    pub fn set(&mut self, dim: PrismDimension, value: f64) {
        let slot = match dim {
            PrismDimension::LogicalCoherence => &mut self.logical_coherence,
            PrismDimension::FactualAccuracy => &mut self.factual_accuracy,
            PrismDimension::PracticalImplementability => &mut self.practical_implementability,
            PrismDimension::ContextualRelevance => &mut self.contextual_relevance,
            PrismDimension::Uniqueness => &mut self.uniqueness,
            PrismDimension::ImpactScale => &mut self.impact_scale,
        };
        *slot = value;
    }

    /// Weighted composite across all six dimensions.
    pub fn composite(&self) -> f64 {
        PrismDimension::ALL
            .iter()
            .map(|d| self.get(*d) * d.composite_weight())
            .sum()
    }

    /// Dimensions whose value lies outside [0, 1].
    pub fn out_of_range(&self) -> Vec<PrismDimension> {
        PrismDimension::ALL
            .into_iter()
            .filter(|d| !(0.0..=1.0).contains(&self.get(*d)))
            .collect()
    }
}

/// A partial correction proposed by a user. Absent dimensions are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrismCorrection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_coherence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factual_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical_implementability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_relevance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqueness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_scale: Option<f64>,
}

impl PrismCorrection {
    pub fn get(&self, dim: PrismDimension) -> Option<f64> {
        match dim {
            PrismDimension::LogicalCoherence => self.logical_coherence,
            PrismDimension::FactualAccuracy => self.factual_accuracy,
            PrismDimension::PracticalImplementability => self.practical_implementability,
            PrismDimension::ContextualRelevance => self.contextual_relevance,
            PrismDimension::Uniqueness => self.uniqueness,
            PrismDimension::ImpactScale => self.impact_scale,
        }
    }

    /// Builder-style setter for one dimension.
    pub fn with(mut self, dim: PrismDimension, value: f64) -> Self {
        let slot = match dim {
            PrismDimension::LogicalCoherence => &mut self.logical_coherence,
            PrismDimension::FactualAccuracy => &mut self.factual_accuracy,
            PrismDimension::PracticalImplementability => &mut self.practical_implementability,
            PrismDimension::ContextualRelevance => &mut self.contextual_relevance,
            PrismDimension::Uniqueness => &mut self.uniqueness,
            PrismDimension::ImpactScale => &mut self.impact_scale,
        };
        *slot = Some(value);
        self
    }

    /// Dimensions present in this correction.
    pub fn dimensions(&self) -> Vec<PrismDimension> {
        PrismDimension::ALL
            .into_iter()
            .filter(|d| self.get(*d).is_some())
            .collect()
    }
}

impl From<PrismScores> for PrismCorrection {
    fn from(scores: PrismScores) -> Self {
        PrismDimension::ALL
            .into_iter()
            .fold(PrismCorrection::default(), |c, d| c.with(d, scores.get(d)))
    }
}

/// Blended scores plus the before/after comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendOutcome {
    pub updated: PrismScores,
    /// Dimensions that moved by at least [`SIGNIFICANCE_THRESHOLD`], in canonical order.
    pub changed_dimensions: Vec<PrismDimension>,
    /// Mean absolute change across all six dimensions.
    pub average_change: f64,
    /// Dimensions that rose by more than [`SIGNIFICANCE_THRESHOLD`].
    pub improved_count: usize,
}

/// Merge a user correction into the canonical scores.
///
/// Each corrected dimension becomes the midpoint of the original and the
/// correction. No clamping is applied.
pub fn blend(original: &PrismScores, correction: &PrismCorrection) -> PrismScores {
    let mut updated = *original;
    for dim in PrismDimension::ALL {
        if let Some(value) = correction.get(dim) {
            updated.set(dim, (original.get(dim) + value) / 2.0);
        }
    }
    updated
}

/// Blend a correction and compute the comparison consumed by presentation.
pub fn blend_prism_scores(original: &PrismScores, correction: &PrismCorrection) -> BlendOutcome {
    let updated = blend(original, correction);

    let deltas: Vec<(PrismDimension, f64)> = PrismDimension::ALL
        .into_iter()
        .map(|d| (d, updated.get(d) - original.get(d)))
        .collect();

    let changed_dimensions: Vec<PrismDimension> = deltas
        .iter()
        .filter(|(_, delta)| delta.abs() >= SIGNIFICANCE_THRESHOLD)
        .map(|(d, _)| *d)
        .collect();
    let average_change =
        deltas.iter().map(|(_, delta)| delta.abs()).sum::<f64>() / PrismDimension::ALL.len() as f64;
    let improved_count = PrismDimension::ALL
        .into_iter()
        .filter(|d| updated.get(*d) > original.get(*d) + SIGNIFICANCE_THRESHOLD)
        .count();

    debug!(
        corrected = correction.dimensions().len(),
        changed = changed_dimensions.len(),
        average_change,
        "Blended PRISM correction"
    );

    BlendOutcome {
        updated,
        changed_dimensions,
        average_change,
        improved_count,
    }
}

/// Qualitative band for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            ScoreBand::High
        } else if score >= 0.4 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Plain-language reading of a dimension score.
///
/// Only the dimensions surfaced in detailed explanations have readings.
pub fn interpret(dim: PrismDimension, score: f64) -> Option<&'static str> {
    let band = ScoreBand::from_score(score);
    let text = match (dim, band) {
        (PrismDimension::LogicalCoherence, ScoreBand::High) => {
            "Incident report is well-structured and internally consistent"
        }
        (PrismDimension::LogicalCoherence, ScoreBand::Medium) => {
            "Some minor logical gaps but generally coherent"
        }
        (PrismDimension::LogicalCoherence, ScoreBand::Low) => {
            "Significant logical inconsistencies in the report"
        }
        (PrismDimension::FactualAccuracy, ScoreBand::High) => {
            "Technical details are verifiable and accurate"
        }
        (PrismDimension::FactualAccuracy, ScoreBand::Medium) => {
            "Most claims appear accurate with some uncertainties"
        }
        (PrismDimension::FactualAccuracy, ScoreBand::Low) => "Factual claims require verification",
        (PrismDimension::ContextualRelevance, ScoreBand::High) => {
            "Highly relevant to similar AI deployment contexts"
        }
        (PrismDimension::ContextualRelevance, ScoreBand::Medium) => {
            "Moderately relevant with some contextual similarities"
        }
        (PrismDimension::ContextualRelevance, ScoreBand::Low) => {
            "Limited contextual relevance to your use case"
        }
        (PrismDimension::ImpactScale, ScoreBand::High) => {
            "Demonstrates significant potential impact"
        }
        (PrismDimension::ImpactScale, ScoreBand::Medium) => "Shows moderate impact on stakeholders",
        (PrismDimension::ImpactScale, ScoreBand::Low) => "Limited scope of demonstrated impact",
        _ => return None,
    };
    Some(text)
}
