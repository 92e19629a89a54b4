//! Trace producers for hybrid risk ranking.

use super::types::{
    AlternativeOption, CompositeScore, DecisionStep, IncidentMatch, RankingInput, StepSnapshot,
};
use crate::catalog::AlgorithmExplanation;

/// Ranking factors with the weights used when the catalog has none.
const DEFAULT_WEIGHTS: [(&str, f64); 4] = [
    ("Similarity Score", 0.4),
    ("Impact Scale", 0.3),
    ("Risk Level", 0.2),
    ("PRISM Scores", 0.1),
];

/// Factor weights, taken from the registered algorithm where available.
pub(crate) fn weights(algorithm: Option<&AlgorithmExplanation>) -> Vec<(String, f64)> {
    DEFAULT_WEIGHTS
        .iter()
        .map(|&(name, fallback)| {
            let weight = algorithm
                .and_then(|a| a.factor(name))
                .map_or(fallback, |f| f.weight);
            (name.to_string(), weight)
        })
        .collect()
}

fn composites(input: &RankingInput, weights: &[(String, f64)]) -> Vec<CompositeScore> {
    input
        .candidates
        .iter()
        .map(|c| CompositeScore {
            incident_id: c.incident_id.clone(),
            composite: c
                .factors()
                .iter()
                .zip(weights)
                .map(|(value, (_, w))| value * w)
                .sum(),
        })
        .collect()
}

fn describe_weights(weights: &[(String, f64)]) -> String {
    weights
        .iter()
        .map(|(name, w)| format!("{:.2} x {}", w, name))
        .collect::<Vec<_>>()
        .join(" + ")
}

pub(crate) fn steps(
    input: &RankingInput,
    output: &[IncidentMatch],
    algorithm: Option<&AlgorithmExplanation>,
) -> Vec<DecisionStep> {
    let weights = weights(algorithm);
    let composites = composites(input, &weights);
    let n = input.candidates.len() as u64;

    vec![
        DecisionStep::draft(
            "Factor Collection",
            "Collect per-incident factor values and resolve factor weights",
            StepSnapshot::Candidates {
                candidates: input.candidates.clone(),
            },
            StepSnapshot::FactorWeights {
                weights: weights.clone(),
            },
        )
        .processing("Similarity, impact, risk and PRISM factor lookup per candidate")
        .confidence(0.85)
        .time_ms(2 + n / 10),
        DecisionStep::draft(
            "Weighted Combination",
            "Combine factor values into one composite score per incident",
            StepSnapshot::FactorWeights {
                weights: weights.clone(),
            },
            StepSnapshot::Composites { composites },
        )
        .processing(&describe_weights(&weights))
        .confidence(0.8)
        .time_ms(5 + n / 5),
        DecisionStep::draft(
            "Rank Ordering",
            "Order incidents by composite score",
            StepSnapshot::Candidates {
                candidates: input.candidates.clone(),
            },
            StepSnapshot::Matches {
                matches: output.to_vec(),
            },
        )
        .processing("Descending sort by composite score")
        .confidence(0.78)
        .time_ms(2),
    ]
}

pub(crate) fn alternatives() -> Vec<AlternativeOption> {
    vec![
        AlternativeOption::new(
            "Pure similarity ranking",
            0.6,
            "Simpler and more transparent but ignores impact and risk",
            &["Very transparent", "Fast", "Ignores incident severity"],
        ),
        AlternativeOption::new(
            "Learned ranking model",
            0.75,
            "Could fit weights to user feedback but needs labelled data",
            &["Adaptive weights", "Needs training data", "Harder to explain"],
        ),
    ]
}

pub(crate) fn warnings(input: &RankingInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.candidates.is_empty() {
        warnings.push("No candidate incidents supplied - nothing to rank".to_string());
        return warnings;
    }

    let missing_prism = input
        .candidates
        .iter()
        .filter(|c| c.prism_composite.is_none())
        .count();
    if missing_prism > 0 {
        warnings.push(format!(
            "{} candidate(s) lack PRISM scores - their composite treats PRISM as zero",
            missing_prism
        ));
    }

    let out_of_range = input
        .candidates
        .iter()
        .any(|c| c.factors().iter().any(|v| !(0.0..=1.0).contains(v)));
    if out_of_range {
        warnings.push("Factor values outside the 0-1 range may distort composite scores".to_string());
    }

    warnings
}

pub(crate) fn explanations(
    output: &[IncidentMatch],
    algorithm: Option<&AlgorithmExplanation>,
) -> Vec<String> {
    let weights = weights(algorithm)
        .iter()
        .map(|(name, w)| format!("{} {:.0}%", name, w * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    let mut explanations = vec![
        format!(
            "Ranked {} incidents by weighted composite score",
            output.len()
        ),
        format!("Composite weights: {}", weights),
    ];
    if let Some(top) = output.first() {
        explanations.push(format!(
            "Top result {} scored {:.2}",
            top.incident_id, top.score
        ));
    }
    explanations
}
