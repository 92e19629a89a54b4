//! Trace producers for PRISM multi-dimensional scoring.

use super::types::{AlternativeOption, DecisionStep, PrismScoringInput, StepSnapshot};
use crate::prism::{interpret, PrismDimension, PrismScores};

/// Dimensions that get a plain-language reading in explanations.
const EXPLAINED: [PrismDimension; 4] = [
    PrismDimension::LogicalCoherence,
    PrismDimension::FactualAccuracy,
    PrismDimension::ContextualRelevance,
    PrismDimension::ImpactScale,
];

fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

pub(crate) fn steps(input: &PrismScoringInput, output: &PrismScores) -> Vec<DecisionStep> {
    let calibration = if input.expert_annotated {
        "calibrated against expert annotations"
    } else {
        "uncalibrated"
    };
    let weighting = PrismDimension::ALL
        .iter()
        .map(|d| format!("{} {:.0}%", d.label(), d.composite_weight() * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        DecisionStep::draft(
            "Narrative Analysis",
            "Check the incident narrative for internal consistency and extract claims",
            StepSnapshot::IncidentEvidence(input.clone()),
            StepSnapshot::IncidentEvidence(input.clone()),
        )
        .processing(&format!(
            "Narrative consistency checks, claim extraction against {} external source(s)",
            input.source_count
        ))
        .confidence(0.85)
        .time_ms(20),
        DecisionStep::draft(
            "Dimension Scoring",
            "Score each of the six PRISM dimensions",
            StepSnapshot::IncidentEvidence(input.clone()),
            StepSnapshot::Scores(*output),
        )
        .processing(&format!("Rubric scoring, {}", calibration))
        .confidence(0.8)
        .time_ms(40),
        DecisionStep::draft(
            "Composite Aggregation",
            "Combine dimension scores into a composite score",
            StepSnapshot::Scores(*output),
            StepSnapshot::Composite {
                composite: output.composite(),
            },
        )
        .processing(&format!("Weighted average: {}", weighting))
        .confidence(0.78)
        .time_ms(2),
    ]
}

pub(crate) fn alternatives() -> Vec<AlternativeOption> {
    vec![
        AlternativeOption::new(
            "Single holistic quality rating",
            0.5,
            "Quicker to produce but hides which aspects are weak",
            &["Fast", "Easy to read", "No per-dimension insight"],
        ),
        AlternativeOption::new(
            "Fully expert-scored rubric",
            0.85,
            "More reliable calibration at much higher cost",
            &["Higher reliability", "Slow turnaround", "Limited scalability"],
        ),
    ]
}

pub(crate) fn warnings(input: &PrismScoringInput, output: &PrismScores) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.source_count == 0 {
        warnings.push(
            "No external sources available - factual accuracy could not be validated".to_string(),
        );
    }
    if !input.expert_annotated {
        warnings.push(
            "No expert annotation - scores are not calibrated against expert judgment".to_string(),
        );
    }
    let out_of_range = output.out_of_range();
    if !out_of_range.is_empty() {
        let names = out_of_range
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        warnings.push(format!("Scores outside the 0-1 range: {}", names));
    }
    warnings
}

pub(crate) fn explanations(output: &PrismScores) -> Vec<String> {
    let mut explanations = vec![format!(
        "Composite PRISM score: {}%",
        percent(output.composite())
    )];
    for dim in EXPLAINED {
        let score = output.get(dim);
        if let Some(reading) = interpret(dim, score) {
            explanations.push(format!("{}: {}% - {}", dim.label(), percent(score), reading));
        }
    }
    explanations
}
