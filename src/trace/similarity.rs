//! Trace producers for cosine similarity matching.

use super::types::{AlternativeOption, DecisionStep, IncidentMatch, SimilarityInput, StepSnapshot};

/// Tag lists longer than this dilute the similarity signal.
const MAX_FOCUSED_TECHNOLOGIES: usize = 10;
const VECTOR_DIM: u32 = 1000;
const VECTOR_SPARSITY: f64 = 0.95;
const CANDIDATE_POOL: u32 = 100;

pub(crate) fn steps(input: &SimilarityInput, output: &[IncidentMatch]) -> Vec<DecisionStep> {
    vec![
        DecisionStep::draft(
            "Input Preprocessing",
            "Extract and normalize technology tags and features",
            StepSnapshot::ProductProfile(input.clone()),
            StepSnapshot::NormalizedFeatures {
                technologies: input.technologies.clone(),
                features: "normalized".to_string(),
            },
        )
        .processing("Technology tag extraction, text tokenization")
        .confidence(0.9)
        .time_ms(5),
        DecisionStep::draft(
            "Vector Representation",
            "Convert features to numerical vectors",
            StepSnapshot::Technologies {
                technologies: input.technologies.clone(),
            },
            StepSnapshot::Vector {
                vector_dim: VECTOR_DIM,
                sparsity: VECTOR_SPARSITY,
            },
        )
        .processing("One-hot encoding, TF-IDF vectorization")
        .confidence(0.85)
        .time_ms(15),
        DecisionStep::draft(
            "Similarity Computation",
            "Calculate cosine similarity with candidate incidents",
            StepSnapshot::QueryVector {
                query_vector: "processed".to_string(),
                candidate_count: CANDIDATE_POOL,
            },
            StepSnapshot::Matches {
                matches: output.to_vec(),
            },
        )
        .processing("Cosine similarity calculation, ranking")
        .confidence(0.75)
        .time_ms(25),
    ]
}

pub(crate) fn alternatives() -> Vec<AlternativeOption> {
    vec![
        AlternativeOption::new(
            "Semantic similarity using embeddings",
            0.7,
            "Would capture deeper meaning but require more computation",
            &["Higher accuracy", "Slower performance", "More complex"],
        ),
        AlternativeOption::new(
            "Exact keyword matching",
            0.4,
            "Faster but less flexible than vector similarity",
            &["Very fast", "Limited recall", "No semantic understanding"],
        ),
    ]
}

pub(crate) fn warnings(input: &SimilarityInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.technologies.is_empty() {
        warnings.push("No technology tags provided - results may be less accurate".to_string());
    }
    if input.technologies.len() > MAX_FOCUSED_TECHNOLOGIES {
        warnings.push("Many technology tags may dilute similarity scores".to_string());
    }
    warnings
}

pub(crate) fn explanations(output: &[IncidentMatch]) -> Vec<String> {
    vec![
        format!(
            "Found {} similar incidents based on technology overlap",
            output.len()
        ),
        "Similarity scores reflect degree of shared technologies and risk domains".to_string(),
        "Higher scores indicate stronger matches with your product profile".to_string(),
    ]
}
