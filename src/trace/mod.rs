//! Decision trace generation.
//!
//! A [`TraceGenerator`] explains one invocation of one algorithm: the stages
//! it went through, what else could have been done, data-quality warnings
//! and plain-language explanations. Each supported algorithm has its own
//! producers:
//! - `cosine-similarity`: [`similarity`]
//! - `hybrid-ranking`: [`ranking`]
//! - `prism-scoring`: [`prism`]
//!
//! Unsupported algorithm ids still yield a well-formed trace with no steps.

mod prism;
mod ranking;
mod similarity;
mod types;

pub use types::*;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::AlgorithmRegistry;

/// Trace confidence when the algorithm is not in the registry.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

impl DecisionStep {
    /// Start a step; the number is assigned when the sequence is finalised.
    pub(crate) fn draft(
        name: &str,
        description: &str,
        input: StepSnapshot,
        output: StepSnapshot,
    ) -> Self {
        Self {
            step_number: 0,
            name: name.to_string(),
            description: description.to_string(),
            input,
            processing: String::new(),
            output,
            confidence: 1.0,
            time_ms: 0,
        }
    }

    pub(crate) fn processing(mut self, processing: &str) -> Self {
        self.processing = processing.to_string();
        self
    }

    pub(crate) fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub(crate) fn time_ms(mut self, time_ms: u64) -> Self {
        self.time_ms = time_ms;
        self
    }
}

/// Number steps 1..=N in order.
fn numbered(steps: Vec<DecisionStep>) -> Vec<DecisionStep> {
    steps
        .into_iter()
        .zip(1u32..)
        .map(|(mut step, n)| {
            step.step_number = n;
            step
        })
        .collect()
}

fn context_explanations(context: Option<&TraceContext>) -> Vec<String> {
    let Some(context) = context else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    if let Some(product) = context.product_name.as_deref() {
        lines.push(format!("Results are tailored to the profile of {}", product));
    }
    match context.mode {
        Some(ExplanationMode::Prism) => lines
            .push("Detailed PRISM explanations are enabled for this session".to_string()),
        Some(ExplanationMode::Generic) => lines.push(
            "Brief explanations are shown; switch to PRISM mode for per-dimension detail"
                .to_string(),
        ),
        None => {}
    }
    lines
}

/// Decode an input payload; `null` stands for an empty input.
fn decode_input<I>(input: &serde_json::Value) -> Result<I, serde_json::Error>
where
    I: DeserializeOwned + Default,
{
    if input.is_null() {
        return Ok(I::default());
    }
    serde_json::from_value(input.clone())
}

/// Decode a result payload, falling back to an empty result.
fn decode_output<O>(algorithm_id: &str, output: &serde_json::Value) -> O
where
    O: DeserializeOwned + Default,
{
    if output.is_null() {
        return O::default();
    }
    serde_json::from_value(output.clone()).unwrap_or_else(|e| {
        warn!(
            algorithm = %algorithm_id,
            error = %e,
            "Trace output does not match algorithm shape, treating it as empty"
        );
        O::default()
    })
}

/// Decode a list of matches item by item so a foreign item shape keeps its
/// place in the count.
fn decode_matches(algorithm_id: &str, output: &serde_json::Value) -> Vec<IncidentMatch> {
    match output.as_array() {
        Some(items) => items
            .iter()
            .map(|item| decode_output(algorithm_id, item))
            .collect(),
        None => decode_output(algorithm_id, output),
    }
}

impl TraceRequest {
    /// Build a typed request from an algorithm id and raw JSON payloads.
    ///
    /// Result payloads are decoded leniently. An input that does not fit the
    /// algorithm's shape is kept as [`TraceRequest::Unsupported`].
    pub fn from_parts(
        algorithm_id: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> Self {
        let decoded = match algorithm_id {
            COSINE_SIMILARITY => decode_input(&input).map(|input| TraceRequest::CosineSimilarity {
                input,
                output: decode_matches(algorithm_id, &output),
            }),
            HYBRID_RANKING => decode_input(&input).map(|input| TraceRequest::HybridRanking {
                input,
                output: decode_matches(algorithm_id, &output),
            }),
            PRISM_SCORING => decode_input(&input).map(|input| TraceRequest::PrismScoring {
                input,
                output: decode_output(algorithm_id, &output),
            }),
            _ => {
                return TraceRequest::Unsupported {
                    id: algorithm_id.to_string(),
                    input,
                    output,
                }
            }
        };

        decoded.unwrap_or_else(|e| {
            warn!(
                algorithm = %algorithm_id,
                error = %e,
                "Trace input does not match algorithm shape, explaining without steps"
            );
            TraceRequest::Unsupported {
                id: algorithm_id.to_string(),
                input,
                output,
            }
        })
    }
}

/// Produces decision traces against a shared algorithm registry.
#[derive(Debug, Clone, Copy)]
pub struct TraceGenerator<'a> {
    registry: &'a AlgorithmRegistry,
}

impl<'a> TraceGenerator<'a> {
    pub fn new(registry: &'a AlgorithmRegistry) -> Self {
        Self { registry }
    }

    /// Explain one algorithm invocation.
    pub fn generate(&self, request: TraceRequest, context: Option<&TraceContext>) -> DecisionTrace {
        let algorithm = self.registry.lookup(request.algorithm_id());
        let confidence = algorithm.map_or(FALLBACK_CONFIDENCE, |a| a.confidence);

        let (steps, alternative_options, warnings, mut explanations) = match &request {
            TraceRequest::CosineSimilarity { input, output } => (
                similarity::steps(input, output),
                similarity::alternatives(),
                similarity::warnings(input),
                similarity::explanations(output),
            ),
            TraceRequest::HybridRanking { input, output } => (
                ranking::steps(input, output, algorithm),
                ranking::alternatives(),
                ranking::warnings(input),
                ranking::explanations(output, algorithm),
            ),
            TraceRequest::PrismScoring { input, output } => (
                prism::steps(input, output),
                prism::alternatives(),
                prism::warnings(input, output),
                prism::explanations(output),
            ),
            TraceRequest::Unsupported { .. } => (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
        };
        if !matches!(request, TraceRequest::Unsupported { .. }) {
            explanations.extend(context_explanations(context));
        }

        let trace = DecisionTrace {
            id: format!("trace_{}", Uuid::new_v4()),
            timestamp: Utc::now(),
            algorithm: request.algorithm_id().to_string(),
            steps: numbered(steps),
            request,
            confidence,
            alternative_options,
            warnings,
            explanations,
        };

        debug!(
            trace_id = %trace.id,
            algorithm = %trace.algorithm,
            registered = algorithm.is_some(),
            steps = trace.steps.len(),
            warnings = trace.warnings.len(),
            "Generated decision trace"
        );

        trace
    }

    /// Explain an invocation given as raw JSON payloads.
    pub fn generate_raw(
        &self,
        algorithm_id: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        context: Option<&TraceContext>,
    ) -> DecisionTrace {
        self.generate(TraceRequest::from_parts(algorithm_id, input, output), context)
    }
}
