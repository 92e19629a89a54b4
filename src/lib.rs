//! # PRISM Lens
//!
//! Transparency layer for an AI-incident recommendation tool. It tells end
//! users why the system produced a result: which algorithm ran, what it
//! weighed, how confident it is, and how trustworthy its cited sources are.
//!
//! ## Features
//!
//! - **Algorithm Registry**: Read-only catalog of algorithm explanations
//! - **Decision Traces**: Step-by-step explanation of one algorithm invocation
//! - **Source Credibility**: 0-100 trust score for a list of cited links
//! - **PRISM Blending**: Merge a user's score correction into six-dimension PRISM scores
//! - **Transparency Report**: Limitations, data sources, metrics and ethics disclosures
//!
//! All operations are synchronous and side-effect free over catalogs loaded
//! once at startup.
//!
//! ## Example
//!
//! ```no_run
//! use prism_lens::catalog::Catalog;
//! use prism_lens::trace::{SimilarityInput, TraceGenerator, TraceRequest};
//!
//! let catalog = Catalog::builtin()?;
//! let generator = TraceGenerator::new(catalog.registry());
//! let trace = generator.generate(
//!     TraceRequest::CosineSimilarity {
//!         input: SimilarityInput { technologies: vec!["nlp".into()], purposes: vec![] },
//!         output: vec![],
//!     },
//!     None,
//! );
//! assert_eq!(trace.steps.len(), 3);
//! # Ok::<(), prism_lens::CatalogError>(())
//! ```

/// Transparency catalog and algorithm registry.
pub mod catalog;
/// Command-line interface over the core.
pub mod cli;
/// Configuration management.
pub mod config;
/// Source credibility scoring.
pub mod credibility;
/// Error types and result aliases for the application.
pub mod error;
/// PRISM scores and correction blending.
pub mod prism;
/// System transparency report assembly.
pub mod report;
/// Decision trace generation.
pub mod trace;

pub use catalog::{AlgorithmExplanation, AlgorithmRegistry, Catalog};
pub use config::Config;
pub use credibility::{CredibilityScorer, SourceLink, ValidationMetrics};
pub use error::{AppError, AppResult, CatalogError};
pub use prism::{blend_prism_scores, BlendOutcome, PrismCorrection, PrismScores};
pub use report::{SystemTransparencyReport, TransparencyReporter};
pub use trace::{DecisionTrace, TraceGenerator, TraceRequest};
