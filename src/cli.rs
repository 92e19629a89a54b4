//! Command-line interface over the transparency core.
//!
//! Every command reads JSON (from a file, or stdin when the path is `-`)
//! and prints pretty JSON on stdout.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::credibility::{CredibilityScorer, ScoringPolicy, SourceLink};
use crate::error::{AppError, AppResult};
use crate::prism::{blend_prism_scores, PrismCorrection, PrismScores};
use crate::report::TransparencyReporter;
use crate::trace::{TraceContext, TraceGenerator};

/// Explain AI-incident recommendations.
#[derive(Parser, Debug)]
#[command(name = "prism-lens", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all registered algorithm explanations
    Algorithms,

    /// Show one algorithm explanation
    Algorithm {
        /// Algorithm id, e.g. cosine-similarity
        id: String,
    },

    /// Print the full system transparency report
    Report,

    /// Score the credibility of a JSON array of source links
    ScoreSources {
        /// Path to the links file, or - for stdin
        file: PathBuf,
    },

    /// Blend a PRISM correction into existing scores
    Blend {
        /// Path to a {"original": ..., "correction": ...} file, or - for stdin
        file: PathBuf,
    },

    /// Generate a decision trace for one algorithm invocation
    Trace {
        /// Path to a {"algorithm", "input", "output", "context"} file, or - for stdin
        file: PathBuf,
    },
}

/// Input of the `blend` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendRequest {
    pub original: PrismScores,
    #[serde(default)]
    pub correction: PrismCorrection,
}

/// Input of the `trace` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFile {
    pub algorithm: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub output: serde_json::Value,
    #[serde(default)]
    pub context: Option<TraceContext>,
}

/// Result of CLI command execution.
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Execute a CLI command against a loaded catalog.
pub fn execute_command(command: Commands, catalog: &Catalog, config: &Config) -> CliResult {
    let result = match command {
        Commands::Algorithms => to_json(&catalog.registry().list()),
        Commands::Algorithm { id } => match catalog.registry().lookup(&id) {
            Some(algorithm) => to_json(algorithm),
            None => return CliResult::error(format!("Unknown algorithm: {}", id)),
        },
        Commands::Report => to_json(&TransparencyReporter::new(catalog).build_report()),
        Commands::ScoreSources { file } => execute_score_sources(&file, config),
        Commands::Blend { file } => execute_blend(&file),
        Commands::Trace { file } => execute_trace(&file, catalog),
    };

    match result {
        Ok(output) => CliResult::success(output),
        Err(e) => CliResult::error(e.to_string()),
    }
}

fn execute_score_sources(file: &Path, config: &Config) -> AppResult<String> {
    let links: Vec<SourceLink> = serde_json::from_str(&read_input(file)?)?;
    let scorer = CredibilityScorer::new(ScoringPolicy::from(&config.scoring));
    to_json(&scorer.score(&links))
}

fn execute_blend(file: &Path) -> AppResult<String> {
    let request: BlendRequest = serde_json::from_str(&read_input(file)?)?;
    to_json(&blend_prism_scores(&request.original, &request.correction))
}

fn execute_trace(file: &Path, catalog: &Catalog) -> AppResult<String> {
    let request: TraceFile = serde_json::from_str(&read_input(file)?)?;
    if request.algorithm.trim().is_empty() {
        return Err(AppError::Input {
            message: "algorithm id is required".to_string(),
        });
    }
    let trace = TraceGenerator::new(catalog.registry()).generate_raw(
        &request.algorithm,
        request.input,
        request.output,
        request.context.as_ref(),
    );
    to_json(&trace)
}

fn read_input(file: &Path) -> AppResult<String> {
    let mut raw = String::new();
    if file == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|source| AppError::Io {
                path: file.to_path_buf(),
                source,
            })?;
        return Ok(raw);
    }
    std::fs::read_to_string(file).map_err(|source| AppError::Io {
        path: file.to_path_buf(),
        source,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(command: Commands) -> CliResult {
        let catalog = Catalog::builtin().unwrap();
        execute_command(command, &catalog, &Config::default())
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["prism-lens", "algorithm", "hybrid-ranking"]).unwrap();
        assert!(matches!(cli.command, Commands::Algorithm { ref id } if id == "hybrid-ranking"));

        let cli = Cli::try_parse_from(["prism-lens", "score-sources", "-"]).unwrap();
        assert!(matches!(cli.command, Commands::ScoreSources { .. }));
    }

    #[test]
    fn test_algorithms_lists_all() {
        let result = run(Commands::Algorithms);
        assert_eq!(result.exit_code, 0);
        let listed: Vec<serde_json::Value> = serde_json::from_str(&result.message).unwrap();
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn test_unknown_algorithm_is_error() {
        let result = run(Commands::Algorithm {
            id: "nonexistent-id".to_string(),
        });
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("nonexistent-id"));
    }

    #[test]
    fn test_score_sources_from_file() {
        let file = write_temp("[]");
        let result = run(Commands::ScoreSources {
            file: file.path().to_path_buf(),
        });
        assert_eq!(result.exit_code, 0);
        let metrics: serde_json::Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(metrics["credibility_score"], 0);
        assert_eq!(metrics["risk_level"], "high");
    }

    #[test]
    fn test_blend_from_file() {
        let file = write_temp(
            r#"{
                "original": {"logical_coherence": 0.4, "factual_accuracy": 0.5,
                             "practical_implementability": 0.5, "contextual_relevance": 0.5,
                             "uniqueness": 0.5, "impact_scale": 0.5},
                "correction": {"logical_coherence": 0.8}
            }"#,
        );
        let result = run(Commands::Blend {
            file: file.path().to_path_buf(),
        });
        assert_eq!(result.exit_code, 0);
        let outcome: serde_json::Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(
            outcome["changed_dimensions"],
            serde_json::json!(["logical_coherence"])
        );
    }

    #[test]
    fn test_trace_from_file() {
        let file = write_temp(
            r#"{"algorithm": "cosine-similarity", "input": {"technologies": ["nlp"]}, "output": []}"#,
        );
        let result = run(Commands::Trace {
            file: file.path().to_path_buf(),
        });
        assert_eq!(result.exit_code, 0);
        let trace: serde_json::Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(trace["steps"].as_array().unwrap().len(), 3);
        assert_eq!(trace["confidence"], 0.75);
    }

    #[test]
    fn test_trace_requires_algorithm() {
        let file = write_temp(r#"{"algorithm": " "}"#);
        let result = run(Commands::Trace {
            file: file.path().to_path_buf(),
        });
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("algorithm id is required"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = run(Commands::Blend {
            file: PathBuf::from("/nonexistent/blend.json"),
        });
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("/nonexistent/blend.json"));
    }
}
