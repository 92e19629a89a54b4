//! Source credibility scoring.
//!
//! Turns the links cited for an incident into a 0-100 trust score with
//! derived verification, quality and risk levels, plus warnings and
//! recommendations for the reader.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ScoringConfig, DEFAULT_STALE_AFTER_DAYS};

/// Domains with an established reputation for primary or research material.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "incidentdatabase.ai",
    "arxiv.org",
    "github.com",
    "ieee.org",
    "acm.org",
    "aiharm.org",
    "partnershiponai.org",
    "openai.com",
    "deepmind.com",
    "anthropic.com",
];

/// Recognised news outlets.
pub const NEWS_DOMAINS: &[&str] = &[
    "techcrunch.com",
    "wired.com",
    "theverge.com",
    "arstechnica.com",
    "reuters.com",
    "bbc.com",
    "cnn.com",
];

const VERIFIED_POINTS: u32 = 20;
const TRUSTED_DOMAIN_POINTS: u32 = 25;
const NEWS_DOMAIN_POINTS: u32 = 15;
const UNKNOWN_DOMAIN_POINTS: u32 = 5;

const NO_SOURCES_WARNING: &str = "No sources available";
const NO_SOURCES_RECOMMENDATION: &str = "Seek additional sources before making decisions";
const PRIMARY_SOURCE_RECOMMENDATION: &str = "Consider finding primary source documentation";
const VERIFIED_SOURCES_RECOMMENDATION: &str = "Seek additional verified sources";
const VERIFICATION_STUDY_RECOMMENDATION: &str = "Look for independent verification studies";

/// Kind of link cited for an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Source,
    Related,
    Verification,
    Documentation,
    News,
    Research,
}

impl LinkType {
    /// Points contributed by a link of this type.
    pub fn points(&self) -> u32 {
        match self {
            LinkType::Source => 30,
            LinkType::Verification => 25,
            LinkType::Research => 20,
            LinkType::Documentation => 15,
            LinkType::Related => 10,
            LinkType::News => 5,
        }
    }
}

/// A link supplied by the caller for one scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLink {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Publication date, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl SourceLink {
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }

    /// Parsed publication time, if the date is present and readable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Trust assessment of a set of cited sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    /// Normalised score in [0, 100].
    pub credibility_score: u32,
    pub verification_level: VerificationLevel,
    pub source_quality: SourceQuality,
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValidationMetrics {
    /// Fixed result for an empty link list.
    pub fn no_sources() -> Self {
        Self {
            credibility_score: 0,
            verification_level: VerificationLevel::Low,
            source_quality: SourceQuality::Poor,
            risk_level: RiskLevel::High,
            warnings: vec![NO_SOURCES_WARNING.to_string()],
            recommendations: vec![NO_SOURCES_RECOMMENDATION.to_string()],
        }
    }
}

/// Allowlists and thresholds used by the scorer.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    pub trusted_domains: Vec<String>,
    pub news_domains: Vec<String>,
    /// Sources older than this many days get an age warning.
    pub stale_after_days: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            trusted_domains: TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            news_domains: NEWS_DOMAINS.iter().map(|d| d.to_string()).collect(),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}

impl From<&ScoringConfig> for ScoringPolicy {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            stale_after_days: config.stale_after_days,
            ..Self::default()
        }
    }
}

/// Scores cited source links.
#[derive(Debug, Clone, Default)]
pub struct CredibilityScorer {
    policy: ScoringPolicy,
}

impl CredibilityScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score links against the current time.
    pub fn score(&self, links: &[SourceLink]) -> ValidationMetrics {
        self.score_at(links, Utc::now())
    }

    /// Score links with an explicit clock for the recency check.
    pub fn score_at(&self, links: &[SourceLink], now: DateTime<Utc>) -> ValidationMetrics {
        if links.is_empty() {
            return ValidationMetrics::no_sources();
        }

        let mut total: u32 = 0;
        let mut warnings = Vec::new();

        for link in links {
            if link.is_verified() {
                total += VERIFIED_POINTS;
            } else {
                warnings.push(format!("Unverified source: {}", link.title));
            }

            let domain = link.domain.as_deref().unwrap_or("");
            total += if matches_any(domain, &self.policy.trusted_domains) {
                TRUSTED_DOMAIN_POINTS
            } else if matches_any(domain, &self.policy.news_domains) {
                NEWS_DOMAIN_POINTS
            } else {
                warnings.push(format!("Unknown domain reputation: {}", domain));
                UNKNOWN_DOMAIN_POINTS
            };

            total += link.kind.points();

            if let Some(published) = link.published_at() {
                let age_days = (now - published).num_seconds() as f64 / 86_400.0;
                if age_days > self.policy.stale_after_days as f64 {
                    warnings.push(format!(
                        "Older source ({} months old): {}",
                        (age_days / 30.0).round() as i64,
                        link.title
                    ));
                }
            }
        }

        // Levels read the unrounded average; only the reported score is rounded.
        let average = (f64::from(total) / links.len() as f64).min(100.0);
        let credibility_score = average.round() as u32;

        let verification_level = match average {
            s if s >= 80.0 => VerificationLevel::High,
            s if s >= 60.0 => VerificationLevel::Medium,
            _ => VerificationLevel::Low,
        };
        let source_quality = match average {
            s if s >= 90.0 => SourceQuality::Excellent,
            s if s >= 75.0 => SourceQuality::Good,
            s if s >= 50.0 => SourceQuality::Fair,
            _ => SourceQuality::Poor,
        };
        let risk_level = if average >= 80.0 && warnings.len() <= 1 {
            RiskLevel::Low
        } else if average >= 60.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };

        let mut recommendations = Vec::new();
        if !links.iter().any(|l| l.kind == LinkType::Source) {
            recommendations.push(PRIMARY_SOURCE_RECOMMENDATION.to_string());
        }
        let verified = links.iter().filter(|l| l.is_verified()).count();
        if verified * 2 < links.len() {
            recommendations.push(VERIFIED_SOURCES_RECOMMENDATION.to_string());
        }
        if !links.iter().any(|l| l.kind == LinkType::Verification) {
            recommendations.push(VERIFICATION_STUDY_RECOMMENDATION.to_string());
        }

        debug!(
            links = links.len(),
            verified,
            credibility_score,
            warnings = warnings.len(),
            "Scored source links"
        );

        ValidationMetrics {
            credibility_score,
            verification_level,
            source_quality,
            risk_level,
            warnings,
            recommendations,
        }
    }
}

fn matches_any(domain: &str, allowlist: &[String]) -> bool {
    !domain.is_empty() && allowlist.iter().any(|entry| domain.contains(entry.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn link(kind: LinkType, domain: &str, verified: bool) -> SourceLink {
        SourceLink {
            id: format!("{}-{:?}", domain, kind),
            kind,
            title: format!("{} article", domain),
            url: format!("https://{}/item", domain),
            domain: Some(domain.to_string()),
            date: None,
            verified: Some(verified),
        }
    }

    #[test]
    fn test_empty_links_fixed_result() {
        let metrics = CredibilityScorer::default().score(&[]);
        assert_eq!(metrics, ValidationMetrics::no_sources());
        assert_eq!(metrics.credibility_score, 0);
        assert_eq!(metrics.risk_level, RiskLevel::High);
        assert_eq!(metrics.warnings, vec!["No sources available"]);
    }

    #[test]
    fn test_verified_trusted_primary_source() {
        let mut l = link(LinkType::Source, "arxiv.org", true);
        l.date = Some("2024-01-01".to_string());
        let metrics = CredibilityScorer::default().score_at(&[l], now());

        assert_eq!(metrics.credibility_score, 75);
        assert_eq!(metrics.verification_level, VerificationLevel::Medium);
        assert_eq!(metrics.source_quality, SourceQuality::Good);
        assert_eq!(metrics.risk_level, RiskLevel::Medium);
        assert!(metrics.warnings.is_empty());
        assert_eq!(
            metrics.recommendations,
            vec!["Look for independent verification studies"]
        );
    }

    #[test]
    fn test_unknown_unverified_news() {
        let metrics = CredibilityScorer::default()
            .score_at(&[link(LinkType::News, "blog.example", false)], now());
        // 0 + 5 + 5
        assert_eq!(metrics.credibility_score, 10);
        assert_eq!(metrics.source_quality, SourceQuality::Poor);
        assert_eq!(metrics.risk_level, RiskLevel::High);
        assert_eq!(
            metrics.warnings,
            vec![
                "Unverified source: blog.example article",
                "Unknown domain reputation: blog.example"
            ]
        );
        assert_eq!(metrics.recommendations.len(), 3);
    }

    #[test]
    fn test_news_domain_bonus_and_subdomain_match() {
        let metrics = CredibilityScorer::default()
            .score_at(&[link(LinkType::Verification, "www.reuters.com", true)], now());
        // 20 + 15 + 25
        assert_eq!(metrics.credibility_score, 60);
        assert!(metrics.warnings.is_empty());
    }

    #[test]
    fn test_missing_domain_is_unknown() {
        let mut l = link(LinkType::Research, "x", true);
        l.domain = None;
        let metrics = CredibilityScorer::default().score_at(&[l], now());
        assert_eq!(metrics.credibility_score, 45);
        assert_eq!(metrics.warnings, vec!["Unknown domain reputation: "]);
    }

    #[test]
    fn test_old_source_warns_without_changing_score() {
        let fresh = link(LinkType::Source, "github.com", true);
        let mut old = fresh.clone();
        old.date = Some("2022-06-01T00:00:00Z".to_string());

        let scorer = CredibilityScorer::default();
        let fresh_metrics = scorer.score_at(&[fresh], now());
        let old_metrics = scorer.score_at(&[old], now());

        assert_eq!(
            fresh_metrics.credibility_score,
            old_metrics.credibility_score
        );
        assert_eq!(old_metrics.warnings.len(), 1);
        assert_eq!(
            old_metrics.warnings[0],
            "Older source (24 months old): github.com article"
        );
    }

    #[test]
    fn test_unparseable_date_is_ignored() {
        let mut l = link(LinkType::Source, "github.com", true);
        l.date = Some("last spring".to_string());
        let metrics = CredibilityScorer::default().score_at(&[l], now());
        assert!(metrics.warnings.is_empty());
    }

    #[test]
    fn test_two_strong_sources_no_recommendations() {
        let links = vec![
            link(LinkType::Source, "incidentdatabase.ai", true),
            link(LinkType::Verification, "ieee.org", true),
        ];
        // (75 + 70) / 2 = 72.5 -> 73
        let metrics = CredibilityScorer::default().score_at(&links, now());
        assert_eq!(metrics.credibility_score, 73);
        assert_eq!(metrics.verification_level, VerificationLevel::Medium);
        assert!(metrics.recommendations.is_empty());
    }

    #[test]
    fn test_stale_threshold_from_config() {
        let policy = ScoringPolicy::from(&ScoringConfig {
            stale_after_days: 30,
        });
        let mut l = link(LinkType::Source, "github.com", true);
        l.date = Some("2024-03-01".to_string());
        let metrics = CredibilityScorer::new(policy).score_at(&[l], now());
        assert_eq!(metrics.warnings.len(), 1);
    }

    #[test]
    fn test_link_deserializes_from_caller_shape() {
        let l: SourceLink = serde_json::from_str(
            r#"{"id":"1","type":"research","title":"Paper","url":"https://arxiv.org/abs/1"}"#,
        )
        .unwrap();
        assert_eq!(l.kind, LinkType::Research);
        assert!(!l.is_verified());
        assert!(l.domain.is_none());
    }
}
