//! Integration tests for source credibility scoring.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use prism_lens::credibility::{
    CredibilityScorer, LinkType, RiskLevel, SourceLink, SourceQuality, ValidationMetrics,
    VerificationLevel,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn clock() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn link(id: &str, kind: LinkType, domain: Option<&str>, verified: Option<bool>) -> SourceLink {
    SourceLink {
        id: id.to_string(),
        kind,
        title: format!("Link {}", id),
        url: format!("https://example.org/{}", id),
        domain: domain.map(str::to_string),
        date: None,
        verified,
    }
}

fn mixed_links() -> Vec<SourceLink> {
    let mut old = link("4", LinkType::Research, Some("acm.org"), Some(true));
    old.date = Some("2021-01-15".to_string());
    vec![
        link("1", LinkType::Source, Some("incidentdatabase.ai"), Some(true)),
        link("2", LinkType::News, Some("wired.com"), Some(false)),
        link("3", LinkType::Related, Some("someblog.net"), None),
        old,
        link("5", LinkType::Documentation, None, Some(true)),
    ]
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_list_degenerate_result() {
    let metrics = CredibilityScorer::default().score(&[]);
    assert_eq!(
        metrics,
        ValidationMetrics {
            credibility_score: 0,
            verification_level: VerificationLevel::Low,
            source_quality: SourceQuality::Poor,
            risk_level: RiskLevel::High,
            warnings: vec!["No sources available".to_string()],
            recommendations: vec!["Seek additional sources before making decisions".to_string()],
        }
    );
}

#[test]
fn test_single_verified_arxiv_source() {
    let mut l = link("a", LinkType::Source, Some("arxiv.org"), Some(true));
    l.date = Some("2024-01-01".to_string());

    let metrics = CredibilityScorer::default().score_at(&[l], clock());
    assert_eq!(metrics.credibility_score, 75);
    assert_eq!(metrics.verification_level, VerificationLevel::Medium);
    assert_eq!(metrics.source_quality, SourceQuality::Good);
    assert_eq!(metrics.risk_level, RiskLevel::Medium);
    // 425 days old
    assert_eq!(metrics.warnings, vec!["Older source (14 months old): Link a"]);
}

#[test]
fn test_mixed_links_warnings_in_encounter_order() {
    let metrics = CredibilityScorer::default().score_at(&mixed_links(), clock());

    // 75 + 20 + 15 + 65 + 40 = 215 / 5 = 43
    assert_eq!(metrics.credibility_score, 43);
    assert_eq!(metrics.verification_level, VerificationLevel::Low);
    assert_eq!(metrics.source_quality, SourceQuality::Poor);
    assert_eq!(metrics.risk_level, RiskLevel::High);
    assert_eq!(
        metrics.warnings,
        vec![
            "Unverified source: Link 2",
            "Unverified source: Link 3",
            "Unknown domain reputation: someblog.net",
            "Older source (50 months old): Link 4",
            "Unknown domain reputation: ",
        ]
    );
    assert_eq!(
        metrics.recommendations,
        vec!["Look for independent verification studies"]
    );
}

#[test]
fn test_all_recommendations_in_order() {
    let links = vec![
        link("1", LinkType::News, Some("cnn.com"), Some(false)),
        link("2", LinkType::Related, Some("bbc.com"), Some(false)),
    ];
    let metrics = CredibilityScorer::default().score_at(&links, clock());
    assert_eq!(
        metrics.recommendations,
        vec![
            "Consider finding primary source documentation",
            "Seek additional verified sources",
            "Look for independent verification studies",
        ]
    );
}

#[test]
fn test_exactly_half_verified_needs_no_more() {
    let links = vec![
        link("1", LinkType::Source, Some("github.com"), Some(true)),
        link("2", LinkType::Verification, Some("github.com"), Some(false)),
    ];
    let metrics = CredibilityScorer::default().score_at(&links, clock());
    assert!(!metrics
        .recommendations
        .contains(&"Seek additional verified sources".to_string()));
}

#[test]
fn test_levels_follow_unrounded_average() {
    // nine links worth 60 (20 + 15 + 25) and one worth 55 (20 + 25 + 10): average 59.5
    let mut links: Vec<SourceLink> = (0..9)
        .map(|i| {
            link(
                &i.to_string(),
                LinkType::Verification,
                Some("reuters.com"),
                Some(true),
            )
        })
        .collect();
    links.push(link("9", LinkType::Related, Some("github.com"), Some(true)));

    let metrics = CredibilityScorer::default().score_at(&links, clock());
    assert_eq!(metrics.credibility_score, 60);
    assert_eq!(metrics.verification_level, VerificationLevel::Low);
    assert_eq!(metrics.source_quality, SourceQuality::Fair);
    assert_eq!(metrics.risk_level, RiskLevel::High);
    assert!(metrics.warnings.is_empty());
}

#[test]
fn test_best_possible_links_score_seventy_five() {
    // verified (20) + trusted domain (25) + primary source (30)
    let links = vec![
        link("1", LinkType::Source, Some("arxiv.org"), Some(true)),
        link("2", LinkType::Source, Some("openai.com"), Some(true)),
        link("3", LinkType::Source, Some("github.com"), Some(true)),
    ];
    let metrics = CredibilityScorer::default().score_at(&links, clock());
    assert_eq!(metrics.credibility_score, 75);
    assert_eq!(metrics.source_quality, SourceQuality::Good);
    assert!(metrics.warnings.is_empty());

    let mut with_verification = links.clone();
    with_verification.push(link("4", LinkType::Verification, Some("ieee.org"), Some(true)));
    let metrics = CredibilityScorer::default().score_at(&with_verification, clock());
    // (75 * 3 + 70) / 4 = 73.75
    assert_eq!(metrics.credibility_score, 74);
    assert_eq!(metrics.risk_level, RiskLevel::Medium);
    assert!(metrics.recommendations.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_score_bounded() {
    let scorer = CredibilityScorer::default();
    let kinds = [
        LinkType::Source,
        LinkType::Related,
        LinkType::Verification,
        LinkType::Documentation,
        LinkType::News,
        LinkType::Research,
    ];
    let domains = [Some("arxiv.org"), Some("reuters.com"), Some("x.y"), None];
    for kind in kinds {
        for domain in domains {
            for verified in [Some(true), Some(false), None] {
                let metrics = scorer.score_at(&[link("p", kind, domain, verified)], clock());
                assert!(metrics.credibility_score <= 100);
            }
        }
    }
}

#[test]
fn test_permutation_invariance() {
    let scorer = CredibilityScorer::default();
    let links = mixed_links();
    let base = scorer.score_at(&links, clock());

    let mut reversed = links.clone();
    reversed.reverse();
    let mut rotated = links.clone();
    rotated.rotate_left(2);

    for permuted in [reversed, rotated] {
        let metrics = scorer.score_at(&permuted, clock());
        assert_eq!(metrics.credibility_score, base.credibility_score);
        assert_eq!(metrics.verification_level, base.verification_level);
        assert_eq!(metrics.source_quality, base.source_quality);
        assert_eq!(metrics.risk_level, base.risk_level);
        assert_eq!(metrics.recommendations, base.recommendations);
        assert_eq!(metrics.warnings.len(), base.warnings.len());
    }
}

#[test]
fn test_metrics_serialize_lowercase_levels() {
    let json = serde_json::to_value(CredibilityScorer::default().score(&[])).unwrap();
    assert_eq!(json["verification_level"], "low");
    assert_eq!(json["source_quality"], "poor");
    assert_eq!(json["risk_level"], "high");
}
