//! Member selection: score registry profiles against board requirements.

use super::profile::ExpertProfile;
use super::requirements::BoardRequirements;
use crate::core::string::{any_overlap, fuzzy_overlaps};

/// Score awarded when a profile carries the requirement domain
pub const DOMAIN_MATCH_SCORE: u32 = 3;
/// Score awarded per expertise area a profile covers
pub const EXPERTISE_MATCH_SCORE: u32 = 2;

/// A profile that passed the inclusion filter, with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub profile: &'a ExpertProfile,
    pub score: u32,
}

/// Whether a profile is eligible at all.
///
/// Eligible when it carries the requirement domain or any of its expertise
/// overlaps any requested expertise area.
pub fn is_candidate(profile: &ExpertProfile, requirements: &BoardRequirements) -> bool {
    profile.has_domain(&requirements.domain)
        || any_overlap(&profile.expertise, &requirements.expertise_areas)
}

/// Relevance score of a profile.
///
/// +3 for the domain, +2 for every requested area covered by the profile.
pub fn score_profile(profile: &ExpertProfile, requirements: &BoardRequirements) -> u32 {
    let domain_score = if profile.has_domain(&requirements.domain) {
        DOMAIN_MATCH_SCORE
    } else {
        0
    };

    let covered = requirements
        .expertise_areas
        .iter()
        .filter(|area| profile.expertise.iter().any(|e| fuzzy_overlaps(area, e)))
        .count() as u32;

    domain_score + covered * EXPERTISE_MATCH_SCORE
}

/// Rank eligible profiles, highest score first.
///
/// The sort is stable, so equal scores keep registry order.
pub fn rank_candidates<'a>(
    requirements: &BoardRequirements,
    registry: &'a [ExpertProfile],
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = registry
        .iter()
        .filter(|p| is_candidate(p, requirements))
        .map(|profile| ScoredCandidate {
            profile,
            score: score_profile(profile, requirements),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Select the board members for the given requirements.
///
/// Returns at most `suggested_board_size` profiles; an empty result means
/// no profile matched.
pub fn select_board_members(
    requirements: &BoardRequirements,
    registry: &[ExpertProfile],
) -> Vec<ExpertProfile> {
    rank_candidates(requirements, registry)
        .into_iter()
        .take(requirements.suggested_board_size)
        .map(|c| c.profile.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::requirements::{BoardFormat, Complexity, decode_requirements};

    fn requirements(domain: &str, areas: &[&str], size: usize) -> BoardRequirements {
        BoardRequirements {
            domain: domain.to_string(),
            complexity: Complexity::Medium,
            stakeholders: vec![],
            expertise_areas: areas.iter().map(|s| s.to_string()).collect(),
            suggested_board_size: size,
            recommended_format: BoardFormat::Structured,
        }
    }

    fn names(profiles: &[ExpertProfile]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_domain_match_included() {
        let registry = vec![
            ExpertProfile::new("FDA Regulatory Expert", ["fda_submissions"], ["regulatory"]),
            ExpertProfile::new("Market Access Strategist", ["pricing"], ["market_access"]),
        ];
        let req = requirements("regulatory", &["digital_health"], 5);

        let selected = select_board_members(&req, &registry);
        assert_eq!(names(&selected), vec!["FDA Regulatory Expert"]);
    }

    #[test]
    fn test_expertise_overlap_included_without_domain() {
        let registry = vec![ExpertProfile::new(
            "Trialist",
            ["Clinical Research Design"],
            ["oncology"],
        )];
        let req = requirements("clinical", &["clinical research"], 5);

        assert_eq!(select_board_members(&req, &registry).len(), 1);
    }

    #[test]
    fn test_scoring_is_cumulative() {
        let profile = ExpertProfile::new(
            "Generalist",
            ["regulatory_compliance", "clinical_research"],
            ["clinical"],
        );
        let req = requirements(
            "clinical",
            &["clinical_research", "regulatory_compliance", "pricing"],
            5,
        );
        assert_eq!(score_profile(&profile, &req), 3 + 2 + 2);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let registry = vec![
            ExpertProfile::new("Low", ["pricing"], ["market_access"]),
            ExpertProfile::new("High", ["pricing", "fda"], ["regulatory"]),
        ];
        let req = requirements("regulatory", &["pricing", "fda"], 5);

        let selected = select_board_members(&req, &registry);
        assert_eq!(names(&selected), vec!["High", "Low"]);
    }

    #[test]
    fn test_ties_preserve_registry_order() {
        let registry = vec![
            ExpertProfile::new("First", ["a"], ["regulatory"]),
            ExpertProfile::new("Second", ["b"], ["regulatory"]),
            ExpertProfile::new("Third", ["c"], ["regulatory"]),
        ];
        let req = requirements("regulatory", &[], 5);

        let selected = select_board_members(&req, &registry);
        assert_eq!(names(&selected), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_truncated_to_board_size() {
        let registry: Vec<ExpertProfile> = (0..9)
            .map(|i| ExpertProfile::new(format!("Expert {}", i), ["x"], ["clinical"]))
            .collect();
        let req = requirements("clinical", &[], 5);

        assert_eq!(select_board_members(&req, &registry).len(), 5);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let registry = vec![ExpertProfile::new("Chef", ["cooking"], ["culinary"])];
        let req = requirements("regulatory", &["fda"], 5);

        assert!(select_board_members(&req, &registry).is_empty());
        assert!(select_board_members(&req, &[]).is_empty());
    }

    #[test]
    fn test_decoded_mixed_case_domain_selects_tagged_profile() {
        let text = r#"{"domain":"Regulatory","complexity":"medium","stakeholders":[],
            "expertiseAreas":["zzz"],"suggestedBoardSize":5,"recommendedFormat":"structured"}"#;
        let req = decode_requirements(text).unwrap();
        let registry = vec![
            ExpertProfile::new("FDA Lead", ["fda"], ["Regulatory"]).with_chair(),
            ExpertProfile::new("Payer Analyst", ["pricing"], ["regulatory"]),
            ExpertProfile::new("Market Access Strategist", ["pricing"], ["market_access"]),
        ];

        let selected = select_board_members(&req, &registry);
        assert_eq!(names(&selected), vec!["FDA Lead", "Payer Analyst"]);
        assert_eq!(score_profile(&registry[0], &req), DOMAIN_MATCH_SCORE);
    }
}
