//! Composition output: member configurations and the composed board.

use super::profile::BoardRole;
use super::requirements::BoardRequirements;
use crate::core::string::fuzzy_overlaps;
use serde::{Deserialize, Serialize};

/// A selected member with its role and voting weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMemberConfig {
    pub persona: String,
    pub role: BoardRole,
    pub voting_weight: f64,
    pub expertise: Vec<String>,
    pub rationale: String,
}

impl BoardMemberConfig {
    pub fn is_chair(&self) -> bool {
        self.role == BoardRole::Chair
    }
}

/// The terminal artifact of board composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedBoard {
    pub name: String,
    pub members: Vec<BoardMemberConfig>,
    pub requirements: BoardRequirements,
    /// How well the members cover the requirements, in `[0.0, 1.0]`
    pub confidence: f64,
}

impl ComposedBoard {
    /// Assemble a board; name and confidence are derived from the inputs.
    pub fn new(members: Vec<BoardMemberConfig>, requirements: BoardRequirements) -> Self {
        let confidence = composition_confidence(&members, &requirements);
        Self {
            name: board_name(&requirements.domain),
            members,
            requirements,
            confidence,
        }
    }

    /// An empty board means no viable panel could be assembled.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn chair(&self) -> Option<&BoardMemberConfig> {
        self.members.iter().find(|m| m.is_chair())
    }

    pub fn total_voting_weight(&self) -> f64 {
        self.members.iter().map(|m| m.voting_weight).sum()
    }
}

/// "market_access" → "Market Access Advisory Board"
fn board_name(domain: &str) -> String {
    let words: Vec<String> = domain
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Advisory Board".to_string()
    } else {
        format!("{} Advisory Board", words.join(" "))
    }
}

/// Half area coverage, half seat fill.
///
/// Coverage is the share of requested expertise areas matched by at least
/// one member (1.0 when none were requested); fill is members over the
/// suggested size. An empty board scores 0.
fn composition_confidence(members: &[BoardMemberConfig], requirements: &BoardRequirements) -> f64 {
    if members.is_empty() {
        return 0.0;
    }

    let areas = &requirements.expertise_areas;
    let coverage = if areas.is_empty() {
        1.0
    } else {
        let covered = areas
            .iter()
            .filter(|area| {
                members
                    .iter()
                    .any(|m| m.expertise.iter().any(|e| fuzzy_overlaps(area, e)))
            })
            .count();
        covered as f64 / areas.len() as f64
    };

    let fill = if requirements.suggested_board_size == 0 {
        1.0
    } else {
        (members.len() as f64 / requirements.suggested_board_size as f64).min(1.0)
    };

    (0.5 * coverage + 0.5 * fill).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(persona: &str, role: BoardRole, expertise: &[&str]) -> BoardMemberConfig {
        BoardMemberConfig {
            persona: persona.to_string(),
            role,
            voting_weight: if role == BoardRole::Chair { 1.5 } else { 1.0 },
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            rationale: String::new(),
        }
    }

    #[test]
    fn test_board_name() {
        assert_eq!(board_name("market_access"), "Market Access Advisory Board");
        assert_eq!(board_name("regulatory"), "Regulatory Advisory Board");
        assert_eq!(board_name(""), "Advisory Board");
    }

    #[test]
    fn test_empty_board_has_zero_confidence() {
        let board = ComposedBoard::new(vec![], BoardRequirements::fallback());
        assert!(board.is_empty());
        assert_eq!(board.confidence, 0.0);
        assert!(board.chair().is_none());
    }

    #[test]
    fn test_confidence_full_coverage_partial_fill() {
        // fallback: 2 areas, board size 5
        let members = vec![
            member("A", BoardRole::Chair, &["clinical_research"]),
            member("B", BoardRole::Expert, &["regulatory_compliance"]),
        ];
        let board = ComposedBoard::new(members, BoardRequirements::fallback());
        assert!((board.confidence - (0.5 + 0.5 * 0.4)).abs() < 1e-9);
        assert_eq!(board.chair().map(|c| c.persona.as_str()), Some("A"));
        assert!((board.total_voting_weight() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_camel_case() {
        let board = ComposedBoard::new(
            vec![member("A", BoardRole::Chair, &["x"])],
            BoardRequirements::fallback(),
        );
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["members"][0]["votingWeight"], 1.5);
        assert_eq!(json["members"][0]["role"], "chair");
        assert_eq!(json["name"], "Clinical Advisory Board");
    }
}
