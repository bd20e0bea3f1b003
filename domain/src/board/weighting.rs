//! Role and voting-weight assignment.

use super::composed::BoardMemberConfig;
use super::profile::{BoardRole, ExpertProfile};
use super::requirements::BoardRequirements;
use crate::core::string::any_overlap;

/// Voting weight of the chair, also the cap for every expert
pub const CHAIR_WEIGHT: f64 = 1.5;
/// Starting weight for an expert
pub const BASE_WEIGHT: f64 = 1.0;
/// Flat bonus when the expert covers any requested area
pub const EXPERTISE_BONUS: f64 = 0.2;
/// Bonus applied to every expert on high-complexity questions
pub const COMPLEXITY_BONUS: f64 = 0.1;

/// Voting weight for a non-chair member, always within `[1.0, 1.5]`.
pub fn calculate_voting_weight(profile: &ExpertProfile, requirements: &BoardRequirements) -> f64 {
    let mut weight = BASE_WEIGHT;

    if any_overlap(&requirements.expertise_areas, &profile.expertise) {
        weight += EXPERTISE_BONUS;
    }
    if requirements.is_high_complexity() {
        weight += COMPLEXITY_BONUS;
    }

    weight.min(CHAIR_WEIGHT)
}

/// Turn ranked profiles into board member configurations.
///
/// The top-ranked profile chairs the board when it supports the chair
/// role; nobody else is promoted, so a board has at most one chair.
pub fn assign_roles_and_weights(
    members: &[ExpertProfile],
    requirements: &BoardRequirements,
) -> Vec<BoardMemberConfig> {
    members
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            if i == 0 && profile.can_chair() {
                BoardMemberConfig {
                    persona: profile.name.clone(),
                    role: BoardRole::Chair,
                    voting_weight: CHAIR_WEIGHT,
                    expertise: profile.expertise.clone(),
                    rationale: rationale(profile, BoardRole::Chair, requirements),
                }
            } else {
                BoardMemberConfig {
                    persona: profile.name.clone(),
                    role: BoardRole::Expert,
                    voting_weight: calculate_voting_weight(profile, requirements),
                    expertise: profile.expertise.clone(),
                    rationale: rationale(profile, BoardRole::Expert, requirements),
                }
            }
        })
        .collect()
}

/// Short explanation citing the profile's top two expertise tags.
fn rationale(profile: &ExpertProfile, role: BoardRole, requirements: &BoardRequirements) -> String {
    let lead = match role {
        BoardRole::Chair => "Chairs the board",
        BoardRole::Expert => "Selected",
    };
    let top: Vec<&str> = profile.expertise.iter().take(2).map(String::as_str).collect();

    match top.as_slice() {
        [] => format!("{} for {} domain coverage", lead, requirements.domain),
        [one] => format!("{} for expertise in {}", lead, one),
        [first, second, ..] => format!("{} for expertise in {} and {}", lead, first, second),
    }
}
