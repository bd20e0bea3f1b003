//! Expert profiles as published by the registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Role a member plays on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardRole {
    /// Leads the board, carries the elevated voting weight
    Chair,
    Expert,
}

impl BoardRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardRole::Chair => "chair",
            BoardRole::Expert => "expert",
        }
    }
}

impl fmt::Display for BoardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BoardRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chair" => Ok(BoardRole::Chair),
            "expert" => Ok(BoardRole::Expert),
            _ => Err(format!("Invalid board role: {}. Valid: chair, expert", s)),
        }
    }
}

/// A candidate board member (read-only, owned by the registry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertProfile {
    pub name: String,
    /// Expertise keywords, most significant first
    pub expertise: Vec<String>,
    /// Domain tags
    pub domains: Vec<String>,
    pub suitable_roles: BTreeSet<BoardRole>,
}

impl ExpertProfile {
    /// Create a profile suitable for the expert role only.
    pub fn new(
        name: impl Into<String>,
        expertise: impl IntoIterator<Item = impl Into<String>>,
        domains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            expertise: expertise.into_iter().map(Into::into).collect(),
            domains: domains.into_iter().map(Into::into).collect(),
            suitable_roles: BTreeSet::from([BoardRole::Expert]),
        }
    }

    /// Also allow this profile to chair a board.
    pub fn with_chair(mut self) -> Self {
        self.suitable_roles.insert(BoardRole::Chair);
        self
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = BoardRole>) -> Self {
        self.suitable_roles = roles.into_iter().collect();
        self
    }

    pub fn can_chair(&self) -> bool {
        self.suitable_roles.contains(&BoardRole::Chair)
    }

    /// Whole-tag domain match, ignoring surrounding whitespace and ASCII case
    pub fn has_domain(&self, domain: &str) -> bool {
        let domain = domain.trim();
        self.domains
            .iter()
            .any(|d| d.trim().eq_ignore_ascii_case(domain))
    }
}
