//! Board requirements inferred from a free-text question.
//!
//! [`BoardRequirements`] is produced once per consultation, either by
//! decoding a completion-service reply with [`decode_requirements`] or by
//! falling back to [`BoardRequirements::fallback`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest board the analyzer may suggest
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the analyzer may suggest
pub const MAX_BOARD_SIZE: usize = 7;

/// How involved the question is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discussion format the analyzer recommends for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFormat {
    #[default]
    Structured,
    Debate,
    Parallel,
    Funnel,
}

impl BoardFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardFormat::Structured => "structured",
            BoardFormat::Debate => "debate",
            BoardFormat::Parallel => "parallel",
            BoardFormat::Funnel => "funnel",
        }
    }
}

impl fmt::Display for BoardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured requirements for assembling an advisory board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequirements {
    /// Primary domain tag, matched case-insensitively against profile domains
    pub domain: String,
    pub complexity: Complexity,
    pub stakeholders: Vec<String>,
    /// Expertise keywords, fuzzy-matched against profile expertise
    pub expertise_areas: Vec<String>,
    /// Upper bound on the number of board members (5–7)
    pub suggested_board_size: usize,
    pub recommended_format: BoardFormat,
}

impl BoardRequirements {
    /// The fixed requirements used whenever analysis cannot produce a valid structure.
    pub fn fallback() -> Self {
        Self {
            domain: "clinical".to_string(),
            complexity: Complexity::Medium,
            stakeholders: vec![
                "clinicians".to_string(),
                "regulators".to_string(),
                "patients".to_string(),
            ],
            expertise_areas: vec![
                "clinical_research".to_string(),
                "regulatory_compliance".to_string(),
            ],
            suggested_board_size: 5,
            recommended_format: BoardFormat::Structured,
        }
    }

    /// True for high-complexity questions
    pub fn is_high_complexity(&self) -> bool {
        self.complexity == Complexity::High
    }
}

/// Why a completion reply could not be decoded into [`BoardRequirements`]
#[derive(Error, Debug, PartialEq)]
pub enum RequirementsDecodeError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("malformed requirements JSON: {0}")]
    Malformed(String),

    #[error("domain cannot be empty")]
    EmptyDomain,

    #[error("suggested board size {0} is outside 5-7")]
    BoardSizeOutOfRange(usize),
}

/// Wire shape accepted from the completion service.
///
/// Every field is required; `snake_case` aliases are accepted because
/// models drift between naming styles.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequirements {
    domain: String,
    complexity: Complexity,
    stakeholders: Vec<String>,
    #[serde(alias = "expertise_areas")]
    expertise_areas: Vec<String>,
    #[serde(alias = "suggested_board_size")]
    suggested_board_size: usize,
    #[serde(alias = "recommended_format")]
    recommended_format: BoardFormat,
}

/// Decode a free-text completion reply into [`BoardRequirements`].
///
/// The first balanced `{...}` span is decoded against the strict schema.
/// `domain` is trimmed; its case is kept and matched case-insensitively
/// against profile domains.
pub fn decode_requirements(text: &str) -> Result<BoardRequirements, RequirementsDecodeError> {
    let json = extract_json_object(text).ok_or(RequirementsDecodeError::NoJsonObject)?;
    let raw: RawRequirements = serde_json::from_str(json)
        .map_err(|e| RequirementsDecodeError::Malformed(e.to_string()))?;

    let domain = raw.domain.trim().to_string();
    if domain.is_empty() {
        return Err(RequirementsDecodeError::EmptyDomain);
    }
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&raw.suggested_board_size) {
        return Err(RequirementsDecodeError::BoardSizeOutOfRange(
            raw.suggested_board_size,
        ));
    }

    Ok(BoardRequirements {
        domain,
        complexity: raw.complexity,
        stakeholders: raw.stakeholders,
        expertise_areas: raw.expertise_areas,
        suggested_board_size: raw.suggested_board_size,
        recommended_format: raw.recommended_format,
    })
}

/// Return the first balanced `{...}` span in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) do not
/// count towards the balance.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
