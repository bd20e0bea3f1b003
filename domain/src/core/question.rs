//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A free-text question put to the advisory panel (Value Object)
///
/// The same question drives requirement analysis during board composition
/// and is forwarded verbatim to the execution engine during consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
            .ok_or_else(|| DomainError::InvalidQuestion("question cannot be empty".to_string()))
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Which FDA pathway applies?");
        assert_eq!(q.content(), "Which FDA pathway applies?");
    }

    #[test]
    fn test_question_from_str() {
        let q: Question = "Which FDA pathway applies?".into();
        assert_eq!(q.to_string(), "Which FDA pathway applies?");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
    }

    #[test]
    fn test_try_from_string_rejects_blank() {
        let result = Question::try_from("  ".to_string());
        assert!(matches!(result, Err(DomainError::InvalidQuestion(_))));
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Question>(r#""""#).is_err());
        let q: Question = serde_json::from_str(r#""Is a 510(k) enough?""#).unwrap();
        assert_eq!(q.content(), "Is a 510(k) enough?");
    }
}
