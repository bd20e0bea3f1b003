//! Prompt templates for the panel flow

use std::collections::BTreeMap;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the requirement analysis call
    pub fn analysis_system() -> &'static str {
        r#"You are an expert at assembling advisory boards for healthcare, life-science and regulatory strategy questions.
Analyze the user's question and describe the board that should answer it.
Respond with a single JSON object and nothing else."#
    }

    /// User prompt for the requirement analysis call
    pub fn analysis_prompt(question: &str) -> String {
        format!(
            r#"Question:
{}

Return JSON with exactly these fields:
{{
  "domain": "primary domain tag, e.g. regulatory, clinical, market_access",
  "complexity": "low | medium | high",
  "stakeholders": ["who is affected by the decision"],
  "expertiseAreas": ["snake_case expertise keywords the board must cover"],
  "suggestedBoardSize": 5,
  "recommendedFormat": "structured | debate | parallel | funnel"
}}

suggestedBoardSize must be between 5 and 7."#,
            question
        )
    }

    /// Question forwarded to the engine, with caller context appended.
    pub fn panel_question(question: &str, context: &BTreeMap<String, String>) -> String {
        if context.is_empty() {
            return question.to_string();
        }

        let mut prompt = format!("{}\n\nContext:\n", question);
        for (key, value) in context {
            prompt.push_str(&format!("- {}: {}\n", key, value));
        }
        prompt
    }
}
