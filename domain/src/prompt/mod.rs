//! Prompt templates for requirement analysis and engine questions.

pub mod template;

pub use template::PromptTemplate;
