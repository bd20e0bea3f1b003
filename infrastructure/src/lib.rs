//! Infrastructure layer for expert-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod completion;
pub mod config;
pub mod engine;
pub mod registry;

// Re-export commonly used types
pub use completion::OpenAiCompletionClient;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCompletionConfig, FileConfig, FileEngineConfig,
    FileExpertConfig, FileLoggingConfig, FileOutputConfig, FilePanelConfig,
};
pub use engine::HttpExecutionEngine;
pub use registry::StaticExpertRegistry;
