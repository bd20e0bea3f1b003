//! Configuration file loading for expert-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PANEL_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. Global: `$XDG_CONFIG_HOME/expert-panel/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCompletionConfig, FileConfig, FileEngineConfig, FileExpertConfig,
    FileLoggingConfig, FileOutputConfig, FilePanelConfig,
};
pub use loader::ConfigLoader;
