//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSISTANT_BOT_*)
//! 3. `--config` file, else user config (`~/.config/assistant-bot/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigError, ConfigWarning};
pub use types::{BirthdaysConfig, ColorMode, Config, OutputConfig, StorageConfig};
