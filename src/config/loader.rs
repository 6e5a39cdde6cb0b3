//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{ColorMode, Config};

pub const ENV_BOOK: &str = "ASSISTANT_BOT_BOOK";
pub const ENV_BIRTHDAY_WINDOW: &str = "ASSISTANT_BOT_BIRTHDAY_WINDOW";
pub const ENV_COLOR: &str = "ASSISTANT_BOT_COLOR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {file}: {message}")]
    Invalid { file: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `explicit`, then the user config, then defaults. Environment
/// overrides are applied on top of whichever file wins.
pub fn load_or_default(explicit: Option<&Path>) -> Config {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| user_config_path().filter(|p| p.exists()));

    let config = match candidate {
        Some(path) => match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for w in &warnings {
                    tracing::warn!(
                        key = %w.key,
                        file = %w.file.display(),
                        line = ?w.line,
                        suggestion = ?w.suggestion,
                        "unknown config key"
                    );
                }
                tracing::debug!(file = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config, using defaults");
                Config::default()
            }
        },
        None => Config::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (ASSISTANT_BOT_* prefix)
fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn apply_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(path) = get_env(ENV_BOOK).filter(|p| !p.is_empty()) {
        config.storage.path = Some(PathBuf::from(path));
    }

    if let Some(window) = get_env(ENV_BIRTHDAY_WINDOW) {
        match window.trim().parse::<u32>() {
            Ok(days) => config.birthdays.window_days = days,
            Err(_) => tracing::warn!(value = %window, "ignoring invalid {ENV_BIRTHDAY_WINDOW}"),
        }
    }

    if let Some(color) = get_env(ENV_COLOR) {
        match color.trim().to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => tracing::warn!(value = %color, "ignoring invalid {ENV_COLOR}"),
        }
    }

    config
}

/// `<config dir>/assistant-bot/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|d| d.join("assistant-bot/config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "path",
        "birthdays",
        "window_days",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn apply_env_overrides_for_test(
    config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    apply_env_overrides(config, get_env)
}
