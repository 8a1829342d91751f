//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DropdownError, DropdownResult};

use super::types::{Config, EventsMode, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "multiselect.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DropdownResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DropdownError::Config {
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

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(path = %project_config.display(), "ignoring config: {}", e),
            }
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("multiselect/config.toml");
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(path = %user_config.display(), "ignoring config: {}", e),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (MULTISELECT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // MULTISELECT_FETCH_POLICY
    if let Ok(policy) = std::env::var("MULTISELECT_FETCH_POLICY") {
        match policy.parse() {
            Ok(policy) => config.fetch.policy = policy,
            Err(e) => tracing::warn!("MULTISELECT_FETCH_POLICY: {}", e),
        }
    }

    // MULTISELECT_VERBOSITY
    if let Ok(verbosity) = std::env::var("MULTISELECT_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // MULTISELECT_EVENTS
    if let Ok(events) = std::env::var("MULTISELECT_EVENTS") {
        config.output.events = match events.to_lowercase().as_str() {
            "json" => EventsMode::Json,
            "none" | "off" => EventsMode::None,
            _ => EventsMode::Tracing,
        };
    }

    config
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
    const CANDIDATES: &[&str] = &["fetch", "policy", "output", "verbosity", "events"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
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
