//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::LegacyBundlePolicy;
use crate::error::{DistpackError, DistpackResult};

use super::types::Config;

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "distpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DistpackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DistpackError::Config {
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

/// Load the project's configuration.
///
/// An explicit `config_path` must exist. Without one, `distpack.toml` in the
/// project root is used when present and built-in defaults otherwise.
/// Environment overrides are applied last.
pub fn load_for_project(
    project_root: &Path,
    config_path: Option<&Path>,
) -> DistpackResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match config_path {
        Some(path) => load_with_warnings(path)?,
        None => {
            let default_path = project_root.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                load_with_warnings(&default_path)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DISTPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DISTPACK_DIST_ROOT
    if let Some(root) = lookup("DISTPACK_DIST_ROOT").filter(|v| !v.trim().is_empty()) {
        config.dist.root = PathBuf::from(root);
    }

    // DISTPACK_PACKAGER
    if let Some(program) = lookup("DISTPACK_PACKAGER").filter(|v| !v.trim().is_empty()) {
        config.packager.program = program;
    }

    // DISTPACK_LEGACY_BUNDLE
    if let Some(policy) = lookup("DISTPACK_LEGACY_BUNDLE") {
        match LegacyBundlePolicy::parse(&policy) {
            Some(policy) => config.minify.legacy_bundle = policy,
            None => tracing::warn!(value = %policy, "ignoring invalid DISTPACK_LEGACY_BUNDLE"),
        }
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
    const CANDIDATES: &[&str] = &[
        "project",
        "ng_package",
        "tsconfig",
        "stylesheet",
        "images",
        "dist",
        "root",
        "name",
        "stylesheet_name",
        "images_dir",
        "packager",
        "program",
        "script",
        "args",
        "minify",
        "legacy_bundle",
        "load_paths",
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
