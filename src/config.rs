use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::options::TransformOptions;

pub const CONFIG_FILE_NAME: &str = ".glot-extract.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (or glob patterns of directories) to scan. Empty means the
    /// whole source root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(flatten)]
    pub transform: TransformOptions,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            transform: TransformOptions::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Glob patterns must compile, generated names must be valid identifiers
    /// and the disable marker must not be empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Only patterns with wildcards are globs, so `app/[locale]` stays valid
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let t = &self.transform;
        for (field, value) in [
            ("runtimeName", &t.runtime_name),
            ("formatFunction", &t.format_function),
            ("catalogBuilder", &t.catalog_builder),
            ("catalogIdentifier", &t.catalog_identifier),
        ] {
            if !IDENTIFIER_REGEX.is_match(value) {
                bail!("Invalid identifier in '{}': \"{}\"", field, value);
            }
        }

        if t.runtime_name == t.catalog_identifier || t.catalog_builder == t.catalog_identifier {
            bail!(
                "'catalogIdentifier' must differ from 'runtimeName' and 'catalogBuilder': \"{}\"",
                t.catalog_identifier
            );
        }

        if t.disable_marker.trim().is_empty() {
            bail!("'disableMarker' must not be empty");
        }

        for (field, value) in [
            ("runtimeModule", &t.runtime_module),
            ("catalogModule", &t.catalog_module),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors, stopping at the repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::core::script::TargetScript;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.includes.is_empty());
        assert_eq!(config.ignores, vec!["**/node_modules/**", "**/dist/**"]);
        assert!(config.ignore_test_files);
        assert_eq!(config.transform, TransformOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flattened_transform_options() {
        let json = r#"{
              "includes": ["src"],
              "ignoreTexts": ["示例"],
              "runtimeModule": "@app/i18n",
              "targetScript": "hangul"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.includes, vec!["src"]);
        assert_eq!(config.ignores, default_ignores());
        assert_eq!(config.transform.ignore_texts, vec!["示例"]);
        assert_eq!(config.transform.runtime_module, "@app/i18n");
        assert_eq!(config.transform.target_script, TargetScript::Hangul);
        assert_eq!(config.transform.runtime_name, "intl");
    }

    #[test]
    fn test_find_config_file_in_ancestor() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        assert_eq!(find_config_file(&sub_dir), Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_repository_root() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_config_file(&repo), None);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/legacy/**"], "ignoreTestFiles": false }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.ignores, vec!["**/legacy/**"]);
        assert!(!result.config.ignore_test_files);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.ignores, default_ignores());
    }

    #[test]
    fn test_load_config_with_invalid_json_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let err = load_config(dir.path()).err().unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_invalid_patterns() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("ignores"));

        let config = Config {
            includes: vec!["src/**/[invalid".to_string()],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("includes"));

        let config = Config {
            includes: vec!["app/[locale]".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_identifiers() {
        let mut config = Config::default();
        config.transform.runtime_name = "$t".to_string();
        assert!(config.validate().is_ok());

        config.transform.catalog_identifier = "i18n-messages".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("catalogIdentifier"));

        let mut config = Config::default();
        config.transform.format_function = "1format".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_catalog_identifier_is_distinct() {
        let mut config = Config::default();
        config.transform.catalog_identifier = "intl".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_disable_marker_not_empty() {
        let mut config = Config::default();
        config.transform.disable_marker = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("disableMarker"));
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"ignoreTestFiles\": true"));
        assert!(json.contains("\"catalogIdentifier\": \"i18nMessages\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.transform, TransformOptions::default());
    }
}
