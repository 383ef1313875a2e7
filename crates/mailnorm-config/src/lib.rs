use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use mailnorm_core::{SeparatorSplitter, SplitPolicy, DEFAULT_SEPARATOR};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "mailnorm";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub strict: bool,
    pub split: SplitConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    pub separator: char,
    pub policy: SplitPolicy,
}

impl SplitConfig {
    pub fn splitter(&self) -> SeparatorSplitter {
        SeparatorSplitter::new(self.separator, self.policy)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strict: false,
            split: SplitConfig {
                separator: DEFAULT_SEPARATOR,
                policy: SplitPolicy::First,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid split separator: {0:?}")]
    InvalidSeparator(String),
    #[error("invalid split policy: {0:?} (expected first|last)")]
    InvalidSplitPolicy(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    strict: Option<bool>,
    split: Option<SplitFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SplitFile {
    separator: Option<String>,
    policy: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(strict) = parsed.strict {
        config.strict = strict;
    }

    if let Some(split) = parsed.split {
        if let Some(raw) = split.separator {
            config.split.separator = parse_separator(&raw)?;
        }
        if let Some(raw) = split.policy {
            config.split.policy =
                SplitPolicy::parse(&raw).ok_or(ConfigError::InvalidSplitPolicy(raw))?;
        }
    }

    Ok(config)
}

fn parse_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_whitespace() && !ch.is_control() => Ok(ch),
        _ => Err(ConfigError::InvalidSeparator(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, parse_separator, ConfigFile, SplitFile};
    use mailnorm_core::{AddressSplitter, SplitPolicy};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            strict: Some(true),
            split: Some(SplitFile {
                separator: Some("%".to_string()),
                policy: Some("last".to_string()),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(merged.strict);
        assert_eq!(merged.split.separator, '%');
        assert_eq!(merged.split.policy, SplitPolicy::Last);
        assert_eq!(merged.split.splitter().split("a%b%c"), ("a%b", "c"));
    }

    #[test]
    fn merge_config_defaults_to_first_at() {
        let merged = merge_config(ConfigFile {
            strict: None,
            split: None,
        })
        .expect("merge");
        assert!(!merged.strict);
        assert_eq!(merged.split.separator, '@');
        assert_eq!(merged.split.policy, SplitPolicy::First);
    }

    #[test]
    fn merge_config_rejects_unknown_policy() {
        let parsed = ConfigFile {
            strict: None,
            split: Some(SplitFile {
                separator: None,
                policy: Some("middle".to_string()),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid split policy"));
    }

    #[test]
    fn parse_separator_requires_single_visible_char() {
        assert_eq!(parse_separator("@").expect("separator"), '@');
        assert!(parse_separator("").is_err());
        assert!(parse_separator("@@").is_err());
        assert!(parse_separator(" ").is_err());
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "strict = true\n[split]\npolicy = \"last\"\n").expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(config.strict);
        assert_eq!(config.split.policy, SplitPolicy::Last);
        assert_eq!(config.split.separator, '@');
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[split]\nseparators = \"@\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
