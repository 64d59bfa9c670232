use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// API root, e.g. "http://localhost:5000/api"
    pub base_url: String,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Where tokens are kept (default: platform data dir)
    #[serde(default)]
    pub token_path: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        if config.base_url.trim().is_empty() {
            anyhow::bail!("Config field 'base_url' must not be empty");
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Determine the config file path with fallback logic
pub fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/cloudtui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("cloudtui").join("config.yaml");

        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("cloudtui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/cloudtui/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml("base_url: http://localhost:5000/api\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert!(config.token_path.is_none());
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_full_config() {
        let yaml = "base_url: https://files.example.com/api\n\
                    search_debounce_ms: 150\n\
                    token_path: /tmp/tokens.json\n\
                    vim_mode: true\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.token_path, Some(PathBuf::from("/tmp/tokens.json")));
        assert!(config.vim_mode);
    }

    #[test]
    fn test_missing_base_url_is_error() {
        assert!(Config::from_yaml("vim_mode: true\n").is_err());
        assert!(Config::from_yaml("base_url: ''\n").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let err = get_config_path(Some("/definitely/not/here.yaml".to_string())).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://127.0.0.1:5000/api\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
    }
}
