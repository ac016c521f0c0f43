use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_year() -> u32 {
    // The site currently publishes a single year of reports; discovery on
    // the landing page stays pinned to it rather than guessing from the
    // clock.
    2025
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    20
}

/// Configuration loaded from `~/.config/weeknav/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Site root the `range` command probes against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Year scanned by landing-page week discovery.
    #[serde(default = "default_year")]
    pub year: u32,
    /// Connect timeout for existence probes, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total request timeout for existence probes, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            year: default_year(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NavConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weeknav")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NavConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NavConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: NavConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:8000/");
        assert_eq!(cfg.year, 2025);
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = NavConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: NavConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.year, cfg.year);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "https://reports.example.com/weekly/"
            year = 2024
            connect_timeout_secs = 3
            request_timeout_secs = 7
        "#;
        let cfg: NavConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://reports.example.com/weekly/");
        assert_eq!(cfg.year, 2024);
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(3));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(7));
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let toml = r#"base_url = "https://reports.example.com/""#;
        let cfg: NavConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://reports.example.com/");
        assert_eq!(cfg.year, 2025);
        assert_eq!(cfg.connect_timeout_secs, 10);
    }
}
