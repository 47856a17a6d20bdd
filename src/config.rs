use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the triage backend is served, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Default output file for `fetch`/`render`; stdout when unset.
    pub html_out: Option<String>,
    /// Mirror alerts as desktop notifications.
    pub desktop_notifications: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            html_out: None,
            desktop_notifications: Some(false),
        }
    }
}

impl Config {
    pub fn desktop_notifications(&self) -> bool {
        self.desktop_notifications.unwrap_or(false)
    }
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| Error::Config("no config dir available".into()))?
        .join("triage_dashboard"))
}

pub fn config_path() -> Result<PathBuf> {
    let mut p = config_dir()?;
    fs::create_dir_all(&p)?;
    p.push("config.toml");
    Ok(p)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load the config at `path`. A missing file is replaced by an editable
/// template and reported as an error.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let tom = toml::to_string_pretty(&Config::default())
            .map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, tom)?;
        return Err(Error::Config(format!(
            "created template config at {}, edit it and run again",
            path.display()
        )));
    }
    let s = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&s).map_err(|e| Error::Config(e.to_string()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(path.exists());

        // the template itself loads
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"https://triage.example.com\"\ndesktop_notifications = true\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.base_url, "https://triage.example.com");
        assert!(cfg.desktop_notifications());
        assert_eq!(cfg.html_out, None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [").unwrap();
        assert!(matches!(load_config_from(&path), Err(Error::Config(_))));
    }
}
