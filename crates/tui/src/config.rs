use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://n8n-latest-a738.onrender.com/webhook/Data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub endpoint_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub start_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                endpoint_url: DEFAULT_ENDPOINT.to_string(),
            },
            ui: UiConfig { start_dir: None },
        }
    }
}

impl Config {
    pub fn load(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &PathBuf) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Where the picker opens: the configured directory, else the current
    /// working directory.
    pub fn start_dir(&self) -> PathBuf {
        self.ui
            .start_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_webhook() {
        assert_eq!(Config::default().analysis.endpoint_url, DEFAULT_ENDPOINT);
    }

    #[test]
    fn parses_a_full_config_file() {
        let config: Config = toml::from_str(
            r#"
            [analysis]
            endpoint_url = "https://example.test/webhook/Data"

            [ui]
            start_dir = "/srv/hojas"
            "#,
        )
        .expect("parse config");

        assert_eq!(
            config.analysis.endpoint_url,
            "https://example.test/webhook/Data"
        );
        assert_eq!(config.ui.start_dir.as_deref(), Some("/srv/hojas"));
        assert_eq!(config.start_dir(), PathBuf::from("/srv/hojas"));
    }
}
