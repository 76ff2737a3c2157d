// GUI configuration module
pub mod theme;

use engine::config::settings::CurrencySettings;
use engine::CurrencyFormatter;
use serde::Deserialize;

/// Mirrors `assets/config/default.json`, which is embedded at compile time.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub currency: CurrencySettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub subtitle: String,
    pub language: String,
    pub theme: String, // "dark" or "light"
    pub window_width: u32,
    pub window_height: u32,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.currency.validate()?;
        Ok(config)
    }

    pub fn formatter(&self) -> Result<CurrencyFormatter, anyhow::Error> {
        Ok(CurrencyFormatter::new(self.currency.clone())?)
    }
}
