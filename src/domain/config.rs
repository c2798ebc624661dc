//! Config - Application Configuration

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::policy::PolicySelections;
use crate::error::Result;
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Window and language options
    pub ui: UiConfig,
    /// Simulator start-up options
    pub simulator: SimulatorConfig,
    /// Logging options
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale code ("en", "zh"); system locale when unset
    pub locale: Option<String>,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// A configured window dimension: defaults when unusable, raised to the minimum when small
fn window_dimension(name: &str, value: f32, default: f32, min: f32) -> f32 {
    if !value.is_finite() || value <= 0.0 {
        tracing::warn!(name, value, default, "Invalid window size in config, using default");
        default
    } else if value < min {
        tracing::warn!(name, value, min, "Window size in config too small, using minimum");
        min
    } else {
        value
    }
}

impl UiConfig {
    /// Initial window size, validated
    pub fn window_size(&self) -> (f32, f32) {
        (
            window_dimension("window_width", self.window_width, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_WIDTH),
            window_dimension(
                "window_height",
                self.window_height,
                DEFAULT_WINDOW_HEIGHT,
                MIN_WINDOW_HEIGHT,
            ),
        )
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Policy package selected when the window opens
    pub initial: PolicySelections,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily log file into the data directory
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml_str(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Locale to start with: configured value first, then the system locale
    pub fn resolve_locale(&self) -> Locale {
        match self.ui.locale.as_deref().filter(|l| !l.trim().is_empty()) {
            Some(code) => Locale::from_code(code),
            None => Locale::from_code(&SystemLocale::current().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PolicyLevel;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty toml");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn partial_document() {
        let config = AppConfig::from_toml_str(
            r#"
            [ui]
            locale = "zh-CN"

            [simulator.initial]
            antitrust = "strong"

            [logging]
            file = true
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.ui.locale.as_deref(), Some("zh-CN"));
        assert_eq!(config.ui.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.simulator.initial.antitrust, PolicyLevel::Strong);
        assert_eq!(config.simulator.initial.education, PolicyLevel::Moderate);
        assert!(config.logging.file);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.resolve_locale(), Locale::ZhCN);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let result = AppConfig::from_toml_str("[simulator.initial]\nethics = \"extreme\"");
        assert!(result.is_err());
    }

    #[test]
    fn window_size_is_validated() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        ui.window_width = 0.0;
        ui.window_height = -200.0;
        assert_eq!(ui.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        ui.window_width = f32::NAN;
        ui.window_height = f32::INFINITY;
        assert_eq!(ui.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        ui.window_width = 100.0;
        ui.window_height = 50.0;
        assert_eq!(ui.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        ui.window_width = 1600.0;
        ui.window_height = 1000.0;
        assert_eq!(ui.window_size(), (1600.0, 1000.0));
    }

    #[test]
    fn zero_width_from_file_falls_back() {
        let config = AppConfig::from_toml_str("[ui]\nwindow_width = 0.0\nwindow_height = 720.0")
            .expect("valid toml");
        assert_eq!(config.ui.window_size(), (DEFAULT_WINDOW_WIDTH, 720.0));
    }

    #[test]
    fn configured_locale_wins() {
        let mut config = AppConfig::default();
        config.ui.locale = Some("en".to_string());
        assert_eq!(config.resolve_locale(), Locale::EnUS);
    }
}
