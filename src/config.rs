//! Optional JSON configuration file.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WindowConfig {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SplashConfig {
    pub(crate) enabled: bool,
    /// Seconds the splash stays fully visible
    pub(crate) hold_secs: f64,
    /// Seconds spent fading out
    pub(crate) fade_secs: f64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hold_secs: 3.0,
            fade_secs: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) window: WindowConfig,
    pub(crate) splash: SplashConfig,
    /// Prompt printed by the simulation console
    pub(crate) prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            splash: SplashConfig::default(),
            prompt: "Cropper> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or use defaults when no file was given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let WindowConfig { width, height } = self.window;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            bail!("window size must be positive, got {width}x{height}");
        }
        for (name, secs) in [
            ("hold_secs", self.splash.hold_secs),
            ("fade_secs", self.splash.fade_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                bail!("splash.{name} must be a non-negative number of seconds, got {secs}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = AppConfig::load(None).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.splash.hold_secs, 3.0);
        assert_eq!(config.window.width, 600.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "splash": { "hold_secs": 1.5 }, "prompt": "> " }"#);
        let config = AppConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.splash.hold_secs, 1.5);
        assert_eq!(config.splash.fade_secs, 0.5);
        assert!(config.splash.enabled);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = AppConfig::load(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let file = write_config("{ not json");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn rejects_bad_values() {
        let file = write_config(r#"{ "window": { "width": 0, "height": 400 } }"#);
        assert!(AppConfig::load(Some(file.path())).is_err());

        let mut config = AppConfig::default();
        config.splash.fade_secs = -1.0;
        assert!(config.validate().is_err());
    }
}
