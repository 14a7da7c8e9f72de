// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! RenderConfig describes a render target and is passed around explicitly;
//! nothing in the crate reads configuration from globals.
//!
//! ```toml
//! width = 320
//! height = 240
//! clear_color = 0xFF102030
//!
//! [log]
//! level = "info"
//! file = "log/game.log"
//! ```

use crate::{
    error::{invalid, Result},
    render::color::Pixel,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// off, error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
    pub file: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        match self.level.parse::<LevelFilter>() {
            Ok(l) => Ok(l),
            Err(_) => invalid(format!("unknown log level {:?}", self.level)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_clear_color")]
    pub clear_color: Pixel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

fn default_clear_color() -> Pixel {
    Pixel::BLACK
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            clear_color: default_clear_color(),
            log: None,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: RenderConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "render size {}x{} must be positive",
                self.width, self.height
            ));
        }
        if let Some(l) = &self.log {
            l.level_filter()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelError;

    #[test]
    fn parses_full_document() {
        let cfg = RenderConfig::from_toml_str(
            r#"
            width = 160
            height = 144
            clear_color = 0xFF102030

            [log]
            level = "debug"
            file = "log/gb.log"
            "#,
        )
        .unwrap();
        assert_eq!((cfg.width, cfg.height), (160, 144));
        assert_eq!(cfg.clear_color, Pixel::rgb(0x10, 0x20, 0x30));
        let log = cfg.log.unwrap();
        assert_eq!(log.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = RenderConfig::from_toml_str("width = 8\nheight = 8").unwrap();
        assert_eq!(cfg.clear_color, Pixel::BLACK);
        assert!(cfg.log.is_none());
        assert_eq!(RenderConfig::default().width, 320);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RenderConfig::from_toml_str("width = 0\nheight = 8"),
            Err(PixelError::InvalidArgument(_))
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("width = \"wide\"\nheight = 8"),
            Err(PixelError::Config(_))
        ));
        let bad_level = "width = 1\nheight = 1\n[log]\nlevel = \"loud\"\nfile = \"x.log\"";
        assert!(RenderConfig::from_toml_str(bad_level).is_err());
    }
}
