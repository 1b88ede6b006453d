//! Typed application configuration, loaded once at startup via `confy` or an explicit TOML path.

use std::path::Path;

use serde::{Deserialize, Serialize};
use teletext::{DiacriticsMode, PageConfig};
use x26::{CaronEncoding, G2Variant, X26Config};

use crate::error::AppError;

/// `diacriticsEncoding` configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiacriticsEncoding {
    Latin2,
    X26,
}

impl Default for DiacriticsEncoding {
    fn default() -> Self {
        Self::X26
    }
}

/// `caronEncoding` configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaronEncodingOption {
    Compose,
    G2,
}

impl Default for CaronEncodingOption {
    fn default() -> Self {
        Self::Compose
    }
}

/// `g2Variant` configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum G2VariantOption {
    Default,
    Alt1,
    Alt2,
    Iso88592,
}

impl Default for G2VariantOption {
    fn default() -> Self {
        Self::Default
    }
}

fn default_magazine() -> u8 {
    0
}
fn default_page() -> u8 {
    0x01
}
fn default_start_row() -> u8 {
    19
}
fn default_caron_diacritic_index() -> u8 {
    15
}
fn default_downstream_host() -> String {
    "127.0.0.1".to_string()
}
fn default_downstream_port() -> u16 {
    7890
}
fn default_downstream_channel_layer() -> u32 {
    0
}
fn default_http_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_timecode_bind_addr() -> String {
    "0.0.0.0:7891".to_string()
}
fn default_timecode_address() -> String {
    "/time".to_string()
}

/// The full configuration surface, covering the encoder, downstream dispatcher, HTTP control
/// surface, and timecode listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub magazine: u8,
    pub page: u8,
    pub start_row: u8,
    pub diacritics_encoding: DiacriticsEncoding,
    pub caron_encoding: CaronEncodingOption,
    pub caron_diacritic_index: u8,
    pub g2_variant: G2VariantOption,
    pub downstream_host: String,
    pub downstream_port: u16,
    pub downstream_channel_layer: u32,
    pub http_bind_addr: String,
    pub timecode_bind_addr: String,
    /// Address (suffix, unless `strict_time_address`) a timecode datagram's address token must
    /// match for its reading to be accepted. Default `/time`.
    pub timecode_address: String,
    pub strict_time_address: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            magazine: default_magazine(),
            page: default_page(),
            start_row: default_start_row(),
            diacritics_encoding: DiacriticsEncoding::default(),
            caron_encoding: CaronEncodingOption::default(),
            caron_diacritic_index: default_caron_diacritic_index(),
            g2_variant: G2VariantOption::default(),
            downstream_host: default_downstream_host(),
            downstream_port: default_downstream_port(),
            downstream_channel_layer: default_downstream_channel_layer(),
            http_bind_addr: default_http_bind_addr(),
            timecode_bind_addr: default_timecode_bind_addr(),
            timecode_address: default_timecode_address(),
            strict_time_address: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path` if given, otherwise from the platform-standard `confy`
    /// location (`titler`). Falls back to defaults if no config file exists yet at either.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?
            }
            Some(_) => Self::default(),
            None => confy::load("titler", None).map_err(|e| AppError::Config(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configuration values outside the ranges documented for them, before they reach
    /// the encoder: an out-of-range `caron_diacritic_index` in particular would underflow the
    /// `u8` mode byte computed from it in the X/26 row encoder.
    fn validate(&self) -> Result<(), AppError> {
        if !(1..=15).contains(&self.caron_diacritic_index) {
            return Err(AppError::Config(format!(
                "caronDiacriticIndex must be in 1..=15, got {}",
                self.caron_diacritic_index
            )));
        }
        Ok(())
    }

    /// The downstream video-mixer's `host:port`.
    pub fn downstream_addr(&self) -> String {
        format!("{}:{}", self.downstream_host, self.downstream_port)
    }

    /// Builds the [`PageConfig`] the encoder components are constructed from.
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            magazine: self.magazine,
            page: self.page,
            start_row: self.start_row,
            diacritics_mode: match self.diacritics_encoding {
                DiacriticsEncoding::Latin2 => DiacriticsMode::Latin2,
                DiacriticsEncoding::X26 => DiacriticsMode::X26,
            },
            x26: X26Config {
                caron_encoding: match self.caron_encoding {
                    CaronEncodingOption::Compose => CaronEncoding::Compose,
                    CaronEncodingOption::G2 => CaronEncoding::G2,
                },
                caron_diacritic_index: self.caron_diacritic_index,
                g2_variant: match self.g2_variant {
                    G2VariantOption::Default => G2Variant::Default,
                    G2VariantOption::Alt1 => G2Variant::Alt1,
                    G2VariantOption::Alt2 => G2Variant::Alt2,
                    G2VariantOption::Iso88592 => G2Variant::Iso88592,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_configuration_surface() {
        let config = AppConfig::default();
        assert_eq!(config.magazine, 0);
        assert_eq!(config.page, 0x01);
        assert_eq!(config.start_row, 19);
        assert_eq!(config.diacritics_encoding, DiacriticsEncoding::X26);
        assert_eq!(config.caron_encoding, CaronEncodingOption::Compose);
        assert_eq!(config.caron_diacritic_index, 15);
        assert_eq!(config.downstream_addr(), "127.0.0.1:7890");
        assert!(!config.strict_time_address);
    }

    #[test]
    fn load_reads_an_explicit_toml_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titler.toml");
        std::fs::write(&path, "magazine = 3\npage = 2\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.magazine, 3);
        assert_eq!(config.page, 2);
        assert_eq!(config.start_row, default_start_row());
    }

    #[test]
    fn load_falls_back_to_defaults_when_explicit_path_is_missing() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/titler.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_rejects_out_of_range_caron_diacritic_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titler.toml");
        std::fs::write(&path, "caronDiacriticIndex = 0\n").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
