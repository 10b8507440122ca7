//! Per-call conversion options, parsed from strings or TOML.
//!
//! - Options are plain values; nothing is cached between calls.
//! - `from_toml(content)` validates every field; unknown keys are rejected.
//! - Default values are embedded via `include_str!("default_options.toml")`

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::standard::Standard;

pub const DEFAULT_OPTIONS_TOML: &str = include_str!("default_options.toml");

/// Returns the embedded default options TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_OPTIONS_TOML
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown standard: {0:?} (expected \"campbell\" or no standard)")]
    UnknownStandard(String),
    #[error("unknown normalization form: {0:?} (expected NFC or NFD)")]
    UnknownNormalization(String),
    #[error("{0} would fold the POJ nasal letters; use NFC or NFD")]
    CompatibilityNormalization(String),
    #[error("unknown conversion mode: {0:?}")]
    UnknownMode(String),
    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Unicode form of the converted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum NormalizationForm {
    #[default]
    Nfc,
    Nfd,
}

impl FromStr for NormalizationForm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            form @ ("NFKC" | "NFKD") => Err(ConfigError::CompatibilityNormalization(form.to_string())),
            _ => Err(ConfigError::UnknownNormalization(s.to_string())),
        }
    }
}

impl TryFrom<String> for NormalizationForm {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationForm::Nfc => f.write_str("NFC"),
            NormalizationForm::Nfd => f.write_str("NFD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// POJ standard; absent means modern POJ.
    pub standard: Standard,
    pub normalization: NormalizationForm,
    /// Accept Tâi-lô spellings in POJ input and vice versa.
    pub foreign_letters: bool,
    /// Read a capital `N` after a lower-case vowel as the nasal `nn`.
    pub uppercase_n_nasal: bool,
    /// Under Campbell, respell POJ ASCII input (`ch`/`ts`, nasal `o`)
    /// before rendering. Placement follows Campbell either way.
    pub campbell_spelling: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            standard: Standard::Modern,
            normalization: NormalizationForm::Nfc,
            foreign_letters: false,
            uppercase_n_nasal: false,
            campbell_spelling: true,
        }
    }
}

impl ConvertOptions {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn campbell() -> Self {
        Self {
            standard: Standard::Campbell,
            ..Self::default()
        }
    }

    pub fn with_normalization(mut self, normalization: NormalizationForm) -> Self {
        self.normalization = normalization;
        self
    }
}
