use std::fs;

use clap::Args;
use thokit::{ConfigError, ConvertOptions, NormalizationForm, Standard};

use super::die;

/// Conversion option flags shared by `convert` and `check`.
#[derive(Debug, Default, Args)]
pub struct OptionFlags {
    /// Options TOML file (see `thotool options export`)
    #[arg(long)]
    pub config: Option<String>,
    /// POJ standard ("campbell"; modern when absent)
    #[arg(long)]
    pub standard: Option<String>,
    /// Output normalization form (NFC or NFD)
    #[arg(long)]
    pub normalization: Option<String>,
    /// Accept the other orthography's spellings in digit-tone input
    #[arg(long)]
    pub foreign_letters: bool,
    /// Read a capital N after a lower-case vowel as the nasal
    #[arg(long)]
    pub uppercase_n: bool,
    /// Under Campbell, keep input spelling and only place tones
    #[arg(long)]
    pub no_campbell_spelling: bool,
}

impl OptionFlags {
    /// Layer the flags over `base`. Switches only turn their option on
    /// (or, for `--no-campbell-spelling`, off).
    pub fn apply(&self, mut base: ConvertOptions) -> Result<ConvertOptions, ConfigError> {
        if let Some(s) = &self.standard {
            base.standard = s.parse::<Standard>()?;
        }
        if let Some(n) = &self.normalization {
            base.normalization = n.parse::<NormalizationForm>()?;
        }
        base.foreign_letters |= self.foreign_letters;
        base.uppercase_n_nasal |= self.uppercase_n;
        if self.no_campbell_spelling {
            base.campbell_spelling = false;
        }
        Ok(base)
    }

    /// Options from `--config` (or the defaults) with the flags applied.
    /// Exits the process on unreadable or invalid configuration.
    pub fn resolve(&self) -> ConvertOptions {
        let base = match &self.config {
            Some(file) => {
                let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
                die!(ConvertOptions::from_toml(&content), "Error in {file}: {}")
            }
            None => ConvertOptions::default(),
        };
        die!(self.apply(base), "Error: {}")
    }
}

pub fn options_export() {
    print!("{}", thokit::options::default_toml());
}

pub fn options_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let opts = die!(ConvertOptions::from_toml(&content), "Error: {}");
    println!(
        "OK: standard={}, normalization={}, foreign_letters={}, uppercase_n_nasal={}, campbell_spelling={}",
        opts.standard,
        opts.normalization,
        opts.foreign_letters,
        opts.uppercase_n_nasal,
        opts.campbell_spelling
    );
}
