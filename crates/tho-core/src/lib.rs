//! Conversion between POJ (Pe̍h-ōe-jī) and Tâi-lô romanizations, in both
//! digit-tone (ASCII) and diacritic (Unicode) forms.

pub mod convert;
pub mod ipa;
pub mod letters;
pub mod normalize;
pub mod options;
pub mod orthography;
pub mod placement;
pub mod standard;
pub mod syllable;
pub mod tone;

pub use convert::*;
pub use ipa::{tailo_ascii_to_ipa, IpaToneStyle};
pub use options::{ConfigError, ConvertOptions, NormalizationForm};
pub use orthography::Orthography;
pub use standard::Standard;
pub use tone::Tone;
