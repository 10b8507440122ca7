//! Conversion entry points.
//!
//! Every conversion decomposes its input, works on syllables of plain
//! ASCII letters and composes the result in the requested normalization
//! form. Conversions never fail: text that is not a syllable, and tones
//! that have nowhere to go, are passed through.

mod cross;
mod mode;
mod poj;
mod tailo;

#[cfg(test)]
mod tests;

pub use cross::{
    poj_ascii_to_tailo_ascii, poj_unicode_to_tailo_unicode, poj_unicode_to_tailo_unicode_cascade,
    tailo_ascii_to_poj_ascii, tailo_unicode_to_poj_unicode, tailo_unicode_to_poj_unicode_cascade,
};
pub use mode::{convert, Mode};
pub use poj::{poj_ascii_to_unicode, poj_unicode_to_ascii};
pub use tailo::{tailo_ascii_to_unicode, tailo_unicode_to_ascii};
