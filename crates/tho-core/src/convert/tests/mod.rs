mod basic;
mod campbell;

use crate::options::{ConvertOptions, NormalizationForm};

pub(super) fn modern() -> ConvertOptions {
    ConvertOptions::default()
}

pub(super) fn campbell() -> ConvertOptions {
    ConvertOptions::campbell()
}

pub(super) fn nfd(opts: ConvertOptions) -> ConvertOptions {
    opts.with_normalization(NormalizationForm::Nfd)
}

/// Every option set the cross-orthography paths are compared under.
pub(super) fn option_grid() -> Vec<ConvertOptions> {
    vec![modern(), nfd(modern()), campbell(), nfd(campbell())]
}
