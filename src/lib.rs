//! POJ and Tâi-lô romanization conversion.
//!
//! The conversions live in `tho_core` and are re-exported here; this crate
//! adds process-level setup such as trace logging.

pub mod trace_init;

pub use tho_core::*;
